use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub menus: Menus,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

/// Toast colors, one per notification level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

/// Dropdown list of a pick list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Menus {
    pub primary: MenuPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MenuPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub selected_background: iced::Color,
    pub selected_text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::WHITE,
                foreground: color::WHITE,
                scrollable: color::GREY_2,
            },
            text: Text {
                primary: color::LIGHT_BLACK,
                secondary: color::GREY_3,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_BLUE,
                        text: color::WHITE,
                        border: color::LIGHT_BLUE.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT_BLUE,
                        text: color::WHITE,
                        border: color::TRANSPARENT_BLUE.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::LIGHT_BLACK,
                        border: color::BLUE.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_2.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::GREEN,
                    text: color::WHITE.into(),
                    border: None,
                },
                error: ContainerPalette {
                    background: color::RED,
                    text: color::WHITE.into(),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::GREY_2.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_2,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::GREY_6,
                        selection: color::TRANSPARENT_BLUE,
                        border: color::GREY_2.into(),
                    },
                },
            },
            menus: Menus {
                primary: MenuPalette {
                    background: color::WHITE,
                    text: color::LIGHT_BLACK,
                    selected_background: color::TRANSPARENT_BLUE,
                    selected_text: color::BLUE,
                    border: color::GREY_2.into(),
                },
            },
        }
    }
}
