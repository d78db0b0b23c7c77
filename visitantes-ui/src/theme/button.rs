use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

fn border(color: Option<Color>) -> Border {
    if let Some(color) = color {
        Border {
            radius: 25.0.into(),
            width: 1.0,
            color,
        }
    } else {
        Border::default()
    }
}

fn styled(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: border(p.border),
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => styled(&p.active),
        Status::Hovered => styled(&p.hovered),
        Status::Pressed => p
            .pressed
            .as_ref()
            .map(styled)
            .unwrap_or_else(|| button(p, Status::Active)),
        Status::Disabled => {
            if let Some(disabled) = p.disabled {
                Style {
                    text_color: Color {
                        a: 0.6,
                        ..disabled.text
                    },
                    ..styled(&disabled)
                }
            } else {
                let active: Style = button(p, Status::Active);

                Style {
                    text_color: Color {
                        a: 0.2,
                        ..active.text_color
                    },
                    ..active
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_primary_uses_disabled_palette() {
        let theme = <Theme as Default>::default();
        let style = primary(&theme, Status::Disabled);
        let disabled = theme.colors.buttons.primary.disabled.unwrap();
        assert_eq!(style.background, Some(Background::Color(disabled.background)));
        assert!(style.text_color.a < 1.0);
    }

    #[test]
    fn pressed_falls_back_to_active() {
        let theme = <Theme as Default>::default();
        let pressed = button(&theme.colors.buttons.secondary, Status::Pressed);
        let active = button(&theme.colors.buttons.secondary, Status::Active);
        assert_eq!(pressed.background, active.background);
        assert_eq!(pressed.text_color, active.text_color);
    }
}
