pub use iced::widget::overlay::menu::Catalog;
use iced::{
    widget::overlay::menu::{Style, StyleFn},
    Border,
};

use super::palette::MenuPalette;
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>) -> Style {
        class(self)
    }
}

pub fn primary(theme: &Theme) -> Style {
    menu(&theme.colors.menus.primary)
}

fn menu(p: &MenuPalette) -> Style {
    Style {
        text_color: p.text,
        background: p.background.into(),
        selected_text_color: p.selected_text,
        selected_background: p.selected_background.into(),
        border: Border {
            radius: 5.0.into(),
            width: if p.border.is_some() { 1.0 } else { 0.0 },
            color: p.border.unwrap_or(iced::Color::TRANSPARENT),
        },
    }
}
