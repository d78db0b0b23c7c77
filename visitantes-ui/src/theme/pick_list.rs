use iced::{
    widget::pick_list::{Catalog, Status, Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let palette = match status {
        Status::Active => theme.colors.buttons.secondary.active,
        Status::Hovered | Status::Opened => theme.colors.buttons.secondary.hovered,
    };
    Style {
        text_color: palette.text,
        placeholder_color: theme.colors.text.secondary,
        background: palette.background.into(),
        border: if let Some(color) = palette.border {
            Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                ..Default::default()
            }
        },
        handle_color: palette.text,
    }
}
