use crate::{component::text, theme, widget::Text};

pub fn spinner<'a>() -> Text<'a> {
    text::p1_regular("⏳").style(theme::text::secondary)
}
