use super::{spinner, text::text};
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, row};

pub fn primary<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

/// Primary button showing a spinner in front of its label while `loading` is set.
///
/// The caller decides whether the button is pressable, a loading button is
/// usually left without `on_press` so that it renders disabled.
pub fn primary_loading<'a, T: 'a>(t: &'static str, loading: bool) -> Button<'a, T> {
    primary(loading.then(spinner::spinner), t)
}

fn content<'a, T: 'a>(icon: Option<Text<'a>>, text: Text<'a>) -> Container<'a, T> {
    match icon {
        None => container(text)
            .align_x(Horizontal::Center)
            .width(iced::Length::Fill)
            .padding(5),
        Some(i) => container(row![i, text].spacing(10).align_y(Vertical::Center))
            .align_x(Horizontal::Center)
            .width(iced::Length::Fill)
            .padding(5),
    }
}
