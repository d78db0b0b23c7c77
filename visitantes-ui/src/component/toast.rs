//! Transient notifications stacked over the application content.

use iced::alignment::{Horizontal, Vertical};
use iced::Length;

use crate::{component::text, theme, widget::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

pub trait Toast {
    fn body(&self) -> &str;
    fn level(&self) -> Level;
}

/// Renders a single toast with the style of its level.
pub fn toast<'a, T: 'a>(t: &impl Toast) -> Container<'a, T> {
    let style = match t.level() {
        Level::Success => theme::notification::success,
        Level::Error => theme::notification::error,
    };
    Container::new(text::p1_bold(t.body().to_string()))
        .padding([12, 20])
        .max_width(420.0)
        .style(style)
}

/// Lays the toasts out in the bottom right corner, on top of the content.
pub struct Manager<'a, Message> {
    content: Element<'a, Message>,
    toasts: Vec<Element<'a, Message>>,
}

impl<'a, Message: 'a> Manager<'a, Message> {
    pub fn new(
        content: impl Into<Element<'a, Message>>,
        toasts: Vec<Element<'a, Message>>,
    ) -> Self {
        Self {
            content: content.into(),
            toasts,
        }
    }
}

impl<'a, Message: 'a> From<Manager<'a, Message>> for Element<'a, Message> {
    fn from(manager: Manager<'a, Message>) -> Self {
        if manager.toasts.is_empty() {
            return manager.content;
        }

        let toasts = Container::new(
            Column::with_children(manager.toasts)
                .spacing(10)
                .align_x(iced::Alignment::End),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(20);

        Stack::new()
            .push(manager.content)
            .push(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
