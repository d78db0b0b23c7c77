use iced::Length;

use crate::{component::text, theme, widget::*};

#[derive(Debug, Clone, PartialEq)]
pub struct Value<T> {
    pub value: T,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
        }
    }
}

impl Value<String> {
    /// The value stripped of leading and trailing whitespace.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    label: Option<&'a str>,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, &value.value)
                .on_input(on_change)
                .style(theme::text_input::primary),
            label: None,
        }
    }

    /// Sets the label displayed above the input.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Sets the widget id of the input, used to focus it.
    pub fn id(mut self, id: &'static str) -> Self {
        self.input = self.input.id(text_input::Id::new(id));
        self
    }

    /// Sets the message produced when the user presses Enter in the input.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push_maybe(form.label.map(text::p2_medium))
                .push(form.input)
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
