use iced::{
    alignment::Horizontal,
    widget::{pick_list, scrollable, Space},
    Length, Task,
};
use visitantes_ui::{
    component::{button, form, text, toast},
    theme,
    widget::*,
};

use super::{App, Message};
use crate::services::visitantes::VisitorType;

pub const NUMERO_IDENTIFICACION_ID: &str = "numero_identificacion";
pub const TIPO_IDENTIFICACION_ID: &str = "tipo_identificacion";
pub const NOMBRES_ID: &str = "nombres";
pub const APELLIDOS_ID: &str = "apellidos";
pub const EMPRESA_REPRESENTA_ID: &str = "empresa_representa";

pub fn focus_first_field() -> Task<Message> {
    text_input::focus(text_input::Id::new(NUMERO_IDENTIFICACION_ID))
}

pub fn registration_view(app: &App) -> Element<'_, Message> {
    let submitting = app.is_submitting();

    let visitor_type = Column::new()
        .push(text::p2_medium("Tipo de visitante"))
        .push(
            pick_list(
                VisitorType::ALL,
                app.form.visitor_type,
                Message::VisitorTypeSelected,
            )
            .placeholder("Seleccione el tipo de visitante")
            .width(Length::Fill)
            .padding(10),
        )
        .spacing(5);

    let empresa_field = app.form.company_visible().then(|| {
        field(
            "Empresa que representa",
            EMPRESA_REPRESENTA_ID,
            &app.form.empresa_representa,
            Message::EmpresaRepresentaEdited,
        )
    });

    let submit_btn = button::primary_loading(app.button_label(), submitting)
        .on_press_maybe((!submitting).then_some(Message::Submit))
        .width(Length::Fill)
        .padding(5);

    let content = Column::new()
        .push(text::h2("Registro de visitantes"))
        .push(text::p1_regular("Ingrese los datos del visitante").style(theme::text::secondary))
        .push(Space::with_height(10))
        .push(field(
            "Número de identificación",
            NUMERO_IDENTIFICACION_ID,
            &app.form.numero_identificacion,
            Message::NumeroIdentificacionEdited,
        ))
        .push(field(
            "Tipo de identificación",
            TIPO_IDENTIFICACION_ID,
            &app.form.tipo_identificacion,
            Message::TipoIdentificacionEdited,
        ))
        .push(field(
            "Nombres",
            NOMBRES_ID,
            &app.form.nombres,
            Message::NombresEdited,
        ))
        .push(field(
            "Apellidos",
            APELLIDOS_ID,
            &app.form.apellidos,
            Message::ApellidosEdited,
        ))
        .push(visitor_type)
        .push_maybe(empresa_field)
        .push(Space::with_height(10))
        .push(submit_btn)
        .spacing(15)
        .max_width(520.0);

    let page = Container::new(scrollable(
        Container::new(
            Container::new(content)
                .padding(30)
                .style(theme::card::simple),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(40),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(theme::container::background);

    let toasts = app
        .toast
        .iter()
        .map(|t| toast::toast(t).into())
        .collect();

    toast::Manager::new(page, toasts).into()
}

/// Labelled text input, Enter submits the form.
fn field<'a>(
    label: &'static str,
    id: &'static str,
    value: &form::Value<String>,
    on_change: fn(String) -> Message,
) -> form::Form<'a, Message> {
    form::Form::new(label, value, on_change)
        .label(label)
        .id(id)
        .on_submit(Message::Submit)
        .size(text::P1_SIZE)
        .padding(10)
}
