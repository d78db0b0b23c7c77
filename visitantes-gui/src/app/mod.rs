pub mod config;
pub mod message;
pub mod state;
pub mod view;

use std::sync::Arc;

use iced::{task, Task};
use tracing::{error, info, warn};
use visitantes_ui::{component::toast::Level, widget::Element};

pub use config::Config;
pub use message::Message;

use crate::services::visitantes::{Registration, RegistrationError, VisitantesApi};
use state::{
    Outcome, RegistrationForm, Submission, Toast, BUTTON_LABEL, BUTTON_LABEL_LOADING,
    CONNECTION_ERROR_MESSAGE, TOAST_DURATION,
};

/// Visitor registration form: field edition, submission to the API and
/// feedback to the user.
pub struct App {
    api: Arc<dyn VisitantesApi>,
    pub form: RegistrationForm,
    pub submission: Submission,
    pub last_outcome: Option<Outcome>,
    pub toast: Option<Toast>,
    toasts_shown: u64,
    toast_timer: Option<task::Handle>,
    pending_submission: Option<task::Handle>,
}

impl App {
    pub fn new(api: Arc<dyn VisitantesApi>) -> (Self, Task<Message>) {
        let app = Self {
            api,
            form: RegistrationForm::default(),
            submission: Submission::Idle,
            last_outcome: None,
            toast: None,
            toasts_shown: 0,
            toast_timer: None,
            pending_submission: None,
        };
        (app, view::focus_first_field())
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            BUTTON_LABEL_LOADING
        } else {
            BUTTON_LABEL
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NumeroIdentificacionEdited(value) => {
                self.form.numero_identificacion.value = value;
            }
            Message::TipoIdentificacionEdited(value) => {
                self.form.tipo_identificacion.value = value;
            }
            Message::NombresEdited(value) => {
                self.form.nombres.value = value;
            }
            Message::ApellidosEdited(value) => {
                self.form.apellidos.value = value;
            }
            Message::EmpresaRepresentaEdited(value) => {
                self.form.empresa_representa.value = value;
            }
            Message::VisitorTypeSelected(visitor_type) => {
                self.form.visitor_type = Some(visitor_type);
            }
            Message::Submit => return self.submit(),
            Message::Registered(res) => return self.registered(res),
            Message::ToastExpired(id) => {
                if self.toast.as_ref().is_some_and(|t| t.id == id) {
                    self.toast = None;
                    self.toast_timer = None;
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::registration_view(self)
    }

    /// Aborts the in-flight submission and the toast timer.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending_submission.take() {
            handle.abort();
        }
        if let Some(handle) = self.toast_timer.take() {
            handle.abort();
        }
        self.submission = Submission::Idle;
        self.toast = None;
    }

    fn submit(&mut self) -> Task<Message> {
        // The button is disabled while submitting but Enter in a field is not.
        if self.is_submitting() {
            return Task::none();
        }
        self.submission = Submission::Submitting;

        let request = self.form.request();
        info!(
            "Registering visitor {} ({})",
            request.numero_identificacion, request.tipo_visitante
        );
        let api = self.api.clone();
        let (task, handle) = Task::perform(
            async move { api.register_visitor(request).await },
            Message::Registered,
        )
        .abortable();
        self.pending_submission = Some(handle);
        task
    }

    fn registered(&mut self, res: Result<Registration, RegistrationError>) -> Task<Message> {
        self.submission = Submission::Idle;
        self.pending_submission = None;

        match res {
            Ok(registration) => {
                if let Some(visitor) = &registration.visitor {
                    info!(
                        "Visitor {} registered with id {}",
                        visitor.numero_identificacion, visitor.id_visitante
                    );
                } else {
                    info!("Visitor registered");
                }
                self.last_outcome = Some(Outcome::Success);
                self.form.reset();
                self.show_toast(format!("✅ {}", registration.message), Level::Success)
            }
            Err(RegistrationError::Rejected {
                http_status,
                message,
            }) => {
                warn!("Registration rejected [{}]: {}", http_status, message);
                self.last_outcome = Some(Outcome::Failed);
                self.show_toast(format!("❌ {}", message), Level::Error)
            }
            Err(e @ RegistrationError::Transport(_)) => {
                error!("Failed to register visitor: {}", e);
                self.last_outcome = Some(Outcome::Failed);
                self.show_toast(format!("❌ {}", CONNECTION_ERROR_MESSAGE), Level::Error)
            }
        }
    }

    /// Replaces the current toast and arms its dismissal timer.
    fn show_toast(&mut self, message: String, level: Level) -> Task<Message> {
        if let Some(handle) = self.toast_timer.take() {
            handle.abort();
        }
        self.toasts_shown += 1;
        let id = self.toasts_shown;
        self.toast = Some(Toast { id, message, level });

        let (task, handle) = Task::perform(futures_timer::Delay::new(TOAST_DURATION), move |_| {
            Message::ToastExpired(id)
        })
        .abortable();
        self.toast_timer = Some(handle);
        task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::visitantes::{Visitor, VisitorRegistrationRequest, VisitorType};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::{layer::Context, prelude::*, Layer};

    /// Counts the events logged at error level.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn errors_logged(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[derive(Debug)]
    struct UnreachableApi;

    #[async_trait]
    impl VisitantesApi for UnreachableApi {
        async fn register_visitor(
            &self,
            _request: VisitorRegistrationRequest,
        ) -> Result<Registration, RegistrationError> {
            Err(RegistrationError::Transport("connection refused".to_string()))
        }
    }

    fn app() -> App {
        App::new(Arc::new(UnreachableApi)).0
    }

    fn fill(app: &mut App) {
        let _ = app.update(Message::NumeroIdentificacionEdited(" 1020304050 ".into()));
        let _ = app.update(Message::TipoIdentificacionEdited("CC".into()));
        let _ = app.update(Message::NombresEdited("Ana".into()));
        let _ = app.update(Message::ApellidosEdited("Pérez".into()));
        let _ = app.update(Message::VisitorTypeSelected(VisitorType::Business));
        let _ = app.update(Message::EmpresaRepresentaEdited("ACME".into()));
    }

    fn toast_message(app: &App) -> Option<&str> {
        app.toast.as_ref().map(|t| t.message.as_str())
    }

    #[test]
    fn starts_idle() {
        let app = app();
        assert_eq!(app.submission, Submission::Idle);
        assert_eq!(app.button_label(), "Registrar");
        assert!(!app.form.company_visible());
        assert!(app.toast.is_none());
        assert!(app.last_outcome.is_none());
    }

    #[test]
    fn visitor_type_toggles_company_field() {
        let mut app = app();
        fill(&mut app);
        assert!(app.form.company_visible());

        let _ = app.update(Message::VisitorTypeSelected(VisitorType::Personal));
        assert!(!app.form.company_visible());
        // hiding does not clear the content
        assert_eq!(app.form.empresa_representa.value, "ACME");

        let _ = app.update(Message::VisitorTypeSelected(VisitorType::Business));
        assert!(app.form.company_visible());
    }

    #[test]
    fn submit_enters_loading_state_once() {
        let mut app = app();
        fill(&mut app);

        let _ = app.update(Message::Submit);
        assert!(app.is_submitting());
        assert_eq!(app.button_label(), "Cargando...");

        // A second submit while the first one is pending does nothing.
        let _ = app.update(Message::Submit);
        assert!(app.is_submitting());
        assert!(app.toast.is_none());
    }

    #[test]
    fn success_resets_form() {
        let mut app = app();
        fill(&mut app);
        let _ = app.update(Message::Submit);

        let _ = app.update(Message::Registered(Ok(Registration {
            message: "Registered".to_string(),
            visitor: Some(Visitor {
                id_visitante: 1,
                numero_identificacion: "1020304050".to_string(),
                tipo_identificacion: "CC".to_string(),
                nombres: "Ana".to_string(),
                apellidos: "Pérez".to_string(),
                tipo_visitante: VisitorType::Business,
                empresa_representa: Some("ACME".to_string()),
                fecha_registro: None,
            }),
        })));

        assert!(!app.is_submitting());
        assert_eq!(app.button_label(), "Registrar");
        assert_eq!(app.last_outcome, Some(Outcome::Success));
        assert_eq!(app.form, RegistrationForm::default());
        assert!(!app.form.company_visible());
        assert_eq!(toast_message(&app), Some("✅ Registered"));
        assert_eq!(app.toast.as_ref().unwrap().level, Level::Success);
    }

    #[test]
    fn rejection_keeps_form() {
        let mut app = app();
        fill(&mut app);
        let before = app.form.clone();
        let _ = app.update(Message::Submit);

        let _ = app.update(Message::Registered(Err(RegistrationError::Rejected {
            http_status: 400,
            message: "Duplicate ID".to_string(),
        })));

        assert!(!app.is_submitting());
        assert_eq!(app.last_outcome, Some(Outcome::Failed));
        assert_eq!(app.form, before);
        assert_eq!(toast_message(&app), Some("❌ Duplicate ID"));
        assert_eq!(app.toast.as_ref().unwrap().level, Level::Error);
    }

    #[test]
    fn transport_failure_shows_connection_error() {
        let mut app = app();
        fill(&mut app);
        let before = app.form.clone();
        let _ = app.update(Message::Submit);

        let _ = app.update(Message::Registered(Err(RegistrationError::Transport(
            "connection refused".to_string(),
        ))));

        assert!(!app.is_submitting());
        assert_eq!(app.last_outcome, Some(Outcome::Failed));
        assert_eq!(app.form, before);
        assert_eq!(
            toast_message(&app),
            Some("❌ Error de conexión con el servidor.")
        );
    }

    #[test]
    fn transport_failure_is_logged_once() {
        let mut app = app();
        fill(&mut app);
        let _ = app.update(Message::Submit);

        let errors = errors_logged(|| {
            let _ = app.update(Message::Registered(Err(RegistrationError::Transport(
                "connection refused".to_string(),
            ))));
        });
        assert_eq!(errors, 1);
    }

    #[test]
    fn rejection_and_success_log_no_error() {
        let mut app = app();
        fill(&mut app);
        let _ = app.update(Message::Submit);
        let errors = errors_logged(|| {
            let _ = app.update(Message::Registered(Err(RegistrationError::Rejected {
                http_status: 409,
                message: "Duplicate ID".to_string(),
            })));
        });
        assert_eq!(errors, 0);

        let _ = app.update(Message::Submit);
        let errors = errors_logged(|| {
            let _ = app.update(Message::Registered(Ok(Registration {
                message: "Registered".to_string(),
                visitor: None,
            })));
        });
        assert_eq!(errors, 0);
    }

    #[test]
    fn stale_toast_timer_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Registered(Err(RegistrationError::Rejected {
            http_status: 409,
            message: "first".to_string(),
        })));
        let first = app.toast.as_ref().unwrap().id;

        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Registered(Err(RegistrationError::Rejected {
            http_status: 409,
            message: "second".to_string(),
        })));
        let second = app.toast.as_ref().unwrap().id;
        assert_ne!(first, second);

        let _ = app.update(Message::ToastExpired(first));
        assert_eq!(toast_message(&app), Some("❌ second"));

        let _ = app.update(Message::ToastExpired(second));
        assert!(app.toast.is_none());
    }

    #[test]
    fn stop_tears_down() {
        let mut app = app();
        fill(&mut app);
        let _ = app.update(Message::Submit);
        app.stop();
        assert!(!app.is_submitting());
        assert!(app.toast.is_none());
    }
}
