use std::time::Duration;

use visitantes_ui::component::{form, toast};

use crate::services::visitantes::{VisitorRegistrationRequest, VisitorType};

pub const BUTTON_LABEL: &str = "Registrar";
pub const BUTTON_LABEL_LOADING: &str = "Cargando...";
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión con el servidor.";

pub const TOAST_DURATION: Duration = Duration::from_millis(3500);

/// Lifecycle of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
}

/// How the last submission attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: toast::Level,
}

impl toast::Toast for Toast {
    fn body(&self) -> &str {
        &self.message
    }

    fn level(&self) -> toast::Level {
        self.level
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub numero_identificacion: form::Value<String>,
    pub tipo_identificacion: form::Value<String>,
    pub nombres: form::Value<String>,
    pub apellidos: form::Value<String>,
    pub empresa_representa: form::Value<String>,
    pub visitor_type: Option<VisitorType>,
}

impl RegistrationForm {
    /// The company field is only shown for business visitors.
    pub fn company_visible(&self) -> bool {
        self.visitor_type.is_some_and(|t| t.is_business())
    }

    /// Builds the payload from the current fields, trimmed.
    ///
    /// No selection counts as a personal visitor and an empty company is sent
    /// as `null`.
    pub fn request(&self) -> VisitorRegistrationRequest {
        let empresa = self.empresa_representa.trimmed();
        VisitorRegistrationRequest {
            numero_identificacion: self.numero_identificacion.trimmed().to_string(),
            tipo_identificacion: self.tipo_identificacion.trimmed().to_string(),
            nombres: self.nombres.trimmed().to_string(),
            apellidos: self.apellidos.trimmed().to_string(),
            tipo_visitante: match self.visitor_type {
                Some(VisitorType::Business) => VisitorType::Business,
                _ => VisitorType::Personal,
            },
            empresa_representa: (!empresa.is_empty()).then(|| empresa.to_string()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(s: &str) -> form::Value<String> {
        form::Value {
            value: s.to_string(),
        }
    }

    fn filled() -> RegistrationForm {
        RegistrationForm {
            numero_identificacion: value("  1020304050 "),
            tipo_identificacion: value("\tCC"),
            nombres: value(" Ana María"),
            apellidos: value("Pérez Gómez  "),
            empresa_representa: value("  ACME S.A.S.  "),
            visitor_type: Some(VisitorType::Business),
        }
    }

    #[test]
    fn request_trims_every_field() {
        let request = filled().request();
        assert_eq!(
            request,
            VisitorRegistrationRequest {
                numero_identificacion: "1020304050".to_string(),
                tipo_identificacion: "CC".to_string(),
                nombres: "Ana María".to_string(),
                apellidos: "Pérez Gómez".to_string(),
                tipo_visitante: VisitorType::Business,
                empresa_representa: Some("ACME S.A.S.".to_string()),
            }
        );
    }

    #[test]
    fn request_visitor_type() {
        let mut form = filled();
        assert_eq!(form.request().tipo_visitante, VisitorType::Business);

        form.visitor_type = Some(VisitorType::Personal);
        assert_eq!(form.request().tipo_visitante, VisitorType::Personal);

        form.visitor_type = None;
        assert_eq!(form.request().tipo_visitante, VisitorType::Personal);
    }

    #[test]
    fn request_blank_company_is_null() {
        let mut form = filled();
        form.empresa_representa = value("   \t ");
        assert_eq!(form.request().empresa_representa, None);

        form.empresa_representa = value("");
        assert_eq!(form.request().empresa_representa, None);
    }

    #[test]
    fn request_keeps_company_of_hidden_field() {
        let mut form = filled();
        form.visitor_type = Some(VisitorType::Personal);
        assert!(!form.company_visible());
        assert_eq!(
            form.request().empresa_representa.as_deref(),
            Some("ACME S.A.S.")
        );
    }

    #[test]
    fn company_visibility() {
        let mut form = RegistrationForm::default();
        assert!(!form.company_visible());
        form.visitor_type = Some(VisitorType::Business);
        assert!(form.company_visible());
        form.visitor_type = Some(VisitorType::Personal);
        assert!(!form.company_visible());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, RegistrationForm::default());
        assert!(!form.company_visible());
    }
}
