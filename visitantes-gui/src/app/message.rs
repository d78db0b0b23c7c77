use crate::services::visitantes::{Registration, RegistrationError, VisitorType};

#[derive(Debug, Clone)]
pub enum Message {
    // Form fields
    NumeroIdentificacionEdited(String),
    TipoIdentificacionEdited(String),
    NombresEdited(String),
    ApellidosEdited(String),
    EmpresaRepresentaEdited(String),
    VisitorTypeSelected(VisitorType),

    // Submission
    Submit,
    Registered(Result<Registration, RegistrationError>),

    // Toast auto-dismiss, carries the id of the toast it was armed for.
    ToastExpired(u64),
}
