use async_trait::async_trait;
use reqwest::StatusCode;

use super::api::{RegistrationResponse, Visitor, VisitorRegistrationRequest};
use super::VisitantesApi;
use crate::services::http::ResponseExt;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const VISITANTES_ENDPOINT: &str = "/api/visitantes";

/// Shown when the API declined the registration without saying why.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido.";
/// Shown when the API accepted the registration without a message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Visitante registrado.";

/// A registration accepted by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub message: String,
    pub visitor: Option<Visitor>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrationError {
    /// The API answered but declined the registration.
    #[error("{message}")]
    Rejected { http_status: u16, message: String },
    /// The request did not complete or its answer could not be read.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for RegistrationError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

/// Decides the outcome of a registration from the HTTP status and the decoded body.
///
/// A registration succeeds only if the status is a success and the body says
/// so. Otherwise the API's `error` is preferred over its `message`.
pub fn interpret(
    status: StatusCode,
    response: RegistrationResponse,
) -> Result<Registration, RegistrationError> {
    if status.is_success() && response.is_success() {
        return Ok(Registration {
            message: response
                .message
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            visitor: response.data,
        });
    }

    Err(RegistrationError::Rejected {
        http_status: status.as_u16(),
        message: response
            .error
            .filter(|e| !e.is_empty())
            .or(response.message.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
    })
}

#[derive(Debug, Clone)]
pub struct VisitantesClient {
    http: reqwest::Client,
    base_url: String,
}

impl VisitantesClient {
    pub fn new(base_url: String) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, VISITANTES_ENDPOINT)
    }
}

impl Default for VisitantesClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string())
    }
}

#[async_trait]
impl VisitantesApi for VisitantesClient {
    async fn register_visitor(
        &self,
        request: VisitorRegistrationRequest,
    ) -> Result<Registration, RegistrationError> {
        let url = self.endpoint();
        tracing::debug!("POST {}", url);

        let (status, response) = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?
            .status_and_json::<RegistrationResponse>()
            .await?;

        tracing::debug!("Registration answered with status {}", status);
        interpret(status, response)
    }
}
