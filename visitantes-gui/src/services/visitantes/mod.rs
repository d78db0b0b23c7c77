pub mod api;
pub mod client;

pub use api::*;
pub use client::*;

use async_trait::async_trait;

/// Registration service of the visitors API.
#[async_trait]
pub trait VisitantesApi: std::fmt::Debug + Send + Sync {
    async fn register_visitor(
        &self,
        request: VisitorRegistrationRequest,
    ) -> Result<Registration, RegistrationError>;
}
