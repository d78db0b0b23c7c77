use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

#[async_trait]
pub trait ResponseExt {
    /// Returns the status of the response along with its JSON body, whatever
    /// the status is. The API answers errors with a JSON body as well.
    async fn status_and_json<T>(self) -> Result<(StatusCode, T), reqwest::Error>
    where
        Self: Sized,
        T: DeserializeOwned + Send;
}

#[async_trait]
impl ResponseExt for Response {
    async fn status_and_json<T>(self) -> Result<(StatusCode, T), reqwest::Error>
    where
        T: DeserializeOwned + Send,
    {
        let status = self.status();
        let body = self.json::<T>().await?;
        Ok((status, body))
    }
}
