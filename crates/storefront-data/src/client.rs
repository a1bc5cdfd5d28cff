//! Platform fetch client.

use serde::de::DeserializeOwned;
use storefront_core::RequestId;

use crate::envelope::{ApiResponse, Page};

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Outbound JSON fetch client.
///
/// One fetch per call: no retry, no timeout wrapper, no caching across
/// requests. Failures surface as `FetchError` for the caller to log.
pub struct FetchClient {
    request_id: RequestId,
}

impl FetchClient {
    /// Create a new fetch client.
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    /// GET a URL and deserialize the JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let req = spin_sdk::http::Request::get(url);
        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = resp.status();
        if *status >= 400 {
            return Err(FetchError::Http {
                status: *status,
                url: url.to_string(),
            });
        }

        serde_json::from_slice(resp.body())
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    /// GET a singular endpoint and unwrap the `result` envelope.
    pub async fn fetch_result<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp: ApiResponse<T> = self.fetch(url).await?;
        Ok(resp.into_result())
    }

    /// GET a list endpoint and unwrap `result.content`.
    pub async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, FetchError> {
        let resp: ApiResponse<Page<T>> = self.fetch(url).await?;
        Ok(resp.into_result().content)
    }

    /// Get the request ID this client is scoped to.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}
