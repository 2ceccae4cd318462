//! Client-side core for the transform workbench: the HTTP client for the
//! remote transform service, input validation, display formatting, and the
//! per-operation request lifecycle.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    error::ApiError,
    protocol::{DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse},
};
use thiserror::Error;

pub mod format;
pub mod lifecycle;
pub mod validate;
pub mod view;

#[derive(Debug, Error)]
pub enum TransformError {
    /// The service answered with a non-success status. `detail` carries the
    /// structured failure body when the service sent one.
    #[error("{detail}")]
    Service { status: u16, detail: String },

    /// The transport or response decoding failed before a structured reply
    /// was available.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Request/response seam to the remote transform service.
///
/// The desktop app's backend worker runs against the HTTP implementation;
/// tests substitute a stub.
#[async_trait]
pub trait TransformBackend: Send + Sync {
    async fn encrypt(&self, request: &EncryptRequest) -> Result<EncryptResponse, TransformError>;
    async fn decrypt(&self, request: &DecryptRequest) -> Result<DecryptResponse, TransformError>;
}

pub struct HttpTransformClient {
    http: Client,
    server_url: String,
}

impl HttpTransformClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            http: Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    /// One POST, no retries; a failed request surfaces immediately. The
    /// non-success branch reads the body before giving up on it so the
    /// service's `detail` survives into the error.
    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, TransformError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{path}", self.server_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "transform response");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_error) => api_error.detail,
                Err(_) => format!(
                    "transform service returned {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("error")
                ),
            };
            return Err(TransformError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TransformBackend for HttpTransformClient {
    async fn encrypt(&self, request: &EncryptRequest) -> Result<EncryptResponse, TransformError> {
        self.post_json("/api/encrypt", request).await
    }

    async fn decrypt(&self, request: &DecryptRequest) -> Result<DecryptResponse, TransformError> {
        self.post_json("/api/decrypt", request).await
    }
}

#[cfg(test)]
mod tests;
