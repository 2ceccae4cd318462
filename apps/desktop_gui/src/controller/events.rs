//! Events flowing from the backend worker to the UI, and the failure
//! modeling for completed transform requests.

use client_core::TransformError;
use shared::protocol::{DecryptResponse, EncryptResponse};

/// Completion events; exactly one arrives per dispatched command.
#[derive(Debug)]
pub enum UiEvent {
    EncryptFinished(Result<EncryptResponse, RequestFailure>),
    DecryptFinished(Result<DecryptResponse, RequestFailure>),
    WorkerStartupFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Non-success status from the service, carrying its structured detail.
    Service,
    /// The transport or response decoding failed before a structured reply
    /// was available.
    Transport,
}

/// A terminal request failure, already rendered displayable. Validation
/// failures never reach this type; they are reported before any request is
/// constructed.
#[derive(Debug, Clone)]
pub struct RequestFailure {
    category: FailureCategory,
    message: String,
}

impl RequestFailure {
    pub fn category(&self) -> FailureCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner text: the server's detail verbatim for service failures,
    /// the transport error text behind a generic prefix otherwise.
    pub fn notification_text(&self) -> String {
        match self.category {
            FailureCategory::Service => format!("Error: {}", self.message),
            FailureCategory::Transport => format!("Request failed: {}", self.message),
        }
    }
}

impl From<TransformError> for RequestFailure {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Service { detail, .. } => Self {
                category: FailureCategory::Service,
                message: detail,
            },
            TransformError::Transport(err) => Self {
                category: FailureCategory::Transport,
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_detail_is_shown_verbatim() {
        let failure = RequestFailure::from(TransformError::Service {
            status: 400,
            detail: "key mismatch".to_string(),
        });
        assert_eq!(failure.category(), FailureCategory::Service);
        assert_eq!(failure.message(), "key mismatch");
        assert!(failure.notification_text().contains("key mismatch"));
    }
}
