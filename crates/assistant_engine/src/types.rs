use assistant_core::{AssistantResult, RequestId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AiFailureKind {
    #[error("network error")]
    Network,
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("service error")]
    Service,
    #[error("malformed payload")]
    MalformedPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct AiError {
    pub kind: AiFailureKind,
    pub message: String,
}

impl AiError {
    pub fn new(kind: AiFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Completion events emitted by [`crate::AssistantHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantEvent {
    RequestCompleted {
        request_id: RequestId,
        result: Result<AssistantResult, AiError>,
    },
}
