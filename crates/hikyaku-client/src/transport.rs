//! The transport collaborator boundary.

use async_trait::async_trait;
use hikyaku_types::TypedJson;

/// A raw transport reply: HTTP status plus the full body text.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network-level failure before a reply could be read.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("reply body unreadable: {0}")]
    Body(String),
}

/// Posts one envelope to the backend and resolves with the raw reply.
///
/// Retry, backoff and timeout policy belong to implementations — the
/// dispatcher imposes none and never retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, path: &str, message: &TypedJson) -> Result<HttpResponse, TransportError>;
}
