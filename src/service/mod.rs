//! Text-generation collaborators.
//!
//! The core only depends on [`TextFetchService`]; [`gemini::GeminiTextService`] is the HTTP
//! implementation and [`UnconfiguredTextService`] stands in when no credentials exist.

pub mod config;
pub mod gemini;

use async_trait::async_trait;

/// Failure of a single text request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No API key is configured.
    #[error("text service credentials are missing")]
    MissingCredentials,

    /// The request could not be sent or the connection failed.
    #[error("text service request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("text service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The response body could not be interpreted.
    #[error("text service response malformed: {0}")]
    Malformed(String),

    /// The service answered but produced no text.
    #[error("text service returned empty text")]
    EmptyResponse,
}

impl ServiceError {
    /// True for failures where the service could not be reached or refused the call.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials | Self::Network(_) | Self::Status { .. }
        )
    }
}

/// Asynchronous prompt-in, text-out service.
///
/// Implementations must not panic on any failure; every failure is a [`ServiceError`].
#[async_trait]
pub trait TextFetchService: Send + Sync {
    /// Generate text for `prompt`.
    async fn request_text(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Service used when no credentials are available; fails every call immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnconfiguredTextService;

#[async_trait]
impl TextFetchService for UnconfiguredTextService {
    async fn request_text(&self, _prompt: &str) -> Result<String, ServiceError> {
        Err(ServiceError::MissingCredentials)
    }
}
