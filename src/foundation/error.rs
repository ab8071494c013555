/// Result type used across heartbloom's public APIs.
pub type BloomResult<T> = Result<T, BloomError>;

/// Top-level error type for heartbloom.
///
/// The content-fetch path never produces one of these: service failures are absorbed into slot
/// fallbacks. `BloomError` covers the surfaces around that core (parameters, navigation,
/// rendering and configuration).
#[derive(thiserror::Error, Debug)]
pub enum BloomError {
    /// Input data is invalid (non-finite parameters, unknown action names, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A navigation trigger is not valid from the current screen.
    #[error("transition error: {0}")]
    Transition(String),

    /// Rendering or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Configuration could not be loaded or applied.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BloomError {
    /// Build a [`BloomError::Validation`] from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BloomError::Transition`] from any displayable message.
    pub fn transition(msg: impl Into<String>) -> Self {
        Self::Transition(msg.into())
    }

    /// Build a [`BloomError::Render`] from any displayable message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BloomError::Config`] from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
