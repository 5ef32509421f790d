use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    #[error("invalid request: {0}")]
    InvalidInput(String),

    /// No service configured (e.g. missing API key).
    #[error("suggestion service unavailable: {0}")]
    Unavailable(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),

    /// The service answered but the text is not the expected JSON shape.
    #[error("malformed suggestion payload: {0}")]
    MalformedPayload(String),
}
