//! Error type for page handlers.

/// Error type for page rendering and streaming operations.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Fetch error: {0}")]
    FetchError(#[from] anyhow::Error),

    #[error("Section '{0}' failed: {1}")]
    SectionFailed(String, String),
}
