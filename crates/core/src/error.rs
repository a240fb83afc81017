use thiserror::Error;

/// Errors crossing the core trait seams.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Translation provider failed (network, provider error, rate limit).
    #[error("translation failed: {0}")]
    Translation(String),

    /// Unknown language code in configuration or a request.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
