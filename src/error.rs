use thiserror::Error;

/// Failures of the JSON surface. Parsing and rendering themselves never fail.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("invalid options: {0}")]
    Options(#[source] serde_json::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
