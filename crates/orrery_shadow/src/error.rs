//! Error types for shadow and eclipse geometry.

/// Errors from eclipse catalog handling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ShadowError {
    /// Catalog could not be parsed.
    #[error("eclipse catalog: {0}")]
    Catalog(String),
    /// A record is internally inconsistent.
    #[error("invalid eclipse record: {0}")]
    InvalidRecord(&'static str),
    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<csv::Error> for ShadowError {
    fn from(e: csv::Error) -> Self {
        Self::Catalog(e.to_string())
    }
}

impl From<std::io::Error> for ShadowError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
