//! Error types for the ephemeris store.

use crate::body::Body;

/// Errors from loading or querying ephemeris tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemError {
    /// Query time precedes the first or follows the last sample.
    #[error("JD {jd} is outside the loaded table for {body}")]
    OutOfRange { body: Body, jd: f64 },
    /// Name did not match any tracked body.
    #[error("unknown body: {0}")]
    UnknownBody(String),
    /// No table has been loaded for the body.
    #[error("no table loaded for {0}")]
    NotLoaded(Body),
    /// Sample times are not strictly increasing at `index`.
    #[error("{body} samples not strictly increasing at index {index}")]
    NonMonotonic { body: Body, index: usize },
    /// Input could not be decoded.
    #[error("malformed ephemeris data: {0}")]
    Malformed(String),
    /// Layout description is unusable.
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EphemError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
