//! Error types for event searches.

use orrery_ephem::EphemError;
use orrery_shadow::ShadowError;

/// Errors from event searches.
///
/// "No event found" is not an error: searches return `Ok(None)` or an empty
/// list, and rise/set times use `NaN`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Ephemeris lookup failed.
    #[error(transparent)]
    Ephem(#[from] EphemError),
    /// Eclipse catalog or geometry failed.
    #[error(transparent)]
    Shadow(#[from] ShadowError),
    /// Search configuration is invalid.
    #[error("invalid search config: {0}")]
    InvalidConfig(&'static str),
    /// Body does not support the requested search.
    #[error("invalid body for search: {0}")]
    InvalidBody(&'static str),
}
