//! Ephemeris store for precomputed body positions.
//!
//! Loads time-tagged samples per body (from memory or the flat binary
//! format), and reconstructs a continuous position function with 4-point
//! Catmull-Rom interpolation. Angle channels (RA, heliocentric longitude)
//! are unwrapped before interpolation so a 359° → 1° step stays continuous.
//!
//! Also defines the provider contracts consumed downstream:
//! [`BodyStateProvider`] and [`JovianSatelliteProvider`].

pub mod body;
pub mod catmull_rom;
pub mod error;
pub mod layout;
pub mod provider;
pub mod sample;
pub mod store;

pub use body::Body;
pub use error::EphemError;
pub use layout::EphemerisLayout;
pub use provider::{BodyStateProvider, JovianMoon, JovianSatelliteProvider, Vector3};
pub use sample::{BodySample, InterpolatedState};
pub use store::EphemerisStore;
