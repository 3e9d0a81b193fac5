//! Provider contracts consumed by the geometry and search crates.

use std::collections::BTreeMap;

use crate::body::Body;
use crate::error::EphemError;
use crate::sample::InterpolatedState;
use crate::store::EphemerisStore;

/// Deterministic body-state lookup over a supported date range.
///
/// Out-of-range dates must be reported as errors, never clamped.
pub trait BodyStateProvider: Send + Sync {
    fn state(&self, body: Body, jd: f64) -> Result<InterpolatedState, EphemError>;
}

impl BodyStateProvider for EphemerisStore {
    fn state(&self, body: Body, jd: f64) -> Result<InterpolatedState, EphemError> {
        self.interpolate(body, jd)
    }
}

/// The four Galilean satellites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JovianMoon {
    Io,
    Europa,
    Ganymede,
    Callisto,
}

impl JovianMoon {
    pub const ALL: [JovianMoon; 4] = [Self::Io, Self::Europa, Self::Ganymede, Self::Callisto];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Io => "Io",
            Self::Europa => "Europa",
            Self::Ganymede => "Ganymede",
            Self::Callisto => "Callisto",
        }
    }

    /// Mean radius in Jupiter equatorial radii.
    pub const fn radius_rj(self) -> f64 {
        match self {
            Self::Io => 0.02548,
            Self::Europa => 0.02183,
            Self::Ganymede => 0.03684,
            Self::Callisto => 0.03371,
        }
    }
}

/// Jupiter-centred Cartesian position in Jupiter equatorial radii.
pub type Vector3 = [f64; 3];

/// Galilean satellite positions around Jupiter.
///
/// Axes: X toward the west limb as seen from Earth, Y toward Jupiter's north
/// pole, Z toward the Earth. An empty map means "no geometry available at
/// this instant" and must be skipped by callers, not treated as failure.
pub trait JovianSatelliteProvider: Send + Sync {
    fn positions(
        &self,
        jd: f64,
        delta_au: f64,
        jupiter_lon_deg: f64,
        jupiter_lat_deg: f64,
    ) -> BTreeMap<JovianMoon, Vector3>;
}
