//! Types for heliocentric conjunction and opposition search.

use orrery_ephem::Body;

use crate::detector::BISECT_ITER_DAY;

/// Sun–planet alignment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjunctionKind {
    /// Inner planet between Earth and Sun.
    Inferior,
    /// Planet on the far side of the Sun.
    Superior,
    /// Outer planet opposite the Sun.
    Opposition,
}

impl ConjunctionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inferior => "inferior conjunction",
            Self::Superior => "superior conjunction",
            Self::Opposition => "opposition",
        }
    }
}

/// A refined conjunction or opposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionEvent {
    /// Event time (JD).
    pub jd: f64,
    pub body: Body,
    pub kind: ConjunctionKind,
    /// Planet heliocentric ecliptic longitude in degrees [0, 360).
    pub body_helio_lon_deg: f64,
    /// Earth heliocentric ecliptic longitude in degrees [0, 360).
    pub earth_helio_lon_deg: f64,
    /// Planet–Earth distance in AU.
    pub body_dist_geo_au: f64,
    /// Sun–Earth distance in AU.
    pub sun_dist_geo_au: f64,
}

/// Configuration for conjunction search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionConfig {
    /// Coarse scan step in days.
    pub step_size_days: f64,
    /// Bisection iterations per bracket.
    pub max_iterations: u32,
}

impl Default for ConjunctionConfig {
    fn default() -> Self {
        Self {
            step_size_days: 1.0,
            max_iterations: BISECT_ITER_DAY,
        }
    }
}

impl ConjunctionConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}
