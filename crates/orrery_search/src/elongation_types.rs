//! Types for greatest-elongation search.

use orrery_ephem::Body;

use crate::detector::GOLDEN_EPSILON_DAYS;

/// Side of the Sun the planet stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElongationKind {
    /// East of the Sun (evening sky).
    East,
    /// West of the Sun (morning sky).
    West,
}

impl ElongationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::East => "greatest elongation east",
            Self::West => "greatest elongation west",
        }
    }
}

/// A greatest elongation of an inner planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElongationEvent {
    /// Event time (JD).
    pub jd: f64,
    pub body: Body,
    pub kind: ElongationKind,
    /// Sun–planet angular separation in degrees.
    pub elongation_deg: f64,
}

/// Configuration for greatest-elongation search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElongationConfig {
    /// Coarse scan step in days.
    pub step_size_days: f64,
    /// Golden-section stopping width in days.
    pub epsilon_days: f64,
}

impl Default for ElongationConfig {
    fn default() -> Self {
        Self {
            step_size_days: 1.0,
            epsilon_days: GOLDEN_EPSILON_DAYS,
        }
    }
}

impl ElongationConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if !self.epsilon_days.is_finite() || self.epsilon_days <= 0.0 {
            return Err("epsilon_days must be positive");
        }
        Ok(())
    }
}
