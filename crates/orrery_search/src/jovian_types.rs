//! Types for the Jovian mutual-event scan.

use orrery_shadow::{JovianMoon, JovianPhenomenon};

use crate::detector::BISECT_ITER_MINUTE;

/// A phenomenon boundary bracketed at scan-step granularity, before
/// refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawEvent {
    /// Last sample before the flip.
    pub jd_before: f64,
    /// First sample after the flip.
    pub jd: f64,
    pub moon: JovianMoon,
    pub phenomenon: JovianPhenomenon,
    /// True when the phenomenon begins at this boundary.
    pub is_start: bool,
}

impl RawEvent {
    /// Event text, e.g. "Io begins transit".
    pub fn text(&self) -> String {
        event_text(self.moon, self.phenomenon, self.is_start)
    }
}

/// A refined Jovian mutual event.
#[derive(Debug, Clone, PartialEq)]
pub struct JovianEvent {
    /// Refined event time (JD).
    pub jd: f64,
    pub moon: JovianMoon,
    /// Category tag.
    pub phenomenon: JovianPhenomenon,
    /// True for "begins", false for "ends".
    pub is_start: bool,
    /// Human-readable description.
    pub text: String,
}

pub(crate) fn event_text(moon: JovianMoon, phenomenon: JovianPhenomenon, is_start: bool) -> String {
    let verb = if is_start { "begins" } else { "ends" };
    format!("{} {verb} {}", moon.name(), phenomenon.label())
}

/// Configuration for the Jovian event scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JovianScanConfig {
    /// Coarse scan step in minutes.
    pub step_minutes: f64,
    /// Bisection iterations per bracket.
    pub bisect_iterations: u32,
    /// Drop occultation boundaries while the moon is eclipsed, and eclipse
    /// boundaries while it is occulted.
    pub mutual_masking: bool,
}

impl Default for JovianScanConfig {
    fn default() -> Self {
        Self {
            step_minutes: 1.0,
            bisect_iterations: BISECT_ITER_MINUTE,
            mutual_masking: true,
        }
    }
}

impl JovianScanConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_minutes.is_finite() || self.step_minutes <= 0.0 {
            return Err("step_minutes must be positive");
        }
        if self.bisect_iterations == 0 {
            return Err("bisect_iterations must be > 0");
        }
        Ok(())
    }
}
