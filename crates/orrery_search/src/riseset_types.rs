//! Types for rise, transit and set computation.

use orrery_frames::refraction_bennett_arcmin;

/// Geographic location of an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Height above the ellipsoid in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Horizon threshold settings for rise and set.
///
/// By default the thresholds are geometric: 0° for planets and minus the
/// apparent semidiameter for the Sun and the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes, subtracted from
    /// every threshold. Default: 0.0.
    pub refraction_arcmin: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 0.0,
        }
    }
}

impl RiseSetConfig {
    /// Thresholds lowered by the standard horizon refraction (Bennett, ~34.5′).
    pub fn with_refraction() -> Self {
        Self {
            refraction_arcmin: refraction_bennett_arcmin(0.0),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.refraction_arcmin.is_finite() || self.refraction_arcmin < 0.0 {
            return Err("refraction_arcmin must be finite and non-negative");
        }
        Ok(())
    }
}

/// Whether a body crosses its horizon threshold during a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayVisibility {
    /// Rises and sets.
    Crosses,
    /// Stays above the threshold (circumpolar).
    AlwaysUp,
    /// Stays below the threshold.
    NeverUp,
}

/// Rise, transit and set for one observer-day, in local hours [0, 24).
///
/// `NaN` means the event does not happen on this day. Callers must branch
/// on `is_nan()`, never treat it as midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetEvents {
    pub rise: f64,
    pub transit: f64,
    pub set: f64,
    pub visibility: DayVisibility,
}

impl PlanetEvents {
    pub(crate) fn none(visibility: DayVisibility) -> Self {
        Self {
            rise: f64::NAN,
            transit: f64::NAN,
            set: f64::NAN,
            visibility,
        }
    }
}

/// Format local hours as `HH:MM`, or `--:--` for `NaN`.
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return "--:--".to_string();
    }
    let total_min = (hours * 60.0).round() as i64;
    let total_min = total_min.rem_euclid(24 * 60);
    format!("{:02}:{:02}", total_min / 60, total_min % 60)
}
