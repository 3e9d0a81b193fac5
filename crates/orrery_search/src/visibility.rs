//! Horizon visibility: altitude tests, the visible-longitude band used by
//! the eclipse map, lunar eclipse visibility, and per-event classification.

use orrery_ephem::{Body, BodyStateProvider};
use orrery_frames::{altitude_deg, normalize_pm180, topocentric_equatorial};
use orrery_shadow::{EclipsePhaseWindow, moon_position};
use orrery_time::{gmst_deg, hour_angle_deg, local_sidereal_time_deg};
use tracing::debug;

use crate::error::SearchError;
use crate::riseset::{apparent_equatorial, horizon_altitude_deg};
use crate::riseset_types::{GeoLocation, RiseSetConfig};

/// Moon altitude in degrees above which the upper limb counts as risen.
pub const ECLIPSE_MOON_ALTITUDE_DEG: f64 = 0.125;

/// Fractions of the penumbral window sampled when both contacts are below
/// the horizon.
const INTERIOR_FRACTIONS: [f64; 3] = [0.25, 0.5, 0.75];

const DEGENERATE_EPS: f64 = 1e-12;

/// Longitude band at one latitude where a body is above the horizon.
///
/// When neither flag is set the band runs east from `lon1` to `lon2`;
/// `lon1 > lon2` means it wraps across ±180°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleLonRange {
    pub lon1: f64,
    pub lon2: f64,
    pub always_up: bool,
    pub never_up: bool,
}

impl VisibleLonRange {
    fn always() -> Self {
        Self {
            lon1: -180.0,
            lon2: 180.0,
            always_up: true,
            never_up: false,
        }
    }

    fn never() -> Self {
        Self {
            lon1: 0.0,
            lon2: 0.0,
            always_up: false,
            never_up: true,
        }
    }

    /// Whether east longitude `lon_deg` lies in the band.
    pub fn contains(&self, lon_deg: f64) -> bool {
        if self.always_up {
            return true;
        }
        if self.never_up {
            return false;
        }
        let lon = normalize_pm180(lon_deg);
        if self.lon1 <= self.lon2 {
            lon >= self.lon1 && lon <= self.lon2
        } else {
            lon >= self.lon1 || lon <= self.lon2
        }
    }
}

/// Longitudes at latitude `lat_deg` where a body at (`ra_deg`, `dec_deg`)
/// is above the geometric horizon, for Greenwich sidereal time `gmst_deg`.
///
/// Solves `cos H = −tan φ tan δ` and maps `lon = ±H + α − GMST`.
pub fn visible_lon_range(
    lat_deg: f64,
    ra_deg: f64,
    dec_deg: f64,
    gmst_deg: f64,
) -> VisibleLonRange {
    let (sp, cp) = lat_deg.to_radians().sin_cos();
    let (sd, cd) = dec_deg.to_radians().sin_cos();

    if (cp * cd).abs() < DEGENERATE_EPS {
        return if sp * sd > 0.0 {
            VisibleLonRange::always()
        } else {
            VisibleLonRange::never()
        };
    }

    let cos_h = -(sp * sd) / (cp * cd);
    if cos_h <= -1.0 {
        return VisibleLonRange::always();
    }
    if cos_h >= 1.0 {
        return VisibleLonRange::never();
    }

    let h = cos_h.acos().to_degrees();
    VisibleLonRange {
        lon1: normalize_pm180(-h + ra_deg - gmst_deg),
        lon2: normalize_pm180(h + ra_deg - gmst_deg),
        always_up: false,
        never_up: false,
    }
}

/// Whether a body at hour angle `ha_hours` is above `threshold_deg`.
pub fn is_above_horizon(ha_hours: f64, lat_deg: f64, dec_deg: f64, threshold_deg: f64) -> bool {
    altitude_deg(ha_hours, lat_deg, dec_deg) > threshold_deg
}

/// Altitude of `body` in degrees. The Moon is corrected for parallax.
pub fn body_altitude_deg<P>(
    states: &P,
    body: Body,
    jd: f64,
    location: &GeoLocation,
) -> Result<f64, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let state = states.state(body, jd)?;
    let lst = local_sidereal_time_deg(jd, location.longitude_deg);
    let (ra, dec) = apparent_equatorial(body, &state, location, lst);
    Ok(altitude_deg(
        hour_angle_deg(lst, ra) / 15.0,
        location.latitude_deg,
        dec,
    ))
}

/// Whether `body` is above its own rise/set threshold at `jd`.
///
/// Uses the default geometric thresholds, so a body reported up here is up
/// between the rise and set of [`planet_events`](crate::planet_events) with
/// `RiseSetConfig::default()`.
pub fn is_body_up<P>(
    states: &P,
    body: Body,
    jd: f64,
    location: &GeoLocation,
) -> Result<bool, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let state = states.state(body, jd)?;
    let threshold = horizon_altitude_deg(body, &state, &RiseSetConfig::default());
    Ok(body_altitude_deg(states, body, jd, location)? > threshold)
}

/// Observing conditions for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventVisibility {
    /// Body up, Sun down.
    Visible,
    /// Body below its horizon threshold.
    BelowHorizon,
    /// Body up but the Sun is above the horizon.
    Daylight,
}

impl EventVisibility {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::BelowHorizon => "below horizon",
            Self::Daylight => "daylight",
        }
    }
}

/// Classify an event on `body` at `jd` for an observer.
pub fn classify_event<P>(
    states: &P,
    body: Body,
    jd: f64,
    location: &GeoLocation,
) -> Result<EventVisibility, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    if !is_body_up(states, body, jd, location)? {
        return Ok(EventVisibility::BelowHorizon);
    }
    if body != Body::Sun && is_body_up(states, Body::Sun, jd, location)? {
        return Ok(EventVisibility::Daylight);
    }
    Ok(EventVisibility::Visible)
}

/// Topocentric altitude of the Moon from the lunar series, in degrees.
pub fn moon_altitude_deg(jd: f64, location: &GeoLocation) -> f64 {
    let moon = moon_position(jd);
    let lst = (gmst_deg(jd) + location.longitude_deg).rem_euclid(360.0);
    let (ra, dec) = topocentric_equatorial(
        moon.ra_deg,
        moon.dec_deg,
        moon.dist_km,
        location.latitude_deg,
        location.altitude_m,
        lst,
    );
    altitude_deg(hour_angle_deg(lst, ra) / 15.0, location.latitude_deg, dec)
}

/// Result of the lunar eclipse visibility test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseVisibility {
    pub visible: bool,
    /// Sampled instant with the highest Moon.
    pub best_jd: f64,
    pub best_altitude_deg: f64,
}

/// Whether any part of a lunar eclipse can be seen from `location`.
///
/// Samples the Moon at the penumbral contacts; if it is down at both, also
/// at 25 %, 50 % and 75 % of the penumbral window. Without a penumbral
/// window only the instant of greatest eclipse is sampled.
pub fn eclipse_visibility(
    window: &EclipsePhaseWindow,
    location: &GeoLocation,
) -> EclipseVisibility {
    let mut best = EclipseVisibility {
        visible: false,
        best_jd: window.greatest_jd,
        best_altitude_deg: f64::NEG_INFINITY,
    };

    let Some(p) = window.penumbral else {
        best.record(window.greatest_jd, location);
        return best;
    };

    best.record(p.start_jd, location);
    best.record(p.end_jd, location);
    if !best.visible {
        for f in INTERIOR_FRACTIONS {
            best.record(p.start_jd + f * p.duration_days(), location);
        }
    }
    debug!(
        greatest_jd = window.greatest_jd,
        visible = best.visible,
        "eclipse visibility"
    );
    best
}

impl EclipseVisibility {
    fn record(&mut self, jd: f64, location: &GeoLocation) {
        let alt = moon_altitude_deg(jd, location);
        if alt > self.best_altitude_deg {
            self.best_jd = jd;
            self.best_altitude_deg = alt;
        }
        self.visible |= alt > ECLIPSE_MOON_ALTITUDE_DEG;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circumpolar_flags() {
        let up = visible_lon_range(80.0, 0.0, 85.0, 0.0);
        assert!(up.always_up && !up.never_up);
        let down = visible_lon_range(80.0, 0.0, -85.0, 0.0);
        assert!(down.never_up && !down.always_up);
    }

    #[test]
    fn flags_never_both() {
        for lat in (-90..=90).step_by(5) {
            for dec in (-90..=90).step_by(5) {
                let r = visible_lon_range(lat as f64, 123.0, dec as f64, 45.0);
                assert!(!(r.always_up && r.never_up), "lat={lat} dec={dec}");
            }
        }
    }

    #[test]
    fn equator_half_the_globe() {
        // dec 0 at lat 0: H = 90°, centred on RA − GMST.
        let r = visible_lon_range(0.0, 100.0, 0.0, 40.0);
        assert!((r.lon1 - (-30.0)).abs() < 1e-9, "lon1={}", r.lon1);
        assert!((r.lon2 - 150.0).abs() < 1e-9, "lon2={}", r.lon2);
        assert!(r.contains(60.0));
        assert!(!r.contains(-120.0));
    }

    #[test]
    fn wrapped_band() {
        let r = visible_lon_range(0.0, 180.0, 0.0, 0.0);
        assert!(r.lon1 > r.lon2, "{r:?}");
        assert!(r.contains(180.0) && r.contains(-170.0) && r.contains(100.0));
        assert!(!r.contains(0.0));
    }

    #[test]
    fn pole_resolved_by_sign() {
        assert!(visible_lon_range(90.0, 0.0, 10.0, 0.0).always_up);
        assert!(visible_lon_range(90.0, 0.0, -10.0, 0.0).never_up);
        assert!(visible_lon_range(-90.0, 0.0, -10.0, 0.0).always_up);
    }

    #[test]
    fn above_horizon_threshold() {
        assert!(is_above_horizon(0.0, 0.0, 0.0, 0.0));
        assert!(!is_above_horizon(12.0, 0.0, 0.0, 0.0));
        assert!(!is_above_horizon(0.0, 45.0, 0.0, 50.0));
    }
}
