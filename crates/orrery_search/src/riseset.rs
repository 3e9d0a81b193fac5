//! Rise, transit and set times for planets, the Sun and the Moon.
//!
//! Closed-form hour angle at the horizon threshold,
//! `cos H = (sin h0 − sin φ sin δ) / (cos φ cos δ)`, refined by a fixed
//! number of iterations that re-evaluate the body's position at the
//! current estimate. Default thresholds are geometric:
//! - planets: 0°,
//! - Sun: −16′ for the upper limb,
//! - Moon: minus its semidiameter at the current distance.
//!
//! The Moon is taken topocentric, so its parallax needs no threshold term.
//! [`RiseSetConfig::refraction_arcmin`] lowers every threshold further.

use orrery_ephem::{Body, BodyStateProvider, InterpolatedState};
use orrery_frames::{AU_KM, normalize_pm180, topocentric_equatorial};
use orrery_shadow::moon::MOON_RADIUS_KM;
use orrery_time::{
    SIDEREAL_RATE_DEG_PER_DAY, calendar_to_jd, hour_angle_deg, local_sidereal_time_deg,
};

use crate::error::SearchError;
use crate::riseset_types::{DayVisibility, GeoLocation, PlanetEvents, RiseSetConfig};

/// Iterations for transit and horizon-crossing refinement.
const MAX_ITERATIONS: usize = 5;

/// Below this, `cos φ cos δ` is treated as zero (observer or body at a pole).
const DEGENERATE_EPS: f64 = 1e-12;

/// Mean solar semidiameter in arcminutes.
pub const SUN_SEMIDIAMETER_ARCMIN: f64 = 16.0;

/// Geometric altitude in degrees at which `body` rises or sets.
pub fn horizon_altitude_deg(body: Body, state: &InterpolatedState, config: &RiseSetConfig) -> f64 {
    let refraction = config.refraction_arcmin / 60.0;
    match body {
        Body::Sun => -SUN_SEMIDIAMETER_ARCMIN / 60.0 - refraction,
        Body::Moon => {
            let dist_km = state.dist_geo_au * AU_KM;
            -(MOON_RADIUS_KM / dist_km).clamp(-1.0, 1.0).asin().to_degrees() - refraction
        }
        _ => -refraction,
    }
}

/// (RA, Dec) in degrees as seen by the observer: topocentric for the Moon,
/// geocentric for everything else.
pub(crate) fn apparent_equatorial(
    body: Body,
    state: &InterpolatedState,
    location: &GeoLocation,
    lst_deg: f64,
) -> (f64, f64) {
    if body == Body::Moon {
        topocentric_equatorial(
            state.ra_deg,
            state.dec_deg,
            state.dist_geo_au * AU_KM,
            location.latitude_deg,
            location.altitude_m,
            lst_deg,
        )
    } else {
        (state.ra_deg, state.dec_deg)
    }
}

/// `cos H` of the hour angle at which a body of declination `dec_deg`
/// reaches altitude `h0_deg`. Values outside [-1, 1] mean no crossing.
pub fn cos_hour_angle(h0_deg: f64, lat_deg: f64, dec_deg: f64) -> f64 {
    let (sp, cp) = lat_deg.to_radians().sin_cos();
    let (sd, cd) = dec_deg.to_radians().sin_cos();
    (h0_deg.to_radians().sin() - sp * sd) / (cp * cd)
}

/// Classify a day: crosses the threshold, circumpolar, or never up.
///
/// At a pole (of the observer or the body) the sign of
/// `sin φ sin δ − sin h0` decides.
pub fn day_visibility(h0_deg: f64, lat_deg: f64, dec_deg: f64) -> DayVisibility {
    let (sp, cp) = lat_deg.to_radians().sin_cos();
    let (sd, cd) = dec_deg.to_radians().sin_cos();
    let sin_h0 = h0_deg.to_radians().sin();

    if (cp * cd).abs() < DEGENERATE_EPS {
        return if sp * sd - sin_h0 > 0.0 {
            DayVisibility::AlwaysUp
        } else {
            DayVisibility::NeverUp
        };
    }

    let cos_h = (sin_h0 - sp * sd) / (cp * cd);
    if cos_h > 1.0 {
        DayVisibility::NeverUp
    } else if cos_h < -1.0 {
        DayVisibility::AlwaysUp
    } else {
        DayVisibility::Crosses
    }
}

/// Hour angle and apparent declination at `jd`, with the raw state.
fn hour_angle_at<P>(
    states: &P,
    body: Body,
    location: &GeoLocation,
    jd: f64,
) -> Result<(f64, f64, InterpolatedState), SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let state = states.state(body, jd)?;
    let lst = local_sidereal_time_deg(jd, location.longitude_deg);
    let (ra, dec) = apparent_equatorial(body, &state, location, lst);
    Ok((hour_angle_deg(lst, ra), dec, state))
}

/// Meridian transit nearest to `jd_guess`.
pub fn transit_jd<P>(
    states: &P,
    body: Body,
    location: &GeoLocation,
    jd_guess: f64,
) -> Result<f64, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let mut t = jd_guess;
    for _ in 0..MAX_ITERATIONS {
        let (ha, _, _) = hour_angle_at(states, body, location, t)?;
        t -= ha / SIDEREAL_RATE_DEG_PER_DAY;
    }
    Ok(t)
}

/// Rising (or setting) instant nearest to `jd_guess`, or `None` when the
/// body does not reach its threshold.
pub fn horizon_crossing_jd<P>(
    states: &P,
    body: Body,
    location: &GeoLocation,
    jd_guess: f64,
    rising: bool,
    config: &RiseSetConfig,
) -> Result<Option<f64>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let mut t = jd_guess;
    for _ in 0..MAX_ITERATIONS {
        let (ha, dec, state) = hour_angle_at(states, body, location, t)?;
        let h0 = horizon_altitude_deg(body, &state, config);
        let cos_h = cos_hour_angle(h0, location.latitude_deg, dec);
        if !(-1.0..=1.0).contains(&cos_h) {
            return Ok(None);
        }
        let h = cos_h.acos().to_degrees();
        let target = if rising { -h } else { h };
        t += normalize_pm180(target - ha) / SIDEREAL_RATE_DEG_PER_DAY;
    }
    Ok(Some(t))
}

/// Solve from `guess`; if the result falls outside the local day starting at
/// `jd0`, retry once a day earlier or later. Returns local hours or `NaN`.
fn solve_in_day<F>(jd0: f64, guess: f64, mut solve: F) -> Result<f64, SearchError>
where
    F: FnMut(f64) -> Result<Option<f64>, SearchError>,
{
    let to_hours = |t: f64| {
        let h = (t - jd0) * 24.0;
        if (0.0..24.0).contains(&h) { Some(h) } else { None }
    };
    let Some(t) = solve(guess)? else {
        return Ok(f64::NAN);
    };
    if let Some(h) = to_hours(t) {
        return Ok(h);
    }
    let retry = if t < jd0 { t + 1.0 } else { t - 1.0 };
    Ok(solve(retry)?.and_then(to_hours).unwrap_or(f64::NAN))
}

/// Rise, transit and set of `body` on a local calendar day.
///
/// `utc_offset_hours` converts local civil time to UT (e.g. `-5.0` for EST).
/// A body that never rises reports `NaN` for all three; a circumpolar body
/// reports only its transit.
#[allow(clippy::too_many_arguments)]
pub fn planet_events<P>(
    states: &P,
    body: Body,
    location: &GeoLocation,
    year: i32,
    month: u32,
    day: u32,
    utc_offset_hours: f64,
    config: &RiseSetConfig,
) -> Result<PlanetEvents, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    let jd0 = calendar_to_jd(year, month, day as f64) - utc_offset_hours / 24.0;
    let transit = transit_jd(states, body, location, jd0 + 0.5)?;
    let (_, dec, state) = hour_angle_at(states, body, location, transit)?;
    let visibility = day_visibility(
        horizon_altitude_deg(body, &state, config),
        location.latitude_deg,
        dec,
    );
    if visibility == DayVisibility::NeverUp {
        return Ok(PlanetEvents::none(visibility));
    }

    let transit_hours = solve_in_day(jd0, transit, |g| {
        transit_jd(states, body, location, g).map(Some)
    })?;

    let (rise, set) = if visibility == DayVisibility::Crosses {
        let rise = solve_in_day(jd0, transit, |g| {
            horizon_crossing_jd(states, body, location, g, true, config)
        })?;
        let set = solve_in_day(jd0, transit, |g| {
            horizon_crossing_jd(states, body, location, g, false, config)
        })?;
        (rise, set)
    } else {
        (f64::NAN, f64::NAN)
    };

    Ok(PlanetEvents {
        rise,
        transit: transit_hours,
        set,
        visibility,
    })
}
