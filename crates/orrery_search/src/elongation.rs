//! Greatest elongation of Mercury and Venus.
//!
//! Day-step scan for a three-sample local maximum of the Sun–planet
//! separation, then golden-section refinement. East or West comes from the
//! sign of the geocentric ecliptic longitude difference.

use orrery_ephem::{Body, BodyStateProvider};
use orrery_frames::{angular_separation_deg, normalize_pm180};

use crate::conjunction::MAX_SCAN_DAYS;
use crate::detector::{Extremum, SearchDirection, bracket_extremum, golden_section};
use crate::elongation_types::{ElongationConfig, ElongationEvent, ElongationKind};
use crate::error::SearchError;

/// Sun–planet angular separation in degrees.
pub fn elongation_deg<P>(states: &P, body: Body, jd: f64) -> Result<f64, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let planet = states.state(body, jd)?;
    let sun = states.state(Body::Sun, jd)?;
    Ok(angular_separation_deg(
        planet.ra_deg,
        planet.dec_deg,
        sun.ra_deg,
        sun.dec_deg,
    ))
}

fn side<P>(states: &P, body: Body, jd: f64) -> Result<ElongationKind, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let (planet_lon, _) = states.state(body, jd)?.geocentric_ecliptic();
    let (sun_lon, _) = states.state(Body::Sun, jd)?.geocentric_ecliptic();
    Ok(if normalize_pm180(planet_lon - sun_lon) >= 0.0 {
        ElongationKind::East
    } else {
        ElongationKind::West
    })
}

fn find_event<P>(
    states: &P,
    body: Body,
    kind: Option<ElongationKind>,
    jd_start: f64,
    direction: SearchDirection,
    max_days: f64,
    config: &ElongationConfig,
) -> Result<Option<ElongationEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let step = direction.signed(config.step_size_days);
    let f = |t: f64| elongation_deg(states, body, t);
    let mut cursor = jd_start;

    while (cursor - jd_start).abs() < max_days {
        let remaining = ((max_days - (cursor - jd_start).abs()) / config.step_size_days).ceil();
        let Some((a, b)) = bracket_extremum(f, cursor, step, remaining as usize, Extremum::Maximum)?
        else {
            return Ok(None);
        };
        let (jd, elongation) = golden_section(f, a, b, Extremum::Maximum, config.epsilon_days)?;
        let found = side(states, body, jd)?;
        if kind.is_none_or(|k| k == found) {
            return Ok(Some(ElongationEvent {
                jd,
                body,
                kind: found,
                elongation_deg: elongation,
            }));
        }
        cursor = match direction {
            SearchDirection::Forward => b,
            SearchDirection::Backward => a,
        };
    }
    Ok(None)
}

fn check_body(body: Body) -> Result<(), SearchError> {
    if body.is_inferior_planet() {
        Ok(())
    } else {
        Err(SearchError::InvalidBody(
            "greatest elongation needs Mercury or Venus",
        ))
    }
}

/// Next greatest elongation of `kind` after `jd`.
pub fn next_greatest_elongation<P>(
    states: &P,
    body: Body,
    kind: ElongationKind,
    jd: f64,
    config: &ElongationConfig,
) -> Result<Option<ElongationEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    check_body(body)?;
    find_event(
        states,
        body,
        Some(kind),
        jd,
        SearchDirection::Forward,
        MAX_SCAN_DAYS,
        config,
    )
}

/// Previous greatest elongation of `kind` before `jd`.
pub fn prev_greatest_elongation<P>(
    states: &P,
    body: Body,
    kind: ElongationKind,
    jd: f64,
    config: &ElongationConfig,
) -> Result<Option<ElongationEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    check_body(body)?;
    find_event(
        states,
        body,
        Some(kind),
        jd,
        SearchDirection::Backward,
        MAX_SCAN_DAYS,
        config,
    )
}

/// All greatest elongations, east and west, in `[jd_start, jd_end]`.
///
/// The scan runs two steps past `jd_end` so a peak in the last step can
/// still be bracketed; events after `jd_end` are dropped.
pub fn search_greatest_elongations<P>(
    states: &P,
    body: Body,
    jd_start: f64,
    jd_end: f64,
    config: &ElongationConfig,
) -> Result<Vec<ElongationEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    check_body(body)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    let mut events = Vec::new();
    let mut cursor = jd_start;
    // The bracket needs two samples past the peak.
    let limit = jd_end + 2.0 * config.step_size_days;
    while cursor < limit {
        let Some(event) = find_event(
            states,
            body,
            None,
            cursor,
            SearchDirection::Forward,
            limit - cursor,
            config,
        )?
        else {
            break;
        };
        if event.jd > jd_end {
            break;
        }
        events.push(event);
        cursor = event.jd;
    }
    Ok(events)
}
