//! Heliocentric conjunction and opposition search.
//!
//! The signal compares the planet's heliocentric longitude with the Earth's
//! (Sun geocentric longitude + 180°):
//! - inner planets: `sin(λ_planet − λ_earth)`, zero at both conjunctions;
//!   the kind is decided by distance, nearer than the Sun ⇒ inferior;
//! - outer planets: `normalize(λ_planet − λ_earth − 180°)` for conjunction
//!   and `normalize(λ_planet − λ_earth)` for opposition, with ±180° wraps
//!   rejected.

use orrery_ephem::{Body, BodyStateProvider};
use orrery_frames::{normalize_360, normalize_pm180};
use tracing::trace;

use crate::conjunction_types::{ConjunctionConfig, ConjunctionEvent, ConjunctionKind};
use crate::detector::{CrossingRule, SearchDirection, find_crossing};
use crate::error::SearchError;

/// Maximum scan range in days (covers the longest synodic period, Mars).
pub const MAX_SCAN_DAYS: f64 = 900.0;

fn check_body(body: Body, kind: ConjunctionKind) -> Result<(), SearchError> {
    match kind {
        ConjunctionKind::Inferior if !body.is_inferior_planet() => Err(
            SearchError::InvalidBody("inferior conjunction needs Mercury or Venus"),
        ),
        ConjunctionKind::Opposition if !body.is_superior_planet() => Err(
            SearchError::InvalidBody("opposition needs a planet beyond the Earth"),
        ),
        ConjunctionKind::Superior if !body.is_inferior_planet() && !body.is_superior_planet() => {
            Err(SearchError::InvalidBody("conjunction search needs a planet"))
        }
        _ => Ok(()),
    }
}

fn signal<P>(states: &P, body: Body, kind: ConjunctionKind, jd: f64) -> Result<f64, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let planet = states.state(body, jd)?;
    let sun = states.state(Body::Sun, jd)?;
    let diff = planet.ecl_lon_deg - sun.earth_helio_lon_deg();
    Ok(if body.is_inferior_planet() {
        diff.to_radians().sin()
    } else if kind == ConjunctionKind::Opposition {
        normalize_pm180(diff)
    } else {
        normalize_pm180(diff - 180.0)
    })
}

fn crossing_rule(body: Body) -> CrossingRule {
    if body.is_inferior_planet() {
        CrossingRule::SignChange
    } else {
        CrossingRule::WrappedAngle
    }
}

/// Evaluate the event at a refined crossing time.
fn event_at<P>(states: &P, body: Body, jd: f64) -> Result<ConjunctionEvent, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let planet = states.state(body, jd)?;
    let sun = states.state(Body::Sun, jd)?;
    let earth_lon = sun.earth_helio_lon_deg();
    let kind = if body.is_inferior_planet() {
        if planet.dist_geo_au < sun.dist_geo_au {
            ConjunctionKind::Inferior
        } else {
            ConjunctionKind::Superior
        }
    } else if normalize_pm180(planet.ecl_lon_deg - earth_lon).abs() < 90.0 {
        ConjunctionKind::Opposition
    } else {
        ConjunctionKind::Superior
    };
    Ok(ConjunctionEvent {
        jd,
        body,
        kind,
        body_helio_lon_deg: normalize_360(planet.ecl_lon_deg),
        earth_helio_lon_deg: earth_lon,
        body_dist_geo_au: planet.dist_geo_au,
        sun_dist_geo_au: sun.dist_geo_au,
    })
}

fn find_event<P>(
    states: &P,
    body: Body,
    kind: ConjunctionKind,
    jd_start: f64,
    direction: SearchDirection,
    max_steps: usize,
    config: &ConjunctionConfig,
) -> Result<Option<ConjunctionEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    let root = find_crossing(
        |t| signal(states, body, kind, t),
        jd_start,
        direction.signed(config.step_size_days),
        max_steps,
        crossing_rule(body),
        config.max_iterations,
        |t| {
            let found = event_at(states, body, t)?.kind;
            if found != kind {
                trace!(jd = t, ?found, wanted = ?kind, "crossing rejected");
            }
            Ok(found == kind)
        },
    )?;
    root.map(|t| event_at(states, body, t)).transpose()
}

/// Next conjunction or opposition of `kind` after `jd`.
pub fn next_conjunction<P>(
    states: &P,
    body: Body,
    kind: ConjunctionKind,
    jd: f64,
    config: &ConjunctionConfig,
) -> Result<Option<ConjunctionEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    check_body(body, kind)?;
    let max_steps = (MAX_SCAN_DAYS / config.step_size_days).ceil() as usize;
    find_event(states, body, kind, jd, SearchDirection::Forward, max_steps, config)
}

/// Previous conjunction or opposition of `kind` before `jd`.
pub fn prev_conjunction<P>(
    states: &P,
    body: Body,
    kind: ConjunctionKind,
    jd: f64,
    config: &ConjunctionConfig,
) -> Result<Option<ConjunctionEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    check_body(body, kind)?;
    let max_steps = (MAX_SCAN_DAYS / config.step_size_days).ceil() as usize;
    find_event(states, body, kind, jd, SearchDirection::Backward, max_steps, config)
}

/// All conjunctions or oppositions of `kind` in `[jd_start, jd_end]`.
pub fn search_conjunctions<P>(
    states: &P,
    body: Body,
    kind: ConjunctionKind,
    jd_start: f64,
    jd_end: f64,
    config: &ConjunctionConfig,
) -> Result<Vec<ConjunctionEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    check_body(body, kind)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    let step = config.step_size_days;
    let mut events = Vec::new();
    let mut cursor = jd_start;
    while cursor < jd_end {
        let remaining = ((jd_end - cursor) / step).ceil() as usize;
        let Some(event) =
            find_event(states, body, kind, cursor, SearchDirection::Forward, remaining, config)?
        else {
            break;
        };
        if event.jd > jd_end {
            break;
        }
        events.push(event);
        cursor = event.jd + step;
    }
    Ok(events)
}
