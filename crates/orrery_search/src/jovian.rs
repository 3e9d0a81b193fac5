//! Jovian mutual-event search.
//!
//! Samples the per-moon geometry at a fixed step, records every flip of the
//! transit, occultation, shadow-transit and eclipse predicates, and refines
//! each flip by bisection. Instants with no geometry (empty satellite map,
//! or an interior sample outside the ephemeris) are skipped, so the bracket
//! simply widens across them.

use std::collections::BTreeMap;

use orrery_ephem::{BodyStateProvider, EphemError, JovianSatelliteProvider};
use orrery_shadow::{JovianMoon, JovianPhenomenon, MoonGeometryState, jovian_geometry};
use tracing::{debug, info, warn};

use crate::detector::bisect_flip;
use crate::error::SearchError;
use crate::jovian_types::{JovianEvent, JovianScanConfig, RawEvent, event_text};

const MINUTES_PER_DAY: f64 = 1440.0;

fn moon_state<P, S>(
    states: &P,
    satellites: &S,
    jd: f64,
    moon: JovianMoon,
) -> Result<MoonGeometryState, EphemError>
where
    P: BodyStateProvider + ?Sized,
    S: JovianSatelliteProvider + ?Sized,
{
    let geometry = jovian_geometry(states, satellites, jd)?;
    geometry
        .moon(moon)
        .copied()
        .ok_or_else(|| EphemError::Malformed(format!("no position for {} at JD {jd}", moon.name())))
}

/// Collect unrefined boundaries over `[jd_start, jd_end]`.
///
/// The first sample must be computable; later failures are skipped.
pub fn scan_raw_events<P, S>(
    states: &P,
    satellites: &S,
    jd_start: f64,
    jd_end: f64,
    config: &JovianScanConfig,
) -> Result<Vec<RawEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
    S: JovianSatelliteProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }

    let step = config.step_minutes / MINUTES_PER_DAY;
    let n_steps = ((jd_end - jd_start) / step).ceil() as usize;

    let first = jovian_geometry(states, satellites, jd_start)?;
    let mut last_seen: BTreeMap<JovianMoon, (f64, MoonGeometryState)> = first
        .moons
        .iter()
        .map(|m| (m.moon, (jd_start, *m)))
        .collect();

    let mut raw = Vec::new();
    let mut skipped = 0usize;

    for i in 1..=n_steps {
        let jd = (jd_start + i as f64 * step).min(jd_end);
        let geometry = match jovian_geometry(states, satellites, jd) {
            Ok(g) if g.moons.is_empty() => {
                warn!(jd, "no satellite geometry, sample skipped");
                skipped += 1;
                continue;
            }
            Ok(g) => g,
            Err(e @ EphemError::OutOfRange { .. }) => {
                warn!(jd, error = %e, "sample skipped");
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        for current in &geometry.moons {
            if let Some(&(jd_before, before)) = last_seen.get(&current.moon) {
                for phenomenon in JovianPhenomenon::ALL {
                    let now = current.flag(phenomenon);
                    if before.flag(phenomenon) != now {
                        raw.push(RawEvent {
                            jd_before,
                            jd,
                            moon: current.moon,
                            phenomenon,
                            is_start: now,
                        });
                    }
                }
            }
            last_seen.insert(current.moon, (jd, *current));
        }
    }

    debug!(raw = raw.len(), skipped, "jovian coarse scan done");
    Ok(raw)
}

/// Refine one raw boundary. Falls back to the bracket midpoint if a
/// bisection sample has no geometry.
pub fn refine_raw_event<P, S>(
    states: &P,
    satellites: &S,
    raw: &RawEvent,
    iterations: u32,
) -> f64
where
    P: BodyStateProvider + ?Sized,
    S: JovianSatelliteProvider + ?Sized,
{
    let refined = bisect_flip(
        |t| moon_state(states, satellites, t, raw.moon).map(|s| s.flag(raw.phenomenon)),
        raw.jd_before,
        !raw.is_start,
        raw.jd,
        iterations,
    );
    match refined {
        Ok(t) => t,
        Err(e) => {
            warn!(text = %raw.text(), error = %e, "refinement failed, using bracket midpoint");
            0.5 * (raw.jd_before + raw.jd)
        }
    }
}

fn is_masked<P, S>(states: &P, satellites: &S, jd: f64, raw: &RawEvent) -> bool
where
    P: BodyStateProvider + ?Sized,
    S: JovianSatelliteProvider + ?Sized,
{
    let hidden_by = match raw.phenomenon {
        JovianPhenomenon::Occultation => JovianPhenomenon::Eclipse,
        JovianPhenomenon::Eclipse => JovianPhenomenon::Occultation,
        _ => return false,
    };
    moon_state(states, satellites, jd, raw.moon).is_ok_and(|s| s.flag(hidden_by))
}

/// Search Jovian mutual events in `[jd_start, jd_end]`.
///
/// Events are sorted by refined time. Occultation and eclipse boundaries are
/// dropped while the other condition holds when `config.mutual_masking` is set.
pub fn search_jovian_events<P, S>(
    states: &P,
    satellites: &S,
    jd_start: f64,
    jd_end: f64,
    config: &JovianScanConfig,
) -> Result<Vec<JovianEvent>, SearchError>
where
    P: BodyStateProvider + ?Sized,
    S: JovianSatelliteProvider + ?Sized,
{
    let raw = scan_raw_events(states, satellites, jd_start, jd_end, config)?;

    let mut events = Vec::with_capacity(raw.len());
    let mut masked = 0usize;
    for r in &raw {
        let jd = refine_raw_event(states, satellites, r, config.bisect_iterations);
        if config.mutual_masking && is_masked(states, satellites, jd, r) {
            masked += 1;
            continue;
        }
        events.push(JovianEvent {
            jd,
            moon: r.moon,
            phenomenon: r.phenomenon,
            is_start: r.is_start,
            text: event_text(r.moon, r.phenomenon, r.is_start),
        });
    }

    events.sort_by(|a, b| {
        a.jd.total_cmp(&b.jd)
            .then(a.moon.cmp(&b.moon))
            .then(a.phenomenon.cmp(&b.phenomenon))
    });
    info!(events = events.len(), masked, "jovian scan complete");
    Ok(events)
}
