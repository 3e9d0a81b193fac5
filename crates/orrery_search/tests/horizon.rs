mod common;

use common::SeriesSky;
use orrery_ephem::{Body, BodyStateProvider};
use orrery_frames::normalize_pm180;
use orrery_search::{
    DayVisibility, ECLIPSE_MOON_ALTITUDE_DEG, EventVisibility, GeoLocation, RiseSetConfig,
    body_altitude_deg, classify_event, eclipse_visibility, is_body_up, moon_altitude_deg,
    planet_events, visible_lon_range,
};
use orrery_shadow::{
    EclipseKind, EclipsePhaseWindow, LunarEclipseRecord, PhaseInterval, moon_position,
};
use orrery_time::{calendar_to_jd, gmst_deg};

const GEOMETRIC: RiseSetConfig = RiseSetConfig {
    refraction_arcmin: 0.0,
};

#[test]
fn equinox_noon_sun_altitude_matches_declination() {
    let loc = GeoLocation::new(0.0, 0.0, 0.0);
    let ev = planet_events(&SeriesSky, Body::Sun, &loc, 2024, 3, 20, 0.0, &GEOMETRIC).unwrap();
    assert_eq!(ev.visibility, DayVisibility::Crosses);
    // Equation of time is about −7.5 min on this date.
    assert!(ev.transit > 12.0 && ev.transit < 12.25, "transit={}", ev.transit);

    let jd_noon = calendar_to_jd(2024, 3, 20.0) + ev.transit / 24.0;
    let sun = SeriesSky.state(Body::Sun, jd_noon).unwrap();
    assert!(sun.dec_deg.abs() < 0.5, "dec={}", sun.dec_deg);

    let alt = body_altitude_deg(&SeriesSky, Body::Sun, jd_noon, &loc).unwrap();
    let expected = 90.0 - sun.dec_deg.abs();
    assert!((alt - expected).abs() < 0.1, "alt={alt} expected={expected}");
}

#[test]
fn equator_day_length_includes_upper_limb() {
    let loc = GeoLocation::new(0.0, 0.0, 0.0);
    let ev = planet_events(&SeriesSky, Body::Sun, &loc, 2024, 3, 20, 0.0, &GEOMETRIC).unwrap();
    assert!(ev.rise < ev.transit && ev.transit < ev.set);
    let day = ev.set - ev.rise;
    assert!((day - 12.033).abs() < 0.02, "day length {day} h");
}

#[test]
fn refraction_lengthens_the_day() {
    let loc = GeoLocation::new(0.0, 0.0, 0.0);
    let refracted = RiseSetConfig::with_refraction();
    let ev = planet_events(&SeriesSky, Body::Sun, &loc, 2024, 3, 20, 0.0, &refracted).unwrap();
    let day = ev.set - ev.rise;
    assert!((day - 12.110).abs() < 0.02, "day length {day} h");
}

#[test]
fn negative_refraction_is_rejected() {
    let loc = GeoLocation::new(0.0, 0.0, 0.0);
    let bad = RiseSetConfig {
        refraction_arcmin: -5.0,
    };
    assert!(planet_events(&SeriesSky, Body::Sun, &loc, 2024, 3, 20, 0.0, &bad).is_err());
}

#[test]
fn utc_offset_shifts_local_hours() {
    let loc = GeoLocation::new(0.0, 0.0, 0.0);
    let utc = planet_events(&SeriesSky, Body::Sun, &loc, 2024, 3, 20, 0.0, &GEOMETRIC).unwrap();
    let plus2 = planet_events(&SeriesSky, Body::Sun, &loc, 2024, 3, 20, 2.0, &GEOMETRIC).unwrap();
    assert!((plus2.transit - utc.transit - 2.0).abs() < 0.01);
}

#[test]
fn polar_summer_and_winter() {
    let loc = GeoLocation::new(80.0, 15.0, 0.0);
    let summer = planet_events(&SeriesSky, Body::Sun, &loc, 2024, 6, 21, 0.0, &GEOMETRIC).unwrap();
    assert_eq!(summer.visibility, DayVisibility::AlwaysUp);
    assert!(summer.rise.is_nan() && summer.set.is_nan());
    assert!(summer.transit.is_finite());

    let winter = planet_events(&SeriesSky, Body::Sun, &loc, 2024, 12, 21, 0.0, &GEOMETRIC).unwrap();
    assert_eq!(winter.visibility, DayVisibility::NeverUp);
    assert!(winter.rise.is_nan() && winter.transit.is_nan() && winter.set.is_nan());
}

#[test]
fn moon_rise_set_in_day_or_nan() {
    let loc = GeoLocation::new(40.0, -75.0, 0.0);
    let mut rises = 0;
    for day in 1..=28 {
        let ev =
            planet_events(&SeriesSky, Body::Moon, &loc, 2024, 2, day, -5.0, &GEOMETRIC).unwrap();
        for h in [ev.rise, ev.transit, ev.set] {
            assert!(h.is_nan() || (0.0..24.0).contains(&h), "day {day}: {h}");
        }
        if ev.rise.is_finite() {
            rises += 1;
        }
    }
    // Roughly one day per lunation has no moonrise.
    assert!(rises >= 24, "rises={rises}");
}

#[test]
fn moon_is_up_just_after_computed_moonrise() {
    let loc = GeoLocation::new(40.0, -75.0, 0.0);
    let mut checked = 0;
    for day in 1..=7 {
        let ev =
            planet_events(&SeriesSky, Body::Moon, &loc, 2024, 2, day, -5.0, &GEOMETRIC).unwrap();
        if ev.rise.is_nan() {
            continue;
        }
        let rise_jd = calendar_to_jd(2024, 2, day as f64) + (ev.rise + 5.0) / 24.0;
        let five_min = 5.0 / 1440.0;
        assert!(
            is_body_up(&SeriesSky, Body::Moon, rise_jd + five_min, &loc).unwrap(),
            "day {day}: not up after rise"
        );
        assert!(
            !is_body_up(&SeriesSky, Body::Moon, rise_jd - five_min, &loc).unwrap(),
            "day {day}: up before rise"
        );
        checked += 1;
    }
    assert!(checked >= 6, "checked={checked}");
}

#[test]
fn circumpolar_band_flags() {
    let gmst = gmst_deg(2_460_000.5);
    let up = visible_lon_range(80.0, 10.0, 85.0, gmst);
    assert!(up.always_up && !up.never_up);
    let down = visible_lon_range(80.0, 10.0, -85.0, gmst);
    assert!(down.never_up && !down.always_up);
}

#[test]
fn band_agrees_with_altitude() {
    let jd = 2_460_000.5;
    let gmst = gmst_deg(jd);
    let (ra, dec) = (75.0, 20.0);
    for lat in [-60.0, -20.0, 0.0, 35.0, 65.0] {
        let band = visible_lon_range(lat, ra, dec, gmst);
        for lon in (-175..=175).step_by(10) {
            let lon = lon as f64;
            let ha_hours = (gmst + lon - ra) / 15.0;
            let alt = orrery_frames::altitude_deg(ha_hours, lat, dec);
            if alt.abs() > 0.5 {
                assert_eq!(band.contains(lon), alt > 0.0, "lat={lat} lon={lon} alt={alt}");
            }
        }
    }
}

fn november_2022() -> EclipsePhaseWindow {
    let rec = LunarEclipseRecord {
        greatest_jd: 2_459_891.958,
        kind: EclipseKind::Total,
        penumbral_min: 359.0,
        partial_min: Some(220.0),
        total_min: Some(85.0),
        magnitude: 1.359,
    };
    EclipsePhaseWindow::from_record(&rec).unwrap()
}

#[test]
fn eclipse_seen_from_pacific_not_from_cairo() {
    let w = november_2022();
    let honolulu = eclipse_visibility(&w, &GeoLocation::new(21.3, -157.9, 0.0));
    assert!(honolulu.visible);
    assert!(honolulu.best_altitude_deg > 60.0);

    let cairo = eclipse_visibility(&w, &GeoLocation::new(30.0, 31.2, 0.0));
    assert!(!cairo.visible);
    assert!(cairo.best_altitude_deg < 0.0);
}

#[test]
fn eclipse_visible_when_moon_rises_during_it() {
    // Moon is below the horizon at first contact in Sydney.
    let w = november_2022();
    let sydney = eclipse_visibility(&w, &GeoLocation::new(-33.9, 151.2, 0.0));
    assert!(sydney.visible);
}

#[test]
fn eclipse_visible_only_between_contacts() {
    // Equatorial observer under the Moon at greatest eclipse, with a 20 h
    // window: the Moon is down at both contacts and up in between.
    let greatest = 2_459_891.958;
    let moon = moon_position(greatest);
    let lon = normalize_pm180(moon.ra_deg - gmst_deg(greatest));
    let loc = GeoLocation::new(0.0, lon, 0.0);
    let penumbral = PhaseInterval {
        start_jd: greatest - 10.0 / 24.0,
        end_jd: greatest + 10.0 / 24.0,
    };
    let w = EclipsePhaseWindow {
        greatest_jd: greatest,
        penumbral: Some(penumbral),
        partial: None,
        total: None,
    };

    assert!(moon_altitude_deg(penumbral.start_jd, &loc) < ECLIPSE_MOON_ALTITUDE_DEG);
    assert!(moon_altitude_deg(penumbral.end_jd, &loc) < ECLIPSE_MOON_ALTITUDE_DEG);

    let vis = eclipse_visibility(&w, &loc);
    assert!(vis.visible);
    let interior = [0.25, 0.5, 0.75].map(|f| penumbral.start_jd + f * penumbral.duration_days());
    assert!(
        interior.iter().any(|&jd| (vis.best_jd - jd).abs() < 1e-9),
        "best_jd={} not an interior sample",
        vis.best_jd
    );
    assert!((vis.best_jd - interior[1]).abs() < 1e-9);
    assert!(vis.best_altitude_deg > 60.0, "alt={}", vis.best_altitude_deg);
}

#[test]
fn daylight_classification() {
    // Equator at local noon: the Sun is up, so the Moon near new is "daylight"
    // or below the horizon, never "visible".
    let loc = GeoLocation::new(0.0, 0.0, 0.0);
    let jd = calendar_to_jd(2024, 3, 20.0) + 0.5;
    assert_eq!(
        classify_event(&SeriesSky, Body::Sun, jd, &loc).unwrap(),
        EventVisibility::Visible
    );
    let moon = classify_event(&SeriesSky, Body::Moon, jd, &loc).unwrap();
    assert_ne!(moon, EventVisibility::Visible);
}
