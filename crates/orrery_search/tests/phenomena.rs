mod common;

use common::{CircularSky, EPOCH};
use orrery_ephem::Body;
use orrery_search::{
    ConjunctionConfig, ConjunctionKind, ElongationConfig, ElongationKind, SearchError,
    next_conjunction, next_greatest_elongation, prev_conjunction, prev_greatest_elongation,
    search_conjunctions, search_greatest_elongations,
};

const VENUS_SYNODIC: f64 = 583.9236;
const MARS_SYNODIC: f64 = 779.9343;

#[test]
fn venus_superior_then_inferior() {
    let cfg = ConjunctionConfig::default();
    let sup = next_conjunction(
        &CircularSky,
        Body::Venus,
        ConjunctionKind::Superior,
        EPOCH + 10.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert_eq!(sup.kind, ConjunctionKind::Superior);
    assert!((sup.jd - EPOCH - VENUS_SYNODIC / 2.0).abs() < 1e-3, "jd={}", sup.jd);
    assert!(sup.body_dist_geo_au > sup.sun_dist_geo_au);

    // The superior conjunction is rejected on the way to the inferior one.
    let inf = next_conjunction(
        &CircularSky,
        Body::Venus,
        ConjunctionKind::Inferior,
        EPOCH + 10.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert_eq!(inf.kind, ConjunctionKind::Inferior);
    assert!((inf.jd - EPOCH - VENUS_SYNODIC).abs() < 1e-3, "jd={}", inf.jd);
    assert!(inf.body_dist_geo_au < inf.sun_dist_geo_au);
}

#[test]
fn venus_previous_inferior() {
    let cfg = ConjunctionConfig::default();
    let inf = prev_conjunction(
        &CircularSky,
        Body::Venus,
        ConjunctionKind::Inferior,
        EPOCH + 500.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert!((inf.jd - EPOCH).abs() < 1e-3, "jd={}", inf.jd);
}

#[test]
fn mars_conjunction_and_opposition() {
    let cfg = ConjunctionConfig::default();
    let conj = next_conjunction(
        &CircularSky,
        Body::Mars,
        ConjunctionKind::Superior,
        EPOCH + 10.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert!((conj.jd - EPOCH - MARS_SYNODIC / 2.0).abs() < 1e-3, "jd={}", conj.jd);

    let opp = next_conjunction(
        &CircularSky,
        Body::Mars,
        ConjunctionKind::Opposition,
        EPOCH + 10.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert_eq!(opp.kind, ConjunctionKind::Opposition);
    assert!((opp.jd - EPOCH - MARS_SYNODIC).abs() < 1e-3, "jd={}", opp.jd);
    let d = (opp.body_helio_lon_deg - opp.earth_helio_lon_deg + 540.0) % 360.0 - 180.0;
    assert!(d.abs() < 1e-3, "helio lon difference {d}");
}

#[test]
fn conjunctions_in_range() {
    let cfg = ConjunctionConfig::default();
    let events = search_conjunctions(
        &CircularSky,
        Body::Venus,
        ConjunctionKind::Superior,
        EPOCH + 1.0,
        EPOCH + 3.0 * VENUS_SYNODIC,
        &cfg,
    )
    .unwrap();
    assert_eq!(events.len(), 3);
    for (i, e) in events.iter().enumerate() {
        let want = EPOCH + (i as f64 + 0.5) * VENUS_SYNODIC;
        assert!((e.jd - want).abs() < 1e-3, "event {i}: {}", e.jd);
    }
}

#[test]
fn wrong_body_rejected() {
    let cfg = ConjunctionConfig::default();
    let r = next_conjunction(&CircularSky, Body::Jupiter, ConjunctionKind::Inferior, EPOCH, &cfg);
    assert!(matches!(r, Err(SearchError::InvalidBody(_))));
    let r = next_greatest_elongation(
        &CircularSky,
        Body::Mars,
        ElongationKind::East,
        EPOCH,
        &ElongationConfig::default(),
    );
    assert!(matches!(r, Err(SearchError::InvalidBody(_))));
}

#[test]
fn reversed_range_rejected() {
    let r = search_conjunctions(
        &CircularSky,
        Body::Venus,
        ConjunctionKind::Inferior,
        EPOCH + 10.0,
        EPOCH,
        &ConjunctionConfig::default(),
    );
    assert!(matches!(r, Err(SearchError::InvalidConfig(_))));
}

#[test]
fn venus_greatest_elongations() {
    let cfg = ElongationConfig::default();
    let west = next_greatest_elongation(
        &CircularSky,
        Body::Venus,
        ElongationKind::West,
        EPOCH + 1.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert_eq!(west.kind, ElongationKind::West);
    assert!((west.jd - EPOCH - 70.877).abs() < 0.01, "jd={}", west.jd);
    assert!((west.elongation_deg - 46.3027).abs() < 1e-3, "elong={}", west.elongation_deg);

    // West is skipped when East is requested.
    let east = next_greatest_elongation(
        &CircularSky,
        Body::Venus,
        ElongationKind::East,
        EPOCH + 1.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert_eq!(east.kind, ElongationKind::East);
    assert!((east.jd - EPOCH - 513.046).abs() < 0.01, "jd={}", east.jd);

    let back = prev_greatest_elongation(
        &CircularSky,
        Body::Venus,
        ElongationKind::West,
        EPOCH + 400.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert!((back.jd - west.jd).abs() < 0.01);
}

#[test]
fn elongations_in_range_alternate() {
    let events = search_greatest_elongations(
        &CircularSky,
        Body::Venus,
        EPOCH,
        EPOCH + 600.0,
        &ElongationConfig::default(),
    )
    .unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, [ElongationKind::West, ElongationKind::East]);
}

#[test]
fn elongation_near_range_end_is_found() {
    let cfg = ElongationConfig::default();
    // West maximum at EPOCH + 70.877, inside the last day of the range.
    let events =
        search_greatest_elongations(&CircularSky, Body::Venus, EPOCH + 1.0, EPOCH + 71.5, &cfg)
            .unwrap();
    assert_eq!(events.len(), 1, "{events:?}");
    assert_eq!(events[0].kind, ElongationKind::West);
    assert!((events[0].jd - EPOCH - 70.877).abs() < 0.01, "jd={}", events[0].jd);

    // Ending just before the maximum excludes it.
    let events =
        search_greatest_elongations(&CircularSky, Body::Venus, EPOCH + 1.0, EPOCH + 70.5, &cfg)
            .unwrap();
    assert!(events.is_empty(), "{events:?}");
}

#[test]
fn mercury_elongation_smaller_than_venus() {
    let cfg = ElongationConfig::default();
    let m = next_greatest_elongation(
        &CircularSky,
        Body::Mercury,
        ElongationKind::West,
        EPOCH + 1.0,
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert!((m.elongation_deg - 22.768).abs() < 1e-2, "elong={}", m.elongation_deg);
    assert!((m.jd - EPOCH - 21.641).abs() < 0.01, "jd={}", m.jd);
}
