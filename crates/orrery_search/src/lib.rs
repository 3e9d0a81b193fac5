//! Event searches over ephemeris-driven geometry.
//!
//! Built on one generic detector ([`detector`]): fixed-step scans that
//! bracket a zero crossing, boolean flip or local extremum, refined by
//! fixed-count bisection or golden-section search. On top of it:
//! - Jovian mutual events (transit, occultation, shadow transit, eclipse)
//! - heliocentric conjunctions and oppositions
//! - greatest elongations of Mercury and Venus
//! - rise, transit and set
//! - horizon visibility, the visible-longitude band and lunar eclipse
//!   visibility
//!
//! All searches take a [`BodyStateProvider`](orrery_ephem::BodyStateProvider)
//! by reference and are pure functions of their inputs, so independent
//! searches may run concurrently over one loaded store.

pub mod conjunction;
pub mod conjunction_types;
pub mod detector;
pub mod elongation;
pub mod elongation_types;
pub mod error;
pub mod jovian;
pub mod jovian_types;
pub mod riseset;
pub mod riseset_types;
pub mod visibility;

pub use conjunction::{MAX_SCAN_DAYS, next_conjunction, prev_conjunction, search_conjunctions};
pub use conjunction_types::{ConjunctionConfig, ConjunctionEvent, ConjunctionKind};
pub use detector::{
    BISECT_ITER_DAY, BISECT_ITER_MINUTE, CrossingRule, Extremum, SearchDirection, bisect_flip,
    bisect_zero, bracket_extremum, find_crossing, golden_section,
};
pub use elongation::{
    elongation_deg, next_greatest_elongation, prev_greatest_elongation,
    search_greatest_elongations,
};
pub use elongation_types::{ElongationConfig, ElongationEvent, ElongationKind};
pub use error::SearchError;
pub use jovian::{refine_raw_event, scan_raw_events, search_jovian_events};
pub use jovian_types::{JovianEvent, JovianScanConfig, RawEvent};
pub use riseset::{
    cos_hour_angle, day_visibility, horizon_altitude_deg, horizon_crossing_jd, planet_events,
    transit_jd,
};
pub use riseset_types::{DayVisibility, GeoLocation, PlanetEvents, RiseSetConfig, format_hours};
pub use visibility::{
    ECLIPSE_MOON_ALTITUDE_DEG, EclipseVisibility, EventVisibility, VisibleLonRange,
    body_altitude_deg, classify_event, eclipse_visibility, is_above_horizon, is_body_up,
    moon_altitude_deg, visible_lon_range,
};
