//! Shadow and eclipse geometry.
//!
//! Two models feed the event searches:
//! - the Jovian mutual-event model, which turns Galilean satellite positions
//!   into per-moon transit, occultation, shadow-transit and eclipse flags;
//! - the lunar eclipse model: Sun and Moon series, Earth shadow cones, and
//!   phase windows from catalog durations.

pub mod catalog;
pub mod cones;
pub mod diagram;
pub mod error;
pub mod galilean;
pub mod jovian;
pub mod moon;
pub mod sun;

pub use catalog::{
    EclipseKind, EclipsePhase, EclipsePhaseWindow, LunarEclipseRecord, PhaseInterval,
    load_catalog, parse_catalog,
};
pub use cones::ShadowRadii;
pub use diagram::ShadowDiagram;
pub use error::ShadowError;
pub use galilean::{LowPrecisionGalilean, galilean_positions};
pub use jovian::{
    JUPITER_FLATTENING, JovianGeometry, JovianPhenomenon, MoonGeometryState, jovian_geometry,
    on_disk, phase_angle_deg, shadow_shift_per_z,
};
pub use moon::{MoonPosition, moon_position};
pub use orrery_ephem::JovianMoon;
pub use sun::{SunPosition, sun_position};
