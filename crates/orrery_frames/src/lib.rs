//! Frame and horizon helpers shared by the orrery crates.
//!
//! Provides equatorial ↔ ecliptic rotation, angle normalization, mean
//! obliquity, IAU 1980 nutation, the shared distance constants, and the
//! horizon toolkit used by rise/set and visibility: altitude, refraction,
//! topocentric parallax and angular separation.

pub mod horizon;
pub mod nutation;
pub mod obliquity;
pub mod rotation;
pub mod spherical;

pub use horizon::{
    AU_KM, EARTH_EQUATORIAL_RADIUS_KM, altitude_deg, angular_separation_deg,
    horizontal_parallax_deg, refraction_bennett_arcmin, topocentric_equatorial,
};
pub use nutation::{Nutation, nutation_iau1980};
pub use obliquity::{
    COS_OBL, OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, SIN_OBL, mean_obliquity_deg,
};
pub use rotation::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use spherical::{normalize_360, normalize_pm180};
