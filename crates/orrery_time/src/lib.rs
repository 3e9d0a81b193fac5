//! Julian Date arithmetic and sidereal time.
//!
//! This crate provides:
//! - Julian Date <-> calendar conversions (Gregorian after 1582-Oct-15)
//! - Julian centuries from J2000.0
//! - Earth Rotation Angle and Greenwich Mean Sidereal Time
//! - Local sidereal time and hour angle helpers
//!
//! All epochs are plain `f64` Julian Dates. The engine does not distinguish
//! UT1 from UTC or TT; the sub-minute difference is below the resolution the
//! event searches are tuned for.

pub mod julian;
pub mod sidereal;

pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, midnight_before,
};
pub use sidereal::{
    earth_rotation_angle_rad, gmst_deg, gmst_rad, hour_angle_deg, local_sidereal_time_deg,
    SIDEREAL_RATE_DEG_PER_DAY,
};
