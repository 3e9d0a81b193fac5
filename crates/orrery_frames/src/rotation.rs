//! Equatorial ↔ ecliptic rotation about the x-axis (equinox direction).
//!
//! All angles in degrees. `eps_deg` is the obliquity to rotate by; pass
//! [`OBLIQUITY_J2000_DEG`](crate::obliquity::OBLIQUITY_J2000_DEG) for the
//! J2000 frame or a true obliquity of date for apparent coordinates.

use crate::spherical::normalize_360;

/// Convert (RA, Dec) to ecliptic (longitude, latitude).
pub fn equatorial_to_ecliptic(ra_deg: f64, dec_deg: f64, eps_deg: f64) -> (f64, f64) {
    let (sa, ca) = ra_deg.to_radians().sin_cos();
    let (sd, cd) = dec_deg.to_radians().sin_cos();
    let (se, ce) = eps_deg.to_radians().sin_cos();

    let lon = (sa * ce + (sd / cd) * se).atan2(ca);
    let lat = (sd * ce - cd * se * sa).clamp(-1.0, 1.0).asin();
    (normalize_360(lon.to_degrees()), lat.to_degrees())
}

/// Convert ecliptic (longitude, latitude) to (RA, Dec).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, eps_deg: f64) -> (f64, f64) {
    let (sl, cl) = lon_deg.to_radians().sin_cos();
    let (sb, cb) = lat_deg.to_radians().sin_cos();
    let (se, ce) = eps_deg.to_radians().sin_cos();

    let ra = (sl * ce - (sb / cb) * se).atan2(cl);
    let dec = (sb * ce + cb * se * sl).clamp(-1.0, 1.0).asin();
    (normalize_360(ra.to_degrees()), dec.to_degrees())
}
