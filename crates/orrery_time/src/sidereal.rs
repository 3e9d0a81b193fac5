//! Earth Rotation Angle, Greenwich Mean Sidereal Time, and hour angle.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Mean sidereal rotation of the Earth in degrees per solar day.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Earth Rotation Angle at a given Julian Date.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du)
/// where Du = JD − 2451545.0.
///
/// Returns radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    // Split the day count so the large integer part does not eat precision.
    let frac = du.rem_euclid(1.0);
    let theta = TAU * (0.779_057_273_264_0 + frac + 0.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given Julian Date.
///
/// GMST = ERA + polynomial(T), where T = Julian centuries from J2000.0.
///
/// Returns radians in [0, 2π).
pub fn gmst_rad(jd: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd);
    let t = (jd - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// GMST in degrees, [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    gmst_rad(jd).to_degrees().rem_euclid(360.0)
}

/// Local Sidereal Time in degrees at `jd` for an east longitude in degrees.
pub fn local_sidereal_time_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd) + longitude_east_deg).rem_euclid(360.0)
}

/// Local hour angle in degrees, normalized to [-180, 180).
///
/// Negative before meridian transit (rising side), positive after.
pub fn hour_angle_deg(lst_deg: f64, ra_deg: f64) -> f64 {
    (lst_deg - ra_deg + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!(
            (theta_deg - 280.46).abs() < 0.1,
            "ERA at J2000 = {theta_deg}°, expected ~280.46°"
        );
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h: GMST ≈ 6h 39m 51s ≈ 99.97°
        let gmst = gmst_deg(2_451_544.5);
        assert!(
            (gmst - 99.97).abs() < 0.1,
            "GMST at J2000 midnight = {gmst}°, expected ~99.97°"
        );
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987-Apr-10 0h UT: 13h 10m 46.3668s
        let hours = gmst_deg(2_446_895.5) / 15.0;
        let expected = 13.0 + 10.0 / 60.0 + 46.3668 / 3600.0;
        assert!(
            (hours - expected).abs() < 1.0 / 3600.0,
            "GMST = {hours}h, expected {expected}h"
        );
    }

    #[test]
    fn gmst_advances_one_sidereal_day() {
        let g1 = gmst_deg(2_460_000.5);
        let g2 = gmst_deg(2_460_001.5);
        let advance = (g2 - g1).rem_euclid(360.0);
        assert!((advance - 0.9856).abs() < 1e-3, "advance = {advance}");
    }

    #[test]
    fn lst_east_offset() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_deg(jd, 90.0);
        assert!((lst - (gmst_deg(jd) + 90.0).rem_euclid(360.0)).abs() < 1e-12);
    }

    #[test]
    fn hour_angle_wraps() {
        assert!((hour_angle_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((hour_angle_deg(350.0, 10.0) + 20.0).abs() < 1e-12);
        assert!((hour_angle_deg(100.0, 100.0)).abs() < 1e-12);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range: {g}");
        }
    }
}
