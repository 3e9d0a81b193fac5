//! Low-precision solar position.
//!
//! Source: Meeus, Astronomical Algorithms, 2nd ed., Chapter 25. Accurate to
//! about 0.01°, with IAU 1980 nutation applied for the true equinox of date.

use orrery_frames::{ecliptic_to_equatorial, mean_obliquity_deg, normalize_360, nutation_iau1980};
use orrery_time::jd_to_centuries;

/// Apparent geocentric position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Geometric longitude, mean equinox of date.
    pub true_lon_deg: f64,
    /// Apparent longitude: nutation and aberration applied.
    pub apparent_lon_deg: f64,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub dist_au: f64,
}

/// Sun position at `jd`.
pub fn sun_position(jd: f64) -> SunPosition {
    let t = jd_to_centuries(jd);
    let t2 = t * t;

    let l0 = 280.46646 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.52911 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let nu = (m + c).to_radians();
    let dist_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let nut = nutation_iau1980(t);
    let aberration_arcsec = -20.4898 / dist_au;
    let apparent = true_lon + (nut.dpsi_arcsec + aberration_arcsec) / 3600.0;
    let eps = mean_obliquity_deg(t) + nut.deps_arcsec / 3600.0;

    let (ra, dec) = ecliptic_to_equatorial(apparent, 0.0, eps);

    SunPosition {
        true_lon_deg: normalize_360(true_lon),
        apparent_lon_deg: normalize_360(apparent),
        ra_deg: ra,
        dec_deg: dec,
        dist_au,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992-Oct-13 0h TD
        let s = sun_position(2_448_908.5);
        assert!((s.true_lon_deg - 199.90988).abs() < 1e-4, "☉ = {}", s.true_lon_deg);
        assert!((s.dist_au - 0.99766).abs() < 1e-5, "R = {}", s.dist_au);
        assert!((s.apparent_lon_deg - 199.90895).abs() < 1e-3, "λ = {}", s.apparent_lon_deg);
        assert!((s.ra_deg - 198.38083).abs() < 1e-3, "α = {}", s.ra_deg);
        assert!((s.dec_deg + 7.78507).abs() < 1e-3, "δ = {}", s.dec_deg);
    }

    #[test]
    fn declination_small_near_march_equinox() {
        // 2024-Mar-20 03:06 UT
        let s = sun_position(2_460_389.629);
        assert!(s.dec_deg.abs() < 0.01, "δ = {}", s.dec_deg);
        assert!(s.apparent_lon_deg < 0.01 || s.apparent_lon_deg > 359.99);
    }

    #[test]
    fn distance_within_orbit_bounds() {
        for i in 0..36 {
            let s = sun_position(2_460_000.5 + i as f64 * 10.0);
            assert!(s.dist_au > 0.983 && s.dist_au < 1.017, "R = {}", s.dist_au);
        }
    }
}
