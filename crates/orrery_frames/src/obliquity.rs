//! Obliquity of the ecliptic.

/// Mean obliquity at J2000.0 in degrees (23° 26′ 21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111_111_11;

/// Mean obliquity at J2000.0 in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;

/// cos(ε₀), precomputed.
pub const COS_OBL: f64 = 0.917_482_062_069_181_8;

/// sin(ε₀), precomputed.
pub const SIN_OBL: f64 = 0.397_777_155_931_913_7;

/// Mean obliquity of date in degrees (IAU 1980 polynomial).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precomputed_trig_matches() {
        assert!((OBLIQUITY_J2000_RAD.cos() - COS_OBL).abs() < 1e-14);
        assert!((OBLIQUITY_J2000_RAD.sin() - SIN_OBL).abs() < 1e-14);
    }

    #[test]
    fn mean_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - OBLIQUITY_J2000_DEG).abs() < 1e-12);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987-Apr-10 0h TD: ε₀ = 23°26′27.407″
        let t = (2_446_895.5 - 2_451_545.0) / 36525.0;
        let eps0 = mean_obliquity_deg(t);
        let expected0 = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((eps0 - expected0).abs() < 0.002 / 3600.0, "ε₀ = {eps0}");
    }
}
