//! Angle normalization.

/// Reduce an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Reduce an angle in degrees to [-180, 180).
pub fn normalize_pm180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn normalize_ranges() {
        assert!((normalize_360(-10.0) - 350.0).abs() < EPS);
        assert!((normalize_360(725.0) - 5.0).abs() < EPS);
        assert!((normalize_pm180(190.0) + 170.0).abs() < EPS);
        assert!((normalize_pm180(-190.0) - 170.0).abs() < EPS);
        assert!((normalize_pm180(180.0) + 180.0).abs() < EPS);
        assert!(normalize_360(-1e-18) < 360.0);
    }
}
