//! Umbra and penumbra cone radii at the Moon's distance.
//!
//! Similar-triangle geometry of the Sun and Earth. The umbral apex lies
//! beyond the Earth at `L_u = d(1 + Re/(Rs − Re))` from the Sun; the penumbral
//! apex lies between Sun and Earth at `L_p = d(1 − Re/(Rs + Re))`. Each radius
//! is enlarged by the atmospheric factor and computed for both the
//! equatorial and the polar Earth radius.

/// Solar radius in km.
pub const SUN_RADIUS_KM: f64 = 696_000.0;
/// Earth equatorial radius in km.
pub const EARTH_RADIUS_EQUATORIAL_KM: f64 = 6378.137;
/// Earth polar radius in km.
pub const EARTH_RADIUS_POLAR_KM: f64 = 6356.752;
/// Enlargement of the shadow by the Earth's atmosphere.
pub const ATMOSPHERIC_EXPANSION: f64 = 1.05;

/// Shadow radii in km at the Moon's distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowRadii {
    pub umbra_equatorial_km: f64,
    pub umbra_polar_km: f64,
    pub penumbra_equatorial_km: f64,
    pub penumbra_polar_km: f64,
}

impl ShadowRadii {
    /// Radii for a Sun at `sun_dist_km` and Moon at `moon_dist_km` from the Earth.
    pub fn new(sun_dist_km: f64, moon_dist_km: f64) -> Self {
        let umbra = |re| umbra_radius_km(sun_dist_km, moon_dist_km, re);
        let penumbra = |re| penumbra_radius_km(sun_dist_km, moon_dist_km, re);
        Self {
            umbra_equatorial_km: umbra(EARTH_RADIUS_EQUATORIAL_KM),
            umbra_polar_km: umbra(EARTH_RADIUS_POLAR_KM),
            penumbra_equatorial_km: penumbra(EARTH_RADIUS_EQUATORIAL_KM),
            penumbra_polar_km: penumbra(EARTH_RADIUS_POLAR_KM),
        }
    }
}

/// Umbral radius at the Moon's distance.
pub fn umbra_radius_km(sun_dist_km: f64, moon_dist_km: f64, earth_radius_km: f64) -> f64 {
    let apex = sun_dist_km * (1.0 + earth_radius_km / (SUN_RADIUS_KM - earth_radius_km));
    SUN_RADIUS_KM * (apex - sun_dist_km - moon_dist_km) / apex * ATMOSPHERIC_EXPANSION
}

/// Penumbral radius at the Moon's distance.
pub fn penumbra_radius_km(sun_dist_km: f64, moon_dist_km: f64, earth_radius_km: f64) -> f64 {
    let apex = sun_dist_km * (1.0 - earth_radius_km / (SUN_RADIUS_KM + earth_radius_km));
    SUN_RADIUS_KM * (sun_dist_km + moon_dist_km - apex) / apex * ATMOSPHERIC_EXPANSION
}

#[cfg(test)]
mod tests {
    use orrery_frames::AU_KM;

    use super::*;

    #[test]
    fn typical_angular_sizes() {
        let moon = 384_400.0;
        let r = ShadowRadii::new(AU_KM, moon);
        let umbra_deg = (r.umbra_equatorial_km / moon).atan().to_degrees();
        let penumbra_deg = (r.penumbra_equatorial_km / moon).atan().to_degrees();
        assert!((umbra_deg - 0.72).abs() < 0.03, "umbra = {umbra_deg}°");
        assert!((penumbra_deg - 1.28).abs() < 0.04, "penumbra = {penumbra_deg}°");
    }

    #[test]
    fn polar_smaller_than_equatorial() {
        let r = ShadowRadii::new(AU_KM, 370_000.0);
        assert!(r.umbra_polar_km < r.umbra_equatorial_km);
        assert!(r.penumbra_polar_km < r.penumbra_equatorial_km);
    }

    #[test]
    fn penumbra_contains_umbra() {
        for &moon in &[356_000.0, 384_400.0, 406_700.0] {
            let r = ShadowRadii::new(AU_KM, moon);
            assert!(r.penumbra_equatorial_km > r.umbra_equatorial_km);
            assert!(r.umbra_equatorial_km > 0.0);
        }
    }

    #[test]
    fn umbra_shrinks_with_moon_distance() {
        let near = umbra_radius_km(AU_KM, 356_000.0, EARTH_RADIUS_EQUATORIAL_KM);
        let far = umbra_radius_km(AU_KM, 406_700.0, EARTH_RADIUS_EQUATORIAL_KM);
        assert!(near > far);
    }
}
