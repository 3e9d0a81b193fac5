//! Horizontal coordinates, refraction, and topocentric parallax.
//!
//! Sources: Meeus, Astronomical Algorithms, 2nd ed., chapters 13, 16 and 40.

use crate::spherical::normalize_360;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Earth equatorial radius in km.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Polar / equatorial axis ratio b/a of the reference ellipsoid.
const EARTH_AXIS_RATIO: f64 = 0.996_647_19;

/// Geometric altitude of a body in degrees.
///
/// `alt = asin(sin φ sin δ + cos φ cos δ cos H)`, with the hour angle given
/// in hours.
pub fn altitude_deg(ha_hours: f64, lat_deg: f64, dec_deg: f64) -> f64 {
    let h = (ha_hours * 15.0).to_radians();
    let (sp, cp) = lat_deg.to_radians().sin_cos();
    let (sd, cd) = dec_deg.to_radians().sin_cos();
    (sp * sd + cp * cd * h.cos()).clamp(-1.0, 1.0).asin().to_degrees()
}

/// Refraction in arcminutes for an apparent (observed) altitude (Bennett 1982).
pub fn refraction_bennett_arcmin(apparent_alt_deg: f64) -> f64 {
    let h = apparent_alt_deg.max(-1.0);
    1.0 / (h + 7.31 / (h + 4.4)).to_radians().tan()
}

/// Equatorial horizontal parallax in degrees for a body at `dist_km`.
pub fn horizontal_parallax_deg(dist_km: f64) -> f64 {
    (EARTH_EQUATORIAL_RADIUS_KM / dist_km).clamp(-1.0, 1.0).asin().to_degrees()
}

/// Topocentric (RA, Dec) in degrees from geocentric coordinates.
///
/// `lst_deg` is the local sidereal time, `height_m` the observer's height above
/// the ellipsoid. Uses the rigorous Meeus 40.2/40.3 formulation.
pub fn topocentric_equatorial(
    ra_deg: f64,
    dec_deg: f64,
    dist_km: f64,
    lat_deg: f64,
    height_m: f64,
    lst_deg: f64,
) -> (f64, f64) {
    let phi = lat_deg.to_radians();
    let u = (EARTH_AXIS_RATIO * phi.tan()).atan();
    let h_ratio = height_m / (EARTH_EQUATORIAL_RADIUS_KM * 1000.0);
    let rho_sin = EARTH_AXIS_RATIO * u.sin() + h_ratio * phi.sin();
    let rho_cos = u.cos() + h_ratio * phi.cos();

    let sin_pi = EARTH_EQUATORIAL_RADIUS_KM / dist_km;
    let ha = (lst_deg - ra_deg).to_radians();
    let (sd, cd) = dec_deg.to_radians().sin_cos();

    let denom = cd - rho_cos * sin_pi * ha.cos();
    let d_ra = (-rho_cos * sin_pi * ha.sin()).atan2(denom);
    let dec_topo = ((sd - rho_sin * sin_pi) * d_ra.cos()).atan2(denom);

    (normalize_360(ra_deg + d_ra.to_degrees()), dec_topo.to_degrees())
}

/// Great-circle separation of two equatorial positions in degrees.
///
/// Vincenty form; stable for both tiny and near-antipodal separations.
pub fn angular_separation_deg(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let d_ra = (ra2_deg - ra1_deg).to_radians();
    let (s1, c1) = dec1_deg.to_radians().sin_cos();
    let (s2, c2) = dec2_deg.to_radians().sin_cos();

    let num_a = c2 * d_ra.sin();
    let num_b = c1 * s2 - s1 * c2 * d_ra.cos();
    let den = s1 * s2 + c1 * c2 * d_ra.cos();
    (num_a.hypot(num_b)).atan2(den).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn altitude_on_meridian() {
        // Upper culmination: alt = 90 - |φ - δ|
        let alt = altitude_deg(0.0, 40.0, 10.0);
        assert!((alt - 60.0).abs() < EPS, "alt = {alt}");
    }

    #[test]
    fn equator_star_sets_six_hours_after_transit() {
        let alt = altitude_deg(6.0, 0.0, 0.0);
        assert!(alt.abs() < EPS, "alt = {alt}");
    }

    #[test]
    fn refraction_at_horizon() {
        // Apparent horizon: ~34.5'.
        let r = refraction_bennett_arcmin(0.0);
        assert!((r - 34.5).abs() < 0.5, "R = {r}'");
    }

    #[test]
    fn refraction_vanishes_at_zenith() {
        assert!(refraction_bennett_arcmin(90.0).abs() < 0.01);
    }

    #[test]
    fn moon_parallax_near_one_degree() {
        let p = horizontal_parallax_deg(384_400.0);
        assert!((p - 0.9507).abs() < 0.001, "π = {p}");
    }

    #[test]
    fn meeus_example_40a_mars() {
        // 2003-Aug-28 3h17m UT, Palomar. H = 288.7958°.
        let dist_km = 0.37276 * AU_KM;
        let ra = 339.530208;
        let lat = 33.0 + 21.0 / 60.0 + 22.0 / 3600.0;
        let lst = ra + 288.7958;
        let (ra_t, dec_t) = topocentric_equatorial(ra, -15.771083, dist_km, lat, 1706.0, lst);
        let expected_ra = (22.0 + 38.0 / 60.0 + 8.54 / 3600.0) * 15.0;
        let expected_dec = -(15.0 + 46.0 / 60.0 + 30.0 / 3600.0);
        assert!((ra_t - expected_ra).abs() < 2e-5, "α' = {ra_t}");
        assert!((dec_t - expected_dec).abs() < 5e-5, "δ' = {dec_t}");
    }

    #[test]
    fn separation_simple_cases() {
        assert!((angular_separation_deg(0.0, 0.0, 90.0, 0.0) - 90.0).abs() < EPS);
        assert!((angular_separation_deg(10.0, 89.0, 190.0, 89.0) - 2.0).abs() < 1e-9);
        assert!((angular_separation_deg(0.0, 0.0, 180.0, 0.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn separation_meeus_example_17a() {
        // Arcturus–Spica: 32.7930°
        let d = angular_separation_deg(213.9154, 19.1825, 201.2983, -11.1614);
        assert!((d - 32.7930).abs() < 1e-3, "d = {d}");
    }
}
