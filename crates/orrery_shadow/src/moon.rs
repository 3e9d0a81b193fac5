//! Lunar position from the truncated ELP-2000/82 series.
//!
//! Source: Meeus, Astronomical Algorithms, 2nd ed., Chapter 47. The 60-term
//! longitude/distance table and 60-term latitude table give about 10″ in
//! longitude and 4″ in latitude.

use orrery_frames::{
    ecliptic_to_equatorial, horizontal_parallax_deg, mean_obliquity_deg, normalize_360,
    nutation_iau1980,
};
use orrery_time::jd_to_centuries;

/// Mean equatorial radius of the Moon in km.
pub const MOON_RADIUS_KM: f64 = 1737.4;

/// Apparent geocentric position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Geometric longitude, mean equinox of date.
    pub lon_deg: f64,
    pub lat_deg: f64,
    /// Longitude with nutation applied.
    pub apparent_lon_deg: f64,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub dist_km: f64,
    /// Equatorial horizontal parallax.
    pub parallax_deg: f64,
}

impl MoonPosition {
    /// Geocentric angular radius in degrees.
    pub fn angular_radius_deg(&self) -> f64 {
        (MOON_RADIUS_KM / self.dist_km).asin().to_degrees()
    }
}

/// `[D, M, M′, F, Σl coeff (1e-6 °), Σr coeff (1e-3 km)]`.
#[rustfmt::skip]
static LON_DIST_TERMS: [[i32; 6]; 60] = [
    [ 0,  0,  1,  0,  6288774, -20905355], [ 2,  0, -1,  0,  1274027,  -3699111],
    [ 2,  0,  0,  0,   658314,  -2955968], [ 0,  0,  2,  0,   213618,   -569925],
    [ 0,  1,  0,  0,  -185116,     48888], [ 0,  0,  0,  2,  -114332,     -3149],
    [ 2,  0, -2,  0,    58793,    246158], [ 2, -1, -1,  0,    57066,   -152138],
    [ 2,  0,  1,  0,    53322,   -170733], [ 2, -1,  0,  0,    45758,   -204586],
    [ 0,  1, -1,  0,   -40923,   -129620], [ 1,  0,  0,  0,   -34720,    108743],
    [ 0,  1,  1,  0,   -30383,    104755], [ 2,  0,  0, -2,    15327,     10321],
    [ 0,  0,  1,  2,   -12528,         0], [ 0,  0,  1, -2,    10980,     79661],
    [ 4,  0, -1,  0,    10675,    -34782], [ 0,  0,  3,  0,    10034,    -23210],
    [ 4,  0, -2,  0,     8548,    -21636], [ 2,  1, -1,  0,    -7888,     24208],
    [ 2,  1,  0,  0,    -6766,     30824], [ 1,  0, -1,  0,    -5163,     -8379],
    [ 1,  1,  0,  0,     4987,    -16675], [ 2, -1,  1,  0,     4036,    -12831],
    [ 2,  0,  2,  0,     3994,    -10445], [ 4,  0,  0,  0,     3861,    -11650],
    [ 2,  0, -3,  0,     3665,     14403], [ 0,  1, -2,  0,    -2689,     -7003],
    [ 2,  0, -1,  2,    -2602,         0], [ 2, -1, -2,  0,     2390,     10056],
    [ 1,  0,  1,  0,    -2348,      6322], [ 2, -2,  0,  0,     2236,     -9884],
    [ 0,  1,  2,  0,    -2120,      5751], [ 0,  2,  0,  0,    -2069,         0],
    [ 2, -2, -1,  0,     2048,     -4950], [ 2,  0,  1, -2,    -1773,      4130],
    [ 2,  0,  0,  2,    -1595,         0], [ 4, -1, -1,  0,     1215,     -3958],
    [ 0,  0,  2,  2,    -1110,         0], [ 3,  0, -1,  0,     -892,      3258],
    [ 2,  1,  1,  0,     -810,      2616], [ 4, -1, -2,  0,      759,     -1897],
    [ 0,  2, -1,  0,     -713,     -2117], [ 2,  2, -1,  0,     -700,      2354],
    [ 2,  1, -2,  0,      691,         0], [ 2, -1,  0, -2,      596,         0],
    [ 4,  0,  1,  0,      549,     -1423], [ 0,  0,  4,  0,      537,     -1117],
    [ 4, -1,  0,  0,      520,     -1571], [ 1,  0, -2,  0,     -487,     -1739],
    [ 2,  1,  0, -2,     -399,         0], [ 0,  0,  2, -2,     -381,     -4421],
    [ 1,  1,  1,  0,      351,         0], [ 3,  0, -2,  0,     -340,         0],
    [ 4,  0, -3,  0,      330,         0], [ 2, -1,  2,  0,      327,         0],
    [ 0,  2,  1,  0,     -323,      1165], [ 1,  1, -1,  0,      299,         0],
    [ 2,  0,  3,  0,      294,         0], [ 2,  0, -1, -2,        0,      8752],
];

/// `[D, M, M′, F, Σb coeff (1e-6 °)]`.
#[rustfmt::skip]
static LAT_TERMS: [[i32; 5]; 60] = [
    [ 0,  0,  0,  1,  5128122], [ 0,  0,  1,  1,   280602], [ 0,  0,  1, -1,   277693],
    [ 2,  0,  0, -1,   173237], [ 2,  0, -1,  1,    55413], [ 2,  0, -1, -1,    46271],
    [ 2,  0,  0,  1,    32573], [ 0,  0,  2,  1,    17198], [ 2,  0,  1, -1,     9266],
    [ 0,  0,  2, -1,     8822], [ 2, -1,  0, -1,     8216], [ 2,  0, -2, -1,     4324],
    [ 2,  0,  1,  1,     4200], [ 2,  1,  0, -1,    -3359], [ 2, -1, -1,  1,     2463],
    [ 2, -1,  0,  1,     2211], [ 2, -1, -1, -1,     2065], [ 0,  1, -1, -1,    -1870],
    [ 4,  0, -1, -1,     1828], [ 0,  1,  0,  1,    -1794], [ 0,  0,  0,  3,    -1749],
    [ 0,  1, -1,  1,    -1565], [ 1,  0,  0,  1,    -1491], [ 0,  1,  1,  1,    -1475],
    [ 0,  1,  1, -1,    -1410], [ 0,  1,  0, -1,    -1344], [ 1,  0,  0, -1,    -1335],
    [ 0,  0,  3,  1,     1107], [ 4,  0,  0, -1,     1021], [ 4,  0, -1,  1,      833],
    [ 0,  0,  1, -3,      777], [ 4,  0, -2,  1,      671], [ 2,  0,  0, -3,      607],
    [ 2,  0,  2, -1,      596], [ 2, -1,  1, -1,      491], [ 2,  0, -2,  1,     -451],
    [ 0,  0,  3, -1,      439], [ 2,  0,  2,  1,      422], [ 2,  0, -3, -1,      421],
    [ 2,  1, -1,  1,     -366], [ 2,  1,  0,  1,     -351], [ 4,  0,  0,  1,      331],
    [ 2, -1,  1,  1,      315], [ 2, -2,  0, -1,      302], [ 0,  0,  1,  3,     -283],
    [ 2,  1,  1, -1,     -229], [ 1,  1,  0, -1,      223], [ 1,  1,  0,  1,      223],
    [ 0,  1, -2, -1,     -220], [ 2,  1, -1, -1,     -220], [ 1,  0,  1,  1,     -185],
    [ 2, -1, -2, -1,      181], [ 0,  1,  2,  1,     -177], [ 4,  0, -2, -1,      176],
    [ 4, -1, -1, -1,      166], [ 1,  0,  1, -1,     -164], [ 4,  0,  1, -1,      132],
    [ 1,  0, -1, -1,     -119], [ 4, -1,  0, -1,      115], [ 2, -2,  0,  1,      107],
];

/// Moon position at `jd`.
pub fn moon_position(jd: f64) -> MoonPosition {
    let t = jd_to_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let a3 = 313.45 + 481_266.484 * t;
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    // Terms in M are scaled by E for |M| = 1 and E² for |M| = 2.
    let ecc = |k: i32| match k.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    };
    let arg = |row: &[i32]| {
        (f64::from(row[0]) * d + f64::from(row[1]) * m + f64::from(row[2]) * mp
            + f64::from(row[3]) * f)
            .to_radians()
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST_TERMS {
        let a = arg(row);
        let scale = ecc(row[1]);
        sum_l += f64::from(row[4]) * scale * a.sin();
        sum_r += f64::from(row[5]) * scale * a.cos();
    }

    let mut sum_b = 0.0;
    for row in &LAT_TERMS {
        sum_b += f64::from(row[4]) * ecc(row[1]) * arg(row).sin();
    }

    let s = |deg: f64| deg.to_radians().sin();
    sum_l += 3958.0 * s(a1) + 1962.0 * s(lp - f) + 318.0 * s(a2);
    sum_b += -2235.0 * s(lp) + 382.0 * s(a3) + 175.0 * s(a1 - f) + 175.0 * s(a1 + f)
        + 127.0 * s(lp - mp)
        - 115.0 * s(lp + mp);

    let lon = normalize_360(lp + sum_l / 1e6);
    let lat = sum_b / 1e6;
    let dist_km = 385_000.56 + sum_r / 1000.0;

    let nut = nutation_iau1980(t);
    let apparent_lon = normalize_360(lon + nut.dpsi_arcsec / 3600.0);
    let eps = mean_obliquity_deg(t) + nut.deps_arcsec / 3600.0;
    let (ra, dec) = ecliptic_to_equatorial(apparent_lon, lat, eps);

    MoonPosition {
        lon_deg: lon,
        lat_deg: lat,
        apparent_lon_deg: apparent_lon,
        ra_deg: ra,
        dec_deg: dec,
        dist_km,
        parallax_deg: horizontal_parallax_deg(dist_km),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-Apr-12 0h TD
        let p = moon_position(2_448_724.5);
        assert!((p.lon_deg - 133.162655).abs() < 1e-5, "λ = {}", p.lon_deg);
        assert!((p.lat_deg + 3.229126).abs() < 1e-5, "β = {}", p.lat_deg);
        assert!((p.dist_km - 368_409.7).abs() < 0.1, "Δ = {}", p.dist_km);
        assert!((p.apparent_lon_deg - 133.167265).abs() < 1e-4, "λ app = {}", p.apparent_lon_deg);
        assert!((p.ra_deg - 134.688470).abs() < 1e-3, "α = {}", p.ra_deg);
        assert!((p.dec_deg - 13.768368).abs() < 1e-3, "δ = {}", p.dec_deg);
        assert!((p.parallax_deg - 0.991990).abs() < 1e-4, "π = {}", p.parallax_deg);
    }

    #[test]
    fn distance_within_orbit_bounds() {
        for i in 0..60 {
            let p = moon_position(2_460_000.5 + i as f64 * 0.5);
            assert!(p.dist_km > 356_000.0 && p.dist_km < 407_000.0, "Δ = {}", p.dist_km);
            assert!(p.lat_deg.abs() < 5.35, "β = {}", p.lat_deg);
        }
    }

    #[test]
    fn angular_radius_about_quarter_degree() {
        let p = moon_position(2_460_000.5);
        let r = p.angular_radius_deg();
        assert!(r > 0.24 && r < 0.28, "radius = {r}");
    }
}
