//! Low-accuracy Galilean satellite positions.
//!
//! Source: Meeus, Astronomical Algorithms, 2nd ed., Chapter 44 (lower
//! accuracy method). Good to a few hundredths of a Jupiter radius, which
//! puts contact times within a minute or two for the inner moons.

use std::collections::BTreeMap;

use orrery_ephem::{JovianMoon, JovianSatelliteProvider, Vector3};
use orrery_time::J2000_JD;

/// Light time in days per AU, as used by the series (1/173).
const LIGHT_DAYS_PER_AU: f64 = 1.0 / 173.0;

fn sin_d(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cos_d(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Series output for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalileanPositions {
    /// Earth–Jupiter distance from the series, AU.
    pub delta_au: f64,
    /// Jovicentric latitude of the Earth, degrees.
    pub earth_lat_deg: f64,
    /// Io, Europa, Ganymede, Callisto.
    pub xyz: [Vector3; 4],
}

/// Compute satellite positions at `jd`.
///
/// `light_time_delta_au` overrides the series' own Earth–Jupiter distance for
/// the light-time correction when it is finite and positive.
pub fn galilean_positions(jd: f64, light_time_delta_au: Option<f64>) -> GalileanPositions {
    let d = jd - J2000_JD;
    let v = 172.74 + 0.001_115_88 * d;
    let m = 357.529 + 0.985_600_3 * d;
    let n = 20.020 + 0.083_085_3 * d + 0.329 * sin_d(v);
    let j = 66.115 + 0.902_517_9 * d - 0.329 * sin_d(v);
    let a = 1.915 * sin_d(m) + 0.020 * sin_d(2.0 * m);
    let b = 5.555 * sin_d(n) + 0.168 * sin_d(2.0 * n);
    let k = j + a - b;
    let sun_r = 1.000_14 - 0.016_71 * cos_d(m) - 0.000_14 * cos_d(2.0 * m);
    let jup_r = 5.208_72 - 0.252_08 * cos_d(n) - 0.006_11 * cos_d(2.0 * n);
    let delta = (jup_r * jup_r + sun_r * sun_r - 2.0 * jup_r * sun_r * cos_d(k)).sqrt();
    let psi = (sun_r / delta * sin_d(k)).clamp(-1.0, 1.0).asin().to_degrees();

    let lt_delta = light_time_delta_au
        .filter(|x| x.is_finite() && *x > 0.0)
        .unwrap_or(delta);
    let dd = d - lt_delta * LIGHT_DAYS_PER_AU;
    let common = psi - b;

    let u1 = 163.8069 + 203.405_864_6 * dd + common;
    let u2 = 358.4140 + 101.291_633_5 * dd + common;
    let u3 = 5.7176 + 50.234_518_0 * dd + common;
    let u4 = 224.8092 + 21.487_980_0 * dd + common;
    let g = 331.18 + 50.310_482 * dd;
    let h = 87.45 + 21.569_231 * dd;

    let u = [
        u1 + 0.473 * sin_d(2.0 * (u1 - u2)),
        u2 + 1.065 * sin_d(2.0 * (u2 - u3)),
        u3 + 0.165 * sin_d(g),
        u4 + 0.843 * sin_d(h),
    ];
    let r = [
        5.9057 - 0.0244 * cos_d(2.0 * (u1 - u2)),
        9.3966 - 0.0882 * cos_d(2.0 * (u2 - u3)),
        14.9883 - 0.0216 * cos_d(g),
        26.3627 - 0.1939 * cos_d(h),
    ];

    let lambda = 34.35 + 0.083_091 * d + 0.329 * sin_d(v) + b;
    let ds = 3.12 * sin_d(lambda + 42.8);
    let de = ds
        - 2.22 * sin_d(psi) * cos_d(lambda + 22.0)
        - 1.30 * (jup_r - delta) / delta * sin_d(lambda - 100.5);

    let sin_de = sin_d(de);
    let mut xyz = [[0.0; 3]; 4];
    for i in 0..4 {
        // u = 0 is inferior conjunction: in front of the disk.
        xyz[i] = [
            r[i] * sin_d(u[i]),
            -r[i] * cos_d(u[i]) * sin_de,
            r[i] * cos_d(u[i]),
        ];
    }

    GalileanPositions {
        delta_au: delta,
        earth_lat_deg: de,
        xyz,
    }
}

/// [`JovianSatelliteProvider`] backed by the low-accuracy series.
///
/// Jupiter's ecliptic longitude and latitude are not needed by the series
/// and are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowPrecisionGalilean;

impl JovianSatelliteProvider for LowPrecisionGalilean {
    fn positions(
        &self,
        jd: f64,
        delta_au: f64,
        _jupiter_lon_deg: f64,
        _jupiter_lat_deg: f64,
    ) -> BTreeMap<JovianMoon, Vector3> {
        if !jd.is_finite() {
            return BTreeMap::new();
        }
        let p = galilean_positions(jd, Some(delta_au));
        JovianMoon::ALL.into_iter().zip(p.xyz).collect()
    }
}
