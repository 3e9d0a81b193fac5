//! Synthetic providers shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use orrery_ephem::{
    Body, BodyStateProvider, EphemError, InterpolatedState, JovianMoon, JovianSatelliteProvider,
    Vector3,
};
use orrery_frames::{AU_KM, OBLIQUITY_J2000_DEG, ecliptic_to_equatorial, normalize_360};
use orrery_shadow::{moon_position, sun_position};

pub const EPOCH: f64 = 2_451_545.0;

/// Coplanar circular orbits, all planets aligned with the Earth at `EPOCH`.
pub struct CircularSky;

fn orbit(body: Body) -> Option<(f64, f64)> {
    match body {
        Body::Mercury => Some((0.387, 87.969)),
        Body::Venus => Some((0.723, 224.701)),
        Body::Mars => Some((1.524, 686.980)),
        Body::Jupiter => Some((5.203, 4332.59)),
        _ => None,
    }
}

const EARTH_PERIOD: f64 = 365.256;

fn helio(a: f64, period: f64, t: f64) -> (f64, f64, f64) {
    let lon = normalize_360(360.0 * t / period);
    let r = lon.to_radians();
    (lon, a * r.cos(), a * r.sin())
}

impl BodyStateProvider for CircularSky {
    fn state(&self, body: Body, jd: f64) -> Result<InterpolatedState, EphemError> {
        let t = jd - EPOCH;
        let (earth_lon, ex, ey) = helio(1.0, EARTH_PERIOD, t);
        if body == Body::Sun {
            let lon = normalize_360(earth_lon + 180.0);
            let (ra, dec) = ecliptic_to_equatorial(lon, 0.0, OBLIQUITY_J2000_DEG);
            return Ok(InterpolatedState {
                jd,
                ra_deg: ra,
                dec_deg: dec,
                dist_geo_au: 1.0,
                dist_sun_au: 0.0,
                ecl_lon_deg: 0.0,
                ecl_lat_deg: 0.0,
            });
        }
        let (a, period) = orbit(body).ok_or(EphemError::NotLoaded(body))?;
        let (lon, x, y) = helio(a, period, t);
        let (dx, dy) = (x - ex, y - ey);
        let geo_lon = normalize_360(dy.atan2(dx).to_degrees());
        let (ra, dec) = ecliptic_to_equatorial(geo_lon, 0.0, OBLIQUITY_J2000_DEG);
        Ok(InterpolatedState {
            jd,
            ra_deg: ra,
            dec_deg: dec,
            dist_geo_au: dx.hypot(dy),
            dist_sun_au: a,
            ecl_lon_deg: lon,
            ecl_lat_deg: 0.0,
        })
    }
}

/// Sun and Moon from the analytic series.
pub struct SeriesSky;

impl BodyStateProvider for SeriesSky {
    fn state(&self, body: Body, jd: f64) -> Result<InterpolatedState, EphemError> {
        let (ra, dec, dist) = match body {
            Body::Sun => {
                let s = sun_position(jd);
                (s.ra_deg, s.dec_deg, s.dist_au)
            }
            Body::Moon => {
                let m = moon_position(jd);
                (m.ra_deg, m.dec_deg, m.dist_km / AU_KM)
            }
            other => return Err(EphemError::NotLoaded(other)),
        };
        Ok(InterpolatedState {
            jd,
            ra_deg: ra,
            dec_deg: dec,
            dist_geo_au: dist,
            dist_sun_au: 0.0,
            ecl_lon_deg: 0.0,
            ecl_lat_deg: 0.0,
        })
    }
}

/// Fixed Sun and Jupiter. Phase angle ≈ 10.5°, Sun east of Jupiter.
pub struct FixedJupiter;

impl BodyStateProvider for FixedJupiter {
    fn state(&self, body: Body, jd: f64) -> Result<InterpolatedState, EphemError> {
        let (ra, dist_geo, dist_sun) = match body {
            Body::Sun => (40.0, 1.0, 0.0),
            Body::Jupiter => (30.0, 4.8, 5.2),
            other => return Err(EphemError::NotLoaded(other)),
        };
        Ok(InterpolatedState {
            jd,
            ra_deg: ra,
            dec_deg: 12.0,
            dist_geo_au: dist_geo,
            dist_sun_au: dist_sun,
            ecl_lon_deg: 35.0,
            ecl_lat_deg: 0.0,
        })
    }
}

/// Io on a straight track: `x = x0 + rate · (jd − jd0)`, fixed `y` and `z`.
pub struct LinearIo {
    pub jd0: f64,
    pub x0: f64,
    pub rate_per_day: f64,
    pub z: f64,
}

impl JovianSatelliteProvider for LinearIo {
    fn positions(&self, jd: f64, _: f64, _: f64, _: f64) -> BTreeMap<JovianMoon, Vector3> {
        let x = self.x0 + self.rate_per_day * (jd - self.jd0);
        BTreeMap::from([(JovianMoon::Io, [x, 0.0, self.z])])
    }
}
