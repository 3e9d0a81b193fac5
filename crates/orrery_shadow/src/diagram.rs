//! Geometry for drawing the Moon against the Earth's shadow.

use orrery_frames::{AU_KM, angular_separation_deg, normalize_pm180};

use crate::cones::ShadowRadii;
use crate::moon::moon_position;
use crate::sun::sun_position;

/// Moon and shadow sizes and offsets as seen from the geocentre, in degrees.
///
/// The origin is the shadow axis (the antisolar point); `moon_x_deg` grows
/// toward the east and `moon_y_deg` toward the north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowDiagram {
    pub jd: f64,
    pub moon_x_deg: f64,
    pub moon_y_deg: f64,
    /// Separation of the Moon's centre from the shadow axis.
    pub separation_deg: f64,
    pub moon_radius_deg: f64,
    pub umbra_equatorial_deg: f64,
    pub umbra_polar_deg: f64,
    pub penumbra_equatorial_deg: f64,
    pub penumbra_polar_deg: f64,
}

impl ShadowDiagram {
    /// Evaluate the solar and lunar series at `jd`.
    pub fn at(jd: f64) -> Self {
        let sun = sun_position(jd);
        let moon = moon_position(jd);

        let axis_ra = sun.ra_deg + 180.0;
        let axis_dec = -sun.dec_deg;

        let moon_x_deg = normalize_pm180(moon.ra_deg - axis_ra) * axis_dec.to_radians().cos();
        let moon_y_deg = moon.dec_deg - axis_dec;
        let separation_deg = angular_separation_deg(axis_ra, axis_dec, moon.ra_deg, moon.dec_deg);

        let radii = ShadowRadii::new(sun.dist_au * AU_KM, moon.dist_km);
        let angular = |r_km: f64| (r_km / moon.dist_km).atan().to_degrees();

        Self {
            jd,
            moon_x_deg,
            moon_y_deg,
            separation_deg,
            moon_radius_deg: moon.angular_radius_deg(),
            umbra_equatorial_deg: angular(radii.umbra_equatorial_km),
            umbra_polar_deg: angular(radii.umbra_polar_km),
            penumbra_equatorial_deg: angular(radii.penumbra_equatorial_km),
            penumbra_polar_deg: angular(radii.penumbra_polar_km),
        }
    }

    /// Moon's limb overlaps the umbra (equatorial radius).
    pub fn moon_touches_umbra(&self) -> bool {
        self.separation_deg < self.umbra_equatorial_deg + self.moon_radius_deg
    }

    /// Moon's limb overlaps the penumbra (equatorial radius).
    pub fn moon_touches_penumbra(&self) -> bool {
        self.separation_deg < self.penumbra_equatorial_deg + self.moon_radius_deg
    }
}
