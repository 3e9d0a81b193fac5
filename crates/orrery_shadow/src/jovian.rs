//! Jovian mutual-event geometry.
//!
//! Positions are Jupiter-centred, in Jupiter equatorial radii, with X toward
//! the west limb, Y toward Jupiter's north pole and Z toward the Earth.
//! A moon with z > 0 is in front of the disk, z < 0 behind it.
//!
//! The shadow of a moon is found by sliding its position along the sunlight
//! direction onto the sky plane through Jupiter's centre:
//! `shadow_x = x + x_shift_per_z · z`, where `x_shift_per_z` is
//! `±tan(phase angle)` with the sign set by which side of Jupiter the Sun is on.

use orrery_ephem::{
    Body, BodyStateProvider, EphemError, JovianMoon, JovianSatelliteProvider, Vector3,
};
use orrery_frames::normalize_pm180;

/// Jupiter's flattening (polar/equatorial = 15/16).
pub const JUPITER_FLATTENING: f64 = 1.0 / 16.0;

/// The four boolean phenomena tracked per moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JovianPhenomenon {
    Transit,
    Occultation,
    ShadowTransit,
    Eclipse,
}

impl JovianPhenomenon {
    pub const ALL: [JovianPhenomenon; 4] = [
        Self::Transit,
        Self::Occultation,
        Self::ShadowTransit,
        Self::Eclipse,
    ];

    /// Verb phrase for event text, e.g. "transit" in "Io begins transit".
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transit => "transit",
            Self::Occultation => "occultation",
            Self::ShadowTransit => "shadow transit",
            Self::Eclipse => "eclipse",
        }
    }
}

/// Per-moon geometry at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonGeometryState {
    pub moon: JovianMoon,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub shadow_x: f64,
    pub shadow_y: f64,
    pub is_transit: bool,
    pub is_occultation: bool,
    pub is_shadow_transit: bool,
    pub is_eclipse: bool,
}

impl MoonGeometryState {
    /// Derive the four predicates from a position and the shadow shift.
    pub fn compute(moon: JovianMoon, pos: Vector3, x_shift_per_z: f64) -> Self {
        let [x, y, z] = pos;
        let r = moon.radius_rj();
        let shadow_x = x + x_shift_per_z * z;
        let shadow_y = y;

        let body_on_disk = on_disk(x, y, r);
        let shadow_on_disk = on_disk(shadow_x, shadow_y, r);

        Self {
            moon,
            x,
            y,
            z,
            shadow_x,
            shadow_y,
            is_transit: z > 0.0 && body_on_disk,
            is_occultation: z < 0.0 && body_on_disk,
            is_shadow_transit: z > 0.0 && shadow_on_disk,
            is_eclipse: z < 0.0 && shadow_on_disk,
        }
    }

    /// Value of one predicate.
    pub fn flag(&self, phenomenon: JovianPhenomenon) -> bool {
        match phenomenon {
            JovianPhenomenon::Transit => self.is_transit,
            JovianPhenomenon::Occultation => self.is_occultation,
            JovianPhenomenon::ShadowTransit => self.is_shadow_transit,
            JovianPhenomenon::Eclipse => self.is_eclipse,
        }
    }
}

/// Whether a point (or a disk of radius `moon_radius` around it) overlaps
/// Jupiter's flattened disk. The Y axis is stretched by `1/(1 - f)` so the
/// ellipse becomes the unit circle.
pub fn on_disk(x: f64, y: f64, moon_radius: f64) -> bool {
    let y_scaled = y / (1.0 - JUPITER_FLATTENING);
    let reach = 1.0 + moon_radius;
    x * x + y_scaled * y_scaled < reach * reach
}

/// Sun–Jupiter–Earth phase angle in degrees from the three distances.
///
/// `cos α = (R² + Δ² − r²) / (2RΔ)` with R = Jupiter–Sun, Δ = Jupiter–Earth,
/// r = Sun–Earth.
pub fn phase_angle_deg(jupiter_sun_au: f64, jupiter_earth_au: f64, sun_earth_au: f64) -> f64 {
    let (r_big, delta, r) = (jupiter_sun_au, jupiter_earth_au, sun_earth_au);
    let cos_a = (r_big * r_big + delta * delta - r * r) / (2.0 * r_big * delta);
    cos_a.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Shift of the shadow's X per unit Z.
///
/// Positive when the Sun is east of Jupiter (larger RA), so shadows fall to
/// the west of the moon when it is in front of the disk.
pub fn shadow_shift_per_z(sun_ra_deg: f64, jupiter_ra_deg: f64, phase_angle_deg: f64) -> f64 {
    let sign = if normalize_pm180(sun_ra_deg - jupiter_ra_deg) >= 0.0 {
        1.0
    } else {
        -1.0
    };
    sign * phase_angle_deg.to_radians().tan()
}

/// Geometry of all available moons at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct JovianGeometry {
    pub jd: f64,
    pub phase_angle_deg: f64,
    pub x_shift_per_z: f64,
    /// Empty when the satellite provider had nothing for this instant.
    pub moons: Vec<MoonGeometryState>,
}

impl JovianGeometry {
    pub fn moon(&self, moon: JovianMoon) -> Option<&MoonGeometryState> {
        self.moons.iter().find(|m| m.moon == moon)
    }
}

/// Evaluate Jupiter, the Sun and the satellites at `jd` and derive the
/// per-moon predicates.
pub fn jovian_geometry<P, S>(
    states: &P,
    satellites: &S,
    jd: f64,
) -> Result<JovianGeometry, EphemError>
where
    P: BodyStateProvider + ?Sized,
    S: JovianSatelliteProvider + ?Sized,
{
    let jupiter = states.state(Body::Jupiter, jd)?;
    let sun = states.state(Body::Sun, jd)?;

    let alpha = phase_angle_deg(jupiter.dist_sun_au, jupiter.dist_geo_au, sun.dist_geo_au);
    let shift = shadow_shift_per_z(sun.ra_deg, jupiter.ra_deg, alpha);

    let moons = satellites
        .positions(jd, jupiter.dist_geo_au, jupiter.ecl_lon_deg, jupiter.ecl_lat_deg)
        .into_iter()
        .map(|(moon, pos)| MoonGeometryState::compute(moon, pos, shift))
        .collect();

    Ok(JovianGeometry {
        jd,
        phase_angle_deg: alpha,
        x_shift_per_z: shift,
        moons,
    })
}
