//! Sample and interpolated state types.

use orrery_frames::{OBLIQUITY_J2000_DEG, equatorial_to_ecliptic, normalize_360};

/// Number of per-body channels in a sample record.
pub const CHANNELS: usize = 6;

/// Channel index of right ascension.
pub const CH_RA: usize = 0;
/// Channel index of declination.
pub const CH_DEC: usize = 1;
/// Channel index of geocentric distance.
pub const CH_DIST_GEO: usize = 2;
/// Channel index of heliocentric distance.
pub const CH_DIST_SUN: usize = 3;
/// Channel index of heliocentric ecliptic longitude.
pub const CH_ECL_LON: usize = 4;
/// Channel index of heliocentric ecliptic latitude.
pub const CH_ECL_LAT: usize = 5;

/// Channels holding angles that wrap at 360°.
pub const ANGLE_CHANNELS: [usize; 2] = [CH_RA, CH_ECL_LON];

/// One precomputed ephemeris sample.
///
/// Equatorial coordinates are geocentric J2000; ecliptic coordinates are
/// heliocentric. For the Sun the heliocentric fields are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySample {
    pub jd: f64,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub dist_geo_au: f64,
    pub dist_sun_au: f64,
    pub ecl_lon_deg: f64,
    pub ecl_lat_deg: f64,
}

impl BodySample {
    /// Channels in table order.
    pub fn channels(&self) -> [f64; CHANNELS] {
        [
            self.ra_deg,
            self.dec_deg,
            self.dist_geo_au,
            self.dist_sun_au,
            self.ecl_lon_deg,
            self.ecl_lat_deg,
        ]
    }

    /// Rebuild from a Julian Date and channels in table order.
    pub fn from_channels(jd: f64, c: [f64; CHANNELS]) -> Self {
        Self {
            jd,
            ra_deg: c[CH_RA],
            dec_deg: c[CH_DEC],
            dist_geo_au: c[CH_DIST_GEO],
            dist_sun_au: c[CH_DIST_SUN],
            ecl_lon_deg: c[CH_ECL_LON],
            ecl_lat_deg: c[CH_ECL_LAT],
        }
    }
}

/// State reconstructed at an arbitrary Julian Date. Same shape as [`BodySample`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedState {
    pub jd: f64,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub dist_geo_au: f64,
    pub dist_sun_au: f64,
    pub ecl_lon_deg: f64,
    pub ecl_lat_deg: f64,
}

impl InterpolatedState {
    pub(crate) fn from_channels(jd: f64, c: [f64; CHANNELS]) -> Self {
        let s = BodySample::from_channels(jd, c);
        Self {
            jd,
            ra_deg: s.ra_deg,
            dec_deg: s.dec_deg,
            dist_geo_au: s.dist_geo_au,
            dist_sun_au: s.dist_sun_au,
            ecl_lon_deg: s.ecl_lon_deg,
            ecl_lat_deg: s.ecl_lat_deg,
        }
    }

    /// Geocentric ecliptic (longitude, latitude) in degrees, J2000 frame,
    /// derived from RA/Dec.
    pub fn geocentric_ecliptic(&self) -> (f64, f64) {
        equatorial_to_ecliptic(self.ra_deg, self.dec_deg, OBLIQUITY_J2000_DEG)
    }

    /// Heliocentric longitude of the Earth, valid when `self` is the Sun's state.
    pub fn earth_helio_lon_deg(&self) -> f64 {
        normalize_360(self.geocentric_ecliptic().0 + 180.0)
    }
}

impl From<BodySample> for InterpolatedState {
    fn from(s: BodySample) -> Self {
        Self::from_channels(s.jd, s.channels())
    }
}
