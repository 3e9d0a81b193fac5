//! Out-of-band description of the flat binary ephemeris format.
//!
//! Each record is one little-endian `f64` Julian Date followed by six `f64`
//! channels per body, in the body order given here. There is no header.

use crate::body::Body;
use crate::error::EphemError;
use crate::sample::CHANNELS;

/// Body order and channel count of a binary ephemeris stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemerisLayout {
    bodies: Vec<Body>,
}

impl EphemerisLayout {
    /// Build a layout, rejecting empty or duplicated body lists.
    pub fn new(bodies: Vec<Body>) -> Result<Self, EphemError> {
        if bodies.is_empty() {
            return Err(EphemError::InvalidLayout("layout must list at least one body"));
        }
        for (i, b) in bodies.iter().enumerate() {
            if bodies[..i].contains(b) {
                return Err(EphemError::InvalidLayout("layout lists a body twice"));
            }
        }
        Ok(Self { bodies })
    }

    /// Planet table: Sun, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Halley.
    pub fn planets() -> Self {
        Self {
            bodies: vec![
                Body::Sun,
                Body::Mercury,
                Body::Venus,
                Body::Mars,
                Body::Jupiter,
                Body::Saturn,
                Body::Uranus,
                Body::Neptune,
                Body::Halley,
            ],
        }
    }

    /// Moon table: a single body.
    pub fn moon() -> Self {
        Self {
            bodies: vec![Body::Moon],
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Values per record, including the leading Julian Date.
    pub fn values_per_record(&self) -> usize {
        1 + CHANNELS * self.bodies.len()
    }

    /// Bytes per record.
    pub fn record_bytes(&self) -> usize {
        8 * self.values_per_record()
    }
}
