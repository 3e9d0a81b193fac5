//! Bodies tracked by the ephemeris tables.

use std::fmt::{Display, Formatter};

/// Solar-system bodies with precomputed sample tables.
///
/// The Earth is not tabulated: its heliocentric longitude is derived from
/// the Sun's geocentric position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Halley,
}

impl Body {
    /// All bodies, in declaration order.
    pub const ALL: [Body; 10] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Halley,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Halley => "Halley",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Orbit lies inside the Earth's (inferior/superior conjunctions, elongations).
    pub const fn is_inferior_planet(self) -> bool {
        matches!(self, Self::Mercury | Self::Venus)
    }

    /// Orbit lies outside the Earth's (conjunction with the Sun and opposition).
    pub const fn is_superior_planet(self) -> bool {
        matches!(
            self,
            Self::Mars | Self::Jupiter | Self::Saturn | Self::Uranus | Self::Neptune
        )
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_roundtrip() {
        for body in Body::ALL {
            assert_eq!(Body::from_name(body.name()), Some(body));
        }
    }

    #[test]
    fn from_name_ignores_case_and_whitespace() {
        assert_eq!(Body::from_name(" jupiter "), Some(Body::Jupiter));
        assert_eq!(Body::from_name("VENUS"), Some(Body::Venus));
        assert_eq!(Body::from_name("Pluto"), None);
    }

    #[test]
    fn planet_classes_disjoint() {
        for body in Body::ALL {
            assert!(!(body.is_inferior_planet() && body.is_superior_planet()));
        }
        assert!(!Body::Sun.is_inferior_planet() && !Body::Sun.is_superior_planet());
    }
}
