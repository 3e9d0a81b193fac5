//! Runtime configuration: ephemeris file locations, table layouts and scan
//! spans, read from the environment (a `.env` file is honoured).

pub mod error;

use std::env;
use std::path::PathBuf;

use orrery_ephem::EphemerisLayout;
use tracing::debug;

pub use error::ConfigError;

pub const ENV_PLANETS_BIN: &str = "ORRERY_PLANETS_BIN";
pub const ENV_MOON_BIN: &str = "ORRERY_MOON_BIN";
pub const ENV_ECLIPSE_CSV: &str = "ORRERY_ECLIPSE_CSV";
pub const ENV_JOVIAN_STEP_MIN: &str = "ORRERY_JOVIAN_STEP_MIN";
pub const ENV_JOVIAN_SPAN_DAYS: &str = "ORRERY_JOVIAN_SPAN_DAYS";
pub const ENV_PHENOMENA_SPAN_DAYS: &str = "ORRERY_PHENOMENA_SPAN_DAYS";

pub const DEFAULT_PLANETS_BIN: &str = "data/ephemeris_planets.bin";
pub const DEFAULT_MOON_BIN: &str = "data/ephemeris_moon.bin";

#[derive(Debug, Clone, PartialEq)]
pub struct OrreryConfig {
    /// Planet table (Sun, Mercury .. Neptune, Halley).
    pub planets_path: PathBuf,
    /// Moon table.
    pub moon_path: PathBuf,
    /// Optional lunar eclipse catalog (CSV).
    pub eclipse_catalog_path: Option<PathBuf>,
    /// Jovian scan step in minutes.
    pub jovian_step_minutes: f64,
    /// Default Jovian scan span in days.
    pub jovian_span_days: f64,
    /// Default conjunction/elongation search span in days.
    pub phenomena_span_days: f64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            planets_path: PathBuf::from(DEFAULT_PLANETS_BIN),
            moon_path: PathBuf::from(DEFAULT_MOON_BIN),
            eclipse_catalog_path: None,
            jovian_step_minutes: 1.0,
            jovian_span_days: 3.0,
            phenomena_span_days: 900.0,
        }
    }
}

impl OrreryConfig {
    /// Load configuration from the process environment, after reading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset or empty keys
    /// keep their defaults; unparsable numbers are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let config = Self {
            planets_path: get(ENV_PLANETS_BIN)
                .map(PathBuf::from)
                .unwrap_or(defaults.planets_path),
            moon_path: get(ENV_MOON_BIN)
                .map(PathBuf::from)
                .unwrap_or(defaults.moon_path),
            eclipse_catalog_path: get(ENV_ECLIPSE_CSV).map(PathBuf::from),
            jovian_step_minutes: env_f64(&get, ENV_JOVIAN_STEP_MIN, defaults.jovian_step_minutes)?,
            jovian_span_days: env_f64(&get, ENV_JOVIAN_SPAN_DAYS, defaults.jovian_span_days)?,
            phenomena_span_days: env_f64(
                &get,
                ENV_PHENOMENA_SPAN_DAYS,
                defaults.phenomena_span_days,
            )?,
        };
        config.validate()?;
        debug!(
            planets = %config.planets_path.display(),
            moon = %config.moon_path.display(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.jovian_step_minutes) {
            return Err(ConfigError::Invalid("jovian_step_minutes must be positive"));
        }
        if !positive(self.jovian_span_days) {
            return Err(ConfigError::Invalid("jovian_span_days must be positive"));
        }
        if !positive(self.phenomena_span_days) {
            return Err(ConfigError::Invalid("phenomena_span_days must be positive"));
        }
        Ok(())
    }

    pub fn planets_layout(&self) -> EphemerisLayout {
        EphemerisLayout::planets()
    }

    pub fn moon_layout(&self) -> EphemerisLayout {
        EphemerisLayout::moon()
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn env_f64<G>(get: &G, key: &str, default: f64) -> Result<f64, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}
