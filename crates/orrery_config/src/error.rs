//! Configuration errors.

/// Errors from reading or validating configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An environment value could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    /// Values parsed but are out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_value() {
        let e = ConfigError::InvalidValue {
            key: "ORRERY_JOVIAN_STEP_MIN".into(),
            value: "abc".into(),
        };
        assert_eq!(e.to_string(), "invalid value for ORRERY_JOVIAN_STEP_MIN: \"abc\"");
    }

    #[test]
    fn display_invalid() {
        let e = ConfigError::Invalid("jovian_span_days must be positive");
        assert_eq!(e.to_string(), "invalid config: jovian_span_days must be positive");
    }
}
