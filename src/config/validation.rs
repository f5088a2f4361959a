//! Configuration validation.
//!
//! Semantic checks on top of what serde enforces syntactically. A zero
//! deadline is almost always a typo in the timing file and would make the
//! consuming phase expire immediately, so it is rejected here, at the file
//! boundary. Writes that go straight to the registry stay unchecked.

use thiserror::Error;

use crate::config::schema::TimingConfig;

/// A semantic rule violated by a loaded timing configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("timeout `{field}` must be strictly positive")]
    ZeroTimeout { field: &'static str },
}

/// Check a loaded configuration, returning every violation found rather than
/// stopping at the first.
pub fn validate_config(config: &TimingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in config.named_fields() {
        if value == 0 {
            errors.push(ValidationError::ZeroTimeout { field });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&TimingConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_field_rejected() {
        let config = TimingConfig {
            eeprom_us: 0,
            ..TimingConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroTimeout { field: "eeprom_us" }]);
    }

    #[test]
    fn test_all_zero_fields_reported() {
        let config = TimingConfig {
            frame_return_us: 0,
            state_change_us: 0,
            ..TimingConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::ZeroTimeout { field: "frame_return_us" }));
        assert!(errors.contains(&ValidationError::ZeroTimeout { field: "state_change_us" }));
    }
}
