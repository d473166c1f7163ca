//! Configuration validation and sanitization.
//!
//! Checks loaded records against the accepted ranges before they are frozen.

use crate::config::AutocompleteConfig;
use crate::constants::*;
use crate::field::ConfigField;
use crate::{ConfigError, Result};

/// Validator for autocomplete records
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a record, returning the first violation found
    pub fn validate(config: &AutocompleteConfig) -> Result<()> {
        match Self::check(config).into_iter().next() {
            Some((field, reason)) => Err(ConfigError::invalid_value(field.name(), &reason)),
            None => Ok(()),
        }
    }

    /// Lists every violation as `field: reason`. Empty when the record is valid.
    pub fn collect_violations(config: &AutocompleteConfig) -> Vec<String> {
        Self::check(config)
            .into_iter()
            .map(|(field, reason)| format!("{}: {}", field.name(), reason))
            .collect()
    }

    /// Removes control characters from text values
    pub fn sanitize_text(text: &str) -> String {
        text.chars().filter(|ch| !ch.is_control()).collect()
    }

    fn check(config: &AutocompleteConfig) -> Vec<(ConfigField, String)> {
        let mut violations = Vec::new();

        if config.min_chars_to_autocomplete == 0 {
            violations.push((
                ConfigField::MinCharsToAutocomplete,
                "must be at least 1".to_string(),
            ));
        }

        if config.max_auto_complete_results == 0 {
            violations.push((
                ConfigField::MaxAutoCompleteResults,
                "must be at least 1".to_string(),
            ));
        } else if config.max_auto_complete_results > MAX_RESULTS_LIMIT {
            violations.push((
                ConfigField::MaxAutoCompleteResults,
                format!("cannot be more than {}", MAX_RESULTS_LIMIT),
            ));
        }

        // zero disables debouncing
        if config.debounce_time_ms > MAX_DEBOUNCE_TIME_MS {
            violations.push((
                ConfigField::DebounceTimeMs,
                format!("cannot be more than {} ms", MAX_DEBOUNCE_TIME_MS),
            ));
        }

        let placeholder = &config.default_placeholder;
        if placeholder.chars().count() > TEXT_MAX_LENGTH {
            violations.push((
                ConfigField::DefaultPlaceholder,
                format!("cannot be longer than {} characters", TEXT_MAX_LENGTH),
            ));
        }
        if placeholder.chars().any(|ch| ch.is_control()) {
            violations.push((
                ConfigField::DefaultPlaceholder,
                "contains control characters".to_string(),
            ));
        }

        // The test key is opaque; only reject what cannot be passed through
        let test_key = &config.default_test_key;
        if test_key.chars().count() > TEXT_MAX_LENGTH {
            violations.push((
                ConfigField::DefaultTestKey,
                format!("cannot be longer than {} characters", TEXT_MAX_LENGTH),
            ));
        }
        if test_key.contains('\0') {
            violations.push((
                ConfigField::DefaultTestKey,
                "contains null bytes".to_string(),
            ));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ConfigValidator::validate(&AutocompleteConfig::default()).is_ok());
        assert!(ConfigValidator::collect_violations(&AutocompleteConfig::default()).is_empty());
    }

    #[test]
    fn test_zero_counts_are_invalid() {
        let config = AutocompleteConfig {
            min_chars_to_autocomplete: 0,
            ..AutocompleteConfig::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "minCharsToAutocomplete"));

        let config = AutocompleteConfig {
            max_auto_complete_results: 0,
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_upper_bounds() {
        let config = AutocompleteConfig {
            max_auto_complete_results: MAX_RESULTS_LIMIT + 1,
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());

        let config = AutocompleteConfig {
            debounce_time_ms: MAX_DEBOUNCE_TIME_MS + 1,
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());

        let config = AutocompleteConfig {
            max_auto_complete_results: MAX_RESULTS_LIMIT,
            debounce_time_ms: MAX_DEBOUNCE_TIME_MS,
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_zero_debounce_is_allowed() {
        let config = AutocompleteConfig {
            debounce_time_ms: 0,
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_text_fields() {
        let config = AutocompleteConfig {
            default_placeholder: "a".repeat(TEXT_MAX_LENGTH + 1),
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());

        let config = AutocompleteConfig {
            default_placeholder: "Search\u{7}".to_string(),
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());

        // test keys are opaque, odd characters pass
        let config = AutocompleteConfig {
            default_test_key: "search-box [data-qa]\t#1".to_string(),
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());

        let config = AutocompleteConfig {
            default_test_key: "key\0".to_string(),
            ..AutocompleteConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_collect_violations_reports_all() {
        let config = AutocompleteConfig {
            min_chars_to_autocomplete: 0,
            max_auto_complete_results: 0,
            debounce_time_ms: MAX_DEBOUNCE_TIME_MS + 1,
            ..AutocompleteConfig::default()
        };
        let violations = ConfigValidator::collect_violations(&config);
        assert_eq!(violations.len(), 3);
        assert!(violations[0].starts_with("minCharsToAutocomplete:"));
        assert!(violations[2].starts_with("debounceTimeMs:"));
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(ConfigValidator::sanitize_text("Sea\u{0}rch\n"), "Search");
        assert_eq!(ConfigValidator::sanitize_text("Type to search"), "Type to search");
    }
}
