//! Autocomplete configuration record.
//!
//! A frozen set of named defaults read by autocomplete widgets: how many
//! characters trigger a query, how many suggestions to show, how long to wait
//! after the last keystroke, and which parts of the result list get highlighted.

use crate::constants::*;
use crate::field::{ConfigField, ConfigValue};
use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

// Built on first read and never replaced
static DEFAULTS: OnceLock<AutocompleteConfig> = OnceLock::new();

/// Immutable autocomplete settings.
///
/// Fields are only readable through accessors; a record never changes after
/// it is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutocompleteConfig {
    #[serde(alias = "minCharsToAutocomplete")]
    pub(crate) min_chars_to_autocomplete: usize,
    #[serde(alias = "maxAutoCompleteResults")]
    pub(crate) max_auto_complete_results: usize,
    #[serde(alias = "debounceTimeMs")]
    pub(crate) debounce_time_ms: u64,
    #[serde(alias = "highlightMatchedWords")]
    pub(crate) highlight_matched_words: bool,
    #[serde(alias = "defaultPlaceholder")]
    pub(crate) default_placeholder: String,
    #[serde(alias = "defaultTestKey")]
    pub(crate) default_test_key: String,
    #[serde(alias = "emptyResultsOnEmptyQuery")]
    pub(crate) empty_results_on_empty_query: bool,
    #[serde(alias = "highlightResults")]
    pub(crate) highlight_results: bool,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            min_chars_to_autocomplete: MIN_CHARS_TO_AUTOCOMPLETE,
            max_auto_complete_results: MAX_AUTO_COMPLETE_RESULTS,
            debounce_time_ms: DEBOUNCE_TIME_MS,
            highlight_matched_words: HIGHLIGHT_MATCHED_WORDS,
            default_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_test_key: DEFAULT_TEST_KEY.to_string(),
            empty_results_on_empty_query: EMPTY_RESULTS_ON_EMPTY_QUERY,
            highlight_results: HIGHLIGHT_RESULTS,
        }
    }
}

/// The process-wide record of literal defaults
pub fn defaults() -> &'static AutocompleteConfig {
    DEFAULTS.get_or_init(AutocompleteConfig::default)
}

impl AutocompleteConfig {
    /// Minimum query length before suggestions are requested
    pub fn min_chars_to_autocomplete(&self) -> usize {
        self.min_chars_to_autocomplete
    }

    /// Upper bound on suggestions returned or displayed
    pub fn max_auto_complete_results(&self) -> usize {
        self.max_auto_complete_results
    }

    /// Delay in milliseconds between the last input change and the query
    pub fn debounce_time_ms(&self) -> u64 {
        self.debounce_time_ms
    }

    /// Debounce delay as a `Duration`
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_time_ms)
    }

    /// Whether matched substrings are emphasized
    pub fn highlight_matched_words(&self) -> bool {
        self.highlight_matched_words
    }

    /// Placeholder text for the empty input field
    pub fn default_placeholder(&self) -> &str {
        &self.default_placeholder
    }

    /// Identifier for UI test automation hooks. Passed through untouched.
    pub fn default_test_key(&self) -> &str {
        &self.default_test_key
    }

    /// Whether clearing the query clears the result list
    pub fn empty_results_on_empty_query(&self) -> bool {
        self.empty_results_on_empty_query
    }

    /// Whether result items receive highlight styling
    pub fn highlight_results(&self) -> bool {
        self.highlight_results
    }

    /// Read a single field by name
    pub fn get(&self, field: ConfigField) -> ConfigValue {
        match field {
            ConfigField::MinCharsToAutocomplete => {
                ConfigValue::Integer(self.min_chars_to_autocomplete as u64)
            }
            ConfigField::MaxAutoCompleteResults => {
                ConfigValue::Integer(self.max_auto_complete_results as u64)
            }
            ConfigField::DebounceTimeMs => ConfigValue::Integer(self.debounce_time_ms),
            ConfigField::HighlightMatchedWords => ConfigValue::Bool(self.highlight_matched_words),
            ConfigField::DefaultPlaceholder => ConfigValue::Text(self.default_placeholder.clone()),
            ConfigField::DefaultTestKey => ConfigValue::Text(self.default_test_key.clone()),
            ConfigField::EmptyResultsOnEmptyQuery => {
                ConfigValue::Bool(self.empty_results_on_empty_query)
            }
            ConfigField::HighlightResults => ConfigValue::Bool(self.highlight_results),
        }
    }

    /// Overwrite one field while a loader is still building the record
    pub(crate) fn set(&mut self, field: ConfigField, value: ConfigValue) -> Result<()> {
        match (field, value) {
            (ConfigField::MinCharsToAutocomplete, ConfigValue::Integer(n)) => {
                self.min_chars_to_autocomplete = to_count(field, n)?;
            }
            (ConfigField::MaxAutoCompleteResults, ConfigValue::Integer(n)) => {
                self.max_auto_complete_results = to_count(field, n)?;
            }
            (ConfigField::DebounceTimeMs, ConfigValue::Integer(n)) => self.debounce_time_ms = n,
            (ConfigField::HighlightMatchedWords, ConfigValue::Bool(b)) => {
                self.highlight_matched_words = b;
            }
            (ConfigField::DefaultPlaceholder, ConfigValue::Text(text)) => {
                self.default_placeholder = text;
            }
            (ConfigField::DefaultTestKey, ConfigValue::Text(text)) => self.default_test_key = text,
            (ConfigField::EmptyResultsOnEmptyQuery, ConfigValue::Bool(b)) => {
                self.empty_results_on_empty_query = b;
            }
            (ConfigField::HighlightResults, ConfigValue::Bool(b)) => self.highlight_results = b,
            (field, value) => {
                return Err(ConfigError::invalid_value(
                    field.name(),
                    &format!(
                        "expected {} value, got {}",
                        field.kind().name(),
                        value.to_display_literal()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Parse a record from TOML. Missing keys keep their default.
    /// The result is not validated; use `ConfigLoader` for that.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Serialize the record as TOML with snake_case keys
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::malformed("toml", &e.to_string()))
    }

    /// Render every field as `name: value`, padded to a common column
    pub fn render_table(&self) -> String {
        // longest name, its colon, then four spaces
        let width = ConfigField::ALL
            .iter()
            .map(|field| field.name().len())
            .max()
            .unwrap_or(0)
            + 5;

        let mut out = String::new();
        for field in ConfigField::ALL {
            let label = format!("{}:", field.name());
            out.push_str(&format!(
                "{:<width$}{}\n",
                label,
                self.get(field).to_display_literal(),
                width = width
            ));
        }
        out
    }
}

fn to_count(field: ConfigField, n: u64) -> Result<usize> {
    usize::try_from(n).map_err(|_| ConfigError::invalid_value(field.name(), "value is too large"))
}
