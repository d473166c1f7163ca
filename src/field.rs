//! Named field lookup.
//!
//! Maps the camelCase names used by widget code and the snake_case keys used
//! in TOML files and environment variables onto the record's fields.

use crate::constants::ENV_PREFIX;
use crate::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Fields of the autocomplete record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    MinCharsToAutocomplete,
    MaxAutoCompleteResults,
    DebounceTimeMs,
    HighlightMatchedWords,
    DefaultPlaceholder,
    DefaultTestKey,
    EmptyResultsOnEmptyQuery,
    HighlightResults,
}

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Bool,
    Text,
}

impl ConfigField {
    /// Every field in declaration order
    pub const ALL: [ConfigField; 8] = [
        ConfigField::MinCharsToAutocomplete,
        ConfigField::MaxAutoCompleteResults,
        ConfigField::DebounceTimeMs,
        ConfigField::HighlightMatchedWords,
        ConfigField::DefaultPlaceholder,
        ConfigField::DefaultTestKey,
        ConfigField::EmptyResultsOnEmptyQuery,
        ConfigField::HighlightResults,
    ];

    /// Get the field name as widget code spells it
    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::MinCharsToAutocomplete => "minCharsToAutocomplete",
            ConfigField::MaxAutoCompleteResults => "maxAutoCompleteResults",
            ConfigField::DebounceTimeMs => "debounceTimeMs",
            ConfigField::HighlightMatchedWords => "highlightMatchedWords",
            ConfigField::DefaultPlaceholder => "defaultPlaceholder",
            ConfigField::DefaultTestKey => "defaultTestKey",
            ConfigField::EmptyResultsOnEmptyQuery => "emptyResultsOnEmptyQuery",
            ConfigField::HighlightResults => "highlightResults",
        }
    }

    /// Get the snake_case key used in config files
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::MinCharsToAutocomplete => "min_chars_to_autocomplete",
            ConfigField::MaxAutoCompleteResults => "max_auto_complete_results",
            ConfigField::DebounceTimeMs => "debounce_time_ms",
            ConfigField::HighlightMatchedWords => "highlight_matched_words",
            ConfigField::DefaultPlaceholder => "default_placeholder",
            ConfigField::DefaultTestKey => "default_test_key",
            ConfigField::EmptyResultsOnEmptyQuery => "empty_results_on_empty_query",
            ConfigField::HighlightResults => "highlight_results",
        }
    }

    /// Get the environment variable that overrides this field
    pub fn env_var(&self) -> String {
        format!("{}{}", ENV_PREFIX, self.key().to_ascii_uppercase())
    }

    /// Get the kind of value the field holds
    pub fn kind(&self) -> FieldKind {
        match self {
            ConfigField::MinCharsToAutocomplete
            | ConfigField::MaxAutoCompleteResults
            | ConfigField::DebounceTimeMs => FieldKind::Integer,
            ConfigField::DefaultPlaceholder | ConfigField::DefaultTestKey => FieldKind::Text,
            ConfigField::HighlightMatchedWords
            | ConfigField::EmptyResultsOnEmptyQuery
            | ConfigField::HighlightResults => FieldKind::Bool,
        }
    }

    /// Get the field description
    pub fn description(&self) -> &'static str {
        match self {
            ConfigField::MinCharsToAutocomplete => {
                "Minimum query length before suggestions are requested"
            }
            ConfigField::MaxAutoCompleteResults => "Upper bound on suggestions returned",
            ConfigField::DebounceTimeMs => "Delay in ms after the last input change",
            ConfigField::HighlightMatchedWords => "Emphasize matched substrings",
            ConfigField::DefaultPlaceholder => "Placeholder text of the empty input",
            ConfigField::DefaultTestKey => "Identifier for UI test automation hooks",
            ConfigField::EmptyResultsOnEmptyQuery => "Clear results when the query is cleared",
            ConfigField::HighlightResults => "Apply highlight styling to result items",
        }
    }

    /// Find the field an environment variable overrides, if any.
    /// Only the exact upper-snake spelling matches.
    pub fn from_env_var(var: &str) -> Option<ConfigField> {
        ConfigField::ALL
            .into_iter()
            .find(|field| field.env_var() == var)
    }
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Integer => "an integer",
            FieldKind::Bool => "a boolean",
            FieldKind::Text => "a text",
        }
    }
}

impl FromStr for ConfigField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ConfigField::ALL
            .into_iter()
            .find(|field| field.name() == trimmed || field.key() == trimmed)
            .ok_or_else(|| ConfigError::UnknownField(trimmed.to_string()))
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single field value read from the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Integer(u64),
    Bool(bool),
    Text(String),
}

impl ConfigValue {
    /// Render the value the way it would appear in source: strings quoted
    pub fn to_display_literal(&self) -> String {
        match self {
            ConfigValue::Text(text) => format!("{:?}", text),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Text(text) => write!(f, "{}", text),
        }
    }
}
