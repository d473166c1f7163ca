//! Constants used throughout the application.
//!
//! The literal autocomplete defaults and the limits enforced when
//! loading overrides.

pub const MIN_CHARS_TO_AUTOCOMPLETE: usize = 1;
pub const MAX_AUTO_COMPLETE_RESULTS: usize = 15;
pub const DEBOUNCE_TIME_MS: u64 = 300;
pub const HIGHLIGHT_MATCHED_WORDS: bool = true;
pub const DEFAULT_PLACEHOLDER: &str = "";
pub const DEFAULT_TEST_KEY: &str = "";
pub const EMPTY_RESULTS_ON_EMPTY_QUERY: bool = true;
pub const HIGHLIGHT_RESULTS: bool = true;

pub const ENV_PREFIX: &str = "AUTOCOMPLETE_";
pub const CONFIG_FILE_NAME: &str = "autocomplete.toml";
pub const MAX_RESULTS_LIMIT: usize = 1000;
pub const MAX_DEBOUNCE_TIME_MS: u64 = 10_000;
pub const TEXT_MAX_LENGTH: usize = 256;
