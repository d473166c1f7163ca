//! Autocomplete Config - frozen default settings for autocomplete inputs
//!
//! Exposes one immutable record of named defaults (debounce timing, result
//! limits, placeholder text, highlight flags) that widgets read at runtime,
//! with optional TOML and environment overrides applied once at startup.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod loader;
pub mod logging;
pub mod validation;

// Re-export `Cli` for use from `main`
pub use cli::Cli;
pub use config::{defaults, AutocompleteConfig};
pub use error::{ConfigError, Result};
pub use field::{ConfigField, ConfigValue};
pub use loader::{global, init_global, ConfigLoader};
