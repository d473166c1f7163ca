//! Layered configuration loading.
//!
//! Builds a record once from the literal defaults, an optional TOML file and
//! `AUTOCOMPLETE_*` environment overrides, in that order of precedence. The
//! result is validated and can be installed as the process-wide record.

use crate::config::AutocompleteConfig;
use crate::constants::ENV_PREFIX;
use crate::field::{ConfigField, ConfigValue, FieldKind};
use crate::validation::ConfigValidator;
use crate::{ConfigError, Result};
use log::{debug, info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// Installed at most once per process
static GLOBAL: OnceLock<AutocompleteConfig> = OnceLock::new();

/// Builder for a validated autocomplete record
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Config file and whether it has to exist
    file: Option<(PathBuf, bool)>,
    /// Environment pairs to scan for overrides
    env: Option<Vec<(String, String)>>,
}

impl ConfigLoader {
    /// Create a loader that yields the literal defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from a TOML file that must exist
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some((path.as_ref().to_path_buf(), true));
        self
    }

    /// Read overrides from a TOML file if it exists
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some((path.as_ref().to_path_buf(), false));
        self
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        // non-UTF-8 variables cannot name a field, skip them
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        self.with_env_vars(vars)
    }

    /// Apply overrides from explicit `(name, value)` pairs
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Build and validate the record
    pub fn load(&self) -> Result<AutocompleteConfig> {
        let mut config = AutocompleteConfig::default();

        if let Some((path, required)) = &self.file {
            if let Some(from_file) = Self::read_file(path, *required)? {
                config = from_file;
            }
        }

        if let Some(vars) = &self.env {
            for (var, value) in vars {
                if !var.starts_with(ENV_PREFIX) {
                    continue;
                }
                match ConfigField::from_env_var(var) {
                    Some(field) => {
                        apply_override(&mut config, field, value, var)?;
                        debug!("Applied override {}={:?}", var, value);
                    }
                    None => warn!("Ignoring unknown override {}", var),
                }
            }
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn read_file(path: &Path, required: bool) -> Result<Option<AutocompleteConfig>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                debug!("No config file at {}, using defaults", path.display());
                return Ok(None);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::file_access_error(
                    &path.to_string_lossy(),
                    "Config file not found",
                ));
            }
            Err(e) => {
                return Err(ConfigError::file_access_error(
                    &path.to_string_lossy(),
                    &format!("Failed to read config file: {}", e),
                ));
            }
        };

        let config = AutocompleteConfig::from_toml_str(&content).map_err(|e| match e {
            ConfigError::MalformedConfig { reason, .. } => {
                ConfigError::malformed(&path.to_string_lossy(), &reason)
            }
            other => other,
        })?;

        info!("Loaded config file {}", path.display());
        Ok(Some(config))
    }
}

/// Overwrite one field from a raw environment value
fn apply_override(
    config: &mut AutocompleteConfig,
    field: ConfigField,
    raw: &str,
    var: &str,
) -> Result<()> {
    let origin = format!("env:{}", var);
    let value = match field.kind() {
        FieldKind::Integer => ConfigValue::Integer(parse_integer(raw, &origin)?),
        FieldKind::Bool => ConfigValue::Bool(parse_bool(raw, &origin)?),
        FieldKind::Text if field == ConfigField::DefaultPlaceholder => {
            let sanitized = ConfigValidator::sanitize_text(raw);
            if sanitized != raw {
                warn!("Stripped control characters from {}", var);
            }
            ConfigValue::Text(sanitized)
        }
        // the test key is passed through untouched
        FieldKind::Text => ConfigValue::Text(raw.to_string()),
    };
    config.set(field, value)
}

fn parse_integer(raw: &str, origin: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::malformed(origin, "expected an unsigned integer"))
}

fn parse_bool(raw: &str, origin: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::malformed(origin, "expected true or false")),
    }
}

/// Install the process-wide record. Fails if one is already in place,
/// including the defaults frozen by an earlier `global()` call.
pub fn init_global(config: AutocompleteConfig) -> Result<&'static AutocompleteConfig> {
    ConfigValidator::validate(&config)?;
    GLOBAL
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(global())
}

/// The process-wide record, or the literal defaults if none was installed
pub fn global() -> &'static AutocompleteConfig {
    GLOBAL.get_or_init(AutocompleteConfig::default)
}
