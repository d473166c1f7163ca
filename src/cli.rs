//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap and prints the
//! resolved autocomplete settings
//!

use crate::config::AutocompleteConfig;
use crate::constants::CONFIG_FILE_NAME;
use crate::field::ConfigField;
use crate::loader::ConfigLoader;
use crate::{ConfigError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Autocomplete settings - print the defaults or the values resolved from overrides
#[derive(Parser, Debug)]
#[command(
    name = "autocomplete-config",
    about = "Print autocomplete widget settings",
    long_about = "Autocomplete settings - resolves the literal defaults, an optional TOML file
and AUTOCOMPLETE_* environment overrides into one validated record

    EXAMPLES:
        autocomplete-config                          # Print every setting
        autocomplete-config -f debounceTimeMs        # Print a single value
        autocomplete-config -c autocomplete.toml     # Apply a config file
        autocomplete-config --no-env --toml          # Defaults as TOML
    "
)]
#[command(version)]
pub struct Cli {
    /// Config file with overrides
    #[arg(short, long, help = "TOML file with overrides")]
    pub config: Option<PathBuf>,

    /// Skip environment overrides
    #[arg(long, help = "Ignore AUTOCOMPLETE_* environment variables")]
    pub no_env: bool,

    /// Print a single field
    #[arg(short, long, help = "Print a single field (camelCase or snake_case name)")]
    pub field: Option<String>,

    /// Output as TOML
    #[arg(long, help = "Print the settings as TOML")]
    pub toml: bool,

    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to temp file with timestamps)"
    )]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(ConfigError::invalid_arguments(&format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            if !path.is_file() {
                return Err(ConfigError::invalid_arguments(&format!(
                    "Config path must be a file: {}",
                    path.display()
                )));
            }
        }

        if let Some(name) = &self.field {
            name.parse::<ConfigField>()?;
            if self.toml {
                return Err(ConfigError::invalid_arguments(
                    "--toml cannot be combined with --field",
                ));
            }
        }

        Ok(())
    }

    /// Build the loader described by the arguments
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();
        match &self.config {
            Some(path) => loader = loader.with_file(path),
            None => loader = loader.with_optional_file(CONFIG_FILE_NAME),
        }
        if !self.no_env {
            loader = loader.with_env();
        }
        loader
    }

    /// Render the output for a resolved record
    pub fn render(&self, config: &AutocompleteConfig) -> Result<String> {
        if let Some(name) = &self.field {
            let field: ConfigField = name.parse()?;
            return Ok(format!("{}\n", config.get(field)));
        }
        if self.toml {
            return config.to_toml_string();
        }
        Ok(config.render_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_test_cli(config: Option<PathBuf>, field: Option<&str>, toml: bool) -> Cli {
        Cli {
            config,
            no_env: true,
            field: field.map(|f| f.to_string()),
            toml,
            debug: false,
        }
    }

    #[test]
    fn test_default_arguments_are_valid() {
        let cli = create_test_cli(None, None, false);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_field_validation() {
        assert!(create_test_cli(None, Some("debounceTimeMs"), false).validate().is_ok());
        assert!(create_test_cli(None, Some("debounce_time_ms"), false).validate().is_ok());
    }

    #[test]
    fn test_unknown_field_is_reported_with_suggestion() {
        let err = create_test_cli(None, Some("nope"), false)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownField(ref name) if name == "nope"));
        assert_eq!(
            err.get_recovery_suggestion().unwrap(),
            "Run without --field to list every field name."
        );
    }

    #[test]
    fn test_toml_with_field_is_invalid_arguments() {
        let err = create_test_cli(None, Some("debounceTimeMs"), true)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArguments(_)));
        assert!(err.to_string().contains("--toml cannot be combined with --field"));
        assert!(err.get_recovery_suggestion().is_some());
    }

    #[test]
    fn test_config_path_validation() {
        let cli = create_test_cli(Some(PathBuf::from("/path/to/missing.toml")), None, false);
        let err = cli.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArguments(_)));
        assert!(err.to_string().contains("does not exist"));

        let dir = tempfile::tempdir().unwrap();
        let cli = create_test_cli(Some(dir.path().to_path_buf()), None, false);
        let err = cli.validate().unwrap_err();
        assert!(err.to_string().contains("must be a file"));
    }

    #[test]
    fn test_render_single_field() {
        let config = AutocompleteConfig::default();
        let cli = create_test_cli(None, Some("maxAutoCompleteResults"), false);
        assert_eq!(cli.render(&config).unwrap(), "15\n");

        let cli = create_test_cli(None, Some("defaultPlaceholder"), false);
        assert_eq!(cli.render(&config).unwrap(), "\n");
    }

    #[test]
    fn test_render_table_and_toml() {
        let config = AutocompleteConfig::default();
        let table = create_test_cli(None, None, false).render(&config).unwrap();
        assert!(table.starts_with("minCharsToAutocomplete:      1\n"));

        let toml = create_test_cli(None, None, true).render(&config).unwrap();
        assert!(toml.contains("max_auto_complete_results = 15"));
    }

    #[test]
    fn test_loader_uses_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"debounceTimeMs = 120\n").unwrap();

        let cli = create_test_cli(Some(file.path().to_path_buf()), None, false);
        assert!(cli.validate().is_ok());
        let config = cli.loader().load().unwrap();
        assert_eq!(config.debounce_time_ms(), 120);
    }

    #[test]
    fn test_loader_reads_process_environment_unless_disabled() {
        std::env::set_var("AUTOCOMPLETE_DEFAULT_PLACEHOLDER", "Type to search");

        let mut cli = create_test_cli(None, None, false);
        cli.no_env = false;
        let config = cli.loader().load().unwrap();
        assert_eq!(config.default_placeholder(), "Type to search");

        cli.no_env = true;
        let config = cli.loader().load().unwrap();
        assert_eq!(config.default_placeholder(), "");
    }
}
