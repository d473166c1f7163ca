//! Logging module for debug mode
//!
//! Provides logging module that writes to a temp file
//! with timestamps when --debug is specified

use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

// run once in a single thread. this prevents race conditions
static INIT: Once = Once::new();

pub const LOG_FILE_NAME: &str = "autocomplete-config-debug.log";

/// Initializes logging when debug mode is enabled
/// Creates a file in the temp directory and sets up logger with timestamps
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    let mut log_path = std::env::temp_dir();
    log_path.push(LOG_FILE_NAME);

    // Create or truncate the log file
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| crate::ConfigError::FileAccessError {
            path: log_path.to_string_lossy().to_string(),
            reason: format!("Failed to create log file: {}", e),
        })?;

    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}:{} - {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S.%3f UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    });

    info!("Debug logging initialized to: {}", log_path.display());

    Ok(log_path)
}

/// Logs warnings and errors to stderr, honoring `RUST_LOG` when set
pub fn init_stderr_logging() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .parse_default_env()
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_logging_creates_log_file() {
        let path = init_debug_logging().unwrap();
        assert!(path.ends_with(LOG_FILE_NAME));
        assert!(path.exists());
    }

    #[test]
    fn test_stderr_logging_can_be_called_repeatedly() {
        init_stderr_logging();
        init_stderr_logging();
        // whichever initializer ran first, warnings are enabled
        assert!(log::max_level() >= log::LevelFilter::Warn);
        log::warn!("stderr logging initialized");
    }
}
