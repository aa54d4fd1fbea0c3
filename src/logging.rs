//! Log setup.
//!
//! The terminal belongs to the UI, so events go to a file instead of stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

use crate::config::ForumConfig;

/// Environment variable overriding the configured log level.
pub const LOG_LEVEL_ENV_VAR: &str = "FORUM_LOG_LEVEL";

/// Builds the filter from `FORUM_LOG_LEVEL`, else the configured level.
pub fn env_filter(config: &ForumConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to the configured log file.
pub fn init_tracing(config: &ForumConfig) -> Result<()> {
    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| eyre!("installing log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_falls_back_on_bad_level() {
        let config = ForumConfig {
            log_level: "forum=loud".into(),
            ..ForumConfig::default()
        };
        let filter = env_filter(&config).to_string();
        if std::env::var_os(LOG_LEVEL_ENV_VAR).is_none() {
            assert_eq!(filter, "info");
        }
    }

    #[test]
    fn test_env_filter_uses_configured_level() {
        let config = ForumConfig {
            log_level: "forum=debug".into(),
            ..ForumConfig::default()
        };
        let filter = env_filter(&config).to_string();
        if std::env::var_os(LOG_LEVEL_ENV_VAR).is_none() {
            assert!(filter.contains("forum=debug"));
        }
    }

    #[test]
    fn test_init_tracing_creates_log_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("forum-test.log");
        let config = ForumConfig {
            log_file: Some(path.clone()),
            ..ForumConfig::default()
        };
        // A subscriber may already be installed by another test in this binary.
        let _ = init_tracing(&config);
        assert!(path.exists());
    }
}
