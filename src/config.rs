//! Runtime configuration.
//!
//! Read once at startup from a JSON file. Every field has a default, so a
//! missing file (or a partial one) is fine; a malformed file is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::data::Category;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV_VAR: &str = "FORUM_CONFIG_PATH";

/// Config file location relative to the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".forum/config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Default,
    HighContrast,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForumConfig {
    pub forum_name: String,
    pub tagline: String,
    /// Name shown as author of topics and comments created in this session.
    pub author_label: String,
    pub default_category: Category,
    pub theme: Theme,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            forum_name: "Black Russia Forum".into(),
            tagline: "Player community".into(),
            author_label: "You".into(),
            default_category: Category::Discussions,
            theme: Theme::Default,
            log_file: None,
            log_level: "info".into(),
        }
    }
}

impl ForumConfig {
    /// Loads the config from the environment override or the default path.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the config at `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("reading config {}", path.display()))
            }
        };
        let mut config: Self = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("parsing config {}", path.display()))?;
        if config.author_label.trim().is_empty() {
            config.author_label = Self::default().author_label;
        }
        Ok(config)
    }

    /// Log file path, defaulting to `forum.log` in the temp directory.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("forum.log"))
    }
}

/// Config path: `$FORUM_CONFIG_PATH`, else `$HOME/.forum/config.json`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE))
}
