use crate::error::ConfigError;
use crate::index::IndexConfig;
use crate::query::DEFAULT_SNIPPET_CAP;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "lsearch";
const CONFIG_FILE: &str = "config.json";

/// User configuration, read from `config.json` in the app config directory.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Walk and file-filter settings for index builds
    pub index: IndexConfig,

    /// Lines shown per file before "... and N more lines."
    pub snippet_cap: usize,

    /// Colour terminal output when stdout is a terminal
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            index: IndexConfig::default(),
            snippet_cap: DEFAULT_SNIPPET_CAP,
            color: true,
        }
    }
}

impl AppConfig {
    /// Load config from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to built-in defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match get_config_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Location of the default config file, if the platform has a config dir
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Directory scanned when the user accepts the interactive default:
/// the parent of the current directory, so sibling projects are included
pub fn default_scan_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match cwd.parent() {
        Some(parent) => parent.to_path_buf(),
        None => cwd,
    }
}
