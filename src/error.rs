use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions of an index build.
///
/// Per-file problems never show up here; they are counted in
/// [`BuildStats::files_skipped`](crate::index::BuildStats) instead.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Root path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Root path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid exclude pattern: {0}")]
    InvalidPattern(#[from] globset::Error),
}

/// Errors while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
