//! Runtime configuration for the `classmere` binary.
//!
//! Loaded from environment variables with defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub log_level: String,
    /// Catalog directory read when no paths are given on the command line
    pub catalog_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables, reading a `.env` file
    /// first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup("CLASSMERE_LOG_LEVEL")
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        let catalog_dir = lookup("CLASSMERE_CATALOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            catalog_dir,
        }
    }
}
