//! Runtime configuration resolved from the environment.
//!
//! | Variable            | Default                              |
//! |---------------------|--------------------------------------|
//! | `CADENCE_DB_PATH`   | `<temp dir>/cadence.sqlite3`         |
//! | `CADENCE_LOG_LEVEL` | `debug` (debug build), `info` (release) |
//! | `CADENCE_LOG_DIR`   | unset: file logging disabled         |

use crate::logging::{default_log_level, LogLevel};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "CADENCE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "CADENCE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "CADENCE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "cadence.sqlite3";

/// Settings shared by every entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: LogLevel,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = level
                .parse()
                .map_err(|err| format!("{LOG_LEVEL_ENV}: {err}"))?;
        }
        config.log_dir = read(LOG_DIR_ENV).map(PathBuf::from);
        Ok(config)
    }
}
