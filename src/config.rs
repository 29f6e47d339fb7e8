//! Runtime configuration, read from a TOML file.
//!
//! ```toml
//! log_filter = "pagelink=debug"
//! stop_on_error = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LinkerError, Result};

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkerConfig {
    /// tracing `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Stop reading commands after the first reported error.
    pub stop_on_error: bool,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            stop_on_error: false,
        }
    }
}

impl LinkerConfig {
    /// Load config from `path`. A missing, unreadable or invalid file is
    /// an error; callers without a config file use `Default`.
    pub fn try_load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| LinkerError::config(e.to_string()))?;
        if config.log_filter.trim().is_empty() {
            return Err(LinkerError::config("log_filter must not be empty"));
        }
        Ok(config)
    }
}
