//! Configuration for adhoc-net
//!
//! Read from `--config <path>` when given, otherwise from
//! `~/.config/adhocnet/config.toml` (or `$ADHOCNET_CONFIG_DIR/config.toml`).
//! A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NetError, Result};

pub use types::{Config, LogConfig, TraceConfig};

const CONFIG_DIR: &str = "adhocnet";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "ADHOCNET_CONFIG_DIR";

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    NetError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NetError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from an explicit path, or from the default location if present
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
