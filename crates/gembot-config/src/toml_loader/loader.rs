//! Core TOML config loading: read from path or platform default.

use crate::schema::GembotConfig;
use gembot_common::ConfigError;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<GembotConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: GembotConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/gembot/config.toml`
/// On Linux: `~/.config/gembot/config.toml`
///
/// A missing file means defaults. Nothing is created on disk.
pub fn load_default() -> Result<GembotConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_default(&path)
}

/// Load `path`, or return defaults when the file does not exist.
pub(crate) fn load_or_default(path: &Path) -> Result<GembotConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config found at {}, using defaults", path.display());
            Ok(GembotConfig::default())
        }
        Err(e) => Err(e),
    }
}
