//! gembot configuration system.
//!
//! Provides TOML-based configuration for the API connection, the model
//! and logging. All sections use defaults so partial configs work out
//! of the box, and a missing default file is equivalent to an empty one.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gembot_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.model.name);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use gembot_common::{DEFAULT_API_BASE, DEFAULT_KEY_ENV, DEFAULT_MODEL};
pub use schema::{ApiConfig, GembotConfig, LogLevel, LoggingConfig, ModelConfig};
pub use validation::validate_model_name;

use gembot_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Nothing is written to disk; a missing file yields the defaults.
pub fn load_config() -> Result<GembotConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<GembotConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
