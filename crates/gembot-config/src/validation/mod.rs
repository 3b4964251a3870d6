//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::GembotConfig;
use gembot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GembotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_api(&mut errors, config);
    sections::validate_model(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Check a model id given outside the config file, such as `--model`.
pub fn validate_model_name(label: &str, name: &str) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    helpers::validate_model_id(&mut errors, label, name);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
