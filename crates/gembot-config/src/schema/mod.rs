//! Configuration schema types for gembot.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod logging;
mod model;

pub use api::*;
pub use logging::*;
pub use model::*;

use serde::{Deserialize, Serialize};

/// Root configuration for gembot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GembotConfig {
    pub api: ApiConfig,
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_gemini() {
        let config = GembotConfig::default();
        assert_eq!(config.api.key_env, "GEMINI_API_KEY");
        assert_eq!(
            config.api.base_url,
            "https://generativelanguage.googleapis.com/v1beta/models"
        );
        assert!(config.api.verify_on_connect);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(config.api.request_timeout_secs, None);
    }

    #[test]
    fn default_config_has_correct_model() {
        let config = GembotConfig::default();
        assert_eq!(config.model.name, "gemini-1.5-flash-latest");
        assert_eq!(config.model.max_output_tokens, 4096);
        assert!((config.model.temperature - 0.7).abs() < f64::EPSILON);
        assert!(config.model.system_instruction.is_none());
    }

    #[test]
    fn default_logging_level_is_warn() {
        let config = GembotConfig::default();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.level.as_directive(), "warn");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: GembotConfig = toml::from_str(
            r#"
[model]
name = "gemini-2.0-flash"
"#,
        )
        .unwrap();
        assert_eq!(config.model.name, "gemini-2.0-flash");
        assert_eq!(config.model.max_output_tokens, 4096);
        assert_eq!(config.api.key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: GembotConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result: Result<GembotConfig, _> = toml::from_str("[logging]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }
}
