//! Process startup helpers: `.env` loading, config resolution and the
//! translation of file config into the client configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use gembot_ai::GeminiConfig;
use gembot_common::ConfigError;
use gembot_config::GembotConfig;

/// Load config from `--config` or the platform default.
///
/// Never fails: on error the defaults are returned together with the error
/// so the caller can report it once logging is up.
pub fn load_config(override_path: Option<&str>) -> (GembotConfig, Option<ConfigError>) {
    let result = match override_path {
        Some(path) => gembot_config::load_config_from(Path::new(path)),
        None => gembot_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (GembotConfig::default(), Some(e)),
    }
}

/// Build the client configuration for everything except the credential.
pub fn gemini_template(config: &GembotConfig, model_override: Option<&str>) -> GeminiConfig {
    let model = model_override
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(&config.model.name);

    GeminiConfig::new(String::new())
        .with_model(model)
        .with_base_url(config.api.base_url.as_str())
        .with_max_tokens(config.model.max_output_tokens)
        .with_temperature(config.model.temperature)
        .with_system_instruction(config.model.system_instruction.clone())
        .with_connect_timeout(Duration::from_secs(config.api.connect_timeout_secs))
        .with_request_timeout(config.api.request_timeout_secs.map(Duration::from_secs))
        .with_verify_on_connect(config.api.verify_on_connect)
}

/// Read the credential from `var`, treating unset and blank alike.
pub fn credential_from_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// The first existing file wins; variables already set are left alone.
pub fn load_dotenv() {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Ok(dir) = gembot_config::toml_loader::config_dir() {
        candidates.push(dir.join(".env"));
    }

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

/// Parse `.env` contents into key/value pairs.
pub(crate) fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dotenv_handles_comments_quotes_and_export() {
        let pairs = parse_dotenv(
            "# credentials\n\
             GEMINI_API_KEY=\"sk-quoted\"\n\
             export OTHER='single'\n\
             \n\
             =no-key\n\
             not a pair\n\
             PLAIN = value with spaces \n",
        );
        assert_eq!(
            pairs,
            vec![
                ("GEMINI_API_KEY".to_string(), "sk-quoted".to_string()),
                ("OTHER".to_string(), "single".to_string()),
                ("PLAIN".to_string(), "value with spaces".to_string()),
            ]
        );
    }

    #[test]
    fn credential_from_env_ignores_blank_values() {
        std::env::set_var("GEMBOT_TEST_BLANK_KEY", "   ");
        assert_eq!(credential_from_env("GEMBOT_TEST_BLANK_KEY"), None);

        std::env::set_var("GEMBOT_TEST_SET_KEY", " sk-env \n");
        assert_eq!(
            credential_from_env("GEMBOT_TEST_SET_KEY").as_deref(),
            Some("sk-env")
        );

        assert_eq!(credential_from_env("GEMBOT_TEST_UNSET_KEY"), None);
    }

    #[test]
    fn template_carries_file_config() {
        let mut config = GembotConfig::default();
        config.model.temperature = 1.1;
        config.model.system_instruction = Some("Be brief.".into());
        config.api.request_timeout_secs = Some(45);
        config.api.verify_on_connect = false;

        let template = gemini_template(&config, None);
        assert_eq!(template.model, "gemini-1.5-flash-latest");
        assert!((template.temperature - 1.1).abs() < f64::EPSILON);
        assert_eq!(template.system_instruction.as_deref(), Some("Be brief."));
        assert_eq!(template.request_timeout, Some(Duration::from_secs(45)));
        assert_eq!(template.connect_timeout, Duration::from_secs(10));
        assert!(!template.verify_on_connect);
        assert!(template.api_key.is_empty());
    }

    #[test]
    fn cli_model_overrides_file_model() {
        let config = GembotConfig::default();
        assert_eq!(
            gemini_template(&config, Some("gemini-2.0-flash")).model,
            "gemini-2.0-flash"
        );
        assert_eq!(
            gemini_template(&config, Some("  ")).model,
            "gemini-1.5-flash-latest"
        );
    }

    #[test]
    fn load_config_falls_back_to_defaults_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\ntemperature = 9.0\n").unwrap();

        let (config, err) = load_config(path.to_str());
        assert!(matches!(err, Some(ConfigError::ValidationError(_))));
        assert!((config.model.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_reads_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nkey_env = \"MY_KEY\"\n").unwrap();

        let (config, err) = load_config(path.to_str());
        assert!(err.is_none());
        assert_eq!(config.api.key_env, "MY_KEY");
    }
}
