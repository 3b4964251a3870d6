//! Generative model settings.

use gembot_common::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};

/// Model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// Valid range: 1-65536.
    pub max_output_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Sent as `systemInstruction`; never counted as a turn.
    pub system_instruction: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            max_output_tokens: 4096,
            temperature: 0.7,
            system_instruction: None,
        }
    }
}
