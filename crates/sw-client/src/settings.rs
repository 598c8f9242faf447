//! Backend settings loaded from the environment.
//!
//! ```text
//! GEMINI_API_KEY            required by GeminiBackend
//! GEMINI_MODEL              default "gemini-1.5-flash"
//! GEMINI_TEMPERATURE        default 0.7
//! GEMINI_MAX_OUTPUT_TOKENS  default 1024
//! GEMINI_BASE_URL           default Google's v1beta endpoint
//! GEMINI_TIMEOUT_SECS       default 60
//! ```

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::{GenError, GenResult};

pub const ENV_PREFIX: &str = "GEMINI";

/// Everything needed to reach a hosted model.  Built once and passed
/// explicitly to the backend constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub api_key:           Option<String>,
    pub model:             String,
    pub temperature:       f32,
    pub max_output_tokens: u32,
    pub base_url:          String,
    pub timeout_secs:      u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key:           None,
            model:             "gemini-1.5-flash".to_owned(),
            temperature:       0.7,
            max_output_tokens: 1024,
            base_url:          "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            timeout_secs:      60,
        }
    }
}

impl GenerationConfig {
    /// Load from `GEMINI_*` environment variables over the defaults.
    pub fn from_env() -> GenResult<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit environment source (tests inject a map).
    pub fn from_environment(env: Environment) -> GenResult<Self> {
        Config::builder()
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| GenError::Config(e.to_string()))
    }

    /// The API key, or a configuration error if it is absent or blank.
    pub fn require_api_key(&self) -> GenResult<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(GenError::Config(format!("{ENV_PREFIX}_API_KEY not configured"))),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.require_api_key().is_ok()
    }
}
