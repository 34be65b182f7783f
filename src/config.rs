//! Endpoint configuration and credential loading

use serde::{Deserialize, Serialize};
use log::debug;

/// Base URL of the Hugging Face Inference API
pub const HF_API_BASE: &str
  = "https://api-inference.huggingface.co/models";

/// Model served by default
pub const DEFAULT_MODEL: &str
  = "mistralai/Mistral-7B-Instruct-v0.3";

/// Environment variable holding the bearer credential
pub const API_KEY_VAR: &str = "HF_API_KEY";

/// Generation endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig
{   /// Model id, e.g. "mistralai/Mistral-7B-Instruct-v0.3"
    pub model: String
  , /// API base URL (if custom)
    pub api_base: Option<String>
  , /// Request timeout in seconds; None leaves the call unbounded
    pub timeout_secs: Option<u64>
}

impl EndpointConfig
{   /// Full URL of the generation endpoint
    pub fn url(&self) -> String
    {   format!(
          "{}/{}",
          self.api_base.as_deref().unwrap_or(HF_API_BASE),
          self.model
        )
    }
}

impl Default for EndpointConfig
{   fn default() -> Self
    {   EndpointConfig
        {   model: DEFAULT_MODEL.to_string()
          , api_base: None
          , timeout_secs: None
        }
    }
}

/// Read the bearer credential from the environment.
/// Absence is fatal upstream: no backend is constructed
/// without a key, so no request is ever accepted.
pub fn api_key_from_env()
  -> Result<String, crate::error::Error>
{   debug!("Loading API key from {}", API_KEY_VAR);
    std::env::var(API_KEY_VAR)
      .map_err(|_| {
        crate::error::Error::MissingApiKey(
          API_KEY_VAR.to_string()
        )
      })
}
