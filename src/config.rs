//! Inference backend configuration.
//!
//! Environment variables override command-line values when set:
//!
//! - `CANVAS_FLOW_GEMINI_API_KEY`: API key for the `gemini` backend
//! - `CANVAS_FLOW_GEMINI_ENDPOINT`: `generateContent` URL (defaults to the public endpoint)
//! - `CANVAS_FLOW_AGENT_CMD`: command for the `agent` backend

use std::sync::Arc;

use crate::error::ConfigError;
use crate::inference::{AgentCommandClient, EchoClient, GeminiClient, InferenceClient};

pub const ENV_API_KEY: &str = "CANVAS_FLOW_GEMINI_API_KEY";
pub const ENV_ENDPOINT: &str = "CANVAS_FLOW_GEMINI_ENDPOINT";
pub const ENV_AGENT_CMD: &str = "CANVAS_FLOW_AGENT_CMD";

/// Values given on the command line (or by an embedding application).
#[derive(Debug, Clone, Default)]
pub struct InferenceSettings {
  pub backend: String,
  pub api_key: Option<String>,
  pub endpoint: Option<String>,
  pub agent_cmd: Option<String>,
}

/// A validated backend choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceConfig {
  Gemini {
    api_key: String,
    endpoint: Option<String>,
  },
  Agent {
    agent_cmd: String,
  },
  Echo,
}

fn non_blank(v: Option<String>) -> Option<String> {
  v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl InferenceConfig {
  /// Validates `settings`, letting `env` (a variable lookup) override each value.
  pub fn resolve_with(
    settings: &InferenceSettings,
    env: impl Fn(&str) -> Option<String>,
  ) -> Result<Self, ConfigError> {
    match settings.backend.trim().to_lowercase().as_str() {
      "gemini" => {
        let api_key = non_blank(env(ENV_API_KEY).or_else(|| settings.api_key.clone()))
          .ok_or(ConfigError::MissingApiKey)?;
        let endpoint = non_blank(env(ENV_ENDPOINT).or_else(|| settings.endpoint.clone()));
        Ok(InferenceConfig::Gemini { api_key, endpoint })
      }
      "agent" => {
        let agent_cmd = non_blank(env(ENV_AGENT_CMD).or_else(|| settings.agent_cmd.clone()))
          .ok_or(ConfigError::MissingAgentCommand)?;
        Ok(InferenceConfig::Agent { agent_cmd })
      }
      "echo" => Ok(InferenceConfig::Echo),
      other => Err(ConfigError::UnknownBackend(other.to_string())),
    }
  }

  /// Like [InferenceConfig::resolve_with] over the process environment.
  pub fn from_env(settings: &InferenceSettings) -> Result<Self, ConfigError> {
    Self::resolve_with(settings, |key| std::env::var(key).ok())
  }

  pub fn build_client(&self) -> Arc<dyn InferenceClient> {
    match self {
      InferenceConfig::Gemini { api_key, endpoint } => {
        Arc::new(GeminiClient::new(api_key.clone(), endpoint.clone()))
      }
      InferenceConfig::Agent { agent_cmd } => Arc::new(AgentCommandClient::new(agent_cmd.clone())),
      InferenceConfig::Echo => Arc::new(EchoClient),
    }
  }
}
