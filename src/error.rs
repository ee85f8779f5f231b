//! Error types for the canvas collaborator, inference backends, scene files and configuration.
//!
//! Resolution itself never fails; these only surface at the edges.

use crate::types::NodeId;

/// Failures of the canvas store when applying engine commands.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
  #[error("node not found: {0}")]
  NodeNotFound(NodeId),

  #[error("shape id already in use: {0}")]
  DuplicateId(String),

  #[error("node {0} is not a processor")]
  NotAProcessor(NodeId),

  #[error("canvas lock poisoned")]
  Poisoned,
}

/// Failures of an inference backend. All of them end up as error text in a result node.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
  #[error("request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{0}")]
  Api(String),

  #[error("No response from AI")]
  EmptyResponse,

  #[error("agent: {0}")]
  Agent(String),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

/// Failures loading or writing a scene document.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid scene json: {0}")]
  Json(#[from] serde_json::Error),
}

/// Invalid inference configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("API key is not configured (set CANVAS_FLOW_GEMINI_API_KEY or --api-key)")]
  MissingApiKey,

  #[error("agent command is not configured (set CANVAS_FLOW_AGENT_CMD or --agent-cmd)")]
  MissingAgentCommand,

  #[error("unknown backend: {0} (expected gemini, agent or echo)")]
  UnknownBackend(String),
}
