//! The inference collaborator and its backends.
//!
//! The engine treats inference as opaque: one async call per run, no retries, no timeout of
//! its own. Every failure is returned as an [InferenceError] and later written into the
//! result node as text.

mod agent_command;
#[cfg(test)]
mod agent_command_test;
mod echo;
mod gemini;
pub mod prompt;
#[cfg(test)]
mod prompt_test;

use async_trait::async_trait;

use crate::error::InferenceError;
use crate::types::{TaskRequest, TaskResult};

pub use agent_command::AgentCommandClient;
pub use echo::EchoClient;
pub use gemini::{DEFAULT_GEMINI_ENDPOINT, GeminiClient};

/// Performs the "task" computation for a processor run.
#[async_trait]
pub trait InferenceClient: Send + Sync {
  /// Short backend name for logs.
  fn name(&self) -> &str;

  async fn infer(&self, request: &TaskRequest) -> Result<TaskResult, InferenceError>;
}
