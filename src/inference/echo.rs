//! Offline backend: answers with the combined text inputs.

use async_trait::async_trait;

use super::InferenceClient;
use crate::error::InferenceError;
use crate::types::{TaskRequest, TaskResult};

/// Returns the processor's text inputs unchanged (trimmed). Useful for wiring checks.
#[derive(Debug, Default, Clone)]
pub struct EchoClient;

#[async_trait]
impl InferenceClient for EchoClient {
  fn name(&self) -> &str {
    "echo"
  }

  async fn infer(&self, request: &TaskRequest) -> Result<TaskResult, InferenceError> {
    Ok(TaskResult::new(request.combined_text().trim_end()))
  }
}
