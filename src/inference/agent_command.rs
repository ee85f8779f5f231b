//! Agent command backend: runs a local command with the prompt as stdin and reads stdout.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use super::InferenceClient;
use super::prompt::render_prompt;
use crate::error::InferenceError;
use crate::types::{TaskRequest, TaskResult};

/// Runs `agent_cmd` (split on whitespace) once per request.
///
/// Success is exit status 0; the answer is stdout with trailing whitespace removed.
#[derive(Debug, Clone)]
pub struct AgentCommandClient {
  agent_cmd: String,
}

impl AgentCommandClient {
  pub fn new(agent_cmd: impl Into<String>) -> Self {
    Self {
      agent_cmd: agent_cmd.into(),
    }
  }
}

#[async_trait]
impl InferenceClient for AgentCommandClient {
  fn name(&self) -> &str {
    "agent"
  }

  #[instrument(level = "trace", skip(self, request))]
  async fn infer(&self, request: &TaskRequest) -> Result<TaskResult, InferenceError> {
    let parts: Vec<&str> = self.agent_cmd.split_whitespace().collect();
    let Some((bin, args)) = parts.split_first() else {
      return Err(InferenceError::Agent("agent_cmd is empty".to_string()));
    };
    if !request.image_inputs.is_empty() {
      warn!(
        images = request.image_inputs.len(),
        "agent command backend does not forward image inputs"
      );
    }

    let mut child = Command::new(bin)
      .args(args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::inherit())
      .spawn()
      .map_err(|e| InferenceError::Agent(format!("spawn: {}", e)))?;

    let stdin = child.stdin.take();
    let prompt = render_prompt(request);
    let feed = async move {
      let Some(mut stdin) = stdin else {
        return;
      };
      if let Err(e) = stdin.write_all(prompt.as_bytes()).await {
        debug!(error = %e, "agent stdin closed early");
        return;
      }
      if let Err(e) = stdin.write_all(b"\n").await {
        debug!(error = %e, "agent stdin closed early");
      }
    };
    // stdout is drained while stdin is still being written.
    let ((), output) = tokio::join!(feed, child.wait_with_output());
    let output = output?;
    if !output.status.success() {
      let msg = output
        .status
        .code()
        .map(|c| format!("exit {}", c))
        .unwrap_or_else(|| "terminated by signal".to_string());
      return Err(InferenceError::Agent(msg));
    }
    let text = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    Ok(TaskResult::new(text))
  }
}
