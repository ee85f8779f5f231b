//! Tests for the agent command backend. Uses `cat`, `true` and `false` from the host.

use super::{AgentCommandClient, InferenceClient};
use crate::error::InferenceError;
use crate::types::TaskRequest;

fn request() -> TaskRequest {
  TaskRequest {
    task_text: "uppercase".to_string(),
    text_inputs: vec!["abc".to_string()],
    image_inputs: vec![],
  }
}

#[tokio::test]
async fn stdout_is_the_answer() {
  let client = AgentCommandClient::new("cat");
  let r = client.infer(&request()).await.unwrap();
  assert!(r.text.contains("Task Definition: uppercase"));
  assert!(r.text.contains("abc"));
  assert!(!r.text.ends_with('\n'));
}

#[tokio::test]
async fn non_zero_exit_is_an_error() {
  let client = AgentCommandClient::new("false");
  let err = client.infer(&request()).await.unwrap_err();
  assert!(matches!(err, InferenceError::Agent(ref m) if m.starts_with("exit ")));
}

#[tokio::test]
async fn empty_command_is_an_error() {
  let client = AgentCommandClient::new("   ");
  let err = client.infer(&request()).await.unwrap_err();
  assert_eq!(err.to_string(), "agent: agent_cmd is empty");
}

#[tokio::test]
async fn missing_binary_is_a_spawn_error() {
  let client = AgentCommandClient::new("definitely-not-a-real-binary-xyz");
  let err = client.infer(&request()).await.unwrap_err();
  assert!(err.to_string().starts_with("agent: spawn:"));
}

#[tokio::test]
async fn prompt_larger_than_pipe_buffer_does_not_block() {
  let big = "x".repeat(300_000);
  let req = TaskRequest {
    task_text: "echo".to_string(),
    text_inputs: vec![big.clone()],
    image_inputs: vec![],
  };
  let client = AgentCommandClient::new("cat");
  let r = tokio::time::timeout(std::time::Duration::from_secs(10), client.infer(&req))
    .await
    .expect("agent run finished")
    .unwrap();
  assert!(r.text.contains(&big));
}
