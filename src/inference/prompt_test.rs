//! Tests for prompt rendering.

use super::prompt::render_prompt;
use crate::types::TaskRequest;

#[test]
fn includes_task_and_inputs() {
  let req = TaskRequest {
    task_text: "Translate to French".to_string(),
    text_inputs: vec!["Hello".to_string(), "World".to_string()],
    image_inputs: vec![],
  };
  let p = render_prompt(&req);
  assert!(p.contains("Task Definition: Translate to French\n"));
  assert!(p.contains("DATA CONTEXT:\nInput Data:\nHello\n\nWorld\n\n"));
  assert!(p.ends_with("Output ONLY the result. No conversational filler."));
}

#[test]
fn marks_missing_text() {
  let req = TaskRequest {
    task_text: "Describe the picture".to_string(),
    ..Default::default()
  };
  assert!(render_prompt(&req).contains("DATA CONTEXT:\nNo text input.\n"));
}
