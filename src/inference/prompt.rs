//! Prompt text sent to model backends.

use crate::types::TaskRequest;

/// Wraps the task and its text inputs in the agent-node instruction template.
pub fn render_prompt(request: &TaskRequest) -> String {
  let combined = request.combined_text();
  let data = if combined.is_empty() {
    "No text input.".to_string()
  } else {
    format!("Input Data:\n{combined}")
  };
  format!(
    "You are a specialised AI Agent node in a visual OS.\n\
     Task Definition: {task}\n\
     \n\
     DATA CONTEXT:\n\
     {data}\n\
     \n\
     Instructions: Execute the task on the input data. Output ONLY the result. No conversational filler.",
    task = request.task_text,
  )
}
