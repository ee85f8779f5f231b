//! Request sent to the inference collaborator and its raw answer.

use serde::{Deserialize, Serialize};

use super::{ImagePayload, Payload, ResolvedInput};

/// Task description plus the processor's ordered inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskRequest {
  pub task_text: String,
  pub text_inputs: Vec<String>,
  pub image_inputs: Vec<ImagePayload>,
}

impl TaskRequest {
  /// Splits `inputs` into text and image lists, keeping their order.
  pub fn new(task_text: impl Into<String>, inputs: &[ResolvedInput]) -> Self {
    let mut text_inputs = Vec::new();
    let mut image_inputs = Vec::new();
    for input in inputs {
      match &input.payload {
        Payload::Text { text } => text_inputs.push(text.clone()),
        Payload::Image(img) => image_inputs.push(img.clone()),
      }
    }
    Self {
      task_text: task_text.into(),
      text_inputs,
      image_inputs,
    }
  }

  /// Text inputs concatenated, each followed by a blank line.
  pub fn combined_text(&self) -> String {
    let mut out = String::new();
    for text in &self.text_inputs {
      out.push_str(text);
      out.push_str("\n\n");
    }
    out
  }

  /// False when there is neither non-blank text nor an image to work on.
  pub fn has_content(&self) -> bool {
    !self.combined_text().trim().is_empty() || !self.image_inputs.is_empty()
  }
}

/// Raw text returned by the inference collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
  pub text: String,
}

impl TaskResult {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}
