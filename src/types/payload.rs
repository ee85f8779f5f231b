//! Typed content extracted from a node for use as processor input.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::NodeId;

/// Decoded image content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
  pub bytes: Bytes,
  pub mime_type: String,
  pub name: String,
}

/// Text or image content of a node, independent of how the node is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
  Text { text: String },
  Image(ImagePayload),
}

impl Payload {
  pub fn text(text: impl Into<String>) -> Self {
    Payload::Text { text: text.into() }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Payload::Text { text } => Some(text),
      Payload::Image(_) => None,
    }
  }

  pub fn as_image(&self) -> Option<&ImagePayload> {
    match self {
      Payload::Image(img) => Some(img),
      Payload::Text { .. } => None,
    }
  }
}

/// One upstream input of a processor, in connector (or node) processing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInput {
  pub payload: Payload,
  pub source_node_id: NodeId,
}
