//! Nodes on the canvas, modelled as a tagged union over node kinds.

use serde::{Deserialize, Serialize};

use super::{AssetId, NodeId, Point, ProcessorStatus, Rect, Size};

/// Nodes that can describe themselves as plain text.
///
/// Kinds without this capability fall back to their direct `text` field, if any.
pub trait TextExtractable {
  fn displayable_text(&self) -> Option<String>;
}

/// Free-form note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNote {
  pub text: String,
}

/// Image node; pixels live in the referenced asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
  pub asset_id: AssetId,
}

/// Embedded mini-app. `props` is whatever state the app keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedApp {
  pub app: String,
  #[serde(default)]
  pub props: serde_json::Map<String, serde_json::Value>,
}

/// Code runner with its captured output lines (oldest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
  pub code: String,
  #[serde(default)]
  pub output: Vec<String>,
}

/// Reference to a web page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserRef {
  pub url: String,
}

/// Agent node: runs `task` against its upstream inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Processor {
  pub task: String,
  #[serde(default)]
  pub status: ProcessorStatus,
}

/// Output card written by a processor run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCard {
  pub text: String,
}

impl TextExtractable for TextNote {
  fn displayable_text(&self) -> Option<String> {
    Some(self.text.clone())
  }
}

impl TextExtractable for ResultCard {
  fn displayable_text(&self) -> Option<String> {
    Some(self.text.clone())
  }
}

/// Kind-specific part of a node. Serialized inline with a `kind` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodeKind {
  TextNote(TextNote),
  Image(ImageNode),
  EmbeddedApp(EmbeddedApp),
  CodeBlock(CodeBlock),
  BrowserRef(BrowserRef),
  Processor(Processor),
  #[serde(rename = "result")]
  ResultCard(ResultCard),
}

impl NodeKind {
  pub fn name(&self) -> &'static str {
    match self {
      NodeKind::TextNote(_) => "text-note",
      NodeKind::Image(_) => "image",
      NodeKind::EmbeddedApp(_) => "embedded-app",
      NodeKind::CodeBlock(_) => "code-block",
      NodeKind::BrowserRef(_) => "browser-ref",
      NodeKind::Processor(_) => "processor",
      NodeKind::ResultCard(_) => "result",
    }
  }

  /// The "get displayable text" capability, when this kind has one.
  pub fn text_capability(&self) -> Option<&dyn TextExtractable> {
    match self {
      NodeKind::TextNote(n) => Some(n),
      NodeKind::ResultCard(r) => Some(r),
      NodeKind::Image(_)
      | NodeKind::EmbeddedApp(_)
      | NodeKind::CodeBlock(_)
      | NodeKind::BrowserRef(_)
      | NodeKind::Processor(_) => None,
    }
  }

  /// Direct `text` field of the node's payload, when it has one.
  pub fn text_field(&self) -> Option<&str> {
    match self {
      NodeKind::TextNote(n) => Some(&n.text),
      NodeKind::ResultCard(r) => Some(&r.text),
      NodeKind::EmbeddedApp(app) => app.props.get("text").and_then(|v| v.as_str()),
      NodeKind::Image(_)
      | NodeKind::CodeBlock(_)
      | NodeKind::BrowserRef(_)
      | NodeKind::Processor(_) => None,
    }
  }
}

/// A positioned node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasNode {
  pub id: NodeId,
  pub position: Point,
  #[serde(default)]
  pub size: Size,
  #[serde(flatten)]
  pub kind: NodeKind,
}

impl CanvasNode {
  pub fn new(id: impl Into<NodeId>, position: Point, size: Size, kind: NodeKind) -> Self {
    Self {
      id: id.into(),
      position,
      size,
      kind,
    }
  }

  pub fn is_processor(&self) -> bool {
    matches!(self.kind, NodeKind::Processor(_))
  }

  pub fn as_processor(&self) -> Option<&Processor> {
    match &self.kind {
      NodeKind::Processor(p) => Some(p),
      _ => None,
    }
  }

  /// Box from the node's own position and size; `None` if either is unusable.
  pub fn frame(&self) -> Option<Rect> {
    if self.position.is_finite() && self.size.is_positive() {
      Some(Rect::from_origin_size(self.position, self.size))
    } else {
      None
    }
  }
}
