//! Shape builders shared by unit tests.

use crate::types::{
  Asset, AssetId, BrowserRef, CanvasNode, CodeBlock, Connector, Endpoint, ImageNode, NodeKind,
  Point, Processor, ProcessorStatus, ResultCard, Size, TextNote,
};

pub(crate) fn note(id: &str, x: f64, y: f64, text: &str) -> CanvasNode {
  CanvasNode::new(
    id,
    Point::new(x, y),
    Size::new(100.0, 100.0),
    NodeKind::TextNote(TextNote {
      text: text.to_string(),
    }),
  )
}

pub(crate) fn sized_note(id: &str, x: f64, y: f64, w: f64, h: f64, text: &str) -> CanvasNode {
  CanvasNode::new(
    id,
    Point::new(x, y),
    Size::new(w, h),
    NodeKind::TextNote(TextNote {
      text: text.to_string(),
    }),
  )
}

pub(crate) fn processor(id: &str, x: f64, y: f64, task: &str) -> CanvasNode {
  CanvasNode::new(
    id,
    Point::new(x, y),
    Size::new(200.0, 150.0),
    NodeKind::Processor(Processor {
      task: task.to_string(),
      status: ProcessorStatus::Idle,
    }),
  )
}

pub(crate) fn result_card(id: &str, x: f64, y: f64, text: &str) -> CanvasNode {
  CanvasNode::new(
    id,
    Point::new(x, y),
    Size::new(300.0, 200.0),
    NodeKind::ResultCard(ResultCard {
      text: text.to_string(),
    }),
  )
}

pub(crate) fn browser(id: &str, x: f64, y: f64, url: &str) -> CanvasNode {
  CanvasNode::new(
    id,
    Point::new(x, y),
    Size::new(400.0, 300.0),
    NodeKind::BrowserRef(BrowserRef {
      url: url.to_string(),
    }),
  )
}

pub(crate) fn code_block(id: &str, code: &str, output: &[&str]) -> CanvasNode {
  CanvasNode::new(
    id,
    Point::new(0.0, 0.0),
    Size::new(300.0, 200.0),
    NodeKind::CodeBlock(CodeBlock {
      code: code.to_string(),
      output: output.iter().map(|s| s.to_string()).collect(),
    }),
  )
}

pub(crate) fn image(id: &str, x: f64, y: f64, asset_id: &str) -> CanvasNode {
  CanvasNode::new(
    id,
    Point::new(x, y),
    Size::new(100.0, 100.0),
    NodeKind::Image(ImageNode {
      asset_id: AssetId::new(asset_id),
    }),
  )
}

/// 1x1 PNG header bytes, base64-encoded, as a data URL.
pub(crate) fn png_asset(id: &str) -> Asset {
  Asset {
    id: AssetId::new(id),
    src: "data:image/png;base64,iVBORw0KGgo=".to_string(),
    mime_type: Some("image/png".to_string()),
    name: Some(format!("{id}.png")),
    width: Some(1.0),
    height: Some(1.0),
  }
}

/// Connector with absolute tail and head points and no bindings.
pub(crate) fn arrow(id: &str, tail: (f64, f64), head: (f64, f64)) -> Connector {
  let origin = Point::new(tail.0, tail.1);
  Connector::new(
    id,
    origin,
    Endpoint::point(Point::new(0.0, 0.0)),
    Endpoint::point(Point::new(head.0 - tail.0, head.1 - tail.1)),
  )
}

/// Connector bound at both ends; geometry deliberately far from both nodes.
pub(crate) fn bound_arrow(id: &str, from: &str, to: &str) -> Connector {
  Connector::new(
    id,
    Point::new(-50_000.0, -50_000.0),
    Endpoint::bound(Point::new(0.0, 0.0), from),
    Endpoint::bound(Point::new(10.0, 0.0), to),
  )
}
