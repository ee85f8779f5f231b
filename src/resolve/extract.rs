//! Payload extraction: turn any node into text or image content, or nothing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use tracing::{instrument, trace, warn};

use crate::types::{
  BrowserRef, CanvasNode, CanvasSnapshot, CodeBlock, ImageNode, ImagePayload, NodeKind, Payload,
};

/// Mime type assumed when an asset does not declare one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Extracts the payload of `node`. `None` means the node contributes nothing; it is not an error.
#[instrument(level = "trace", skip(snapshot, node), fields(node = %node.id, kind = node.kind.name()))]
pub fn extract_payload(snapshot: &CanvasSnapshot, node: &CanvasNode) -> Option<Payload> {
  match &node.kind {
    NodeKind::Image(img) => extract_image(snapshot, node, img),
    NodeKind::BrowserRef(browser) => Some(Payload::text(browser_context(browser))),
    NodeKind::CodeBlock(code) => Some(Payload::text(code_context(code))),
    NodeKind::TextNote(_)
    | NodeKind::EmbeddedApp(_)
    | NodeKind::Processor(_)
    | NodeKind::ResultCard(_) => extract_text(&node.kind),
  }
}

fn extract_image(snapshot: &CanvasSnapshot, node: &CanvasNode, img: &ImageNode) -> Option<Payload> {
  let Some(asset) = snapshot.asset(&img.asset_id) else {
    warn!(node = %node.id, asset = %img.asset_id, "image asset missing");
    return None;
  };
  match STANDARD.decode(asset.base64_body().trim()) {
    Ok(bytes) => Some(Payload::Image(ImagePayload {
      bytes: Bytes::from(bytes),
      mime_type: asset
        .mime_type
        .clone()
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
      name: asset.name.clone().unwrap_or_default(),
    })),
    Err(e) => {
      warn!(node = %node.id, asset = %img.asset_id, error = %e, "image decode failed");
      None
    }
  }
}

pub(crate) fn browser_context(browser: &BrowserRef) -> String {
  format!("[Browser Context] URL: {}", browser.url)
}

/// Code plus the most recent output line, if any.
pub(crate) fn code_context(code: &CodeBlock) -> String {
  let mut content = format!("[Code Context]\nCode:\n{}", code.code);
  if let Some(last) = code.output.last() {
    content.push_str("\n\nLast Output: ");
    content.push_str(last);
  }
  content
}

/// Generic path: the text capability first, then the direct `text` field.
fn extract_text(kind: &NodeKind) -> Option<Payload> {
  if let Some(text) = kind
    .text_capability()
    .and_then(|c| c.displayable_text())
    .filter(|t| !t.trim().is_empty())
  {
    return Some(Payload::text(text));
  }
  match kind.text_field() {
    Some(text) if !text.trim().is_empty() => Some(Payload::text(text)),
    _ => {
      trace!(kind = kind.name(), "no text content");
      None
    }
  }
}
