//! Immutable view of the canvas taken once per resolution.

use serde::{Deserialize, Serialize};

use super::{Asset, AssetId, CanvasNode, Connector, NodeId, NodeKind, Rect};

/// Nodes, connectors and assets of one canvas page.
///
/// Vector order is insertion order and is the iteration order every tie-break relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
  #[serde(default)]
  pub nodes: Vec<CanvasNode>,
  #[serde(default)]
  pub connectors: Vec<Connector>,
  #[serde(default)]
  pub assets: Vec<Asset>,
}

impl CanvasSnapshot {
  pub fn node(&self, id: &NodeId) -> Option<&CanvasNode> {
    self.nodes.iter().find(|n| &n.id == id)
  }

  pub fn asset(&self, id: &AssetId) -> Option<&Asset> {
    self.assets.iter().find(|a| &a.id == id)
  }

  /// Page-space bounding box of `node`.
  ///
  /// Image nodes without a usable size take their asset's natural dimensions.
  pub fn bounding_box_of(&self, node: &CanvasNode) -> Option<Rect> {
    if let Some(frame) = node.frame() {
      return Some(frame);
    }
    match &node.kind {
      NodeKind::Image(img) if node.position.is_finite() => self
        .asset(&img.asset_id)
        .and_then(|a| a.natural_size())
        .map(|size| Rect::from_origin_size(node.position, size)),
      _ => None,
    }
  }

  pub fn bounding_box(&self, id: &NodeId) -> Option<Rect> {
    self.node(id).and_then(|n| self.bounding_box_of(n))
  }
}
