//! Connectors (arrows) between nodes.

use serde::{Deserialize, Serialize};

use super::{ConnectorId, NodeId, Point};

/// One end of a connector: an offset from the connector origin, optionally bound to a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Endpoint {
  pub offset: Point,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub binding: Option<NodeId>,
}

impl Endpoint {
  pub fn point(offset: Point) -> Self {
    Self {
      offset,
      binding: None,
    }
  }

  pub fn bound(offset: Point, node: impl Into<NodeId>) -> Self {
    Self {
      offset,
      binding: Some(node.into()),
    }
  }
}

/// Directed arrow from `tail` to `head`. Endpoints are relative to `origin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
  pub id: ConnectorId,
  pub origin: Point,
  pub tail: Endpoint,
  pub head: Endpoint,
}

impl Connector {
  pub fn new(id: impl Into<ConnectorId>, origin: Point, tail: Endpoint, head: Endpoint) -> Self {
    Self {
      id: id.into(),
      origin,
      tail,
      head,
    }
  }

  /// Absolute canvas coordinate of the tail.
  pub fn tail_point(&self) -> Point {
    self.origin.offset_by(self.tail.offset)
  }

  /// Absolute canvas coordinate of the head.
  pub fn head_point(&self) -> Point {
    self.origin.offset_by(self.head.offset)
  }
}
