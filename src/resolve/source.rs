//! Which node does a connector start from?

use tracing::{debug, trace};

use crate::types::{CanvasSnapshot, Connector, NodeId};

/// Magnet tolerance around candidate boxes for unbound tails.
pub const TAIL_MAGNET_BUFFER: f64 = 300.0;

/// Finds the source node of `connector`, never returning `target`.
///
/// An explicit tail binding is returned as-is. Otherwise every node whose box, grown by
/// [TAIL_MAGNET_BUFFER], contains the tail point is a candidate, and the one whose box center is
/// nearest to the tail wins. Exact ties keep the first candidate in snapshot order.
pub fn find_source(
  snapshot: &CanvasSnapshot,
  connector: &Connector,
  target: &NodeId,
) -> Option<NodeId> {
  if let Some(bound) = &connector.tail.binding {
    trace!(connector = %connector.id, source = %bound, "tail bound");
    return Some(bound.clone());
  }

  let tail = connector.tail_point();
  let mut closest: Option<(&NodeId, f64)> = None;
  for node in snapshot.nodes.iter().filter(|n| &n.id != target) {
    let Some(bounds) = snapshot.bounding_box_of(node) else {
      continue;
    };
    if !bounds.contains_expanded(tail, TAIL_MAGNET_BUFFER) {
      continue;
    }
    let dist = bounds.center().distance_to(tail);
    if closest.is_none_or(|(_, best)| dist < best) {
      closest = Some((&node.id, dist));
    }
  }

  match closest {
    Some((id, dist)) => {
      debug!(connector = %connector.id, source = %id, distance = dist, "tail attracted");
      Some(id.clone())
    }
    None => {
      debug!(connector = %connector.id, x = tail.x, y = tail.y, "tail matched no node");
      None
    }
  }
}
