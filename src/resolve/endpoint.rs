//! Does a connector's head land on the target node?

use tracing::trace;

use crate::types::{CanvasNode, CanvasSnapshot, Connector};

/// Slack around the target box for heads that were dropped close to, but not on, the node.
pub const HEAD_HIT_BUFFER: f64 = 100.0;

/// True if `connector` terminates at `target`.
///
/// An explicit head binding to the target wins. Otherwise the absolute head point must lie
/// inside the target's box grown by [HEAD_HIT_BUFFER]. A target without a box never matches
/// geometrically.
pub fn terminates_at(snapshot: &CanvasSnapshot, connector: &Connector, target: &CanvasNode) -> bool {
  if connector.head.binding.as_ref() == Some(&target.id) {
    trace!(connector = %connector.id, target = %target.id, "head bound to target");
    return true;
  }
  let Some(bounds) = snapshot.bounding_box_of(target) else {
    return false;
  };
  let head = connector.head_point();
  let hit = bounds.contains_expanded(head, HEAD_HIT_BUFFER);
  trace!(connector = %connector.id, target = %target.id, x = head.x, y = head.y, hit, "head geometry check");
  hit
}
