//! Fallback resolution for processors with no wiring: take what lies nearby.

use tracing::{debug, instrument};

use super::extract::extract_payload;
use crate::types::{CanvasNode, CanvasSnapshot, ResolvedInput};

/// Maximum distance between box origins for a node to count as nearby (exclusive).
pub const PROXIMITY_RADIUS: f64 = 300.0;

/// Payloads of every non-processor node whose box origin lies within [PROXIMITY_RADIUS] of the
/// target's box origin, in snapshot order. Nodes with no payload are skipped.
#[instrument(level = "trace", skip(snapshot, target), fields(target = %target.id))]
pub fn resolve_nearby(snapshot: &CanvasSnapshot, target: &CanvasNode) -> Vec<ResolvedInput> {
  let Some(target_box) = snapshot.bounding_box_of(target) else {
    debug!(target = %target.id, "target has no bounds; proximity skipped");
    return Vec::new();
  };
  let anchor = target_box.origin();

  snapshot
    .nodes
    .iter()
    .filter(|n| n.id != target.id && !n.is_processor())
    .filter_map(|node| {
      let origin = snapshot.bounding_box_of(node)?.origin();
      let distance = anchor.distance_to(origin);
      if distance >= PROXIMITY_RADIUS {
        return None;
      }
      let payload = extract_payload(snapshot, node)?;
      debug!(node = %node.id, kind = node.kind.name(), distance, "nearby input");
      Some(ResolvedInput {
        payload,
        source_node_id: node.id.clone(),
      })
    })
    .collect()
}
