//! Upstream resolution: connectors first, proximity as the fallback.

use tracing::{debug, info, instrument, warn};

use super::endpoint::terminates_at;
use super::extract::extract_payload;
use super::proximity::resolve_nearby;
use super::source::find_source;
use crate::types::{CanvasSnapshot, NodeId, Resolution, ResolveMode, ResolvedInput};

/// Resolves the inputs of `target` and reports which mode found them.
///
/// Connected mode walks every connector in snapshot order; any connector that ends at the
/// target and starts at a node with a payload contributes one input. If at least one does,
/// proximity is not consulted at all. Reads the snapshot only.
#[instrument(level = "trace", skip(snapshot), fields(target = %target_id))]
pub fn resolve(snapshot: &CanvasSnapshot, target_id: &NodeId) -> Resolution {
  let Some(target) = snapshot.node(target_id) else {
    warn!(target = %target_id, "target node not found");
    return Resolution::empty();
  };

  let mut inputs = Vec::new();
  for connector in &snapshot.connectors {
    if !terminates_at(snapshot, connector, target) {
      continue;
    }
    let Some(source_id) = find_source(snapshot, connector, target_id) else {
      continue;
    };
    let Some(source) = snapshot.node(&source_id) else {
      debug!(connector = %connector.id, source = %source_id, "bound source is not on the canvas");
      continue;
    };
    match extract_payload(snapshot, source) {
      Some(payload) => {
        info!(source = %source_id, kind = source.kind.name(), target = %target_id, "connected input");
        inputs.push(ResolvedInput {
          payload,
          source_node_id: source_id,
        });
      }
      None => warn!(source = %source_id, kind = source.kind.name(), "connected node produced no data"),
    }
  }

  if !inputs.is_empty() {
    return Resolution {
      mode: ResolveMode::Connected,
      inputs,
    };
  }

  debug!(target = %target_id, "no connected inputs; trying proximity");
  let nearby = resolve_nearby(snapshot, target);
  if nearby.is_empty() {
    Resolution::empty()
  } else {
    Resolution {
      mode: ResolveMode::Proximity,
      inputs: nearby,
    }
  }
}

/// Ordered inputs of `target`; empty when neither mode finds anything.
pub fn resolve_upstream(snapshot: &CanvasSnapshot, target_id: &NodeId) -> Vec<ResolvedInput> {
  resolve(snapshot, target_id).inputs
}
