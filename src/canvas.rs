//! The canvas collaborator: snapshot queries plus the few commands the engine issues.

use std::sync::RwLock;

use tracing::trace;

use crate::error::CanvasError;
use crate::types::{
  CanvasNode, CanvasSnapshot, Connector, ConnectorId, NodeId, NodeKind, ProcessorStatus,
};

/// Canvas document owned by the editor. The engine reads snapshots and issues commands; it
/// never holds node state across calls.
pub trait Canvas: Send + Sync {
  /// Consistent copy of the current page.
  fn snapshot(&self) -> CanvasSnapshot;

  fn get_node(&self, id: &NodeId) -> Option<CanvasNode> {
    self.snapshot().node(id).cloned()
  }

  fn create_node(&self, node: CanvasNode) -> Result<NodeId, CanvasError>;

  fn create_connector(&self, connector: Connector) -> Result<ConnectorId, CanvasError>;

  /// Sets the run status of a processor node.
  fn set_processor_status(&self, id: &NodeId, status: ProcessorStatus) -> Result<(), CanvasError>;
}

/// Canvas held in memory, for the CLI and tests.
#[derive(Debug, Default)]
pub struct InMemoryCanvas {
  state: RwLock<CanvasSnapshot>,
}

impl InMemoryCanvas {
  pub fn new(snapshot: CanvasSnapshot) -> Self {
    Self {
      state: RwLock::new(snapshot),
    }
  }

  /// Consumes the canvas and returns its final document.
  pub fn into_snapshot(self) -> Result<CanvasSnapshot, CanvasError> {
    self.state.into_inner().map_err(|_| CanvasError::Poisoned)
  }

  fn id_in_use(doc: &CanvasSnapshot, id: &str) -> bool {
    doc.nodes.iter().any(|n| n.id.as_str() == id)
      || doc.connectors.iter().any(|c| c.id.as_str() == id)
  }
}

impl Canvas for InMemoryCanvas {
  fn snapshot(&self) -> CanvasSnapshot {
    match self.state.read() {
      Ok(doc) => doc.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }

  fn create_node(&self, node: CanvasNode) -> Result<NodeId, CanvasError> {
    let mut doc = self.state.write().map_err(|_| CanvasError::Poisoned)?;
    if Self::id_in_use(&doc, node.id.as_str()) {
      return Err(CanvasError::DuplicateId(node.id.0));
    }
    trace!(node = %node.id, kind = node.kind.name(), "create node");
    let id = node.id.clone();
    doc.nodes.push(node);
    Ok(id)
  }

  fn create_connector(&self, connector: Connector) -> Result<ConnectorId, CanvasError> {
    let mut doc = self.state.write().map_err(|_| CanvasError::Poisoned)?;
    if Self::id_in_use(&doc, connector.id.as_str()) {
      return Err(CanvasError::DuplicateId(connector.id.0));
    }
    trace!(connector = %connector.id, "create connector");
    let id = connector.id.clone();
    doc.connectors.push(connector);
    Ok(id)
  }

  fn set_processor_status(&self, id: &NodeId, status: ProcessorStatus) -> Result<(), CanvasError> {
    let mut doc = self.state.write().map_err(|_| CanvasError::Poisoned)?;
    let node = doc
      .nodes
      .iter_mut()
      .find(|n| &n.id == id)
      .ok_or_else(|| CanvasError::NodeNotFound(id.clone()))?;
    match &mut node.kind {
      NodeKind::Processor(p) => {
        trace!(node = %id, from = %p.status, to = %status, "processor status");
        p.status = status;
        Ok(())
      }
      _ => Err(CanvasError::NotAProcessor(id.clone())),
    }
  }
}
