//! Record of one processor run, for the CLI and for debugging.

use serde::{Deserialize, Serialize};

use super::{ConnectorId, NodeId, ResolveMode};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
  /// Target missing or not a processor; nothing happened.
  Skipped,
  /// No text or image input found; inference was not called.
  NoInput,
  /// Inference answered; the answer is in the result node.
  Completed,
  /// Inference failed; the error text is in the result node.
  Failed,
}

/// One processor run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
  pub processor_id: NodeId,
  pub outcome: RunOutcome,
  /// Resolution mode (None when skipped).
  pub mode: Option<ResolveMode>,
  /// Source nodes that contributed input, in order.
  pub sources: Vec<NodeId>,
  pub result_node_id: Option<NodeId>,
  pub connector_id: Option<ConnectorId>,
  /// Text written into the result node.
  pub output: Option<String>,
  /// RFC 3339 timestamp when the run started.
  pub started_at: String,
  /// RFC 3339 timestamp when the run finished.
  pub finished_at: String,
}

impl RunReport {
  pub(crate) fn begin(processor_id: NodeId) -> Self {
    let now = chrono::Utc::now().to_rfc3339();
    Self {
      processor_id,
      outcome: RunOutcome::Skipped,
      mode: None,
      sources: vec![],
      result_node_id: None,
      connector_id: None,
      output: None,
      started_at: now.clone(),
      finished_at: now,
    }
  }

  pub(crate) fn finish(mut self, outcome: RunOutcome) -> Self {
    self.outcome = outcome;
    self.finished_at = chrono::Utc::now().to_rfc3339();
    self
  }

  /// True if a result node was written (success or error text).
  pub fn produced_output(&self) -> bool {
    self.result_node_id.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::{RunOutcome, RunReport};
  use crate::types::NodeId;

  #[test]
  fn begin_is_skipped_until_finished() {
    let r = RunReport::begin(NodeId::new("p"));
    assert_eq!(r.outcome, RunOutcome::Skipped);
    assert!(!r.produced_output());
    let r = r.finish(RunOutcome::NoInput);
    assert_eq!(r.outcome, RunOutcome::NoInput);
    assert!(chrono::DateTime::parse_from_rfc3339(&r.finished_at).is_ok());
  }

  #[test]
  fn serializes_outcome_snake_case() {
    let r = RunReport::begin(NodeId::new("p")).finish(RunOutcome::NoInput);
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["outcome"], "no_input");
    assert_eq!(v["processor_id"], "p");
  }
}
