//! Runs a processor: resolve inputs, call inference, write the result back to the canvas.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::canvas::Canvas;
use crate::inference::InferenceClient;
use crate::resolve;
use crate::result_text::{error_text, interpret_result};
use crate::types::{
  CanvasNode, CanvasSnapshot, NodeId, ProcessorStatus, RunOutcome, RunReport, TaskRequest,
};
use crate::wiring;

/// Executes processor nodes against a canvas and an inference backend.
///
/// Holds no per-run state, so runs on different processors may proceed concurrently.
#[derive(Clone)]
pub struct TaskExecutor {
  canvas: Arc<dyn Canvas>,
  inference: Arc<dyn InferenceClient>,
}

impl TaskExecutor {
  pub fn new(canvas: Arc<dyn Canvas>, inference: Arc<dyn InferenceClient>) -> Self {
    Self { canvas, inference }
  }

  /// Runs the processor `processor_id`. Never fails: every outcome is a status change, a
  /// result node (possibly carrying error text), or both, and is summarized in the report.
  #[instrument(level = "trace", skip(self))]
  pub async fn run(&self, processor_id: &NodeId) -> RunReport {
    let report = RunReport::begin(processor_id.clone());
    let snapshot = self.canvas.snapshot();
    let Some(processor) = snapshot.node(processor_id).filter(|n| n.is_processor()) else {
      warn!(node = %processor_id, "not a processor node; nothing to run");
      return report.finish(RunOutcome::Skipped);
    };

    info!(node = %processor_id, backend = self.inference.name(), "run triggered");
    self.set_status(processor_id, ProcessorStatus::Running);
    let report = self.run_resolved(&snapshot, processor, report).await;
    self.set_status(processor_id, ProcessorStatus::Idle);
    report
  }

  async fn run_resolved(
    &self,
    snapshot: &CanvasSnapshot,
    processor: &CanvasNode,
    mut report: RunReport,
  ) -> RunReport {
    let task = processor
      .as_processor()
      .map(|p| p.task.clone())
      .unwrap_or_default();

    let resolution = resolve::resolve(snapshot, &processor.id);
    report.mode = Some(resolution.mode);
    report.sources = resolution
      .inputs
      .iter()
      .map(|i| i.source_node_id.clone())
      .collect();

    let request = TaskRequest::new(task, &resolution.inputs);
    if !request.has_content() {
      warn!(node = %processor.id, "no content found (neither connected nor nearby)");
      return report.finish(RunOutcome::NoInput);
    }
    info!(
      node = %processor.id,
      mode = ?resolution.mode,
      text_chars = request.combined_text().len(),
      images = request.image_inputs.len(),
      "running task"
    );

    let (output, outcome) = match self.inference.infer(&request).await {
      Ok(result) => (interpret_result(&result.text), RunOutcome::Completed),
      Err(e) => {
        error!(node = %processor.id, error = %e, "inference failed");
        (error_text(&e.to_string()), RunOutcome::Failed)
      }
    };

    match wiring::materialize(self.canvas.as_ref(), processor, output.clone()) {
      Ok((node_id, connector_id)) => {
        report.result_node_id = Some(node_id);
        report.connector_id = Some(connector_id);
      }
      Err(e) => error!(node = %processor.id, error = %e, "could not write result to canvas"),
    }
    report.output = Some(output);
    report.finish(outcome)
  }

  fn set_status(&self, id: &NodeId, status: ProcessorStatus) {
    if let Err(e) = self.canvas.set_processor_status(id, status) {
      warn!(node = %id, %status, error = %e, "status update failed");
    }
  }
}
