//! Canvas data model: nodes, connectors, payloads and run records.
//!
//! These types are plain data; the resolution engine reads them through a
//! [CanvasSnapshot] and never mutates them.

mod asset;
mod canvas_node;
#[cfg(test)]
mod canvas_node_test;
mod canvas_snapshot;
mod connector;
#[cfg(test)]
mod connector_test;
mod geometry;
mod ids;
mod payload;
#[cfg(test)]
mod payload_test;
mod processor_status;
#[cfg(test)]
mod processor_status_test;
mod resolution;
mod run_report;
mod task;

pub use asset::Asset;
pub use canvas_node::{
  BrowserRef, CanvasNode, CodeBlock, EmbeddedApp, ImageNode, NodeKind, Processor, ResultCard,
  TextExtractable, TextNote,
};
pub use canvas_snapshot::CanvasSnapshot;
pub use connector::{Connector, Endpoint};
pub use geometry::{Point, Rect, Size};
pub use ids::{AssetId, ConnectorId, NodeId};
pub use payload::{ImagePayload, Payload, ResolvedInput};
pub use processor_status::ProcessorStatus;
pub use resolution::{Resolution, ResolveMode};
pub use run_report::{RunOutcome, RunReport};
pub use task::{TaskRequest, TaskResult};
