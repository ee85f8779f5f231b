//! # canvas-flow
//!
//! Spatial dataflow resolution for node-based canvases.
//!
//! A processor node on an infinite canvas runs a task over whatever its inputs are. Inputs are
//! never declared: they are reconstructed from geometry. Arrows whose head lands near the
//! processor contribute the node their tail starts from; with no such arrows, nodes lying
//! near the processor are used instead. The task goes to an inference backend and the answer
//! is written back as a result node wired to the processor.
//!
//! ## Architecture
//!
//! - [types]: canvas data model (nodes, connectors, assets, payloads)
//! - [resolve]: pure resolution over a [CanvasSnapshot](types::CanvasSnapshot)
//! - [inference]: backends behind [InferenceClient](inference::InferenceClient)
//! - [executor]: one processor run, start to finish
//! - [wiring]: result node placement and connector
//! - [canvas], [canvas_io]: the canvas collaborator and scene files
//!
//! Set RUST_LOG=canvas_flow=trace for span enter/exit on every resolution step.

pub mod canvas;
pub mod canvas_io;
#[cfg(test)]
mod canvas_io_test;
pub mod config;
pub mod error;
pub mod executor;
pub mod inference;
pub mod resolve;
pub mod result_text;
#[cfg(test)]
mod test_fixtures;
pub mod types;
pub mod wiring;

pub use canvas::{Canvas, InMemoryCanvas};
pub use config::{InferenceConfig, InferenceSettings};
pub use error::{CanvasError, ConfigError, InferenceError, SceneError};
pub use executor::TaskExecutor;
pub use inference::InferenceClient;
pub use resolve::resolve;
pub use types::{CanvasSnapshot, NodeId, Resolution, ResolveMode, RunOutcome, RunReport};
