//! Spatial dataflow resolution.
//!
//! Reconstructs a processor's inputs from canvas geometry:
//!
//! - [extract]: node → text/image payload
//! - [endpoint]: does a connector head land on the target?
//! - [source]: which node does the connector tail start from?
//! - [upstream]: connected mode over all connectors, falling back to [proximity]
//!
//! Everything here is a pure function of a [CanvasSnapshot](crate::types::CanvasSnapshot).
//! The buffer constants are part of the behaviour, not tuning knobs.

pub mod endpoint;
pub mod extract;
pub mod proximity;
pub mod source;
pub mod upstream;

pub use endpoint::{HEAD_HIT_BUFFER, terminates_at};
pub use extract::extract_payload;
pub use proximity::{PROXIMITY_RADIUS, resolve_nearby};
pub use source::{TAIL_MAGNET_BUFFER, find_source};
pub use upstream::{resolve, resolve_upstream};
