//! Outcome of resolving a processor's upstream inputs.

use serde::{Deserialize, Serialize};

use super::ResolvedInput;

/// Which strategy produced the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
  /// At least one connector delivered a payload.
  Connected,
  /// No connector did; inputs come from nearby nodes.
  Proximity,
  /// Neither strategy found anything.
  Empty,
}

/// Ordered inputs plus the mode that found them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
  pub mode: ResolveMode,
  pub inputs: Vec<ResolvedInput>,
}

impl Resolution {
  pub fn empty() -> Self {
    Self {
      mode: ResolveMode::Empty,
      inputs: Vec::new(),
    }
  }
}
