//! Run status of a processor node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Run status of a processor node: `idle -> running -> idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorStatus {
  #[default]
  Idle,
  Running,
}

impl fmt::Display for ProcessorStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProcessorStatus::Idle => write!(f, "idle"),
      ProcessorStatus::Running => write!(f, "running"),
    }
  }
}
