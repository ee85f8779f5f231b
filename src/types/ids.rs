//! String identifiers for canvas shapes and assets.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(pub String);

    impl $name {
      pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
      }

      pub fn as_str(&self) -> &str {
        &self.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl From<&str> for $name {
      fn from(s: &str) -> Self {
        Self(s.to_string())
      }
    }

    impl From<String> for $name {
      fn from(s: String) -> Self {
        Self(s)
      }
    }
  };
}

string_id!(
  /// Id of a node (any non-connector shape).
  NodeId
);
string_id!(
  /// Id of a connector (arrow).
  ConnectorId
);
string_id!(
  /// Id of an asset referenced by an image node.
  AssetId
);

impl NodeId {
  /// Fresh id for a result node created by the engine.
  pub fn fresh_result() -> Self {
    Self(format!("result:{}", uuid::Uuid::new_v4()))
  }
}

impl ConnectorId {
  /// Fresh id for a connector created by the engine.
  pub fn fresh() -> Self {
    Self(format!("connector:{}", uuid::Uuid::new_v4()))
  }
}
