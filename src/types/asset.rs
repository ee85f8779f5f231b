//! Binary assets referenced by image nodes.

use serde::{Deserialize, Serialize};

use super::{AssetId, Size};

/// Image asset. `src` is a data URL (`data:image/png;base64,...`) or bare base64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
  pub id: AssetId,
  pub src: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub width: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub height: Option<f64>,
}

impl Asset {
  /// Natural dimensions of the image, when known.
  pub fn natural_size(&self) -> Option<Size> {
    match (self.width, self.height) {
      (Some(w), Some(h)) => Some(Size::new(w, h)).filter(|s| s.is_positive()),
      _ => None,
    }
  }

  /// The base64 body of `src`: everything after the first comma, or all of it.
  pub fn base64_body(&self) -> &str {
    match self.src.split_once(',') {
      Some((_, body)) => body,
      None => &self.src,
    }
  }
}
