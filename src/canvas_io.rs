//! Scene documents on disk (JSON).

use std::path::Path;

use tracing::instrument;

use crate::error::SceneError;
use crate::types::CanvasSnapshot;

/// Loads a scene from `path`. Fails if the file is missing or not a valid scene.
#[instrument(level = "trace", skip(path))]
pub fn load_snapshot(path: &Path) -> Result<CanvasSnapshot, SceneError> {
  let bytes = std::fs::read(path)?;
  Ok(serde_json::from_slice(&bytes)?)
}

/// Writes `snapshot` to `path` as pretty JSON, creating parent directories.
#[instrument(level = "trace", skip(path, snapshot))]
pub fn write_snapshot(path: &Path, snapshot: &CanvasSnapshot) -> Result<(), SceneError> {
  let json = serde_json::to_string_pretty(snapshot)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)?;
  Ok(())
}
