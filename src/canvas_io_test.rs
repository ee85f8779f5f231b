//! Tests for scene load/write.

use crate::canvas_io::{load_snapshot, write_snapshot};
use crate::error::SceneError;
use crate::test_fixtures::{arrow, note, processor};
use crate::types::CanvasSnapshot;

#[test]
fn written_scene_loads_back() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join("scene.json");
  let doc = CanvasSnapshot {
    nodes: vec![note("a", 0.0, 0.0, "hello"), processor("p", 500.0, 0.0, "sum")],
    connectors: vec![arrow("c", (50.0, 50.0), (510.0, 20.0))],
    assets: vec![],
  };
  write_snapshot(&path, &doc).unwrap();
  assert!(path.exists());
  assert_eq!(load_snapshot(&path).unwrap(), doc);
}

#[test]
fn load_missing_file_is_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let r = load_snapshot(&dir.path().join("nonexistent.json"));
  assert!(matches!(r, Err(SceneError::Io(_))));
}

#[test]
fn load_invalid_json_is_json_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("bad.json");
  std::fs::write(&path, "{ not json").unwrap();
  assert!(matches!(load_snapshot(&path), Err(SceneError::Json(_))));
}

#[test]
fn sections_default_to_empty() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("empty.json");
  std::fs::write(&path, "{}").unwrap();
  assert_eq!(load_snapshot(&path).unwrap(), CanvasSnapshot::default());
}
