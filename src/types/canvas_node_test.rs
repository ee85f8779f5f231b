//! Tests for `CanvasNode` and `NodeKind`.

use super::{
  BrowserRef, CanvasNode, CodeBlock, EmbeddedApp, NodeKind, Point, Processor, ProcessorStatus,
  Rect, ResultCard, Size, TextNote,
};

fn note(text: &str) -> NodeKind {
  NodeKind::TextNote(TextNote {
    text: text.to_string(),
  })
}

#[test]
fn deserializes_kind_tag_inline() {
  let json = r#"{
    "id": "n1",
    "position": { "x": 0, "y": 0 },
    "size": { "w": 100, "h": 100 },
    "kind": "text-note",
    "text": "Hello"
  }"#;
  let node: CanvasNode = serde_json::from_str(json).unwrap();
  assert_eq!(node.id.as_str(), "n1");
  assert_eq!(node.kind, note("Hello"));
}

#[test]
fn result_kind_uses_result_tag() {
  let node = CanvasNode::new(
    "r",
    Point::new(0.0, 0.0),
    Size::new(300.0, 200.0),
    NodeKind::ResultCard(ResultCard {
      text: "out".to_string(),
    }),
  );
  let v = serde_json::to_value(&node).unwrap();
  assert_eq!(v["kind"], "result");
  assert_eq!(v["text"], "out");
}

#[test]
fn processor_status_defaults_to_idle() {
  let json = r#"{"id":"p","position":{"x":0,"y":0},"size":{"w":1,"h":1},"kind":"processor","task":"sum"}"#;
  let node: CanvasNode = serde_json::from_str(json).unwrap();
  let p = node.as_processor().unwrap();
  assert_eq!(p.task, "sum");
  assert_eq!(p.status, ProcessorStatus::Idle);
  assert!(node.is_processor());
}

#[test]
fn text_capability_only_on_notes_and_results() {
  assert!(note("x").text_capability().is_some());
  assert!(
    NodeKind::ResultCard(ResultCard {
      text: "y".to_string()
    })
    .text_capability()
    .is_some()
  );
  assert!(
    NodeKind::BrowserRef(BrowserRef {
      url: "https://a".to_string()
    })
    .text_capability()
    .is_none()
  );
  assert!(
    NodeKind::CodeBlock(CodeBlock {
      code: "1".to_string(),
      output: vec![]
    })
    .text_capability()
    .is_none()
  );
}

#[test]
fn embedded_app_text_field_reads_props() {
  let mut props = serde_json::Map::new();
  props.insert("text".to_string(), serde_json::json!("42 degrees"));
  let kind = NodeKind::EmbeddedApp(EmbeddedApp {
    app: "weather".to_string(),
    props,
  });
  assert_eq!(kind.text_field(), Some("42 degrees"));
  assert!(kind.text_capability().is_none());
}

#[test]
fn embedded_app_non_string_text_is_ignored() {
  let mut props = serde_json::Map::new();
  props.insert("text".to_string(), serde_json::json!(7));
  let kind = NodeKind::EmbeddedApp(EmbeddedApp {
    app: "counter".to_string(),
    props,
  });
  assert_eq!(kind.text_field(), None);
}

#[test]
fn frame_requires_positive_size() {
  let n = CanvasNode::new("a", Point::new(5.0, 6.0), Size::new(10.0, 20.0), note(""));
  assert_eq!(n.frame(), Some(Rect::new(5.0, 6.0, 10.0, 20.0)));
  let zero = CanvasNode::new("b", Point::new(5.0, 6.0), Size::default(), note(""));
  assert_eq!(zero.frame(), None);
}

#[test]
fn kind_names() {
  let p = NodeKind::Processor(Processor {
    task: String::new(),
    status: ProcessorStatus::Idle,
  });
  assert_eq!(p.name(), "processor");
  assert_eq!(note("").name(), "text-note");
}
