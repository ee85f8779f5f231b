//! Tests for `Payload`.

use bytes::Bytes;

use super::{ImagePayload, NodeId, Payload, ResolvedInput};

#[test]
fn text_accessors() {
  let p = Payload::text("hi");
  assert_eq!(p.as_text(), Some("hi"));
  assert!(p.as_image().is_none());
}

#[test]
fn image_accessors() {
  let p = Payload::Image(ImagePayload {
    bytes: Bytes::from_static(b"\x89PNG"),
    mime_type: "image/png".to_string(),
    name: "dot.png".to_string(),
  });
  assert!(p.as_text().is_none());
  assert_eq!(p.as_image().unwrap().mime_type, "image/png");
}

#[test]
fn resolved_input_serializes_kind_tag() {
  let input = ResolvedInput {
    payload: Payload::text("Hello"),
    source_node_id: NodeId::new("n1"),
  };
  let v = serde_json::to_value(&input).unwrap();
  assert_eq!(v["payload"]["kind"], "text");
  assert_eq!(v["payload"]["text"], "Hello");
  assert_eq!(v["source_node_id"], "n1");
}
