//! Tests for `Connector`.

use super::{Connector, Endpoint, Point};

#[test]
fn endpoints_are_relative_to_origin() {
  let c = Connector::new(
    "c1",
    Point::new(100.0, 50.0),
    Endpoint::point(Point::new(0.0, 0.0)),
    Endpoint::point(Point::new(200.0, -10.0)),
  );
  assert_eq!(c.tail_point(), Point::new(100.0, 50.0));
  assert_eq!(c.head_point(), Point::new(300.0, 40.0));
}

#[test]
fn binding_is_optional_in_json() {
  let json = r#"{
    "id": "c1",
    "origin": { "x": 0, "y": 0 },
    "tail": { "offset": { "x": 0, "y": 0 }, "binding": "n1" },
    "head": { "offset": { "x": 10, "y": 0 } }
  }"#;
  let c: Connector = serde_json::from_str(json).unwrap();
  assert_eq!(c.tail.binding.as_ref().map(|b| b.as_str()), Some("n1"));
  assert!(c.head.binding.is_none());
}

#[test]
fn unbound_endpoint_omits_binding_when_serialized() {
  let v = serde_json::to_value(Endpoint::point(Point::new(1.0, 2.0))).unwrap();
  assert!(v.get("binding").is_none());
  let bound = serde_json::to_value(Endpoint::bound(Point::default(), "n2")).unwrap();
  assert_eq!(bound["binding"], "n2");
}
