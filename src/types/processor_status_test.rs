//! Tests for `ProcessorStatus`.

use super::ProcessorStatus;

#[test]
fn display() {
  assert_eq!(ProcessorStatus::Idle.to_string(), "idle");
  assert_eq!(ProcessorStatus::Running.to_string(), "running");
}

#[test]
fn defaults_to_idle() {
  assert_eq!(ProcessorStatus::default(), ProcessorStatus::Idle);
}

#[test]
fn serde_lowercase() {
  assert_eq!(
    serde_json::to_string(&ProcessorStatus::Running).unwrap(),
    "\"running\""
  );
  let s: ProcessorStatus = serde_json::from_str("\"idle\"").unwrap();
  assert_eq!(s, ProcessorStatus::Idle);
}
