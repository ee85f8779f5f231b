//! Canvas-space geometry: points, sizes and axis-aligned boxes.

use serde::{Deserialize, Serialize};

/// A point in canvas (page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Euclidean distance to `other`.
  pub fn distance_to(&self, other: Point) -> f64 {
    (self.x - other.x).hypot(self.y - other.y)
  }

  pub fn offset_by(&self, delta: Point) -> Point {
    Point::new(self.x + delta.x, self.y + delta.y)
  }

  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite()
  }
}

/// Width and height of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
  pub w: f64,
  pub h: f64,
}

impl Size {
  pub fn new(w: f64, h: f64) -> Self {
    Self { w, h }
  }

  /// True when both dimensions are finite and strictly positive.
  pub fn is_positive(&self) -> bool {
    self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
  }
}

/// Axis-aligned bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

impl Rect {
  pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
    Self { x, y, w, h }
  }

  pub fn from_origin_size(origin: Point, size: Size) -> Self {
    Self::new(origin.x, origin.y, size.w, size.h)
  }

  pub fn origin(&self) -> Point {
    Point::new(self.x, self.y)
  }

  pub fn center(&self) -> Point {
    Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
  }

  /// Inclusive point-in-box test with the box grown by `buffer` on every side.
  pub fn contains_expanded(&self, p: Point, buffer: f64) -> bool {
    p.x >= self.x - buffer
      && p.x <= self.x + self.w + buffer
      && p.y >= self.y - buffer
      && p.y <= self.y + self.h + buffer
  }

  pub fn contains(&self, p: Point) -> bool {
    self.contains_expanded(p, 0.0)
  }
}
