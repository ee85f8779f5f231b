//! Materializes a run's output as a result node wired to its processor.

use tracing::{info, instrument};

use crate::canvas::Canvas;
use crate::error::CanvasError;
use crate::types::{
  CanvasNode, Connector, ConnectorId, Endpoint, NodeId, NodeKind, Point, ResultCard, Size,
};

/// Horizontal gap between the processor's right edge and the result node.
pub const OUTPUT_GAP: f64 = 100.0;
/// Size of newly created result nodes.
pub const RESULT_SIZE: Size = Size { w: 300.0, h: 200.0 };

/// Result node and connector for `processor`, not yet on the canvas.
///
/// The result sits [OUTPUT_GAP] right of the processor on the same baseline. The connector runs
/// center to center with plain points (no bindings), like one drawn by hand.
pub fn plan_output(processor: &CanvasNode, text: impl Into<String>) -> (CanvasNode, Connector) {
  let result = CanvasNode::new(
    NodeId::fresh_result(),
    Point::new(
      processor.position.x + processor.size.w + OUTPUT_GAP,
      processor.position.y,
    ),
    RESULT_SIZE,
    NodeKind::ResultCard(ResultCard { text: text.into() }),
  );

  let origin = Point::new(
    processor.position.x + processor.size.w / 2.0,
    processor.position.y + processor.size.h / 2.0,
  );
  let result_center = Point::new(
    result.position.x + RESULT_SIZE.w / 2.0,
    result.position.y + RESULT_SIZE.h / 2.0,
  );
  let connector = Connector::new(
    ConnectorId::fresh(),
    origin,
    Endpoint::point(Point::new(0.0, 0.0)),
    Endpoint::point(Point::new(
      result_center.x - origin.x,
      result_center.y - origin.y,
    )),
  );
  (result, connector)
}

/// Creates the result node and its connector on `canvas`.
#[instrument(level = "trace", skip(canvas, processor, text), fields(processor = %processor.id))]
pub fn materialize(
  canvas: &dyn Canvas,
  processor: &CanvasNode,
  text: impl Into<String>,
) -> Result<(NodeId, ConnectorId), CanvasError> {
  let (result, connector) = plan_output(processor, text);
  let node_id = canvas.create_node(result)?;
  let connector_id = canvas.create_connector(connector)?;
  info!(processor = %processor.id, result = %node_id, connector = %connector_id, "output wired");
  Ok((node_id, connector_id))
}
