//! Shapes supplied by the drawing parser.

use inkgeo_types::cartesian::{Envelope, Point2d};
use inkgeo_types::impls::Ring;
use serde::{Deserialize, Serialize};

use crate::assemble::RingAssembler;
use crate::diagnostic::{Diagnostic, DiagnosticKind, Reported};
use crate::error::InkGeoError;
use crate::path::PathCommand;

/// Shape primitive in drawing coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Path of lines and cubic curves. Each subpath becomes a ring.
    Path(Vec<PathCommand>),
    /// Closed polygon given by its vertices.
    Polygon(Vec<Point2d>),
    /// Axis-aligned rectangle with the top-left corner at `(x, y)`.
    Rect {
        /// X of the top-left corner.
        x: f64,
        /// Y of the top-left corner.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
}

impl Shape {
    /// Converts the shape into rings in drawing coordinates.
    pub fn rings(&self, assembler: &RingAssembler) -> Reported<Vec<Ring<Point2d>>> {
        let points = match self {
            Shape::Path(commands) => return assembler.assemble(commands),
            Shape::Polygon(points) => points.clone(),
            Shape::Rect {
                x,
                y,
                width,
                height,
            } => vec![
                Point2d::new(*x, *y),
                Point2d::new(x + width, *y),
                Point2d::new(x + width, y + height),
                Point2d::new(*x, y + height),
            ],
        };

        match Ring::new(points) {
            Ok(ring) => Reported::clean(vec![ring]),
            Err(err) => Reported::new(
                vec![],
                vec![Diagnostic::new(
                    DiagnosticKind::DegenerateRing,
                    None,
                    err.to_string(),
                )],
            ),
        }
    }

    /// Bounding box of the shape's flattened, un-projected points.
    ///
    /// Used to calibrate the projection when this shape is the reference boundary of the drawing.
    pub fn envelope(&self, assembler: &RingAssembler) -> Result<Envelope, InkGeoError> {
        let rings = self.rings(assembler).value;
        let envelope = Envelope::from_points(rings.iter().flat_map(|r| r.points()))
            .ok_or(InkGeoError::EmptyReference)?;
        Ok(envelope.checked()?)
    }
}

/// Shape with the identifier of the group it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    /// Identifier of the output group.
    pub id: String,
    /// The shape.
    pub shape: Shape,
}

impl ShapeElement {
    /// Creates a new element.
    pub fn new(id: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            shape,
        }
    }
}
