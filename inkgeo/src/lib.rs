//! Inkgeo converts vector line-art into geographic polygons. Closed outlines drawn in a local coordinate space (paths
//! of lines and cubic curves, polygons, rectangles) become nested polygons in longitude and latitude.
//!
//! # Quick start
//!
//! ```
//! use inkgeo::{ConversionOptions, Converter, PathCommand, Shape, ShapeElement};
//!
//! // the drawing sheet is stretched over the whole globe
//! let sheet = Shape::Rect { x: 0.0, y: 0.0, width: 1000.0, height: 500.0 };
//! let converter = Converter::new(&sheet, ConversionOptions::default()).unwrap();
//!
//! let island = ShapeElement::new(
//!     "island",
//!     Shape::Path(vec![
//!         PathCommand::move_to(400.0, 200.0),
//!         PathCommand::cubic_to((450.0, 150.0), (550.0, 150.0), (600.0, 200.0)),
//!         PathCommand::line_to(600.0, 300.0),
//!         PathCommand::line_to(400.0, 300.0),
//!         PathCommand::close(),
//!     ]),
//! );
//!
//! let rings = converter.project_element(&island).value;
//! let geometry = converter.convert_group("island", rings).value.unwrap();
//! assert_eq!(geometry.polygons().count(), 1);
//! ```
//!
//! # Pipeline
//!
//! Every [`ShapeElement`] goes through the following steps:
//!
//! * [`RingAssembler`](assemble::RingAssembler) resolves path commands into closed rings, replacing curves with
//!   polylines ([`flatten`]).
//! * [`Projector`](projector::Projector) stretches the reference bounding box over the Winkel Tripel domain and inverts
//!   the projection for every point.
//!
//! Rings of elements sharing the same identifier are then processed together by [`Converter::convert_group`]:
//!
//! * [`ContainmentForest`](topology::ContainmentForest) nests the rings into shells, holes and islands,
//! * [`repair`](topology::repair) rebuilds polygons that are not simple,
//! * the polygons of the group are merged into one geometry.
//!
//! [`Converter::convert`] runs the whole pipeline for a batch of elements on the tokio blocking thread pool.
//!
//! Nothing in the pipeline fails because of a single bad shape: problems are returned as [`Diagnostic`]s alongside
//! the best-effort result, and are logged through the `log` facade.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod assemble;
pub mod converter;
pub mod diagnostic;
pub mod error;
#[cfg(feature = "geojson")]
mod feature;
pub mod flatten;
mod options;
pub mod path;
pub mod projector;
pub mod shape;
pub mod topology;

pub use converter::{Conversion, Converter, NamedGeometry};
pub use diagnostic::{Diagnostic, DiagnosticKind, Reported};
pub use error::InkGeoError;
pub use options::ConversionOptions;
pub use path::{PathCommand, PathOp, PathPoint};
pub use shape::{Shape, ShapeElement};

// Reexport inkgeo_types
pub use inkgeo_types;
