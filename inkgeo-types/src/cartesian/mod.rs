//! Geometric primitives in 2d cartesian coordinates.

mod envelope;
mod orient;
mod point;

pub use envelope::Envelope;
pub use orient::{Orientation, Winding};
pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point2, Point2d, Vector2};
