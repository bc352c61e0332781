//! Projections between drawing space, the canonical projection domain and geographic coordinates.

mod normalization;
mod winkel_tripel;

pub use normalization::Normalization;
pub use winkel_tripel::{Inversion, InversionStatus, WinkelTripel, WINKEL_TRIPEL_ENVELOPE};

/// Projection converts points from one coordinate system into another.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Projects a point. Returns `None` if the point cannot be projected.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Inverse of [`Projection::project`]. Returns `None` if the point cannot be unprojected.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
