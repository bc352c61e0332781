//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// A ring needs at least two resolved points to be closed.
    #[error("ring has {points} resolved points, at least 2 are required")]
    DegenerateRing {
        /// Number of points the ring was constructed with.
        points: usize,
    },
    /// Envelope has zero width or zero height and cannot be used for normalization.
    #[error("envelope has zero width or height")]
    DegenerateEnvelope,
}
