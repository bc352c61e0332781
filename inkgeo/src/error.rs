//! Error types used by the crate.

use inkgeo_types::error::GeometryError;
use thiserror::Error;

/// Inkgeo error type.
///
/// Only setting up a conversion can fail. Problems with individual shapes are reported as
/// [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Debug, Error)]
pub enum InkGeoError {
    /// Invalid geometry, e.g. a degenerate reference envelope.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Reference shape does not contain any points to build the envelope from.
    #[error("reference shape has no points")]
    EmptyReference,
    /// A worker task was cancelled.
    #[error("conversion task failed: {0}")]
    Task(String),
    /// Error serializing output.
    #[cfg(feature = "geojson")]
    #[error("failed to serialize output")]
    Serialization(#[from] serde_json::Error),
}
