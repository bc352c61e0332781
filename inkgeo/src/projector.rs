//! Inverse projection of drawing coordinates into longitude and latitude.

use inkgeo_types::cartesian::{CartesianPoint2d, Envelope, Point2d};
use inkgeo_types::geo::{
    GeoPoint2d, Inversion, InversionStatus, Normalization, WinkelTripel, WINKEL_TRIPEL_ENVELOPE,
};
use inkgeo_types::impls::Ring;

use crate::diagnostic::{Diagnostic, DiagnosticKind, Reported};
use crate::error::InkGeoError;
use crate::options::ConversionOptions;

/// Maps drawing coordinates onto the globe.
///
/// The reference envelope of the drawing is stretched over the whole Winkel Tripel domain, and every point is then
/// inverted through the projection.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    normalization: Normalization<Point2d, Point2d>,
    projection: WinkelTripel<GeoPoint2d, Point2d>,
}

impl Projector {
    /// Creates a projector for a drawing with the given reference envelope.
    ///
    /// Fails if the envelope has zero width or height.
    pub fn new(reference: Envelope, options: &ConversionOptions) -> Result<Self, InkGeoError> {
        Ok(Self {
            normalization: Normalization::new(reference, WINKEL_TRIPEL_ENVELOPE)?,
            projection: WinkelTripel::new(
                options.projection_epsilon(),
                options.max_projection_iterations(),
            ),
        })
    }

    /// Reference envelope of the drawing.
    pub fn reference(&self) -> Envelope {
        self.normalization.source()
    }

    /// Maps a drawing point into the projection domain.
    pub fn normalize(&self, point: &impl CartesianPoint2d<Num = f64>) -> Point2d {
        let (x, y) = self.normalization.normalize(point.x(), point.y());
        Point2d::new(x, y)
    }

    /// Inverts a point of the projection domain into longitude and latitude.
    pub fn invert(&self, point: &Point2d) -> Inversion<GeoPoint2d> {
        self.projection.solve(point)
    }

    /// Projects every point of the ring. Problems of the solver are summarized in one diagnostic per kind.
    pub fn project_ring(&self, ring: &Ring<Point2d>) -> Reported<Ring<GeoPoint2d>> {
        let mut not_converged = 0usize;
        let mut singular = 0usize;

        let projected = ring.map_points(|point| {
            let inversion = self.invert(&self.normalize(point));
            match inversion.status {
                InversionStatus::NotConverged => not_converged += 1,
                InversionStatus::SingularJacobian { .. } => singular += 1,
                InversionStatus::Converged { .. } | InversionStatus::Origin => {}
            }
            inversion.point
        });

        let mut diagnostics = vec![];
        if not_converged > 0 {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::ProjectionNonConvergence,
                None,
                format!(
                    "{not_converged} of {} points did not converge after {} iterations",
                    ring.len(),
                    self.projection.max_iterations()
                ),
            ));
        }
        if singular > 0 {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::SingularJacobian,
                None,
                format!("{singular} of {} points hit a singular jacobian", ring.len()),
            ));
        }

        Reported::new(projected, diagnostics)
    }
}
