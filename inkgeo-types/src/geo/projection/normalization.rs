use std::marker::PhantomData;

use crate::cartesian::{Envelope, NewCartesianPoint2d};
use crate::error::GeometryError;
use crate::geo::projection::Projection;

/// Affine rescale of a source envelope onto a target envelope, flipping the Y axis.
///
/// Drawing coordinates grow downwards, so the Y axis is negated after rescaling: the top edge of the source
/// envelope lands on the upper edge of the target.
#[derive(Debug, Clone, Copy)]
pub struct Normalization<In, Out> {
    source: Envelope,
    target: Envelope,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Normalization<In, Out> {
    /// Creates a new normalization. Both envelopes must have positive, finite width and height.
    pub fn new(source: Envelope, target: Envelope) -> Result<Self, GeometryError> {
        Ok(Self {
            source: source.checked()?,
            target: target.checked()?,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        })
    }

    /// Source envelope.
    pub fn source(&self) -> Envelope {
        self.source
    }

    /// Target envelope.
    pub fn target(&self) -> Envelope {
        self.target
    }

    /// Maps `(x, y)` from the source into the target domain.
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        let s = &self.source;
        let t = &self.target;
        let nx = t.x_min() + (x - s.x_min()) / s.width() * t.width();
        let ny = -(t.y_min() + (y - s.y_min()) / s.height() * t.height());
        (nx, ny)
    }

    /// Inverse of [`Normalization::normalize`].
    pub fn denormalize(&self, x: f64, y: f64) -> (f64, f64) {
        let s = &self.source;
        let t = &self.target;
        let sx = s.x_min() + (x - t.x_min()) / t.width() * s.width();
        let sy = s.y_min() + (-y - t.y_min()) / t.height() * s.height();
        (sx, sy)
    }
}

impl<In, Out> Projection for Normalization<In, Out>
where
    In: NewCartesianPoint2d<f64>,
    Out: NewCartesianPoint2d<f64>,
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &In) -> Option<Out> {
        let (x, y) = self.normalize(input.x(), input.y());
        (x.is_finite() && y.is_finite()).then(|| Out::new(x, y))
    }

    fn unproject(&self, input: &Out) -> Option<In> {
        let (x, y) = self.denormalize(input.x(), input.y());
        (x.is_finite() && y.is_finite()).then(|| In::new(x, y))
    }
}
