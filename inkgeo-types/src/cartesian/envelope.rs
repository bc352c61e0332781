use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::error::GeometryError;

/// Axis-aligned bounding box.
///
/// Envelopes are used to calibrate normalization of drawing coordinates (see
/// [`Normalization`](crate::geo::Normalization)) and are never changed after creation: all methods return new values.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub(crate) x_min: f64,
    pub(crate) x_max: f64,
    pub(crate) y_min: f64,
    pub(crate) y_max: f64,
}

impl Envelope {
    /// Creates a new envelope. Bounds are reordered if given in the wrong order.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min: x_min.min(x_max),
            x_max: x_max.max(x_min),
            y_min: y_min.min(y_max),
            y_max: y_max.max(y_min),
        }
    }

    /// Returns the envelope if it has non-zero finite width and height, or an error otherwise.
    pub fn checked(self) -> Result<Self, GeometryError> {
        let valid = self.width().is_finite()
            && self.height().is_finite()
            && self.width() > 0.0
            && self.height() > 0.0;
        if valid {
            Ok(self)
        } else {
            Err(GeometryError::DegenerateEnvelope)
        }
    }

    /// Minimum X.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Maximum X.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Minimum Y.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Maximum Y.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Width of the envelope.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the envelope.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Smallest envelope containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Envelope of a single point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = f64>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Envelope of all the points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = f64> + 'a>(
        points: impl IntoIterator<Item = &'a P>,
    ) -> Option<Self> {
        points
            .into_iter()
            .map(Self::from_point)
            .reduce(|acc, e| acc.merge(e))
    }

    /// Returns true if the point is inside the envelope or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Returns true if `other` lies completely inside `self`.
    pub fn covers(&self, other: &Envelope) -> bool {
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    /// Returns true if the envelopes share at least one point.
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;
    use assert_matches::assert_matches;

    #[test]
    fn from_points() {
        let points = [
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ];
        let envelope = Envelope::from_points(&points).unwrap();
        assert_eq!(envelope, Envelope::new(-2.0, 4.0, -1.0, 5.0));
        assert_eq!(envelope.width(), 6.0);
        assert_eq!(envelope.height(), 6.0);

        assert!(Envelope::from_points::<Point2>(&[]).is_none());
    }

    #[test]
    fn checked_rejects_flat_envelopes() {
        assert!(Envelope::new(0.0, 1.0, 0.0, 1.0).checked().is_ok());
        assert_matches!(
            Envelope::new(0.0, 0.0, 0.0, 1.0).checked(),
            Err(GeometryError::DegenerateEnvelope)
        );
        assert_matches!(
            Envelope::new(0.0, 1.0, 2.0, 2.0).checked(),
            Err(GeometryError::DegenerateEnvelope)
        );
    }

    #[test]
    fn covers_and_intersects() {
        let outer = Envelope::new(0.0, 10.0, 0.0, 10.0);
        let inner = Envelope::new(2.0, 8.0, 2.0, 8.0);
        let apart = Envelope::new(11.0, 12.0, 0.0, 1.0);

        assert!(outer.covers(&inner));
        assert!(!inner.covers(&outer));
        assert!(outer.intersects(&inner));
        assert!(!outer.intersects(&apart));
        assert!(outer.contains(&Point2::new(10.0, 0.0)));
    }
}
