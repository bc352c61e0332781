use serde::{Deserialize, Deserializer, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::error::GeometryError;

/// Closed sequence of points with the first point repeated at the end.
///
/// A ring always has at least two points and its last point is always equal to the first one. Construct it with
/// [`Ring::new`], which appends a copy of the first point when the sequence is not closed yet. Deserialization goes
/// through [`Ring::new`] too.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring<P> {
    points: Vec<P>,
}

impl<P: CartesianPoint2d + Clone> Ring<P> {
    /// Creates a new ring, closing the point sequence if needed.
    ///
    /// Fails with [`GeometryError::DegenerateRing`] if fewer than 2 points are given.
    pub fn new(mut points: Vec<P>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::DegenerateRing {
                points: points.len(),
            });
        }

        let first = &points[0];
        let last = &points[points.len() - 1];
        if !(first.x() == last.x() && first.y() == last.y()) {
            points.push(first.clone());
        }

        Ok(Self { points })
    }
}

impl<'de, P> Deserialize<'de> for Ring<P>
where
    P: Deserialize<'de> + CartesianPoint2d + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawRing<P> {
            points: Vec<P>,
        }

        let raw = RawRing::deserialize(deserializer)?;
        Ring::new(raw.points).map_err(serde::de::Error::custom)
    }
}

impl<P> Ring<P> {
    /// All points of the ring including the closing one.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Number of points including the closing one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points. Never the case for rings created with [`Ring::new`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Creates a new ring by transforming every point with `f`. The ring stays closed since equal inputs are mapped to
    /// equal outputs.
    pub fn map_points<Q>(&self, f: impl FnMut(&P) -> Q) -> Ring<Q> {
        Ring {
            points: self.points.iter().map(f).collect(),
        }
    }

    /// Returns a copy of the ring with the points in reverse order.
    pub fn reversed(&self) -> Ring<P>
    where
        P: Clone,
    {
        Ring {
            points: self.points.iter().rev().cloned().collect(),
        }
    }
}

impl<P> crate::contour::Contour for Ring<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points[..self.points.len() - 1].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2, Winding};
    use crate::contour::{CartesianContour, Contour};
    use crate::segment::Segment;
    use assert_matches::assert_matches;

    fn square() -> Ring<Point2> {
        Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn new_closes_the_ring() {
        let ring = square();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.points()[0], ring.points()[4]);

        let closed = Ring::new(ring.points().to_vec()).unwrap();
        assert_eq!(closed.len(), 5);
    }

    #[test]
    fn new_rejects_degenerate_input() {
        assert_matches!(
            Ring::<Point2>::new(vec![]),
            Err(GeometryError::DegenerateRing { points: 0 })
        );
        assert_matches!(
            Ring::new(vec![Point2::new(1.0, 1.0)]),
            Err(GeometryError::DegenerateRing { points: 1 })
        );
        assert!(Ring::new(vec![Point2::new(1.0, 1.0), Point2::new(2.0, 1.0)]).is_ok());
    }

    #[test]
    fn iter_points_closing() {
        let ring = square();
        assert_eq!(ring.iter_points().count(), 4);
        assert_eq!(ring.iter_points_closing().count(), 5);
        assert_eq!(
            *ring.iter_points_closing().last().unwrap(),
            Point2::new(0.0, 0.0)
        );
    }

    #[test]
    fn iter_segments() {
        let ring = square();
        assert_eq!(ring.iter_segments().count(), 4);
        assert_eq!(
            ring.iter_segments().last().unwrap(),
            Segment(&Point2::new(0.0, 1.0), &Point2::new(0.0, 0.0))
        );
    }

    #[test]
    fn area_and_winding() {
        let ring = square();
        assert_eq!(ring.area_signed(), 1.0);
        assert_eq!(ring.winding(), Winding::CounterClockwise);

        let reversed = ring.reversed();
        assert_eq!(reversed.area_signed(), -1.0);
        assert_eq!(reversed.winding(), Winding::Clockwise);
    }

    #[test]
    fn simple_and_self_intersecting() {
        assert!(square().is_simple());

        let bowtie = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap();
        assert!(!bowtie.is_simple());

        let with_repeated_point = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ])
        .unwrap();
        assert!(with_repeated_point.is_simple());

        let spike = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ])
        .unwrap();
        assert!(!spike.is_simple());
    }

    #[test]
    fn deserialize_checks_points() {
        let ring: Ring<Point2> =
            serde_json::from_str(r#"{"points":[{"x":0.0,"y":0.0},{"x":1.0,"y":0.0},{"x":1.0,"y":1.0}]}"#)
                .unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.area_signed(), 0.5);

        assert!(serde_json::from_str::<Ring<Point2>>(r#"{"points":[]}"#).is_err());
        assert!(serde_json::from_str::<Ring<Point2>>(r#"{"points":[{"x":0.0,"y":0.0}]}"#).is_err());
    }

    #[test]
    fn map_points_keeps_closure() {
        let ring = square().map_points(|p| Point2::new(p.x() * 2.0, p.y() + 1.0));
        assert_eq!(ring.points()[0], Point2::new(0.0, 1.0));
        assert_eq!(ring.points()[0], ring.points()[ring.len() - 1]);
    }
}
