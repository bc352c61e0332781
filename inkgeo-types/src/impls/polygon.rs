use serde::{Deserialize, Serialize};

use crate::impls::ring::Ring;

/// Simple implementation of the [`Polygon`](crate::polygon::Polygon) trait: a shell with zero or more holes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(deserialize = "P: Deserialize<'de> + crate::cartesian::CartesianPoint2d + Clone"))]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: Ring<P>,
    /// Inner contours.
    pub inner_contours: Vec<Ring<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: Ring<P>, inner_contours: Vec<Ring<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = Ring<P>;

    fn outer_contour(&self) -> &Self::Contour {
        &self.outer_contour
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.inner_contours.iter()
    }
}

impl<P> From<Ring<P>> for Polygon<P> {
    fn from(value: Ring<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;
    use crate::polygon::CartesianPolygon;

    fn square(min: f64, max: f64) -> Ring<Point2> {
        Ring::new(vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ])
        .unwrap()
    }

    #[test]
    fn contains_point() {
        let polygon = Polygon::new(square(0.0, 10.0), vec![square(4.0, 6.0).reversed()]);

        assert!(polygon.contains_point(&Point2::new(1.0, 1.0)));
        assert!(polygon.contains_point(&Point2::new(9.0, 5.0)));
        assert!(!polygon.contains_point(&Point2::new(5.0, 5.0)));
        assert!(!polygon.contains_point(&Point2::new(11.0, 5.0)));
        assert!(!polygon.contains_point(&Point2::new(-1.0, -1.0)));
    }

    #[test]
    fn area_subtracts_holes() {
        let polygon = Polygon::new(square(0.0, 10.0), vec![square(4.0, 6.0)]);
        assert_eq!(polygon.area(), 96.0);
    }

    #[test]
    fn validity() {
        let valid = Polygon::new(square(0.0, 10.0), vec![square(4.0, 6.0)]);
        assert!(valid.is_valid());

        let crossing_hole = Polygon::new(square(0.0, 10.0), vec![square(8.0, 12.0)]);
        assert!(!crossing_hole.is_valid());

        let bowtie = Polygon::from(
            Ring::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(10.0, 0.0),
                Point2::new(0.0, 10.0),
            ])
            .unwrap(),
        );
        assert!(!bowtie.is_valid());
    }
}
