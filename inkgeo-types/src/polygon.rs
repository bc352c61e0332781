//! Polygon traits.

use crate::cartesian::CartesianPoint2d;
use crate::contour::{CartesianContour, Contour};
use crate::segment::Segment;

/// Polygon geometry. Polygon consists of one outer contour, and zero or more inner contours.
///
/// Inner contours represent *holes* in a polygon.
pub trait Polygon {
    /// Contour type.
    type Contour: Contour;

    /// Outer contour of the polygon.
    fn outer_contour(&self) -> &Self::Contour;
    /// iterates over inner contours.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Iterates over all contours of the polygon starting with the outer one.
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }

    /// Iterates over all segments of the polygon contour lines.
    fn iter_segments(
        &self,
    ) -> impl Iterator<Item = Segment<'_, <Self::Contour as Contour>::Point>> {
        self.iter_contours().flat_map(Self::Contour::iter_segments)
    }
}

/// Polygon in 2d cartesian coordinates. This trait is auto-implemented for all illegible types.
pub trait CartesianPolygon {
    /// Type of the points of the polygon.
    type Point: CartesianPoint2d<Num = f64>;

    /// Returns true if the `point` lies inside the polygon (non-zero winding rule).
    fn contains_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool;

    /// Area of the polygon: area of the outer contour minus areas of the holes.
    fn area(&self) -> f64;

    /// Returns true if every contour is simple and no two contours have common points.
    fn is_valid(&self) -> bool;
}

impl<P, C, T> CartesianPolygon for T
where
    P: CartesianPoint2d<Num = f64>,
    C: Contour<Point = P>,
    T: Polygon<Contour = C>,
{
    type Point = P;

    fn contains_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        let mut wn = 0i64;
        let (x, y) = (point.x(), point.y());

        for Segment(from, to) in self.iter_segments() {
            let is_left = (to.x() - from.x()) * (y - from.y()) - (x - from.x()) * (to.y() - from.y());
            if from.y() <= y {
                if to.y() > y && is_left > 0.0 {
                    wn += 1;
                }
            } else if to.y() <= y && is_left < 0.0 {
                wn -= 1;
            }
        }

        wn != 0
    }

    fn area(&self) -> f64 {
        self.outer_contour().area_signed().abs()
            - self
                .inner_contours()
                .map(|c| c.area_signed().abs())
                .sum::<f64>()
    }

    fn is_valid(&self) -> bool {
        if !self.iter_contours().all(|c| c.is_simple()) {
            return false;
        }

        let contours: Vec<&C> = self.iter_contours().collect();
        for (i, a) in contours.iter().enumerate() {
            for b in &contours[i + 1..] {
                let (Some(env_a), Some(env_b)) = (a.envelope(), b.envelope()) else {
                    continue;
                };
                if !env_a.intersects(&env_b) {
                    continue;
                }

                let crosses = a
                    .iter_segments()
                    .any(|sa| b.iter_segments().any(|sb| sa.intersects(&sb)));
                if crosses {
                    return false;
                }
            }
        }

        true
    }
}
