use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d, Orientation};

/// A strait line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

/// Common points of two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<P> {
    /// Segments cross or touch at a single point.
    Point(P),
    /// Segments are collinear and share a part between the two points.
    Overlap(P, P),
}

impl<'a, P: CartesianPoint2d<Num = f64>> Segment<'a, P> {
    /// Returns true if the segment has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.0.equal(self.1)
    }

    /// Returns true, if the segment has at least one common point with the `other` segment.
    pub fn intersects<Point: CartesianPoint2d<Num = f64>>(&self, other: &Segment<Point>) -> bool {
        let o1 = Orientation::triplet(self.0, self.1, other.0);
        let o2 = Orientation::triplet(self.0, self.1, other.1);
        let o3 = Orientation::triplet(other.0, other.1, self.0);
        let o4 = Orientation::triplet(other.0, other.1, self.1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && in_bounds(self.0, other.0, self.1))
            || (o2 == Orientation::Collinear && in_bounds(self.0, other.1, self.1))
            || (o3 == Orientation::Collinear && in_bounds(other.0, self.0, other.1))
            || (o4 == Orientation::Collinear && in_bounds(other.0, self.1, other.1))
    }

    /// Computes common points of the two segments.
    ///
    /// When an endpoint of one segment lies on the other one, that endpoint is returned as is (not recomputed), so
    /// callers can match it against existing vertices with exact comparison.
    pub fn intersection<Out: NewCartesianPoint2d<f64>>(
        &self,
        other: &Segment<P>,
    ) -> Option<SegmentIntersection<Out>> {
        if !self.intersects(other) {
            return None;
        }

        let r = self.1.sub(self.0);
        let s = other.1.sub(other.0);
        let denominator = r.cross(&s);

        if denominator == 0.0 {
            return self.collinear_overlap(other);
        }

        for (candidate, host) in [
            (self.0, other),
            (self.1, other),
            (other.0, self),
            (other.1, self),
        ] {
            if Orientation::triplet(host.0, host.1, candidate) == Orientation::Collinear
                && in_bounds(host.0, candidate, host.1)
            {
                return Some(SegmentIntersection::Point(Out::from_point(candidate)));
            }
        }

        let qp = other.0.sub(self.0);
        let t = (qp.cross(&s) / denominator).clamp(0.0, 1.0);
        let x = self.0.x() + t * r.dx();
        let y = self.0.y() + t * r.dy();

        Some(SegmentIntersection::Point(Out::new(x, y)))
    }

    fn collinear_overlap<Out: NewCartesianPoint2d<f64>>(
        &self,
        other: &Segment<P>,
    ) -> Option<SegmentIntersection<Out>> {
        let direction = self.1.sub(self.0);
        let mut shared: Vec<&P> = [self.0, self.1, other.0, other.1]
            .into_iter()
            .filter(|p| in_bounds(self.0, *p, self.1) && in_bounds(other.0, *p, other.1))
            .collect();
        shared.sort_by(|a, b| {
            a.sub(self.0)
                .dot(&direction)
                .total_cmp(&b.sub(self.0).dot(&direction))
        });

        let (first, last) = (shared.first()?, shared.last()?);
        if first.equal(*last) {
            Some(SegmentIntersection::Point(Out::from_point(*first)))
        } else {
            Some(SegmentIntersection::Overlap(
                Out::from_point(*first),
                Out::from_point(*last),
            ))
        }
    }
}

/// Checks if `q` lies in the bounding box of `p` and `r`. For collinear points this means `q` lies on the segment.
fn in_bounds(
    p: &impl CartesianPoint2d<Num = f64>,
    q: &impl CartesianPoint2d<Num = f64>,
    r: &impl CartesianPoint2d<Num = f64>,
) -> bool {
    q.x() <= p.x().max(r.x())
        && q.x() >= p.x().min(r.x())
        && q.y() <= p.y().max(r.y())
        && q.y() >= p.y().min(r.y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;
    use approx::assert_abs_diff_eq;

    #[test]
    fn crossing_segments() {
        let (a, b) = (Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let (c, d) = (Point2::new(10.0, 0.0), Point2::new(0.0, 10.0));

        assert!(Segment(&a, &b).intersects(&Segment(&c, &d)));
        let Some(SegmentIntersection::Point(p)) =
            Segment(&a, &b).intersection::<Point2>(&Segment(&c, &d))
        else {
            panic!("segments must cross");
        };
        assert_abs_diff_eq!(p, Point2::new(5.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn touching_segments_return_exact_endpoint() {
        let (a, b) = (Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let c = Point2::new(3.0, -1.0);

        assert_eq!(
            Segment(&a, &b).intersection::<Point2>(&Segment(&b, &c)),
            Some(SegmentIntersection::Point(b))
        );
    }

    #[test]
    fn disjoint_segments() {
        let (a, b) = (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let (c, d) = (Point2::new(0.0, 1.0), Point2::new(1.0, 1.0));
        let (e, f) = (Point2::new(2.0, 0.0), Point2::new(3.0, 0.0));

        assert!(!Segment(&a, &b).intersects(&Segment(&c, &d)));
        assert!(!Segment(&a, &b).intersects(&Segment(&e, &f)));
        assert_eq!(Segment(&a, &b).intersection::<Point2>(&Segment(&e, &f)), None);
    }

    #[test]
    fn collinear_overlap() {
        let (a, b) = (Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let (c, d) = (Point2::new(6.0, 0.0), Point2::new(2.0, 0.0));

        assert_eq!(
            Segment(&a, &b).intersection::<Point2>(&Segment(&c, &d)),
            Some(SegmentIntersection::Overlap(
                Point2::new(2.0, 0.0),
                Point2::new(4.0, 0.0)
            ))
        );
    }
}
