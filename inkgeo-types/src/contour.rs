//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - meaning that the first and the last points of the contour are not connected.
//! * **closed** - when the first and the last points of the contour are connected. An outline of a drawn shape is
//!   a closed contour.
//!
//! The [`Contour`] trait iterates the points of a closed contour without repeating the first point at the end. Use
//! [`Contour::iter_points_closing`] and [`Contour::iter_segments`] to include the closing segment. The
//! [`Ring`](crate::impls::Ring) type stores the repeated point explicitly (OGC `LinearRing` layout) but exposes the
//! same iteration semantics through this trait.

use crate::cartesian::{CartesianPoint2d, Envelope, Winding};
use crate::segment::{Segment, SegmentIntersection};
use crate::sweep::overlapping_pairs;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Whether the contour is closed.
    ///
    /// A closed contour has a segment connecting the last and the first points.
    fn is_closed(&self) -> bool;

    /// Iterate over the points of the contour.
    ///
    /// Note, that the last point shall not be the same as the first one even for the closed contours. If you want to
    /// include the first point at the end of iterator for closed contours, use [`Contour::iter_points_closing`]
    /// instead.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`Contour::iter_points`] but for closed contours repeats the first point again at the end of the iterator.
    fn iter_points_closing(&self) -> impl Iterator<Item = &Self::Point> {
        ContourPointsIterator::new(self.iter_points(), self.is_closed())
    }

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and the
    /// first points of the contour.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(ContourPointsIterator::new(
            self.iter_points(),
            self.is_closed(),
        ))
    }
}

/// Iterator of contour points.
#[derive(Debug, Clone)]
pub struct ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    is_closed: bool,
    first_point: Option<&'a P>,
}

impl<'a, P: 'a, Iter> ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter, is_closed: bool) -> Self {
        Self {
            points_iter,
            is_closed,
            first_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if self.is_closed && self.first_point.is_none() {
            self.first_point = next;
        }

        if next.is_none() {
            self.first_point.take()
        } else {
            next
        }
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, P: 'a, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: ContourPointsIterator<'a, P, Iter>,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: ContourPointsIterator<'a, P, Iter>) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_point = self.points_iter.next()?;
        let prev_point = self.prev_point.replace(next_point);

        match prev_point {
            Some(prev) => Some(Segment(prev, next_point)),
            None => self.next(),
        }
    }
}

/// Planar algorithms for contours of cartesian points. Auto-implemented for all contours.
pub trait CartesianContour<P: CartesianPoint2d<Num = f64>>: Contour<Point = P> {
    /// Signed area of the contour (shoelace formula). Positive for counterclockwise contours.
    fn area_signed(&self) -> f64 {
        let mut iter = self.iter_points_closing();
        let Some(mut prev) = iter.next() else {
            return 0.0;
        };

        let mut aggr = 0.0;
        for p in iter {
            aggr += prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / 2.0
    }

    /// Direction of the contour.
    fn winding(&self) -> Winding {
        if self.area_signed() <= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Bounding box of the contour.
    fn envelope(&self) -> Option<Envelope> {
        Envelope::from_points(self.iter_points())
    }

    /// Returns true if no two segments of the contour have common points, except for the shared endpoints of the
    /// consecutive segments. Zero-length segments (repeated points) are ignored.
    fn is_simple(&self) -> bool {
        let segments: Vec<Segment<'_, P>> = self
            .iter_segments()
            .filter(|segment| !segment.is_degenerate())
            .collect();
        let count = segments.len();
        let is_closed = self.is_closed();

        let envelopes: Vec<Envelope> = segments.iter().map(segment_envelope).collect();
        for (i, j) in overlapping_pairs(&envelopes) {
            let (i, j) = (i.min(j), i.max(j));
            let adjacent = j == i + 1 || (is_closed && i == 0 && j == count - 1);
            let intersection = segments[i].intersection::<crate::cartesian::Point2>(&segments[j]);

            match intersection {
                None => {}
                Some(SegmentIntersection::Overlap(..)) => return false,
                Some(SegmentIntersection::Point(p)) => {
                    if !adjacent {
                        return false;
                    }

                    let shared = if j == i + 1 {
                        segments[i].1
                    } else {
                        segments[i].0
                    };
                    if !shared.equal(&p) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl<P: CartesianPoint2d<Num = f64>, T: Contour<Point = P>> CartesianContour<P> for T {}

pub(crate) fn segment_envelope<P: CartesianPoint2d<Num = f64>>(segment: &Segment<'_, P>) -> Envelope {
    Envelope::from_point(segment.0).merge(Envelope::from_point(segment.1))
}
