use geo_types::{CoordNum, LineString};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::contour::Contour;
use crate::error::GeometryError;
use crate::geo_types::coord::to_coord;
use crate::impls::Ring;

impl<T: CoordNum> Contour for LineString<T> {
    type Point = geo_types::Coord<T>;

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        if self.is_closed() {
            self.0[..(self.0.len().max(1) - 1)].iter()
        } else {
            self.0.iter()
        }
    }
}

impl<P: CartesianPoint2d<Num = f64>> From<&Ring<P>> for LineString<f64> {
    fn from(ring: &Ring<P>) -> Self {
        ring.points().iter().map(to_coord).collect()
    }
}

impl<P> TryFrom<&LineString<f64>> for Ring<P>
where
    P: NewCartesianPoint2d<f64> + Clone,
{
    type Error = GeometryError;

    fn try_from(line: &LineString<f64>) -> Result<Self, Self::Error> {
        Ring::new(line.coords().map(|c| P::new(c.x, c.y)).collect())
    }
}

#[cfg(test)]
mod tests {
    use geo_types::line_string;

    use super::*;
    use crate::cartesian::Point2;
    use crate::contour::CartesianContour;

    #[test]
    fn line_string_contour() {
        let line: LineString<f64> = line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 0.0)];
        assert!(Contour::is_closed(&line));
        assert_eq!(line.iter_points().count(), 3);
        assert_eq!(line.area_signed(), 8.0);
    }

    #[test]
    fn ring_conversion() {
        let line: LineString<f64> = line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0)];
        let ring: Ring<Point2> = Ring::try_from(&line).unwrap();
        assert_eq!(ring.len(), 4);

        let back = LineString::from(&ring);
        assert!(back.is_closed());
        assert_eq!(back.0.len(), 4);
    }
}
