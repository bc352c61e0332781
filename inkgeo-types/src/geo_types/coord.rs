use geo_types::{coord, Coord, CoordFloat};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::{GeoPoint, NewGeoPoint};

impl<T: CoordFloat> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl<T: CoordFloat> NewCartesianPoint2d<T> for Coord<T> {
    fn new(x: T, y: T) -> Self {
        coord!(x: x, y: y)
    }
}

impl<T: CoordFloat> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        coord!(x: lon, y: lat)
    }
}

pub(super) fn to_coord(point: &impl CartesianPoint2d<Num = f64>) -> Coord<f64> {
    coord!(x: point.x(), y: point.y())
}
