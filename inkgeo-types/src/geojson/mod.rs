//! Conversion of geometries into [`geojson`] values. Positions are written as `[x, y]`, which for
//! [`GeoPoint2d`](crate::geo::GeoPoint2d) is `[lon, lat]`.

use geojson::{PolygonType, Position, Value};

use crate::cartesian::CartesianPoint2d;
use crate::geometry::Geom;
use crate::impls::{Polygon, Ring};

fn position(point: &impl CartesianPoint2d<Num = f64>) -> Position {
    vec![point.x(), point.y()]
}

fn ring_positions<P: CartesianPoint2d<Num = f64>>(ring: &Ring<P>) -> Vec<Position> {
    ring.points().iter().map(position).collect()
}

fn polygon_positions<P: CartesianPoint2d<Num = f64>>(polygon: &Polygon<P>) -> PolygonType {
    std::iter::once(&polygon.outer_contour)
        .chain(polygon.inner_contours.iter())
        .map(ring_positions)
        .collect()
}

impl<P: CartesianPoint2d<Num = f64>> From<&Geom<P>> for Value {
    fn from(geom: &Geom<P>) -> Self {
        match geom {
            Geom::Polygon(polygon) => Value::Polygon(polygon_positions(polygon)),
            Geom::MultiPolygon(mp) => {
                Value::MultiPolygon(mp.parts().iter().map(polygon_positions).collect())
            }
        }
    }
}
