use crate::cartesian::CartesianPoint2d;
use crate::contour::Contour;
use crate::polygon::{CartesianPolygon, Polygon};

/// Geometry consisting of several polygons.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: Polygon;

    /// Iterates over polygons.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;
}

/// Planar operations on multipolygons.
pub trait CartesianMultiPolygon {
    /// Sum of the areas of all parts.
    fn area(&self) -> f64;

    /// Checks if any part contains the point.
    fn contains_point<Other: CartesianPoint2d<Num = f64>>(&self, point: &Other) -> bool;
}

impl<T, Poly, P> CartesianMultiPolygon for T
where
    T: MultiPolygon<Polygon = Poly>,
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
    P: CartesianPoint2d<Num = f64>,
{
    fn area(&self) -> f64 {
        self.polygons().map(CartesianPolygon::area).sum()
    }

    fn contains_point<Other: CartesianPoint2d<Num = f64>>(&self, point: &Other) -> bool {
        self.polygons().any(|p| p.contains_point(point))
    }
}
