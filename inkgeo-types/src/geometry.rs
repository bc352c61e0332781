//! Output geometry of the conversion: a polygon or a set of polygons.

use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::impls::{MultiPolygon, Polygon};
use crate::multi_polygon::CartesianMultiPolygon;
use crate::polygon::CartesianPolygon;

/// Areal geometry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(deserialize = "P: Deserialize<'de> + crate::cartesian::CartesianPoint2d + Clone"))]
pub enum Geom<P> {
    /// Single polygon.
    Polygon(Polygon<P>),
    /// Several polygons.
    MultiPolygon(MultiPolygon<P>),
}

impl<P> Geom<P> {
    /// Collapses a list of polygons: one polygon stays a polygon, anything else becomes a multipolygon.
    pub fn from_polygons(mut polygons: Vec<Polygon<P>>) -> Self {
        if polygons.len() == 1 {
            if let Some(polygon) = polygons.pop() {
                return Self::Polygon(polygon);
            }
        }

        Self::MultiPolygon(polygons.into())
    }

    /// Iterates over the polygons of the geometry.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon<P>> {
        let parts: &[Polygon<P>] = match self {
            Geom::Polygon(polygon) => std::slice::from_ref(polygon),
            Geom::MultiPolygon(mp) => mp.parts(),
        };
        parts.iter()
    }

    /// Consumes the geometry returning its polygons.
    pub fn into_polygons(self) -> Vec<Polygon<P>> {
        match self {
            Geom::Polygon(polygon) => vec![polygon],
            Geom::MultiPolygon(mp) => mp.parts,
        }
    }

    /// Returns true if the geometry has no polygons.
    pub fn is_empty(&self) -> bool {
        match self {
            Geom::Polygon(_) => false,
            Geom::MultiPolygon(mp) => mp.parts.is_empty(),
        }
    }
}

impl<P: CartesianPoint2d<Num = f64>> Geom<P> {
    /// Planar area of the geometry.
    pub fn area(&self) -> f64 {
        match self {
            Geom::Polygon(polygon) => polygon.area(),
            Geom::MultiPolygon(mp) => mp.area(),
        }
    }

    /// Returns true if the point lies inside of the geometry.
    pub fn contains_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        match self {
            Geom::Polygon(polygon) => polygon.contains_point(point),
            Geom::MultiPolygon(mp) => mp.contains_point(point),
        }
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}
