//! Repair of self-intersecting polygons.

use geo::BooleanOps;
use geo_types::{LineString, MultiPolygon};
use inkgeo_types::cartesian::NewCartesianPoint2d;
use inkgeo_types::contour::CartesianContour;
use inkgeo_types::error::GeometryError;
use inkgeo_types::geometry::Geom;
use inkgeo_types::impls::{Polygon, Ring};
use inkgeo_types::polygon::CartesianPolygon;

use crate::diagnostic::{Diagnostic, DiagnosticKind, Reported};
use crate::topology::polygonize::polygonize;

/// Rebuilds a polygon that is not simple.
///
/// A valid polygon is returned unchanged. Otherwise every ring is replaced by the union of the faces of its planar
/// subdivision, and the cleaned holes are subtracted from the cleaned shell in their original order. The result may
/// have several parts.
pub fn repair<P>(polygon: Polygon<P>) -> Reported<Geom<P>>
where
    P: NewCartesianPoint2d<f64> + Clone,
{
    if polygon.is_valid() {
        return Reported::clean(polygon.into());
    }

    let mut cleaned = ring_faces(&polygon.outer_contour);
    for hole in &polygon.inner_contours {
        cleaned = cleaned.difference(&ring_faces(hole));
    }

    match Geom::try_from(&cleaned) {
        Ok(geom) => {
            let detail = format!(
                "polygon with {} rings rebuilt into {} parts",
                polygon.inner_contours.len() + 1,
                cleaned.0.len()
            );
            Reported::new(
                geom,
                vec![Diagnostic::new(
                    DiagnosticKind::SelfIntersectingRing,
                    None,
                    detail,
                )],
            )
        }
        Err(err) => {
            let detail = format!("polygon could not be rebuilt, kept as is: {err}");
            Reported::new(
                polygon.into(),
                vec![Diagnostic::new(
                    DiagnosticKind::SelfIntersectingRing,
                    None,
                    detail,
                )],
            )
        }
    }
}

/// Collapses a self-intersecting ring to the outline of its largest face.
///
/// Simple rings, and rings that do not enclose any area, are returned unchanged.
pub fn unloop<P>(ring: &Ring<P>) -> Ring<P>
where
    P: NewCartesianPoint2d<f64> + Clone,
{
    if ring.is_simple() {
        return ring.clone();
    }

    let faces = polygonize(ring.points());
    log::debug!("Ring with {} points has {} faces", ring.len(), faces.len());

    faces
        .into_iter()
        .max_by(|a, b| a.area_signed().total_cmp(&b.area_signed()))
        .unwrap_or_else(|| ring.clone())
}

/// Union of all given geometries.
pub fn union_all<P>(geometries: &[Geom<P>]) -> Result<Geom<P>, GeometryError>
where
    P: NewCartesianPoint2d<f64> + Clone,
{
    if let [single] = geometries {
        return Ok(single.clone());
    }

    let union = geometries
        .iter()
        .map(MultiPolygon::<f64>::from)
        .reduce(|acc, next| acc.union(&next))
        .unwrap_or_else(|| MultiPolygon::new(vec![]));

    Geom::try_from(&union)
}

fn ring_faces<P>(ring: &Ring<P>) -> MultiPolygon<f64>
where
    P: NewCartesianPoint2d<f64> + Clone,
{
    polygonize(ring.points())
        .iter()
        .map(|face| MultiPolygon::new(vec![geo_types::Polygon::new(LineString::from(face), vec![])]))
        .reduce(|acc, face| acc.union(&face))
        .unwrap_or_else(|| MultiPolygon::new(vec![]))
}
