use geo_types::{CoordNum, LineString};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::error::GeometryError;
use crate::geometry::Geom;
use crate::impls::{MultiPolygon, Polygon, Ring};

impl<T: CoordNum> crate::polygon::Polygon for geo_types::Polygon<T> {
    type Contour = LineString<T>;

    fn outer_contour(&self) -> &Self::Contour {
        self.exterior()
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.interiors().iter()
    }
}

impl<T: CoordNum> crate::multi_polygon::MultiPolygon for geo_types::MultiPolygon<T> {
    type Polygon = geo_types::Polygon<T>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.0.iter()
    }
}

impl<P: CartesianPoint2d<Num = f64>> From<&Polygon<P>> for geo_types::Polygon<f64> {
    fn from(polygon: &Polygon<P>) -> Self {
        geo_types::Polygon::new(
            LineString::<f64>::from(&polygon.outer_contour),
            polygon
                .inner_contours
                .iter()
                .map(LineString::<f64>::from)
                .collect(),
        )
    }
}

impl<P: CartesianPoint2d<Num = f64>> From<&MultiPolygon<P>> for geo_types::MultiPolygon<f64> {
    fn from(mp: &MultiPolygon<P>) -> Self {
        mp.parts().iter().map(geo_types::Polygon::<f64>::from).collect()
    }
}

impl<P: CartesianPoint2d<Num = f64>> From<&Geom<P>> for geo_types::MultiPolygon<f64> {
    fn from(geom: &Geom<P>) -> Self {
        geom.polygons().map(geo_types::Polygon::<f64>::from).collect()
    }
}

impl<P> TryFrom<&geo_types::Polygon<f64>> for Polygon<P>
where
    P: NewCartesianPoint2d<f64> + Clone,
{
    type Error = GeometryError;

    fn try_from(polygon: &geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        Ok(Polygon::new(
            Ring::try_from(polygon.exterior())?,
            polygon
                .interiors()
                .iter()
                .map(Ring::try_from)
                .collect::<Result<_, _>>()?,
        ))
    }
}

impl<P> TryFrom<&geo_types::MultiPolygon<f64>> for Geom<P>
where
    P: NewCartesianPoint2d<f64> + Clone,
{
    type Error = GeometryError;

    /// Empty polygons produced by boolean operations are skipped.
    fn try_from(mp: &geo_types::MultiPolygon<f64>) -> Result<Self, Self::Error> {
        let polygons = mp
            .0
            .iter()
            .filter(|p| !p.exterior().0.is_empty())
            .map(Polygon::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Geom::from_polygons(polygons))
    }
}

#[cfg(test)]
mod tests {
    use geo_types::polygon;

    use super::*;
    use crate::cartesian::Point2;
    use crate::polygon::CartesianPolygon;

    #[test]
    fn geo_types_polygon_traits() {
        let polygon: geo_types::Polygon<f64> = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 4.0, y: 4.0), (x: 6.0, y: 4.0), (x: 6.0, y: 6.0), (x: 4.0, y: 6.0)]]
        );
        assert_eq!(CartesianPolygon::area(&polygon), 96.0);
        assert!(polygon.is_valid());
    }

    #[test]
    fn round_trip_through_geo_types() {
        let polygon: geo_types::Polygon<f64> = polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
        ];
        let empty = geo_types::Polygon::new(LineString::new(vec![]), vec![]);
        let mp = geo_types::MultiPolygon::new(vec![polygon, empty]);

        let geom: Geom<Point2> = Geom::try_from(&mp).unwrap();
        let Geom::Polygon(converted) = &geom else {
            panic!("expected a single polygon");
        };
        assert_eq!(converted.outer_contour.len(), 4);
        assert_eq!(geo_types::MultiPolygon::from(&geom).0.len(), 1);
    }
}
