//! Geometric primitives for converting drawing-space line art into geographic polygons.
//!
//! The crate is built around traits in the same way `geo` algorithms work on `geo_types`: a [`Contour`] is a
//! sequence of points, a [`Polygon`](polygon::Polygon) is a shell contour with holes. Planar algorithms
//! ([`CartesianContour`], [`CartesianPolygon`]) are implemented for every type whose points implement
//! [`CartesianPoint2d`](cartesian::CartesianPoint2d).
//!
//! Concrete types live in [`impls`]: [`Ring`](impls::Ring) (closed point sequence), [`impls::Polygon`] and
//! [`impls::MultiPolygon`]. The [`geo`] module holds geographic points and the Winkel Tripel projection used to
//! invert drawing coordinates into longitude and latitude.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod impls;
pub mod multi_polygon;
pub mod polygon;
pub mod segment;
pub mod sweep;

#[cfg(feature = "geo-types")]
pub mod geo_types;
#[cfg(feature = "geojson")]
pub mod geojson;

pub use contour::{CartesianContour, Contour};
pub use geometry::Geom;
pub use polygon::CartesianPolygon;
