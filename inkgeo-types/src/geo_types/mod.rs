//! Bridge to [`geo_types`], the geometry representation used by the `geo` algorithms.
//!
//! `geo_types` geometries implement the traits of this crate, and the polygon types of this crate can be converted
//! into `geo_types` ones and back.

mod coord;
mod linestring;
mod polygon;
