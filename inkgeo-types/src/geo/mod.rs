//! Geographic points (latitude and longitude in degrees, see [`GeoPoint`]) and the projections used to map
//! drawing coordinates onto them (see [`Projection`]).

mod point;
mod projection;

pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use projection::{
    Inversion, InversionStatus, Normalization, Projection, WinkelTripel, WINKEL_TRIPEL_ENVELOPE,
};
