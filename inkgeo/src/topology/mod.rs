//! Planar topology of rings: nesting, subdivision and repair.

mod forest;
mod polygonize;
mod repair;

pub use forest::{ContainmentForest, RingId};
pub use polygonize::polygonize;
pub use repair::{repair, union_all, unloop};
