//! Nearest-hospital lookup.
//!
//! Great-circle distance via the haversine formula and a linear scan over
//! the directory. Both are pure; no I/O happens here.

mod distance;
mod resolver;

pub use distance::{haversine_distance, EARTH_RADIUS_METERS};
pub use resolver::resolve_nearest;
