//! CPU ray picking of interactive entities.
//!
//! Casts a ray from the camera through the clicked pixel and tests it
//! against each entity's bounding geometry; the closest hit wins.

pub mod geometry;
pub mod ray;
pub mod resolver;

pub use geometry::{Aabb, BoundingGeometry};
pub use ray::Ray;
pub use resolver::{nearest_hit, resolve_pick, PickHit};
