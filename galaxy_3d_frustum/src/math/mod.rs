//! Math module: geometric primitives consumed by the frustum.
//!
//! Vectors are plain `glam::Vec3` values; everything here is `Copy`.

mod aabb;
mod plane;
mod ray;

pub use aabb::AABB;
pub use plane::{Plane, PlaneSide};
pub use ray::Ray;
