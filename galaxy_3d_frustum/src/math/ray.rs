/// Ray: half-line from an origin along a unit direction.

use glam::Vec3;
use super::plane::{Plane, PlaneSide};

/// Ray with a unit-length direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray. The direction is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize() }
    }

    /// Point at `distance` along the ray
    #[inline]
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Intersection point with `plane`, if any.
    ///
    /// Hits behind the origin are ignored. A ray running parallel to the
    /// plane only hits it when its origin lies on the plane.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = self.direction.dot(plane.normal);
        if denom != 0.0 {
            let t = -(self.origin.dot(plane.normal) + plane.d) / denom;
            if t < 0.0 {
                return None;
            }
            Some(self.point_at(t))
        } else if plane.test_point(self.origin) == PlaneSide::OnPlane {
            Some(self.origin)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;
