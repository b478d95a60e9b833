/// Plane: infinite flat surface given by a unit normal and a signed offset.
///
/// A point P lies on the plane when `dot(normal, P) + d == 0`.
/// Points with a positive signed distance are in front of the plane,
/// points with a negative one are behind it.

use std::fmt;
use glam::Vec3;

/// Side of a plane a point lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Exactly on the plane (signed distance == 0)
    OnPlane,
    /// Behind the plane (negative signed distance)
    Back,
    /// In front of the plane (positive signed distance)
    Front,
}

/// Plane in Hessian normal form: `dot(normal, P) + d = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal, pointing to the front side
    pub normal: Vec3,
    /// Signed distance term
    pub d: f32,
}

impl Plane {
    /// Create a plane from a normal and the distance term. The normal is used as given.
    pub const fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Create a plane through three points.
    ///
    /// The normal is `normalize((p1 - p2) x (p2 - p3))`: when the points are
    /// seen counter-clockwise, the front side faces the viewer.
    /// Collinear points yield a NaN normal.
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let mut plane = Self::new(Vec3::ZERO, 0.0);
        plane.set_from_points(p1, p2, p3);
        plane
    }

    /// Create a plane with the given normal passing through `point`.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize();
        Self { normal, d: -normal.dot(point) }
    }

    /// Rebuild this plane in place from three points (see [`Plane::from_points`]).
    #[inline]
    pub fn set_from_points(&mut self, p1: Vec3, p2: Vec3, p3: Vec3) {
        let normal = (p1 - p2).cross(p2 - p3).normalize();
        self.normal = normal;
        self.d = -p1.dot(normal);
    }

    /// Signed distance from the plane to `point`.
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Classify `point` against the plane.
    ///
    /// A NaN distance compares neither equal to nor below zero and is reported as `Front`.
    #[inline]
    pub fn test_point(&self, point: Vec3) -> PlaneSide {
        let dist = self.distance(point);
        if dist == 0.0 {
            PlaneSide::OnPlane
        } else if dist < 0.0 {
            PlaneSide::Back
        } else {
            PlaneSide::Front
        }
    }

    /// Whether all components are finite (false for planes built from degenerate points)
    pub fn is_finite(&self) -> bool {
        self.normal.is_finite() && self.d.is_finite()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.normal, self.d)
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
