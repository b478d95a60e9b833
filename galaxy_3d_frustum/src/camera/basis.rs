/// Camera basis and frustum corner points.
///
/// Both are derived data: they are recomputed from the camera pose on every
/// orientation update and only exist to build the six frustum planes.

use glam::Vec3;
use super::projection::ProjectionExtents;

/// Orthonormal camera basis.
///
/// `back` points from the look target toward the camera, so the camera
/// looks along `-back`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub back: Vec3,
}

impl CameraBasis {
    /// Build the basis from a look direction and an up hint.
    ///
    /// The up hint only has to be non-parallel to `direction`; the returned
    /// `up` is re-orthogonalized against it. A parallel hint or a zero
    /// direction yields NaN components (see [`CameraBasis::is_degenerate`]).
    #[inline]
    pub fn from_orientation(direction: Vec3, up_hint: Vec3) -> Self {
        let back = (-direction).normalize();
        let right = up_hint.cross(back).normalize();
        let up = back.cross(right).normalize();
        Self { right, up, back }
    }

    /// Look direction (unit length)
    pub fn forward(&self) -> Vec3 {
        -self.back
    }

    /// True if any axis is not finite
    pub fn is_degenerate(&self) -> bool {
        !(self.right.is_finite() && self.up.is_finite() && self.back.is_finite())
    }
}

/// Corner points of the near and far rectangles plus their centers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    pub near_center: Vec3,
    pub far_center: Vec3,

    pub near_top_left: Vec3,
    pub near_top_right: Vec3,
    pub near_bottom_left: Vec3,
    pub near_bottom_right: Vec3,

    pub far_top_left: Vec3,
    pub far_top_right: Vec3,
    pub far_bottom_left: Vec3,
    pub far_bottom_right: Vec3,
}

impl FrustumCorners {
    /// Compute the corners for a camera at `position` with the given basis.
    pub fn compute(position: Vec3, basis: &CameraBasis, extents: &ProjectionExtents, near: f32, far: f32) -> Self {
        let near_center = position - basis.back * near;
        let far_center = position - basis.back * far;

        let near_up = basis.up * extents.near_half_height;
        let near_right = basis.right * extents.near_half_width;
        let far_up = basis.up * extents.far_half_height;
        let far_right = basis.right * extents.far_half_width;

        Self {
            near_center,
            far_center,

            near_top_left: near_center + near_up - near_right,
            near_top_right: near_center + near_up + near_right,
            near_bottom_left: near_center - near_up - near_right,
            near_bottom_right: near_center - near_up + near_right,

            far_top_left: far_center + far_up - far_right,
            far_top_right: far_center + far_up + far_right,
            far_bottom_left: far_center - far_up - far_right,
            far_bottom_right: far_center - far_up + far_right,
        }
    }

    /// Near rectangle: top-left, top-right, bottom-right, bottom-left
    pub fn near(&self) -> [Vec3; 4] {
        [self.near_top_left, self.near_top_right, self.near_bottom_right, self.near_bottom_left]
    }

    /// Far rectangle: top-left, top-right, bottom-right, bottom-left
    pub fn far(&self) -> [Vec3; 4] {
        [self.far_top_left, self.far_top_right, self.far_bottom_right, self.far_bottom_left]
    }
}

#[cfg(test)]
#[path = "basis_tests.rs"]
mod tests;
