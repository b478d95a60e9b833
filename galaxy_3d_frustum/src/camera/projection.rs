/// Projection configuration: perspective parameters and the derived
/// half-extents of the near and far rectangles.

use crate::error::{Error, Result};

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParameters {
    /// Vertical field of view in degrees, in (0, 180)
    pub fov_degrees: f32,
    /// Width / height, > 0
    pub aspect_ratio: f32,
    /// Distance to the near plane, > 0
    pub near: f32,
    /// Distance to the far plane, > near
    pub far: f32,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            fov_degrees: 67.0,
            aspect_ratio: 1.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Half-width and half-height of the near and far rectangles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectionExtents {
    pub near_half_width: f32,
    pub near_half_height: f32,
    pub far_half_width: f32,
    pub far_half_height: f32,
}

impl ProjectionParameters {
    pub fn new(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self { fov_degrees, aspect_ratio, near, far }
    }

    /// Half-extents of the near and far rectangles.
    ///
    /// `tan(fov / 2)` is evaluated in double precision, then narrowed.
    pub fn extents(&self) -> ProjectionExtents {
        let tang = (self.fov_degrees as f64 * 0.5).to_radians().tan() as f32;
        let near_half_height = self.near * tang;
        let far_half_height = self.far * tang;
        ProjectionExtents {
            near_half_width: near_half_height * self.aspect_ratio,
            near_half_height,
            far_half_width: far_half_height * self.aspect_ratio,
            far_half_height,
        }
    }

    /// Check `0 < fov < 180`, `aspect > 0` and `0 < near < far`.
    ///
    /// NaN values fail every check.
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(Error::InvalidProjection(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fov_degrees
            )));
        }
        if !(self.aspect_ratio > 0.0) || !self.aspect_ratio.is_finite() {
            return Err(Error::InvalidProjection(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if !(self.near > 0.0) {
            return Err(Error::InvalidProjection(format!(
                "near distance must be positive, got {}",
                self.near
            )));
        }
        if !(self.far > self.near) || !self.far.is_finite() {
            return Err(Error::InvalidProjection(format!(
                "far distance must be greater than near ({}), got {}",
                self.near, self.far
            )));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
