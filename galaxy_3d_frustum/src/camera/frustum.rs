/// Frustum: six clipping planes built from a perspective camera.
///
/// The caller sets the projection once (or whenever it changes) and the camera
/// pose every frame; containment tests then run against the current planes.
///
/// Every plane's front side faces the inside of the frustum. A primitive is
/// rejected as soon as one plane has it entirely on its back side, so all
/// tests are conservative: they may keep invisible geometry near the frustum
/// edges, they never drop visible geometry.
///
/// Setters take `&mut self` and queries take `&self`: updating the pose while
/// another thread queries the same frustum is ruled out by the borrow checker.
/// Share a frustum across threads by cloning it or behind a lock.

use std::fmt;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::math::{Plane, PlaneSide, Ray, AABB};
use super::basis::{CameraBasis, FrustumCorners};
use super::projection::{ProjectionExtents, ProjectionParameters};

const SOURCE: &str = "galaxy3d::Frustum";

/// Frustum plane indices, in construction order
pub const PLANE_TOP: usize = 0;
pub const PLANE_BOTTOM: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// All corners are behind a single plane
    Outside,
    /// No corner is behind any plane
    Inside,
    /// Neither of the above (straddling, or outside near an oblique edge)
    Partial,
}

/// View frustum of a perspective camera.
#[derive(Debug, Clone)]
pub struct Frustum {
    parameters: ProjectionParameters,
    extents: ProjectionExtents,
    /// `None` until the first orientation update, then always six planes
    planes: Option<[Plane; 6]>,
    corners: Option<FrustumCorners>,
}

impl Default for Frustum {
    fn default() -> Self {
        Self::new()
    }
}

impl Frustum {
    /// Create a frustum with [`ProjectionParameters::default`] and no planes.
    pub fn new() -> Self {
        Self::with_parameters(ProjectionParameters::default())
    }

    /// Create a frustum with the given projection and no planes.
    pub fn with_parameters(parameters: ProjectionParameters) -> Self {
        let mut frustum = Self {
            parameters,
            extents: ProjectionExtents::default(),
            planes: None,
            corners: None,
        };
        frustum.set_projection(parameters);
        frustum
    }

    fn log_and_return_error(error: Error) -> Error {
        crate::frustum_error!(SOURCE, "{}", error);
        error
    }

    // ===== PROJECTION =====

    /// Set the projection parameters.
    ///
    /// Planes that were already built are left untouched: the new values are
    /// used by the next [`Frustum::set_camera_orientation`].
    ///
    /// # Arguments
    ///
    /// * `fov` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height)
    /// * `near` - Distance to the near plane
    /// * `far` - Distance to the far plane
    pub fn set_camera_parameters(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        self.set_projection(ProjectionParameters::new(fov, aspect, near, far));
    }

    /// Set the projection parameters from a [`ProjectionParameters`].
    ///
    /// Invalid parameters are stored anyway and produce meaningless planes;
    /// a warning is logged.
    pub fn set_projection(&mut self, parameters: ProjectionParameters) {
        if let Err(err) = parameters.validate() {
            crate::frustum_warn!(SOURCE, "{}; frustum planes will be invalid", err);
        }
        self.parameters = parameters;
        self.extents = parameters.extents();
        crate::frustum_debug!(
            SOURCE,
            "Projection set: fov {}°, aspect {}, near {}, far {}",
            parameters.fov_degrees, parameters.aspect_ratio, parameters.near, parameters.far
        );
    }

    /// Validating variant of [`Frustum::set_camera_parameters`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidProjection` and keeps the previous parameters if
    /// `0 < fov < 180`, `aspect > 0` or `0 < near < far` does not hold.
    pub fn try_set_camera_parameters(&mut self, fov: f32, aspect: f32, near: f32, far: f32) -> Result<()> {
        let parameters = ProjectionParameters::new(fov, aspect, near, far);
        parameters.validate().map_err(Self::log_and_return_error)?;
        self.set_projection(parameters);
        Ok(())
    }

    /// Current projection parameters
    pub fn parameters(&self) -> &ProjectionParameters {
        &self.parameters
    }

    /// Half-extents derived from the current projection parameters
    pub fn extents(&self) -> &ProjectionExtents {
        &self.extents
    }

    // ===== ORIENTATION =====

    /// Set the camera pose and rebuild the six planes.
    ///
    /// The first call creates the planes; later calls update them in place.
    ///
    /// # Arguments
    ///
    /// * `position` - Camera position
    /// * `direction` - Look direction, unit length
    /// * `up` - Up vector, unit length and not parallel to `direction`
    ///
    /// A parallel up vector or a zero direction is not rejected: the planes
    /// become NaN and containment results are meaningless. A warning is logged.
    pub fn set_camera_orientation(&mut self, position: Vec3, direction: Vec3, up: Vec3) {
        let basis = CameraBasis::from_orientation(direction, up);
        if basis.is_degenerate() {
            crate::frustum_warn!(
                SOURCE,
                "Degenerate camera basis (direction {}, up {}); frustum planes will be invalid",
                direction, up
            );
        }

        let c = FrustumCorners::compute(
            position,
            &basis,
            &self.extents,
            self.parameters.near,
            self.parameters.far,
        );

        let first_build = self.planes.is_none();
        let planes = self.planes.get_or_insert([Plane::new(Vec3::ZERO, 0.0); 6]);
        planes[PLANE_TOP].set_from_points(c.near_top_right, c.near_top_left, c.far_top_left);
        planes[PLANE_BOTTOM].set_from_points(c.near_bottom_left, c.near_bottom_right, c.far_bottom_right);
        planes[PLANE_LEFT].set_from_points(c.near_top_left, c.near_bottom_left, c.far_bottom_left);
        planes[PLANE_RIGHT].set_from_points(c.near_bottom_right, c.near_top_right, c.far_bottom_right);
        planes[PLANE_NEAR].set_from_points(c.near_top_left, c.near_top_right, c.near_bottom_right);
        planes[PLANE_FAR].set_from_points(c.far_top_right, c.far_top_left, c.far_bottom_left);
        self.corners = Some(c);

        if first_build {
            crate::frustum_debug!(SOURCE, "Frustum planes built at {}", position);
        } else {
            crate::frustum_trace!(SOURCE, "Frustum planes updated at {}", position);
        }
    }

    /// Validating variant of [`Frustum::set_camera_orientation`].
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateOrientation` and keeps the previous planes if
    /// the position is not finite or `direction`/`up` do not span a basis.
    pub fn try_set_camera_orientation(&mut self, position: Vec3, direction: Vec3, up: Vec3) -> Result<()> {
        if !position.is_finite() {
            return Err(Self::log_and_return_error(Error::DegenerateOrientation(
                format!("camera position {} is not finite", position)
            )));
        }
        if CameraBasis::from_orientation(direction, up).is_degenerate() {
            return Err(Self::log_and_return_error(Error::DegenerateOrientation(
                format!("direction {} and up {} do not span a camera basis", direction, up)
            )));
        }
        self.set_camera_orientation(position, direction, up);
        Ok(())
    }

    // ===== ACCESSORS =====

    /// The planes, indexed by `PLANE_*`. Empty until the first orientation update.
    pub fn planes(&self) -> &[Plane] {
        match &self.planes {
            Some(planes) => planes.as_slice(),
            None => &[],
        }
    }

    /// A single plane by `PLANE_*` index
    pub fn plane(&self, index: usize) -> Option<&Plane> {
        self.planes().get(index)
    }

    /// Whether an orientation has been set
    pub fn is_initialized(&self) -> bool {
        self.planes.is_some()
    }

    /// Corner points computed by the last orientation update
    pub fn corners(&self) -> Option<&FrustumCorners> {
        self.corners.as_ref()
    }

    // ===== CONTAINMENT =====

    /// Whether `point` is inside the frustum. Points on a plane count as inside.
    ///
    /// Always `true` before the first orientation update.
    pub fn point_in_frustum(&self, point: Vec3) -> bool {
        for plane in self.planes() {
            if plane.test_point(point) == PlaneSide::Back {
                return false;
            }
        }
        true
    }

    /// Whether a sphere is (potentially) inside the frustum.
    ///
    /// Rejects only spheres entirely behind one plane: a sphere near a
    /// frustum corner may be reported visible although it is outside.
    pub fn sphere_in_frustum(&self, center: Vec3, radius: f32) -> bool {
        for plane in self.planes() {
            if plane.distance(center) < -radius {
                return false;
            }
        }
        true
    }

    /// Same test as [`Frustum::sphere_in_frustum`].
    ///
    /// Despite the name, the near and far planes ARE tested. Callers depend on
    /// the current results, so the behavior is kept as is.
    pub fn sphere_in_frustum_without_near_far(&self, center: Vec3, radius: f32) -> bool {
        for plane in self.planes() {
            if plane.distance(center) < -radius {
                return false;
            }
        }
        true
    }

    /// Whether a bounding box is (potentially) inside the frustum.
    ///
    /// Rejects the box only if all eight corners are behind a single plane.
    pub fn bounds_in_frustum(&self, bounds: &AABB) -> bool {
        let corners = bounds.corners();
        for plane in self.planes() {
            let out = corners.iter()
                .filter(|corner| plane.test_point(**corner) == PlaneSide::Back)
                .count();
            if out == corners.len() {
                return false;
            }
        }
        true
    }

    /// Classify a bounding box against the frustum (3-way test).
    ///
    /// `Outside` exactly when [`Frustum::bounds_in_frustum`] is `false`.
    pub fn classify_bounds(&self, bounds: &AABB) -> Containment {
        let corners = bounds.corners();
        let mut all_inside = true;

        for plane in self.planes() {
            let out = corners.iter()
                .filter(|corner| plane.test_point(**corner) == PlaneSide::Back)
                .count();
            if out == corners.len() {
                return Containment::Outside;
            }
            if out > 0 {
                all_inside = false;
            }
        }

        if all_inside { Containment::Inside } else { Containment::Partial }
    }

    // ===== PICKING =====

    /// Ray from the camera through a window coordinate.
    ///
    /// The ray starts on the near plane and points away from `position`.
    /// Mouse coordinates are normalized to [-1, 1] around the window center;
    /// the normalized y is applied along the camera up axis as is, so larger
    /// `mouse_y` values move the ray up.
    ///
    /// The basis is rebuilt from `position`, `direction` and `up` using the
    /// current projection; the planes are not read.
    #[allow(clippy::too_many_arguments)]
    pub fn calculate_pick_ray(
        &self,
        screen_width: f32,
        screen_height: f32,
        mouse_x: f32,
        mouse_y: f32,
        position: Vec3,
        direction: Vec3,
        up: Vec3,
    ) -> Ray {
        let half_width = screen_width / 2.0;
        let half_height = screen_height / 2.0;
        let n_x = (mouse_x - half_width) / half_width;
        let n_y = (mouse_y - half_height) / half_height;

        let basis = CameraBasis::from_orientation(direction, up);
        let near_center = position - basis.back * self.parameters.near;
        let near_point = basis.right * self.extents.near_half_width * n_x
            + basis.up * self.extents.near_half_height * n_y
            + near_center;

        Ray::new(near_point, near_point - position)
    }
}

impl fmt::Display for Frustum {
    /// One plane per line: normal, then the distance term
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for plane in self.planes() {
            writeln!(f, "{}", plane)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
