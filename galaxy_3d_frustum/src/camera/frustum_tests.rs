use glam::Vec3;
use crate::camera::{CameraBasis, FrustumCorners, ProjectionParameters};
use crate::error::Error;
use crate::math::{AABB, PlaneSide};
use super::*;

/// 90° square frustum at the origin looking down -Z, near 1, far 100.
///
/// With tan(45°) == 1 the frustum is the pyramid `|x| <= -z`, `|y| <= -z`,
/// `-100 <= z <= -1`.
fn create_test_frustum() -> Frustum {
    let mut frustum = Frustum::new();
    frustum.set_camera_parameters(90.0, 1.0, 1.0, 100.0);
    frustum.set_camera_orientation(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    frustum
}

fn sample_points() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, -10.0),
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(0.0, 0.0, -200.0),
        Vec3::new(5.0, 5.0, -6.0),
        Vec3::new(7.0, 0.0, -6.0),
        Vec3::new(0.0, -7.0, -6.0),
        Vec3::new(-50.0, 20.0, -60.0),
        Vec3::new(0.0, 0.0, -0.5),
        Vec3::new(99.0, -99.0, -99.5),
    ]
}

// ============================================================================
// Uninitialized frustum
// ============================================================================

#[test]
fn test_uninitialized_frustum_has_no_planes() {
    let frustum = Frustum::new();

    assert!(!frustum.is_initialized());
    assert!(frustum.planes().is_empty());
    assert!(frustum.plane(PLANE_NEAR).is_none());
    assert!(frustum.corners().is_none());
    assert_eq!(format!("{}", frustum), "");
}

#[test]
fn test_uninitialized_frustum_accepts_everything() {
    let frustum = Frustum::new();

    for point in sample_points() {
        assert!(frustum.point_in_frustum(point));
        assert!(frustum.sphere_in_frustum(point, 0.0));
        assert!(frustum.sphere_in_frustum_without_near_far(point, 1.0));
    }
    let far_away = AABB::new(Vec3::splat(1.0e6), Vec3::splat(1.0e6 + 1.0));
    assert!(frustum.bounds_in_frustum(&far_away));
    assert_eq!(frustum.classify_bounds(&far_away), Containment::Inside);
}

// ============================================================================
// Projection parameters
// ============================================================================

#[test]
fn test_frustum_default_parameters() {
    let frustum = Frustum::default();
    assert_eq!(*frustum.parameters(), ProjectionParameters::default());
    assert_eq!(*frustum.extents(), ProjectionParameters::default().extents());
}

#[test]
fn test_set_camera_parameters_updates_extents() {
    let mut frustum = Frustum::new();
    frustum.set_camera_parameters(90.0, 2.0, 1.0, 10.0);

    assert_eq!(frustum.parameters().far, 10.0);
    assert!((frustum.extents().near_half_width - 2.0).abs() < 1e-6);
    assert!((frustum.extents().far_half_height - 10.0).abs() < 1e-5);
}

#[test]
fn test_set_camera_parameters_is_not_retroactive() {
    let mut frustum = create_test_frustum();
    let beyond_far = Vec3::new(0.0, 0.0, -150.0);
    let planes_before = frustum.planes().to_vec();

    frustum.set_camera_parameters(90.0, 1.0, 1.0, 200.0);
    assert_eq!(frustum.planes(), planes_before.as_slice());
    assert!(!frustum.point_in_frustum(beyond_far));

    frustum.set_camera_orientation(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    assert!(frustum.point_in_frustum(beyond_far));
}

#[test]
fn test_try_set_camera_parameters() {
    let mut frustum = Frustum::new();

    assert!(frustum.try_set_camera_parameters(45.0, 16.0 / 9.0, 0.1, 500.0).is_ok());
    assert_eq!(frustum.parameters().far, 500.0);

    let result = frustum.try_set_camera_parameters(45.0, 1.0, 10.0, 1.0);
    assert!(matches!(result, Err(Error::InvalidProjection(_))));
    // Previous parameters are kept
    assert_eq!(frustum.parameters().near, 0.1);
    assert_eq!(frustum.parameters().far, 500.0);
}

#[test]
fn test_invalid_parameters_are_stored_unchecked() {
    let mut frustum = Frustum::new();
    frustum.set_camera_parameters(90.0, 1.0, 10.0, 1.0);

    assert_eq!(frustum.parameters().near, 10.0);
    assert_eq!(frustum.parameters().far, 1.0);
}

// ============================================================================
// Plane construction
// ============================================================================

#[test]
fn test_orientation_builds_six_unit_planes() {
    let frustum = create_test_frustum();

    assert!(frustum.is_initialized());
    assert_eq!(frustum.planes().len(), 6);
    for plane in frustum.planes() {
        assert!((plane.normal.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_repeated_orientation_keeps_six_planes() {
    let mut frustum = create_test_frustum();

    for i in 0..10 {
        let angle = i as f32 * 0.3;
        let direction = Vec3::new(angle.sin(), 0.0, -angle.cos());
        frustum.set_camera_orientation(Vec3::new(i as f32, 0.0, 0.0), direction, Vec3::Y);
        assert_eq!(frustum.planes().len(), 6);
    }
}

#[test]
fn test_orientation_update_replaces_planes() {
    let mut frustum = create_test_frustum();
    let ahead = Vec3::new(0.0, 0.0, -10.0);
    assert!(frustum.point_in_frustum(ahead));

    // Turn around: the same point is now behind the camera
    frustum.set_camera_orientation(Vec3::ZERO, Vec3::Z, Vec3::Y);
    assert!(!frustum.point_in_frustum(ahead));
    assert!(frustum.point_in_frustum(Vec3::new(0.0, 0.0, 10.0)));
}

#[test]
fn test_plane_facing_by_index() {
    let frustum = create_test_frustum();
    let normal = |index: usize| frustum.plane(index).unwrap().normal;
    let h = std::f32::consts::FRAC_1_SQRT_2;

    assert!(normal(PLANE_TOP).abs_diff_eq(Vec3::new(0.0, -h, -h), 1e-5));
    assert!(normal(PLANE_BOTTOM).abs_diff_eq(Vec3::new(0.0, h, -h), 1e-5));
    assert!(normal(PLANE_LEFT).abs_diff_eq(Vec3::new(h, 0.0, -h), 1e-5));
    assert!(normal(PLANE_RIGHT).abs_diff_eq(Vec3::new(-h, 0.0, -h), 1e-5));
    assert!(normal(PLANE_NEAR).abs_diff_eq(Vec3::NEG_Z, 1e-5));
    assert!(normal(PLANE_FAR).abs_diff_eq(Vec3::Z, 1e-5));

    assert!((frustum.plane(PLANE_NEAR).unwrap().d + 1.0).abs() < 1e-5);
    assert!((frustum.plane(PLANE_FAR).unwrap().d - 100.0).abs() < 1e-3);
}

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_TOP, 0);
    assert_eq!(PLANE_BOTTOM, 1);
    assert_eq!(PLANE_LEFT, 2);
    assert_eq!(PLANE_RIGHT, 3);
    assert_eq!(PLANE_NEAR, 4);
    assert_eq!(PLANE_FAR, 5);
}

#[test]
fn test_interior_point_is_in_front_of_every_plane() {
    let mut frustum = Frustum::new();
    frustum.set_camera_parameters(60.0, 1.5, 0.5, 40.0);
    let position = Vec3::new(4.0, 2.0, -3.0);
    let direction = Vec3::new(1.0, -0.3, 0.5).normalize();
    frustum.set_camera_orientation(position, direction, Vec3::Y);

    let interior = position + direction * 20.0;
    for plane in frustum.planes() {
        assert_eq!(plane.test_point(interior), PlaneSide::Front);
    }
}

#[test]
fn test_corners_match_last_orientation() {
    let frustum = create_test_frustum();
    let params = frustum.parameters();
    let basis = CameraBasis::from_orientation(Vec3::NEG_Z, Vec3::Y);
    let expected = FrustumCorners::compute(Vec3::ZERO, &basis, frustum.extents(), params.near, params.far);

    assert_eq!(frustum.corners(), Some(&expected));
}

#[test]
fn test_degenerate_orientation_produces_invalid_planes() {
    let mut frustum = create_test_frustum();

    // Up parallel to the look direction
    frustum.set_camera_orientation(Vec3::ZERO, Vec3::Y, Vec3::Y);

    assert_eq!(frustum.planes().len(), 6);
    assert!(frustum.planes().iter().all(|plane| !plane.is_finite()));
}

#[test]
fn test_try_set_camera_orientation() {
    let mut frustum = create_test_frustum();
    let planes_before = frustum.planes().to_vec();

    let result = frustum.try_set_camera_orientation(Vec3::ZERO, Vec3::Y, Vec3::Y);
    assert!(matches!(result, Err(Error::DegenerateOrientation(_))));
    assert_eq!(frustum.planes(), planes_before.as_slice());

    let result = frustum.try_set_camera_orientation(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::NEG_Z, Vec3::Y);
    assert!(matches!(result, Err(Error::DegenerateOrientation(_))));

    assert!(frustum.try_set_camera_orientation(Vec3::ZERO, Vec3::X, Vec3::Y).is_ok());
    assert!(frustum.point_in_frustum(Vec3::new(10.0, 0.0, 0.0)));
}

// ============================================================================
// Frustum::point_in_frustum
// ============================================================================

#[test]
fn test_point_reference_scenario() {
    let frustum = create_test_frustum();

    assert!(frustum.point_in_frustum(Vec3::new(0.0, 0.0, -10.0)));
    assert!(!frustum.point_in_frustum(Vec3::new(0.0, 0.0, 10.0)));
    assert!(!frustum.point_in_frustum(Vec3::new(0.0, 0.0, -200.0)));
}

#[test]
fn test_point_lateral_bounds() {
    let frustum = create_test_frustum();

    assert!(frustum.point_in_frustum(Vec3::new(5.0, 5.0, -6.0)));
    assert!(!frustum.point_in_frustum(Vec3::new(7.0, 0.0, -6.0)));
    assert!(!frustum.point_in_frustum(Vec3::new(-7.0, 0.0, -6.0)));
    assert!(!frustum.point_in_frustum(Vec3::new(0.0, 7.0, -6.0)));
    assert!(!frustum.point_in_frustum(Vec3::new(0.0, -7.0, -6.0)));
}

#[test]
fn test_point_between_camera_and_near_plane_is_outside() {
    let frustum = create_test_frustum();
    assert!(!frustum.point_in_frustum(Vec3::new(0.0, 0.0, -0.5)));
}

#[test]
fn test_point_on_near_plane_is_inside() {
    let frustum = create_test_frustum();
    let on_near = Vec3::new(0.0, 0.0, -1.0);

    assert_eq!(frustum.plane(PLANE_NEAR).unwrap().test_point(on_near), PlaneSide::OnPlane);
    assert!(frustum.point_in_frustum(on_near));
}

#[test]
fn test_point_with_rotated_camera() {
    let mut frustum = create_test_frustum();
    frustum.set_camera_orientation(Vec3::new(0.0, 5.0, 0.0), Vec3::X, Vec3::Y);

    assert!(frustum.point_in_frustum(Vec3::new(10.0, 5.0, 0.0)));
    assert!(!frustum.point_in_frustum(Vec3::new(-10.0, 5.0, 0.0)));
    assert!(!frustum.point_in_frustum(Vec3::new(0.0, 5.0, -10.0)));
}

// ============================================================================
// Frustum::sphere_in_frustum
// ============================================================================

#[test]
fn test_zero_radius_sphere_matches_point() {
    let frustum = create_test_frustum();

    for point in sample_points() {
        assert_eq!(
            frustum.sphere_in_frustum(point, 0.0),
            frustum.point_in_frustum(point),
            "mismatch at {}",
            point
        );
    }
}

#[test]
fn test_sphere_straddling_near_plane() {
    let frustum = create_test_frustum();
    let center = Vec3::new(0.0, 0.0, 0.5);

    // Signed distance to the near plane is -1.5
    assert!(!frustum.sphere_in_frustum(center, 1.0));
    assert!(frustum.sphere_in_frustum(center, 2.0));
}

#[test]
fn test_sphere_beyond_far_plane() {
    let frustum = create_test_frustum();
    let center = Vec3::new(0.0, 0.0, -105.0);

    assert!(!frustum.sphere_in_frustum(center, 3.0));
    assert!(frustum.sphere_in_frustum(center, 6.0));
}

#[test]
fn test_sphere_near_corner_is_conservative() {
    let frustum = create_test_frustum();

    // 14.1 units outside both the top and right planes, 28.3 units from the
    // nearest frustum edge: geometrically disjoint, still reported visible.
    let center = Vec3::new(120.0, 120.0, -100.0);
    assert!(!frustum.point_in_frustum(center));
    assert!(frustum.sphere_in_frustum(center, 15.0));
}

#[test]
fn test_sphere_without_near_far_matches_sphere() {
    let uninitialized = Frustum::new();
    let frustum = create_test_frustum();

    for point in sample_points() {
        for radius in [0.0, 0.5, 1.0, 4.0, 50.0] {
            assert_eq!(
                frustum.sphere_in_frustum_without_near_far(point, radius),
                frustum.sphere_in_frustum(point, radius),
            );
            assert_eq!(
                uninitialized.sphere_in_frustum_without_near_far(point, radius),
                uninitialized.sphere_in_frustum(point, radius),
            );
        }
    }
    // Near and far planes are still tested
    assert!(!frustum.sphere_in_frustum_without_near_far(Vec3::new(0.0, 0.0, -200.0), 1.0));
    assert!(!frustum.sphere_in_frustum_without_near_far(Vec3::new(0.0, 0.0, 10.0), 1.0));
}

// ============================================================================
// Frustum::bounds_in_frustum / classify_bounds
// ============================================================================

#[test]
fn test_bounds_inside_frustum() {
    let frustum = create_test_frustum();
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -11.0), Vec3::new(1.0, 1.0, -9.0));

    assert!(frustum.bounds_in_frustum(&aabb));
    assert_eq!(frustum.classify_bounds(&aabb), Containment::Inside);
}

#[test]
fn test_bounds_beyond_far_plane() {
    let frustum = create_test_frustum();
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -120.0), Vec3::new(1.0, 1.0, -110.0));

    assert!(!frustum.bounds_in_frustum(&aabb));
    assert_eq!(frustum.classify_bounds(&aabb), Containment::Outside);
}

#[test]
fn test_bounds_behind_camera() {
    let frustum = create_test_frustum();
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 12.0));

    assert!(!frustum.bounds_in_frustum(&aabb));
}

#[test]
fn test_bounds_enclosing_camera() {
    let frustum = create_test_frustum();
    let aabb = AABB::new(Vec3::splat(-5.0), Vec3::splat(5.0));

    assert!(frustum.bounds_in_frustum(&aabb));
    assert_eq!(frustum.classify_bounds(&aabb), Containment::Partial);
}

#[test]
fn test_bounds_straddling_side_plane() {
    let frustum = create_test_frustum();
    let aabb = AABB::new(Vec3::new(5.0, -1.0, -11.0), Vec3::new(15.0, 1.0, -9.0));

    assert!(frustum.bounds_in_frustum(&aabb));
    assert_eq!(frustum.classify_bounds(&aabb), Containment::Partial);
}

#[test]
fn test_bounds_larger_than_frustum() {
    let frustum = create_test_frustum();
    let aabb = AABB::new(Vec3::splat(-1000.0), Vec3::splat(1000.0));

    assert!(frustum.bounds_in_frustum(&aabb));
    assert_eq!(frustum.classify_bounds(&aabb), Containment::Partial);
}

#[test]
fn test_classify_agrees_with_bounds_test() {
    let frustum = create_test_frustum();

    for point in sample_points() {
        for half in [0.1, 2.0, 30.0] {
            let aabb = AABB::new(point - half, point + half);
            let visible = frustum.bounds_in_frustum(&aabb);
            assert_eq!(frustum.classify_bounds(&aabb) != Containment::Outside, visible);
        }
    }
}

// ============================================================================
// Frustum::calculate_pick_ray
// ============================================================================

#[test]
fn test_pick_ray_through_screen_center() {
    let mut frustum = Frustum::new();
    frustum.set_camera_parameters(60.0, 4.0 / 3.0, 0.5, 100.0);
    let position = Vec3::new(3.0, 2.0, 5.0);
    let direction = Vec3::new(1.0, -0.5, -1.0).normalize();

    let ray = frustum.calculate_pick_ray(800.0, 600.0, 400.0, 300.0, position, direction, Vec3::Y);

    assert!(ray.direction.abs_diff_eq(direction, 1e-5));
    assert!(ray.origin.abs_diff_eq(position + direction * 0.5, 1e-5));
}

#[test]
fn test_pick_ray_origin_on_near_plane() {
    let mut frustum = create_test_frustum();
    let position = Vec3::new(-2.0, 1.0, 4.0);
    let direction = Vec3::new(0.2, 0.1, -1.0).normalize();
    frustum.set_camera_orientation(position, direction, Vec3::Y);

    let near = *frustum.plane(PLANE_NEAR).unwrap();
    for (x, y) in [(400.0, 300.0), (0.0, 0.0), (800.0, 600.0), (123.0, 456.0)] {
        let ray = frustum.calculate_pick_ray(800.0, 600.0, x, y, position, direction, Vec3::Y);
        assert!(near.distance(ray.origin).abs() < 1e-4);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        assert!(ray.direction.dot(direction) > 0.0);
    }
}

#[test]
fn test_pick_ray_window_corners() {
    let frustum = create_test_frustum();
    let corners = *frustum.corners().unwrap();

    // Normalized y grows with mouse_y and is applied along camera up
    let top_left_pixel = frustum.calculate_pick_ray(640.0, 480.0, 0.0, 0.0, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    assert!(top_left_pixel.origin.abs_diff_eq(corners.near_bottom_left, 1e-5));

    let bottom_right_pixel = frustum.calculate_pick_ray(640.0, 480.0, 640.0, 480.0, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    assert!(bottom_right_pixel.origin.abs_diff_eq(corners.near_top_right, 1e-5));
    assert!(bottom_right_pixel.direction.abs_diff_eq(Vec3::new(1.0, 1.0, -1.0).normalize(), 1e-5));
}

#[test]
fn test_pick_ray_without_planes() {
    let frustum = Frustum::with_parameters(ProjectionParameters::new(90.0, 1.0, 2.0, 50.0));

    let ray = frustum.calculate_pick_ray(100.0, 100.0, 50.0, 50.0, Vec3::ZERO, Vec3::X, Vec3::Y);

    assert!(!frustum.is_initialized());
    assert!(ray.origin.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));
    assert!(ray.direction.abs_diff_eq(Vec3::X, 1e-5));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_lists_one_plane_per_line() {
    let frustum = create_test_frustum();
    let text = format!("{}", frustum);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    for (line, plane) in lines.iter().zip(frustum.planes()) {
        assert_eq!(*line, format!("{}", plane));
    }
}
