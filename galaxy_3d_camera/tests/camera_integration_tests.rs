//! Integration tests for cameras driving visibility
//!
//! Builds small scenes of bounding volumes and checks what a camera keeps
//! after culling, frame by frame.
//!
//! Run with: cargo test --test camera_integration_tests

use galaxy_3d_camera::galaxy3d::{Camera, CameraConfig, CameraUniform, Oriented, ProjectionType};
use galaxy_3d_camera::glam::{Mat4, Vec3};

// ============================================================================
// HELPERS
// ============================================================================

/// 12 spheres of radius 0.5 on a horizontal ring of radius 20, every 30°.
/// Angle 0 is +Z, angle 90 is +X.
fn ring_of_spheres() -> Vec<(f32, Vec3)> {
    (0..12)
        .map(|i| {
            let degrees = i as f32 * 30.0;
            let (sin, cos) = degrees.to_radians().sin_cos();
            (degrees, Vec3::new(20.0 * sin, 0.0, 20.0 * cos))
        })
        .collect()
}

fn create_wide_camera() -> Camera {
    let config = CameraConfig {
        fov_degrees: 90.0,
        min_range: 1.0,
        max_range: 100.0,
        ..Default::default()
    };
    let mut camera = Camera::with_config(&config).unwrap();
    camera.render(100, 100);
    camera
}

fn visible_angles(camera: &Camera) -> Vec<f32> {
    ring_of_spheres()
        .into_iter()
        .filter(|(_, center)| camera.check_sphere_in_frustum(*center, 0.5))
        .map(|(degrees, _)| degrees)
        .collect()
}

// ============================================================================
// CULLING
// ============================================================================

#[test]
fn test_integration_ring_culling_forward() {
    let camera = create_wide_camera();
    assert_eq!(visible_angles(&camera), vec![0.0, 30.0, 330.0]);
}

#[test]
fn test_integration_ring_culling_follows_yaw() {
    let mut camera = create_wide_camera();

    camera.yaw(90.0);
    camera.render(100, 100);
    assert_eq!(visible_angles(&camera), vec![60.0, 90.0, 120.0]);

    camera.yaw(90.0);
    camera.render(100, 100);
    assert_eq!(visible_angles(&camera), vec![150.0, 180.0, 210.0]);
}

#[test]
fn test_integration_culling_is_stale_until_render() {
    let mut camera = create_wide_camera();
    camera.yaw(180.0);
    assert_eq!(visible_angles(&camera), vec![0.0, 30.0, 330.0]);

    camera.render(100, 100);
    assert_eq!(visible_angles(&camera), vec![150.0, 180.0, 210.0]);
}

#[test]
fn test_integration_wide_viewport_sees_more() {
    let mut camera = create_wide_camera();
    // Aspect 3 widens the horizontal FOV to ~143°
    camera.render(300, 100);
    assert_eq!(visible_angles(&camera), vec![0.0, 30.0, 60.0, 300.0, 330.0]);
}

#[test]
fn test_integration_range_limits_culling() {
    let mut camera = create_wide_camera();
    camera.set_range(1.0, 10.0).unwrap();
    camera.render(100, 100);
    assert!(visible_angles(&camera).is_empty());
}

#[test]
fn test_integration_point_at_target_keeps_it_visible() {
    let mut camera = create_wide_camera();
    let target = Vec3::new(5.0, 3.0, 40.0);

    for position in [
        Vec3::new(0.0, 0.0, -30.0),
        Vec3::new(60.0, 10.0, 40.0),
        Vec3::new(5.0, 3.0, 80.0),
        Vec3::new(-20.0, -40.0, 0.0),
    ] {
        camera.set_position(position);
        assert!(camera.point(target));
        camera.render(100, 100);
        assert!(camera.check_point_in_frustum(target), "target lost from {:?}", position);
        assert!(camera.check_cube_in_frustum(target, 1.0));
    }
}

#[test]
fn test_integration_bound_camera_follows_parent() {
    let mut camera = create_wide_camera();
    // Parent moved 50 units back: everything appears 50 units farther away
    camera.set_binding_matrix(Mat4::from_translation(Vec3::new(0.0, 0.0, 50.0)));
    camera.render(100, 100);

    assert!(!camera.check_point_in_frustum(Vec3::new(0.0, 0.0, 60.0)));
    assert!(camera.check_point_in_frustum(Vec3::new(0.0, 0.0, 40.0)));
}

#[test]
fn test_integration_orthogonal_culling_ignores_distance_falloff() {
    let mut camera = create_wide_camera();
    camera.set_projection_type(ProjectionType::Orthogonal);
    camera.render(100, 100);

    // Same lateral offset, near and far: both inside a 100x100 box
    assert!(camera.check_box_in_frustum(Vec3::new(45.0, 0.0, 5.0), Vec3::splat(1.0)));
    assert!(camera.check_box_in_frustum(Vec3::new(45.0, 0.0, 95.0), Vec3::splat(1.0)));
    assert!(!camera.check_box_in_frustum(Vec3::new(60.0, 0.0, 50.0), Vec3::splat(1.0)));
}

// ============================================================================
// UNIFORM UPLOAD
// ============================================================================

#[test]
fn test_integration_uniform_bytes_match_matrices() {
    let mut camera = create_wide_camera();
    camera.set_position_xyz(1.0, 2.0, 3.0);
    camera.render(100, 100);

    let uniform = camera.uniform();
    let bytes = uniform.as_bytes();
    assert_eq!(bytes.len(), std::mem::size_of::<CameraUniform>());

    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(&floats[..16], &camera.view_matrix().to_cols_array()[..]);
    // position block follows the three matrices
    assert_eq!(&floats[48..52], &[1.0, 2.0, 3.0, 1.0]);
}
