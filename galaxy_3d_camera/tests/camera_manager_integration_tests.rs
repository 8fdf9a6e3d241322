//! Integration tests for the camera registry
//!
//! Run with: cargo test --test camera_manager_integration_tests

use galaxy_3d_camera::galaxy3d::{CameraConfig, CameraManager, Error, Oriented};
use galaxy_3d_camera::glam::Vec3;

#[test]
fn test_integration_split_screen_cameras() {
    let mut manager = CameraManager::new();
    let left = manager.create_camera(Some("player1")).unwrap();
    let right = manager.create_camera(Some("player2")).unwrap();

    manager.camera_mut(left).unwrap().set_position_xyz(-10.0, 0.0, 0.0);
    manager.camera_mut(right).unwrap().set_position_xyz(10.0, 0.0, 0.0);
    manager.camera_mut(right).unwrap().yaw(180.0);

    // Half-width viewports
    manager.render_all(960, 1080);

    let p1 = manager.camera_by_name("player1").unwrap();
    let p2 = manager.camera_by_name("player2").unwrap();
    assert!((p1.aspect() - 960.0 / 1080.0).abs() < 1e-6);
    assert!(p1.check_point_in_frustum(Vec3::new(-10.0, 0.0, 20.0)));
    assert!(!p1.check_point_in_frustum(Vec3::new(10.0, 0.0, -20.0)));
    assert!(p2.check_point_in_frustum(Vec3::new(10.0, 0.0, -20.0)));
    assert!(!p2.check_point_in_frustum(Vec3::new(-10.0, 0.0, 20.0)));
}

#[test]
fn test_integration_camera_outlives_registry_entry() {
    let mut manager = CameraManager::new();
    let key = manager.create_camera(Some("cutscene")).unwrap();
    manager.camera_mut(key).unwrap().set_position_xyz(0.0, 5.0, 0.0);

    let mut camera = manager.remove_camera(key).unwrap();
    camera.render(640, 360);
    assert_eq!(camera.orientation().position(), Vec3::new(0.0, 5.0, 0.0));
    assert!(camera.check_point_in_frustum(Vec3::new(0.0, 5.0, 10.0)));

    assert_eq!(manager.camera_count(), 1);
    assert!(manager.camera_by_name("cutscene").is_none());
}

#[test]
fn test_integration_churn_keeps_keys_distinct() {
    let mut manager = CameraManager::with_config(CameraConfig {
        max_range: 1000.0,
        ..Default::default()
    })
    .unwrap();

    let mut removed = Vec::new();
    for i in 0..32 {
        let name = format!("camera{}", i);
        let key = manager.create_camera(Some(&name)).unwrap();
        if i % 2 == 0 {
            manager.remove_camera(key).unwrap();
            removed.push(key);
        }
    }

    assert_eq!(manager.camera_count(), 1 + 16);
    for key in removed {
        assert!(!manager.contains(key));
        assert_eq!(manager.rename_camera(key, Some("ghost")), Err(Error::InvalidHandle));
    }
    for (_, camera) in manager.iter() {
        assert_eq!(camera.max_range(), 1000.0);
    }
}
