use glam::{Mat4, Quat, Vec3};
use super::*;

/// Test owner recording every notification it receives
#[derive(Default)]
struct Recorder {
    orientation: Orientation,
    changes: Vec<ChangeType>,
}

impl Oriented for Recorder {
    fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    fn orientation_mut(&mut self) -> &mut Orientation {
        &mut self.orientation
    }

    fn on_state_change(&mut self, change: ChangeType) {
        self.changes.push(change);
    }
}

/// Owner that keeps the default no-op hook
struct Silent {
    orientation: Orientation,
}

impl Oriented for Silent {
    fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    fn orientation_mut(&mut self) -> &mut Orientation {
        &mut self.orientation
    }
}

// ============================================================================
// One notification per mutation, with the right bits
// ============================================================================

#[test]
fn test_motion_mutators_fire_motion() {
    let mut r = Recorder::default();
    r.set_position(Vec3::ONE);
    r.set_position_xyz(1.0, 2.0, 3.0);
    r.move_forward(1.0);
    r.strafe(1.0);
    r.fly(1.0);

    assert_eq!(r.changes, vec![ChangeType::MOTION; 5]);
    assert_eq!(r.orientation().position(), Vec3::new(2.0, 3.0, 4.0));
}

#[test]
fn test_rotation_mutators_fire_rotation() {
    let mut r = Recorder::default();
    r.yaw(10.0);
    r.pitch(10.0);
    r.roll(10.0);
    r.set_angle(Quat::IDENTITY);
    r.set_angle_degrees(Vec3::new(0.0, 90.0, 0.0));
    r.set_ulr_vectors(Vec3::Y, Vec3::Z, Vec3::X);
    r.set_to_rotation(&Orientation::new());
    r.point(Vec3::new(0.0, 0.0, 5.0));
    r.point_xyz(5.0, 0.0, 0.0);

    assert_eq!(r.changes, vec![ChangeType::ROTATION; 9]);
}

#[test]
fn test_set_angle_degrees_fires_once() {
    let mut r = Recorder::default();
    r.set_angle_degrees(Vec3::new(10.0, 20.0, 30.0));
    assert_eq!(r.changes.len(), 1);
}

#[test]
fn test_transformation_fires_combined_bits_once() {
    let mut r = Recorder::default();
    r.set_to_transformation(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));

    assert_eq!(r.changes, vec![ChangeType::MOTION | ChangeType::ROTATION]);
    assert_eq!(r.orientation().position(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_binding_fires_combined_bits() {
    let mut r = Recorder::default();
    r.set_binding_matrix(Mat4::IDENTITY);
    r.remove_binding();

    assert_eq!(r.changes.len(), 2);
    assert!(r.changes.iter().all(|c| *c == (ChangeType::MOTION | ChangeType::ROTATION)));
    assert!(!r.orientation().is_bound());
}

#[test]
fn test_point_at_position_does_not_notify() {
    let mut r = Recorder::default();
    assert!(!r.point(Vec3::ZERO));
    assert!(r.changes.is_empty());
}

#[test]
fn test_orientation_mut_bypasses_hook() {
    let mut r = Recorder::default();
    r.orientation_mut().set_position(Vec3::X);
    assert!(r.changes.is_empty());
    assert_eq!(r.orientation().position(), Vec3::X);
}

#[test]
fn test_default_hook_is_noop() {
    let mut s = Silent { orientation: Orientation::new() };
    s.yaw(90.0);
    s.move_forward(2.0);
    assert!(s.orientation().position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));
}
