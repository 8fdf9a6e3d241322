/// Oriented: state-change observer seam for owners of an `Orientation`.
///
/// Any type that embeds an `Orientation` implements `Oriented` to get the
/// full mutator set. Every provided mutator applies exactly one change to
/// the embedded orientation and then calls `on_state_change` exactly once
/// with the matching `ChangeType` bits. Override `on_state_change` to
/// invalidate derived state (the camera marks its matrices dirty).

use glam::{Mat4, Quat, Vec3};
use super::orientation::{ChangeType, Orientation};

pub trait Oriented {
    /// Embedded orientation (read-only)
    fn orientation(&self) -> &Orientation;

    /// Embedded orientation (mutable). Changes made through this bypass
    /// `on_state_change`; prefer the provided mutators.
    fn orientation_mut(&mut self) -> &mut Orientation;

    /// Called after every mutation. Default: nothing.
    fn on_state_change(&mut self, _change: ChangeType) {}

    // ===== MOTION =====

    fn set_position(&mut self, position: Vec3) {
        self.orientation_mut().set_position(position);
        self.on_state_change(ChangeType::MOTION);
    }

    fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.set_position(Vec3::new(x, y, z));
    }

    /// Translate along look.
    fn move_forward(&mut self, units: f32) {
        self.orientation_mut().move_forward(units);
        self.on_state_change(ChangeType::MOTION);
    }

    /// Translate along right.
    fn strafe(&mut self, units: f32) {
        self.orientation_mut().strafe(units);
        self.on_state_change(ChangeType::MOTION);
    }

    /// Translate along up.
    fn fly(&mut self, units: f32) {
        self.orientation_mut().fly(units);
        self.on_state_change(ChangeType::MOTION);
    }

    // ===== ROTATION =====

    /// Look at `target`. Returns `false`, without notification, when
    /// `target == position`.
    fn point(&mut self, target: Vec3) -> bool {
        let turned = self.orientation_mut().point(target);
        if turned {
            self.on_state_change(ChangeType::ROTATION);
        }
        turned
    }

    fn point_xyz(&mut self, x: f32, y: f32, z: f32) -> bool {
        self.point(Vec3::new(x, y, z))
    }

    fn set_angle(&mut self, rotation: Quat) {
        self.orientation_mut().set_angle(rotation);
        self.on_state_change(ChangeType::ROTATION);
    }

    /// Yaw/pitch/roll from degrees in one notification.
    fn set_angle_degrees(&mut self, angles: Vec3) {
        self.orientation_mut().set_angle_degrees(angles);
        self.on_state_change(ChangeType::ROTATION);
    }

    fn set_to_rotation(&mut self, other: &Orientation) {
        self.orientation_mut().set_to_rotation(other);
        self.on_state_change(ChangeType::ROTATION);
    }

    fn set_ulr_vectors(&mut self, up: Vec3, look: Vec3, right: Vec3) {
        self.orientation_mut().set_ulr_vectors(up, look, right);
        self.on_state_change(ChangeType::ROTATION);
    }

    fn yaw(&mut self, degrees: f32) {
        self.orientation_mut().yaw(degrees);
        self.on_state_change(ChangeType::ROTATION);
    }

    fn pitch(&mut self, degrees: f32) {
        self.orientation_mut().pitch(degrees);
        self.on_state_change(ChangeType::ROTATION);
    }

    fn roll(&mut self, degrees: f32) {
        self.orientation_mut().roll(degrees);
        self.on_state_change(ChangeType::ROTATION);
    }

    // ===== MOTION + ROTATION =====

    /// Position and basis from a world matrix, one combined notification.
    fn set_to_transformation(&mut self, transform: Mat4) {
        self.orientation_mut().set_to_transformation(transform);
        self.on_state_change(ChangeType::MOTION | ChangeType::ROTATION);
    }

    fn set_binding_matrix(&mut self, binding: Mat4) {
        self.orientation_mut().set_binding_matrix(binding);
        self.on_state_change(ChangeType::MOTION | ChangeType::ROTATION);
    }

    fn remove_binding(&mut self) {
        self.orientation_mut().remove_binding();
        self.on_state_change(ChangeType::MOTION | ChangeType::ROTATION);
    }
}

#[cfg(test)]
#[path = "oriented_tests.rs"]
mod tests;
