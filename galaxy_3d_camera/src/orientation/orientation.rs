/// Orientation: rigid-body pose in 3D space.
///
/// A position plus an orthonormal, left-handed basis (right, up, look).
/// The default pose sits at the origin with right = +X, up = +Y, look = +Z.
///
/// An optional binding matrix attaches the pose to a parent frame; it is
/// applied on top of the local transformation by
/// `compute_bound_transformation()` and by the camera's view matrix.
///
/// `Orientation` itself notifies nobody. Owners that need to react to
/// changes implement [`Oriented`](super::Oriented), whose mutators fire
/// `on_state_change` with the matching [`ChangeType`].

use bitflags::bitflags;
use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
use crate::math::{self, EPSILON, WORLD_UP};

bitflags! {
    /// Kind of change applied to an orientation. Bits combine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChangeType: u32 {
        /// Position changed
        const MOTION = 1;
        /// Basis vectors changed
        const ROTATION = 2;
    }
}

/// Position + orthonormal up/look/right basis + optional parent binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    position: Vec3,
    right: Vec3,
    up: Vec3,
    look: Vec3,
    binding: Option<Mat4>,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            right: Vec3::X,
            up: Vec3::Y,
            look: Vec3::Z,
            binding: None,
        }
    }
}

impl Orientation {
    /// Identity pose at the origin, unbound.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== POSITION =====

    /// Set the absolute position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the absolute position from components.
    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.set_position(Vec3::new(x, y, z));
    }

    /// Translate along the look vector.
    pub fn move_forward(&mut self, units: f32) {
        self.position += self.look * units;
    }

    /// Translate along the right vector.
    pub fn strafe(&mut self, units: f32) {
        self.position += self.right * units;
    }

    /// Translate along the up vector.
    pub fn fly(&mut self, units: f32) {
        self.position += self.up * units;
    }

    // ===== ROTATION =====

    /// Turn the basis to look at `target`.
    ///
    /// `right` is derived from the world up axis; when `look` is parallel to
    /// it the current right vector (re-orthogonalized) is kept instead.
    ///
    /// Requires `target != position`. A target on top of the position leaves
    /// the basis untouched and returns `false`.
    pub fn point(&mut self, target: Vec3) -> bool {
        let Some(look) = (target - self.position).try_normalize() else {
            crate::engine_warn!(
                "galaxy3d::Orientation",
                "point() target {:?} coincides with position, ignored",
                target
            );
            return false;
        };

        let right = WORLD_UP
            .cross(look)
            .try_normalize()
            .or_else(|| (self.right - look * self.right.dot(look)).try_normalize())
            .unwrap_or(Vec3::X);

        self.look = look;
        self.right = right;
        self.up = look.cross(right);
        self.orthonormalize();
        true
    }

    /// Turn the basis to look at `(x, y, z)`. See [`point`](Self::point).
    pub fn point_xyz(&mut self, x: f32, y: f32, z: f32) -> bool {
        self.point(Vec3::new(x, y, z))
    }

    /// Set the basis from a quaternion applied to the canonical axes.
    pub fn set_angle(&mut self, rotation: Quat) {
        let rotation = rotation.normalize();
        self.right = rotation * Vec3::X;
        self.up = rotation * Vec3::Y;
        self.look = rotation * Vec3::Z;
        self.orthonormalize();
    }

    /// Set the basis from angles in degrees: yaw by `angles.y`, then pitch by
    /// `angles.x`, then roll by `angles.z`, starting from the identity basis.
    ///
    /// Each angle is wrapped into (-180, 180] first.
    pub fn set_angle_degrees(&mut self, angles: Vec3) {
        self.right = Vec3::X;
        self.up = Vec3::Y;
        self.look = Vec3::Z;

        self.yaw(math::wrap_degrees(angles.y));
        self.pitch(math::wrap_degrees(angles.x));
        self.roll(math::wrap_degrees(angles.z));
    }

    /// Copy the basis (not the position) of another orientation.
    pub fn set_to_rotation(&mut self, other: &Orientation) {
        self.right = other.right;
        self.up = other.up;
        self.look = other.look;
    }

    /// Assign the basis directly.
    ///
    /// The caller is responsible for passing an orthonormal basis; the
    /// vectors are re-orthonormalized (look-first) regardless.
    pub fn set_ulr_vectors(&mut self, up: Vec3, look: Vec3, right: Vec3) {
        self.up = up;
        self.look = look;
        self.right = right;
        self.orthonormalize();
    }

    /// Decompose a world transformation into position and basis.
    ///
    /// Columns 0, 1, 2 are right, up, look (scale is stripped), column 3 is
    /// the position.
    pub fn set_to_transformation(&mut self, transform: Mat4) {
        self.right = transform.x_axis.truncate().try_normalize().unwrap_or(Vec3::X);
        self.up = transform.y_axis.truncate().try_normalize().unwrap_or(Vec3::Y);
        self.look = transform.z_axis.truncate().try_normalize().unwrap_or(Vec3::Z);
        self.position = transform.w_axis.truncate();
        self.orthonormalize();
    }

    /// Rotate right and look around up. Positive turns look toward right.
    pub fn yaw(&mut self, degrees: f32) {
        let rotation = Quat::from_axis_angle(self.up, degrees.to_radians());
        self.right = rotation * self.right;
        self.look = rotation * self.look;
        self.orthonormalize();
    }

    /// Rotate up and look around right. Positive turns look toward -up.
    pub fn pitch(&mut self, degrees: f32) {
        let rotation = Quat::from_axis_angle(self.right, degrees.to_radians());
        self.up = rotation * self.up;
        self.look = rotation * self.look;
        self.orthonormalize();
    }

    /// Rotate up and right around look. Positive turns up toward -right.
    pub fn roll(&mut self, degrees: f32) {
        let rotation = Quat::from_axis_angle(self.look, degrees.to_radians());
        self.right = rotation * self.right;
        self.up = rotation * self.up;
        self.orthonormalize();
    }

    // look-first Gram-Schmidt
    fn orthonormalize(&mut self) {
        self.look = self.look.try_normalize().unwrap_or(Vec3::Z);
        self.up = self.look.cross(self.right).try_normalize().unwrap_or_else(|| {
            self.look.any_orthonormal_vector()
        });
        self.right = self.up.cross(self.look).normalize();
    }

    // ===== GETTERS =====

    /// Position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn position_x(&self) -> f32 {
        self.position.x
    }

    pub fn position_y(&self) -> f32 {
        self.position.y
    }

    pub fn position_z(&self) -> f32 {
        self.position.z
    }

    /// Up basis vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Look (forward) basis vector.
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// Right basis vector.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Angle in degrees between look projected on the YZ plane and +Z.
    ///
    /// Negative when looking upward. Not a true Euler angle.
    pub fn angle_x(&self) -> f32 {
        let angle = math::angle_to_axis(Vec3::new(0.0, self.look.y, self.look.z), Vec3::Z);
        if self.look.y > 0.0 { -angle } else { angle }
    }

    /// Angle in degrees between look projected on the XZ plane and +Z.
    ///
    /// Negative when looking toward -X.
    pub fn angle_y(&self) -> f32 {
        let angle = math::angle_to_axis(Vec3::new(self.look.x, 0.0, self.look.z), Vec3::Z);
        if self.look.x < 0.0 { -angle } else { angle }
    }

    /// Angle in degrees between up projected on the XY plane and +Y.
    ///
    /// Negative when up leans toward +X.
    pub fn angle_z(&self) -> f32 {
        let angle = math::angle_to_axis(Vec3::new(self.up.x, self.up.y, 0.0), Vec3::Y);
        if self.up.x > 0.0 { -angle } else { angle }
    }

    /// `(angle_x, angle_y, angle_z)` in degrees.
    pub fn angle(&self) -> Vec3 {
        Vec3::new(self.angle_x(), self.angle_y(), self.angle_z())
    }

    /// Rotation taking the canonical axes onto the current basis.
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(self.right, self.up, self.look))
    }

    // ===== BINDING =====

    /// Attach this pose to a parent frame.
    pub fn set_binding_matrix(&mut self, binding: Mat4) {
        self.binding = Some(binding);
    }

    /// Detach from the parent frame.
    pub fn remove_binding(&mut self) {
        self.binding = None;
    }

    /// Parent frame, if bound.
    pub fn binding_matrix(&self) -> Option<Mat4> {
        self.binding
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    // ===== TRANSFORMATIONS =====

    /// Local world matrix: columns right, up, look, position.
    pub fn compute_transformation(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.look.extend(0.0),
            self.position.extend(1.0),
        )
    }

    /// Inverse of [`compute_transformation`](Self::compute_transformation).
    ///
    /// Rows are right, up, look; the translation is
    /// `(-right·p, -up·p, -look·p)`. This is the view matrix of a camera
    /// sitting at this pose.
    pub fn compute_inverse_transformation(&self) -> Mat4 {
        let (r, u, l, p) = (self.right, self.up, self.look, self.position);
        Mat4::from_cols(
            Vec4::new(r.x, u.x, l.x, 0.0),
            Vec4::new(r.y, u.y, l.y, 0.0),
            Vec4::new(r.z, u.z, l.z, 0.0),
            Vec4::new(-r.dot(p), -u.dot(p), -l.dot(p), 1.0),
        )
    }

    /// Local world matrix with the binding matrix applied on top.
    pub fn compute_bound_transformation(&self) -> Mat4 {
        let local = self.compute_transformation();
        match self.binding {
            Some(binding) => binding * local,
            None => local,
        }
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
