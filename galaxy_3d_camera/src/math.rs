//! Coordinate-system conventions and small math helpers.
//!
//! # Conventions
//!
//! - **Left-handed** world: +X right, +Y up, +Z forward (`right = up × look`).
//! - Matrices are glam `Mat4`, column-major, applied to **column vectors**
//!   (`clip = projection * view * world * p`). The classic row-vector
//!   notation `_RC` (1-based row R, column C) maps to glam's transposed
//!   storage: `_33` is `z_axis.z`, `_43` is `w_axis.z`, and "row i" of a
//!   row-vector matrix is column i of the glam matrix.
//! - Clip-space depth is **[0, 1]** (near → 0, far → 1).
//! - A fixed correction ([`CLIP_SPACE_CORRECTION`]) flips Y so the target
//!   API's clip space (Y down, Vulkan style) sees the engine's Y-up image
//!   the right way round. A backend with different expectations swaps that
//!   constant, nothing else.
//!
//! Planes are `Vec4(a, b, c, d)` with `a*x + b*y + c*z + d = 0`; the inside
//! half-space is where `plane_dot_coord >= 0`.

use glam::{Mat4, Vec3, Vec4};

/// World up axis used by `Orientation::point`
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Length below which a vector is treated as zero
pub const EPSILON: f32 = 1e-6;

/// Fixed clip-space correction applied to every projection matrix: flips Y.
pub const CLIP_SPACE_CORRECTION: Mat4 = Mat4::from_cols(
    Vec4::X,
    Vec4::NEG_Y,
    Vec4::Z,
    Vec4::W,
);

/// Wrap an angle in degrees into (-180, 180].
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

/// Evaluate a plane equation at a point (signed distance for a normalized plane).
#[inline]
pub fn plane_dot_coord(plane: Vec4, point: Vec3) -> f32 {
    plane.x * point.x + plane.y * point.y + plane.z * point.z + plane.w
}

/// Scale a plane so the 4-vector `(a, b, c, d)` has unit length.
///
/// Plane distances are then expressed in units of that 4-vector, not world
/// units. A zero plane is returned unchanged.
pub fn normalize_plane(plane: Vec4) -> Vec4 {
    let len = plane.length();
    if len > 0.0 {
        plane / len
    } else {
        plane
    }
}

/// Orthographic projection over `[-w/2, w/2] × [-h/2, h/2]`, depth `[near, far] → [0, 1]`.
pub fn orthographic_projection(width: f32, height: f32, near: f32, far: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0 / (far - near), 0.0),
        Vec4::new(0.0, 0.0, near / (near - far), 1.0),
    )
}

/// Symmetric left-handed perspective projection from a vertical FOV (radians).
pub fn perspective_projection(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let y_scale = 1.0 / (fov_y * 0.5).tan();
    let x_scale = y_scale / aspect;
    Mat4::from_cols(
        Vec4::new(x_scale, 0.0, 0.0, 0.0),
        Vec4::new(0.0, y_scale, 0.0, 0.0),
        Vec4::new(0.0, 0.0, far / (far - near), 1.0),
        Vec4::new(0.0, 0.0, near * far / (near - far), 0.0),
    )
}

/// Rewrite the depth terms of a perspective projection so view depth
/// `[near, far]` lands in clip depth `[0, 1]`.
///
/// With `r = far / (far - near)`: `_33 = r`, `_43 = -r * near`.
pub fn remap_depth(mut projection: Mat4, near: f32, far: f32) -> Mat4 {
    let r = far / (far - near);
    projection.z_axis.z = r;
    projection.w_axis.z = -r * near;
    projection
}

/// Angle in degrees between `v` and the unit `axis`, 0 for a zero `v`.
pub(crate) fn angle_to_axis(v: Vec3, axis: Vec3) -> f32 {
    let len = v.length();
    if len == 0.0 {
        return 0.0;
    }
    (axis.dot(v) / len).clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
