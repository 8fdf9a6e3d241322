/// GPU layout of the camera state for uniform buffers.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};
use super::camera::Camera;

/// Camera constants as uploaded to a shader.
///
/// std140-compatible: every member is 16-byte aligned, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    /// xyz = world position, w = 1
    pub position: Vec4,
    /// xyz = look direction, w = 0
    pub look: Vec4,
    /// x = near, y = far, z = vertical FOV (radians), w = aspect ratio
    pub params: Vec4,
}

impl CameraUniform {
    /// Snapshot of the camera's cached matrices.
    pub fn new(camera: &Camera) -> Self {
        use crate::orientation::Oriented;

        let orientation = camera.orientation();
        Self {
            view: *camera.view_matrix(),
            projection: *camera.projection_matrix(false),
            view_projection: camera.view_projection_matrix(),
            position: orientation.position().extend(1.0),
            look: orientation.look().extend(0.0),
            params: Vec4::new(
                camera.min_range(),
                camera.max_range(),
                camera.fov_radians(),
                camera.aspect(),
            ),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
