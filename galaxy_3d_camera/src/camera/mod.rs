//! Camera module: projection, frustum culling and camera registry.
//!
//! A `Camera` owns its `Orientation` and rebuilds view/projection/frustum
//! lazily in `render()`. Cameras can live on their own or in a
//! `CameraManager`, which hands out generation-checked keys.

mod camera;
mod camera_manager;
mod camera_uniform;
mod frustum;

pub use camera::{Camera, CameraConfig, ProjectionType};
pub use camera_manager::{CameraKey, CameraManager};
pub use camera_uniform::CameraUniform;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
