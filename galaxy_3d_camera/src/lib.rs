/*!
# Galaxy 3D Camera

Camera, orientation and frustum-culling subsystem for the Galaxy 3D engine.

## Architecture

- **Orientation**: position + orthonormal right/up/look basis, optional binding matrix
- **Oriented**: trait for entities owning an Orientation; every mutation notifies the owner
- **Camera**: lazily rebuilt view/projection matrices and frustum planes
- **Frustum**: six planes with point, sphere, cube and box tests
- **CameraManager**: keyed registry with named cameras and a default camera

Matrices are glam `Mat4` (column vectors), the world is left-handed and clip
depth is [0, 1]. See the `math` module for the full conventions.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod orientation;
pub mod camera;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Orientation
    pub use crate::orientation::{ChangeType, Orientation, Oriented};

    // Camera
    pub use crate::camera::{
        Camera, CameraConfig, CameraKey, CameraManager, CameraUniform, Frustum, ProjectionType,
    };

    // Logging sub-module (types and logger installation, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }
}

// Re-export math library at crate root
pub use glam;
