//! Error types for the Galaxy3D camera subsystem
//!
//! Matrix math never fails: degenerate inputs produce degenerate matrices.
//! Errors only come from parameter validation at the setter boundary and
//! from the camera registry (stale handles, name clashes).

use std::fmt;

/// Result type for Galaxy3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A camera parameter was rejected (range, FOV, aspect ratio)
    InvalidParameter(String),

    /// A camera key does not refer to a live camera
    InvalidHandle,

    /// Another camera is already registered under this name
    DuplicateName(String),

    /// The default camera always exists and cannot be removed
    DefaultCameraRemoval,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidHandle => write!(f, "Invalid camera handle"),
            Error::DuplicateName(name) => write!(f, "Duplicate camera name: {}", name),
            Error::DefaultCameraRemoval => write!(f, "The default camera cannot be removed"),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity (with file:line) and evaluate to it.
///
/// # Example
///
/// ```ignore
/// return Err(engine_err!("galaxy3d::Camera",
///     Error::InvalidParameter(format!("FOV {} out of range", fov))));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $error:expr) => {{
        let error = $error;
        $crate::engine_error!($source, "{}", error);
        error
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
