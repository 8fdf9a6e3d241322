/// Camera registry.
///
/// Cameras are stored in a SlotMap: keys are generation-checked, so a key
/// to a removed camera never resolves to a later one. Names are optional
/// and unique. A default camera is created with the manager and lives as
/// long as it does.

use slotmap::{new_key_type, SlotMap};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::engine_err;
use super::camera::{Camera, CameraConfig};

new_key_type! {
    /// Stable key for a camera in a CameraManager
    pub struct CameraKey;
}

pub struct CameraManager {
    cameras: SlotMap<CameraKey, Camera>,
    names: FxHashMap<String, CameraKey>,
    default_camera: CameraKey,
    /// Parameters given to every new camera
    config: CameraConfig,
}

impl Default for CameraManager {
    fn default() -> Self {
        Self::from_valid_config(CameraConfig::default())
    }
}

impl CameraManager {
    /// Manager with default camera parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager whose cameras (the default one included) start from `config`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` if the configuration is invalid.
    pub fn with_config(config: CameraConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CameraConfig) -> Self {
        let mut cameras = SlotMap::with_key();
        let default_camera = cameras.insert(build_camera(&config));

        crate::engine_debug!("galaxy3d::CameraManager", "Default camera created");

        Self {
            cameras,
            names: FxHashMap::default(),
            default_camera,
            config,
        }
    }

    // ===== CREATION / REMOVAL =====

    /// Create a camera, optionally under a unique name.
    ///
    /// # Errors
    ///
    /// `Error::DuplicateName` if `name` is already registered.
    pub fn create_camera(&mut self, name: Option<&str>) -> Result<CameraKey> {
        if let Some(name) = name {
            if self.names.contains_key(name) {
                return Err(engine_err!("galaxy3d::CameraManager",
                    Error::DuplicateName(name.to_string())));
            }
        }

        let mut camera = build_camera(&self.config);
        camera.set_name(name.map(str::to_string));
        let key = self.cameras.insert(camera);

        if let Some(name) = name {
            self.names.insert(name.to_string(), key);
        }

        crate::engine_info!("galaxy3d::CameraManager",
            "Camera '{}' created ({} total)", name.unwrap_or("<unnamed>"), self.cameras.len());

        Ok(key)
    }

    /// Remove a camera and hand it back to the caller.
    ///
    /// # Errors
    ///
    /// - `Error::DefaultCameraRemoval` for the default camera
    /// - `Error::InvalidHandle` if the key is stale
    pub fn remove_camera(&mut self, key: CameraKey) -> Result<Camera> {
        if key == self.default_camera {
            return Err(engine_err!("galaxy3d::CameraManager", Error::DefaultCameraRemoval));
        }

        let camera = self.cameras.remove(key)
            .ok_or_else(|| engine_err!("galaxy3d::CameraManager", Error::InvalidHandle))?;

        if let Some(name) = camera.name() {
            self.names.remove(name);
        }

        crate::engine_info!("galaxy3d::CameraManager",
            "Camera '{}' removed", camera.name().unwrap_or("<unnamed>"));

        Ok(camera)
    }

    /// Give a camera a new name, or clear it with `None`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidHandle` if the key is stale
    /// - `Error::DuplicateName` if another camera holds the name
    pub fn rename_camera(&mut self, key: CameraKey, name: Option<&str>) -> Result<()> {
        let camera = self.cameras.get_mut(key)
            .ok_or_else(|| engine_err!("galaxy3d::CameraManager", Error::InvalidHandle))?;

        if let Some(name) = name {
            match self.names.get(name) {
                Some(&owner) if owner == key => return Ok(()),
                Some(_) => {
                    return Err(engine_err!("galaxy3d::CameraManager",
                        Error::DuplicateName(name.to_string())));
                }
                None => {}
            }
        }

        crate::engine_info!("galaxy3d::CameraManager",
            "Camera '{}' renamed to '{}'",
            camera.name().unwrap_or("<unnamed>"), name.unwrap_or("<unnamed>"));

        if let Some(old) = camera.name() {
            self.names.remove(old);
        }
        camera.set_name(name.map(str::to_string));
        if let Some(name) = name {
            self.names.insert(name.to_string(), key);
        }

        Ok(())
    }

    // ===== ACCESS =====

    pub fn camera(&self, key: CameraKey) -> Option<&Camera> {
        self.cameras.get(key)
    }

    pub fn camera_mut(&mut self, key: CameraKey) -> Option<&mut Camera> {
        self.cameras.get_mut(key)
    }

    pub fn camera_by_name(&self, name: &str) -> Option<&Camera> {
        self.key_by_name(name).and_then(|key| self.cameras.get(key))
    }

    pub fn camera_by_name_mut(&mut self, name: &str) -> Option<&mut Camera> {
        let key = self.key_by_name(name)?;
        self.cameras.get_mut(key)
    }

    pub fn key_by_name(&self, name: &str) -> Option<CameraKey> {
        self.names.get(name).copied()
    }

    pub fn default_camera_key(&self) -> CameraKey {
        self.default_camera
    }

    /// The camera used when no other is selected
    pub fn default_camera(&self) -> &Camera {
        &self.cameras[self.default_camera]
    }

    pub fn default_camera_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.default_camera]
    }

    pub fn contains(&self, key: CameraKey) -> bool {
        self.cameras.contains_key(key)
    }

    /// Number of cameras, the default one included
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CameraKey, &Camera)> {
        self.cameras.iter()
    }

    // ===== FRAME =====

    /// Prepare every camera for a frame of the given viewport size.
    pub fn render_all(&mut self, width: u32, height: u32) {
        for (_, camera) in self.cameras.iter_mut() {
            camera.render(width, height);
        }
    }
}

/// `config` has been validated by the manager constructor
fn build_camera(config: &CameraConfig) -> Camera {
    Camera::from_valid_config(config)
}

#[cfg(test)]
#[path = "camera_manager_tests.rs"]
mod tests;
