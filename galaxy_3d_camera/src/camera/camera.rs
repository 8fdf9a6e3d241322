/// Camera: view/projection matrices and frustum derived from an Orientation.
///
/// Parameter setters and orientation changes only mark the camera dirty.
/// Matrices and frustum planes are rebuilt lazily by `update_internals()`,
/// which `render()` calls once per frame. Getters return the cached values
/// and never recompute: between a change and the next `render()` they
/// still describe the previous frame.
///
/// Conventions: left-handed world, clip depth [0, 1], Y flipped by
/// `math::CLIP_SPACE_CORRECTION` (see the `math` module).

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::engine_err;
use crate::math::{
    orthographic_projection, perspective_projection, remap_depth, CLIP_SPACE_CORRECTION,
};
use crate::orientation::{ChangeType, Orientation, Oriented};
use super::camera_uniform::CameraUniform;
use super::frustum::Frustum;

/// Projection method used by a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionType {
    /// Symmetric perspective from a vertical FOV and aspect ratio
    #[default]
    Perspective,
    /// Orthographic over the last viewport size, one unit per pixel
    Orthogonal,
}

/// Initial camera parameters
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Vertical field of view in degrees, in (0, 180)
    pub fov_degrees: f32,
    /// Near draw distance
    pub min_range: f32,
    /// Far draw distance, greater than `min_range`
    pub max_range: f32,
    /// Width / height; replaced on viewport changes when `auto_aspect` is set
    pub aspect_ratio: f32,
    /// Derive the aspect ratio from the viewport in `render()`
    pub auto_aspect: bool,
    /// Perspective or orthogonal
    pub projection_type: ProjectionType,
    /// Viewport assumed until the first `render()`
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            min_range: 1.0,
            max_range: 5000.0,
            aspect_ratio: 1.0,
            auto_aspect: true,
            projection_type: ProjectionType::Perspective,
            viewport_width: 1024,
            viewport_height: 1024,
        }
    }
}

impl CameraConfig {
    /// Check every parameter against the setter rules.
    pub fn validate(&self) -> Result<()> {
        validate_fov(self.fov_degrees)?;
        validate_range(self.min_range, self.max_range)?;
        validate_aspect(self.aspect_ratio)
    }
}

fn validate_fov(degrees: f32) -> Result<()> {
    if degrees.is_finite() && degrees > 0.0 && degrees < 180.0 {
        Ok(())
    } else {
        Err(engine_err!("galaxy3d::Camera",
            Error::InvalidParameter(format!("FOV {} must be in (0, 180) degrees", degrees))))
    }
}

fn validate_range(min: f32, max: f32) -> Result<()> {
    if min.is_finite() && max.is_finite() && min >= 0.0 && min < max {
        Ok(())
    } else {
        Err(engine_err!("galaxy3d::Camera",
            Error::InvalidParameter(format!("range [{}, {}] must satisfy 0 <= min < max", min, max))))
    }
}

fn validate_aspect(aspect: f32) -> Result<()> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(())
    } else {
        Err(engine_err!("galaxy3d::Camera",
            Error::InvalidParameter(format!("aspect ratio {} must be positive", aspect))))
    }
}

/// A viewpoint: orientation + projection parameters + cached matrices.
#[derive(Debug, Clone)]
pub struct Camera {
    orientation: Orientation,
    name: Option<String>,

    view_matrix: Mat4,
    projection_matrix: Mat4,
    ortho_matrix: Mat4,
    frustum: Frustum,

    /// Vertical FOV in radians
    fov: f32,
    aspect_ratio: f32,
    auto_aspect: bool,
    min_range: f32,
    max_range: f32,
    projection_type: ProjectionType,

    last_width: u32,
    last_height: u32,

    /// Cached matrices/frustum are stale
    dirty: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_valid_config(&CameraConfig::default())
    }
}

impl Camera {
    /// Camera with default parameters (45° FOV, range [1, 5000], auto aspect,
    /// perspective), at the origin looking down +Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera with the given parameters.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` if the FOV, range or aspect ratio is invalid.
    pub fn with_config(config: &CameraConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub(crate) fn from_valid_config(config: &CameraConfig) -> Self {
        Self {
            orientation: Orientation::new(),
            name: None,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            ortho_matrix: Mat4::IDENTITY,
            frustum: Frustum::default(),
            fov: config.fov_degrees.to_radians(),
            aspect_ratio: config.aspect_ratio,
            auto_aspect: config.auto_aspect,
            min_range: config.min_range,
            max_range: config.max_range,
            projection_type: config.projection_type,
            last_width: config.viewport_width,
            last_height: config.viewport_height,
            dirty: true,
        }
    }

    // ===== PARAMETERS (mark dirty, compute nothing) =====

    /// Set the near/far draw distances.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` unless `0 <= min < max`; the camera is unchanged.
    pub fn set_range(&mut self, min: f32, max: f32) -> Result<()> {
        validate_range(min, max)?;
        self.min_range = min;
        self.max_range = max;
        self.dirty = true;
        Ok(())
    }

    /// Set the vertical field of view, in degrees.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` unless `0 < degrees < 180`.
    pub fn set_fov(&mut self, degrees: f32) -> Result<()> {
        validate_fov(degrees)?;
        self.fov = degrees.to_radians();
        self.dirty = true;
        Ok(())
    }

    /// Set the aspect ratio (width / height).
    ///
    /// With auto aspect enabled the value is overridden on the next viewport
    /// change.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParameter` unless the ratio is positive and finite.
    pub fn set_aspect(&mut self, aspect: f32) -> Result<()> {
        validate_aspect(aspect)?;
        self.aspect_ratio = aspect;
        self.dirty = true;
        Ok(())
    }

    pub fn set_projection_type(&mut self, projection_type: ProjectionType) {
        self.projection_type = projection_type;
        self.dirty = true;
    }

    /// Derive the aspect ratio from the viewport, starting with the next
    /// viewport change seen by `render()`.
    pub fn enable_auto_aspect(&mut self) {
        self.auto_aspect = true;
        self.dirty = true;
    }

    /// Keep the aspect ratio given to `set_aspect()` regardless of viewport.
    pub fn disable_auto_aspect(&mut self) {
        self.auto_aspect = false;
        self.dirty = true;
    }

    // ===== PER-FRAME PREPARATION =====

    /// Prepare the camera for a frame rendered into a `width` × `height`
    /// viewport. Must run before matrices or frustum queries are trusted.
    ///
    /// A viewport change marks the camera dirty and, with auto aspect
    /// enabled, sets the aspect ratio to `width / height` (a zero height
    /// leaves it unchanged). Same-size calls keep the current aspect ratio.
    pub fn render(&mut self, width: u32, height: u32) {
        if self.last_width != width || self.last_height != height {
            self.dirty = true;
            self.last_width = width;
            self.last_height = height;

            if self.auto_aspect {
                if height == 0 {
                    crate::engine_warn!("galaxy3d::Camera",
                        "Viewport {}x{} has no height, aspect ratio kept at {}",
                        width, height, self.aspect_ratio);
                } else {
                    self.aspect_ratio = width as f32 / height as f32;
                }
            }
        }

        self.update_internals();
    }

    /// Alias of [`render`](Self::render).
    pub fn prepare_for_use(&mut self, width: u32, height: u32) {
        self.render(width, height);
    }

    /// Rebuild view, projection and frustum if anything changed.
    pub fn update_internals(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        // Rows right, up, look; translation (-right·p, -up·p, -look·p)
        let mut view = self.orientation.compute_inverse_transformation();
        if let Some(binding) = self.orientation.binding_matrix() {
            view = binding * view;
        }

        // Zero-sized viewports are clamped to one pixel
        let ortho = orthographic_projection(
            self.last_width.max(1) as f32,
            self.last_height.max(1) as f32,
            self.min_range,
            self.max_range,
        );

        // Depth remap on the perspective matrix only: applied to the
        // orthographic one it would collapse the far plane.
        let projection = match self.projection_type {
            ProjectionType::Perspective => remap_depth(
                perspective_projection(self.fov, self.aspect_ratio, self.min_range, self.max_range),
                self.min_range,
                self.max_range,
            ),
            ProjectionType::Orthogonal => ortho,
        };

        self.view_matrix = view;
        self.projection_matrix = CLIP_SPACE_CORRECTION * projection;
        self.ortho_matrix = CLIP_SPACE_CORRECTION * ortho;
        self.frustum = Frustum::from_view_projection(&(self.projection_matrix * self.view_matrix));

        crate::engine_trace!("galaxy3d::Camera",
            "Recomputed {:?} camera {}: fov {:.1}°, aspect {:.3}, range [{}, {}]",
            self.projection_type,
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.fov.to_degrees(),
            self.aspect_ratio,
            self.min_range,
            self.max_range);
    }

    // ===== GETTERS =====

    /// View matrix as of the last recompute.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix as of the last recompute.
    ///
    /// `force_orthogonal` returns the orthographic matrix whatever the
    /// configured projection type.
    pub fn projection_matrix(&self, force_orthogonal: bool) -> &Mat4 {
        if force_orthogonal {
            &self.ortho_matrix
        } else {
            &self.projection_matrix
        }
    }

    /// Combined matrix taking world space to clip space.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Frustum planes as of the last recompute.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// GPU-ready copy of the cached camera state.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(self)
    }

    pub fn min_range(&self) -> f32 {
        self.min_range
    }

    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov.to_degrees()
    }

    pub(crate) fn fov_radians(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn projection_type(&self) -> ProjectionType {
        self.projection_type
    }

    pub fn is_auto_aspect(&self) -> bool {
        self.auto_aspect
    }

    /// True when the cached matrices lag behind the parameters.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Viewport size seen by the last `render()` (or the configured one).
    pub fn viewport_size(&self) -> (u32, u32) {
        (self.last_width, self.last_height)
    }

    /// Registry name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    // ===== FRUSTUM QUERIES (cached planes) =====

    /// True if `point` is inside all six planes.
    pub fn check_point_in_frustum(&self, point: Vec3) -> bool {
        self.frustum.contains_point(point)
    }

    /// Conservative sphere test; may accept spheres just outside a corner.
    pub fn check_sphere_in_frustum(&self, center: Vec3, radius: f32) -> bool {
        self.frustum.intersects_sphere(center, radius)
    }

    /// Axis-aligned cube with half-extent `radius`.
    pub fn check_cube_in_frustum(&self, center: Vec3, radius: f32) -> bool {
        self.frustum.intersects_cube(center, radius)
    }

    /// Axis-aligned box with per-axis half-extents `size`.
    pub fn check_box_in_frustum(&self, center: Vec3, size: Vec3) -> bool {
        self.frustum.intersects_box(center, size)
    }
}

impl Oriented for Camera {
    fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    fn orientation_mut(&mut self) -> &mut Orientation {
        &mut self.orientation
    }

    fn on_state_change(&mut self, _change: ChangeType) {
        self.dirty = true;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
