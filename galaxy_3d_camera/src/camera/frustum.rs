/// Frustum: six clipping planes for visibility tests.
///
/// Each plane is a Vec4 (A, B, C, D) of unit 4-length where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed offset
/// - A point P is inside if `A*Px + B*Py + C*Pz + D >= 0` for all planes
///
/// Boundary points count as inside. The camera rebuilds its frustum during
/// `update_internals()`; `from_view_projection()` can also be used directly.

use glam::{Mat4, Vec3, Vec4};
use crate::math::{normalize_plane, plane_dot_coord};

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_TOP: usize = 4;
pub const PLANE_BOTTOM: usize = 5;

/// Six frustum planes: near, far, left, right, top, bottom.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [Vec4; 6],
}

impl Default for Frustum {
    /// Frustum of the identity view-projection: the clip-space box.
    fn default() -> Self {
        Self::from_view_projection(&Mat4::IDENTITY)
    }
}

impl Frustum {
    /// Extract frustum planes from a combined view-projection matrix.
    ///
    /// Gribb & Hartmann on the rows of `projection * view` (glam storage),
    /// which are the columns of the row-vector `view * projection`:
    /// near = row3 + row2, far = row3 - row2, left/right = row3 ± row0,
    /// top/bottom = row3 ∓ row1. Each plane is divided by its full
    /// 4-component length.
    ///
    /// Labels follow clip space: with the Y-flip correction folded into the
    /// projection, `PLANE_TOP` bounds clip-space +Y.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let planes = [
            row3 + row2,    // near
            row3 - row2,    // far
            row3 + row0,    // left
            row3 - row0,    // right
            row3 - row1,    // top
            row3 + row1,    // bottom
        ]
        .map(normalize_plane);

        Self { planes }
    }

    /// Signed plane distance of `point` for plane `index` (positive = inside),
    /// in units of the normalized 4-vector.
    #[inline]
    pub fn distance(&self, index: usize, point: Vec3) -> f32 {
        plane_dot_coord(self.planes[index], point)
    }

    /// True iff the point is on the inside of all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane_dot_coord(*plane, point) >= 0.0)
    }

    /// Conservative sphere test.
    ///
    /// Rejects only when the plane distance of the center is below
    /// `-radius`. Plane distances are scaled by the 4-component
    /// normalization, so the test is looser than a Euclidean one, and
    /// spheres just outside a frustum corner can pass as well.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        !self.planes.iter().any(|plane| plane_dot_coord(*plane, center) < -radius)
    }

    /// Axis-aligned cube test with half-extent `radius` on every axis.
    pub fn intersects_cube(&self, center: Vec3, radius: f32) -> bool {
        self.intersects_box(center, Vec3::splat(radius))
    }

    /// Axis-aligned box test with per-axis half-extents `size`.
    ///
    /// A plane excludes the box only when all 8 corners are outside it.
    pub fn intersects_box(&self, center: Vec3, size: Vec3) -> bool {
        let corners = box_corners(center, size);

        self.planes.iter().all(|plane| {
            corners.iter().any(|corner| plane_dot_coord(*plane, *corner) >= 0.0)
        })
    }
}

fn box_corners(center: Vec3, size: Vec3) -> [Vec3; 8] {
    let mut corners = [Vec3::ZERO; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let sign = Vec3::new(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        );
        *corner = center + size * sign;
    }
    corners
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
