//! Per-frame scene view snapshot
//!
//! [`SceneViewState`] is rebuilt by the host every frame and answers the two
//! projection questions everything above it needs: where does a world point
//! land on screen, and where does the pointer ray cross a given plane.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

use crate::geometry::intersect_line_plane;

/// Distance in front of the camera at which world lines are clipped.
pub const NEAR_CLIP_OFFSET: f32 = 0.1;

/// Screen-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub top_left: Vec2,
    /// Bottom-right corner
    pub bottom_right: Vec2,
}

impl Rect {
    /// Creates a rectangle from two corners.
    pub fn new(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Creates a rectangle from its top-left corner and size.
    pub fn from_min_size(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left, top_left + size)
    }

    /// Width and height.
    pub fn size(&self) -> Vec2 {
        self.bottom_right - self.top_left
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        (self.top_left + self.bottom_right) * 0.5
    }

    /// Whether `point` lies inside (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.top_left).all() && point.cmple(self.bottom_right).all()
    }
}

/// Camera pose for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World-space eye position
    pub position: Vec3,
    /// Unit view direction
    pub forward: Vec3,
    /// Unit up vector
    pub up: Vec3,
    /// Camera orientation (camera space to world space)
    pub rotation: Quat,
}

impl CameraState {
    /// Builds a camera state from an orientation, deriving forward and up.
    ///
    /// Camera space looks down `-Z` with `+Y` up.
    pub fn from_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            forward: rotation * Vec3::NEG_Z,
            up: rotation * Vec3::Y,
            rotation,
        }
    }

    /// `forward × up`
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up)
    }
}

/// Immutable snapshot of the camera, viewport and pointer for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneViewState {
    /// Camera pose
    pub camera: CameraState,
    /// Combined projection * view matrix
    pub view_projection: Mat4,
    /// Screen rectangle the scene is drawn into
    pub viewport: Rect,
    /// Pointer position in screen space
    pub pointer: Vec2,
    /// Unit world-space direction of the ray under the pointer
    pub pointer_ray: Vec3,
}

impl SceneViewState {
    /// Creates a snapshot from precomputed parts.
    pub fn new(
        camera: CameraState,
        view_projection: Mat4,
        viewport: Rect,
        pointer: Vec2,
        pointer_ray: Vec3,
    ) -> Self {
        Self {
            camera,
            view_projection,
            viewport,
            pointer,
            pointer_ray,
        }
    }

    /// Creates a snapshot, deriving the pointer ray by unprojecting the
    /// pointer through the inverse view-projection.
    pub fn from_camera(
        camera: CameraState,
        view_projection: Mat4,
        viewport: Rect,
        pointer: Vec2,
    ) -> Self {
        let size = viewport.size().max(Vec2::ONE);
        let rel = (pointer - viewport.top_left) / size;
        let ndc = Vec2::new(rel.x * 2.0 - 1.0, 1.0 - rel.y * 2.0);

        let inv = view_projection.inverse();
        let near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        let pointer_ray = (far - near).try_normalize().unwrap_or(camera.forward);

        Self::new(camera, view_projection, viewport, pointer, pointer_ray)
    }

    /// Maps a world point to screen space.
    ///
    /// Clip W is clamped at zero so points behind the camera never flip sign.
    pub fn world_to_screen(&self, point: Vec3) -> Vec2 {
        let clip = self.view_projection * point.extend(1.0);
        let mut ndc = Vec2::new(clip.x, clip.y) / clip.w.max(0.0);
        ndc.y = -ndc.y;

        self.viewport.top_left + (ndc + Vec2::ONE) * self.viewport.size() * 0.5
    }

    /// Where the pointer ray crosses the plane through `origin` with `normal`.
    ///
    /// Returns `None` when the ray runs parallel to the plane.
    pub fn ray_hit_on_plane(&self, normal: Vec3, origin: Vec3) -> Option<Vec3> {
        intersect_line_plane(self.pointer_ray, self.camera.position, normal, origin)
    }

    /// Projects a world line, clipping whichever end lies behind the near
    /// plane. Returns `None` when the whole line is behind the camera.
    pub fn clip_line(&self, mut a: Vec3, mut b: Vec3) -> Option<(Vec2, Vec2)> {
        let normal = self.camera.forward;
        let origin = self.camera.position + self.camera.forward * NEAR_CLIP_OFFSET;

        let a_behind = normal.dot(a - origin) <= 0.0;
        let b_behind = normal.dot(b - origin) <= 0.0;

        if a_behind && b_behind {
            return None;
        }

        if a_behind {
            a = intersect_line_plane((a - b).normalize(), b, normal, origin)?;
        }
        if b_behind {
            b = intersect_line_plane((b - a).normalize(), a, normal, origin)?;
        }

        Some((self.world_to_screen(a), self.world_to_screen(b)))
    }

    /// World units covered by `size_2d` screen pixels at `position`.
    pub fn gizmo_scaling(&self, position: Vec3, size_2d: f32) -> f32 {
        let pixels =
            (self.world_to_screen(position + self.camera.right()) - self.world_to_screen(position)).x;
        size_2d / pixels
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Camera at `(0, 0, 10)` looking down `-Z`, 800x600 viewport.
    pub(crate) fn front_view(pointer: Vec2) -> SceneViewState {
        let camera = CameraState::from_rotation(Vec3::new(0.0, 0.0, 10.0), Quat::IDENTITY);
        let view = Mat4::look_to_rh(camera.position, camera.forward, camera.up);
        let proj = Mat4::perspective_rh(60f32.to_radians(), 800.0 / 600.0, 0.1, 1000.0);
        let viewport = Rect::new(Vec2::ZERO, Vec2::new(800.0, 600.0));
        SceneViewState::from_camera(camera, proj * view, viewport, pointer)
    }

    #[test]
    fn test_world_origin_maps_to_viewport_center() {
        let view = front_view(Vec2::new(400.0, 300.0));
        let screen = view.world_to_screen(Vec3::ZERO);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_up_is_screen_up() {
        let view = front_view(Vec2::new(400.0, 300.0));
        let screen = view.world_to_screen(Vec3::Y);
        assert!(screen.y < 300.0);
        let screen = view.world_to_screen(Vec3::X);
        assert!(screen.x > 400.0);
    }

    #[test]
    fn test_pointer_ray_round_trips() {
        let target = Vec3::new(1.5, -0.5, 0.0);
        let probe = front_view(Vec2::ZERO);
        let pointer = probe.world_to_screen(target);

        let view = front_view(pointer);
        let hit = view.ray_hit_on_plane(Vec3::Z, Vec3::ZERO).unwrap();
        assert_relative_eq!(hit.x, target.x, epsilon = 1e-3);
        assert_relative_eq!(hit.y, target.y, epsilon = 1e-3);
        assert_relative_eq!(hit.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_ray_parallel_to_plane_misses() {
        let view = front_view(Vec2::new(400.0, 300.0));
        assert!(view.ray_hit_on_plane(Vec3::X, Vec3::ZERO).is_none());
    }

    #[test]
    fn test_clip_line_behind_camera() {
        let view = front_view(Vec2::new(400.0, 300.0));
        assert!(
            view.clip_line(Vec3::new(0.0, 0.0, 20.0), Vec3::new(1.0, 0.0, 30.0))
                .is_none()
        );

        let (a, b) = view
            .clip_line(Vec3::ZERO, Vec3::new(0.0, 0.0, 50.0))
            .unwrap();
        assert!(a.is_finite() && b.is_finite());
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::from_min_size(Vec2::new(10.0, 10.0), Vec2::new(100.0, 50.0));
        assert!(rect.contains(Vec2::new(10.0, 60.0)));
        assert!(!rect.contains(Vec2::new(9.0, 20.0)));
        assert_eq!(rect.center(), Vec2::new(60.0, 35.0));
    }
}
