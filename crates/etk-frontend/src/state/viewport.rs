//! Viewport state

use std::sync::Arc;

use etk_core::{Camera, Rect, SceneViewState};
use etk_gizmo::{GizmoInteraction, GizmoMode, GizmoSpace, HoverResolver};
use glam::{Mat4, Vec2};
use parking_lot::Mutex;

use super::SceneObject;

/// Half size of the edited cube in its local space
pub const OBJECT_HALF_EXTENT: f32 = 1.0;

/// Camera, edited object and gizmo state of the viewport
pub struct ViewportState {
    pub camera: Camera,
    pub object: SceneObject,
    pub gizmo: GizmoInteraction,
    /// Hover memory of the orientation cube
    pub cube_resolver: HoverResolver,
}

impl ViewportState {
    pub fn new() -> Self {
        Self {
            camera: Camera::new(16.0 / 9.0),
            object: SceneObject::default(),
            gizmo: GizmoInteraction::default(),
            cube_resolver: HoverResolver::new(),
        }
    }

    pub fn gizmo_mode(&self) -> GizmoMode {
        self.gizmo.mode
    }

    /// Switch gizmo mode. A running drag is aborted first.
    pub fn set_gizmo_mode(&mut self, mode: GizmoMode) {
        if self.gizmo.mode != mode {
            self.gizmo.cancel(&mut self.object.transform);
            self.gizmo.mode = mode;
            tracing::debug!("Gizmo mode: {}", mode.label());
        }
    }

    pub fn gizmo_space(&self) -> GizmoSpace {
        self.gizmo.space
    }

    /// Switch gizmo space. A running drag is aborted first.
    pub fn set_gizmo_space(&mut self, space: GizmoSpace) {
        if self.gizmo.space != space {
            self.gizmo.cancel(&mut self.object.transform);
            self.gizmo.space = space;
            tracing::debug!("Gizmo space: {:?}", space);
        }
    }

    /// Replace the object transform, e.g. from the properties panel.
    pub fn set_object_transform(&mut self, transform: Mat4) {
        self.gizmo.cancel(&mut self.object.transform);
        self.object.transform = transform;
    }

    pub fn reset_object(&mut self) {
        self.set_object_transform(Mat4::IDENTITY);
    }

    /// Move the camera target onto the object and back off to fit it.
    pub fn frame_object(&mut self) {
        let (scale, _, position) = self.object.transform.to_scale_rotation_translation();
        let radius = scale.abs().max_element() * OBJECT_HALF_EXTENT * 3f32.sqrt();
        self.camera.fit_all(position, radius.max(0.5) * 2.0);
    }

    /// Scene view for a viewport at `rect` (screen coordinates).
    pub fn scene_view(&mut self, rect: Rect, pointer: Vec2) -> SceneViewState {
        let size = rect.size();
        if size.x > 0.0 && size.y > 0.0 {
            self.camera.update_aspect(size.x / size.y);
        }
        self.camera.scene_view(rect, pointer)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

/// Viewport state shared between panels
pub type SharedViewportState = Arc<Mutex<ViewportState>>;

/// Create a new shared viewport state
pub fn create_shared_viewport() -> SharedViewportState {
    Arc::new(Mutex::new(ViewportState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[test]
    fn test_frame_object_targets_object() {
        let mut state = ViewportState::new();
        state.object.transform = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            glam::Quat::IDENTITY,
            Vec3::new(3.0, 0.0, -1.0),
        );
        state.frame_object();

        assert_eq!(state.camera.target, Vec3::new(3.0, 0.0, -1.0));
        assert!(state.camera.distance > 2.0 * 3f32.sqrt());
    }

    #[test]
    fn test_mode_switch_keeps_transform_when_idle() {
        let mut state = ViewportState::new();
        state.object.transform = Mat4::from_translation(Vec3::X);
        state.set_gizmo_mode(GizmoMode::Rotate);

        assert_eq!(state.gizmo_mode(), GizmoMode::Rotate);
        assert_eq!(state.object.transform, Mat4::from_translation(Vec3::X));
    }

    #[test]
    fn test_scene_view_follows_viewport_aspect() {
        let mut state = ViewportState::new();
        let rect = Rect::new(Vec2::new(100.0, 50.0), Vec2::new(500.0, 450.0));
        let view = state.scene_view(rect, rect.center());

        assert_relative_eq!(state.camera.aspect, 1.0);
        // the orbit target sits in the middle of the viewport
        assert!(view.world_to_screen(state.camera.target).abs_diff_eq(rect.center(), 1e-3));
    }
}
