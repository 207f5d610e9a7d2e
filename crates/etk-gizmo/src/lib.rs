//! EditTK Gizmos
//!
//! Screen-space transform gizmos on top of [`etk_core`].
//!
//! # Architecture
//!
//! - [`hover::HoverResolver`] - decides which overlapping gizmo part is hovered
//! - [`drawer::GizmoDrawer`] - draws translate/rotate/scale gizmos and the
//!   orientation cube
//! - [`action::TransformAction`] - turns a pointer drag into a delta matrix
//! - [`interaction::GizmoInteraction`] - ties the three together per frame

pub mod action;
pub mod drawer;
pub mod hover;
pub mod interaction;
pub mod mode;

pub use action::{ActionError, ActionUpdateResult, TransformAction};
pub use drawer::GizmoDrawer;
pub use hover::{GizmoId, HoverResolver, HoverSession};
pub use interaction::GizmoInteraction;
pub use mode::{GizmoMode, GizmoSpace, Pivot};

#[cfg(test)]
pub(crate) mod test_util {
    use etk_core::{Camera, CameraState, Rect, SceneViewState};
    use glam::{Mat4, Quat, Vec2, Vec3};

    pub(crate) const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    /// Camera at `(0, 0, 10)` looking down `-Z`, 800x600 viewport.
    pub(crate) fn front_view(pointer: Vec2) -> SceneViewState {
        let camera = CameraState::from_rotation(Vec3::new(0.0, 0.0, 10.0), Quat::IDENTITY);
        let view = Mat4::look_to_rh(camera.position, camera.forward, camera.up);
        let proj = Mat4::perspective_rh(60f32.to_radians(), VIEWPORT.x / VIEWPORT.y, 0.1, 1000.0);
        SceneViewState::from_camera(camera, proj * view, Rect::new(Vec2::ZERO, VIEWPORT), pointer)
    }

    /// Default orbit camera looking at the origin from above and to the side.
    pub(crate) fn orbit_view(pointer: Vec2) -> SceneViewState {
        Camera::new(VIEWPORT.x / VIEWPORT.y).scene_view(Rect::new(Vec2::ZERO, VIEWPORT), pointer)
    }
}
