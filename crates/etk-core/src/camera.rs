//! Orbit camera for the 3D viewport

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use crate::view::{CameraState, Rect, SceneViewState};

/// Orbit camera (Y up)
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub target: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    // Orbit state
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Camera {
    /// Create a new camera with default parameters
    pub fn new(aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            fov: 57.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 10000.0,
            yaw: -45.0_f32.to_radians(),
            pitch: 30.0_f32.to_radians(),
            distance: 15.0,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Eye position derived from the orbit parameters
    pub fn position(&self) -> Vec3 {
        self.target + self.orbit_offset()
    }

    fn orbit_offset(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        Vec3::new(x, y, z)
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Pan the camera (move target)
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let state = self.state();
        let scale = self.distance * 0.002;
        self.target += state.right() * (-delta_x * scale) + state.up * (delta_y * scale);
    }

    /// Move eye and target together, `offset` given as (right, up, forward)
    pub fn fly(&mut self, offset: Vec3) {
        let state = self.state();
        self.target += state.right() * offset.x + state.up * offset.y + state.forward * offset.z;
    }

    /// Zoom the camera
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * 0.1)).clamp(0.1, 10000.0);
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Get field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Fit camera to show the given bounding sphere
    pub fn fit_all(&mut self, center: Vec3, radius: f32) {
        self.target = center;
        self.distance = (radius * 2.5).max(1.0);
    }

    /// Look at the target from `direction` (pointing from the target to the
    /// eye), e.g. a face normal picked on the orientation cube.
    pub fn look_from(&mut self, direction: Vec3) {
        let Some(dir) = direction.try_normalize() else {
            return;
        };
        self.pitch = dir
            .y
            .asin()
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        if dir.x.abs() > 1e-4 || dir.z.abs() > 1e-4 {
            self.yaw = dir.x.atan2(dir.z);
        }
    }

    /// Camera pose
    pub fn state(&self) -> CameraState {
        let position = self.position();
        let forward = (self.target - position).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward));

        CameraState {
            position,
            forward,
            up,
            rotation,
        }
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined projection * view matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Snapshot of this camera for one frame
    pub fn scene_view(&self, viewport: Rect, pointer: Vec2) -> SceneViewState {
        SceneViewState::from_camera(self.state(), self.view_projection(), viewport, pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_state_is_orthonormal() {
        let camera = Camera::new(1.5);
        let state = camera.state();
        assert_relative_eq!(state.forward.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(state.up.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(state.forward.dot(state.up), 0.0, epsilon = 1e-5);

        let rotated_forward = state.rotation * Vec3::NEG_Z;
        assert_relative_eq!(rotated_forward.dot(state.forward), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_target_projects_to_viewport_center() {
        let mut camera = Camera::new(4.0 / 3.0);
        camera.target = Vec3::new(1.0, 2.0, 3.0);
        let viewport = Rect::new(Vec2::new(100.0, 50.0), Vec2::new(900.0, 650.0));
        let view = camera.scene_view(viewport, Vec2::ZERO);
        let screen = view.world_to_screen(camera.target);
        assert_relative_eq!(screen.x, 500.0, epsilon = 1e-2);
        assert_relative_eq!(screen.y, 350.0, epsilon = 1e-2);
    }

    #[test]
    fn test_look_from_face() {
        let mut camera = Camera::new(1.0);
        camera.look_from(Vec3::X);
        let state = camera.state();
        assert_relative_eq!(state.forward.x, -1.0, epsilon = 1e-4);

        camera.look_from(Vec3::ZERO);
        assert_relative_eq!(camera.state().forward.x, -1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch <= 89.0_f32.to_radians());
    }
}
