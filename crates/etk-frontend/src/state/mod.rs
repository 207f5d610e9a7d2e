//! Application state module

mod viewport;

pub use viewport::{
    OBJECT_HALF_EXTENT, SharedViewportState, ViewportState, create_shared_viewport,
};

use glam::{EulerRot, Mat4, Quat, Vec3};

/// The object being edited
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub transform: Mat4,
}

impl Default for SceneObject {
    fn default() -> Self {
        Self {
            name: "Cube".to_string(),
            transform: Mat4::IDENTITY,
        }
    }
}

/// Transform split into editable parts; rotation as XYZ Euler degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParts {
    pub position: Vec3,
    pub rotation_deg: Vec3,
    pub scale: Vec3,
}

impl TransformParts {
    pub fn from_matrix(transform: &Mat4) -> Self {
        let (scale, rotation, position) = transform.to_scale_rotation_translation();
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        Self {
            position,
            rotation_deg: Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees()),
            scale,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation_deg.x.to_radians(),
            self.rotation_deg.y.to_radians(),
            self.rotation_deg.z.to_radians(),
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_parts_round_trip() {
        let parts = TransformParts {
            position: Vec3::new(1.0, -2.0, 0.5),
            rotation_deg: Vec3::new(10.0, 20.0, 30.0),
            scale: Vec3::new(1.0, 2.0, 0.5),
        };
        let back = TransformParts::from_matrix(&parts.to_matrix());

        assert!(back.position.abs_diff_eq(parts.position, 1e-5));
        assert!(back.rotation_deg.abs_diff_eq(parts.rotation_deg, 1e-3));
        assert!(back.scale.abs_diff_eq(parts.scale, 1e-5));
    }
}
