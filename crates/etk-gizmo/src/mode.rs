//! Gizmo mode and coordinate space

use glam::{Mat3, Mat4, Vec3};

/// Gizmo mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    /// Move handles
    #[default]
    Translate,
    /// Rotation gimbals, trackball and view ring
    Rotate,
    /// Scale handles
    Scale,
}

impl GizmoMode {
    /// All modes, in toolbar order
    pub const ALL: [Self; 3] = [Self::Translate, Self::Rotate, Self::Scale];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Translate => "Move",
            Self::Rotate => "Rotate",
            Self::Scale => "Scale",
        }
    }
}

/// Gizmo coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoSpace {
    /// Handles follow the world axes
    #[default]
    Global,
    /// Handles follow the object's own axes
    Local,
}

impl GizmoSpace {
    /// Transform the gizmo is drawn with for an object at `transform`.
    pub fn gizmo_transform(self, transform: &Mat4) -> Mat4 {
        match self {
            Self::Global => Mat4::from_translation(transform.w_axis.truncate()),
            Self::Local => *transform,
        }
    }
}

/// Pivot point and handle axes of a gizmo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    /// World-space pivot
    pub center: Vec3,
    /// Unit handle axes as columns
    pub axes: Mat3,
}

impl Pivot {
    /// Pivot at the translation of `transform`, with its normalized axes.
    ///
    /// Axes of zero length stay zero.
    pub fn from_transform(transform: &Mat4) -> Self {
        Self {
            center: transform.w_axis.truncate(),
            axes: Mat3::from_cols(
                transform.x_axis.truncate().normalize_or_zero(),
                transform.y_axis.truncate().normalize_or_zero(),
                transform.z_axis.truncate().normalize_or_zero(),
            ),
        }
    }

    /// Unit vector of axis `axis`
    pub fn axis(&self, axis: usize) -> Vec3 {
        self.axes.col(axis.min(2))
    }
}
