//! Transform actions
//!
//! A [`TransformAction`] lives for the duration of one drag. It is created
//! from the hovered gizmo part, started once with the scene view of the
//! frame the drag began in, then updated every frame until the primary
//! button is released (apply) or the secondary button is pressed (cancel).
//!
//! The action never touches the object itself. It exposes the delta about
//! the pivot and `final = delta * base`; the host decides what to do with
//! them.

mod overlay;

use etk_core::config::{ColorConfig, SnappingConfig};
use etk_core::value_tracker::snap_to_interval;
use etk_core::{
    GizmoConfig, HoveredAxis, InputSnapshot, PackedColor, SceneViewState, ValueTracker,
    axis_name, shortest_rotation_between,
};
use glam::{Mat3, Mat4, Vec2, Vec3};
use tracing::{debug, error, trace, warn};

use crate::mode::{GizmoMode, Pivot};

/// Outcome of one [`TransformAction::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionUpdateResult {
    /// Still dragging
    None,
    /// Primary button released, keep `final_matrix`
    Apply,
    /// Secondary button pressed, the object keeps `base_matrix`
    Cancel,
}

/// Transform action errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// `update` called before `start`
    #[error("transform action updated before it was started")]
    NotStarted,
    /// `update` called after the action was applied or cancelled
    #[error("transform action already finished")]
    Finished,
    /// The hovered part has no action in this gizmo mode
    #[error("no {mode:?} action for {hovered:?}")]
    UnsupportedHover {
        /// Gizmo mode
        mode: GizmoMode,
        /// Hovered part
        hovered: HoveredAxis,
    },
}

/// Lifecycle of a [`TransformAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    /// Created, not started
    Idle,
    /// Dragging
    Active,
    /// Released
    Applied,
    /// Cancelled
    Cancelled,
}

/// Axis a rotation is performed around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    /// One of the pivot's axes
    Object(usize),
    /// The camera's view direction at drag start
    View,
}

/// Variant-specific state of a [`TransformAction`]
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum ActionKind {
    /// Drag along one axis
    TranslateAxis {
        axis: usize,
        tracker: ValueTracker<f64>,
    },
    /// Drag within the plane of two axes
    TranslatePlane {
        axes: (usize, usize),
        trackers: [ValueTracker<f64>; 2],
    },
    /// Drag within the plane facing the camera
    TranslateFree { trackers: [ValueTracker<f64>; 3] },
    /// Rotate around an axis, in degrees
    RotateAxis {
        axis: RotationAxis,
        axis_vec: Vec3,
        tracker: ValueTracker<f64>,
    },
    /// Free rotation from pointer movement since drag start, in degrees
    Trackball {
        start_rel: Vec2,
        trackers: [ValueTracker<f64>; 2],
    },
    /// Scale along the axes in `constraint`, by screen distance from the pivot
    Scale {
        constraint: HoveredAxis,
        start_dir: Vec2,
        tracker: ValueTracker<f64>,
        factor: f64,
    },
}

impl ActionKind {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::TranslateAxis { .. } => "translate_axis",
            Self::TranslatePlane { .. } => "translate_plane",
            Self::TranslateFree { .. } => "translate_free",
            Self::RotateAxis { .. } => "rotate_axis",
            Self::Trackball { .. } => "trackball",
            Self::Scale { .. } => "scale",
        }
    }
}

fn zero_tracker() -> ValueTracker<f64> {
    ValueTracker::new(0.0)
}

/// A drag turning pointer motion into a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformAction {
    base: Mat4,
    pivot: Pivot,
    delta: Mat4,
    final_matrix: Mat4,
    state: ActionState,
    kind: ActionKind,
}

impl TransformAction {
    fn new(base: Mat4, pivot: Pivot, kind: ActionKind) -> Self {
        Self {
            base,
            pivot,
            delta: Mat4::IDENTITY,
            final_matrix: base,
            state: ActionState::Idle,
            kind,
        }
    }

    /// Move along one pivot axis.
    pub fn translate_axis(base: Mat4, pivot: Pivot, axis: usize) -> Self {
        Self::new(
            base,
            pivot,
            ActionKind::TranslateAxis {
                axis,
                tracker: zero_tracker(),
            },
        )
    }

    /// Move within the plane of two pivot axes.
    pub fn translate_plane(base: Mat4, pivot: Pivot, axis_a: usize, axis_b: usize) -> Self {
        Self::new(
            base,
            pivot,
            ActionKind::TranslatePlane {
                axes: (axis_a, axis_b),
                trackers: [zero_tracker(); 2],
            },
        )
    }

    /// Move within the plane facing the camera.
    pub fn translate_free(base: Mat4, pivot: Pivot) -> Self {
        Self::new(
            base,
            pivot,
            ActionKind::TranslateFree {
                trackers: [zero_tracker(); 3],
            },
        )
    }

    /// Rotate around one pivot axis.
    pub fn rotate_axis(base: Mat4, pivot: Pivot, axis: usize) -> Self {
        Self::new(
            base,
            pivot,
            ActionKind::RotateAxis {
                axis: RotationAxis::Object(axis),
                axis_vec: pivot.axis(axis),
                tracker: zero_tracker(),
            },
        )
    }

    /// Rotate around the camera's view direction.
    pub fn rotate_view(base: Mat4, pivot: Pivot) -> Self {
        Self::new(
            base,
            pivot,
            ActionKind::RotateAxis {
                axis: RotationAxis::View,
                axis_vec: Vec3::ZERO,
                tracker: zero_tracker(),
            },
        )
    }

    /// Rotate freely around the camera's up and right vectors.
    pub fn trackball(base: Mat4, pivot: Pivot) -> Self {
        Self::new(
            base,
            pivot,
            ActionKind::Trackball {
                start_rel: Vec2::ZERO,
                trackers: [zero_tracker(); 2],
            },
        )
    }

    /// Scale along the axes contained in `constraint` (one axis, a plane or
    /// [`HoveredAxis::ALL`] for uniform scaling).
    pub fn scale(base: Mat4, pivot: Pivot, constraint: HoveredAxis) -> Self {
        Self::new(
            base,
            pivot,
            ActionKind::Scale {
                constraint,
                start_dir: Vec2::ZERO,
                tracker: zero_tracker(),
                factor: 1.0,
            },
        )
    }

    /// Picks the action for a hovered gizmo part.
    pub fn from_hover(
        mode: GizmoMode,
        hovered: HoveredAxis,
        base: Mat4,
        pivot: Pivot,
    ) -> Result<Self, ActionError> {
        let action = match mode {
            GizmoMode::Translate => {
                if let Some(axis) = hovered.single_axis() {
                    Some(Self::translate_axis(base, pivot, axis))
                } else if let Some((a, b)) = hovered.plane_axes() {
                    Some(Self::translate_plane(base, pivot, a, b))
                } else if hovered == HoveredAxis::FREE {
                    Some(Self::translate_free(base, pivot))
                } else {
                    None
                }
            }
            GizmoMode::Rotate => {
                if let Some(axis) = hovered.single_axis() {
                    Some(Self::rotate_axis(base, pivot, axis))
                } else if hovered == HoveredAxis::VIEW_AXIS {
                    Some(Self::rotate_view(base, pivot))
                } else if hovered == HoveredAxis::TRACKBALL {
                    Some(Self::trackball(base, pivot))
                } else {
                    None
                }
            }
            GizmoMode::Scale => {
                let scalable = hovered.single_axis().is_some()
                    || hovered.plane_axes().is_some()
                    || hovered == HoveredAxis::ALL;
                scalable.then(|| Self::scale(base, pivot, hovered))
            }
        };

        action.ok_or(ActionError::UnsupportedHover { mode, hovered })
    }

    /// [`Self::from_hover`] followed by [`Self::start`].
    pub fn begin(
        mode: GizmoMode,
        hovered: HoveredAxis,
        base: Mat4,
        pivot: Pivot,
        view: &SceneViewState,
    ) -> Result<Self, ActionError> {
        let mut action = Self::from_hover(mode, hovered, base, pivot)?;
        action.start(view);
        Ok(action)
    }

    /// Object transform at drag start
    pub fn base_matrix(&self) -> Mat4 {
        self.base
    }

    /// Delta about the pivot for the current frame
    pub fn delta_matrix(&self) -> Mat4 {
        self.delta
    }

    /// `delta * base`
    pub fn final_matrix(&self) -> Mat4 {
        self.final_matrix
    }

    /// Pivot the delta is built around
    pub fn pivot(&self) -> &Pivot {
        &self.pivot
    }

    /// Lifecycle state
    pub fn state(&self) -> ActionState {
        self.state
    }

    /// Variant state
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Captures the start values of the drag from `view`.
    pub fn start(&mut self, view: &SceneViewState) {
        let center = self.pivot.center;

        match &mut self.kind {
            ActionKind::TranslateAxis { axis, tracker } => {
                let axis_vec = self.pivot.axis(*axis);
                let value = axis_drag_value(view, center, axis_vec).unwrap_or_else(|| {
                    warn!(axis = axis_name(*axis), "drag plane parallel to view ray");
                    0.0
                });
                *tracker = ValueTracker::new(value as f64);
            }
            ActionKind::TranslatePlane { axes, trackers } => {
                let (a, b) = (self.pivot.axis(axes.0), self.pivot.axis(axes.1));
                let values = plane_drag_values(view, center, a, b).unwrap_or_else(|| {
                    warn!("drag plane parallel to view ray");
                    [0.0; 2]
                });
                *trackers = values.map(|v| ValueTracker::new(v as f64));
            }
            ActionKind::TranslateFree { trackers } => {
                let hit = view
                    .ray_hit_on_plane(view.camera.forward, center)
                    .unwrap_or(center);
                *trackers = hit.to_array().map(|v| ValueTracker::new(v as f64));
            }
            ActionKind::RotateAxis {
                axis,
                axis_vec,
                tracker,
            } => {
                if *axis == RotationAxis::View {
                    *axis_vec = view.camera.forward;
                }
                *tracker = ValueTracker::new(rotation_input_angle(view, center, *axis_vec));
            }
            ActionKind::Trackball { start_rel, trackers } => {
                *start_rel = view.pointer - view.world_to_screen(center);
                *trackers = [zero_tracker(); 2];
            }
            ActionKind::Scale {
                start_dir,
                tracker,
                factor,
                ..
            } => {
                let rel = view.pointer - view.world_to_screen(center);
                *start_dir = rel.normalize_or_zero();
                *tracker = ValueTracker::new(rel.length() as f64);
                *factor = 1.0;
            }
        }

        self.delta = Mat4::IDENTITY;
        self.final_matrix = self.base;
        self.state = ActionState::Active;

        debug!(kind = self.kind.name(), center = ?center, "transform action started");
    }

    /// Advances the drag by one frame.
    pub fn update(
        &mut self,
        view: &SceneViewState,
        input: &InputSnapshot,
        config: &GizmoConfig,
    ) -> Result<ActionUpdateResult, ActionError> {
        match self.state {
            ActionState::Active => {}
            ActionState::Idle => {
                error!(kind = self.kind.name(), "update called before start");
                return Err(ActionError::NotStarted);
            }
            ActionState::Applied | ActionState::Cancelled => {
                error!(kind = self.kind.name(), "update called on a finished action");
                return Err(ActionError::Finished);
            }
        }

        if input.secondary.down {
            self.delta = Mat4::IDENTITY;
            self.final_matrix = self.base;
            self.state = ActionState::Cancelled;
            debug!(kind = self.kind.name(), "transform action cancelled");
            return Ok(ActionUpdateResult::Cancel);
        }

        let snapping = input
            .snap_modifier
            .then(|| self.snapping_interval(&config.snapping));

        let delta = self.compute_delta(view, snapping, config.actions.trackball_sensitivity);
        let center = self.pivot.center;
        self.delta =
            Mat4::from_translation(center) * delta * Mat4::from_translation(-center);
        self.final_matrix = self.delta * self.base;

        trace!(kind = self.kind.name(), status = %self.status_text(), "transform action updated");

        if input.primary.released {
            self.state = ActionState::Applied;
            debug!(kind = self.kind.name(), status = %self.status_text(), "transform action applied");
            return Ok(ActionUpdateResult::Apply);
        }

        Ok(ActionUpdateResult::None)
    }

    fn snapping_interval(&self, snapping: &SnappingConfig) -> f32 {
        match self.kind {
            ActionKind::TranslateAxis { .. }
            | ActionKind::TranslatePlane { .. }
            | ActionKind::TranslateFree { .. } => snapping.translate,
            ActionKind::RotateAxis { .. } | ActionKind::Trackball { .. } => snapping.rotate_degrees,
            ActionKind::Scale { .. } => snapping.scale,
        }
    }

    /// Feeds the trackers and returns the delta as if the pivot were the
    /// origin.
    fn compute_delta(&mut self, view: &SceneViewState, snapping: Option<f32>, sensitivity: f32) -> Mat4 {
        let center = self.pivot.center;

        match &mut self.kind {
            ActionKind::TranslateAxis { axis, tracker } => {
                let axis_vec = self.pivot.axis(*axis);
                match axis_drag_value(view, center, axis_vec) {
                    Some(value) => tracker.update(value as f64, snapping),
                    None => warn!(axis = axis_name(*axis), "drag plane parallel to view ray"),
                }
                Mat4::from_translation(axis_vec * tracker.delta_value() as f32)
            }
            ActionKind::TranslatePlane { axes, trackers } => {
                let (a, b) = (self.pivot.axis(axes.0), self.pivot.axis(axes.1));
                match plane_drag_values(view, center, a, b) {
                    Some(values) => {
                        for (tracker, value) in trackers.iter_mut().zip(values) {
                            tracker.update(value as f64, snapping);
                        }
                    }
                    None => warn!("drag plane parallel to view ray"),
                }
                Mat4::from_translation(
                    a * trackers[0].delta_value() as f32 + b * trackers[1].delta_value() as f32,
                )
            }
            ActionKind::TranslateFree { trackers } => {
                match view.ray_hit_on_plane(view.camera.forward, center) {
                    Some(hit) => {
                        for (tracker, value) in trackers.iter_mut().zip(hit.to_array()) {
                            tracker.update(value as f64, snapping);
                        }
                    }
                    None => warn!("drag plane parallel to view ray"),
                }
                let [x, y, z] = trackers.each_ref().map(|t| t.delta_value() as f32);
                Mat4::from_translation(Vec3::new(x, y, z))
            }
            ActionKind::RotateAxis {
                axis_vec, tracker, ..
            } => {
                let input_angle = rotation_input_angle(view, center, *axis_vec);
                let current = tracker.value();
                tracker.update(
                    current + shortest_rotation_between(current, input_angle, 360.0),
                    snapping,
                );
                Mat4::from_axis_angle(*axis_vec, (tracker.delta_value() as f32).to_radians())
            }
            ActionKind::Trackball { start_rel, trackers } => {
                let moved = (view.pointer - view.world_to_screen(center) - *start_rel) * sensitivity;
                trackers[0].update(moved.x as f64, snapping);
                trackers[1].update(moved.y as f64, snapping);

                let angle_x = (trackers[0].delta_value() as f32).to_radians();
                let angle_y = (trackers[1].delta_value() as f32).to_radians();
                let camera = &view.camera;

                Mat4::from_axis_angle(camera.right(), angle_y)
                    * Mat4::from_axis_angle(camera.up, angle_x)
            }
            ActionKind::Scale {
                constraint,
                start_dir,
                tracker,
                factor,
            } => {
                let rel = view.pointer - view.world_to_screen(center);
                let sign = if rel.dot(*start_dir) > 0.0 { 1.0 } else { -1.0 };
                tracker.update(rel.length() as f64 * sign, None);

                *factor = tracker.scale_factor_or_identity();
                if let Some(interval) = snapping.filter(|i| *i > 0.0) {
                    *factor = snap_to_interval(*factor, interval as f64);
                }

                let s = *factor as f32;
                let scale = Vec3::new(
                    if constraint.contains(HoveredAxis::X) { s } else { 1.0 },
                    if constraint.contains(HoveredAxis::Y) { s } else { 1.0 },
                    if constraint.contains(HoveredAxis::Z) { s } else { 1.0 },
                );

                let basis = orthonormal_basis(&self.pivot.axes);
                Mat4::from_mat3(basis * Mat3::from_diagonal(scale) * basis.transpose())
            }
        }
    }

    /// Live readout, e.g. `"Rotating along X : 45.0°"`.
    pub fn status_text(&self) -> String {
        match &self.kind {
            ActionKind::TranslateAxis { axis, tracker } => {
                format!("Moving along {} : {:.2}", axis_name(*axis), tracker.delta_value())
            }
            ActionKind::TranslatePlane { axes, trackers } => format!(
                "Moving along {}{} : {:.2}, {:.2}",
                axis_name(axes.0),
                axis_name(axes.1),
                trackers[0].delta_value(),
                trackers[1].delta_value()
            ),
            ActionKind::TranslateFree { trackers } => format!(
                "Moving : {:.2}, {:.2}, {:.2}",
                trackers[0].delta_value(),
                trackers[1].delta_value(),
                trackers[2].delta_value()
            ),
            ActionKind::RotateAxis { axis, tracker, .. } => {
                let name = match axis {
                    RotationAxis::Object(axis) => axis_name(*axis),
                    RotationAxis::View => "View",
                };
                format!("Rotating along {name} : {:.1}°", tracker.delta_value())
            }
            ActionKind::Trackball { trackers, .. } => format!(
                "Rotating along Trackball : {:.1}° {:.1}°",
                trackers[0].delta_value(),
                trackers[1].delta_value()
            ),
            ActionKind::Scale {
                constraint, factor, ..
            } => {
                if let Some(axis) = constraint.single_axis() {
                    format!("Scaling along {} : {factor:.2}", axis_name(axis))
                } else if let Some((a, b)) = constraint.plane_axes() {
                    format!("Scaling along {}{} : {factor:.2}", axis_name(a), axis_name(b))
                } else {
                    format!("Scaling : {factor:.2}")
                }
            }
        }
    }

    /// Color of the readout and pivot dot
    pub fn status_color(&self, colors: &ColorConfig) -> PackedColor {
        match &self.kind {
            ActionKind::TranslateAxis { axis, .. }
            | ActionKind::RotateAxis {
                axis: RotationAxis::Object(axis),
                ..
            } => colors.axis(*axis),
            ActionKind::TranslatePlane { axes, .. } => {
                colors.axis(axes.0).additive_blend(colors.axis(axes.1))
            }
            ActionKind::Scale { constraint, .. } => match constraint.single_axis() {
                Some(axis) => colors.axis(axis),
                None => colors.view_axis,
            },
            _ => colors.view_axis,
        }
    }
}

/// Signed distance along `axis_vec` of the point where the pointer ray hits
/// the plane containing the axis that faces the camera best.
fn axis_drag_value(view: &SceneViewState, center: Vec3, axis_vec: Vec3) -> Option<f32> {
    let normal = view.camera.forward.cross(axis_vec).cross(axis_vec);
    let hit = view.ray_hit_on_plane(normal, center)?;
    Some((hit - center).dot(axis_vec))
}

fn plane_drag_values(view: &SceneViewState, center: Vec3, a: Vec3, b: Vec3) -> Option<[f32; 2]> {
    let hit = view.ray_hit_on_plane(a.cross(b), center)?;
    let rel = hit - center;
    Some([rel.dot(a), rel.dot(b)])
}

/// Pointer angle around the pivot in degrees.
///
/// Seen roughly along the axis this is the bearing of the pointer around the
/// pivot. Seen from the side the ring collapses, so the pointer offset along
/// the ring's screen tangent is used instead.
fn rotation_input_angle(view: &SceneViewState, center: Vec3, axis_vec: Vec3) -> f64 {
    let center_2d = view.world_to_screen(center);
    let rel = view.pointer - center_2d;
    let to_camera = (view.camera.position - center).normalize_or_zero();
    let axis_cam_dot = to_camera.dot(axis_vec);

    if axis_cam_dot.abs() < 0.5 {
        let line_dir = axis_vec.cross(to_camera).normalize_or_zero();
        let line_dir_2d = (view.world_to_screen(center + line_dir) - center_2d).normalize_or_zero();

        let a = (line_dir_2d.dot(rel) / 100.0) as f64;
        a.abs().powf(0.9) * a.signum() * 180.0
    } else {
        let direction = rel.normalize_or_zero();
        let sign = axis_cam_dot.signum() as f64;
        (-direction.y as f64).atan2(direction.x as f64).to_degrees() * sign
    }
}

/// Gram-Schmidt orthonormalization of the columns of `axes`.
fn orthonormal_basis(axes: &Mat3) -> Mat3 {
    let x = axes.x_axis.try_normalize().unwrap_or(Vec3::X);
    let y = (axes.y_axis - x * x.dot(axes.y_axis))
        .try_normalize()
        .unwrap_or_else(|| x.any_orthonormal_vector());
    let z = (axes.z_axis - x * x.dot(axes.z_axis) - y * y.dot(axes.z_axis))
        .try_normalize()
        .unwrap_or_else(|| x.cross(y));
    Mat3::from_cols(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::front_view;
    use approx::assert_relative_eq;
    use etk_core::ButtonState;
    use glam::Quat;

    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    fn held() -> InputSnapshot {
        InputSnapshot::primary(ButtonState::HELD)
    }

    fn screen_of(point: Vec3) -> Vec2 {
        front_view(Vec2::ZERO).world_to_screen(point)
    }

    fn origin_pivot() -> Pivot {
        Pivot::from_transform(&Mat4::IDENTITY)
    }

    #[test]
    fn test_axis_translation() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::translate_axis(Mat4::IDENTITY, origin_pivot(), 0);
        action.start(&front_view(screen_of(Vec3::new(3.0, 0.0, 0.0))));

        let result = action
            .update(&front_view(screen_of(Vec3::new(5.0, 0.4, 0.0))), &held(), &config)
            .unwrap();
        assert_eq!(result, ActionUpdateResult::None);

        let translation = action.final_matrix().w_axis.truncate();
        assert_relative_eq!(translation.x, 2.0, epsilon = 1e-3);
        assert_relative_eq!(translation.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(translation.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_axis_translation_snaps() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::translate_axis(Mat4::IDENTITY, origin_pivot(), 0);
        action.start(&front_view(screen_of(Vec3::new(3.0, 0.0, 0.0))));

        action
            .update(
                &front_view(screen_of(Vec3::new(5.3, 0.0, 0.0))),
                &held().with_snapping(),
                &config,
            )
            .unwrap();

        assert_relative_eq!(action.delta_matrix().w_axis.x, 2.25, epsilon = 1e-5);
        assert_eq!(action.status_text(), "Moving along X : 2.25");
    }

    #[test]
    fn test_translation_keeps_pivot_relative_delta() {
        let config = GizmoConfig::default();
        let base = Mat4::from_rotation_translation(Quat::from_rotation_z(0.3), Vec3::new(1.0, 1.0, 0.0));
        let mut action = TransformAction::translate_plane(base, Pivot::from_transform(&Mat4::from_translation(Vec3::new(1.0, 1.0, 0.0))), 0, 1);
        action.start(&front_view(screen_of(Vec3::new(1.0, 1.0, 0.0))));
        action
            .update(&front_view(screen_of(Vec3::new(2.0, 0.5, 0.0))), &held(), &config)
            .unwrap();

        let moved = action.final_matrix().w_axis.truncate();
        assert_relative_eq!(moved.x, 2.0, epsilon = 1e-3);
        assert_relative_eq!(moved.y, 0.5, epsilon = 1e-3);
        // rotation untouched
        assert!(action.final_matrix().x_axis.abs_diff_eq(base.x_axis, 1e-6));
    }

    #[test]
    fn test_parallel_drag_plane_keeps_identity() {
        let config = GizmoConfig::default();
        // Z points straight at the front camera
        let mut action = TransformAction::translate_axis(Mat4::IDENTITY, origin_pivot(), 2);
        action.start(&front_view(CENTER));
        let result = action
            .update(&front_view(CENTER + Vec2::new(30.0, 0.0)), &held(), &config)
            .unwrap();
        assert_eq!(result, ActionUpdateResult::None);
        assert_eq!(action.delta_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_uniform_scale() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::scale(Mat4::IDENTITY, origin_pivot(), HoveredAxis::ALL);
        action.start(&front_view(CENTER + Vec2::new(100.0, 0.0)));

        action
            .update(&front_view(CENTER + Vec2::new(150.0, 0.0)), &held(), &config)
            .unwrap();
        assert_relative_eq!(action.final_matrix().x_axis.x, 1.5, epsilon = 1e-5);
        assert_relative_eq!(action.final_matrix().z_axis.z, 1.5, epsilon = 1e-5);

        action
            .update(&front_view(CENTER + Vec2::new(50.0, 0.0)), &held(), &config)
            .unwrap();
        assert_relative_eq!(action.final_matrix().y_axis.y, 0.5, epsilon = 1e-5);

        // through the pivot flips the sign
        action
            .update(&front_view(CENTER - Vec2::new(50.0, 0.0)), &held(), &config)
            .unwrap();
        assert_relative_eq!(action.final_matrix().x_axis.x, -0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_axis_scale_leaves_other_axes() {
        let config = GizmoConfig::default();
        let pivot = Pivot::from_transform(&Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)));
        let base = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let pivot_2d = screen_of(pivot.center);

        let mut action = TransformAction::scale(base, pivot, HoveredAxis::X);
        action.start(&front_view(pivot_2d + Vec2::new(0.0, 40.0)));
        action
            .update(&front_view(pivot_2d + Vec2::new(0.0, 80.0)), &held(), &config)
            .unwrap();

        let result = action.final_matrix();
        assert_relative_eq!(result.x_axis.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(result.y_axis.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(result.z_axis.z, 1.0, epsilon = 1e-6);
        // scaled about the pivot, so the object stays put
        assert_relative_eq!(result.w_axis.x, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_scale_snaps_factor() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::scale(Mat4::IDENTITY, origin_pivot(), HoveredAxis::PLANE_XY);
        action.start(&front_view(CENTER + Vec2::new(100.0, 0.0)));
        action
            .update(&front_view(CENTER + Vec2::new(163.0, 0.0)), &held().with_snapping(), &config)
            .unwrap();

        assert_relative_eq!(action.final_matrix().x_axis.x, 1.6, epsilon = 1e-5);
        assert_relative_eq!(action.final_matrix().z_axis.z, 1.0);
        assert_eq!(action.status_text(), "Scaling along XY : 1.60");
    }

    #[test]
    fn test_scale_from_pivot_is_identity() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::scale(Mat4::IDENTITY, origin_pivot(), HoveredAxis::ALL);
        action.start(&front_view(CENTER));
        action
            .update(&front_view(CENTER + Vec2::new(50.0, 0.0)), &held(), &config)
            .unwrap();
        assert_eq!(action.final_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_cancel_restores_base() {
        let config = GizmoConfig::default();
        let base = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::from_rotation_y(0.7),
            Vec3::new(0.5, -1.0, 0.0),
        );
        let pivot = Pivot::from_transform(&base);
        let mut action = TransformAction::rotate_axis(base, pivot, 1);
        action.start(&front_view(CENTER + Vec2::new(100.0, 0.0)));
        action
            .update(&front_view(CENTER + Vec2::new(0.0, 100.0)), &held(), &config)
            .unwrap();
        assert_ne!(action.final_matrix(), base);

        let cancel = InputSnapshot {
            primary: ButtonState::HELD,
            secondary: ButtonState::PRESSED,
            snap_modifier: false,
        };
        let result = action
            .update(&front_view(CENTER + Vec2::new(0.0, 120.0)), &cancel, &config)
            .unwrap();

        assert_eq!(result, ActionUpdateResult::Cancel);
        assert_eq!(action.delta_matrix(), Mat4::IDENTITY);
        assert_eq!(action.final_matrix(), base);
        assert_eq!(action.state(), ActionState::Cancelled);
    }

    #[test]
    fn test_release_applies() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::translate_free(Mat4::IDENTITY, origin_pivot());
        action.start(&front_view(CENTER));

        let result = action
            .update(
                &front_view(screen_of(Vec3::new(1.0, 2.0, 0.0))),
                &InputSnapshot::primary(ButtonState::RELEASED),
                &config,
            )
            .unwrap();

        assert_eq!(result, ActionUpdateResult::Apply);
        assert_eq!(action.state(), ActionState::Applied);
        let moved = action.final_matrix().w_axis.truncate();
        assert_relative_eq!(moved.x, 1.0, epsilon = 1e-3);
        assert_relative_eq!(moved.y, 2.0, epsilon = 1e-3);
        assert_relative_eq!(moved.z, 0.0, epsilon = 1e-3);

        assert_eq!(
            action.update(&front_view(CENTER), &held(), &config),
            Err(ActionError::Finished)
        );
    }

    #[test]
    fn test_update_before_start() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::trackball(Mat4::IDENTITY, origin_pivot());
        assert_eq!(
            action.update(&front_view(CENTER), &held(), &config),
            Err(ActionError::NotStarted)
        );
        assert_eq!(action.state(), ActionState::Idle);
    }

    #[test]
    fn test_rotation_wraps_past_full_turn() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::rotate_axis(Mat4::IDENTITY, origin_pivot(), 2);
        action.start(&front_view(CENTER + Vec2::new(100.0, 0.0)));

        for step in 1..=37 {
            let angle = (step as f32 * 10.0).to_radians();
            let pointer = CENTER + Vec2::new(angle.cos(), -angle.sin()) * 100.0;
            action.update(&front_view(pointer), &held(), &config).unwrap();
        }

        assert_eq!(action.status_text(), "Rotating along Z : 370.0°");
        let x = action.final_matrix().transform_vector3(Vec3::X);
        assert_relative_eq!(x.x, 10f32.to_radians().cos(), epsilon = 1e-4);
        assert_relative_eq!(x.y, 10f32.to_radians().sin(), epsilon = 1e-4);
    }

    #[test]
    fn test_side_on_rotation_uses_linear_drag() {
        let config = GizmoConfig::default();
        // X is perpendicular to the view direction of the front camera
        let mut action = TransformAction::rotate_axis(Mat4::IDENTITY, origin_pivot(), 0);
        action.start(&front_view(CENTER));
        action
            .update(&front_view(CENTER + Vec2::new(0.0, 50.0)), &held(), &config)
            .unwrap();

        assert_eq!(action.status_text(), "Rotating along X : 96.5°");
    }

    #[test]
    fn test_view_rotation_uses_camera_forward() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::rotate_view(Mat4::IDENTITY, origin_pivot());
        action.start(&front_view(CENTER + Vec2::new(100.0, 0.0)));
        action
            .update(&front_view(CENTER + Vec2::new(0.0, -100.0)), &held(), &config)
            .unwrap();

        // forward is -Z, so a counter-clockwise drag on screen is -90° about it
        assert_eq!(action.status_text(), "Rotating along View : -90.0°");
        let x = action.final_matrix().transform_vector3(Vec3::X);
        assert_relative_eq!(x.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_trackball_snapping() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::trackball(Mat4::IDENTITY, origin_pivot());
        action.start(&front_view(CENTER));
        action
            .update(
                &front_view(CENTER + Vec2::new(37.0, 4.0)),
                &held().with_snapping(),
                &config,
            )
            .unwrap();

        assert_eq!(action.status_text(), "Rotating along Trackball : 30.0° 0.0°");
        // 30° about camera up (+Y)
        let x = action.final_matrix().transform_vector3(Vec3::X);
        assert_relative_eq!(x.x, 30f32.to_radians().cos(), epsilon = 1e-4);
        assert_relative_eq!(x.z, -(30f32.to_radians().sin()), epsilon = 1e-4);
    }

    #[test]
    fn test_from_hover() {
        let base = Mat4::IDENTITY;
        let pivot = origin_pivot();

        let action =
            TransformAction::from_hover(GizmoMode::Translate, HoveredAxis::PLANE_YZ, base, pivot)
                .unwrap();
        assert!(matches!(
            action.kind(),
            ActionKind::TranslatePlane { axes: (1, 2), .. }
        ));

        let action =
            TransformAction::from_hover(GizmoMode::Rotate, HoveredAxis::TRACKBALL, base, pivot)
                .unwrap();
        assert!(matches!(action.kind(), ActionKind::Trackball { .. }));

        let action =
            TransformAction::from_hover(GizmoMode::Scale, HoveredAxis::FREE, base, pivot).unwrap();
        assert!(matches!(
            action.kind(),
            ActionKind::Scale {
                constraint: HoveredAxis::ALL,
                ..
            }
        ));

        assert_eq!(
            TransformAction::from_hover(GizmoMode::Translate, HoveredAxis::VIEW_AXIS, base, pivot),
            Err(ActionError::UnsupportedHover {
                mode: GizmoMode::Translate,
                hovered: HoveredAxis::VIEW_AXIS
            })
        );
        assert!(
            TransformAction::from_hover(GizmoMode::Rotate, HoveredAxis::PLANE_XY, base, pivot)
                .is_err()
        );
        assert!(
            TransformAction::from_hover(GizmoMode::Scale, HoveredAxis::NONE, base, pivot).is_err()
        );
    }
}
