//! On-screen feedback while a transform action is active

use etk_core::{DrawList, GizmoConfig, PackedColor, SceneViewState};
use glam::Vec3;

use super::{ActionKind, ActionState, RotationAxis, TransformAction};

/// Half length of the constraint guide line, in world units.
const GUIDE_LINE_EXTENT: f32 = 1000.0;
const GUIDE_LINE_MASK: u32 = 0xAA_FF_FF_FF;

impl TransformAction {
    /// Axis the drag is constrained to, if any.
    fn guide_axis(&self) -> Option<(usize, Vec3)> {
        match &self.kind {
            ActionKind::TranslateAxis { axis, .. } => Some((*axis, self.pivot.axis(*axis))),
            ActionKind::RotateAxis {
                axis: RotationAxis::Object(axis),
                axis_vec,
                ..
            } => Some((*axis, *axis_vec)),
            ActionKind::Scale { constraint, .. } => constraint
                .single_axis()
                .map(|axis| (axis, self.pivot.axis(axis))),
            _ => None,
        }
    }

    /// Draws the status readout, the constraint guide line and the pivot dot.
    ///
    /// Nothing is drawn unless the action is active.
    pub fn draw_overlay<D: DrawList + ?Sized>(
        &self,
        view: &SceneViewState,
        draw: &mut D,
        config: &GizmoConfig,
    ) {
        if self.state != ActionState::Active {
            return;
        }

        let center = self.pivot.center;
        let center_2d = view.world_to_screen(center);
        let color = self.status_color(&config.colors);

        if let Some((axis, axis_vec)) = self.guide_axis() {
            let line_color = config.colors.axis(axis).masked(GUIDE_LINE_MASK);
            for end in [axis_vec, -axis_vec] {
                if let Some((a, b)) = view.clip_line(center, center + end * GUIDE_LINE_EXTENT) {
                    draw.line(a, b, line_color, 1.5);
                }
            }
        }

        draw.circle_filled(center_2d, 3.0, color);
        draw.text(
            center_2d,
            PackedColor::WHITE,
            config.actions.status_text_size,
            &self.status_text(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Pivot;
    use crate::test_util::front_view;
    use etk_core::{DrawCommand, DrawRecorder, HoveredAxis};
    use glam::{Mat4, Vec2};

    #[test]
    fn test_axis_overlay_draws_guide_and_status() {
        let config = GizmoConfig::default();
        let mut action =
            TransformAction::translate_axis(Mat4::IDENTITY, Pivot::from_transform(&Mat4::IDENTITY), 0);
        let view = front_view(Vec2::new(400.0, 300.0));
        action.start(&view);

        let mut draw = DrawRecorder::new();
        action.draw_overlay(&view, &mut draw, &config);

        let guides = draw
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(guides, 2);
        assert_eq!(draw.texts().collect::<Vec<_>>(), ["Moving along X : 0.00"]);
        assert!(draw.uses_color(config.colors.x_axis.masked(GUIDE_LINE_MASK)));
    }

    #[test]
    fn test_uniform_scale_has_no_guide() {
        let config = GizmoConfig::default();
        let mut action = TransformAction::scale(
            Mat4::IDENTITY,
            Pivot::from_transform(&Mat4::IDENTITY),
            HoveredAxis::ALL,
        );
        let view = front_view(Vec2::new(450.0, 300.0));
        action.start(&view);

        let mut draw = DrawRecorder::new();
        action.draw_overlay(&view, &mut draw, &config);

        assert!(!draw.commands.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
        assert_eq!(draw.texts().next(), Some("Scaling : 1.00"));
    }

    #[test]
    fn test_idle_action_draws_nothing() {
        let config = GizmoConfig::default();
        let action = TransformAction::trackball(Mat4::IDENTITY, Pivot::from_transform(&Mat4::IDENTITY));
        let mut draw = DrawRecorder::new();
        action.draw_overlay(&front_view(Vec2::ZERO), &mut draw, &config);
        assert!(draw.commands.is_empty());
    }
}
