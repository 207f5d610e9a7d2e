//! Gizmo mode and space toggle overlay for the viewport

use etk_gizmo::{GizmoMode, GizmoSpace};

use crate::state::ViewportState;
use crate::theme;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(24.0, 24.0);

fn mode_icon(mode: GizmoMode) -> &'static str {
    match mode {
        GizmoMode::Translate => "↔",
        GizmoMode::Rotate => "⟳",
        GizmoMode::Scale => "⤢",
    }
}

fn mode_shortcut(mode: GizmoMode) -> &'static str {
    match mode {
        GizmoMode::Translate => "T",
        GizmoMode::Rotate => "R",
        GizmoMode::Scale => "S",
    }
}

/// Render the gizmo toolbar in the top-left corner of `rect` (floating UI)
pub fn render_gizmo_toolbar(ui: &mut egui::Ui, rect: egui::Rect, state: &mut ViewportState) {
    let panel_margin = 10.0;
    let toolbar_pos = egui::pos2(rect.left() + panel_margin, rect.top() + panel_margin);

    egui::Area::new(egui::Id::new("gizmo_toolbar"))
        .fixed_pos(toolbar_pos)
        .order(egui::Order::Foreground)
        .show(ui.ctx(), |ui| {
            theme::overlay_frame(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 2.0;

                    let current_mode = state.gizmo_mode();
                    for mode in GizmoMode::ALL {
                        let button = egui::Button::new(mode_icon(mode))
                            .selected(current_mode == mode)
                            .min_size(BUTTON_SIZE);
                        let hint = format!("{} ({})", mode.label(), mode_shortcut(mode));
                        if ui.add(button).on_hover_text(hint).clicked() {
                            state.set_gizmo_mode(mode);
                        }
                    }

                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(4.0);

                    let (space_icon, space_text, next_space) = match state.gizmo_space() {
                        GizmoSpace::Global => ("🌐", "Global (G)", GizmoSpace::Local),
                        GizmoSpace::Local => ("📦", "Local (G)", GizmoSpace::Global),
                    };
                    let space_btn = egui::Button::new(space_icon).min_size(BUTTON_SIZE);
                    if ui.add(space_btn).on_hover_text(space_text).clicked() {
                        state.set_gizmo_space(next_space);
                    }
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_shortcut_labels() {
        let keys: Vec<_> = GizmoMode::ALL.into_iter().map(mode_shortcut).collect();
        assert_eq!(keys, ["T", "R", "S"]);
    }
}
