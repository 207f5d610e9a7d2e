//! Properties panel: transform of the edited object and gizmo status

use egui::{DragValue, Ui};
use etk_gizmo::{GizmoMode, GizmoSpace};
use glam::Vec3;

use crate::config::SharedConfig;
use crate::panels::Panel;
use crate::state::{SharedViewportState, TransformParts};
use crate::theme::palette;

/// Labeled X/Y/Z drag values. Returns whether any component changed.
fn vector3_row(ui: &mut Ui, label: &str, value: &mut Vec3, speed: f64, suffix: &str) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right to left, so Z first
            for (component, name, color) in [
                (&mut value.z, "Z", palette::AXIS_Z),
                (&mut value.y, "Y", palette::AXIS_Y),
                (&mut value.x, "X", palette::AXIS_X),
            ] {
                changed |= ui
                    .add(DragValue::new(component).speed(speed).suffix(suffix))
                    .changed();
                ui.colored_label(color, name);
            }
        });
    });
    changed
}

/// Properties panel for the edited object
pub struct PropertiesPanel;

impl PropertiesPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PropertiesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for PropertiesPanel {
    fn name(&self) -> &str {
        "Properties"
    }

    fn ui(&mut self, ui: &mut Ui, viewport_state: &SharedViewportState, _config: &SharedConfig) {
        let mut state = viewport_state.lock();

        ui.heading("Properties");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut state.object.name);
        });

        ui.separator();

        let dragging = state.gizmo.is_dragging();
        let mut parts = TransformParts::from_matrix(&state.object.transform);
        let mut changed = false;

        egui::CollapsingHeader::new("Transform")
            .default_open(true)
            .show(ui, |ui| {
                ui.add_enabled_ui(!dragging, |ui| {
                    changed |= vector3_row(ui, "Position", &mut parts.position, 0.01, "");
                    changed |= vector3_row(ui, "Rotation", &mut parts.rotation_deg, 1.0, "°");
                    changed |= vector3_row(ui, "Scale", &mut parts.scale, 0.01, "");

                    if ui.button("Reset").clicked() {
                        state.reset_object();
                    }
                });
            });

        if changed {
            state.set_object_transform(parts.to_matrix());
        }

        egui::CollapsingHeader::new("Gizmo")
            .default_open(true)
            .show(ui, |ui| {
                let mut mode = state.gizmo_mode();
                ui.horizontal(|ui| {
                    for m in GizmoMode::ALL {
                        ui.selectable_value(&mut mode, m, m.label());
                    }
                });
                state.set_gizmo_mode(mode);

                let mut space = state.gizmo_space();
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut space, GizmoSpace::Global, "Global");
                    ui.selectable_value(&mut space, GizmoSpace::Local, "Local");
                });
                state.set_gizmo_space(space);

                ui.separator();

                match state.gizmo.action() {
                    Some(action) => {
                        ui.label(action.status_text());
                    }
                    None => {
                        let hovered = state.gizmo.hovered();
                        if hovered.is_none() {
                            ui.weak("Drag a handle to transform. Hold Ctrl to snap.");
                        } else {
                            ui.label(format!("Hovered: {hovered:?}"));
                        }
                    }
                }
            });
    }
}
