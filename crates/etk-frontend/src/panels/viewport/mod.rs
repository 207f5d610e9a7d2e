//! 3D viewport panel: orbit camera, wireframe scene, transform gizmo and
//! orientation cube

mod scene;
mod toolbar;

use etk_core::{Rect, SceneViewState};
use etk_gizmo::{ActionUpdateResult, GizmoDrawer, GizmoId, GizmoMode, GizmoSpace};
use glam::{Vec2, Vec3};

use crate::config::{AppConfig, SharedConfig};
use crate::input::{fly_direction, pointer_position, sample_input};
use crate::painter::EguiDrawList;
use crate::panels::Panel;
use crate::state::{OBJECT_HALF_EXTENT, SharedViewportState, ViewportState};
use crate::theme::palette;

use scene::{draw_grid, draw_wire_cube};
use toolbar::render_gizmo_toolbar;

/// Distance of the orientation cube's center from the top-right corner
const CUBE_MARGIN: f32 = 60.0;

/// Gizmo mode bound to a keyboard shortcut
pub fn shortcut_mode(key: egui::Key) -> Option<GizmoMode> {
    match key {
        egui::Key::T => Some(GizmoMode::Translate),
        egui::Key::R => Some(GizmoMode::Rotate),
        egui::Key::S => Some(GizmoMode::Scale),
        _ => None,
    }
}

fn to_rect(rect: egui::Rect) -> Rect {
    Rect::new(
        Vec2::new(rect.min.x, rect.min.y),
        Vec2::new(rect.max.x, rect.max.y),
    )
}

/// 3D viewport panel
pub struct ViewportPanel {
    cube_id: GizmoId,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            cube_id: GizmoId::from_name("orientation_cube"),
        }
    }

    fn view_toolbar(ui: &mut egui::Ui, state: &mut ViewportState, config: &SharedConfig) {
        ui.horizontal(|ui| {
            ui.label("View:");
            if ui.button("Top").clicked() {
                state.camera.look_from(Vec3::Y);
            }
            if ui.button("Front").clicked() {
                state.camera.look_from(Vec3::Z);
            }
            if ui.button("Side").clicked() {
                state.camera.look_from(Vec3::X);
            }
            if ui.button("Fit").on_hover_text("Frame object (F)").clicked() {
                state.frame_object();
            }

            ui.separator();

            let mut viewport = config.read().config().viewport.clone();
            let mut changed = ui.checkbox(&mut viewport.show_grid, "Grid").changed();
            changed |= ui
                .checkbox(&mut viewport.show_orientation_cube, "View Cube")
                .changed();
            if changed {
                config.write().config_mut().viewport = viewport;
            }
        });
    }

    /// Orbit, pan, zoom and fly. Skipped entirely while a gizmo drag runs.
    fn camera_controls(
        ui: &egui::Ui,
        response: &egui::Response,
        state: &mut ViewportState,
        config: &AppConfig,
    ) {
        if state.gizmo.is_dragging() {
            return;
        }

        let sensitivity = config.viewport.orbit_sensitivity;

        if response.dragged_by(egui::PointerButton::Middle) {
            let delta = response.drag_delta();
            if ui.input(|i| i.modifiers.shift) {
                state.camera.pan(delta.x, delta.y);
            } else {
                state
                    .camera
                    .orbit(-delta.x * sensitivity, delta.y * sensitivity);
            }
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            state
                .camera
                .orbit(-delta.x * sensitivity, delta.y * sensitivity);

            // Fly while the right button is held
            let (direction, dt) =
                ui.input(|i| (fly_direction(|key| i.key_down(key)), i.stable_dt));
            if direction != Vec3::ZERO {
                state
                    .camera
                    .fly(direction * config.viewport.fly_speed * dt);
                ui.ctx().request_repaint();
            }
        }

        if response.hovered() {
            let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll_delta != 0.0 {
                state.camera.zoom(scroll_delta * 0.01);
            }
        }
    }

    fn keyboard_shortcuts(ui: &egui::Ui, response: &egui::Response, state: &mut ViewportState) {
        if !response.hovered() || response.dragged_by(egui::PointerButton::Secondary) {
            return;
        }

        let (mode, toggle_space, frame) = ui.input(|i| {
            let mode = [egui::Key::T, egui::Key::R, egui::Key::S]
                .into_iter()
                .find(|key| i.key_pressed(*key))
                .and_then(shortcut_mode);
            (mode, i.key_pressed(egui::Key::G), i.key_pressed(egui::Key::F))
        });

        if let Some(mode) = mode {
            state.set_gizmo_mode(mode);
        }
        if toggle_space {
            let next = match state.gizmo_space() {
                GizmoSpace::Global => GizmoSpace::Local,
                GizmoSpace::Local => GizmoSpace::Global,
            };
            state.set_gizmo_space(next);
        }
        if frame {
            state.frame_object();
        }
    }

    /// Draws the orientation cube and turns the camera on a click.
    ///
    /// Returns whether the pointer is over the cube.
    fn orientation_cube(
        &self,
        painter: &egui::Painter,
        response: &egui::Response,
        view: &SceneViewState,
        state: &mut ViewportState,
        config: &AppConfig,
    ) -> bool {
        let rect = response.rect;
        let center = Vec2::new(rect.right() - CUBE_MARGIN, rect.top() + CUBE_MARGIN);
        let radius = config.gizmo.sizes.orientation_cube_radius;
        let over_cube = response.hovered() && view.pointer.distance(center) < radius;

        let mut draw = EguiDrawList::new(painter);
        let mut drawer = GizmoDrawer::begin(
            self.cube_id,
            &mut state.cube_resolver,
            view,
            &mut draw,
            &config.gizmo,
        );
        let hovered = drawer.orientation_cube(center, radius);
        drawer.end(over_cube);

        if over_cube
            && response.clicked_by(egui::PointerButton::Primary)
            && let Some(direction) = hovered
        {
            tracing::debug!(?direction, "view cube clicked");
            state.camera.look_from(direction);
        }

        over_cube
    }

    fn context_menu(response: &egui::Response, state: &mut ViewportState) {
        response.context_menu(|ui| {
            if ui.button("Frame Object").clicked() {
                state.frame_object();
                ui.close();
            }
            if ui.button("Reset Object").clicked() {
                state.reset_object();
                ui.close();
            }
            ui.separator();
            if ui.button("Top View").clicked() {
                state.camera.look_from(Vec3::Y);
                ui.close();
            }
            if ui.button("Front View").clicked() {
                state.camera.look_from(Vec3::Z);
                ui.close();
            }
            if ui.button("Side View").clicked() {
                state.camera.look_from(Vec3::X);
                ui.close();
            }
        });
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "3D Viewport"
    }

    fn ui(&mut self, ui: &mut egui::Ui, viewport_state: &SharedViewportState, config: &SharedConfig) {
        let mut guard = viewport_state.lock();
        let state = &mut *guard;

        Self::view_toolbar(ui, state, config);

        let available_size = ui.available_size();
        if available_size.x <= 0.0 || available_size.y <= 0.0 {
            return;
        }

        let (response, painter) =
            ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        painter.rect_filled(response.rect, 0.0, palette::BG_BASE);

        let cfg = config.read();
        let app_config = cfg.config();

        Self::camera_controls(ui, &response, state, app_config);
        Self::keyboard_shortcuts(ui, &response, state);

        let rect = to_rect(response.rect);
        let (pointer, input) = ui.input(|i| (pointer_position(i), sample_input(i)));
        let view = state.scene_view(rect, pointer.unwrap_or_else(|| rect.center()));

        {
            let mut draw = EguiDrawList::new(&painter);
            if app_config.viewport.show_grid {
                draw_grid(&view, &mut draw);
            }
            let wire_color = if state.gizmo.is_dragging() {
                palette::OBJECT_WIRE_ACTIVE
            } else {
                palette::OBJECT_WIRE
            };
            draw_wire_cube(
                &view,
                &mut draw,
                &state.object.transform,
                OBJECT_HALF_EXTENT,
                wire_color,
            );
        }

        let over_cube = app_config.viewport.show_orientation_cube
            && self.orientation_cube(&painter, &response, &view, state, app_config);

        {
            let mut draw = EguiDrawList::new(&painter);
            let pointer_in_region = response.hovered() && !over_cube;
            let result = state.gizmo.update(
                &view,
                &mut draw,
                &input,
                &app_config.gizmo,
                pointer_in_region,
                &mut state.object.transform,
            );
            if result == ActionUpdateResult::Apply {
                let (_, _, position) = state.object.transform.to_scale_rotation_translation();
                tracing::info!(object = %state.object.name, ?position, "transform applied");
            }
        }
        if state.gizmo.is_dragging() {
            ui.ctx().request_repaint();
        }

        drop(cfg);

        if !state.gizmo.is_dragging() {
            Self::context_menu(&response, state);
        }

        render_gizmo_toolbar(ui, response.rect, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_mode() {
        assert_eq!(shortcut_mode(egui::Key::T), Some(GizmoMode::Translate));
        assert_eq!(shortcut_mode(egui::Key::R), Some(GizmoMode::Rotate));
        assert_eq!(shortcut_mode(egui::Key::S), Some(GizmoMode::Scale));
        assert_eq!(shortcut_mode(egui::Key::G), None);
    }

    #[test]
    fn test_rect_conversion() {
        let rect = to_rect(egui::Rect::from_min_max(
            egui::pos2(10.0, 20.0),
            egui::pos2(110.0, 220.0),
        ));
        assert_eq!(rect.size(), Vec2::new(100.0, 200.0));
        assert_eq!(rect.center(), Vec2::new(60.0, 120.0));
    }
}
