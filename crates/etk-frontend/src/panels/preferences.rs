//! Preferences window for gizmo and viewport settings

use egui::{DragValue, Slider, Ui};
use etk_core::PackedColor;

use crate::config::{AppConfig, SharedConfig};
use crate::painter::to_color32;

/// Current tab in the preferences window
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesTab {
    #[default]
    Gizmo,
    Viewport,
}

fn packed_color_edit(ui: &mut Ui, label: &str, color: &mut PackedColor) -> bool {
    let mut edited = to_color32(*color);
    let changed = ui
        .horizontal(|ui| {
            ui.label(label);
            ui.color_edit_button_srgba(&mut edited).changed()
        })
        .inner;
    if changed {
        let [r, g, b, a] = edited.to_srgba_unmultiplied();
        *color = PackedColor::from_rgba(r, g, b, a);
    }
    changed
}

/// Preferences window panel
pub struct PreferencesPanel {
    current_tab: PreferencesTab,
}

impl Default for PreferencesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencesPanel {
    /// Create a new preferences panel
    pub fn new() -> Self {
        Self {
            current_tab: PreferencesTab::Gizmo,
        }
    }

    /// Show the preferences window
    pub fn show(&mut self, ctx: &egui::Context, config: &SharedConfig, open: &mut bool) {
        egui::Window::new("Preferences")
            .open(open)
            .resizable(true)
            .default_size([420.0, 460.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.current_tab, PreferencesTab::Gizmo, "Gizmo");
                    ui.selectable_value(
                        &mut self.current_tab,
                        PreferencesTab::Viewport,
                        "Viewport",
                    );
                });

                ui.separator();

                // Edit a copy so the config is only marked dirty on change
                let mut edited = config.read().config().clone();
                let changed = egui::ScrollArea::vertical()
                    .max_height(360.0)
                    .show(ui, |ui| match self.current_tab {
                        PreferencesTab::Gizmo => Self::gizmo_tab(ui, &mut edited),
                        PreferencesTab::Viewport => Self::viewport_tab(ui, &mut edited),
                    })
                    .inner;
                if changed {
                    *config.write().config_mut() = edited;
                }

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Reset to Defaults").clicked() {
                        config.write().reset();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Save").clicked()
                            && let Err(e) = config.write().save()
                        {
                            tracing::error!("Failed to save config: {}", e);
                        }
                        if config.read().is_dirty() {
                            ui.weak("unsaved");
                        }
                    });
                });
            });
    }

    fn gizmo_tab(ui: &mut Ui, config: &mut AppConfig) -> bool {
        let gizmo = &mut config.gizmo;
        let mut changed = false;

        ui.collapsing("Colors", |ui| {
            let colors = &mut gizmo.colors;
            changed |= packed_color_edit(ui, "X Axis", &mut colors.x_axis);
            changed |= packed_color_edit(ui, "Y Axis", &mut colors.y_axis);
            changed |= packed_color_edit(ui, "Z Axis", &mut colors.z_axis);
            changed |= packed_color_edit(ui, "Hover", &mut colors.hover);
        });

        ui.collapsing("Sizes", |ui| {
            let sizes = &mut gizmo.sizes;
            changed |= ui
                .add(Slider::new(&mut sizes.translate_length, 30.0..=200.0).text("Move length"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut sizes.rotate_radius, 30.0..=200.0).text("Rotate radius"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut sizes.scale_length, 30.0..=200.0).text("Scale length"))
                .changed();
            changed |= ui
                .add(
                    Slider::new(&mut sizes.orientation_cube_radius, 20.0..=120.0)
                        .text("View cube radius"),
                )
                .changed();
        });

        ui.collapsing("Snapping (Ctrl)", |ui| {
            let snapping = &mut gizmo.snapping;
            ui.horizontal(|ui| {
                ui.label("Move step:");
                changed |= ui
                    .add(DragValue::new(&mut snapping.translate).speed(0.01).range(0.001..=100.0))
                    .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Rotate step:");
                changed |= ui
                    .add(
                        DragValue::new(&mut snapping.rotate_degrees)
                            .speed(0.5)
                            .range(0.1..=180.0)
                            .suffix("°"),
                    )
                    .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Scale step:");
                changed |= ui
                    .add(DragValue::new(&mut snapping.scale).speed(0.01).range(0.001..=10.0))
                    .changed();
            });
        });

        ui.collapsing("Actions", |ui| {
            let actions = &mut gizmo.actions;
            changed |= ui
                .add(
                    Slider::new(&mut actions.trackball_sensitivity, 0.1..=5.0)
                        .text("Trackball °/px"),
                )
                .changed();
            changed |= ui
                .add(Slider::new(&mut actions.status_text_size, 10.0..=32.0).text("Readout size"))
                .changed();
        });

        changed
    }

    fn viewport_tab(ui: &mut Ui, config: &mut AppConfig) -> bool {
        let viewport = &mut config.viewport;
        let mut changed = false;

        changed |= ui.checkbox(&mut viewport.show_grid, "Show Grid").changed();
        changed |= ui
            .checkbox(&mut viewport.show_orientation_cube, "Show View Cube")
            .changed();
        changed |= ui
            .add(Slider::new(&mut viewport.fly_speed, 0.5..=50.0).text("Fly speed"))
            .changed();
        changed |= ui
            .add(
                Slider::new(&mut viewport.orbit_sensitivity, 0.001..=0.02)
                    .text("Orbit sensitivity"),
            )
            .changed();

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_keeps_channels() {
        let color = PackedColor::from_rgba(10, 20, 30, 255);
        let [r, g, b, a] = to_color32(color).to_srgba_unmultiplied();
        assert_eq!(PackedColor::from_rgba(r, g, b, a), color);
    }
}
