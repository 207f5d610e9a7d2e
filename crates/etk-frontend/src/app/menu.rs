//! Menu bar rendering

use crate::config::SharedConfig;
use crate::state::SharedViewportState;
use crate::theme::palette;

/// Actions the menu bar hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenPreferences,
}

/// Render the menu bar and return any triggered action
pub fn render_menu_bar(
    ctx: &egui::Context,
    viewport_state: &SharedViewportState,
    config: &SharedConfig,
) -> Option<MenuAction> {
    let mut menu_action = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save Settings").clicked() {
                    if let Err(e) = config.write().save() {
                        tracing::error!("Failed to save config: {}", e);
                    }
                    ui.close();
                }
                if ui.button("Preferences...").clicked() {
                    menu_action = Some(MenuAction::OpenPreferences);
                    ui.close();
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                }
            });

            ui.menu_button("Object", |ui| {
                if ui.button("Reset Transform").clicked() {
                    viewport_state.lock().reset_object();
                    ui.close();
                }
                if ui.button("Frame Object").clicked() {
                    viewport_state.lock().frame_object();
                    ui.close();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let path = config.read().path().display().to_string();
                ui.colored_label(palette::TEXT_SECONDARY, path);
            });
        });
    });

    menu_action
}
