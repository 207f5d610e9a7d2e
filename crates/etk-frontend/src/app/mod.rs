//! Main application module

mod menu;

use crate::config::{ConfigManager, SharedConfig, create_shared_config};
use crate::panels::{Panel, PreferencesPanel, PropertiesPanel, ViewportPanel};
use crate::state::{SharedViewportState, create_shared_viewport};
use crate::theme;

pub use menu::{MenuAction, render_menu_bar};

/// Main application
pub struct EditorApp {
    config: SharedConfig,
    viewport_state: SharedViewportState,
    viewport: ViewportPanel,
    properties: PropertiesPanel,
    preferences: PreferencesPanel,
    show_preferences: bool,
}

impl EditorApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>, config: ConfigManager) -> Self {
        theme::apply_theme(&cc.egui_ctx);

        Self {
            config: create_shared_config(config),
            viewport_state: create_shared_viewport(),
            viewport: ViewportPanel::new(),
            properties: PropertiesPanel::new(),
            preferences: PreferencesPanel::new(),
            show_preferences: false,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(menu_action) = render_menu_bar(ctx, &self.viewport_state, &self.config) {
            match menu_action {
                MenuAction::OpenPreferences => self.show_preferences = true,
            }
        }

        let properties_id = egui::Id::new(self.properties.name());
        egui::SidePanel::right(properties_id)
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.properties.ui(ui, &self.viewport_state, &self.config);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.ui(ui, &self.viewport_state, &self.config);
            });

        if self.show_preferences {
            self.preferences
                .show(ctx, &self.config, &mut self.show_preferences);
        }
    }
}
