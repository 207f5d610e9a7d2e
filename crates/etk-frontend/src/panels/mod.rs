//! UI panels

mod preferences;
mod properties;
mod viewport;

pub use preferences::PreferencesPanel;
pub use properties::PropertiesPanel;
pub use viewport::{ViewportPanel, shortcut_mode};

use crate::config::SharedConfig;
use crate::state::SharedViewportState;

/// Panel trait for the editor's side and central panels
pub trait Panel {
    /// Panel name for headers and logs
    fn name(&self) -> &str;

    /// Draw the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, viewport_state: &SharedViewportState, config: &SharedConfig);
}
