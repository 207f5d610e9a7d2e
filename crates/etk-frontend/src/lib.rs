//! EditTK Frontend
//!
//! eframe/egui demo editor for the transform gizmos: one object, an orbit
//! viewport, a mode toolbar and a properties panel.

pub mod app;
pub mod config;
pub mod input;
pub mod painter;
pub mod panels;
pub mod state;
pub mod theme;

// Re-exports for convenience
pub use app::EditorApp;
pub use config::{AppConfig, ConfigManager, SharedConfig};
pub use state::{SceneObject, SharedViewportState, ViewportState};
