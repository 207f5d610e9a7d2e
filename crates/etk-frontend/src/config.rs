//! Application configuration
//!
//! Everything the editor persists lives in one RON file: the gizmo settings
//! plus the viewport's own preferences.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use etk_core::{ConfigError, GizmoConfig};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Default configuration file, relative to the working directory
pub const CONFIG_FILE_NAME: &str = "etk.ron";

/// Viewport preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Camera fly speed in world units per second (WASD/QE)
    pub fly_speed: f32,
    /// Orbit radians per dragged pixel
    pub orbit_sensitivity: f32,
    /// Draw the ground grid
    pub show_grid: bool,
    /// Draw the orientation cube
    pub show_orientation_cube: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            fly_speed: 6.0,
            orbit_sensitivity: 0.005,
            show_grid: true,
            show_orientation_cube: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Gizmo colors, sizes, snapping and action tuning
    #[serde(default)]
    pub gizmo: GizmoConfig,
    /// Viewport preferences
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl AppConfig {
    /// Serialize to a pretty RON string
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Parse from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Save to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_ron()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Load from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }
}

/// Owns the configuration and the file it came from.
#[derive(Debug)]
pub struct ConfigManager {
    path: PathBuf,
    config: AppConfig,
    dirty: bool,
}

impl ConfigManager {
    /// Manager for `path` holding the default configuration.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: AppConfig::default(),
            dirty: false,
        }
    }

    /// Loads `path`, falling back to defaults if the file is missing or
    /// unreadable.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let mut manager = Self::new(path);

        if !manager.path.exists() {
            tracing::info!("No config at {}, using defaults", manager.path.display());
            return manager;
        }

        match AppConfig::load(&manager.path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", manager.path.display());
                manager.config = config;
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", manager.path.display(), e);
            }
        }

        manager
    }

    /// Current configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Mutable configuration; marks it as unsaved.
    pub fn config_mut(&mut self) -> &mut AppConfig {
        self.dirty = true;
        &mut self.config
    }

    /// Restores the defaults without saving.
    pub fn reset(&mut self) {
        self.config = AppConfig::default();
        self.dirty = true;
    }

    /// File the configuration is saved to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the configuration to its file.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        self.config.save(&self.path)?;
        self.dirty = false;
        tracing::info!("Saved config to {}", self.path.display());
        Ok(())
    }
}

/// Configuration shared between panels
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Wraps a manager for sharing.
pub fn create_shared_config(manager: ConfigManager) -> SharedConfig {
    Arc::new(RwLock::new(manager))
}

#[cfg(test)]
mod tests {
    use super::*;
    use etk_core::PackedColor;

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut manager = ConfigManager::new(&path);
        manager.config_mut().viewport.fly_speed = 12.5;
        manager.config_mut().gizmo.colors.x_axis = PackedColor(0xFF_00_00_FF);
        assert!(manager.is_dirty());
        manager.save().unwrap();
        assert!(!manager.is_dirty());

        let reloaded = ConfigManager::load_or_default(&path);
        assert_eq!(reloaded.config(), manager.config());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::load_or_default(dir.path().join("missing.ron"));
        assert_eq!(manager.config(), &AppConfig::default());
    }

    #[test]
    fn test_broken_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(gizmo: [").unwrap();

        let manager = ConfigManager::load_or_default(&path);
        assert_eq!(manager.config(), &AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::from_ron("(viewport: (fly_speed: 2.0, orbit_sensitivity: 0.01, show_grid: false, show_orientation_cube: true))")
            .unwrap();
        assert!(!config.viewport.show_grid);
        assert_eq!(config.gizmo, GizmoConfig::default());
    }
}
