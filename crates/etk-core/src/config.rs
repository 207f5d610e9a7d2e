//! Gizmo configuration structures
//!
//! This module provides configurable settings for the gizmos that can be
//! serialized and loaded from RON configuration files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::PackedColor;

/// Gizmo color configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorConfig {
    /// X-axis color
    pub x_axis: PackedColor,
    /// Y-axis color
    pub y_axis: PackedColor,
    /// Z-axis color
    pub z_axis: PackedColor,
    /// Color of the hovered handle
    pub hover: PackedColor,
    /// Color of a hovered plane handle
    pub plane_hover: PackedColor,
    /// Color of the view-axis ring and its readout
    pub view_axis: PackedColor,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            x_axis: PackedColor(0xFF_44_44_FF),
            y_axis: PackedColor(0xFF_FF_88_44),
            z_axis: PackedColor(0xFF_44_FF_44),
            hover: PackedColor(0xFF_33_FF_FF),
            plane_hover: PackedColor::WHITE,
            view_axis: PackedColor::WHITE,
        }
    }
}

impl ColorConfig {
    /// Color of the axis with the given index
    pub fn axis(&self, axis: usize) -> PackedColor {
        match axis {
            0 => self.x_axis,
            1 => self.y_axis,
            _ => self.z_axis,
        }
    }

    /// Sets the colors of all three axes
    pub fn set_axis_colors(&mut self, x: PackedColor, y: PackedColor, z: PackedColor) {
        self.x_axis = x;
        self.y_axis = y;
        self.z_axis = z;
    }
}

/// Screen-space gizmo dimensions, in pixels unless noted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeConfig {
    /// Length of the translate gizmo's axis handles
    pub translate_length: f32,
    /// Radius of the rotate gizmo
    pub rotate_radius: f32,
    /// Length of the scale gizmo's axis handles
    pub scale_length: f32,
    /// Radius of the orientation cube
    pub orientation_cube_radius: f32,
    /// Hover band width of rotation rings
    pub ring_hover_thickness: f32,
    /// Half width of the hover band along axis handles
    pub handle_hover_half_width: f32,
    /// Radius of the round cap at the end of an axis handle
    pub handle_cap_radius: f32,
    /// Radius of the free-move dot in the translate gizmo's center
    pub free_move_radius: f32,
    /// Bevel width of the orientation cube, as a fraction of a half face
    pub cube_edge_width: f32,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            translate_length: 80.0,
            rotate_radius: 60.0,
            scale_length: 80.0,
            orientation_cube_radius: 50.0,
            ring_hover_thickness: 5.0,
            handle_hover_half_width: 3.0,
            handle_cap_radius: 4.5,
            free_move_radius: 5.0,
            cube_edge_width: 0.1,
        }
    }
}

/// Snapping intervals used while the snap modifier is held
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnappingConfig {
    /// Translation step in world units
    pub translate: f32,
    /// Rotation step in degrees
    pub rotate_degrees: f32,
    /// Scale factor step
    pub scale: f32,
}

impl Default for SnappingConfig {
    fn default() -> Self {
        Self {
            translate: 0.25,
            rotate_degrees: 15.0,
            scale: 0.1,
        }
    }
}

/// Transform action tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionConfig {
    /// Trackball degrees per pixel of pointer movement
    pub trackball_sensitivity: f32,
    /// Font size of the live status readout
    pub status_text_size: f32,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            trackball_sensitivity: 1.0,
            status_text_size: 18.0,
        }
    }
}

/// Complete gizmo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GizmoConfig {
    /// Color settings
    #[serde(default)]
    pub colors: ColorConfig,
    /// Size settings
    #[serde(default)]
    pub sizes: SizeConfig,
    /// Snapping settings
    #[serde(default)]
    pub snapping: SnappingConfig,
    /// Action settings
    #[serde(default)]
    pub actions: ActionConfig,
}

impl GizmoConfig {
    /// Create a new gizmo configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_ron()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::debug!("Saved gizmo config to {}", path.as_ref().display());
        Ok(())
    }

    /// Serialize configuration to a pretty RON string
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Parse configuration from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(String),
    /// The configuration could not be written as RON
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// The file is not a valid configuration
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gizmo.ron");

        let mut config = GizmoConfig::new();
        config.snapping.rotate_degrees = 5.0;
        config.colors.hover = PackedColor(0xFF_00_FF_00);
        config.save(&path).unwrap();

        let loaded = GizmoConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = GizmoConfig::from_ron("(snapping: (translate: 1.0, rotate_degrees: 45.0, scale: 0.5))")
            .unwrap();
        assert_eq!(config.snapping.rotate_degrees, 45.0);
        assert_eq!(config.sizes, SizeConfig::default());
        assert_eq!(config.colors, ColorConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GizmoConfig::load(dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
