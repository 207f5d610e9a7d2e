//! Color palette for the UI theme

use egui::Color32;
use etk_core::PackedColor;

// =============================================================================
// Background hierarchy (dark to light)
// =============================================================================

/// Base viewport background
pub const BG_BASE: Color32 = Color32::from_rgb(24, 24, 28);
/// Panel background
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 35);
/// Elevated surfaces (overlays, popups)
pub const BG_ELEVATED: Color32 = Color32::from_rgb(38, 38, 44);
/// Input field background
pub const BG_INPUT: Color32 = Color32::from_rgb(45, 45, 52);
/// Hover state background
pub const BG_HOVER: Color32 = Color32::from_rgb(55, 55, 65);

// =============================================================================
// Borders and text
// =============================================================================

/// Subtle panel boundary
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 50, 58);
/// Normal divider line
pub const BORDER_NORMAL: Color32 = Color32::from_rgb(65, 65, 75);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 230, 235);
/// Secondary text (labels)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);

/// Primary accent (selection, active)
pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(66, 150, 250);
/// Subtle accent for selection background
pub const ACCENT_SUBTLE: Color32 = Color32::from_rgba_premultiplied(66, 150, 250, 30);

/// X axis label color
pub const AXIS_X: Color32 = Color32::from_rgb(230, 80, 80);
/// Y axis label color
pub const AXIS_Y: Color32 = Color32::from_rgb(110, 200, 90);
/// Z axis label color
pub const AXIS_Z: Color32 = Color32::from_rgb(80, 130, 230);

// =============================================================================
// Scene colors, packed for the gizmo draw list (0xAABBGGRR)
// =============================================================================

/// Minor grid lines
pub const GRID_MINOR: PackedColor = PackedColor(0x40_5A_50_50);
/// Grid lines through the origin
pub const GRID_MAJOR: PackedColor = PackedColor(0x90_78_6E_6E);
/// Wireframe of the edited object
pub const OBJECT_WIRE: PackedColor = PackedColor(0xFF_FA_96_42);
/// Edited object while a drag is running
pub const OBJECT_WIRE_ACTIVE: PackedColor = PackedColor(0xFF_FF_C8_78);

// =============================================================================
// Helper functions
// =============================================================================

/// Create a semi-transparent version of the elevated background for overlays
pub fn overlay_bg(alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(BG_ELEVATED.r(), BG_ELEVATED.g(), BG_ELEVATED.b(), alpha)
}
