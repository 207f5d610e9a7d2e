//! Theme module for UI styling

pub mod palette;

use egui::{CornerRadius, Stroke, Visuals};

/// Dark visuals built from [`palette`]
pub fn visuals() -> Visuals {
    let mut v = Visuals::dark();

    v.panel_fill = palette::BG_PANEL;
    v.window_fill = palette::BG_ELEVATED;
    v.extreme_bg_color = palette::BG_BASE;
    v.faint_bg_color = palette::BG_INPUT;

    v.selection.bg_fill = palette::ACCENT_SUBTLE;
    v.selection.stroke = Stroke::new(1.0, palette::ACCENT_PRIMARY);

    v.override_text_color = Some(palette::TEXT_PRIMARY);

    v.widgets.inactive.bg_fill = palette::BG_INPUT;
    v.widgets.inactive.weak_bg_fill = palette::BG_PANEL;
    v.widgets.inactive.bg_stroke = Stroke::new(1.0, palette::BORDER_SUBTLE);
    v.widgets.inactive.corner_radius = CornerRadius::same(4);

    v.widgets.hovered.bg_fill = palette::BG_HOVER;
    v.widgets.hovered.weak_bg_fill = palette::BG_HOVER;
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, palette::BORDER_NORMAL);
    v.widgets.hovered.corner_radius = CornerRadius::same(4);

    v.widgets.active.bg_fill = palette::ACCENT_PRIMARY;
    v.widgets.active.bg_stroke = Stroke::new(1.0, palette::ACCENT_PRIMARY);
    v.widgets.active.corner_radius = CornerRadius::same(4);

    v.window_corner_radius = CornerRadius::same(6);
    v
}

/// Apply the theme to the egui context
pub fn apply_theme(ctx: &egui::Context) {
    ctx.set_visuals(visuals());
}

/// Floating overlay frame used by the viewport toolbars
pub fn overlay_frame(style: &egui::Style) -> egui::Frame {
    egui::Frame::popup(style)
        .fill(palette::overlay_bg(220))
        .corner_radius(4.0)
        .stroke(Stroke::new(1.0, palette::BORDER_NORMAL))
        .inner_margin(2.0)
}
