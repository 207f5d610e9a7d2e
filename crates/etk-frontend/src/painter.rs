//! `DrawList` on top of an egui `Painter`

use egui::epaint::{Mesh, Vertex};
use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke, TextureId};
use etk_core::{DrawList, PackedColor, TextureHandle};
use glam::Vec2;

/// Converts a packed `0xAABBGGRR` color.
pub fn to_color32(color: PackedColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), color.a())
}

/// Gizmo texture handle for an egui-managed texture.
pub fn texture_handle(id: TextureId) -> Option<TextureHandle> {
    match id {
        TextureId::Managed(id) => Some(TextureHandle(id)),
        TextureId::User(_) => None,
    }
}

#[inline]
fn pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

fn stroke(color: PackedColor, thickness: f32) -> Stroke {
    Stroke::new(thickness, to_color32(color))
}

/// Forwards gizmo draw calls to an egui painter.
pub struct EguiDrawList<'a> {
    painter: &'a Painter,
}

impl<'a> EguiDrawList<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl DrawList for EguiDrawList<'_> {
    fn line(&mut self, a: Vec2, b: Vec2, color: PackedColor, thickness: f32) {
        self.painter
            .line_segment([pos(a), pos(b)], stroke(color, thickness));
    }

    fn triangle_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, color: PackedColor) {
        self.painter.add(Shape::convex_polygon(
            vec![pos(a), pos(b), pos(c)],
            to_color32(color),
            Stroke::NONE,
        ));
    }

    fn quad_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: PackedColor) {
        self.painter.add(Shape::convex_polygon(
            vec![pos(a), pos(b), pos(c), pos(d)],
            to_color32(color),
            Stroke::NONE,
        ));
    }

    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: PackedColor, thickness: f32) {
        self.painter.add(Shape::closed_line(
            vec![pos(a), pos(b), pos(c), pos(d)],
            stroke(color, thickness),
        ));
    }

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: PackedColor) {
        self.painter
            .circle_filled(pos(center), radius, to_color32(color));
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: PackedColor, thickness: f32) {
        self.painter
            .circle_stroke(pos(center), radius, stroke(color, thickness));
    }

    fn convex_poly_filled(&mut self, points: &[Vec2], color: PackedColor) {
        if points.len() < 3 {
            return;
        }
        self.painter.add(Shape::convex_polygon(
            points.iter().copied().map(pos).collect(),
            to_color32(color),
            Stroke::NONE,
        ));
    }

    fn polyline(&mut self, points: &[Vec2], color: PackedColor, thickness: f32) {
        if points.len() < 2 {
            return;
        }
        self.painter.add(Shape::line(
            points.iter().copied().map(pos).collect(),
            stroke(color, thickness),
        ));
    }

    fn image_quad(
        &mut self,
        texture: TextureHandle,
        corners: [Vec2; 4],
        uvs: [Vec2; 4],
        tint: PackedColor,
    ) {
        let mut mesh = Mesh::with_texture(TextureId::Managed(texture.0));
        let color = to_color32(tint);
        for (corner, uv) in corners.into_iter().zip(uvs) {
            mesh.vertices.push(Vertex {
                pos: pos(corner),
                uv: pos(uv),
                color,
            });
        }
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        self.painter.add(Shape::mesh(mesh));
    }

    fn text(&mut self, at: Vec2, color: PackedColor, size: f32, text: &str) {
        self.painter.text(
            pos(at),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(size),
            to_color32(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_color_channels() {
        // 0xAABBGGRR
        let color = to_color32(PackedColor(0xFF_44_88_CC));
        assert_eq!(color, Color32::from_rgb(0xCC, 0x88, 0x44));

        let faded = to_color32(PackedColor::WHITE.with_alpha(0x55));
        assert_eq!(faded.a(), 0x55);
    }

    #[test]
    fn test_texture_handle_mapping() {
        assert_eq!(texture_handle(TextureId::Managed(7)), Some(TextureHandle(7)));
        assert_eq!(texture_handle(TextureId::User(7)), None);
    }
}
