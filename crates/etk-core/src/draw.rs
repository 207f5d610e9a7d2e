//! Draw primitive interface
//!
//! Gizmos only ever emit screen-space primitives. The host GUI implements
//! [`DrawList`] on top of its own painter; [`DrawRecorder`] keeps the calls in
//! memory for headless use and tests.

use glam::Vec2;

use crate::color::PackedColor;

/// Opaque texture reference understood by the host's [`DrawList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Screen-space draw primitives consumed by the gizmo drawers.
pub trait DrawList {
    /// Line segment
    fn line(&mut self, a: Vec2, b: Vec2, color: PackedColor, thickness: f32);

    /// Filled triangle
    fn triangle_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, color: PackedColor);

    /// Filled convex quad, corners in order
    fn quad_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: PackedColor);

    /// Quad outline, corners in order
    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: PackedColor, thickness: f32);

    /// Filled circle
    fn circle_filled(&mut self, center: Vec2, radius: f32, color: PackedColor);

    /// Circle outline
    fn circle(&mut self, center: Vec2, radius: f32, color: PackedColor, thickness: f32);

    /// Filled convex polygon
    fn convex_poly_filled(&mut self, points: &[Vec2], color: PackedColor);

    /// Open polyline
    fn polyline(&mut self, points: &[Vec2], color: PackedColor, thickness: f32);

    /// Textured quad; `corners` and `uvs` pair up index by index.
    fn image_quad(
        &mut self,
        texture: TextureHandle,
        corners: [Vec2; 4],
        uvs: [Vec2; 4],
        tint: PackedColor,
    );

    /// Text with its top-left corner at `pos`
    fn text(&mut self, pos: Vec2, color: PackedColor, size: f32, text: &str);
}

/// One recorded [`DrawList`] call.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawCommand {
    Line {
        a: Vec2,
        b: Vec2,
        color: PackedColor,
        thickness: f32,
    },
    TriangleFilled {
        points: [Vec2; 3],
        color: PackedColor,
    },
    QuadFilled {
        points: [Vec2; 4],
        color: PackedColor,
    },
    Quad {
        points: [Vec2; 4],
        color: PackedColor,
        thickness: f32,
    },
    CircleFilled {
        center: Vec2,
        radius: f32,
        color: PackedColor,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: PackedColor,
        thickness: f32,
    },
    ConvexPolyFilled {
        points: Vec<Vec2>,
        color: PackedColor,
    },
    Polyline {
        points: Vec<Vec2>,
        color: PackedColor,
        thickness: f32,
    },
    ImageQuad {
        texture: TextureHandle,
        corners: [Vec2; 4],
        uvs: [Vec2; 4],
        tint: PackedColor,
    },
    Text {
        pos: Vec2,
        color: PackedColor,
        size: f32,
        text: String,
    },
}

impl DrawCommand {
    /// Color the primitive was drawn with.
    pub fn color(&self) -> PackedColor {
        match self {
            Self::Line { color, .. }
            | Self::TriangleFilled { color, .. }
            | Self::QuadFilled { color, .. }
            | Self::Quad { color, .. }
            | Self::CircleFilled { color, .. }
            | Self::Circle { color, .. }
            | Self::ConvexPolyFilled { color, .. }
            | Self::Polyline { color, .. }
            | Self::Text { color, .. } => *color,
            Self::ImageQuad { tint, .. } => *tint,
        }
    }
}

/// A [`DrawList`] that stores every call.
#[derive(Debug, Default, Clone)]
pub struct DrawRecorder {
    /// Recorded calls, in order
    pub commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    /// Creates an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all recorded calls
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded text strings
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any primitive was drawn in `color`
    pub fn uses_color(&self, color: PackedColor) -> bool {
        self.commands.iter().any(|c| c.color() == color)
    }
}

impl DrawList for DrawRecorder {
    fn line(&mut self, a: Vec2, b: Vec2, color: PackedColor, thickness: f32) {
        self.commands.push(DrawCommand::Line {
            a,
            b,
            color,
            thickness,
        });
    }

    fn triangle_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, color: PackedColor) {
        self.commands.push(DrawCommand::TriangleFilled {
            points: [a, b, c],
            color,
        });
    }

    fn quad_filled(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: PackedColor) {
        self.commands.push(DrawCommand::QuadFilled {
            points: [a, b, c, d],
            color,
        });
    }

    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: PackedColor, thickness: f32) {
        self.commands.push(DrawCommand::Quad {
            points: [a, b, c, d],
            color,
            thickness,
        });
    }

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: PackedColor) {
        self.commands.push(DrawCommand::CircleFilled {
            center,
            radius,
            color,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: PackedColor, thickness: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            thickness,
        });
    }

    fn convex_poly_filled(&mut self, points: &[Vec2], color: PackedColor) {
        self.commands.push(DrawCommand::ConvexPolyFilled {
            points: points.to_vec(),
            color,
        });
    }

    fn polyline(&mut self, points: &[Vec2], color: PackedColor, thickness: f32) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
            thickness,
        });
    }

    fn image_quad(
        &mut self,
        texture: TextureHandle,
        corners: [Vec2; 4],
        uvs: [Vec2; 4],
        tint: PackedColor,
    ) {
        self.commands.push(DrawCommand::ImageQuad {
            texture,
            corners,
            uvs,
            tint,
        });
    }

    fn text(&mut self, pos: Vec2, color: PackedColor, size: f32, text: &str) {
        self.commands.push(DrawCommand::Text {
            pos,
            color,
            size,
            text: text.to_owned(),
        });
    }
}
