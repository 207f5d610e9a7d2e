//! Wireframe scene drawn under the gizmo: ground grid and the edited cube

use etk_core::{DrawList, PackedColor, SceneViewState};
use glam::{Mat4, Vec3};

use crate::theme::palette;

/// Grid lines on each side of the origin
const GRID_HALF_LINES: i32 = 10;
/// Spacing between grid lines in world units
const GRID_STEP: f32 = 1.0;

/// Cube edges as corner index pairs. Corner bit 0/1/2 set means +x/+y/+z.
#[rustfmt::skip]
const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1), (2, 3), (4, 5), (6, 7), // along x
    (0, 2), (1, 3), (4, 6), (5, 7), // along y
    (0, 4), (1, 5), (2, 6), (3, 7), // along z
];

fn line<D: DrawList + ?Sized>(
    view: &SceneViewState,
    draw: &mut D,
    a: Vec3,
    b: Vec3,
    color: PackedColor,
    thickness: f32,
) {
    if let Some((a, b)) = view.clip_line(a, b) {
        draw.line(a, b, color, thickness);
    }
}

/// Ground grid on the XZ plane. The lines through the origin are brighter.
pub fn draw_grid<D: DrawList + ?Sized>(view: &SceneViewState, draw: &mut D) {
    let extent = GRID_HALF_LINES as f32 * GRID_STEP;

    for i in -GRID_HALF_LINES..=GRID_HALF_LINES {
        let offset = i as f32 * GRID_STEP;
        let (color, thickness) = if i == 0 {
            (palette::GRID_MAJOR, 1.5)
        } else {
            (palette::GRID_MINOR, 1.0)
        };

        line(
            view,
            draw,
            Vec3::new(offset, 0.0, -extent),
            Vec3::new(offset, 0.0, extent),
            color,
            thickness,
        );
        line(
            view,
            draw,
            Vec3::new(-extent, 0.0, offset),
            Vec3::new(extent, 0.0, offset),
            color,
            thickness,
        );
    }
}

/// Wireframe box of `half_extent` transformed by `transform`.
pub fn draw_wire_cube<D: DrawList + ?Sized>(
    view: &SceneViewState,
    draw: &mut D,
    transform: &Mat4,
    half_extent: f32,
    color: PackedColor,
) {
    let corners: [Vec3; 8] = std::array::from_fn(|i| {
        let sign = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
        transform.transform_point3(Vec3::new(sign(0), sign(1), sign(2)) * half_extent)
    });

    for (a, b) in CUBE_EDGES {
        line(view, draw, corners[a], corners[b], color, 2.0);
    }
}
