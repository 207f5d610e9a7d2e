//! Orientation cube: a small camera-aligned cube whose faces, edges and
//! corners name view directions.

use etk_core::geometry::{FaceRegion, classify_face_point, snap_to_axis_direction, solve_in_basis};
use etk_core::{DrawList, PackedColor};
use glam::{Vec2, Vec3};

use super::GizmoDrawer;

const FACE_HOVER_TINT: PackedColor = PackedColor(0x88_CC_FF_FF);
const HIGHLIGHT_COLOR: PackedColor = PackedColor(0xFF_88_CC_FF);

/// One face of the cube. The face lies at `-forward`.
struct CubeFace {
    up: Vec3,
    forward: Vec3,
    color_axis: usize,
    uv_offset: Vec2,
}

const CUBE_FACES: [CubeFace; 6] = [
    CubeFace {
        up: Vec3::Y,
        forward: Vec3::X,
        color_axis: 0,
        uv_offset: Vec2::new(0.5, 0.0),
    },
    CubeFace {
        up: Vec3::Y,
        forward: Vec3::NEG_X,
        color_axis: 0,
        uv_offset: Vec2::new(0.75, 0.0),
    },
    CubeFace {
        up: Vec3::Y,
        forward: Vec3::NEG_Z,
        color_axis: 2,
        uv_offset: Vec2::new(0.0, 0.0),
    },
    CubeFace {
        up: Vec3::Y,
        forward: Vec3::Z,
        color_axis: 2,
        uv_offset: Vec2::new(0.25, 0.0),
    },
    CubeFace {
        up: Vec3::NEG_Z,
        forward: Vec3::NEG_Y,
        color_axis: 1,
        uv_offset: Vec2::new(0.0, 0.5),
    },
    CubeFace {
        up: Vec3::Z,
        forward: Vec3::Y,
        color_axis: 1,
        uv_offset: Vec2::new(0.25, 0.5),
    },
];

/// Size of one face in the texture atlas
const UV_FACE_SIZE: Vec2 = Vec2::new(0.25, 0.5);

impl<D: DrawList + ?Sized> GizmoDrawer<'_, D> {
    /// Draws the orientation cube centered at the screen `position`.
    ///
    /// Returns the hovered view direction: a face normal, or the sum of two
    /// or three face normals when an edge or corner is hovered.
    pub fn orientation_cube(&mut self, position: Vec2, radius: f32) -> Option<Vec3> {
        let rot_inv = self.view.camera.rotation.inverse();
        let half = radius / 2.0;
        let edge_width = self.config.sizes.cube_edge_width;
        let pointer = self.view.pointer;

        let to_screen = |v: Vec3| {
            let cam = rot_inv * v;
            Vec2::new(cam.x * half, -cam.y * half) + position
        };

        let mut face_hit = Vec3::ZERO;
        let mut edge_hit = false;

        for face in &CUBE_FACES {
            if (rot_inv * face.forward).z >= -0.001 {
                continue;
            }

            let right = face.forward.cross(face.up);
            let local = |u: f32, v: f32| to_screen(-face.forward + right * u + face.up * v);

            let center = local(0.0, 0.0);
            let u_vec = local(1.0, 0.0) - center;
            let v_vec = local(0.0, 1.0) - center;

            let mut color = self.config.colors.axis(face.color_axis);

            if let Some(uv) = solve_in_basis(pointer - center, u_vec, v_vec) {
                let hit = -face.forward + right * uv.x + face.up * uv.y;
                match classify_face_point(uv, edge_width) {
                    FaceRegion::Interior => {
                        face_hit = hit;
                        color = color.alpha_blend(FACE_HOVER_TINT);
                    }
                    FaceRegion::Edge => {
                        face_hit = hit;
                        edge_hit = true;
                    }
                    FaceRegion::Outside => {}
                }
            }

            let corners = [
                local(-1.0, -1.0),
                local(1.0, -1.0),
                local(1.0, 1.0),
                local(-1.0, 1.0),
            ];

            if let Some(texture) = self.cube_texture {
                let uv = face.uv_offset;
                self.draw.image_quad(
                    texture,
                    [corners[3], corners[2], corners[1], corners[0]],
                    [
                        uv,
                        uv + Vec2::new(UV_FACE_SIZE.x, 0.0),
                        uv + UV_FACE_SIZE,
                        uv + Vec2::new(0.0, UV_FACE_SIZE.y),
                    ],
                    color,
                );
            } else {
                self.draw
                    .quad_filled(corners[0], corners[1], corners[2], corners[3], color);
            }

            self.draw
                .quad(corners[0], corners[1], corners[2], corners[3], color, 1.5);
        }

        let snapped = snap_to_axis_direction(face_hit, edge_width);

        if edge_hit {
            let line_along = |axis: usize| {
                let mut a = snapped;
                let mut b = snapped;
                a[axis] = -1.0;
                b[axis] = 1.0;
                (to_screen(a), to_screen(b))
            };

            let zero_axis = (0..3).find(|&i| snapped[i] == 0.0);
            match zero_axis {
                Some(axis) => {
                    let (a, b) = line_along(axis);
                    self.draw.line(a, b, HIGHLIGHT_COLOR, 2.5);
                }
                None => self.draw.circle_filled(to_screen(snapped), 2.0, HIGHLIGHT_COLOR),
            }
        } else if face_hit != Vec3::ZERO {
            self.draw
                .circle_filled(to_screen(snapped), 2.0, PackedColor::WHITE);
        }

        let hovered = self.hover_part(snapped != Vec3::ZERO);
        (hovered && snapped != Vec3::ZERO).then_some(snapped)
    }
}
