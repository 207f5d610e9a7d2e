//! Immediate-mode gizmo drawing
//!
//! A [`GizmoDrawer`] is opened once per gizmo per frame. Every gizmo call
//! projects its parts to screen space, declares each part to the hover
//! session in a fixed order, draws it (highlighted if it won last frame) and
//! reports the hovered part as a [`HoveredAxis`].

mod orientation_cube;

use etk_core::geometry::{
    ellipse_ring_hit, is_point_in_quad, is_point_in_triangle, is_point_on_handle,
};
use etk_core::view::NEAR_CLIP_OFFSET;
use etk_core::{
    DrawList, GizmoConfig, HoveredAxis, PackedColor, SceneViewState, TextureHandle,
};
use glam::{Mat4, Vec2, Vec3};

use crate::hover::{GizmoId, HoverResolver, HoverSession};
use crate::mode::Pivot;

/// Number of segments of a full projected circle.
pub const ELLIPSE_NUM_SEGMENTS: usize = 32;

const HANDLE_THICKNESS: f32 = 2.5;
const OUTLINE_THICKNESS: f32 = 1.5;
const PLANE_FILL_ALPHA: u8 = 0x55;

/// Screen-space placement of one gizmo for the current frame.
#[derive(Debug, Clone, Copy)]
struct GizmoFrame {
    center: Vec3,
    center_2d: Vec2,
    axes: [Vec3; 3],
    /// World units per screen pixel at `center`
    scale: f32,
}

impl GizmoFrame {
    fn axis_point(&self, axis: usize, pixels: f32) -> Vec3 {
        self.center + self.axes[axis] * pixels * self.scale
    }
}

/// Draws gizmos into a [`DrawList`] and resolves which part is hovered.
pub struct GizmoDrawer<'a, D: DrawList + ?Sized> {
    view: &'a SceneViewState,
    draw: &'a mut D,
    config: &'a GizmoConfig,
    resolver: &'a mut HoverResolver,
    session: HoverSession,
    cube_texture: Option<TextureHandle>,
}

impl<'a, D: DrawList + ?Sized> GizmoDrawer<'a, D> {
    /// Opens a drawing session for the gizmo `id`.
    pub fn begin(
        id: GizmoId,
        resolver: &'a mut HoverResolver,
        view: &'a SceneViewState,
        draw: &'a mut D,
        config: &'a GizmoConfig,
    ) -> Self {
        let session = resolver.begin(id);
        Self {
            view,
            draw,
            config,
            resolver,
            session,
            cube_texture: None,
        }
    }

    /// Texture atlas for the orientation cube faces. Without one the faces
    /// are drawn as flat colored quads.
    pub fn with_cube_texture(mut self, texture: Option<TextureHandle>) -> Self {
        self.cube_texture = texture;
        self
    }

    /// Closes the session. `pointer_in_region` tells whether the pointer is
    /// over the area the gizmo is drawn in; if not, nothing stays hovered.
    pub fn end(self, pointer_in_region: bool) {
        self.resolver.end(self.session, pointer_in_region);
    }

    /// Scene view this drawer projects with
    pub fn view(&self) -> &SceneViewState {
        self.view
    }

    /// Underlying draw list
    pub fn draw_list(&mut self) -> &mut D {
        &mut *self.draw
    }

    /// Declares a hoverable part; see [`HoverSession::declare`].
    pub fn hover_part(&mut self, hovered: bool) -> bool {
        self.session.declare(hovered)
    }

    /// Draws a world-space line clipped against the camera's near plane.
    pub fn clipped_line(&mut self, a: Vec3, b: Vec3, color: PackedColor, thickness: f32) {
        if let Some((a, b)) = self.view.clip_line(a, b) {
            self.draw.line(a, b, color, thickness);
        }
    }

    /// World units covered by `size_2d` pixels at `position`.
    pub fn gizmo_scaling(&self, position: Vec3, size_2d: f32) -> f32 {
        self.view.gizmo_scaling(position, size_2d)
    }

    fn pointer(&self) -> Vec2 {
        self.view.pointer
    }

    fn hover_color(&self) -> PackedColor {
        self.config.colors.hover
    }

    fn axis_color(&self, axis: usize) -> PackedColor {
        self.config.colors.axis(axis)
    }

    /// `None` if the pivot is behind the camera.
    fn frame(&self, transform: &Mat4) -> Option<GizmoFrame> {
        let pivot = Pivot::from_transform(transform);
        let camera = &self.view.camera;
        if camera.forward.dot(pivot.center - camera.position) <= NEAR_CLIP_OFFSET {
            return None;
        }

        let scale = self.gizmo_scaling(pivot.center, 1.0);
        if !scale.is_finite() {
            return None;
        }

        Some(GizmoFrame {
            center: pivot.center,
            center_2d: self.view.world_to_screen(pivot.center),
            axes: [pivot.axis(0), pivot.axis(1), pivot.axis(2)],
            scale,
        })
    }

    /// Screen-space images of the two vectors spanning the plane that
    /// contains `axis_vec` and faces the camera as much as possible.
    fn billboard_plane(&self, axis_vec: Vec3, origin: Vec3, scaling: f32) -> (Vec2, Vec2) {
        let camera = &self.view.camera;
        let plane_y = camera
            .forward
            .cross(axis_vec)
            .try_normalize()
            .unwrap_or(camera.up);
        let plane_x = plane_y.cross(axis_vec);

        let origin_2d = self.view.world_to_screen(origin);
        (
            self.view.world_to_screen(origin + plane_x * scaling) - origin_2d,
            self.view.world_to_screen(origin + plane_y * scaling) - origin_2d,
        )
    }

    fn axis_handle(&mut self, frame: &GizmoFrame, axis: usize, line_length: f32, arrow: bool) -> bool {
        let sizes = &self.config.sizes;
        let end = frame.axis_point(axis, line_length);
        let end_2d = self.view.world_to_screen(end);

        let hovered = is_point_on_handle(
            self.pointer(),
            frame.center_2d,
            end_2d,
            sizes.handle_hover_half_width,
            sizes.handle_cap_radius,
        );
        let cap_radius = sizes.handle_cap_radius;

        let hovered = self.hover_part(hovered);
        let color = if hovered {
            self.hover_color()
        } else {
            self.axis_color(axis)
        };

        self.clipped_line(frame.center, end, color, HANDLE_THICKNESS);

        if arrow {
            let (scale_x, scale_y) =
                self.billboard_plane(frame.axes[axis], end, frame.scale * 5.0);

            let points: Vec<Vec2> = (0..ELLIPSE_NUM_SEGMENTS)
                .map(|i| {
                    let angle = i as f32 * std::f32::consts::TAU / ELLIPSE_NUM_SEGMENTS as f32;
                    end_2d + scale_x * angle.sin() + scale_y * angle.cos()
                })
                .collect();

            let tip = self
                .view
                .world_to_screen(frame.axis_point(axis, line_length + 8.0));

            self.draw.convex_poly_filled(&points, color);
            self.draw.triangle_filled(
                points[0],
                points[ELLIPSE_NUM_SEGMENTS / 2],
                tip,
                color,
            );
        } else {
            self.draw.circle_filled(end_2d, cap_radius, color);
        }

        hovered
    }

    /// Translation gizmo: XY/XZ/YZ plane quads, X/Y/Z arrows and a free-move
    /// dot in the center, declared in that order.
    pub fn translation_gizmo(&mut self, transform: &Mat4, line_length: f32) -> HoveredAxis {
        let Some(frame) = self.frame(transform) else {
            return HoveredAxis::NONE;
        };

        let mut hovered_axis = HoveredAxis::NONE;

        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let pos_a = self.view.world_to_screen(frame.axis_point(a, line_length * 0.5));
            let pos_b = self.view.world_to_screen(frame.axis_point(b, line_length * 0.5));
            let pos_ab = self.view.world_to_screen(
                frame.axis_point(a, line_length * 0.5) + frame.axes[b] * line_length * 0.5 * frame.scale,
            );

            let hovered =
                is_point_in_quad(self.pointer(), frame.center_2d, pos_a, pos_ab, pos_b);
            let hovered = self.hover_part(hovered);

            let color = if hovered {
                self.config.colors.plane_hover
            } else {
                self.axis_color(a).additive_blend(self.axis_color(b))
            };

            self.draw.quad_filled(
                frame.center_2d,
                pos_a,
                pos_ab,
                pos_b,
                color.with_alpha(PLANE_FILL_ALPHA),
            );
            self.draw.line(pos_a, pos_ab, color, OUTLINE_THICKNESS);
            self.draw.line(pos_ab, pos_b, color, OUTLINE_THICKNESS);

            if hovered {
                hovered_axis = HoveredAxis::plane(a, b);
            }
        }

        for axis in 0..3 {
            if self.axis_handle(&frame, axis, line_length, true) {
                hovered_axis = HoveredAxis::axis(axis);
            }
        }

        let radius = self.config.sizes.free_move_radius;
        let distance = frame.center_2d.distance(self.pointer());

        if self.hover_part(distance < radius + 5.0) {
            hovered_axis = HoveredAxis::FREE;
        }

        let color = if hovered_axis == HoveredAxis::FREE {
            self.hover_color()
        } else {
            PackedColor::WHITE
        };
        self.draw.circle_filled(frame.center_2d, radius, color);

        hovered_axis
    }

    /// Rotation gizmo: trackball disc, X/Y/Z half gimbals and the view-axis
    /// ring, declared in that order.
    pub fn rotation_gizmo(&mut self, transform: &Mat4, radius: f32) -> HoveredAxis {
        let Some(frame) = self.frame(transform) else {
            return HoveredAxis::NONE;
        };

        let view_axis = self.config.colors.view_axis;
        let distance = frame.center_2d.distance(self.pointer());

        self.draw
            .circle_filled(frame.center_2d, radius, view_axis.with_alpha(0x55));
        self.draw
            .circle(frame.center_2d, radius, view_axis, OUTLINE_THICKNESS);

        let mut hovered_axis = HoveredAxis::NONE;

        if self.hover_part(distance < radius) {
            hovered_axis = HoveredAxis::TRACKBALL;
            self.draw
                .circle_filled(frame.center_2d, radius, view_axis.with_alpha(0x33));
        }

        for axis in 0..3 {
            if self.axis_gimbal(&frame, axis, radius - 2.0) {
                hovered_axis = HoveredAxis::axis(axis);
            }
        }

        let ring_radius = radius + 10.0;
        let on_ring =
            (distance - ring_radius).abs() < self.config.sizes.ring_hover_thickness;

        if self.hover_part(on_ring) {
            hovered_axis = HoveredAxis::VIEW_AXIS;
        }

        let ring_color = if hovered_axis == HoveredAxis::VIEW_AXIS {
            view_axis.with_alpha(0x88)
        } else {
            view_axis.with_alpha(0x55)
        };
        self.draw
            .circle(frame.center_2d, ring_radius - 1.5, ring_color, OUTLINE_THICKNESS);
        self.draw
            .circle(frame.center_2d, ring_radius + 1.5, ring_color, OUTLINE_THICKNESS);

        hovered_axis
    }

    /// Front half of the circle around `axis`, as seen from the camera.
    fn axis_gimbal(&mut self, frame: &GizmoFrame, axis: usize, r: f32) -> bool {
        let (scale_x, scale_y) = self.billboard_plane(frame.axes[axis], frame.center, frame.scale);

        let points: Vec<Vec2> = (0..=ELLIPSE_NUM_SEGMENTS / 2)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / ELLIPSE_NUM_SEGMENTS as f32;
                frame.center_2d + (scale_x * angle.sin() + scale_y * angle.cos()) * r
            })
            .collect();

        let hovered = ellipse_ring_hit(
            self.pointer() - frame.center_2d,
            scale_x,
            scale_y,
            r,
            self.config.sizes.ring_hover_thickness,
            true,
        );

        let hovered = self.hover_part(hovered);
        let color = if hovered {
            self.hover_color()
        } else {
            self.axis_color(axis)
        };

        self.draw.polyline(&points, color, HANDLE_THICKNESS);

        hovered
    }

    /// Scale gizmo: XY/XZ/YZ plane triangles, then X/Y/Z handles with round
    /// caps, declared in that order.
    pub fn scale_gizmo(&mut self, transform: &Mat4, length: f32) -> HoveredAxis {
        let Some(frame) = self.frame(transform) else {
            return HoveredAxis::NONE;
        };

        let mut hovered_axis = HoveredAxis::NONE;

        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let pos_a = self.view.world_to_screen(frame.axis_point(a, length * 0.7));
            let pos_b = self.view.world_to_screen(frame.axis_point(b, length * 0.7));

            let hovered = is_point_in_triangle(self.pointer(), frame.center_2d, pos_a, pos_b);
            let hovered = self.hover_part(hovered);

            let color = if hovered {
                self.config.colors.plane_hover
            } else {
                self.axis_color(a).additive_blend(self.axis_color(b))
            };

            self.draw.triangle_filled(
                frame.center_2d,
                pos_a,
                pos_b,
                color.with_alpha(PLANE_FILL_ALPHA),
            );
            self.draw.line(pos_a, pos_b, color, OUTLINE_THICKNESS);

            if hovered {
                hovered_axis = HoveredAxis::plane(a, b);
            }
        }

        for axis in 0..3 {
            if self.axis_handle(&frame, axis, length, false) {
                hovered_axis = HoveredAxis::axis(axis);
            }
        }

        let radius = self.config.sizes.free_move_radius;
        let distance = frame.center_2d.distance(self.pointer());

        if self.hover_part(distance < radius + 5.0) {
            hovered_axis = HoveredAxis::ALL;
        }

        let color = if hovered_axis == HoveredAxis::ALL {
            self.hover_color()
        } else {
            PackedColor::WHITE
        };
        self.draw.circle_filled(frame.center_2d, radius, color);

        hovered_axis
    }
}
