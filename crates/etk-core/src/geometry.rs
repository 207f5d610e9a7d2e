//! Hit-test geometry
//!
//! Stateless screen-space and world-space tests used by the gizmo drawers to
//! decide whether the pointer is over a candidate part. None of these use an
//! epsilon beyond plain IEEE comparisons unless stated; callers pass corners
//! that are already projected to screen space.

use glam::{Mat2, Vec2, Vec3};

/// Determinant magnitude below which a 2x2 basis counts as degenerate.
const DEGENERATE_DET: f32 = f32::EPSILON;

/// Intersects the infinite line through `line_point` along `line_dir` with a
/// plane.
///
/// Unlike a ray test, hits "behind" `line_point` are returned too. Returns
/// `None` when the line runs parallel to the plane.
pub fn intersect_line_plane(
    line_dir: Vec3,
    line_point: Vec3,
    plane_normal: Vec3,
    plane_point: Vec3,
) -> Option<Vec3> {
    let denom = line_dir.dot(plane_normal);
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (line_point - plane_point).dot(plane_normal) / denom;
    Some(line_point - line_dir * t)
}

#[inline]
fn cross2(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Point-in-triangle via half-plane sign tests. Works for either winding.
pub fn is_point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let ap = p - a;
    let bp = p - b;

    let s_ab = cross2(b - a, ap) > 0.0;

    if (cross2(c - a, ap) > 0.0) == s_ab {
        return false;
    }
    if (cross2(c - b, bp) > 0.0) != s_ab {
        return false;
    }

    true
}

/// Point-in-quad for a convex quad with corners `a, b, c, d` in order.
pub fn is_point_in_quad(p: Vec2, a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let ap = p - a;
    let cp = p - c;

    let s_ab = cross2(b - a, ap) > 0.0;

    if (cross2(d - a, ap) > 0.0) == s_ab {
        return false;
    }
    if (cross2(b - c, cp) > 0.0) == s_ab {
        return false;
    }
    if (cross2(d - c, cp) > 0.0) != s_ab {
        return false;
    }

    true
}

/// Hover test for a line handle from `start` to `end` with a round cap at
/// `end`.
pub fn is_point_on_handle(
    p: Vec2,
    start: Vec2,
    end: Vec2,
    half_width: f32,
    cap_radius: f32,
) -> bool {
    let on_cap = (p - end).length_squared() < cap_radius * cap_radius;

    let Some(dir) = (end - start).try_normalize() else {
        return on_cap;
    };

    let on_line = (p - start).dot(dir.perp()).abs() < half_width
        && (p - start).dot(dir) >= 0.0
        && (p - end).dot(dir) <= 0.0;

    on_line || on_cap
}

/// Hover test for a circle of `radius` that projects to an ellipse.
///
/// `basis_x`/`basis_y` are the screen-space images of the two unit vectors
/// spanning the circle's plane, so the ring is the set
/// `sin(t) * basis_x * radius + cos(t) * basis_y * radius`. `offset` is the
/// pointer relative to the ellipse center.
///
/// The hover band is `thickness` pixels wide, measured in the local basis so
/// the band stays visually constant under anisotropic projection. When
/// `front_half_only` is set only the half on the `basis_x` side counts.
///
/// A degenerate basis (circle seen edge-on) falls back to a distance test
/// against the line segment the ellipse collapses to.
pub fn ellipse_ring_hit(
    offset: Vec2,
    basis_x: Vec2,
    basis_y: Vec2,
    radius: f32,
    thickness: f32,
    front_half_only: bool,
) -> bool {
    let basis = Mat2::from_cols(basis_x, basis_y);

    if basis.determinant().abs() > DEGENERATE_DET {
        if front_half_only {
            let mut ortho_y = basis_y.perp();
            if basis_x.dot(ortho_y) < 0.0 {
                ortho_y = -ortho_y;
            }
            if offset.dot(ortho_y) <= 0.0 {
                return false;
            }
        }

        let local = basis.inverse() * offset;
        let inv_scale = Vec2::new(basis_x.length().recip(), basis_y.length().recip());
        let tolerance = thickness * (local.normalize_or_zero() * inv_scale).length();

        (local.length() - radius).abs() < tolerance
    } else {
        let along = basis_y.normalize_or_zero();

        offset.dot(along.perp()).abs() < thickness && offset.dot(along).abs() < radius
    }
}

/// Expresses `v` in the (generally non-orthogonal) basis `u_axis, v_axis`.
///
/// Returns `None` for a degenerate basis.
pub fn solve_in_basis(v: Vec2, u_axis: Vec2, v_axis: Vec2) -> Option<Vec2> {
    let basis = Mat2::from_cols(u_axis, v_axis);
    if basis.determinant().abs() <= DEGENERATE_DET {
        return None;
    }
    Some(basis.inverse() * v)
}

/// Where a face-local `(u, v)` coordinate falls on a unit cube face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceRegion {
    /// Outside `[-1, 1]²`
    Outside,
    /// Inside the face, away from the bevel
    Interior,
    /// Within `edge_width` of a face edge or corner
    Edge,
}

/// Classifies a face-local coordinate against an edge band of `edge_width`.
pub fn classify_face_point(uv: Vec2, edge_width: f32) -> FaceRegion {
    let abs = uv.abs();

    if abs.x > 1.0 || abs.y > 1.0 {
        FaceRegion::Outside
    } else if abs.x <= 1.0 - edge_width && abs.y <= 1.0 - edge_width {
        FaceRegion::Interior
    } else {
        FaceRegion::Edge
    }
}

/// Snaps a point on the unit cube surface to the face, edge or corner
/// direction it belongs to.
///
/// Components within the interior band become `0`, the rest round to `±1`.
pub fn snap_to_axis_direction(hit: Vec3, edge_width: f32) -> Vec3 {
    let snap = |c: f32| {
        if c.abs() < 1.0 - edge_width {
            0.0
        } else {
            c.round()
        }
    };
    Vec3::new(snap(hit.x), snap(hit.y), snap(hit.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_plane_hit() {
        let hit = intersect_line_plane(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(2.0, 3.0, 10.0),
            Vec3::Z,
            Vec3::ZERO,
        )
        .unwrap();
        assert_relative_eq!(hit.x, 2.0);
        assert_relative_eq!(hit.y, 3.0);
        assert_relative_eq!(hit.z, 0.0);
    }

    #[test]
    fn test_line_plane_hit_behind_origin() {
        let hit = intersect_line_plane(Vec3::Z, Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::ZERO);
        assert_eq!(hit, Some(Vec3::ZERO));
    }

    #[test]
    fn test_line_parallel_to_plane() {
        assert!(intersect_line_plane(Vec3::X, Vec3::ZERO, Vec3::Z, Vec3::ONE).is_none());
    }

    #[test]
    fn test_point_in_triangle_either_winding() {
        let (a, b, c) = (Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0));
        let inside = Vec2::new(2.0, 2.0);
        let outside = Vec2::new(8.0, 8.0);

        assert!(is_point_in_triangle(inside, a, b, c));
        assert!(is_point_in_triangle(inside, a, c, b));
        assert!(!is_point_in_triangle(outside, a, b, c));
        assert!(!is_point_in_triangle(outside, a, c, b));
    }

    #[test]
    fn test_point_in_quad() {
        let (a, b, c, d) = (
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        );
        assert!(is_point_in_quad(Vec2::new(5.0, 5.0), a, b, c, d));
        assert!(is_point_in_quad(Vec2::new(5.0, 5.0), a, d, c, b));
        assert!(!is_point_in_quad(Vec2::new(15.0, 5.0), a, b, c, d));
        assert!(!is_point_in_quad(Vec2::new(5.0, -1.0), a, b, c, d));
    }

    #[test]
    fn test_handle_line_and_cap() {
        let start = Vec2::ZERO;
        let end = Vec2::new(100.0, 0.0);
        assert!(is_point_on_handle(Vec2::new(50.0, 2.0), start, end, 3.0, 4.5));
        assert!(!is_point_on_handle(Vec2::new(50.0, 5.0), start, end, 3.0, 4.5));
        assert!(!is_point_on_handle(Vec2::new(-1.0, 0.0), start, end, 3.0, 4.5));
        // past the end but inside the cap
        assert!(is_point_on_handle(Vec2::new(103.0, 2.0), start, end, 3.0, 4.5));
        // collapsed handle keeps the cap
        assert!(!is_point_on_handle(Vec2::new(1.0, 1.0), end, end, 3.0, 4.5));
        assert!(is_point_on_handle(Vec2::new(101.0, 1.0), end, end, 3.0, 4.5));
    }

    #[test]
    fn test_circle_ring_hit() {
        let bx = Vec2::X;
        let by = Vec2::Y;
        assert!(ellipse_ring_hit(Vec2::new(50.0, 0.0), bx, by, 50.0, 5.0, false));
        assert!(ellipse_ring_hit(Vec2::new(0.0, -52.0), bx, by, 50.0, 5.0, false));
        assert!(!ellipse_ring_hit(Vec2::new(30.0, 0.0), bx, by, 50.0, 5.0, false));
    }

    #[test]
    fn test_ellipse_thickness_follows_projection() {
        // ring squashed to a third of its width along x
        let bx = Vec2::new(1.0 / 3.0, 0.0);
        let by = Vec2::Y;
        // on the ellipse at the narrow end: 50/3 px from center
        assert!(ellipse_ring_hit(Vec2::new(50.0 / 3.0, 0.0), bx, by, 50.0, 5.0, false));
        // 4 px off the narrow end is still within the 5 px band
        assert!(ellipse_ring_hit(Vec2::new(50.0 / 3.0 + 4.0, 0.0), bx, by, 50.0, 5.0, false));
        assert!(!ellipse_ring_hit(Vec2::new(50.0 / 3.0 + 7.0, 0.0), bx, by, 50.0, 5.0, false));
    }

    #[test]
    fn test_front_half_only() {
        let bx = Vec2::X;
        let by = Vec2::Y;
        assert!(ellipse_ring_hit(Vec2::new(50.0, 0.0), bx, by, 50.0, 5.0, true));
        assert!(!ellipse_ring_hit(Vec2::new(-50.0, 0.0), bx, by, 50.0, 5.0, true));
    }

    #[test]
    fn test_degenerate_ring_falls_back_to_line() {
        let bx = Vec2::ZERO;
        let by = Vec2::Y;
        assert!(ellipse_ring_hit(Vec2::new(2.0, 30.0), bx, by, 50.0, 5.0, true));
        assert!(!ellipse_ring_hit(Vec2::new(8.0, 30.0), bx, by, 50.0, 5.0, true));
        assert!(!ellipse_ring_hit(Vec2::new(0.0, 60.0), bx, by, 50.0, 5.0, true));
    }

    #[test]
    fn test_solve_in_skewed_basis() {
        let u = Vec2::new(2.0, 0.0);
        let v = Vec2::new(1.0, 1.0);
        let p = u * 0.5 + v * -0.25;
        let uv = solve_in_basis(p, u, v).unwrap();
        assert_relative_eq!(uv.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(uv.y, -0.25, epsilon = 1e-6);

        assert!(solve_in_basis(p, u, u * 2.0).is_none());
    }

    #[test]
    fn test_face_regions() {
        assert_eq!(classify_face_point(Vec2::new(0.2, -0.3), 0.1), FaceRegion::Interior);
        assert_eq!(classify_face_point(Vec2::new(0.95, 0.0), 0.1), FaceRegion::Edge);
        assert_eq!(classify_face_point(Vec2::new(0.95, -0.95), 0.1), FaceRegion::Edge);
        assert_eq!(classify_face_point(Vec2::new(1.2, 0.0), 0.1), FaceRegion::Outside);
    }

    #[test]
    fn test_snap_to_axis_direction() {
        assert_eq!(snap_to_axis_direction(Vec3::new(0.3, 1.0, -0.2), 0.1), Vec3::Y);
        assert_eq!(
            snap_to_axis_direction(Vec3::new(0.95, 1.0, -0.2), 0.1),
            Vec3::new(1.0, 1.0, 0.0)
        );
        assert_eq!(
            snap_to_axis_direction(Vec3::new(-0.93, 1.0, 0.97), 0.1),
            Vec3::new(-1.0, 1.0, 1.0)
        );
    }
}
