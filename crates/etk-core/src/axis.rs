//! Hover results reported by the gizmo drawers

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Which part of a gizmo is hovered (bitflags-style).
///
/// The low three bits are the X/Y/Z axes; two bits set name a plane, all
/// three name free movement. `VIEW_AXIS` and `TRACKBALL` are rotation-only
/// parts that are not tied to an object axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct HoveredAxis(u8);

impl HoveredAxis {
    /// Nothing hovered
    pub const NONE: Self = Self(0);
    /// X axis
    pub const X: Self = Self(1 << 0);
    /// Y axis
    pub const Y: Self = Self(1 << 1);
    /// Z axis
    pub const Z: Self = Self(1 << 2);
    /// XY plane
    pub const PLANE_XY: Self = Self(Self::X.0 | Self::Y.0);
    /// XZ plane
    pub const PLANE_XZ: Self = Self(Self::X.0 | Self::Z.0);
    /// YZ plane
    pub const PLANE_YZ: Self = Self(Self::Y.0 | Self::Z.0);
    /// All three axes
    pub const ALL: Self = Self(Self::X.0 | Self::Y.0 | Self::Z.0);
    /// Free (screen-plane) movement, same bits as [`Self::ALL`]
    pub const FREE: Self = Self::ALL;
    /// The camera's view axis (outer rotation ring)
    pub const VIEW_AXIS: Self = Self(1 << 3);
    /// Trackball (inner rotation disc)
    pub const TRACKBALL: Self = Self(1 << 4);

    /// The flag for a single axis index (`0..3`).
    #[inline]
    pub const fn axis(index: usize) -> Self {
        Self(1 << index)
    }

    /// The flag for the plane spanned by two axis indices.
    #[inline]
    pub const fn plane(axis_a: usize, axis_b: usize) -> Self {
        Self(1 << axis_a | 1 << axis_b)
    }

    /// Raw bits
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether nothing is hovered
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Whether all bits of `other` are set
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether this is exactly the given single axis.
    #[inline]
    pub const fn is_single_axis(self, axis: usize) -> bool {
        self.0 == 1 << axis
    }

    /// The axis index if exactly one axis is hovered.
    pub fn single_axis(self) -> Option<usize> {
        match self {
            Self::X => Some(0),
            Self::Y => Some(1),
            Self::Z => Some(2),
            _ => None,
        }
    }

    /// Whether this is exactly the plane of the two given axes.
    #[inline]
    pub const fn is_plane(self, axis_a: usize, axis_b: usize) -> bool {
        self.0 == Self::plane(axis_a, axis_b).0
    }

    /// The two axis indices if a plane is hovered.
    pub fn plane_axes(self) -> Option<(usize, usize)> {
        match self {
            Self::PLANE_XY => Some((0, 1)),
            Self::PLANE_XZ => Some((0, 2)),
            Self::PLANE_YZ => Some((1, 2)),
            _ => None,
        }
    }

    /// The axis orthogonal to the hovered plane.
    pub fn plane_normal_axis(self) -> Option<usize> {
        match self {
            Self::PLANE_XY => Some(2),
            Self::PLANE_XZ => Some(1),
            Self::PLANE_YZ => Some(0),
            _ => None,
        }
    }
}

impl BitOr for HoveredAxis {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for HoveredAxis {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for HoveredAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::NONE => "NONE",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::PLANE_XY => "PLANE_XY",
            Self::PLANE_XZ => "PLANE_XZ",
            Self::PLANE_YZ => "PLANE_YZ",
            Self::ALL => "ALL",
            Self::VIEW_AXIS => "VIEW_AXIS",
            Self::TRACKBALL => "TRACKBALL",
            other => return write!(f, "HoveredAxis({:#07b})", other.0),
        };
        write!(f, "HoveredAxis::{name}")
    }
}

/// Display name of an axis index.
pub fn axis_name(axis: usize) -> &'static str {
    match axis {
        0 => "X",
        1 => "Y",
        2 => "Z",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations() {
        assert_eq!(HoveredAxis::X | HoveredAxis::Y, HoveredAxis::PLANE_XY);
        assert_eq!(HoveredAxis::plane(2, 1), HoveredAxis::PLANE_YZ);
        assert_eq!(HoveredAxis::FREE, HoveredAxis::ALL);
        assert!(HoveredAxis::ALL.contains(HoveredAxis::PLANE_XZ));
        assert!(!HoveredAxis::TRACKBALL.contains(HoveredAxis::X));
    }

    #[test]
    fn test_single_axis() {
        assert_eq!(HoveredAxis::Z.single_axis(), Some(2));
        assert!(HoveredAxis::Y.is_single_axis(1));
        assert_eq!(HoveredAxis::PLANE_XY.single_axis(), None);
        assert_eq!(HoveredAxis::VIEW_AXIS.single_axis(), None);
    }

    #[test]
    fn test_planes() {
        assert_eq!(HoveredAxis::PLANE_XZ.plane_axes(), Some((0, 2)));
        assert_eq!(HoveredAxis::PLANE_XZ.plane_normal_axis(), Some(1));
        assert!(HoveredAxis::PLANE_YZ.is_plane(1, 2));
        assert_eq!(HoveredAxis::ALL.plane_axes(), None);
        assert_eq!(HoveredAxis::NONE.plane_normal_axis(), None);
    }

    #[test]
    fn test_debug_names() {
        assert_eq!(format!("{:?}", HoveredAxis::PLANE_YZ), "HoveredAxis::PLANE_YZ");
        assert_eq!(format!("{:?}", HoveredAxis::NONE), "HoveredAxis::NONE");
    }
}
