//! Packed 32-bit colors
//!
//! Colors are stored the way immediate-mode draw lists expect them:
//! `0xAABBGGRR`, red in the lowest byte.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A packed RGBA color (`0xAABBGGRR`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Opaque white
    pub const WHITE: Self = Self(0xFF_FF_FF_FF);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self(0);

    /// Build from unpacked channels.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | (g as u32) << 8 | (b as u32) << 16 | (a as u32) << 24)
    }

    /// Red channel
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Green channel
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8 & 0xFF) as u8
    }

    /// Blue channel
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 16 & 0xFF) as u8
    }

    /// Alpha channel
    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24 & 0xFF) as u8
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Same color with its alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self(self.0 & 0x00_FF_FF_FF | (alpha as u32) << 24)
    }

    /// Same color with every channel masked, e.g. `0xAA_FF_FF_FF` to fade alpha.
    #[inline]
    pub const fn masked(self, mask: u32) -> Self {
        Self(self.0 & mask)
    }

    /// Blends `over` on top of `self` using the alpha of `over`.
    ///
    /// The resulting alpha is the saturating sum of both alphas.
    pub fn alpha_blend(self, over: Self) -> Self {
        let blend = over.a() as f32 / 255.0;
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - blend) + b as f32 * blend) as u8;

        Self::from_rgba(
            mix(self.r(), over.r()),
            mix(self.g(), over.g()),
            mix(self.b(), over.b()),
            self.a().saturating_add(over.a()),
        )
    }

    /// Channel-wise saturating sum of both colors.
    pub fn additive_blend(self, other: Self) -> Self {
        Self::from_rgba(
            self.r().saturating_add(other.r()),
            self.g().saturating_add(other.g()),
            self.b().saturating_add(other.b()),
            self.a().saturating_add(other.a()),
        )
    }
}

impl fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedColor({:#010X})", self.0)
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
