//! Scalar accumulator for drag operations
//!
//! A [`ValueTracker`] remembers the value a drag started at and the signed
//! delta since then, optionally snapped to a fixed interval. Negative zero is
//! never stored, so `-0°` or `-0.00` can't reach a readout or a matrix.

use std::ops::{Add, Div, Mul, Sub};

/// Floating point types a [`ValueTracker`] can hold.
pub trait TrackedScalar:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;

    /// Round half away from zero.
    fn round(self) -> Self;
    /// Whether the value is finite
    fn is_finite(self) -> bool;
    /// Converts from an `f32` snapping interval.
    fn from_f32(value: f32) -> Self;
}

macro_rules! impl_tracked_scalar {
    ($($t:ty),*) => {$(
        impl TrackedScalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn round(self) -> Self {
                <$t>::round(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn from_f32(value: f32) -> Self {
                value as $t
            }
        }
    )*};
}

impl_tracked_scalar!(f32, f64);

/// Replaces negative zero with positive zero, leaving every other value as is.
#[inline]
pub fn normalize_zero<N: TrackedScalar>(value: N) -> N {
    // -0.0 == 0.0, so this catches both zeros and returns the positive one
    if value == N::ZERO { N::ZERO } else { value }
}

/// Rounds `value` to the nearest multiple of `interval`.
#[inline]
pub fn snap_to_interval<N: TrackedScalar>(value: N, interval: N) -> N {
    normalize_zero((value / interval).round() * interval)
}

/// Signed shortest rotation from `angle_a` to `angle_b`, both taken modulo
/// `full_rotation`. The result never exceeds half a rotation in magnitude.
pub fn shortest_rotation_between(angle_a: f64, angle_b: f64, full_rotation: f64) -> f64 {
    let old = angle_a.rem_euclid(full_rotation);
    let new = angle_b.rem_euclid(full_rotation);

    let delta = new - old;

    if delta.abs() > full_rotation / 2.0 {
        -(full_rotation - delta.abs()) * delta.signum()
    } else {
        delta
    }
}

/// Start value plus running delta of a dragged scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTracker<N> {
    start: N,
    delta: N,
}

impl<N: TrackedScalar> ValueTracker<N> {
    /// Starts tracking at `start` with a zero delta.
    pub fn new(start: N) -> Self {
        Self {
            start: normalize_zero(start),
            delta: N::ZERO,
        }
    }

    /// Value the drag started at
    pub fn start_value(&self) -> N {
        self.start
    }

    /// Current (possibly snapped) delta from the start value
    pub fn delta_value(&self) -> N {
        self.delta
    }

    /// `start + delta`
    pub fn value(&self) -> N {
        self.start + self.delta
    }

    /// `(start + delta) / start`; NaN or infinite when `start` is zero.
    pub fn scale_factor(&self) -> N {
        self.value() / self.start
    }

    /// Like [`Self::scale_factor`], but reports `1` for a zero start value.
    pub fn scale_factor_or_identity(&self) -> N {
        let factor = self.scale_factor();
        if self.start == N::ZERO || !factor.is_finite() {
            N::ONE
        } else {
            factor
        }
    }

    /// Sets the delta so that the tracked value becomes `new_value`, snapped
    /// to `snapping_interval` if one is given.
    pub fn update(&mut self, new_value: N, snapping_interval: Option<f32>) {
        let mut delta = new_value - self.start;

        if let Some(interval) = snapping_interval.filter(|i| *i > 0.0) {
            delta = snap_to_interval(delta, N::from_f32(interval));
        }

        self.delta = normalize_zero(delta);
    }
}
