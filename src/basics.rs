//! Foundation types and rounding helpers.
//!
//! Everything else in the crate depends on the point type and on the two
//! rounding conventions defined here: round-half-up (used by the color
//! blend and the curve samplers) and round-half-away-from-zero (used when
//! edge crossings are snapped to pixel columns).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round half up: `floor(v + 0.5)`.
///
/// For non-negative values this is ordinary rounding; for negative values
/// `-0.5` rounds to `0`, not `-1`.
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Round a double to the nearest integer (round half away from zero).
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Floor a double to the nearest integer toward negative infinity.
#[inline]
pub fn ifloor(v: f64) -> i32 {
    let i = v as i32;
    i - (i as f64 > v) as i32
}

/// Ceiling of a double as a signed integer.
#[inline]
pub fn iceil(v: f64) -> i32 {
    v.ceil() as i32
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Pixel-lattice point.
pub type PointI = PointBase<i32>;
/// Continuous point used by the curve and fill math.
pub type PointD = PointBase<f64>;

impl PointI {
    /// Widen to a floating point.
    #[inline]
    pub fn to_f64(self) -> PointD {
        PointD::new(self.x as f64, self.y as f64)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: PointI) -> f64 {
        let dx = (other.x as i64 - self.x as i64) as f64;
        let dy = (other.y as i64 - self.y as i64) as f64;
        dx.hypot(dy)
    }
}

impl PointD {
    /// Snap to the pixel lattice with [`round_half_up`].
    #[inline]
    pub fn round(self) -> PointI {
        PointI::new(round_half_up(self.x), round_half_up(self.y))
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[inline]
    pub fn lerp(self, other: PointD, t: f64) -> PointD {
        PointD::new(
            (1.0 - t) * self.x + t * other.x,
            (1.0 - t) * self.y + t * other.y,
        )
    }
}

impl From<PointI> for PointD {
    fn from(p: PointI) -> Self {
        p.to_f64()
    }
}

impl From<(i32, i32)> for PointI {
    fn from((x, y): (i32, i32)) -> Self {
        PointI::new(x, y)
    }
}

impl From<(f64, f64)> for PointD {
    fn from((x, y): (f64, f64)) -> Self {
        PointD::new(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================
