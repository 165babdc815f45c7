//! Color type and channel-wise blending.
//!
//! A color is an immutable 3-channel, 8-bit-per-channel value. The only
//! operation the rasterizers need on it is linear interpolation, used by
//! the gradient lines and curves.

use crate::basics::round_half_up;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rgb8
// ============================================================================

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
    pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
    pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack from `0x00RRGGBB`.
    pub const fn from_packed(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xFF) as u8,
            g: ((v >> 8) & 0xFF) as u8,
            b: (v & 0xFF) as u8,
        }
    }

    /// Pack into `0x00RRGGBB`.
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

// ============================================================================
// Blending
// ============================================================================

#[inline]
fn blend_channel(a: u8, b: u8, t: f64) -> u8 {
    round_half_up(a as f64 * t + b as f64 * (1.0 - t)) as u8
}

/// Blend `c1` and `c2` channel by channel: `c1 * t + c2 * (1 - t)`,
/// rounded half up.
///
/// `t = 1` yields `c1` exactly and `t = 0` yields `c2` exactly. No clamping
/// is performed; `t` must lie in `[0, 1]`.
pub fn interpolate(c1: Rgb8, c2: Rgb8, t: f64) -> Rgb8 {
    Rgb8 {
        r: blend_channel(c1.r, c2.r, t),
        g: blend_channel(c1.g, c2.g, t),
        b: blend_channel(c1.b, c2.b, t),
    }
}

/// Color along a gradient running from `start` (t = 0) to `end` (t = 1).
#[inline]
pub fn gradient(start: Rgb8, end: Rgb8, t: f64) -> Rgb8 {
    interpolate(end, start, t)
}

// ============================================================================
// Tests
// ============================================================================
