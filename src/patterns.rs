//! Composite fills built from the primitive rasterizers: the pizza circle,
//! quarter-circle fills and wave-textured rectangles.

use crate::basics::PointI;
use crate::circle::circle_midpoint;
use crate::color::Rgb8;
use crate::curves::{draw_bezier, draw_hermite, CurveOptions, CurvePaint, HermiteSegment};
use crate::error::{RasterError, Result};
use crate::line::draw_line_bresenham;
use crate::pixel_sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Quarter
// ============================================================================

/// One quarter of a circle in screen coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quarter {
    TopRight = 1,
    TopLeft = 2,
    BottomLeft = 3,
    BottomRight = 4,
}

impl Quarter {
    /// True if the offset `(dx, dy)` from the centre lies in this quarter.
    /// Points on the axes belong to both adjoining quarters.
    pub fn contains(self, dx: i32, dy: i32) -> bool {
        match self {
            Quarter::TopRight => dx >= 0 && dy <= 0,
            Quarter::TopLeft => dx <= 0 && dy <= 0,
            Quarter::BottomLeft => dx <= 0 && dy >= 0,
            Quarter::BottomRight => dx >= 0 && dy >= 0,
        }
    }

    /// Start angle in degrees, counter-clockwise from +x with y up.
    pub fn start_degrees(self) -> f64 {
        match self {
            Quarter::TopRight => 0.0,
            Quarter::TopLeft => 90.0,
            Quarter::BottomLeft => 180.0,
            Quarter::BottomRight => 270.0,
        }
    }
}

impl TryFrom<u8> for Quarter {
    type Error = RasterError;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            1 => Ok(Quarter::TopRight),
            2 => Ok(Quarter::TopLeft),
            3 => Ok(Quarter::BottomLeft),
            4 => Ok(Quarter::BottomRight),
            _ => Err(RasterError::InvalidQuarter(v)),
        }
    }
}

// ============================================================================
// Pizza circle
// ============================================================================

/// Midpoint circle cut into eight slices: both axis diameters and the two
/// diagonals through the last octant point of the circle.
pub fn pizza_circle<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    r: i32,
    c: Rgb8,
) -> Result<()> {
    let (xc, yc) = (center.x, center.y);
    let (x, y) = circle_midpoint(sink, center, r, c)?;
    draw_line_bresenham(sink, PointI::new(xc - r, yc), PointI::new(xc + r, yc), c);
    draw_line_bresenham(sink, PointI::new(xc, yc - r), PointI::new(xc, yc + r), c);
    draw_line_bresenham(sink, PointI::new(xc - x, yc - y), PointI::new(xc + x, yc + y), c);
    draw_line_bresenham(sink, PointI::new(xc + x, yc - y), PointI::new(xc - x, yc + y), c);
    Ok(())
}

// ============================================================================
// Quarter fills
// ============================================================================

/// Grid spacing and radius range of the small-circle fill.
const DOT_MAX_RADIUS: i32 = 4;
const DOT_MIN_RADIUS: i32 = 1;

/// Fill one quarter of the circle `(center, r)` with small circles on an
/// 8-pixel grid. Dots shrink from radius 4 at the centre to 1 at the rim.
pub fn fill_quarter_with_circles<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    r: i32,
    quarter: Quarter,
    c: Rgb8,
) -> Result<()> {
    if r <= 0 {
        return Err(RasterError::InvalidRadius(r));
    }
    let r2 = r as i64 * r as i64;
    let spacing = (2 * DOT_MAX_RADIUS) as usize;
    for y in (-r..=r).step_by(spacing) {
        for x in (-r..=r).step_by(spacing) {
            let d2 = x as i64 * x as i64 + y as i64 * y as i64;
            if d2 > r2 || !quarter.contains(x, y) {
                continue;
            }
            let ratio = (d2 as f64).sqrt() / r as f64;
            let range = (DOT_MAX_RADIUS - DOT_MIN_RADIUS) as f64;
            let dot = (DOT_MIN_RADIUS as f64 + (1.0 - ratio) * range) as i32;
            circle_midpoint(sink, PointI::new(center.x + x, center.y + y), dot.max(1), c)?;
        }
    }
    Ok(())
}

/// Fill one quarter of the circle `(center, r)` with radii drawn every
/// half degree.
pub fn fill_quarter_with_lines<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    r: i32,
    quarter: Quarter,
    c: Rgb8,
) -> Result<()> {
    if r <= 0 {
        return Err(RasterError::InvalidRadius(r));
    }
    let start = quarter.start_degrees();
    for k in 0..=180 {
        let angle = (start + k as f64 * 0.5).to_radians();
        let (s, co) = angle.sin_cos();
        let end = PointI::new(
            center.x + (r as f64 * co) as i32,
            center.y - (r as f64 * s) as i32,
        );
        draw_line_bresenham(sink, center, end, c);
    }
    Ok(())
}

// ============================================================================
// Wave fills
// ============================================================================

pub const WAVE_LENGTH: i32 = 40;
pub const WAVE_HEIGHT: i32 = 15;
pub const WAVE_STEP: usize = 6;

/// Fill the rectangle spanned by two corners with rows of Bezier waves,
/// one row every [`WAVE_STEP`] pixels.
pub fn fill_rect_with_bezier_waves<S: PixelSink + ?Sized>(
    sink: &mut S,
    corner1: PointI,
    corner2: PointI,
    c: Rgb8,
    opts: CurveOptions,
) {
    let (left, right) = (corner1.x.min(corner2.x), corner1.x.max(corner2.x));
    let (top, bottom) = (corner1.y.min(corner2.y), corner1.y.max(corner2.y));
    for y in (top..=bottom).step_by(WAVE_STEP) {
        for x in (left..right).step_by(WAVE_LENGTH as usize) {
            let ctrl = [
                PointI::new(x, y),
                PointI::new(x + WAVE_LENGTH / 4, y - WAVE_HEIGHT),
                PointI::new(x + 3 * WAVE_LENGTH / 4, y + WAVE_HEIGHT),
                PointI::new(x + WAVE_LENGTH, y),
            ];
            draw_bezier(sink, ctrl, CurvePaint::Solid(c), opts);
        }
    }
}

/// Fill the square `[left, left + size] x [top, top + size]` with columns
/// of vertical Hermite waves, one column every [`WAVE_STEP`] pixels.
pub fn fill_square_with_hermite_waves<S: PixelSink + ?Sized>(
    sink: &mut S,
    top_left: PointI,
    size: i32,
    c: Rgb8,
    opts: CurveOptions,
) {
    let (left, top) = (top_left.x, top_left.y);
    for x in (left..=left + size).step_by(WAVE_STEP) {
        for y in (top..top + size).step_by(WAVE_LENGTH as usize) {
            let seg = HermiteSegment {
                p1: PointI::new(x, y),
                t1: PointI::new(WAVE_HEIGHT, 0),
                p2: PointI::new(x, y + WAVE_LENGTH),
                t2: PointI::new(-WAVE_HEIGHT, 0),
            };
            draw_hermite(sink, &seg, CurvePaint::Solid(c), opts);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
