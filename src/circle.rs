//! Circle scan conversion.
//!
//! Every variant computes one octant and mirrors it with [`draw8`]:
//!
//! - direct: `y = round(sqrt(r² - x²))` while `y > x`
//! - polar (legacy): the same equation swept by absolute screen column,
//!   radius taken from a point on the rim
//! - iterative polar: repeated rotation of `(r, 0)` by `1/r` radians
//! - midpoint (Bresenham): decision value `(x+1)² + (y-½)² - r²`
//! - modified midpoint: the same walk with purely additive integer updates

use crate::basics::{iround, round_half_up, PointI};
use crate::color::Rgb8;
use crate::error::{RasterError, Result};
use crate::pixel_sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Eight-way symmetry
// ============================================================================

/// Plot `(x, y)` relative to the centre in all eight octants.
#[inline]
pub fn draw8<S: PixelSink + ?Sized>(sink: &mut S, xc: i32, yc: i32, x: i32, y: i32, c: Rgb8) {
    let octants = [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ];
    for (dx, dy) in octants {
        sink.set_pixel(xc.saturating_add(dx), yc.saturating_add(dy), c);
    }
}

#[inline]
fn check_radius(r: i32) -> Result<()> {
    if r <= 0 {
        return Err(RasterError::InvalidRadius(r));
    }
    Ok(())
}

// ============================================================================
// Equation-based circles
// ============================================================================

/// Direct circle: step x from 0 and solve y from the circle equation until
/// the octant boundary `y <= x` is reached.
pub fn circle_direct<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    r: i32,
    c: Rgb8,
) -> Result<()> {
    check_radius(r)?;
    let (mut x, mut y) = (0i32, r);
    let r2 = r as i64 * r as i64;
    draw8(sink, center.x, center.y, x, y, c);
    while y > x {
        x += 1;
        y = iround(((r2 - x as i64 * x as i64) as f64).sqrt());
        draw8(sink, center.x, center.y, x, y, c);
    }
    Ok(())
}

/// Legacy polar circle: radius from the distance between `center` and
/// `rim`, then a sweep over the screen columns `xc..=xc + r` (mirrored
/// onto the left half as `x = xc - column`).
///
/// Less efficient than [`circle_direct`] (it evaluates the whole quarter,
/// not one octant) but kept as its own selectable algorithm.
pub fn circle_polar<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    rim: PointI,
    c: Rgb8,
) -> Result<()> {
    let dx = (center.x as i64 - rim.x as i64) as f64;
    let dy = (center.y as i64 - rim.y as i64) as f64;
    let r = round_half_up((dx * dx + dy * dy).sqrt());
    check_radius(r)?;
    let r2 = r as i64 * r as i64;
    for column in 0..=r {
        let x = -column;
        let y = round_half_up(((r2 - x as i64 * x as i64) as f64).sqrt());
        draw8(sink, center.x, center.y, x, y, c);
    }
    Ok(())
}

/// Iterative polar circle: start at `(r, 0)` and rotate by `dθ = 1/r`
/// with the 2D rotation formulas until `x <= y`.
pub fn circle_iterative_polar<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    r: i32,
    c: Rgb8,
) -> Result<()> {
    check_radius(r)?;
    let dtheta = 1.0 / r as f64;
    let (st, ct) = dtheta.sin_cos();
    let (mut x, mut y) = (r as f64, 0.0f64);
    draw8(sink, center.x, center.y, round_half_up(x), round_half_up(y), c);
    while x > y {
        let x1 = x * ct - y * st;
        y = x * st + y * ct;
        x = x1;
        draw8(sink, center.x, center.y, round_half_up(x), round_half_up(y), c);
    }
    Ok(())
}

// ============================================================================
// Midpoint circles
// ============================================================================

/// Midpoint (Bresenham) circle.
///
/// Returns the last octant point `(x, y)` plotted, which lies on the 45°
/// diagonal (within one pixel) and is used to place the diagonals of the
/// pizza pattern.
pub fn circle_midpoint<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    r: i32,
    c: Rgb8,
) -> Result<(i32, i32)> {
    check_radius(r)?;
    let (mut x, mut y) = (0i32, r);
    let r2 = r as f64 * r as f64;
    draw8(sink, center.x, center.y, x, y, c);
    while x < y {
        let fx = (x + 1) as f64;
        let fy = y as f64 - 0.5;
        let d = round_half_up(fx * fx + fy * fy - r2);
        x += 1;
        if d > 0 {
            y -= 1;
        }
        draw8(sink, center.x, center.y, x, y, c);
    }
    Ok((x, y))
}

/// Midpoint circle with second-order differences: `d`, `d1` and `d2` are
/// only ever added to, never multiplied.
pub fn circle_midpoint_modified<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    r: i32,
    c: Rgb8,
) -> Result<()> {
    check_radius(r)?;
    let (mut x, mut y) = (0i32, r);
    let mut d = 1 - r;
    let mut d1 = 3;
    let mut d2 = 5 - 2 * r;
    draw8(sink, center.x, center.y, x, y, c);
    while x < y {
        x += 1;
        if d < 0 {
            d += d1;
            d2 += 2;
        } else {
            y -= 1;
            d += d2;
            d2 += 4;
        }
        d1 += 2;
        draw8(sink, center.x, center.y, x, y, c);
    }
    Ok(())
}

// ============================================================================
// Algorithm selector
// ============================================================================

/// Selectable circle rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CircleAlgorithm {
    Direct,
    Polar,
    IterativePolar,
    #[default]
    Midpoint,
    ModifiedMidpoint,
}

impl CircleAlgorithm {
    pub fn draw<S: PixelSink + ?Sized>(
        self,
        sink: &mut S,
        center: PointI,
        r: i32,
        c: Rgb8,
    ) -> Result<()> {
        match self {
            CircleAlgorithm::Direct => circle_direct(sink, center, r, c),
            CircleAlgorithm::Polar => {
                let rim_x = center.x.checked_add(r).unwrap_or(center.x - r);
                circle_polar(sink, center, PointI::new(rim_x, center.y), c)
            }
            CircleAlgorithm::IterativePolar => circle_iterative_polar(sink, center, r, c),
            CircleAlgorithm::Midpoint => circle_midpoint(sink, center, r, c).map(|_| ()),
            CircleAlgorithm::ModifiedMidpoint => circle_midpoint_modified(sink, center, r, c),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
