//! Axis-aligned ellipse scan conversion.
//!
//! Three methods, all centred on `center` with semi-axes `a` (horizontal)
//! and `b` (vertical):
//!
//! - equation: solve y from x, then x from y, so neither the flat sides
//!   nor the caps leave gaps
//! - midpoint: the two-region decision-variable walk (slope magnitude
//!   below 1, then at or above 1), mirrored into four quadrants
//! - polar: `(a cos θ, b sin θ)` with θ stepped by `1 / max(a, b)`
//!
//! Negative axes are taken by magnitude. A zero axis degenerates to a
//! line along the other axis, or a single point if both are zero.

use crate::basics::{iround, round_half_up, PointI};
use crate::color::Rgb8;
use crate::pixel_sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[inline]
fn plot4<S: PixelSink + ?Sized>(sink: &mut S, center: PointI, x: i32, y: i32, c: Rgb8) {
    sink.set_pixel(center.x + x, center.y + y, c);
    sink.set_pixel(center.x - x, center.y + y, c);
    sink.set_pixel(center.x + x, center.y - y, c);
    sink.set_pixel(center.x - x, center.y - y, c);
}

/// Draw the degenerate forms. Returns `true` if the ellipse was degenerate
/// and has been drawn.
fn draw_degenerate<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    a: i32,
    b: i32,
    c: Rgb8,
) -> bool {
    match (a, b) {
        (0, 0) => sink.set_pixel(center.x, center.y, c),
        (0, _) => {
            for y in -b..=b {
                sink.set_pixel(center.x, center.y + y, c);
            }
        }
        (_, 0) => sink.hline(center.x - a, center.x + a, center.y, c),
        _ => return false,
    }
    true
}

// ============================================================================
// Equation method
// ============================================================================

/// Ellipse from the standard equation `x²/a² + y²/b² = 1`.
pub fn ellipse_equation<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    a: i32,
    b: i32,
    c: Rgb8,
) {
    let (a, b) = (a.abs(), b.abs());
    if draw_degenerate(sink, center, a, b, c) {
        return;
    }
    let (a2, b2) = (a as f64 * a as f64, b as f64 * b as f64);

    for x in -a..=a {
        let y_sq = (1.0 - (x as f64 * x as f64) / a2) * b2;
        if y_sq >= 0.0 {
            let y = iround(y_sq.sqrt());
            sink.set_pixel(center.x + x, center.y + y, c);
            sink.set_pixel(center.x + x, center.y - y, c);
        }
    }

    for y in -b..=b {
        let x_sq = (1.0 - (y as f64 * y as f64) / b2) * a2;
        if x_sq >= 0.0 {
            let x = iround(x_sq.sqrt());
            sink.set_pixel(center.x + x, center.y + y, c);
            sink.set_pixel(center.x - x, center.y + y, c);
        }
    }
}

// ============================================================================
// Midpoint method
// ============================================================================

/// Two-region midpoint ellipse.
///
/// Region 1 starts at `(0, b)` and always steps x; it ends where the
/// tangent slope reaches -1 (`2b²x >= 2a²y`). Region 2 always steps y
/// down to the major axis.
pub fn ellipse_midpoint<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: PointI,
    a: i32,
    b: i32,
    c: Rgb8,
) {
    let (a, b) = (a.abs(), b.abs());
    if draw_degenerate(sink, center, a, b, c) {
        return;
    }
    let a2 = a as f64 * a as f64;
    let b2 = b as f64 * b as f64;

    let (mut x, mut y) = (0i32, b);
    let mut dx = 0.0;
    let mut dy = 2.0 * a2 * y as f64;
    let mut d = b2 - a2 * b as f64 + 0.25 * a2;

    while dx < dy {
        plot4(sink, center, x, y, c);
        x += 1;
        dx += 2.0 * b2;
        if d < 0.0 {
            d += dx + b2;
        } else {
            y -= 1;
            dy -= 2.0 * a2;
            d += dx - dy + b2;
        }
    }

    let xh = x as f64 + 0.5;
    let ym = (y - 1) as f64;
    let mut d = b2 * xh * xh + a2 * ym * ym - a2 * b2;
    while y >= 0 {
        plot4(sink, center, x, y, c);
        y -= 1;
        dy -= 2.0 * a2;
        if d > 0.0 {
            d += a2 - dy;
        } else {
            x += 1;
            dx += 2.0 * b2;
            d += dx - dy + a2;
        }
    }
}

// ============================================================================
// Polar method
// ============================================================================

/// Ellipse sampled at `θ = i / max(a, b)` over one full turn.
pub fn ellipse_polar<S: PixelSink + ?Sized>(sink: &mut S, center: PointI, a: i32, b: i32, c: Rgb8) {
    let (a, b) = (a.abs(), b.abs());
    if draw_degenerate(sink, center, a, b, c) {
        return;
    }
    let step = 1.0 / a.max(b) as f64;
    let turn = 2.0 * std::f64::consts::PI;
    let mut i = 0u32;
    loop {
        let angle = i as f64 * step;
        if angle >= turn {
            break;
        }
        let (s, co) = angle.sin_cos();
        sink.set_pixel(
            round_half_up(center.x as f64 + a as f64 * co),
            round_half_up(center.y as f64 + b as f64 * s),
            c,
        );
        i += 1;
    }
}

// ============================================================================
// Algorithm selector
// ============================================================================

/// Selectable ellipse rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EllipseAlgorithm {
    Equation,
    #[default]
    Midpoint,
    Polar,
}

impl EllipseAlgorithm {
    pub fn draw<S: PixelSink + ?Sized>(
        self,
        sink: &mut S,
        center: PointI,
        a: i32,
        b: i32,
        c: Rgb8,
    ) {
        match self {
            EllipseAlgorithm::Equation => ellipse_equation(sink, center, a, b, c),
            EllipseAlgorithm::Midpoint => ellipse_midpoint(sink, center, a, b, c),
            EllipseAlgorithm::Polar => ellipse_polar(sink, center, a, b, c),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
