//! Line scan conversion.
//!
//! Three ways to put a segment on the pixel lattice:
//!
//! - [`BresenhamLine`]: integer midpoint stepping along the major axis.
//! - [`draw_line_midpoint`]: recursive bisection until the truncated
//!   midpoint touches an endpoint.
//! - [`draw_line_gradient`]: parametric DDA sampling with a color blend
//!   from one end to the other ([`draw_line_dda`] for a single color).

use crate::basics::{round_half_up, PointI};
use crate::color::{gradient, Rgb8};
use crate::pixel_sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Bresenham line iterator
// ============================================================================

/// Integer midpoint (Bresenham) line walker.
///
/// Yields every lattice point from the start to the end inclusive, one
/// step along the major axis per item. The decision variable starts at
/// `2*minor - major`; a non-negative value moves the minor coordinate and
/// adds `2*(minor - major)`, otherwise `2*minor` is added.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    x2: i32,
    y2: i32,
    sx: i32,
    sy: i32,
    ver: bool,
    d: i64,
    inc_straight: i64,
    inc_diag: i64,
    done: bool,
}

impl BresenhamLine {
    pub fn new(p1: PointI, p2: PointI) -> Self {
        let dx = (p2.x as i64 - p1.x as i64).abs();
        let dy = (p2.y as i64 - p1.y as i64).abs();
        let ver = dx <= dy;
        let (major, minor) = if ver { (dy, dx) } else { (dx, dy) };
        Self {
            x: p1.x,
            y: p1.y,
            x2: p2.x,
            y2: p2.y,
            sx: if p2.x > p1.x { 1 } else { -1 },
            sy: if p2.y > p1.y { 1 } else { -1 },
            ver,
            d: 2 * minor - major,
            inc_straight: 2 * minor,
            inc_diag: 2 * (minor - major),
            done: false,
        }
    }

    /// True if y is the major (stepping) axis.
    #[inline]
    pub fn is_ver(&self) -> bool {
        self.ver
    }
}

impl Iterator for BresenhamLine {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        if self.done {
            return None;
        }
        let cur = PointI::new(self.x, self.y);
        let at_end = if self.ver {
            self.y == self.y2
        } else {
            self.x == self.x2
        };
        if at_end {
            self.done = true;
            return Some(cur);
        }

        let step_minor = self.d >= 0;
        if step_minor {
            self.d += self.inc_diag;
        } else {
            self.d += self.inc_straight;
        }
        if self.ver {
            self.y += self.sy;
            if step_minor {
                self.x += self.sx;
            }
        } else {
            self.x += self.sx;
            if step_minor {
                self.y += self.sy;
            }
        }
        Some(cur)
    }
}

/// Draw a Bresenham line including both endpoints.
pub fn draw_line_bresenham<S: PixelSink + ?Sized>(sink: &mut S, p1: PointI, p2: PointI, c: Rgb8) {
    for p in BresenhamLine::new(p1, p2) {
        sink.set_pixel(p.x, p.y, c);
    }
}

// ============================================================================
// Recursive midpoint bisection
// ============================================================================

/// Draw a line by plotting both endpoints and recursing on the two halves
/// around the (integer-truncated) midpoint.
///
/// Recursion stops once the midpoint coincides with an endpoint, which
/// only happens when the endpoints are 8-neighbours, so the result has no
/// gaps. Depth is logarithmic in the segment length.
pub fn draw_line_midpoint<S: PixelSink + ?Sized>(sink: &mut S, p1: PointI, p2: PointI, c: Rgb8) {
    sink.set_pixel(p1.x, p1.y, c);
    sink.set_pixel(p2.x, p2.y, c);

    let mid = PointI::new(
        ((p1.x as i64 + p2.x as i64) / 2) as i32,
        ((p1.y as i64 + p2.y as i64) / 2) as i32,
    );
    if mid == p1 || mid == p2 {
        return;
    }
    draw_line_midpoint(sink, p1, mid, c);
    sink.set_pixel(mid.x, mid.y, c);
    draw_line_midpoint(sink, mid, p2, c);
}

// ============================================================================
// Gradient DDA line
// ============================================================================

/// Range of steps `i in 0..=n` whose coordinate `from + delta * i / n`
/// can round onto `[0, extent)`, widened by a pixel on each side.
fn visible_steps(from: f64, delta: f64, extent: u32, n: i64) -> Option<(i64, i64)> {
    let (lo, hi) = (-1.0, extent as f64);
    if delta == 0.0 {
        return (lo..=hi).contains(&from).then_some((0, n));
    }
    let a = (lo - from) / delta * n as f64;
    let b = (hi - from) / delta * n as f64;
    let first = a.min(b).floor().max(0.0);
    let last = a.max(b).ceil().min(n as f64);
    (first <= last).then_some((first as i64, last as i64))
}

/// Parametric DDA line whose color runs from `c_start` at `p1` to `c_end`
/// at `p2`.
///
/// Samples `t = i / n` for `i in 0..=n` where `n = max(|dx|, |dy|)`. Steps
/// that cannot land on the sink are skipped.
pub fn draw_line_gradient<S: PixelSink + ?Sized>(
    sink: &mut S,
    p1: PointI,
    p2: PointI,
    c_start: Rgb8,
    c_end: Rgb8,
) {
    let dx = p2.x as i64 - p1.x as i64;
    let dy = p2.y as i64 - p1.y as i64;
    let n = dx.abs().max(dy.abs());
    if n == 0 {
        sink.set_pixel(p1.x, p1.y, c_start);
        return;
    }
    let (x0, y0) = (p1.x as f64, p1.y as f64);
    let (dx, dy) = (dx as f64, dy as f64);
    let Some((xa, xb)) = visible_steps(x0, dx, sink.width(), n) else {
        return;
    };
    let Some((ya, yb)) = visible_steps(y0, dy, sink.height(), n) else {
        return;
    };
    for i in xa.max(ya)..=xb.min(yb) {
        let t = i as f64 / n as f64;
        let c = gradient(c_start, c_end, t);
        sink.set_pixel(round_half_up(dx * t + x0), round_half_up(dy * t + y0), c);
    }
}

/// Single-color parametric DDA line.
pub fn draw_line_dda<S: PixelSink + ?Sized>(sink: &mut S, p1: PointI, p2: PointI, c: Rgb8) {
    draw_line_gradient(sink, p1, p2, c, c);
}

// ============================================================================
// Algorithm selector
// ============================================================================

/// Selectable line rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineAlgorithm {
    #[default]
    Bresenham,
    Midpoint,
    Dda,
}

impl LineAlgorithm {
    pub fn draw<S: PixelSink + ?Sized>(self, sink: &mut S, p1: PointI, p2: PointI, c: Rgb8) {
        match self {
            LineAlgorithm::Bresenham => draw_line_bresenham(sink, p1, p2, c),
            LineAlgorithm::Midpoint => draw_line_midpoint(sink, p1, p2, c),
            LineAlgorithm::Dda => draw_line_dda(sink, p1, p2, c),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_sink::PixelBuffer;

    fn p(x: i32, y: i32) -> PointI {
        PointI::new(x, y)
    }

    fn connected_8(points: &[PointI]) -> bool {
        points
            .windows(2)
            .all(|w| (w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1)
    }

    #[test]
    fn test_bresenham_horizontal() {
        let pts: Vec<_> = BresenhamLine::new(p(2, 5), p(7, 5)).collect();
        assert_eq!(pts.len(), 6);
        assert!(pts.iter().all(|q| q.y == 5));
        assert_eq!(pts.first(), Some(&p(2, 5)));
        assert_eq!(pts.last(), Some(&p(7, 5)));
    }

    #[test]
    fn test_bresenham_vertical_reverse() {
        let li = BresenhamLine::new(p(3, 9), p(3, 1));
        assert!(li.is_ver());
        let pts: Vec<_> = li.collect();
        assert_eq!(pts.len(), 9);
        assert_eq!(pts.last(), Some(&p(3, 1)));
    }

    #[test]
    fn test_bresenham_shallow_slope() {
        let pts: Vec<_> = BresenhamLine::new(p(0, 0), p(8, 3)).collect();
        assert_eq!(pts.len(), 9);
        assert!(connected_8(&pts));
        assert_eq!(pts.last(), Some(&p(8, 3)));
        // One point per column.
        for (i, q) in pts.iter().enumerate() {
            assert_eq!(q.x, i as i32);
        }
    }

    #[test]
    fn test_bresenham_all_octants_reach_end() {
        let ends = [
            (9, 4),
            (4, 9),
            (-4, 9),
            (-9, 4),
            (-9, -4),
            (-4, -9),
            (4, -9),
            (9, -4),
        ];
        for &(x, y) in &ends {
            let pts: Vec<_> = BresenhamLine::new(p(0, 0), p(x, y)).collect();
            assert_eq!(pts.first(), Some(&p(0, 0)));
            assert_eq!(pts.last(), Some(&p(x, y)), "end ({x},{y})");
            assert!(connected_8(&pts));
            assert_eq!(pts.len() as i32, x.abs().max(y.abs()) + 1);
        }
    }

    #[test]
    fn test_single_point_line() {
        let pts: Vec<_> = BresenhamLine::new(p(4, 4), p(4, 4)).collect();
        assert_eq!(pts, vec![p(4, 4)]);
    }

    #[test]
    fn test_midpoint_line_matches_length_and_endpoints() {
        let mut buf = PixelBuffer::new(40, 40, Rgb8::BLACK);
        draw_line_midpoint(&mut buf, p(1, 2), p(30, 17), Rgb8::RED);
        assert_eq!(buf.get_pixel(1, 2), Some(Rgb8::RED));
        assert_eq!(buf.get_pixel(30, 17), Some(Rgb8::RED));
        // At least one pixel per column on a shallow line.
        for x in 1..=30 {
            assert!((0..40).any(|y| buf.get_pixel(x, y) == Some(Rgb8::RED)));
        }
    }

    #[test]
    fn test_midpoint_line_negative_coordinates_terminate() {
        let mut buf = PixelBuffer::new(10, 10, Rgb8::BLACK);
        draw_line_midpoint(&mut buf, p(-7, -3), p(5, 6), Rgb8::RED);
        assert_eq!(buf.get_pixel(5, 6), Some(Rgb8::RED));
    }

    #[test]
    fn test_gradient_line_end_colors() {
        let mut buf = PixelBuffer::new(20, 5, Rgb8::BLACK);
        draw_line_gradient(&mut buf, p(0, 2), p(10, 2), Rgb8::RED, Rgb8::BLUE);
        assert_eq!(buf.get_pixel(0, 2), Some(Rgb8::RED));
        assert_eq!(buf.get_pixel(10, 2), Some(Rgb8::BLUE));
        let mid = buf.get_pixel(5, 2).unwrap();
        assert_eq!(mid, Rgb8::new(128, 0, 128));
    }

    #[test]
    fn test_gradient_line_degenerate() {
        let mut buf = PixelBuffer::new(5, 5, Rgb8::BLACK);
        draw_line_gradient(&mut buf, p(2, 2), p(2, 2), Rgb8::GREEN, Rgb8::BLUE);
        assert_eq!(buf.count(Rgb8::GREEN), 1);
    }

    #[test]
    fn test_gradient_line_extreme_endpoints() {
        let mut buf = PixelBuffer::new(20, 10, Rgb8::BLACK);
        let (left, right) = (p(-2_000_000_000, 5), p(2_000_000_000, 5));
        draw_line_gradient(&mut buf, left, right, Rgb8::RED, Rgb8::BLUE);
        assert_eq!(buf.positions_of(Rgb8::BLACK).len(), 20 * 9);
        assert!((0..20).all(|x| buf.get_pixel(x, 5) != Some(Rgb8::BLACK)));

        let mut other = PixelBuffer::new(20, 10, Rgb8::BLACK);
        draw_line_dda(&mut other, p(i32::MIN, i32::MIN), p(i32::MAX, i32::MAX), Rgb8::WHITE);
        assert_eq!(other.count(Rgb8::WHITE), 10);
        assert_eq!(other.get_pixel(3, 3), Some(Rgb8::WHITE));
    }

    #[test]
    fn test_gradient_line_partly_off_surface() {
        let mut a = PixelBuffer::new(12, 12, Rgb8::BLACK);
        draw_line_gradient(&mut a, p(-30, -7), p(40, 25), Rgb8::GREEN, Rgb8::BLUE);
        let mut b = PixelBuffer::new(100, 100, Rgb8::BLACK);
        draw_line_gradient(&mut b, p(0, 0), p(70, 32), Rgb8::GREEN, Rgb8::BLUE);
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(a.get_pixel(x, y), b.get_pixel(x + 30, y + 7), "({x},{y})");
            }
        }
    }

    #[test]
    fn test_algorithm_selector() {
        let mut a = PixelBuffer::new(16, 16, Rgb8::BLACK);
        LineAlgorithm::Bresenham.draw(&mut a, p(0, 0), p(15, 15), Rgb8::WHITE);
        assert_eq!(a.count(Rgb8::WHITE), 16);
        let mut b = PixelBuffer::new(16, 16, Rgb8::BLACK);
        LineAlgorithm::Midpoint.draw(&mut b, p(0, 0), p(15, 15), Rgb8::WHITE);
        assert_eq!(b.count(Rgb8::WHITE), 16);
        let mut d = PixelBuffer::new(16, 16, Rgb8::BLACK);
        LineAlgorithm::Dda.draw(&mut d, p(0, 0), p(15, 15), Rgb8::WHITE);
        assert_eq!(d, a);
    }
}
