//! Clipping against an axis-aligned window.
//!
//! Cohen-Sutherland for segments, Sutherland-Hodgman for polygons and a
//! plain inside test for points. The window is an explicit value passed
//! to every call; nothing here holds clip state between calls.
//!
//! The window is inclusive on all four sides. "Bottom" and "top" name the
//! `ymin` and `ymax` edges regardless of screen orientation.

use log::{debug, trace};

use crate::basics::PointI;
use crate::color::Rgb8;
use crate::error::{RasterError, Result};
use crate::line::draw_line_bresenham;
use crate::pixel_sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// ClipWindow
// ============================================================================

/// Inclusive clip rectangle `[xmin, xmax] x [ymin, ymax]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClipWindow {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl Default for ClipWindow {
    fn default() -> Self {
        Self {
            xmin: 0,
            ymin: 0,
            xmax: 800,
            ymax: 600,
        }
    }
}

impl ClipWindow {
    /// Window spanning two opposite corners given in any order.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            xmin: x1.min(x2),
            ymin: y1.min(y2),
            xmax: x1.max(x2),
            ymax: y1.max(y2),
        }
    }

    /// Replace the bounds, normalizing the corners.
    pub fn set(&mut self, xmin: i32, ymin: i32, xmax: i32, ymax: i32) {
        *self = Self::new(xmin, ymin, xmax, ymax);
    }

    /// Square window dragged out from `start` towards `end`.
    ///
    /// The side is the larger of the two drag extents; the square keeps
    /// `start` as a corner and grows in the direction of the drag on both
    /// axes.
    pub fn square_from_drag(start: PointI, end: PointI) -> Self {
        let dx = end.x as i64 - start.x as i64;
        let dy = end.y as i64 - start.y as i64;
        let side = dx.abs().max(dy.abs());
        let sx = if dx < 0 { -1 } else { 1 };
        let sy = if dy < 0 { -1 } else { 1 };
        let corner = |from: i32, dir: i64| {
            (from as i64 + dir * side).clamp(i32::MIN as i64, i32::MAX as i64) as i32
        };
        Self::new(start.x, start.y, corner(start.x, sx), corner(start.y, sy))
    }

    #[inline]
    pub fn contains(&self, p: PointI) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    pub fn width(&self) -> i64 {
        self.xmax as i64 - self.xmin as i64
    }

    pub fn height(&self) -> i64 {
        self.ymax as i64 - self.ymin as i64
    }

    /// Corners in drawing order, starting at `(xmin, ymin)`.
    pub fn corners(&self) -> [PointI; 4] {
        [
            PointI::new(self.xmin, self.ymin),
            PointI::new(self.xmax, self.ymin),
            PointI::new(self.xmax, self.ymax),
            PointI::new(self.xmin, self.ymax),
        ]
    }
}

// ============================================================================
// Outcodes
// ============================================================================

pub const INSIDE: u8 = 0;
pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const BOTTOM: u8 = 4;
pub const TOP: u8 = 8;

/// Cohen-Sutherland region code of `p`.
///
/// ```text
///  1001 | 1000 | 1010      TOP    (y > ymax)
/// ------+------+------
///  0001 | 0000 | 0010
/// ------+------+------
///  0101 | 0100 | 0110      BOTTOM (y < ymin)
///  LEFT        RIGHT
/// ```
#[inline]
pub fn outcode(p: PointI, w: &ClipWindow) -> u8 {
    let mut code = INSIDE;
    if p.x < w.xmin {
        code |= LEFT;
    } else if p.x > w.xmax {
        code |= RIGHT;
    }
    if p.y < w.ymin {
        code |= BOTTOM;
    } else if p.y > w.ymax {
        code |= TOP;
    }
    code
}

// ============================================================================
// Cohen-Sutherland
// ============================================================================

/// Upper bound on boundary moves. A well-formed segment needs at most two
/// per endpoint; integer truncation can add a re-clip.
const MAX_CLIP_PASSES: usize = 16;

/// `a + (b - a) * num / den` in integer arithmetic, truncating.
#[inline]
fn along(a: i32, b: i32, num: i64, den: i64) -> i32 {
    (a as i64 + (b as i64 - a as i64) * num / den) as i32
}

/// Clip the segment `p1 -> p2` to `w`.
///
/// Returns the visible part with its endpoints in the original order, or
/// `None` if nothing of the segment lies inside the window. When an
/// endpoint is outside several boundaries it is moved onto TOP first,
/// then BOTTOM, RIGHT and LEFT.
pub fn clip_line(w: &ClipWindow, p1: PointI, p2: PointI) -> Option<(PointI, PointI)> {
    let (mut a, mut b) = (p1, p2);
    let (mut ca, mut cb) = (outcode(a, w), outcode(b, w));

    for _ in 0..MAX_CLIP_PASSES {
        if ca | cb == INSIDE {
            return Some((a, b));
        }
        if ca & cb != INSIDE {
            return None;
        }
        let out = if ca != INSIDE { ca } else { cb };
        let dx = b.x as i64 - a.x as i64;
        let dy = b.y as i64 - a.y as i64;

        let moved = if out & TOP != 0 {
            if dy == 0 {
                return None;
            }
            PointI::new(along(a.x, b.x, w.ymax as i64 - a.y as i64, dy), w.ymax)
        } else if out & BOTTOM != 0 {
            if dy == 0 {
                return None;
            }
            PointI::new(along(a.x, b.x, w.ymin as i64 - a.y as i64, dy), w.ymin)
        } else if out & RIGHT != 0 {
            if dx == 0 {
                return None;
            }
            PointI::new(w.xmax, along(a.y, b.y, w.xmax as i64 - a.x as i64, dx))
        } else {
            if dx == 0 {
                return None;
            }
            PointI::new(w.xmin, along(a.y, b.y, w.xmin as i64 - a.x as i64, dx))
        };

        if out == ca {
            a = moved;
            ca = outcode(a, w);
        } else {
            b = moved;
            cb = outcode(b, w);
        }
    }
    debug!("clip_line: gave up after {} passes", MAX_CLIP_PASSES);
    None
}

/// Draw the visible part of `p1 -> p2` with the Bresenham line. Returns
/// `false` if the segment was rejected.
pub fn draw_clipped_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    w: &ClipWindow,
    p1: PointI,
    p2: PointI,
    c: Rgb8,
) -> bool {
    match clip_line(w, p1, p2) {
        Some((a, b)) => {
            draw_line_bresenham(sink, a, b, c);
            true
        }
        None => false,
    }
}

/// Plot `p` only if it lies inside `w`.
pub fn draw_clipped_point<S: PixelSink + ?Sized>(
    sink: &mut S,
    w: &ClipWindow,
    p: PointI,
    c: Rgb8,
) -> bool {
    if w.contains(p) {
        sink.set_pixel(p.x, p.y, c);
        true
    } else {
        false
    }
}

// ============================================================================
// Sutherland-Hodgman
// ============================================================================

/// One boundary of the window, in clipping order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Left,
    Right,
    Bottom,
    Top,
}

impl Boundary {
    pub const ORDER: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    #[inline]
    pub fn inside(self, p: PointI, w: &ClipWindow) -> bool {
        match self {
            Boundary::Left => p.x >= w.xmin,
            Boundary::Right => p.x <= w.xmax,
            Boundary::Bottom => p.y >= w.ymin,
            Boundary::Top => p.y <= w.ymax,
        }
    }

    /// Where `p1 -> p2` crosses this boundary. The free coordinate is
    /// truncated toward `p1`. A zero-length edge returns `p1`.
    pub fn intersect(self, p1: PointI, p2: PointI, w: &ClipWindow) -> PointI {
        let dx = (p2.x as i64 - p1.x as i64) as f64;
        let dy = (p2.y as i64 - p1.y as i64) as f64;
        if dx == 0.0 && dy == 0.0 {
            return p1;
        }
        // The offset is bounded by the edge, so the sum lands back in i32.
        let offset = |base: i32, from: i32, to: i32, num: f64, den: f64| {
            (base as i64 + ((to as i64 - from as i64) as f64 * num / den) as i64) as i32
        };
        let at_x = |x: i32| PointI::new(x, offset(p1.y, p1.x, x, dy, dx));
        let at_y = |y: i32| PointI::new(offset(p1.x, p1.y, y, dx, dy), y);
        match self {
            Boundary::Left => at_x(w.xmin),
            Boundary::Right => at_x(w.xmax),
            Boundary::Bottom => at_y(w.ymin),
            Boundary::Top => at_y(w.ymax),
        }
    }

    /// Clip a closed polygon against this one boundary.
    pub fn clip(self, poly: &[PointI], w: &ClipWindow) -> Vec<PointI> {
        let n = poly.len();
        let mut out = Vec::with_capacity(n + 2);
        for i in 0..n {
            let curr = poly[i];
            let prev = poly[(i + n - 1) % n];
            let curr_in = self.inside(curr, w);
            let prev_in = self.inside(prev, w);
            if curr_in {
                if !prev_in {
                    out.push(self.intersect(prev, curr, w));
                }
                out.push(curr);
            } else if prev_in {
                out.push(self.intersect(prev, curr, w));
            }
        }
        out
    }
}

/// Clip a closed polygon to `w`, boundary by boundary in the order left,
/// right, bottom, top.
///
/// Returns an empty list for fewer than three input vertices or when no
/// part of the polygon is inside. A polygon already inside the window is
/// returned unchanged, vertex order included.
pub fn sutherland_hodgman(points: &[PointI], w: &ClipWindow) -> Vec<PointI> {
    if points.len() < 3 {
        return Vec::new();
    }
    let mut poly = points.to_vec();
    for boundary in Boundary::ORDER {
        poly = boundary.clip(&poly, w);
        trace!("sutherland_hodgman: after {:?} -> {} vertices", boundary, poly.len());
        if poly.is_empty() {
            break;
        }
    }
    debug!("sutherland_hodgman: {} -> {} vertices", points.len(), poly.len());
    poly
}

/// Draw the closed outline `points[0] -> ... -> points[n-1] -> points[0]`.
pub fn draw_polygon_outline<S: PixelSink + ?Sized>(sink: &mut S, points: &[PointI], c: Rgb8) {
    let n = points.len();
    for i in 0..n {
        draw_line_bresenham(sink, points[i], points[(i + 1) % n], c);
    }
}

/// Clip a polygon to `w` and draw what remains as a closed outline.
///
/// Returns `Ok(false)` if fewer than three vertices survive clipping.
pub fn draw_clipped_polygon<S: PixelSink + ?Sized>(
    sink: &mut S,
    w: &ClipWindow,
    points: &[PointI],
    c: Rgb8,
) -> Result<bool> {
    if points.len() < 3 {
        return Err(RasterError::TooFewVertices {
            needed: 3,
            got: points.len(),
        });
    }
    let clipped = sutherland_hodgman(points, w);
    if clipped.len() < 3 {
        return Ok(false);
    }
    draw_polygon_outline(sink, &clipped, c);
    Ok(true)
}

// ============================================================================
// Tests
// ============================================================================
