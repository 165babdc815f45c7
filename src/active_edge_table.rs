//! Active edge table scanline fill, and the clip-then-fill pipeline built
//! on it.
//!
//! Edges are bucketed by their lower y. The sweep then moves up one row at
//! a time; on each row it
//!
//! 1. activates the edges whose bucket is this row,
//! 2. retires the edges whose upper y is this row,
//! 3. orders the active edges by current x,
//! 4. fills between consecutive pairs,
//! 5. steps every active x by its inverse slope.
//!
//! An edge is therefore live on the rows `[y_low, y_high)`. The table owns
//! its edges in a `Vec`; nothing outlives one fill call.

use log::{debug, trace};

use crate::basics::{iround, PointI};
use crate::clip::{sutherland_hodgman, ClipWindow};
use crate::color::Rgb8;
use crate::error::{RasterError, Result};
use crate::pixel_sink::PixelSink;

// ============================================================================
// Edges
// ============================================================================

/// One edge while it is pending or active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveEdge {
    /// Crossing on the current row.
    pub x: f64,
    /// Row on which the edge retires.
    pub max_y: i32,
    /// `dx / dy`, added to `x` per row.
    pub inv_slope: f64,
}

impl ActiveEdge {
    /// Edge `v1 -> v2` positioned at its lower end, or `None` if horizontal.
    pub fn from_points(v1: PointI, v2: PointI) -> Option<(i32, ActiveEdge)> {
        if v1.y == v2.y {
            return None;
        }
        let (lo, hi) = if v1.y < v2.y { (v1, v2) } else { (v2, v1) };
        let dx = hi.x as i64 - lo.x as i64;
        let dy = hi.y as i64 - lo.y as i64;
        Some((
            lo.y,
            ActiveEdge {
                x: lo.x as f64,
                max_y: hi.y,
                inv_slope: dx as f64 / dy as f64,
            },
        ))
    }

    /// Move a freshly built edge from its lower end down the rows to `y`.
    fn advance_to(&mut self, from_y: i32, y: i32) {
        self.x += (y as i64 - from_y as i64) as f64 * self.inv_slope;
    }
}

/// Pending edges grouped by the row on which they activate.
///
/// Only rows `[0, rows)` are bucketed. An edge that starts above row 0 is
/// activated on the first row it crosses, with `x` already stepped there.
#[derive(Debug, Clone, Default)]
pub struct EdgeBuckets {
    min_y: i32,
    max_y: i32,
    buckets: Vec<Vec<ActiveEdge>>,
}

impl EdgeBuckets {
    /// Bucket every non-horizontal edge of the closed polygon that crosses
    /// one of the rows `[0, rows)`.
    pub fn from_polygon(points: &[PointI], rows: u32) -> Self {
        let (Some(lo), Some(hi)) = (
            points.iter().map(|p| p.y).min(),
            points.iter().map(|p| p.y).max(),
        ) else {
            return Self::default();
        };
        let min_y = lo.max(0);
        let max_y = (hi as i64).min(rows as i64 - 1);
        if (min_y as i64) > max_y {
            return Self::default();
        }
        let max_y = max_y as i32;
        let mut buckets = vec![Vec::new(); (max_y - min_y + 1) as usize];
        let n = points.len();
        for i in 0..n {
            let next = points[(i + 1) % n];
            let Some((y_low, mut edge)) = ActiveEdge::from_points(points[i], next) else {
                continue;
            };
            let start = y_low.max(min_y);
            if start > max_y || edge.max_y <= start {
                continue;
            }
            edge.advance_to(y_low, start);
            buckets[(start - min_y) as usize].push(edge);
        }
        Self { min_y, max_y, buckets }
    }

    /// True if no row of the surface is crossed by the polygon.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Number of bucketed edges.
    pub fn edge_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Take the edges that activate on row `y`.
    pub fn take(&mut self, y: i32) -> Vec<ActiveEdge> {
        if y < self.min_y || y > self.max_y {
            return Vec::new();
        }
        std::mem::take(&mut self.buckets[(y - self.min_y) as usize])
    }
}

// ============================================================================
// Active edge table
// ============================================================================

/// The edges crossing the current scanline.
#[derive(Debug, Clone, Default)]
pub struct ActiveEdgeTable {
    edges: Vec<ActiveEdge>,
}

impl ActiveEdgeTable {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn add(&mut self, edge: ActiveEdge) {
        self.edges.push(edge);
    }

    /// Retire every edge whose upper end is row `y`.
    pub fn remove_max_y(&mut self, y: i32) {
        self.edges.retain(|e| e.max_y != y);
    }

    /// Advance every edge to the next row.
    pub fn update_x(&mut self) {
        for e in &mut self.edges {
            e.x += e.inv_slope;
        }
    }

    /// Order by current x with repeated bubble passes until a pass makes
    /// no swap. The list is short and nearly sorted from the previous row.
    pub fn sort(&mut self) {
        let mut swapped = true;
        while swapped {
            swapped = false;
            for i in 1..self.edges.len() {
                if self.edges[i - 1].x > self.edges[i].x {
                    self.edges.swap(i - 1, i);
                    swapped = true;
                }
            }
        }
    }

    /// Rounded `(x_left, x_right)` of consecutive active pairs. An odd
    /// trailing edge is ignored.
    pub fn spans(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.edges.chunks_exact(2).map(|pair| (iround(pair[0].x), iround(pair[1].x)))
    }

    pub fn edges(&self) -> &[ActiveEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

// ============================================================================
// Fill
// ============================================================================

/// Fill a closed polygon (any shape, even-odd rule) by sweeping an active
/// edge table from its lowest to its highest vertex. Returns the number
/// of spans drawn.
///
/// The sweep covers only the rows `[0, sink.height())`, the same rows the
/// crossing table fills.
pub fn fill_polygon_aet<S: PixelSink + ?Sized>(sink: &mut S, points: &[PointI], c: Rgb8) -> usize {
    if points.len() < 3 {
        return 0;
    }
    let mut pending = EdgeBuckets::from_polygon(points, sink.height());
    if pending.is_empty() {
        return 0;
    }
    let mut active = ActiveEdgeTable::new();
    let mut spans = 0usize;

    for y in pending.min_y()..=pending.max_y() {
        for edge in pending.take(y) {
            active.add(edge);
        }
        active.remove_max_y(y);
        active.sort();
        trace!("aet row {}: {} active", y, active.len());
        for (x1, x2) in active.spans() {
            sink.hline(x1, x2, y, c);
            spans += 1;
        }
        active.update_x();
    }
    spans
}

/// Clip a polygon to `w` with Sutherland-Hodgman, then fill the result
/// with the active edge table.
///
/// Fails with [`RasterError::TooFewVertices`] below three input vertices.
/// A polygon entirely outside the window draws nothing and returns
/// `Ok(0)`; otherwise the number of spans drawn.
pub fn clip_fill<S: PixelSink + ?Sized>(
    sink: &mut S,
    w: &ClipWindow,
    points: &[PointI],
    c: Rgb8,
) -> Result<usize> {
    if points.len() < 3 {
        return Err(RasterError::TooFewVertices {
            needed: 3,
            got: points.len(),
        });
    }
    let clipped = sutherland_hodgman(points, w);
    if clipped.len() < 3 {
        debug!("clip_fill: polygon outside window {:?}", w);
        return Ok(0);
    }
    let spans = fill_polygon_aet(sink, &clipped, c);
    debug!(
        "clip_fill: {} -> {} vertices, {} spans",
        points.len(),
        clipped.len(),
        spans
    );
    Ok(spans)
}

// ============================================================================
// Tests
// ============================================================================
