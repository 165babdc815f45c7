//! Scanline polygon fill over per-row edge tables.
//!
//! Both fills walk every non-horizontal edge from its lower to its upper
//! vertex, one row at a time, with `x` advanced by the inverse slope. Rows
//! follow the half-open convention: an edge covers `[y_low, y_high)`, so a
//! vertex shared by two edges is counted once.
//!
//! - convex: each row keeps only the outermost crossings (one span)
//! - non-convex: each row keeps every crossing; sorted crossings are
//!   paired into spans (even-odd rule)
//!
//! Rows are limited to `[0, sink.height())`.

use log::debug;

use crate::basics::{iceil, ifloor, iround, round_half_up, PointI};
use crate::color::Rgb8;
use crate::error::{RasterError, Result};
use crate::geometry::is_convex;
use crate::pixel_sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Call `f(y, x)` for every table row an edge crosses.
///
/// Skips horizontal edges. Rows outside `[0, rows)` are not reported;
/// the walk jumps straight to the first visible row.
fn walk_edge(v1: PointI, v2: PointI, rows: usize, mut f: impl FnMut(usize, f64)) {
    if v1.y == v2.y {
        return;
    }
    let (lo, hi) = if v1.y < v2.y { (v1, v2) } else { (v2, v1) };
    let dx = hi.x as i64 - lo.x as i64;
    let dy = hi.y as i64 - lo.y as i64;
    let inv_slope = dx as f64 / dy as f64;

    let start = lo.y.max(0);
    let end = (hi.y as i64).min(rows as i64);
    let mut x = lo.x as f64 + (start as i64 - lo.y as i64) as f64 * inv_slope;
    let mut y = start as i64;
    while y < end {
        f(y as usize, x);
        y += 1;
        x += inv_slope;
    }
}

/// Call `f(v1, v2)` for each edge of the closed polygon, starting with the
/// closing edge from the last vertex to the first.
fn for_each_edge(points: &[PointI], mut f: impl FnMut(PointI, PointI)) {
    if let Some(&last) = points.last() {
        let mut v1 = last;
        for &v2 in points {
            f(v1, v2);
            v1 = v2;
        }
    }
}

fn require_vertices(points: &[PointI]) -> Result<()> {
    if points.len() < 3 {
        return Err(RasterError::TooFewVertices {
            needed: 3,
            got: points.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Convex edge table
// ============================================================================

/// Outermost crossings of one row. Starts at the empty sentinel
/// `(i32::MAX, i32::MIN)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    pub x_left: i32,
    pub x_right: i32,
}

impl RowBounds {
    pub const EMPTY: RowBounds = RowBounds {
        x_left: i32::MAX,
        x_right: i32::MIN,
    };
}

impl Default for RowBounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Per-row `(x_left, x_right)` table for convex polygons.
#[derive(Debug, Clone)]
pub struct ConvexEdgeTable {
    rows: Vec<RowBounds>,
}

impl ConvexEdgeTable {
    pub fn new(height: u32) -> Self {
        Self {
            rows: vec![RowBounds::EMPTY; height as usize],
        }
    }

    /// Narrow the rows crossed by `v1 -> v2`: `x_left` to the smallest
    /// `ceil(x)`, `x_right` to the largest `floor(x)`.
    pub fn add_edge(&mut self, v1: PointI, v2: PointI) {
        let rows = &mut self.rows;
        walk_edge(v1, v2, rows.len(), |y, x| {
            let row = &mut rows[y];
            row.x_left = row.x_left.min(iceil(x));
            row.x_right = row.x_right.max(ifloor(x));
        });
    }

    pub fn add_polygon(&mut self, points: &[PointI]) {
        for_each_edge(points, |a, b| self.add_edge(a, b));
    }

    pub fn row(&self, y: usize) -> Option<RowBounds> {
        self.rows.get(y).copied()
    }

    /// `(y, x_left, x_right)` for every row with `x_left < x_right`.
    pub fn spans(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.x_left < r.x_right)
            .map(|(y, r)| (y as i32, r.x_left, r.x_right))
    }
}

/// Fill a convex polygon, one span per row.
///
/// Fails with [`RasterError::TooFewVertices`] below three vertices and
/// with [`RasterError::InvalidGeometry`] if the polygon is not convex.
/// Returns the number of spans drawn.
pub fn fill_convex<S: PixelSink + ?Sized>(
    sink: &mut S,
    points: &[PointI],
    c: Rgb8,
) -> Result<usize> {
    require_vertices(points)?;
    if !is_convex(points) {
        debug!("fill_convex: rejected non-convex polygon ({} vertices)", points.len());
        return Err(RasterError::InvalidGeometry {
            reason: "polygon is not convex",
        });
    }
    let mut table = ConvexEdgeTable::new(sink.height());
    table.add_polygon(points);
    let mut spans = 0usize;
    for (y, x1, x2) in table.spans() {
        sink.hline(x1, x2, y, c);
        spans += 1;
    }
    debug!("fill_convex: {} vertices, {} spans", points.len(), spans);
    Ok(spans)
}

// ============================================================================
// Non-convex edge table
// ============================================================================

/// Per-row list of every edge crossing, for arbitrary (including
/// self-intersecting) polygons.
#[derive(Debug, Clone)]
pub struct CrossingTable {
    rows: Vec<Vec<i32>>,
}

impl CrossingTable {
    pub fn new(height: u32) -> Self {
        Self {
            rows: vec![Vec::new(); height as usize],
        }
    }

    /// Record `round(x)` on every row crossed by `v1 -> v2`.
    pub fn add_edge(&mut self, v1: PointI, v2: PointI) {
        let rows = &mut self.rows;
        walk_edge(v1, v2, rows.len(), |y, x| rows[y].push(iround(x)));
    }

    pub fn add_polygon(&mut self, points: &[PointI]) {
        for_each_edge(points, |a, b| self.add_edge(a, b));
    }

    /// Sort every row's crossings ascending.
    pub fn sort(&mut self) {
        for row in &mut self.rows {
            row.sort_unstable();
        }
    }

    pub fn crossings(&self, y: usize) -> &[i32] {
        self.rows.get(y).map_or(&[], |r| r.as_slice())
    }

    /// `(y, x1, x2)` for consecutive crossing pairs of each row. Call
    /// [`sort`](Self::sort) first. An odd trailing crossing is dropped.
    pub fn spans(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.chunks_exact(2).map(move |pair| (y as i32, pair[0], pair[1]))
        })
    }
}

/// Fill any closed polygon with the even-odd rule.
///
/// Fails with [`RasterError::TooFewVertices`] below three vertices.
/// Returns the number of spans drawn.
pub fn fill_non_convex<S: PixelSink + ?Sized>(
    sink: &mut S,
    points: &[PointI],
    c: Rgb8,
) -> Result<usize> {
    require_vertices(points)?;
    let mut table = CrossingTable::new(sink.height());
    table.add_polygon(points);
    table.sort();
    let mut spans = 0usize;
    for (y, x1, x2) in table.spans() {
        sink.hline(x1, x2, y, c);
        spans += 1;
    }
    debug!("fill_non_convex: {} vertices, {} spans", points.len(), spans);
    Ok(spans)
}

// ============================================================================
// Barycentric triangle fill
// ============================================================================

/// Grid step of the barycentric weights.
const BARYCENTRIC_STEP: f64 = 0.001;

/// Fill a triangle by plotting `t1*p1 + t2*p2 + (1 - t1 - t2)*p3` for
/// weights on a 0.001 grid with `t1 + t2 < 1`.
pub fn fill_triangle_barycentric<S: PixelSink + ?Sized>(sink: &mut S, tri: [PointI; 3], c: Rgb8) {
    let [p1, p2, p3] = tri.map(|p| p.to_f64());
    let n = (1.0 / BARYCENTRIC_STEP).round() as i32;
    for i in 0..n {
        let t1 = i as f64 * BARYCENTRIC_STEP;
        for j in 0..n - i {
            let t2 = j as f64 * BARYCENTRIC_STEP;
            let t3 = 1.0 - t1 - t2;
            let x = t1 * p1.x + t2 * p2.x + t3 * p3.x;
            let y = t1 * p1.y + t2 * p2.y + t3 * p3.y;
            sink.set_pixel(round_half_up(x), round_half_up(y), c);
        }
    }
}

// ============================================================================
// Algorithm selector
// ============================================================================

/// Selectable scanline polygon fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FillAlgorithm {
    Convex,
    #[default]
    NonConvex,
}

impl FillAlgorithm {
    /// Fill `points`, returning the number of spans drawn.
    pub fn fill<S: PixelSink + ?Sized>(
        self,
        sink: &mut S,
        points: &[PointI],
        c: Rgb8,
    ) -> Result<usize> {
        match self {
            FillAlgorithm::Convex => fill_convex(sink, points, c),
            FillAlgorithm::NonConvex => fill_non_convex(sink, points, c),
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

    fn pts(v: &[(i32, i32)]) -> Vec<PointI> {
        v.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn test_convex_square_rows() {
        let square = pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let mut table = ConvexEdgeTable::new(20);
        table.add_polygon(&square);
        for y in 0..10 {
            assert_eq!(
                table.row(y),
                Some(RowBounds {
                    x_left: 0,
                    x_right: 10
                })
            );
        }
        // Top row excluded by the half-open edge range.
        assert_eq!(table.row(10), Some(RowBounds::EMPTY));

        let mut buf = PixelBuffer::new(20, 20, Rgb8::BLACK);
        assert_eq!(fill_convex(&mut buf, &square, Rgb8::RED), Ok(10));
        assert_eq!(buf.count(Rgb8::RED), 110);
    }

    #[test]
    fn test_convex_triangle_spans_narrow() {
        let tri = pts(&[(10, 0), (20, 20), (0, 20)]);
        let mut table = ConvexEdgeTable::new(30);
        table.add_polygon(&tri);
        let r5 = table.row(5).unwrap();
        // Left edge x = 10 - y/2, right edge x = 10 + y/2.
        assert_eq!((r5.x_left, r5.x_right), (8, 12));
        let r0 = table.row(0).unwrap();
        assert_eq!((r0.x_left, r0.x_right), (10, 10));
        // Single-pixel row is not a span.
        assert!(table.spans().all(|(y, _, _)| y != 0));
    }

    #[test]
    fn test_convex_rejects_bad_input() {
        let mut buf = PixelBuffer::new(30, 30, Rgb8::BLACK);
        let bowtie = pts(&[(0, 0), (20, 20), (20, 0), (0, 20)]);
        assert!(matches!(
            fill_convex(&mut buf, &bowtie, Rgb8::RED),
            Err(RasterError::InvalidGeometry { .. })
        ));
        assert_eq!(
            fill_convex(&mut buf, &pts(&[(0, 0), (5, 5)]), Rgb8::RED),
            Err(RasterError::TooFewVertices { needed: 3, got: 2 })
        );
        assert_eq!(buf.count(Rgb8::RED), 0);
    }

    #[test]
    fn test_non_convex_bowtie_has_two_spans_per_row() {
        let bowtie = pts(&[(0, 0), (20, 20), (20, 0), (0, 20)]);
        let mut table = CrossingTable::new(30);
        table.add_polygon(&bowtie);
        table.sort();
        for y in 1..10 {
            let row = table.crossings(y as usize);
            assert_eq!(row, &[0, y, 20 - y, 20]);
            assert_eq!(table.spans().filter(|&(sy, _, _)| sy == y).count(), 2);
        }
        let mut buf = PixelBuffer::new(30, 30, Rgb8::BLACK);
        fill_non_convex(&mut buf, &bowtie, Rgb8::GREEN).unwrap();
        // Gap between the two lobes on row 5.
        assert_eq!(buf.get_pixel(10, 5), Some(Rgb8::BLACK));
        assert_eq!(buf.get_pixel(3, 5), Some(Rgb8::GREEN));
        assert_eq!(buf.get_pixel(17, 5), Some(Rgb8::GREEN));
    }

    #[test]
    fn test_non_convex_matches_convex_on_convex_input() {
        let hexagon = pts(&[(20, 2), (36, 10), (36, 28), (20, 36), (4, 28), (4, 10)]);
        let mut a = PixelBuffer::new(40, 40, Rgb8::BLACK);
        let mut b = PixelBuffer::new(40, 40, Rgb8::BLACK);
        fill_convex(&mut a, &hexagon, Rgb8::WHITE).unwrap();
        fill_non_convex(&mut b, &hexagon, Rgb8::WHITE).unwrap();
        assert_eq!(a.get_pixel(20, 20), Some(Rgb8::WHITE));
        assert_eq!(b.get_pixel(20, 20), Some(Rgb8::WHITE));
        // Rounding differs at the edges only.
        let diff = a.count(Rgb8::WHITE).abs_diff(b.count(Rgb8::WHITE));
        assert!(diff <= 2 * 36, "diff {diff}");
    }

    #[test]
    fn test_concave_arrow() {
        // Arrow notch at (10, 10): row 15 has two spans.
        let arrow = pts(&[(0, 0), (10, 10), (20, 0), (10, 30)]);
        let mut buf = PixelBuffer::new(30, 40, Rgb8::BLACK);
        fill_non_convex(&mut buf, &arrow, Rgb8::RED).unwrap();
        assert_eq!(buf.get_pixel(10, 5), Some(Rgb8::BLACK));
        assert_eq!(buf.get_pixel(10, 15), Some(Rgb8::RED));
        assert_eq!(buf.get_pixel(3, 5), Some(Rgb8::RED));
    }

    #[test]
    fn test_rows_outside_surface_are_skipped() {
        let big = pts(&[(-50, -50), (60, -50), (60, 60), (-50, 60)]);
        let mut buf = PixelBuffer::new(10, 10, Rgb8::BLACK);
        assert_eq!(fill_non_convex(&mut buf, &big, Rgb8::BLUE), Ok(10));
        assert_eq!(buf.count(Rgb8::BLUE), 100);
    }

    #[test]
    fn test_fill_algorithm_selector() {
        let tri = pts(&[(2, 2), (17, 4), (8, 15)]);
        let mut buf = PixelBuffer::new(20, 20, Rgb8::BLACK);
        assert!(FillAlgorithm::Convex.fill(&mut buf, &tri, Rgb8::RED).unwrap() > 0);
        assert!(FillAlgorithm::NonConvex.fill(&mut buf, &tri, Rgb8::RED).unwrap() > 0);
    }

    #[test]
    fn test_barycentric_triangle() {
        let mut buf = PixelBuffer::new(40, 40, Rgb8::BLACK);
        let tri = [(5, 5).into(), (35, 5).into(), (5, 35).into()];
        fill_triangle_barycentric(&mut buf, tri, Rgb8::RED);
        for (x, y) in [(5, 5), (34, 5), (5, 34), (15, 15), (6, 30)] {
            assert_eq!(buf.get_pixel(x, y), Some(Rgb8::RED), "({x},{y})");
        }
        assert_eq!(buf.get_pixel(30, 30), Some(Rgb8::BLACK));
        // Right isosceles triangle with legs 30: area 450 plus the border.
        let n = buf.count(Rgb8::RED);
        assert!((450..=530).contains(&n), "{n}");
    }

    #[test]
    fn test_extreme_vertices() {
        let tri = pts(&[
            (-2_000_000_000, -2_000_000_000),
            (2_000_000_000, 0),
            (-2_000_000_000, 2_000_000_000),
        ]);
        let mut buf = PixelBuffer::new(10, 10, Rgb8::BLACK);
        assert_eq!(fill_convex(&mut buf, &tri, Rgb8::RED), Ok(10));
        assert_eq!(buf.count(Rgb8::RED), 100);
        let mut buf = PixelBuffer::new(10, 10, Rgb8::BLACK);
        assert_eq!(fill_non_convex(&mut buf, &tri, Rgb8::RED), Ok(10));
        assert_eq!(buf.count(Rgb8::RED), 100);
    }
}
