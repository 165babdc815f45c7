//! Polygon validity helpers: convexity, minimum vertex spacing, and the
//! small integer matrix product used by the cubic curve bases.

use crate::basics::PointI;
use crate::error::{RasterError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum distance between a newly entered polygon vertex and every
/// vertex already in the polygon.
pub const MIN_VERTEX_DISTANCE: f64 = 5.0;

// ============================================================================
// Cross product and convexity
// ============================================================================

/// Z component of `(b - a) x (c - b)`.
///
/// Positive for a left turn at `b` in a y-up frame, negative for a right
/// turn, zero when the three points are collinear.
#[inline]
pub fn turn(a: PointI, b: PointI, c: PointI) -> i128 {
    let d = |p: i32, q: i32| q as i128 - p as i128;
    let (abx, aby) = (d(a.x, b.x), d(a.y, b.y));
    let (bcx, bcy) = (d(b.x, c.x), d(b.y, c.y));
    abx * bcy - aby * bcx
}

/// True if the closed polygon turns the same way at every vertex.
///
/// Collinear triples are ignored; one sign flip anywhere makes the polygon
/// non-convex. Fewer than three vertices is never convex.
pub fn is_convex(points: &[PointI]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0i128;
    for i in 0..n {
        let t = turn(points[i], points[(i + 1) % n], points[(i + 2) % n]);
        if t == 0 {
            continue;
        }
        let s = t.signum();
        if sign == 0 {
            sign = s;
        } else if s != sign {
            return false;
        }
    }
    true
}

/// True if the last vertex of `points` keeps at least
/// [`MIN_VERTEX_DISTANCE`] from every earlier vertex.
pub fn is_valid_polygon(points: &[PointI]) -> bool {
    match points.split_last() {
        Some((last, rest)) if !rest.is_empty() => rest
            .iter()
            .all(|p| last.distance(*p) >= MIN_VERTEX_DISTANCE),
        _ => true,
    }
}

/// `m * g` for a 4x4 integer matrix and a 4-vector.
pub fn matrix_mult(m: &[[i64; 4]; 4], g: &[i64; 4]) -> [i64; 4] {
    let mut r = [0i64; 4];
    for (ri, row) in r.iter_mut().zip(m.iter()) {
        *ri = row.iter().zip(g.iter()).map(|(a, b)| a * b).sum();
    }
    r
}

// ============================================================================
// Polygon
// ============================================================================

/// Closed polygon built one vertex at a time from user input.
///
/// The last vertex connects back to the first implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    points: Vec<PointI>,
}

impl Polygon {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Wrap an existing vertex list without spacing checks (clip output,
    /// programmatic shapes).
    pub fn from_vertices(points: Vec<PointI>) -> Self {
        Self { points }
    }

    /// Append a vertex, rejecting it if it lands within
    /// [`MIN_VERTEX_DISTANCE`] of an existing vertex.
    pub fn push(&mut self, p: PointI) -> Result<()> {
        if let Some(closest) = self
            .points
            .iter()
            .map(|q| p.distance(*q))
            .min_by(|a, b| a.total_cmp(b))
        {
            if closest < MIN_VERTEX_DISTANCE {
                return Err(RasterError::VertexTooClose {
                    distance: closest,
                    minimum: MIN_VERTEX_DISTANCE,
                });
            }
        }
        self.points.push(p);
        Ok(())
    }

    pub fn vertices(&self) -> &[PointI] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// At least three vertices.
    pub fn is_fillable(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn is_convex(&self) -> bool {
        is_convex(&self.points)
    }

    pub fn into_vertices(self) -> Vec<PointI> {
        self.points
    }
}

impl From<Vec<PointI>> for Polygon {
    fn from(points: Vec<PointI>) -> Self {
        Self::from_vertices(points)
    }
}

impl AsRef<[PointI]> for Polygon {
    fn as_ref(&self) -> &[PointI] {
        &self.points
    }
}

// ============================================================================
// Tests
// ============================================================================
