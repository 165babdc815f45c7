//! Parametric curves: cubic Hermite and Bezier through a 4x4 basis matrix,
//! de Casteljau evaluation of any degree, cardinal splines built from
//! Hermite segments, and a gradient quadratic through three points.
//!
//! The matrix-basis curves compute their coefficient vectors in integer
//! arithmetic (coordinates and basis entries are integers) and only go to
//! floating point when the cubic is evaluated at `t`.

use crate::basics::{round_half_up, PointD, PointI};
use crate::color::{gradient, Rgb8};
use crate::geometry::matrix_mult;
use crate::pixel_sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Hermite characteristic matrix for the geometry `[P1, P2, T1, T2]`.
pub const HERMITE_BASIS: [[i64; 4]; 4] = [
    [2, -2, 1, 1],
    [-3, 3, -2, -1],
    [0, 0, 1, 0],
    [1, 0, 0, 0],
];

/// Bezier characteristic matrix for the geometry `[P0, P1, P2, P3]`.
pub const BEZIER_BASIS: [[i64; 4]; 4] = [
    [-1, 3, -3, 1],
    [3, -6, 3, 0],
    [-3, 3, 0, 0],
    [1, 0, 0, 0],
];

// ============================================================================
// Options and paint
// ============================================================================

/// Sampling resolution of the curve drawers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveOptions {
    /// Samples over `[0, 1]` for matrix-basis cubics (step 0.0001).
    pub samples: u32,
    /// Samples over `[0, 1)` for the de Casteljau drawer (step 0.00005).
    pub casteljau_samples: u32,
    /// Samples over `[0, 1]` for the quadratic drawer (step 0.00001).
    pub quadratic_samples: u32,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            samples: 10_000,
            casteljau_samples: 20_000,
            quadratic_samples: 100_000,
        }
    }
}

/// How a curve is colored along its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurvePaint {
    Solid(Rgb8),
    /// `start` at `t = 0`, `end` at `t = 1`.
    Gradient { start: Rgb8, end: Rgb8 },
    /// Four colors, one blend per third of the parameter range.
    FourStop([Rgb8; 4]),
}

impl CurvePaint {
    pub fn at(&self, t: f64) -> Rgb8 {
        match *self {
            CurvePaint::Solid(c) => c,
            CurvePaint::Gradient { start, end } => gradient(start, end, t),
            CurvePaint::FourStop(stops) => {
                let scaled = t.clamp(0.0, 1.0) * 3.0;
                let k = (scaled.floor() as usize).min(2);
                gradient(stops[k], stops[k + 1], scaled - k as f64)
            }
        }
    }
}

impl From<Rgb8> for CurvePaint {
    fn from(c: Rgb8) -> Self {
        CurvePaint::Solid(c)
    }
}

// ============================================================================
// Cubic coefficients
// ============================================================================

/// Power-basis coefficients `C0 t³ + C1 t² + C2 t + C3` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cubic {
    pub cx: [i64; 4],
    pub cy: [i64; 4],
}

impl Cubic {
    /// Multiply `basis` by the x and y geometry vectors.
    pub fn from_basis(basis: &[[i64; 4]; 4], g: [PointI; 4]) -> Self {
        let gx = g.map(|p| p.x as i64);
        let gy = g.map(|p| p.y as i64);
        Self {
            cx: matrix_mult(basis, &gx),
            cy: matrix_mult(basis, &gy),
        }
    }

    /// Hermite segment from `p1` (tangent `t1`) to `p2` (tangent `t2`).
    pub fn hermite(p1: PointI, t1: PointI, p2: PointI, t2: PointI) -> Self {
        Self::from_basis(&HERMITE_BASIS, [p1, p2, t1, t2])
    }

    /// Cubic Bezier with control polygon `p`.
    pub fn bezier(p: [PointI; 4]) -> Self {
        Self::from_basis(&BEZIER_BASIS, p)
    }

    /// Evaluate at `t`.
    pub fn eval(&self, t: f64) -> PointD {
        let t2 = t * t;
        let t3 = t2 * t;
        let f = |c: &[i64; 4]| c[0] as f64 * t3 + c[1] as f64 * t2 + c[2] as f64 * t + c[3] as f64;
        PointD::new(f(&self.cx), f(&self.cy))
    }
}

/// Plot `cubic` at `samples + 1` evenly spaced parameters covering `[0, 1]`.
pub fn draw_cubic<S: PixelSink + ?Sized>(
    sink: &mut S,
    cubic: &Cubic,
    paint: CurvePaint,
    samples: u32,
) {
    let n = samples.max(1);
    for i in 0..=n {
        let t = i as f64 / n as f64;
        let p = cubic.eval(t).round();
        sink.set_pixel(p.x, p.y, paint.at(t));
    }
}

/// Hermite curve from `p1` to `p2` with end tangents `t1`, `t2`.
pub fn draw_hermite<S: PixelSink + ?Sized>(
    sink: &mut S,
    seg: &HermiteSegment,
    paint: CurvePaint,
    opts: CurveOptions,
) {
    draw_cubic(sink, &seg.cubic(), paint, opts.samples);
}

/// Cubic Bezier through the control polygon `p`.
pub fn draw_bezier<S: PixelSink + ?Sized>(
    sink: &mut S,
    p: [PointI; 4],
    paint: CurvePaint,
    opts: CurveOptions,
) {
    draw_cubic(sink, &Cubic::bezier(p), paint, opts.samples);
}

// ============================================================================
// De Casteljau
// ============================================================================

/// Evaluate the Bezier curve of any degree with control points `points` at
/// `t` by repeated linear interpolation of neighbouring points.
///
/// Returns `None` for an empty control polygon.
pub fn de_casteljau(points: &[PointD], t: f64) -> Option<PointD> {
    match points.len() {
        0 => None,
        1 => Some(points[0]),
        _ => {
            let reduced: Vec<PointD> = points.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
            de_casteljau(&reduced, t)
        }
    }
}

/// Plot the de Casteljau curve at `t = i / n` for `i in 0..n`.
pub fn draw_bezier_recursive<S: PixelSink + ?Sized>(
    sink: &mut S,
    points: &[PointD],
    c: Rgb8,
    opts: CurveOptions,
) {
    let n = opts.casteljau_samples.max(1);
    for i in 0..n {
        let t = i as f64 / n as f64;
        if let Some(p) = de_casteljau(points, t) {
            let p = p.round();
            sink.set_pixel(p.x, p.y, c);
        }
    }
}

// ============================================================================
// Cardinal splines
// ============================================================================

/// One Hermite span: endpoints and their tangents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HermiteSegment {
    pub p1: PointI,
    pub t1: PointI,
    pub p2: PointI,
    pub t2: PointI,
}

impl HermiteSegment {
    pub fn cubic(&self) -> Cubic {
        Cubic::hermite(self.p1, self.t1, self.p2, self.t2)
    }
}

/// Tangent at every control point: `tension * (p[i+1] - p[i-1]) / 2` for
/// interior points (truncated to integers), zero at both ends.
pub fn cardinal_tangents(points: &[PointI], tension: f64) -> Vec<PointI> {
    let n = points.len();
    (0..n)
        .map(|i| {
            if i == 0 || i == n - 1 {
                PointI::new(0, 0)
            } else {
                let (a, b) = (points[i - 1], points[i + 1]);
                PointI::new(
                    (tension * (b.x as i64 - a.x as i64) as f64 / 2.0) as i32,
                    (tension * (b.y as i64 - a.y as i64) as f64 / 2.0) as i32,
                )
            }
        })
        .collect()
}

/// Hermite spans of the cardinal spline through `points`.
///
/// Only interior spans are produced: span `i` joins `points[i]` and
/// `points[i + 1]` for `i` in `1..=n-3`. Fewer than four points yield no
/// spans.
pub fn cardinal_segments(points: &[PointI], tension: f64) -> Vec<HermiteSegment> {
    let n = points.len();
    if n < 4 {
        return Vec::new();
    }
    let q = cardinal_tangents(points, tension);
    (1..n - 2)
        .map(|i| HermiteSegment {
            p1: points[i],
            t1: q[i],
            p2: points[i + 1],
            t2: q[i + 1],
        })
        .collect()
}

/// Draw the cardinal spline through `points`. Returns the number of
/// Hermite spans drawn.
pub fn draw_cardinal_spline<S: PixelSink + ?Sized>(
    sink: &mut S,
    points: &[PointI],
    tension: f64,
    c: Rgb8,
    opts: CurveOptions,
) -> usize {
    let segments = cardinal_segments(points, tension);
    for seg in &segments {
        draw_hermite(sink, seg, CurvePaint::Solid(c), opts);
    }
    segments.len()
}

// ============================================================================
// Quadratic
// ============================================================================

/// Second-degree curve with `p1` at `t = 0`, `p2` at `t = 0.5` and `p3` at
/// `t = 1`, colored from `c_start` to `c_end`.
pub fn draw_quadratic_gradient<S: PixelSink + ?Sized>(
    sink: &mut S,
    p: [PointI; 3],
    c_start: Rgb8,
    c_end: Rgb8,
    opts: CurveOptions,
) {
    let [p1, p2, p3] = p;
    let coeffs = |a: i32, b: i32, c: i32| {
        let (a, b, c) = (a as i64, b as i64, c as i64);
        ((2 * c + 2 * a - 4 * b) as f64, (4 * b - 3 * a - c) as f64)
    };
    let (alpha_x, beta_x) = coeffs(p1.x, p2.x, p3.x);
    let (alpha_y, beta_y) = coeffs(p1.y, p2.y, p3.y);
    let n = opts.quadratic_samples.max(1);
    for i in 0..=n {
        let t = i as f64 / n as f64;
        let x = alpha_x * t * t + beta_x * t + p1.x as f64;
        let y = alpha_y * t * t + beta_y * t + p1.y as f64;
        sink.set_pixel(round_half_up(x), round_half_up(y), gradient(c_start, c_end, t));
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

    fn fast() -> CurveOptions {
        CurveOptions {
            samples: 2_000,
            casteljau_samples: 2_000,
            quadratic_samples: 2_000,
        }
    }

    #[test]
    fn test_bezier_coefficients_interpolate_ends() {
        let c = Cubic::bezier([p(10, 10), p(20, 60), p(70, 60), p(80, 10)]);
        assert_eq!(c.cx[3], 10);
        assert_eq!(c.eval(0.0), PointD::new(10.0, 10.0));
        assert_eq!(c.eval(1.0), PointD::new(80.0, 10.0));
        // Symmetric control polygon peaks at t = 0.5: y = (10 + 3*60 + 3*60 + 10) / 8
        assert!((c.eval(0.5).y - 47.5).abs() < 1e-9);
    }

    #[test]
    fn test_hermite_coefficients() {
        let c = Cubic::hermite(p(0, 0), p(30, 0), p(30, 0), p(30, 0));
        // Straight line with tangent equal to the chord: x = 30t.
        assert_eq!(c.cx, [0, 0, 30, 0]);
        assert_eq!(c.cy, [0, 0, 0, 0]);
    }

    #[test]
    fn test_de_casteljau_matches_matrix_bezier() {
        let ctrl = [p(5, 5), p(15, 80), p(60, -20), p(90, 40)];
        let cubic = Cubic::bezier(ctrl);
        let pts: Vec<PointD> = ctrl.iter().map(|q| q.to_f64()).collect();
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let a = de_casteljau(&pts, t).unwrap();
            let b = cubic.eval(t);
            assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_de_casteljau_degrees() {
        assert_eq!(de_casteljau(&[], 0.3), None);
        let one = [PointD::new(3.0, 4.0)];
        assert_eq!(de_casteljau(&one, 0.7), Some(PointD::new(3.0, 4.0)));
        let line = [PointD::new(0.0, 0.0), PointD::new(10.0, 20.0)];
        assert_eq!(de_casteljau(&line, 0.25), Some(PointD::new(2.5, 5.0)));
        // Degree five still hits both ends.
        let quintic: Vec<PointD> = (0..6)
            .map(|i| PointD::new(i as f64 * 10.0, (i * i) as f64))
            .collect();
        assert_eq!(de_casteljau(&quintic, 0.0), Some(quintic[0]));
        let end = de_casteljau(&quintic, 1.0).unwrap();
        assert!((end.x - 50.0).abs() < 1e-9 && (end.y - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_bezier_hits_end_points() {
        let mut buf = PixelBuffer::new(100, 100, Rgb8::BLACK);
        draw_bezier(
            &mut buf,
            [p(10, 10), p(20, 60), p(70, 60), p(80, 10)],
            CurvePaint::Solid(Rgb8::RED),
            fast(),
        );
        assert_eq!(buf.get_pixel(10, 10), Some(Rgb8::RED));
        assert_eq!(buf.get_pixel(80, 10), Some(Rgb8::RED));
        assert_eq!(buf.get_pixel(45, 48), Some(Rgb8::RED));
    }

    #[test]
    fn test_gradient_paint_ends() {
        let mut buf = PixelBuffer::new(50, 10, Rgb8::BLACK);
        let seg = HermiteSegment {
            p1: p(0, 5),
            t1: p(40, 0),
            p2: p(40, 5),
            t2: p(40, 0),
        };
        draw_hermite(
            &mut buf,
            &seg,
            CurvePaint::Gradient {
                start: Rgb8::RED,
                end: Rgb8::BLUE,
            },
            // x = 40t, one sample per column
            CurveOptions { samples: 40, ..fast() },
        );
        assert_eq!(buf.get_pixel(0, 5), Some(Rgb8::RED));
        assert_eq!(buf.get_pixel(20, 5), Some(Rgb8::new(128, 0, 128)));
        assert_eq!(buf.get_pixel(40, 5), Some(Rgb8::BLUE));
    }

    #[test]
    fn test_four_stop_paint() {
        let stops = [Rgb8::RED, Rgb8::GREEN, Rgb8::BLUE, Rgb8::WHITE];
        let paint = CurvePaint::FourStop(stops);
        assert_eq!(paint.at(0.0), Rgb8::RED);
        assert_eq!(paint.at(1.0 / 3.0), Rgb8::GREEN);
        assert_eq!(paint.at(2.0 / 3.0), Rgb8::BLUE);
        assert_eq!(paint.at(1.0), Rgb8::WHITE);
    }

    #[test]
    fn test_cardinal_segment_counts() {
        let pts: Vec<PointI> = (0..6).map(|i| p(i * 20, (i % 2) * 30)).collect();
        assert!(cardinal_segments(&pts[..3], 1.0).is_empty());
        let four = cardinal_segments(&pts[..4], 1.0);
        assert_eq!(four.len(), 1);
        assert_eq!(four[0].p1, pts[1]);
        assert_eq!(four[0].p2, pts[2]);
        assert_eq!(cardinal_segments(&pts[..5], 1.0).len(), 2);
        assert_eq!(cardinal_segments(&pts, 1.0).len(), 3);
    }

    #[test]
    fn test_cardinal_tangents() {
        let pts = [p(0, 0), p(10, 0), p(20, 10), p(31, 10)];
        let q = cardinal_tangents(&pts, 1.0);
        assert_eq!(q[0], p(0, 0));
        assert_eq!(q[1], p(10, 5));
        assert_eq!(q[2], p(10, 5));
        assert_eq!(q[3], p(0, 0));
        let q = cardinal_tangents(&pts, 0.5);
        assert_eq!(q[2], p(5, 2));
    }

    #[test]
    fn test_cardinal_spline_draw() {
        let mut buf = PixelBuffer::new(100, 60, Rgb8::BLACK);
        let pts = [p(0, 0), p(10, 30), p(50, 10), p(90, 50)];
        let n = draw_cardinal_spline(&mut buf, &pts, 1.0, Rgb8::GREEN, fast());
        assert_eq!(n, 1);
        assert_eq!(buf.get_pixel(10, 30), Some(Rgb8::GREEN));
        assert_eq!(buf.get_pixel(50, 10), Some(Rgb8::GREEN));
        // The outer control points are not interpolated.
        assert_eq!(buf.get_pixel(0, 0), Some(Rgb8::BLACK));
        assert_eq!(buf.get_pixel(90, 50), Some(Rgb8::BLACK));

        let mut empty = PixelBuffer::new(10, 10, Rgb8::BLACK);
        assert_eq!(draw_cardinal_spline(&mut empty, &pts[..3], 1.0, Rgb8::GREEN, fast()), 0);
        assert_eq!(empty.count(Rgb8::GREEN), 0);
    }

    #[test]
    fn test_quadratic_passes_through_all_three_points() {
        let mut buf = PixelBuffer::new(60, 60, Rgb8::BLACK);
        let arch = [p(5, 50), p(30, 10), p(55, 50)];
        draw_quadratic_gradient(&mut buf, arch, Rgb8::RED, Rgb8::RED, fast());
        for (x, y) in [(5, 50), (30, 10), (55, 50)] {
            assert_eq!(buf.get_pixel(x, y), Some(Rgb8::RED));
        }
    }

    #[test]
    fn test_recursive_bezier_draws() {
        let mut buf = PixelBuffer::new(60, 60, Rgb8::BLACK);
        let pts = [PointD::new(5.0, 5.0), PointD::new(30.0, 55.0), PointD::new(55.0, 5.0)];
        draw_bezier_recursive(&mut buf, &pts, Rgb8::WHITE, fast());
        assert_eq!(buf.get_pixel(5, 5), Some(Rgb8::WHITE));
        // Apex of the quadratic at t = 0.5 is y = 30.
        assert_eq!(buf.get_pixel(30, 30), Some(Rgb8::WHITE));
    }

    #[test]
    fn test_extreme_control_points() {
        let ends = [PointI::new(i32::MIN, 0), PointI::new(0, 0), PointI::new(i32::MAX, 0)];
        let q = cardinal_tangents(&ends, 1.0);
        assert_eq!(q[1], PointI::new(i32::MAX, 0));

        let mut buf = PixelBuffer::new(10, 10, Rgb8::BLACK);
        let opts = CurveOptions {
            quadratic_samples: 4000,
            ..CurveOptions::default()
        };
        let p = [
            PointI::new(-2_000_000_000, 5),
            PointI::new(0, 5),
            PointI::new(2_000_000_000, 5),
        ];
        draw_quadratic_gradient(&mut buf, p, Rgb8::RED, Rgb8::BLUE, opts);
        assert_eq!(buf.count(Rgb8::BLACK), 99);
        assert_eq!(buf.get_pixel(0, 5), Some(Rgb8::new(128, 0, 128)));
    }
}
