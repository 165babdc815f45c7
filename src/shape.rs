//! Shape records and render dispatch.
//!
//! A [`Shape`] is the plain-data description of one drawing operation:
//! its geometry, its color and the algorithm chosen for it. A layer store
//! outside this crate can keep a `Vec<Shape>` and replay it onto any
//! [`PixelSink`].

use log::debug;

use crate::active_edge_table::clip_fill;
use crate::basics::PointI;
use crate::circle::CircleAlgorithm;
use crate::clip::{clip_line, draw_polygon_outline, sutherland_hodgman, ClipWindow};
use crate::color::Rgb8;
use crate::curves::{
    draw_bezier, draw_cardinal_spline, draw_hermite, draw_quadratic_gradient, CurveOptions,
    CurvePaint, HermiteSegment,
};
use crate::ellipse::EllipseAlgorithm;
use crate::error::Result;
use crate::flood_fill::FloodAlgorithm;
use crate::line::{draw_line_gradient, LineAlgorithm};
use crate::patterns::{
    fill_quarter_with_circles, fill_quarter_with_lines, fill_rect_with_bezier_waves,
    fill_square_with_hermite_waves, pizza_circle, Quarter,
};
use crate::pixel_sink::PixelSink;
use crate::scanline_fill::{fill_triangle_barycentric, FillAlgorithm};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Texture of a quarter-circle fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuarterStyle {
    #[default]
    Circles,
    Lines,
}

/// One drawable record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    Point {
        at: PointI,
        color: Rgb8,
    },
    Line {
        p1: PointI,
        p2: PointI,
        color: Rgb8,
        algorithm: LineAlgorithm,
    },
    GradientLine {
        p1: PointI,
        p2: PointI,
        start: Rgb8,
        end: Rgb8,
    },
    Circle {
        center: PointI,
        radius: i32,
        color: Rgb8,
        algorithm: CircleAlgorithm,
    },
    Pizza {
        center: PointI,
        radius: i32,
        color: Rgb8,
    },
    Ellipse {
        center: PointI,
        a: i32,
        b: i32,
        color: Rgb8,
        algorithm: EllipseAlgorithm,
    },
    /// Axis-aligned outline between two opposite corners.
    Rectangle {
        corner1: PointI,
        corner2: PointI,
        color: Rgb8,
    },
    /// Closed polygon, outlined when `fill` is `None`.
    Polygon {
        points: Vec<PointI>,
        color: Rgb8,
        fill: Option<FillAlgorithm>,
    },
    Triangle {
        vertices: [PointI; 3],
        color: Rgb8,
    },
    FloodFill {
        seed: PointI,
        color: Rgb8,
        algorithm: FloodAlgorithm,
    },
    /// Polygon clipped to `window` and filled with the active edge table.
    ClipFill {
        points: Vec<PointI>,
        window: ClipWindow,
        color: Rgb8,
    },
    QuarterFill {
        center: PointI,
        radius: i32,
        quarter: Quarter,
        style: QuarterStyle,
        color: Rgb8,
    },
    BezierWaves {
        corner1: PointI,
        corner2: PointI,
        color: Rgb8,
    },
    HermiteWaves {
        top_left: PointI,
        size: i32,
        color: Rgb8,
    },
    Bezier {
        control: [PointI; 4],
        paint: CurvePaint,
    },
    Hermite {
        segment: HermiteSegment,
        paint: CurvePaint,
    },
    Quadratic {
        points: [PointI; 3],
        start: Rgb8,
        end: Rgb8,
    },
    CardinalSpline {
        points: Vec<PointI>,
        tension: f64,
        color: Rgb8,
    },
}

impl Shape {
    /// Short tag naming the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point { .. } => "point",
            Shape::Line { .. } => "line",
            Shape::GradientLine { .. } => "gradient-line",
            Shape::Circle { .. } => "circle",
            Shape::Pizza { .. } => "pizza",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Polygon { .. } => "polygon",
            Shape::Triangle { .. } => "triangle",
            Shape::FloodFill { .. } => "flood-fill",
            Shape::ClipFill { .. } => "clip-fill",
            Shape::QuarterFill { .. } => "quarter-fill",
            Shape::BezierWaves { .. } => "bezier-waves",
            Shape::HermiteWaves { .. } => "hermite-waves",
            Shape::Bezier { .. } => "bezier",
            Shape::Hermite { .. } => "hermite",
            Shape::Quadratic { .. } => "quadratic",
            Shape::CardinalSpline { .. } => "cardinal-spline",
        }
    }

    /// Draw with the default curve resolution.
    pub fn render<S: PixelSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        self.render_with(sink, CurveOptions::default())
    }

    /// Draw onto `sink`. Fails only for geometry the chosen algorithm
    /// rejects, in which case nothing has been drawn.
    pub fn render_with<S: PixelSink + ?Sized>(
        &self,
        sink: &mut S,
        opts: CurveOptions,
    ) -> Result<()> {
        debug!("render {}", self.kind());
        match self {
            Shape::Point { at, color } => sink.set_pixel(at.x, at.y, *color),
            Shape::Line {
                p1,
                p2,
                color,
                algorithm,
            } => algorithm.draw(sink, *p1, *p2, *color),
            Shape::GradientLine { p1, p2, start, end } => {
                draw_line_gradient(sink, *p1, *p2, *start, *end)
            }
            Shape::Circle {
                center,
                radius,
                color,
                algorithm,
            } => algorithm.draw(sink, *center, *radius, *color)?,
            Shape::Pizza { center, radius, color } => pizza_circle(sink, *center, *radius, *color)?,
            Shape::Ellipse {
                center,
                a,
                b,
                color,
                algorithm,
            } => algorithm.draw(sink, *center, *a, *b, *color),
            Shape::Rectangle { corner1, corner2, color } => {
                let corners = ClipWindow::new(corner1.x, corner1.y, corner2.x, corner2.y).corners();
                draw_polygon_outline(sink, &corners, *color);
            }
            Shape::Polygon { points, color, fill } => match fill {
                Some(alg) => {
                    alg.fill(sink, points, *color)?;
                }
                None => draw_polygon_outline(sink, points, *color),
            },
            Shape::Triangle { vertices, color } => {
                fill_triangle_barycentric(sink, *vertices, *color)
            }
            Shape::FloodFill { seed, color, algorithm } => {
                algorithm.fill(sink, *seed, *color);
            }
            Shape::ClipFill { points, window, color } => {
                clip_fill(sink, window, points, *color)?;
            }
            Shape::QuarterFill {
                center,
                radius,
                quarter,
                style,
                color,
            } => match style {
                QuarterStyle::Circles => {
                    fill_quarter_with_circles(sink, *center, *radius, *quarter, *color)?
                }
                QuarterStyle::Lines => {
                    fill_quarter_with_lines(sink, *center, *radius, *quarter, *color)?
                }
            },
            Shape::BezierWaves { corner1, corner2, color } => {
                fill_rect_with_bezier_waves(sink, *corner1, *corner2, *color, opts)
            }
            Shape::HermiteWaves { top_left, size, color } => {
                fill_square_with_hermite_waves(sink, *top_left, *size, *color, opts)
            }
            Shape::Bezier { control, paint } => draw_bezier(sink, *control, *paint, opts),
            Shape::Hermite { segment, paint } => draw_hermite(sink, segment, *paint, opts),
            Shape::Quadratic { points, start, end } => {
                draw_quadratic_gradient(sink, *points, *start, *end, opts)
            }
            Shape::CardinalSpline { points, tension, color } => {
                draw_cardinal_spline(sink, points, *tension, *color, opts);
            }
        }
        Ok(())
    }

    /// The part of this shape inside `w`.
    ///
    /// Lines are clipped with Cohen-Sutherland, polygons with
    /// Sutherland-Hodgman and points by an inside test; `None` means
    /// nothing is left. Every other shape is returned unchanged.
    pub fn clip(&self, w: &ClipWindow) -> Option<Shape> {
        match self {
            Shape::Point { at, .. } => w.contains(*at).then(|| self.clone()),
            Shape::Line {
                p1,
                p2,
                color,
                algorithm,
            } => clip_line(w, *p1, *p2).map(|(a, b)| Shape::Line {
                p1: a,
                p2: b,
                color: *color,
                algorithm: *algorithm,
            }),
            Shape::Polygon { points, color, fill } => {
                let clipped = sutherland_hodgman(points, w);
                (clipped.len() >= 3).then(|| Shape::Polygon {
                    points: clipped,
                    color: *color,
                    fill: *fill,
                })
            }
            _ => Some(self.clone()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
