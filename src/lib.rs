//! # scanpaint
//!
//! Classical scan-conversion, polygon fill and polygon clipping over an
//! abstract pixel surface.
//!
//! Every algorithm draws through the [`PixelSink`] trait, which only has to
//! store and return single pixels. [`PixelBuffer`] is the in-memory
//! implementation.
//!
//! - Lines: Bresenham, recursive midpoint bisection, gradient DDA
//! - Circles: direct, polar, iterative polar, midpoint, integer midpoint
//! - Ellipses: equation, two-region midpoint, polar
//! - Curves: Hermite and Bezier via a 4x4 basis matrix, de Casteljau,
//!   cardinal splines, gradient quadratics
//! - Fills: recursive and queue flood fill, convex and non-convex scanline
//!   fill, barycentric triangle fill
//! - Clipping: Cohen-Sutherland lines, Sutherland-Hodgman polygons, and a
//!   clip-then-fill pass over an active edge table
//!
//! ## Coordinates
//!
//! Pixel coordinates are `i32` and may lie outside the surface; the sink
//! drops such writes. Fills touch only the rows `[0, height)` of the sink.
//!
//! ## Logging
//!
//! Fill and clip operations report through the [`log`] facade at `debug`
//! level (per-row detail at `trace`). The crate never installs a logger.

// Foundation
pub mod basics;
pub mod color;
pub mod error;
pub mod geometry;
pub mod pixel_sink;

// Primitive rasterizers
pub mod circle;
pub mod curves;
pub mod ellipse;
pub mod line;

// Fills and clipping
pub mod active_edge_table;
pub mod clip;
pub mod flood_fill;
pub mod scanline_fill;

// Composites
pub mod patterns;
pub mod shape;

pub use basics::{PointD, PointI};
pub use clip::ClipWindow;
pub use color::Rgb8;
pub use error::{RasterError, Result};
pub use pixel_sink::{PixelBuffer, PixelSink};
pub use shape::Shape;
