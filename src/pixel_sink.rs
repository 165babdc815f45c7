//! Pixel sink: the surface every algorithm in this crate draws onto.
//!
//! The core never owns a window or device context. It talks to a
//! [`PixelSink`], which only has to store and return single pixels and
//! report its extent. [`PixelBuffer`] is the in-memory implementation used
//! by the tests and benchmarks, and is a reasonable backing store for a
//! host application that blits it to screen.

use crate::color::Rgb8;

// ============================================================================
// PixelSink
// ============================================================================

/// Write/read capability over a bounded pixel surface.
///
/// Coordinates outside `[0, width) x [0, height)` are legal arguments:
/// writes there are silently dropped and reads return `None`.
pub trait PixelSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Write one pixel.
    fn set_pixel(&mut self, x: i32, y: i32, c: Rgb8);

    /// Read one pixel, or `None` outside the surface.
    fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb8>;

    /// Write the horizontal run `x1..=x2` (either order) on row `y`.
    fn hline(&mut self, x1: i32, x2: i32, y: i32, c: Rgb8) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for x in lo..=hi {
            self.set_pixel(x, y, c);
        }
    }

    /// True if `(x, y)` addresses a pixel of the surface.
    #[inline]
    fn inbox(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width() as i64 && (y as i64) < self.height() as i64
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, c: Rgb8) {
        (**self).set_pixel(x, y, c);
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb8> {
        (**self).get_pixel(x, y)
    }

    fn hline(&mut self, x1: i32, x2: i32, y: i32, c: Rgb8) {
        (**self).hline(x1, x2, y, c);
    }
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Owned row-major RGB surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl PixelBuffer {
    /// Create a `width x height` surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb8) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    /// Reset every pixel to `c`.
    pub fn clear(&mut self, c: Rgb8) {
        self.pixels.fill(c);
    }

    /// Number of pixels currently equal to `c`.
    pub fn count(&self, c: Rgb8) -> usize {
        self.pixels.iter().filter(|&&p| p == c).count()
    }

    /// Row `y` as a slice. Panics if `y` is out of range.
    pub fn row(&self, y: u32) -> &[Rgb8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Coordinates of every pixel equal to `c`, in row-major order.
    pub fn positions_of(&self, c: Rgb8) -> Vec<(i32, i32)> {
        let w = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, &p)| p == c)
            .map(|(i, _)| ((i % w) as i32, (i / w) as i32))
            .collect()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.inbox(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl PixelSink for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, c: Rgb8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = c;
        }
    }

    #[inline]
    fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    fn hline(&mut self, x1: i32, x2: i32, y: i32, c: Rgb8) {
        if y < 0 || y as i64 >= self.height as i64 {
            return;
        }
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let lo = lo.max(0);
        let hi = hi.min(self.width as i32 - 1);
        if lo > hi {
            return;
        }
        let start = y as usize * self.width as usize;
        self.pixels[start + lo as usize..=start + hi as usize].fill(c);
    }
}

// ============================================================================
// Tests
// ============================================================================
