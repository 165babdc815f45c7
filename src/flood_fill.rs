//! 4-connected flood fill.
//!
//! Both variants paint every pixel reachable from the seed that does not
//! already hold the fill color. The only stopping condition is the fill
//! color itself (or the edge of the surface, where `get_pixel` returns
//! `None`), so filling is idempotent: a second fill with the same color
//! from the same seed paints nothing.

use std::collections::VecDeque;

use log::debug;

use crate::basics::PointI;
use crate::color::Rgb8;
use crate::pixel_sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Neighbour visiting order: right, down, left, up.
const NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

#[inline]
fn needs_paint<S: PixelSink + ?Sized>(sink: &S, x: i32, y: i32, c: Rgb8) -> bool {
    matches!(sink.get_pixel(x, y), Some(cur) if cur != c)
}

/// Depth-first flood fill.
///
/// Visits neighbours in the order `+x, +y, -x, -y` like the textbook
/// recursive version, but keeps the pending work on a heap stack so a
/// large region cannot overflow the call stack. Returns the number of
/// pixels painted.
pub fn flood_fill_recursive<S: PixelSink + ?Sized>(sink: &mut S, seed: PointI, c: Rgb8) -> usize {
    let mut painted = 0usize;
    let mut stack = vec![(seed.x, seed.y)];
    while let Some((x, y)) = stack.pop() {
        if !needs_paint(sink, x, y, c) {
            continue;
        }
        sink.set_pixel(x, y, c);
        painted += 1;
        // Reversed so +x is popped first.
        for &(dx, dy) in NEIGHBOURS.iter().rev() {
            stack.push((x + dx, y + dy));
        }
    }
    debug!("flood_fill_recursive: seed=({}, {}) painted={}", seed.x, seed.y, painted);
    painted
}

/// Breadth-first flood fill over a FIFO queue.
///
/// Returns the number of pixels painted; the final surface is identical to
/// [`flood_fill_recursive`] from the same seed.
pub fn flood_fill_queue<S: PixelSink + ?Sized>(sink: &mut S, seed: PointI, c: Rgb8) -> usize {
    let mut painted = 0usize;
    let mut queue = VecDeque::new();
    queue.push_back((seed.x, seed.y));
    while let Some((x, y)) = queue.pop_front() {
        if !needs_paint(sink, x, y, c) {
            continue;
        }
        sink.set_pixel(x, y, c);
        painted += 1;
        for (dx, dy) in NEIGHBOURS {
            if needs_paint(sink, x + dx, y + dy, c) {
                queue.push_back((x + dx, y + dy));
            }
        }
    }
    debug!("flood_fill_queue: seed=({}, {}) painted={}", seed.x, seed.y, painted);
    painted
}

/// Selectable flood fill traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloodAlgorithm {
    Recursive,
    #[default]
    Queue,
}

impl FloodAlgorithm {
    pub fn fill<S: PixelSink + ?Sized>(self, sink: &mut S, seed: PointI, c: Rgb8) -> usize {
        match self {
            FloodAlgorithm::Recursive => flood_fill_recursive(sink, seed, c),
            FloodAlgorithm::Queue => flood_fill_queue(sink, seed, c),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
