//! Properties of line and polygon clipping over random input.

use proptest::prelude::*;
use scanpaint::active_edge_table::clip_fill;
use scanpaint::clip::{clip_line, sutherland_hodgman, ClipWindow};
use scanpaint::{PixelBuffer, PointI, Rgb8};

fn point(lo: i32, hi: i32) -> impl Strategy<Value = PointI> {
    (lo..hi, lo..hi).prop_map(|(x, y)| PointI::new(x, y))
}

fn window() -> ClipWindow {
    ClipWindow::new(0, 0, 100, 100)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every vertex of a clipped polygon lies inside the window.
    #[test]
    fn sutherland_hodgman_contained(points in prop::collection::vec(point(-80, 180), 3..10)) {
        let w = window();
        let out = sutherland_hodgman(&points, &w);
        for q in &out {
            prop_assert!(w.contains(*q), "{:?} outside", q);
        }
    }

    /// A polygon already inside the window comes back unchanged.
    #[test]
    fn sutherland_hodgman_inside_unchanged(points in prop::collection::vec(point(0, 101), 3..10)) {
        let w = window();
        prop_assert_eq!(sutherland_hodgman(&points, &w), points);
    }

    /// A polygon right of the window clips to nothing.
    #[test]
    fn sutherland_hodgman_outside_empty(points in prop::collection::vec(point(101, 300), 3..10)) {
        prop_assert!(sutherland_hodgman(&points, &window()).is_empty());
    }

    /// Segments inside are accepted as-is; segments wholly past one
    /// boundary are rejected; anything accepted lies in the window.
    #[test]
    fn cohen_sutherland(p1 in point(-150, 250), p2 in point(-150, 250)) {
        let w = window();
        let inside = w.contains(p1) && w.contains(p2);
        let same_side = (p1.x < 0 && p2.x < 0)
            || (p1.x > 100 && p2.x > 100)
            || (p1.y < 0 && p2.y < 0)
            || (p1.y > 100 && p2.y > 100);
        let clipped = clip_line(&w, p1, p2);
        if inside {
            prop_assert_eq!(clipped, Some((p1, p2)));
        }
        if same_side {
            prop_assert_eq!(clipped, None);
        }
        if let Some((a, b)) = clipped {
            prop_assert!(w.contains(a) && w.contains(b));
        }
    }

    /// Clip-fill never paints outside the window.
    #[test]
    fn clip_fill_stays_in_window(points in prop::collection::vec(point(-40, 160), 3..8)) {
        let w = ClipWindow::new(20, 20, 80, 80);
        let mut buf = PixelBuffer::new(120, 120, Rgb8::BLACK);
        clip_fill(&mut buf, &w, &points, Rgb8::GREEN).unwrap();
        for (x, y) in buf.positions_of(Rgb8::GREEN) {
            prop_assert!(w.contains(PointI::new(x, y)), "({}, {})", x, y);
        }
    }
}
