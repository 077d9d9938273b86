use super::*;
use nalgebra::{vector, Vector2};

fn square4() -> Polygon {
    Polygon::new(vec![
        vector![0.0, 0.0],
        vector![0.0, 4.0],
        vector![4.0, 4.0],
        vector![4.0, 0.0],
    ])
}

// Concave fixture: full width below y=1, only x in [0,1] above it.
fn l_shape() -> Polygon {
    Polygon::new(vec![
        vector![0.0, 0.0],
        vector![0.0, 3.0],
        vector![1.0, 3.0],
        vector![1.0, 1.0],
        vector![3.0, 1.0],
        vector![3.0, 0.0],
    ])
}

#[test]
fn distance_basics() {
    let o = vector![0.0, 0.0];
    assert!((distance(o, vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
    assert!(distance(o, o).abs() < 1e-12);
    assert!((distance(vector![3.0, 4.0], o) - 5.0).abs() < 1e-12);
    assert!((distance(o, vector![-1.0, 0.0]) - 1.0).abs() < 1e-12);
    assert!((distance(vector![1.0, 1.0], vector![1.0, 5.0]) - 4.0).abs() < 1e-12);
    assert!((distance(vector![1.0, 1.0], vector![5.0, 1.0]) - 4.0).abs() < 1e-12);
}

#[test]
fn contains_square_interior_and_exterior() {
    let sq = square4();
    assert!(sq.contains(vector![2.0, 2.0]));
    assert!(sq.contains(vector![1.0, 3.0]));
    assert!(!sq.contains(vector![5.0, 2.0]));
    assert!(!sq.contains(vector![2.0, 5.0]));
    assert!(!sq.contains(vector![-1.0, 2.0]));
    assert!(!sq.contains(vector![2.0, -1.0]));
    assert!(!sq.contains(vector![100.0, 100.0]));
}

#[test]
fn contains_square_boundary_and_vertices() {
    let sq = square4();
    assert!(sq.contains(vector![0.0, 2.0])); // left edge
    assert!(sq.contains(vector![2.0, 0.0])); // bottom edge
    assert!(sq.contains(vector![4.0, 2.0])); // right edge
    assert!(sq.contains(vector![2.0, 4.0])); // top edge
    assert!(sq.contains(vector![0.0, 0.0])); // corner
    assert!(sq.contains(vector![4.0, 4.0])); // corner
}

#[test]
fn contains_concave_l_shape() {
    let l = l_shape();
    assert!(l.contains(vector![0.5, 2.0])); // upper arm
    assert!(l.contains(vector![2.0, 0.5])); // lower arm
    assert!(l.contains(vector![0.5, 0.5])); // corner block
    assert!(!l.contains(vector![1.5, 1.5])); // bounding-box notch
    assert!(l.contains(vector![1.0, 2.0])); // inner vertical edge
    assert!(l.contains(vector![2.0, 1.0])); // inner horizontal edge
}

#[test]
fn contains_degenerate_loops() {
    let p = vector![0.0, 0.0];
    assert!(!Polygon::default().contains(p));
    assert!(!Polygon::new(vec![vector![0.0, 0.0]]).contains(p));
    assert!(!Polygon::new(vec![vector![-1.0, -1.0], vector![1.0, 1.0]]).contains(p));
}

#[test]
fn edges_close_the_loop() {
    let sq = square4();
    let edges: Vec<_> = sq.edges().collect();
    assert_eq!(edges.len(), 4);
    assert!((edges[3].1 - sq.vertices()[0]).norm() < 1e-12);
    assert_eq!(Polygon::default().edges().count(), 0);
}

#[test]
fn bounds_and_rect_interpretation() {
    let cfg = GeomCfg::default();
    let sq = square4();
    let b = sq.bounds().unwrap();
    assert!((b.width() - 4.0).abs() < 1e-12);
    assert!((b.height() - 4.0).abs() < 1e-12);
    assert!((b.mid_y() - 2.0).abs() < 1e-12);
    assert!(sq.as_aligned_rect(cfg).is_some());
    assert!(l_shape().as_aligned_rect(cfg).is_none());
    assert!(Polygon::default().bounds().is_none());

    // A diagonal edge disqualifies the loop.
    let tilted = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 2.0],
        vector![3.0, 3.0],
        vector![2.0, 1.0],
    ]);
    assert!(tilted.as_aligned_rect(cfg).is_none());

    // Axis-aligned edges that do not alternate (zero-area back-and-forth).
    let folded = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![0.0, 0.0],
        vector![0.0, 1.0],
    ]);
    assert!(folded.as_aligned_rect(cfg).is_none());
}

#[test]
fn scanline_spans_follow_the_outline() {
    let cfg = GeomCfg::default();
    let sq = square4();
    let spans = sq.scanline_spans(2.0, cfg);
    assert_eq!(spans.len(), 1);
    assert!(spans[0].0.abs() < 1e-12 && (spans[0].1 - 4.0).abs() < 1e-12);

    let l = l_shape();
    let low = l.scanline_spans(0.5, cfg);
    assert_eq!(low.len(), 1);
    assert!((low[0].1 - 3.0).abs() < 1e-12);
    let high = l.scanline_spans(2.0, cfg);
    assert_eq!(high.len(), 1);
    assert!((high[0].1 - 1.0).abs() < 1e-12);

    // Above and below the outline there is nothing to hit.
    assert!(sq.scanline_hits(5.0, cfg).is_empty());
    assert!(sq.scanline_hits(-1.0, cfg).is_empty());
}

mod props {
    use super::*;
    use crate::geom2::rand::{draw_aligned_rect, RectCfg, ReplayToken};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_laws(
            ax in -1000.0f64..1000.0,
            ay in -1000.0f64..1000.0,
            bx in -1000.0f64..1000.0,
            by in -1000.0f64..1000.0,
        ) {
            let a = Vector2::new(ax, ay);
            let b = Vector2::new(bx, by);
            prop_assert!(distance(a, b) >= 0.0);
            prop_assert!((distance(a, b) - distance(b, a)).abs() < 1e-9);
            prop_assert!(distance(a, a).abs() < 1e-12);
        }

        #[test]
        fn sampled_rects_classify_center_and_outside(
            seed in 0u64..(1u64 << 32),
            index in 0u64..1024,
        ) {
            let tok = ReplayToken { seed, index };
            let poly = draw_aligned_rect(RectCfg::default(), tok);
            let b = poly.bounds().unwrap();
            let center = (b.min + b.max) / 2.0;
            prop_assert!(poly.contains(center), "center escaped, token {tok:?}");
            let probe = Vector2::new(b.max.x + 1.0, center.y);
            prop_assert!(!poly.contains(probe), "outside probe classified inside, token {tok:?}");
        }
    }
}
