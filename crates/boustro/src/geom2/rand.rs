//! Random test regions (replayable rectangles and convex rings).
//!
//! Purpose
//! - Deterministic samplers for benches and property tests: an aligned
//!   rectangle generator for planner inputs and a convex ring generator for
//!   containment queries. Determinism uses a replay token `(seed, index)`
//!   mixed into a single RNG, so any failing draw is reproducible from its
//!   token alone.
//!
//! Code cross-refs: `Polygon`, `Rect`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Aligned-rectangle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RectCfg {
    /// Side-length range, both axes.
    pub side: (f64, f64),
    /// Offset range for the min corner, per axis.
    pub offset: (f64, f64),
    /// Randomize starting corner and winding?
    pub random_order: bool,
}
impl Default for RectCfg {
    fn default() -> Self {
        Self {
            side: (0.5, 20.0),
            offset: (-50.0, 50.0),
            random_order: true,
        }
    }
}

/// Draw an axis-aligned rectangle as a 4-vertex loop.
///
/// The loop always satisfies `Polygon::as_aligned_rect`; starting corner
/// and winding vary when `random_order` is set.
pub fn draw_aligned_rect(cfg: RectCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = cfg.side;
    let lo = lo.max(1e-6);
    let hi = hi.max(lo);
    let w = rng.gen_range(lo..=hi);
    let h = rng.gen_range(lo..=hi);
    let x0 = rng.gen_range(cfg.offset.0..=cfg.offset.1);
    let y0 = rng.gen_range(cfg.offset.0..=cfg.offset.1);
    let mut corners = vec![
        Vector2::new(x0, y0),
        Vector2::new(x0, y0 + h),
        Vector2::new(x0 + w, y0 + h),
        Vector2::new(x0 + w, y0),
    ];
    if cfg.random_order {
        let start = rng.gen_range(0..4usize);
        corners.rotate_left(start);
        if rng.gen::<bool>() {
            corners.reverse();
        }
    }
    Polygon::new(corners)
}

/// Draw a convex ring of `n` vertices around `center` (containment tests).
pub fn draw_ring(n: usize, center: Vector2<f64>, radius: f64, tok: ReplayToken) -> Polygon {
    let n = n.max(3);
    let mut rng = tok.to_std_rng();
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let pts = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * std::f64::consts::TAU / (n as f64);
            center + Vector2::new(th.cos(), th.sin()) * radius
        })
        .collect();
    Polygon::new(pts)
}
