//! Simple polygons as ordered vertex loops (V-representation).
//!
//! Purpose
//! - Provide the single region type consumed by the sweep planner: an
//!   ordered vertex loop with an implicit closing edge, read-only after
//!   construction.
//!
//! Why this design
//! - Containment and sweep generation both reduce to one primitive: where
//!   do the edges cross a horizontal line? Keeping edges as a lazy iterator
//!   (closing edge included) makes that primitive the only place that knows
//!   about the wrap-around.
//!
//! Code cross-refs: `types::{GeomCfg, Rect}`, `crate::planner::sweep`.

use nalgebra::Vector2;

use super::types::{GeomCfg, Rect};

/// Simple polygon: ordered vertices, implicit edge from last back to first.
///
/// Invariants:
/// - Vertices are stored in traversal order; no closing vertex is stored.
/// - Loops with fewer than 3 vertices are degenerate: `contains` reports
///   outside for every query and the planner emits an empty path.
/// - Never mutated after construction; planners borrow it read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Degenerate loops cannot bound area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.verts.len() < 3
    }

    /// Edges in traversal order, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
    }

    /// Axis-aligned bounding extent; `None` for an empty loop.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.verts.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.verts[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Some(Rect::new(min, max))
    }

    /// Point-in-polygon classification (crossing-number rule, boundary kept).
    ///
    /// Policy:
    /// - Degenerate loops (< 3 vertices) classify everything as outside.
    /// - A query exactly on a horizontal or vertical edge segment counts as
    ///   inside and short-circuits before the parity scan.
    /// - Otherwise a rightward ray from `p` toggles parity at every edge
    ///   with one endpoint strictly below `p.y` and the other at-or-above,
    ///   whose interpolated crossing lies strictly right of `p.x`. The
    ///   strict/at-or-above split is what keeps a ray through a vertex from
    ///   counting both incident edges.
    ///
    /// Numerics:
    /// - Horizontal edges can never satisfy the strict-crossing rule, so
    ///   the interpolation divisor is nonzero whenever it is evaluated.
    /// - A query exactly on a *diagonal* edge has no short-circuit and
    ///   falls through to the parity scan; its answer depends on rounding.
    ///   Known gap: callers needing exact diagonal-boundary hits must
    ///   pre-test with a segment-distance tolerance.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            // On a horizontal edge segment?
            if a.y == b.y && a.y == p.y && p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) {
                return true;
            }
            // On a vertical edge segment?
            if a.x == b.x && a.x == p.x && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y) {
                return true;
            }
            if (a.y < p.y && b.y >= p.y) || (b.y < p.y && a.y >= p.y) {
                let x_hit = (p.y - a.y) * (b.x - a.x) / (b.y - a.y) + a.x;
                if x_hit > p.x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Sorted x-coordinates where edges cross the horizontal line at `y`.
    ///
    /// Same strict-crossing rule as `contains`, so horizontal edges never
    /// contribute and the divisor stays nonzero. Hits closer than
    /// `cfg.eps_hit` coalesce: a line near a vertex can graze both incident
    /// edges, and a doubled hit would open a phantom zero-width span.
    pub fn scanline_hits(&self, y: f64, cfg: GeomCfg) -> Vec<f64> {
        let mut hits: Vec<f64> = Vec::new();
        for (a, b) in self.edges() {
            if (a.y < y && b.y >= y) || (b.y < y && a.y >= y) {
                hits.push((y - a.y) * (b.x - a.x) / (b.y - a.y) + a.x);
            }
        }
        hits.sort_by(|p, q| p.partial_cmp(q).unwrap_or(std::cmp::Ordering::Equal));
        hits.dedup_by(|p, q| (*p - *q).abs() < cfg.eps_hit);
        hits
    }

    /// Covered x-intervals at height `y`: consecutive hit pairs.
    ///
    /// At most one span for a convex region; the pairing is what a
    /// non-convex generalization of the sweep generator iterates over.
    pub fn scanline_spans(&self, y: f64, cfg: GeomCfg) -> Vec<(f64, f64)> {
        self.scanline_hits(y, cfg)
            .chunks_exact(2)
            .map(|w| (w[0], w[1]))
            .collect()
    }

    /// Interpret the loop as an axis-aligned rectangle.
    ///
    /// Accepts exactly 4 vertices whose edges are each purely horizontal or
    /// purely vertical (within `cfg.eps_axis`, zero-length edges rejected)
    /// and alternate orientation around the loop. Together with closure
    /// that forces a rectangle; starting corner and winding are free.
    pub fn as_aligned_rect(&self, cfg: GeomCfg) -> Option<Rect> {
        if self.verts.len() != 4 {
            return None;
        }
        let mut prev_horizontal = None;
        for (a, b) in self.edges() {
            let horizontal = (a.y - b.y).abs() <= cfg.eps_axis;
            let vertical = (a.x - b.x).abs() <= cfg.eps_axis;
            if !(horizontal ^ vertical) {
                return None;
            }
            if prev_horizontal == Some(horizontal) {
                return None;
            }
            prev_horizontal = Some(horizontal);
        }
        self.bounds()
    }
}
