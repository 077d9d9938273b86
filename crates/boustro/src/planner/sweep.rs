//! Boustrophedon sweep generation over validated regions.
//!
//! Purpose
//! - Turn a region polygon and a tool width into the ordered waypoint list
//!   an actuator can follow: parallel passes spaced one tool width apart,
//!   connected at alternating ends.
//!
//! Why this design
//! - Pass endpoints come from the polygon's scanline spans rather than from
//!   the bounding box directly. For the validated rectangle both agree; the
//!   span form is the seam where non-rectangular regions would plug in, one
//!   span per connected x-interval of a pass.
//! - Shape and width validation happen at construction, before any waypoint
//!   can be produced; `generate` itself is total.
//!
//! Code cross-refs: `geom2::{Polygon, Rect, GeomCfg}`, `crate::actuator`.

use std::fmt;

use nalgebra::Vector2;

use crate::geom2::{distance, GeomCfg, Polygon};

/// Planner input rejection.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanError {
    /// Tool width must be a positive finite number.
    InvalidWidth { width: f64 },
    /// The region is not an axis-aligned rectangle.
    UnsupportedShape,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidWidth { width } => {
                write!(f, "tool width must be positive and finite, got {width}")
            }
            PlanError::UnsupportedShape => {
                write!(f, "region is not an axis-aligned rectangle")
            }
        }
    }
}

impl std::error::Error for PlanError {}

/// Coverage planner for one region and one tool width.
///
/// Invariants:
/// - `width` is positive and finite (checked at construction).
/// - `area` is an axis-aligned rectangle, or degenerate (fewer than 3
///   vertices, or zero height). Degenerate areas plan to an empty path
///   instead of failing; anything else is rejected as `UnsupportedShape`
///   up front rather than silently mowed by bounding box.
#[derive(Clone, Debug)]
pub struct SweepPlanner {
    area: Polygon,
    width: f64,
    cfg: GeomCfg,
}

impl SweepPlanner {
    /// Validate inputs and build a planner.
    pub fn new(area: Polygon, width: f64) -> Result<Self, PlanError> {
        Self::with_cfg(area, width, GeomCfg::default())
    }

    /// As `new`, with explicit tolerances.
    pub fn with_cfg(area: Polygon, width: f64, cfg: GeomCfg) -> Result<Self, PlanError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(PlanError::InvalidWidth { width });
        }
        let degenerate =
            area.is_degenerate() || area.bounds().is_none_or(|b| b.height() <= 0.0);
        if !degenerate && area.as_aligned_rect(cfg).is_none() {
            return Err(PlanError::UnsupportedShape);
        }
        Ok(Self { area, width, cfg })
    }

    #[inline]
    pub fn area(&self) -> &Polygon {
        &self.area
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Generate the coverage path.
    ///
    /// Passes run at `y = min_y + width/2`, stepping by `width`, while
    /// `y <= max_y - width/2` (inclusive: a pass exactly at the last
    /// fitting offset is still emitted), alternating direction starting
    /// left-to-right. A region shorter than the tool still gets one pass
    /// over its vertical midline. Degenerate regions produce an empty
    /// path, a legitimate "nothing to plan" outcome rather than an error.
    ///
    /// Deterministic: equal inputs give equal output on every call.
    pub fn generate(&self) -> SweepPath {
        let Some(bounds) = self.area.bounds() else {
            return SweepPath::default();
        };
        if self.area.is_degenerate() || bounds.height() <= 0.0 {
            return SweepPath::default();
        }
        let half = self.width / 2.0;
        let mut pts = Vec::new();
        let mut left_to_right = true;
        let mut y = bounds.min.y + half;
        while y <= bounds.max.y - half {
            self.emit_pass(y, left_to_right, &mut pts);
            left_to_right = !left_to_right;
            y += self.width;
        }
        if pts.is_empty() {
            // Region shorter than the tool: one pass over the midline.
            self.emit_pass(bounds.mid_y(), true, &mut pts);
        }
        SweepPath { pts }
    }

    /// One pass at height `y`: span endpoints in travel order.
    fn emit_pass(&self, y: f64, left_to_right: bool, out: &mut Vec<Vector2<f64>>) {
        for (x0, x1) in self.area.scanline_spans(y, self.cfg) {
            if left_to_right {
                out.push(Vector2::new(x0, y));
                out.push(Vector2::new(x1, y));
            } else {
                out.push(Vector2::new(x1, y));
                out.push(Vector2::new(x0, y));
            }
        }
    }
}

/// Ordered waypoint sequence produced by `SweepPlanner::generate`.
///
/// A plain value: the caller owns it and the planner keeps nothing back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepPath {
    pts: Vec<Vector2<f64>>,
}

impl SweepPath {
    #[inline]
    pub fn waypoints(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Passes as (start, end) waypoint pairs.
    pub fn sweeps(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        self.pts.chunks_exact(2).map(|w| (w[0], w[1]))
    }

    /// Total travel length over the whole path, transit legs included.
    pub fn travel_length(&self) -> f64 {
        self.pts.windows(2).map(|w| distance(w[0], w[1])).sum()
    }

    /// Consume into the raw waypoint list.
    #[inline]
    pub fn into_waypoints(self) -> Vec<Vector2<f64>> {
        self.pts
    }
}
