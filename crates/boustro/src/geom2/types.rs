//! Basic planar types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for axis-alignment and scanline checks.
//! - `Rect`: axis-aligned extent used for bounds and validated regions.
//!
//! Code cross-refs: `polygon::Polygon`, `crate::planner::sweep`.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Slack for "this edge is horizontal/vertical" checks.
    pub eps_axis: f64,
    /// Two scanline hits closer than this collapse into one.
    pub eps_hit: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_axis: 1e-9,
            eps_hit: 1e-9,
        }
    }
}

/// Axis-aligned extent `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Rect {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Vertical midline, used for the single-pass fallback on short regions.
    #[inline]
    pub fn mid_y(&self) -> f64 {
        (self.min.y + self.max.y) / 2.0
    }
}
