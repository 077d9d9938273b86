//! Planar geometry for coverage planning.
//!
//! Purpose
//! - Provide the region type (`Polygon`, an ordered vertex loop) and the
//!   predicates the planner and its callers need: Euclidean distance and
//!   point-in-polygon classification, plus the horizontal scanline
//!   primitive both the containment test and the sweep generator share.
//!
//! Why this design
//! - V-representation fits the input contract (callers hand over a vertex
//!   loop) and keeps the containment test a single pass over edges.
//! - Tolerances live in one place (`GeomCfg`), numerically explicit.
//!
//! Code cross-refs: `polygon::Polygon`, `types::{GeomCfg, Rect}`,
//! `crate::planner::SweepPlanner`.

pub mod rand;

mod polygon;
mod types;
mod util;

pub use polygon::Polygon;
pub use types::{GeomCfg, Rect};
pub use util::distance;

#[cfg(test)]
mod tests;
