//! Coverage-path planning core: geometry predicates and sweep generation.
//!
//! The crate computes full-coverage boustrophedon paths over bounded planar
//! regions for a tool of fixed effective width, and classifies
//! point-in-polygon containment for simple polygons.
//!
//! Layout
//! - `geom2`: points (`nalgebra::Vector2<f64>`), polygons, predicates.
//! - `planner`: `SweepPlanner` → `SweepPath` (ordered waypoints).
//! - `actuator`: pose/heading state holder that consumes waypoints.
//!
//! The core is synchronous and side-effect free. Console reporting and
//! argument handling live in the `cli` crate; the actuator here only holds
//! state and returns motion records for the driver to report.

pub mod actuator;
pub mod geom2;
pub mod planner;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so call sites read `Vec2<f64>` like the modules here.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::actuator::{Actuator, Motion, Pose};
    pub use crate::geom2::rand::{draw_aligned_rect, draw_ring, RectCfg, ReplayToken};
    pub use crate::geom2::{distance, GeomCfg, Polygon, Rect};
    pub use crate::planner::{PlanError, SweepPath, SweepPlanner};
    pub use nalgebra::Vector2 as Vec2;
}
