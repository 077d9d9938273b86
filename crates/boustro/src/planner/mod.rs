//! Coverage-path planning (boustrophedon sweeps).
//!
//! `SweepPlanner` validates its inputs up front and `generate` is a pure
//! function from (region, width) to an ordered `SweepPath`; there is no
//! cached result to fall out of sync with the inputs.

mod sweep;

pub use sweep::{PlanError, SweepPath, SweepPlanner};
