//! Waypoint-following state holder.
//!
//! Purpose
//! - Hold the pose of the tool carrier and advance it one waypoint at a
//!   time, strictly in call order.
//!
//! The state transition is pure: `move_to` returns a `Motion` record and
//! performs no I/O, so the driver decides whether and how to report legs.

use nalgebra::Vector2;

/// Position plus heading in degrees (0° = +x axis, atan2 convention).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vector2<f64>,
    pub heading_deg: f64,
}

impl Pose {
    #[inline]
    pub fn new(position: Vector2<f64>, heading_deg: f64) -> Self {
        Self {
            position,
            heading_deg,
        }
    }
}

/// One completed leg: where from, where to, heading on arrival.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub heading_deg: f64,
}

/// Simulated tool carrier; consumes waypoints strictly in call order.
#[derive(Clone, Copy, Debug)]
pub struct Actuator {
    pose: Pose,
}

impl Actuator {
    #[inline]
    pub fn new(pose: Pose) -> Self {
        Self { pose }
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Move to `target`; heading becomes the bearing of the travelled leg.
    ///
    /// A zero-displacement move keeps the current heading: `atan2(0, 0)`
    /// would otherwise reset it to 0°.
    pub fn move_to(&mut self, target: Vector2<f64>) -> Motion {
        let from = self.pose.position;
        let delta = target - from;
        if delta.x != 0.0 || delta.y != 0.0 {
            self.pose.heading_deg = delta.y.atan2(delta.x).to_degrees();
        }
        self.pose.position = target;
        Motion {
            from,
            to: target,
            heading_deg: self.pose.heading_deg,
        }
    }
}
