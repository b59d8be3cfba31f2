use super::{Position, Velocity};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A point-robot steering toward a fixed target.
///
/// The target is set at construction and never changes. `Robot` is `Copy` so that
/// lookahead evaluations can move an independent copy without touching the original.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    position: Position,
    target_position: Position,
    step_size: f64,
}

impl Robot {
    #[instrument(level = "debug", fields(position = %position, target_position = %target_position, step_size = step_size))]
    pub fn new(position: Position, target_position: Position, step_size: f64) -> Self {
        Self {
            position,
            target_position,
            step_size,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn target_position(&self) -> Position {
        self.target_position
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Moves the robot by `velocity * step_size`. No bounds are enforced.
    pub fn move_by(&mut self, velocity: Velocity) {
        self.position += velocity * self.step_size;
    }

    pub fn distance_to_target(&self) -> f64 {
        self.position.distance(&self.target_position)
    }
}
