//! DC motor trait
//!
//! Covers brushed motors on an H-bridge: direction plus PWM power.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Clockwise rotation
    #[default]
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Brushed DC motor with direction control
///
/// Commands are idempotent: issuing the same `run` every tick leaves the
/// motor in the same state.
pub trait DcMotor {
    /// Drive in `direction` at `percent` power (0-100)
    fn run(&mut self, direction: Direction, percent: u8);

    /// Remove power (coast)
    fn stop(&mut self);

    /// Last commanded direction and power, `None` when stopped
    fn command(&self) -> Option<(Direction, u8)>;

    fn is_running(&self) -> bool {
        self.command().is_some()
    }
}
