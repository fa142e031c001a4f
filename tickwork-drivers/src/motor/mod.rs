//! Motor driver implementations

pub mod dc;

pub use dc::{HBridgeMotor, MotorPhase, RampConfig};
