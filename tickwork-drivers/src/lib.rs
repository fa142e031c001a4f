//! Hardware driver implementations
//!
//! Concrete devices behind the capability traits in `tickwork-core`:
//!
//! - Input adapters (active-low buttons, `embedded-hal` pins)
//! - PWM lamps and LEDs
//! - H-bridge DC motors with soft start/stop
//! - PWM hobby servos
//! - Multiplexed 7-segment displays
//! - ADC light sensors
//!
//! Drivers never block. Anything time-dependent (ramps, display scanning)
//! advances in `Device::update`, which the board calls once per tick.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod lamp;
pub mod motor;
pub mod sensor;
pub mod servo;

#[cfg(test)]
mod mock;
