//! Cooperative scheduler
//!
//! Pure sequencing, no decision logic. One tick:
//!
//! 1. refresh every debounced input ([`Board::refresh_inputs`])
//! 2. give every output device its update ([`Board::update_devices`])
//! 3. step every machine once, in registration order
//!
//! A tick never blocks, so tick latency is bounded by one pass over the
//! inputs, devices and machines.

pub mod board;
pub mod executor;
pub mod set;

pub use board::Board;
pub use executor::{Scheduler, TickStats};
pub use set::MachineSet;
