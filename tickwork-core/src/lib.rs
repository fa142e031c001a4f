//! Board-agnostic core of the Tickwork runtime
//!
//! Several independent finite state machines share one thread and one
//! polling tick. This crate contains everything that does not depend on a
//! specific board:
//!
//! - Debounced digital inputs with one-shot edge events
//! - Block timers and the clock boundary
//! - State machines dispatched through per-instance handler tables
//! - The cooperative scheduler that sequences a tick
//! - Device capability traits (motor, lamp, display, servo, sensor)
//! - Runtime configuration (debounce thresholds, status reporting)

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod input;
pub mod machine;
pub mod scheduler;
pub mod time;
pub mod traits;

pub use error::{ConfigError, DeviceFault, StartupError};
pub use input::{ButtonState, DebounceConfig, DebouncedInput, InputBank, InputId};
pub use machine::{Machine, StateFn, StateId, StateMachine, Step};
pub use scheduler::{Board, MachineSet, Scheduler, TickStats};
pub use time::{BlockTimer, Clock, Millis};
