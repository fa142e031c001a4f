//! Debounced digital inputs
//!
//! A noisy mechanical switch becomes a three-state logical button with
//! level queries ("pressed", "released") and a one-shot edge query
//! ("press-and-release"). Inputs are refreshed by the scheduler before any
//! state machine runs in a tick.

pub mod bank;
pub mod debounce;

pub use bank::{InputBank, InputId};
pub use debounce::{ButtonState, DebounceConfig, DebouncedInput};
