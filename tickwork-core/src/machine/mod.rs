//! State machines
//!
//! A machine is a set of named states, each bound to a state function.
//! Once per tick the scheduler calls [`Machine::step`], which runs the
//! function for the current state; the function performs one bounded
//! action and returns the next state. Nothing blocks: waiting is a state
//! that returns itself until its condition holds.

pub mod fsm;
pub mod id;
pub mod step;

pub use fsm::{Machine, StateFn, StateMachine, StateMachineBuilder, DEFAULT_MAX_STATES};
pub use id::StateId;
pub use step::Step;
