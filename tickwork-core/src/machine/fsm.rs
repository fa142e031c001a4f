//! Table-driven state machine
//!
//! Each instance owns its handler table, its current state, one block
//! timer, one sub-diagram return slot and a private data value. There are
//! no process-wide globals, so any number of independent instances can be
//! built and tested in isolation.

use heapless::LinearMap;

use super::id::StateId;
use super::step::Step;
use crate::error::ConfigError;
use crate::time::{BlockTimer, Millis};

/// Default capacity of a machine's handler table
pub const DEFAULT_MAX_STATES: usize = 16;

/// State function: one bounded step, returns the next state
pub type StateFn<S, B, D> = fn(&mut Step<'_, S, B, D>) -> S;

/// Object-safe view of a machine, as driven by the scheduler
pub trait Machine<B> {
    /// Machine name for logs
    fn name(&self) -> &'static str;

    /// Name of the current state
    fn state_name(&self) -> &'static str;

    /// Check that every state identifier has a handler
    fn validate(&self) -> Result<(), ConfigError>;

    /// Run the handler for the current state exactly once
    fn step(&mut self, board: &mut B, now: Millis);
}

/// A finite state machine over state identifiers `S`, board `B` and
/// private data `D`
pub struct StateMachine<S: StateId, B, D = (), const N: usize = DEFAULT_MAX_STATES> {
    name: &'static str,
    initial: S,
    current: S,
    handlers: LinearMap<S, StateFn<S, B, D>, N>,
    timer: BlockTimer,
    return_to: Option<S>,
    data: D,
    transitions: u32,
}

impl<S: StateId, B, D, const N: usize> StateMachine<S, B, D, N> {
    /// Start building a machine that begins in `initial`
    pub fn builder(name: &'static str, initial: S, data: D) -> StateMachineBuilder<S, B, D, N> {
        StateMachineBuilder {
            name,
            initial,
            handlers: LinearMap::new(),
            data,
            error: None,
        }
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn initial(&self) -> S {
        self.initial
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Number of steps that changed state
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn timer(&self) -> &BlockTimer {
        &self.timer
    }

    /// Pending sub-diagram return state
    pub fn return_state(&self) -> Option<S> {
        self.return_to
    }

    /// Go back to the initial state and clear the return slot
    ///
    /// Private data is left untouched.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.return_to = None;
    }

    fn handler(&self, state: S) -> Option<StateFn<S, B, D>> {
        self.handlers.get(&state).copied()
    }
}

impl<S: StateId, B, D, const N: usize> Machine<B> for StateMachine<S, B, D, N> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn state_name(&self) -> &'static str {
        self.current.name()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for state in S::ALL {
            if !self.handlers.contains_key(state) {
                return Err(ConfigError::UnregisteredState {
                    machine: self.name,
                    state: state.name(),
                });
            }
        }
        Ok(())
    }

    fn step(&mut self, board: &mut B, now: Millis) {
        let current = self.current;
        let Some(handler) = self.handler(current) else {
            // Unreachable once validated
            error!("{=str}: no handler for {=str}", self.name, current.name());
            return;
        };

        let next = {
            let mut step = Step::new(
                board,
                &mut self.data,
                now,
                current,
                &mut self.timer,
                &mut self.return_to,
            );
            handler(&mut step)
        };

        if next != current {
            trace!("{=str}: {=str} -> {=str}", self.name, current.name(), next.name());
            self.transitions = self.transitions.wrapping_add(1);
        }
        self.current = next;
    }
}

/// Builder for [`StateMachine`]
///
/// Registration errors are remembered and reported by
/// [`build`](Self::build), so a chain of `.state(..)` calls stays fluent.
pub struct StateMachineBuilder<S: StateId, B, D, const N: usize> {
    name: &'static str,
    initial: S,
    handlers: LinearMap<S, StateFn<S, B, D>, N>,
    data: D,
    error: Option<ConfigError>,
}

impl<S: StateId, B, D, const N: usize> StateMachineBuilder<S, B, D, N> {
    /// Register the handler for `id`
    pub fn state(mut self, id: S, handler: StateFn<S, B, D>) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.handlers.contains_key(&id) {
            self.error = Some(ConfigError::DuplicateState {
                machine: self.name,
                state: id.name(),
            });
            return self;
        }
        if self.handlers.insert(id, handler).is_err() {
            self.error = Some(ConfigError::TooManyStates { machine: self.name });
        }
        self
    }

    /// Finish the machine, failing if any state lacks a handler
    pub fn build(self) -> Result<StateMachine<S, B, D, N>, ConfigError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let machine = StateMachine {
            name: self.name,
            initial: self.initial,
            current: self.initial,
            handlers: self.handlers,
            timer: BlockTimer::new(),
            return_to: None,
            data: self.data,
            transitions: 0,
        };
        machine.validate()?;
        Ok(machine)
    }
}
