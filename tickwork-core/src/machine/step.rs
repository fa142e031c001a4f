//! Per-tick context handed to a state function

use super::id::StateId;
use crate::time::{BlockTimer, Millis};

/// Everything a state function may touch during one step
///
/// - `board`: shared inputs and output devices, borrowed for this step only
/// - `data`: the machine's own private data
/// - the machine's block timer and sub-diagram return slot, through methods
///
/// The function's return value is the next state. Returning
/// [`stay`](Self::stay) keeps the machine where it is.
pub struct Step<'a, S, B, D> {
    /// Shared board (inputs and devices)
    pub board: &'a mut B,
    /// Machine-private data
    pub data: &'a mut D,
    now: Millis,
    state: S,
    timer: &'a mut BlockTimer,
    return_to: &'a mut Option<S>,
}

impl<'a, S: StateId, B, D> Step<'a, S, B, D> {
    pub(crate) fn new(
        board: &'a mut B,
        data: &'a mut D,
        now: Millis,
        state: S,
        timer: &'a mut BlockTimer,
        return_to: &'a mut Option<S>,
    ) -> Self {
        Self {
            board,
            data,
            now,
            state,
            timer,
            return_to,
        }
    }

    /// Timestamp of the current tick
    pub fn now(&self) -> Millis {
        self.now
    }

    /// State being executed
    pub fn state(&self) -> S {
        self.state
    }

    /// Next state = current state
    pub fn stay(&self) -> S {
        self.state
    }

    /// Record the current tick as the start of a timed block
    pub fn mark(&mut self) {
        self.timer.mark(self.now);
    }

    /// Milliseconds since the last [`mark`](Self::mark)
    pub fn elapsed(&self) -> Millis {
        self.timer.elapsed(self.now)
    }

    /// True once `threshold_ms` have passed since the last mark
    pub fn timed_out(&self, threshold_ms: Millis) -> bool {
        self.timer.has_elapsed(self.now, threshold_ms)
    }

    /// Enter a sub-diagram at `entry`, resuming at `resume` when it finishes
    ///
    /// Only one level of return is kept; a nested call replaces it.
    pub fn call(&mut self, entry: S, resume: S) -> S {
        *self.return_to = Some(resume);
        entry
    }

    /// Leave the current sub-diagram
    ///
    /// Returns the state recorded by [`call`](Self::call), or `fallback`
    /// if the sub-diagram was entered without one.
    pub fn resume(&mut self, fallback: S) -> S {
        self.return_to.take().unwrap_or(fallback)
    }

    /// Pending return state, if inside a sub-diagram
    pub fn return_state(&self) -> Option<S> {
        *self.return_to
    }
}
