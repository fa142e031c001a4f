//! Clock boundary and block timers
//!
//! The runtime consumes a single monotonic "milliseconds since start" value
//! per tick. It never sleeps and never reads wall-clock time. Waiting is a
//! state that re-checks [`BlockTimer::has_elapsed`] every tick.

use core::cell::Cell;

/// Milliseconds since boot
///
/// 32 bits wrap after ~49.7 days; all differences are taken with
/// wrapping arithmetic so timers keep working across the wrap.
pub type Millis = u32;

/// Time elapsed from `mark` to `now`, tolerant of counter wrap
#[inline]
pub const fn elapsed_since(mark: Millis, now: Millis) -> Millis {
    now.wrapping_sub(mark)
}

/// Monotonic millisecond source
///
/// Implemented by the firmware on top of the chip timer and by
/// [`MockClock`] for host tests.
pub trait Clock {
    /// Milliseconds since start
    fn now_ms(&self) -> Millis;
}

/// Manually driven clock for tests and simulation
///
/// ```
/// use tickwork_core::time::{Clock, MockClock};
///
/// let clock = MockClock::new();
/// clock.advance(25);
/// assert_eq!(clock.now_ms(), 25);
/// ```
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<Millis>,
}

impl MockClock {
    pub const fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Start at a specific time (useful for wrap tests)
    pub const fn starting_at(now: Millis) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    /// Move time forward by `delta_ms`, wrapping like the hardware counter
    pub fn advance(&self, delta_ms: Millis) {
        self.now.set(self.now.get().wrapping_add(delta_ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Start-of-block timestamp owned by one state machine
///
/// A state that begins a wait calls [`mark`](Self::mark) on entry; its
/// decision companion state polls [`has_elapsed`](Self::has_elapsed) each
/// tick and moves on once the threshold is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlockTimer {
    start: Millis,
}

impl BlockTimer {
    pub const fn new() -> Self {
        Self { start: 0 }
    }

    /// Record `now` as the start of the current block
    pub fn mark(&mut self, now: Millis) {
        self.start = now;
    }

    /// Timestamp recorded by the last [`mark`](Self::mark)
    pub fn start(&self) -> Millis {
        self.start
    }

    pub fn elapsed(&self, now: Millis) -> Millis {
        elapsed_since(self.start, now)
    }

    /// True once at least `threshold_ms` have passed since the mark
    pub fn has_elapsed(&self, now: Millis, threshold_ms: Millis) -> bool {
        self.elapsed(now) >= threshold_ms
    }
}
