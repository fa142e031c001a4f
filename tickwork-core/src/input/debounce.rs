//! Debounce state machine for one input
//!
//! ```text
//!            active for settle_ms              inactive for settle_ms
//! Released ─────────────────────▶ Pressed ─────────────────────▶ JustReleased
//!    ▲                                                                │
//!    └──────────── release_hold_ms elapsed, or edge consumed ─────────┘
//! ```
//!
//! `JustReleased` is deliberately neither "pressed" nor "released": it is
//! the window in which exactly one consumer may observe the click.

use tickwork_hal::InputPin;

use crate::time::{elapsed_since, Millis};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default time a raw level must hold before it is accepted
pub const DEFAULT_SETTLE_MS: Millis = 30;

/// Default lifetime of the `JustReleased` edge window
pub const DEFAULT_RELEASE_HOLD_MS: Millis = 150;

/// Debounce thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DebounceConfig {
    /// Raw level must be stable this long before a press/release is accepted
    pub settle_ms: Millis,
    /// How long a completed click stays observable before decaying
    pub release_hold_ms: Millis,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            settle_ms: DEFAULT_SETTLE_MS,
            release_hold_ms: DEFAULT_RELEASE_HOLD_MS,
        }
    }
}

/// Logical button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Idle
    #[default]
    Released,
    /// Held down (debounced)
    Pressed,
    /// Click completed; waiting to be consumed or to decay
    JustReleased,
}

/// A debounced digital input bound to one raw source
///
/// Mutated only by [`refresh`](Self::refresh) and by
/// [`consume_press_and_release`](Self::consume_press_and_release).
#[derive(Debug)]
pub struct DebouncedInput<P> {
    pin: P,
    config: DebounceConfig,
    state: ButtonState,
    /// Time of the last confirmed transition
    changed_at: Millis,
    /// First sample of the current run of opposite-level readings
    pending_since: Option<Millis>,
    /// Timestamp of the most recent refresh
    last_refresh: Millis,
}

impl<P: InputPin> DebouncedInput<P> {
    /// Bind a raw source with explicit thresholds
    pub fn new(pin: P, config: DebounceConfig) -> Self {
        Self {
            pin,
            config,
            state: ButtonState::Released,
            changed_at: 0,
            pending_since: None,
            last_refresh: 0,
        }
    }

    /// Bind a raw source with the default 30 ms / 150 ms thresholds
    pub fn with_defaults(pin: P) -> Self {
        Self::new(pin, DebounceConfig::default())
    }

    /// Sample the raw source once and advance the debounce state
    pub fn refresh(&mut self, now: Millis) {
        let active = self.pin.is_high();
        self.last_refresh = now;

        match self.state {
            ButtonState::Released => {
                if self.settled(active, now) {
                    self.enter(ButtonState::Pressed, now);
                }
            }
            ButtonState::Pressed => {
                if self.settled(!active, now) {
                    self.enter(ButtonState::JustReleased, now);
                }
            }
            ButtonState::JustReleased => {
                self.pending_since = None;
                if elapsed_since(self.changed_at, now) >= self.config.release_hold_ms {
                    self.enter(ButtonState::Released, now);
                }
            }
        }
    }

    /// True iff the button is held (debounced)
    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    /// True iff the button is idle
    ///
    /// False during the `JustReleased` window.
    pub fn is_released(&self) -> bool {
        self.state == ButtonState::Released
    }

    /// Non-consuming view of the click edge
    ///
    /// Several machines may react to the same broadcast button this way;
    /// the edge simply decays after `release_hold_ms`.
    pub fn is_just_released(&self) -> bool {
        self.state == ButtonState::JustReleased
    }

    /// One-shot click query
    ///
    /// Returns true at most once per click: on success the input is forced
    /// back to `Released` and its transition timestamp reset to the last
    /// refresh time. The first caller in a tick wins.
    pub fn consume_press_and_release(&mut self) -> bool {
        if self.state != ButtonState::JustReleased {
            return false;
        }
        self.enter(ButtonState::Released, self.last_refresh);
        true
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Time of the last confirmed transition
    pub fn changed_at(&self) -> Millis {
        self.changed_at
    }

    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }

    /// Replace thresholds (takes effect at the next refresh)
    pub fn set_config(&mut self, config: DebounceConfig) {
        self.config = config;
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Track a run of samples at the target level; true once it has
    /// lasted `settle_ms`
    fn settled(&mut self, at_target: bool, now: Millis) -> bool {
        if !at_target {
            self.pending_since = None;
            return false;
        }
        let since = *self.pending_since.get_or_insert(now);
        elapsed_since(since, now) >= self.config.settle_ms
    }

    fn enter(&mut self, state: ButtonState, now: Millis) {
        self.state = state;
        self.changed_at = now;
        self.pending_since = None;
    }
}
