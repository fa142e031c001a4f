//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.
//!
//! Input pins report the *logical* level. Polarity (active-low buttons and
//! the like) is resolved by the driver layer before the core sees it.

use core::cell::Cell;

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Reads take `&mut self` so that implementations wrapping
/// `embedded-hal` 1.0 pins can forward directly.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Software-driven input level
///
/// Lets simulators and host tests drive an input from outside while the
/// debouncer owns the "pin".
impl InputPin for &Cell<bool> {
    fn is_high(&mut self) -> bool {
        self.get()
    }
}

/// Software output level, readable by whoever holds the cell
impl OutputPin for &Cell<bool> {
    fn set_high(&mut self) {
        self.set(true);
    }

    fn set_low(&mut self) {
        self.set(false);
    }

    fn is_set_high(&self) -> bool {
        self.get()
    }
}
