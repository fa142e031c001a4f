//! Input adapters
//!
//! The debouncer wants the *logical* level of a button. These wrappers
//! resolve wiring polarity and adapt `embedded-hal` pins to
//! [`tickwork_hal::InputPin`].

use tickwork_hal::{InputPin, OutputPin};

/// Inverts a raw input: a button to ground with a pull-up reads low when
/// pressed
#[derive(Debug)]
pub struct ActiveLow<P>(pub P);

impl<P: InputPin> InputPin for ActiveLow<P> {
    fn is_high(&mut self) -> bool {
        self.0.is_low()
    }
}

/// `embedded-hal` 1.0 input pin as a logical input
///
/// A failed read counts as "not pressed" for that sample; the debouncer
/// then treats it like any other glitch.
#[derive(Debug)]
pub struct EhInput<P> {
    pin: P,
    active_low: bool,
}

impl<P: embedded_hal::digital::InputPin> EhInput<P> {
    /// Pressed when the pin reads high
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Pressed when the pin reads low (pull-up wiring)
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::InputPin> InputPin for EhInput<P> {
    fn is_high(&mut self) -> bool {
        let read = if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };
        read.unwrap_or(false)
    }
}

/// `embedded-hal` 1.0 output pin as a [`tickwork_hal::OutputPin`]
///
/// Write errors are dropped; the remembered level is what was requested.
#[derive(Debug)]
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin> EhOutput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;
    use core::cell::Cell;

    #[test]
    fn test_active_low_inverts() {
        let level = Cell::new(true);
        let mut button = ActiveLow(&level);

        assert!(!button.is_high());
        level.set(false);
        assert!(button.is_high());
    }

    #[test]
    fn test_eh_input_polarity() {
        let mut high = EhInput::active_high(MockPin {
            high: true,
            fail: false,
        });
        let mut low = EhInput::active_low(MockPin {
            high: true,
            fail: false,
        });

        assert!(high.is_high());
        assert!(!low.is_high());
    }

    #[test]
    fn test_eh_input_error_reads_inactive() {
        let mut pin = EhInput::active_low(MockPin {
            high: false,
            fail: true,
        });
        assert!(!pin.is_high());
    }

    #[test]
    fn test_eh_output_tracks_level() {
        let mut out = EhOutput::new(MockPin::default());

        out.set_high();
        assert!(out.is_set_high());
        assert!(out.into_inner().high);
    }
}
