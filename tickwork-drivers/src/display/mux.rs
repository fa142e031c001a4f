//! Multiplexed 7-segment display
//!
//! Eight shared segment lines and one enable line per digit. Only one digit
//! is lit at a time; [`Device::update`] moves to the next digit every
//! `scan_ms`, fast enough for persistence of vision.

use tickwork_core::time::{elapsed_since, Millis};
use tickwork_core::traits::{Device, DeviceError, SegmentDisplay};
use tickwork_hal::OutputPin;

use super::font;

/// Module wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wiring {
    /// Segments lit high, digit enabled by pulling its cathode low
    CommonCathode,
    /// Segments lit low, digit enabled by driving its anode high
    CommonAnode,
}

/// `DIGITS`-digit multiplexed display
pub struct MuxDisplay<S, D, const DIGITS: usize> {
    segments: [S; 8],
    digits: [D; DIGITS],
    wiring: Wiring,
    buffer: [u8; DIGITS],
    current: usize,
    scan_ms: Millis,
    last_scan: Option<Millis>,
}

impl<S: OutputPin, D: OutputPin, const DIGITS: usize> MuxDisplay<S, D, DIGITS> {
    pub fn new(segments: [S; 8], digits: [D; DIGITS], wiring: Wiring, scan_ms: Millis) -> Self {
        Self {
            segments,
            digits,
            wiring,
            buffer: [font::BLANK; DIGITS],
            current: 0,
            scan_ms,
            last_scan: None,
        }
    }

    /// Raw segment patterns, leftmost digit first
    pub fn buffer(&self) -> &[u8; DIGITS] {
        &self.buffer
    }

    /// Digit currently being driven
    pub fn current_digit(&self) -> usize {
        self.current
    }

    fn enable_digit(&mut self, index: usize, enabled: bool) {
        let level = match self.wiring {
            Wiring::CommonCathode => !enabled,
            Wiring::CommonAnode => enabled,
        };
        if let Some(pin) = self.digits.get_mut(index) {
            pin.set_state(level);
        }
    }

    fn write_segments(&mut self, pattern: u8) {
        let lit_high = self.wiring == Wiring::CommonCathode;
        for (bit, pin) in self.segments.iter_mut().enumerate() {
            let lit = pattern & (1 << bit) != 0;
            pin.set_state(lit == lit_high);
        }
    }

    fn show_digit(&mut self, index: usize) {
        self.enable_digit(self.current, false);
        self.current = index;
        self.write_segments(self.buffer[index]);
        self.enable_digit(index, true);
    }
}

impl<S: OutputPin, D: OutputPin, const DIGITS: usize> Device for MuxDisplay<S, D, DIGITS> {
    fn init(&mut self) -> Result<(), DeviceError> {
        if DIGITS == 0 {
            return Err(DeviceError::OutOfRange);
        }
        for index in 0..DIGITS {
            self.enable_digit(index, false);
        }
        self.buffer = [font::BLANK; DIGITS];
        self.write_segments(font::BLANK);
        self.current = 0;
        Ok(())
    }

    fn update(&mut self, now: Millis) {
        if DIGITS == 0 {
            return;
        }
        let due = match self.last_scan {
            Some(last) => elapsed_since(last, now) >= self.scan_ms,
            None => true,
        };
        if !due {
            return;
        }
        self.last_scan = Some(now);
        let next = (self.current + 1) % DIGITS;
        self.show_digit(next);
    }
}

impl<S: OutputPin, D: OutputPin, const DIGITS: usize> SegmentDisplay for MuxDisplay<S, D, DIGITS> {
    fn show_number(&mut self, value: i32) {
        let mut buffer = [font::BLANK; DIGITS];
        let negative = value < 0;
        let mut magnitude = value.unsigned_abs();
        let capacity = if negative { DIGITS.saturating_sub(1) } else { DIGITS };

        // Too wide for the display: dashes
        let width = {
            let mut width = 1;
            let mut rest = magnitude / 10;
            while rest > 0 {
                width += 1;
                rest /= 10;
            }
            width
        };
        if width > capacity {
            self.buffer = [font::MINUS; DIGITS];
            return;
        }

        let mut index = DIGITS;
        loop {
            index -= 1;
            buffer[index] = font::digit((magnitude % 10) as u8);
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        if negative {
            buffer[index - 1] = font::MINUS;
        }
        self.buffer = buffer;
    }

    fn show_text(&mut self, text: &str) {
        let mut buffer = [font::BLANK; DIGITS];
        for (slot, c) in buffer.iter_mut().zip(text.chars()) {
            *slot = font::glyph(c);
        }
        self.buffer = buffer;
    }

    fn off(&mut self) {
        self.buffer = [font::BLANK; DIGITS];
    }
}
