//! Hobby servos on PWM channels
//!
//! Standard 50 Hz servo signal: a 0.5-2.5 ms pulse maps to 0-180 degrees.
//! Each channel's PWM must already run at the servo frame rate.

use embedded_hal::pwm::SetDutyCycle;
use tickwork_core::traits::{Device, DeviceError, ServoBank};

/// Pulse timing for one kind of servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoTiming {
    /// Frame period in microseconds
    pub period_us: u16,
    /// Pulse width at 0 degrees
    pub min_pulse_us: u16,
    /// Pulse width at 180 degrees
    pub max_pulse_us: u16,
}

impl Default for ServoTiming {
    fn default() -> Self {
        Self {
            period_us: 20_000,
            min_pulse_us: 500,
            max_pulse_us: 2_500,
        }
    }
}

impl ServoTiming {
    pub fn pulse_us(&self, degrees: u8) -> u16 {
        let degrees = degrees.min(180) as u32;
        let span = self.max_pulse_us.saturating_sub(self.min_pulse_us) as u32;
        self.min_pulse_us + (span * degrees / 180) as u16
    }
}

/// `N` servos, one PWM channel each
pub struct PwmServos<P, const N: usize> {
    channels: [P; N],
    angles: [Option<u8>; N],
    timing: ServoTiming,
}

impl<P: SetDutyCycle, const N: usize> PwmServos<P, N> {
    pub fn new(channels: [P; N], timing: ServoTiming) -> Self {
        Self {
            channels,
            angles: [None; N],
            timing,
        }
    }

    pub fn channel(&self, index: u8) -> Option<&P> {
        self.channels.get(index as usize)
    }

    pub fn timing(&self) -> &ServoTiming {
        &self.timing
    }
}

impl<P: SetDutyCycle, const N: usize> Device for PwmServos<P, N> {
    /// Stop sending pulses; servos go limp until the first move
    fn init(&mut self) -> Result<(), DeviceError> {
        for channel in self.channels.iter_mut() {
            channel
                .set_duty_cycle_fully_off()
                .map_err(|_| DeviceError::Output)?;
        }
        self.angles = [None; N];
        Ok(())
    }
}

impl<P: SetDutyCycle, const N: usize> ServoBank for PwmServos<P, N> {
    fn channels(&self) -> u8 {
        N.min(u8::MAX as usize) as u8
    }

    fn move_to(&mut self, channel: u8, degrees: u8) {
        let index = channel as usize;
        let Some(pwm) = self.channels.get_mut(index) else {
            return;
        };
        let degrees = degrees.min(180);
        let pulse = self.timing.pulse_us(degrees);
        if pwm
            .set_duty_cycle_fraction(pulse, self.timing.period_us)
            .is_ok()
        {
            self.angles[index] = Some(degrees);
        }
    }

    fn angle(&self, channel: u8) -> Option<u8> {
        self.angles.get(channel as usize).copied().flatten()
    }
}
