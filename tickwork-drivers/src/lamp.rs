//! PWM lamp / LED driver

use embedded_hal::pwm::SetDutyCycle;
use tickwork_core::traits::{Device, DeviceError, Dimmable};

/// Dimmable output on one PWM channel
///
/// `level` is the last commanded brightness, even if the PWM write failed;
/// a failed write is remembered in [`has_fault`](Self::has_fault).
#[derive(Debug)]
pub struct PwmLed<P> {
    pwm: P,
    level: u8,
    active_low: bool,
    fault: bool,
}

/// Any other PWM load (pump, heater pad, buzzer)
pub type PwmOutput<P> = PwmLed<P>;

impl<P: SetDutyCycle> PwmLed<P> {
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            level: 0,
            active_low: false,
            fault: false,
        }
    }

    /// LED wired to the supply, lit when the pin is low
    pub fn active_low(pwm: P) -> Self {
        Self {
            active_low: true,
            ..Self::new(pwm)
        }
    }

    pub fn has_fault(&self) -> bool {
        self.fault
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    fn apply(&mut self, percent: u8) -> Result<(), DeviceError> {
        let duty = if self.active_low { 100 - percent } else { percent };
        self.pwm
            .set_duty_cycle_percent(duty)
            .map_err(|_| DeviceError::Output)
    }
}

impl<P: SetDutyCycle> Device for PwmLed<P> {
    fn init(&mut self) -> Result<(), DeviceError> {
        self.level = 0;
        self.apply(0)
    }
}

impl<P: SetDutyCycle> Dimmable for PwmLed<P> {
    fn on(&mut self, percent: u8) {
        let percent = percent.min(100);
        self.fault = self.apply(percent).is_err();
        self.level = percent;
    }

    fn off(&mut self) {
        self.fault = self.apply(0).is_err();
        self.level = 0;
    }

    fn level(&self) -> u8 {
        self.level
    }
}
