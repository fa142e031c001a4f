//! Test doubles for `embedded-hal` peripherals

use embedded_hal::digital::{self, ErrorType as DigitalErrorType};
use embedded_hal::pwm::{self, ErrorType as PwmErrorType, SetDutyCycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault;

impl pwm::Error for Fault {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

impl digital::Error for Fault {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// PWM channel with a 0-100 duty range
#[derive(Debug, Default)]
pub struct MockPwm {
    pub duty: u16,
    pub max: u16,
    pub fail: bool,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            duty: 0,
            max: 100,
            fail: false,
        }
    }

    pub fn with_max(max: u16) -> Self {
        Self {
            max,
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

impl PwmErrorType for MockPwm {
    type Error = Fault;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Fault> {
        if self.fail {
            return Err(Fault);
        }
        self.duty = duty;
        Ok(())
    }
}

/// Digital pin with a scripted level and optional read failure
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub fail: bool,
}

impl DigitalErrorType for MockPin {
    type Error = Fault;
}

impl digital::InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Fault> {
        if self.fail {
            Err(Fault)
        } else {
            Ok(self.high)
        }
    }

    fn is_low(&mut self) -> Result<bool, Fault> {
        self.is_high().map(|high| !high)
    }
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Fault> {
        if self.fail {
            return Err(Fault);
        }
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Fault> {
        if self.fail {
            return Err(Fault);
        }
        self.high = true;
        Ok(())
    }
}
