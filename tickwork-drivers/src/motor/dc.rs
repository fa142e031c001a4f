//! Brushed DC motor on a two-input H-bridge
//!
//! This driver provides:
//! - PWM power control (0-100%) on IN1/IN2 (DRV8837-style truth table)
//! - Soft start/stop ramping for smooth acceleration
//! - Safe reversal: the motor ramps down to zero before changing direction
//! - Minimum duty handling (below which the motor won't turn)
//!
//! | IN1 | IN2 | Motor                 |
//! |-----|-----|-----------------------|
//! | 0   | 0   | Coast                 |
//! | PWM | 0   | Clockwise             |
//! | 0   | PWM | Counter-clockwise     |
//!
//! Commands only set the target. The output follows in
//! [`Device::update`], which the board calls once per tick.

use embedded_hal::pwm::SetDutyCycle;
use tickwork_core::time::{elapsed_since, Millis};
use tickwork_core::traits::{DcMotor, Device, DeviceError, Direction};

/// Ramp configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampConfig {
    /// Minimum duty cycle percentage (below this the motor won't start)
    pub min_duty: u8,
    /// Soft start ramp time in ms (0 = instant)
    pub soft_start_ms: u16,
    /// Soft stop ramp time in ms (0 = instant)
    pub soft_stop_ms: u16,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            min_duty: 20,
            soft_start_ms: 500,
            soft_stop_ms: 300,
        }
    }
}

impl RampConfig {
    /// No ramping, no dead zone
    pub const fn instant() -> Self {
        Self {
            min_duty: 0,
            soft_start_ms: 0,
            soft_stop_ms: 0,
        }
    }
}

/// What the output is doing relative to the commanded target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorPhase {
    Stopped,
    Starting,
    Running,
    Stopping,
}

/// H-bridge motor with soft start/stop
pub struct HBridgeMotor<IN1, IN2> {
    in1: IN1,
    in2: IN2,
    config: RampConfig,
    /// Commanded direction and power
    target: Option<(Direction, u8)>,
    /// Direction currently applied to the bridge
    direction: Direction,
    /// Current actual speed (0-100%, during ramping)
    actual_speed: u8,
    /// Accumulated time for the current ramp
    ramp_time_ms: u32,
    /// Speed when ramping started
    ramp_start_speed: u8,
    /// Speed target for ramping
    ramp_end_speed: u8,
    last_update: Option<Millis>,
    fault: bool,
}

impl<IN1: SetDutyCycle, IN2: SetDutyCycle> HBridgeMotor<IN1, IN2> {
    pub fn new(in1: IN1, in2: IN2, config: RampConfig) -> Self {
        Self {
            in1,
            in2,
            config,
            target: None,
            direction: Direction::Clockwise,
            actual_speed: 0,
            ramp_time_ms: 0,
            ramp_start_speed: 0,
            ramp_end_speed: 0,
            last_update: None,
            fault: false,
        }
    }

    pub fn config(&self) -> &RampConfig {
        &self.config
    }

    /// Direction currently applied to the bridge
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current actual speed (0-100%)
    pub fn actual_speed(&self) -> u8 {
        self.actual_speed
    }

    pub fn phase(&self) -> MotorPhase {
        let target = self.ramp_end_speed;
        if self.actual_speed == 0 && target == 0 {
            MotorPhase::Stopped
        } else if self.actual_speed < target {
            MotorPhase::Starting
        } else if self.actual_speed > target {
            MotorPhase::Stopping
        } else {
            MotorPhase::Running
        }
    }

    /// True once the output matches the commanded target
    pub fn is_at_speed(&self) -> bool {
        match self.target {
            Some((direction, speed)) => direction == self.direction && self.actual_speed == speed,
            None => self.actual_speed == 0,
        }
    }

    /// True if the last PWM write failed
    pub fn has_fault(&self) -> bool {
        self.fault
    }

    pub fn legs(&self) -> (&IN1, &IN2) {
        (&self.in1, &self.in2)
    }

    /// Scale the speed percentage to actual duty cycle
    ///
    /// Maps 0-100% to min_duty-100%, so that 0% = off and 100% = full power.
    fn scale_duty(&self, speed: u8) -> u8 {
        if speed == 0 {
            0
        } else {
            let min = self.config.min_duty.min(100) as u32;
            let range = 100 - min;
            let scaled = min + (speed as u32 * range / 100);
            scaled.min(100) as u8
        }
    }

    /// Calculate the ramped speed for the current ramp time
    fn calculate_ramp_speed(&self, ramp_time_total_ms: u16) -> u8 {
        if ramp_time_total_ms == 0 {
            return self.ramp_end_speed;
        }

        let progress = (self.ramp_time_ms * 100) / ramp_time_total_ms as u32;
        let progress = progress.min(100);

        if self.ramp_start_speed < self.ramp_end_speed {
            let delta = (self.ramp_end_speed - self.ramp_start_speed) as u32;
            self.ramp_start_speed + (delta * progress / 100) as u8
        } else {
            let delta = (self.ramp_start_speed - self.ramp_end_speed) as u32;
            self.ramp_start_speed - (delta * progress / 100) as u8
        }
    }

    fn start_ramp(&mut self, target: u8) {
        self.ramp_start_speed = self.actual_speed;
        self.ramp_end_speed = target;
        self.ramp_time_ms = 0;
    }

    /// Advance the ramp by `delta_ms` and drive the bridge
    fn advance(&mut self, delta_ms: u32) {
        let (direction, speed) = self.target.unwrap_or((self.direction, 0));

        // Reversal goes through zero first
        if direction != self.direction && self.actual_speed == 0 {
            self.direction = direction;
        }
        let desired = if direction == self.direction { speed } else { 0 };

        if desired != self.ramp_end_speed {
            self.start_ramp(desired);
        }

        if self.actual_speed != self.ramp_end_speed {
            self.ramp_time_ms = self.ramp_time_ms.saturating_add(delta_ms);
            let total = if self.ramp_end_speed > self.ramp_start_speed {
                self.config.soft_start_ms
            } else {
                self.config.soft_stop_ms
            };
            self.actual_speed = self.calculate_ramp_speed(total);
        }

        if direction != self.direction && self.actual_speed == 0 {
            self.direction = direction;
        }

        self.fault = self.drive().is_err();
    }

    fn drive(&mut self) -> Result<(), DeviceError> {
        let duty = self.scale_duty(self.actual_speed);
        let (in1, in2) = match self.direction {
            Direction::Clockwise => (duty, 0),
            Direction::CounterClockwise => (0, duty),
        };
        self.in1
            .set_duty_cycle_percent(in1)
            .map_err(|_| DeviceError::Output)?;
        self.in2
            .set_duty_cycle_percent(in2)
            .map_err(|_| DeviceError::Output)
    }
}

impl<IN1: SetDutyCycle, IN2: SetDutyCycle> Device for HBridgeMotor<IN1, IN2> {
    fn init(&mut self) -> Result<(), DeviceError> {
        self.target = None;
        self.actual_speed = 0;
        self.start_ramp(0);
        self.drive()
    }

    fn update(&mut self, now: Millis) {
        let delta = match self.last_update.replace(now) {
            Some(last) => elapsed_since(last, now),
            None => 0,
        };
        self.advance(delta);
    }
}

impl<IN1: SetDutyCycle, IN2: SetDutyCycle> DcMotor for HBridgeMotor<IN1, IN2> {
    fn run(&mut self, direction: Direction, percent: u8) {
        let percent = percent.min(100);
        self.target = if percent == 0 {
            None
        } else {
            Some((direction, percent))
        };
    }

    fn stop(&mut self) {
        self.target = None;
    }

    fn command(&self) -> Option<(Direction, u8)> {
        self.target
    }
}
