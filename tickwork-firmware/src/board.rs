//! Night light board wiring
//!
//! | Function     | Pin    | Notes                     |
//! |--------------|--------|---------------------------|
//! | Button       | GPIO2  | Active-low, pull-up       |
//! | Lamp         | GPIO10 | PWM5 A                    |
//! | Light sensor | GPIO26 | ADC0, photoresistor divider |
//! | Status LED   | GPIO25 | Lit on a fatal startup error |

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Input;
use embassy_rp::pwm;
use embassy_time::Instant;

use tickwork_core::config::RuntimeConfig;
use tickwork_core::error::{ConfigError, DeviceFault};
use tickwork_core::input::{DebouncedInput, InputBank, InputId};
use tickwork_core::scheduler::Board;
use tickwork_core::time::{Clock, Millis};
use tickwork_core::traits::Device;
use tickwork_drivers::input::EhInput;
use tickwork_drivers::lamp::PwmLed;
use tickwork_drivers::sensor::LightSensor;
use tickwork_hal::{AdcChannel, AdcError};
use tickwork_scenes::night_light::NightLightBoard;

/// RP2040 ADC resolution
const ADC_FULL_SCALE: u16 = 4095;

/// Milliseconds since the clock was created, from the Embassy time driver
pub struct EmbassyClock {
    start: Instant,
}

impl EmbassyClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for EmbassyClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> Millis {
        // Truncation is the intended 32-bit wrap
        self.start.elapsed().as_millis() as Millis
    }
}

/// One blocking ADC input
pub struct RpAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl RpAdc {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcChannel for RpAdc {
    fn full_scale(&self) -> u16 {
        ADC_FULL_SCALE
    }

    fn read_raw(&mut self) -> Result<u16, AdcError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| AdcError::Conversion)
    }
}

pub type ButtonPin = EhInput<Input<'static>>;
pub type Lamp = PwmLed<pwm::PwmOutput<'static>>;
pub type Sensor = LightSensor<RpAdc>;

pub struct NightLightHw {
    inputs: InputBank<ButtonPin, 1>,
    button: InputId,
    lamp: Lamp,
    sensor: Sensor,
}

impl NightLightHw {
    pub fn new(
        button: Input<'static>,
        lamp: pwm::PwmOutput<'static>,
        sensor: RpAdc,
        config: &RuntimeConfig,
    ) -> Result<Self, ConfigError> {
        let mut inputs = InputBank::new();
        let button = inputs.add(DebouncedInput::new(
            EhInput::active_low(button),
            config.debounce,
        ))?;

        Ok(Self {
            inputs,
            button,
            lamp: PwmLed::new(lamp),
            sensor: LightSensor::new(sensor),
        })
    }
}

impl Board for NightLightHw {
    fn init_devices(&mut self) -> Result<(), DeviceFault> {
        self.lamp
            .init()
            .map_err(|e| DeviceFault::new("lamp", e))?;
        self.sensor
            .init()
            .map_err(|e| DeviceFault::new("light_sensor", e))
    }

    fn refresh_inputs(&mut self, now: Millis) {
        self.inputs.refresh_all(now);
    }
}

impl NightLightBoard for NightLightHw {
    type Pin = ButtonPin;
    type Lamp = Lamp;
    type Sensor = Sensor;

    fn button(&mut self) -> &mut DebouncedInput<ButtonPin> {
        &mut self.inputs[self.button]
    }

    fn lamp(&mut self) -> &mut Lamp {
        &mut self.lamp
    }

    fn light_sensor(&mut self) -> &mut Sensor {
        &mut self.sensor
    }
}
