//! One-button night light
//!
//! ```text
//!        click                 click                click
//!  Off ────────▶ Auto ─────────────────▶ On ───────────────▶ Off
//!                 │  ▲
//!   sample light  ▼  │ every resample_ms
//!              AutoOn / AutoOff
//! ```
//!
//! In automatic mode the lamp follows ambient light: on below
//! `dark_below_percent`, off otherwise, re-sampled every `resample_ms`. A
//! failed sensor read keeps the lamp as it is until the next sample.

use tickwork_core::error::ConfigError;
use tickwork_core::input::DebouncedInput;
use tickwork_core::machine::{StateMachine, Step};
use tickwork_core::states;
use tickwork_core::time::Millis;
use tickwork_core::traits::{AnalogSensor, Dimmable};
use tickwork_hal::InputPin;

/// Devices the night light needs
pub trait NightLightBoard {
    type Pin: InputPin;
    type Lamp: Dimmable;
    type Sensor: AnalogSensor;

    fn button(&mut self) -> &mut DebouncedInput<Self::Pin>;
    fn lamp(&mut self) -> &mut Self::Lamp;
    fn light_sensor(&mut self) -> &mut Self::Sensor;
}

/// Night light tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NightLightConfig {
    /// Ambient light below this percentage counts as dark
    pub dark_below_percent: f32,
    /// Interval between ambient samples in automatic mode
    pub resample_ms: Millis,
    /// Lamp level when on
    pub brightness: u8,
}

impl Default for NightLightConfig {
    fn default() -> Self {
        Self {
            dark_below_percent: 50.0,
            resample_ms: 10_000,
            brightness: 100,
        }
    }
}

states! {
    pub enum NightLight {
        Off,
        OffWait,
        AutoSample,
        AutoOn,
        AutoOff,
        AutoWait,
        On,
        OnWait,
    }
}

pub type NightLightMachine<B> = StateMachine<NightLight, B, NightLightConfig>;

type S<'a, B> = Step<'a, NightLight, B, NightLightConfig>;

/// Build the night light machine
pub fn machine<B: NightLightBoard>(config: NightLightConfig) -> Result<NightLightMachine<B>, ConfigError> {
    StateMachine::builder("night_light", NightLight::Off, config)
        .state(NightLight::Off, off::<B>)
        .state(NightLight::OffWait, off_wait::<B>)
        .state(NightLight::AutoSample, auto_sample::<B>)
        .state(NightLight::AutoOn, auto_on::<B>)
        .state(NightLight::AutoOff, auto_off::<B>)
        .state(NightLight::AutoWait, auto_wait::<B>)
        .state(NightLight::On, on::<B>)
        .state(NightLight::OnWait, on_wait::<B>)
        .build()
}

fn off<B: NightLightBoard>(s: &mut S<'_, B>) -> NightLight {
    s.board.lamp().off();
    NightLight::OffWait
}

fn off_wait<B: NightLightBoard>(s: &mut S<'_, B>) -> NightLight {
    if s.board.button().consume_press_and_release() {
        NightLight::AutoSample
    } else {
        s.stay()
    }
}

fn auto_sample<B: NightLightBoard>(s: &mut S<'_, B>) -> NightLight {
    if s.board.button().consume_press_and_release() {
        return NightLight::On;
    }

    match s.board.light_sensor().read_percent() {
        Ok(percent) if percent < s.data.dark_below_percent => NightLight::AutoOn,
        Ok(_) => NightLight::AutoOff,
        Err(_err) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("light sensor read failed: {}", _err);
            // Keep the current decision until the next sample
            s.mark();
            NightLight::AutoWait
        }
    }
}

fn auto_on<B: NightLightBoard>(s: &mut S<'_, B>) -> NightLight {
    let brightness = s.data.brightness;
    s.board.lamp().on(brightness);
    s.mark();
    NightLight::AutoWait
}

fn auto_off<B: NightLightBoard>(s: &mut S<'_, B>) -> NightLight {
    s.board.lamp().off();
    s.mark();
    NightLight::AutoWait
}

fn auto_wait<B: NightLightBoard>(s: &mut S<'_, B>) -> NightLight {
    if s.board.button().consume_press_and_release() {
        NightLight::On
    } else if s.timed_out(s.data.resample_ms) {
        NightLight::AutoSample
    } else {
        s.stay()
    }
}

fn on<B: NightLightBoard>(s: &mut S<'_, B>) -> NightLight {
    let brightness = s.data.brightness;
    s.board.lamp().on(brightness);
    NightLight::OnWait
}

fn on_wait<B: NightLightBoard>(s: &mut S<'_, B>) -> NightLight {
    if s.board.button().consume_press_and_release() {
        NightLight::Off
    } else {
        s.stay()
    }
}
