//! Tickwork night light firmware
//!
//! Single-button night light for RP2040 boards. Everything runs in one
//! cooperative loop: each tick refreshes the button, then steps the
//! night light machine once.

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

use tickwork_core::config::parse_config;
use tickwork_core::error::StartupError;
use tickwork_core::scheduler::Scheduler;
use tickwork_core::traits::DeviceError;
use tickwork_scenes::night_light::{self, NightLightConfig};

use crate::board::{EmbassyClock, NightLightHw, RpAdc};

mod board;

/// Embedded board configuration
/// Edit board.toml and rebuild to customize
const BOARD_CONFIG: &str = include_str!("../board.toml");

/// Lamp PWM period: 125 MHz / 1000 = 125 kHz
const LAMP_PWM_TOP: u16 = 999;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("tickwork night light starting");

    let p = embassy_rp::init(Default::default());
    let mut status_led = Output::new(p.PIN_25, Level::Low);

    let config = match parse_config(BOARD_CONFIG) {
        Ok(config) => config,
        Err(err) => halt(&mut status_led, err.into()),
    };
    info!("config loaded: {}", config);

    let button = Input::new(p.PIN_2, Pull::Up);

    let mut pwm_config = PwmConfig::default();
    pwm_config.top = LAMP_PWM_TOP;
    let (lamp, _) = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_config).split();
    let Some(lamp) = lamp else {
        let err = StartupError::Device {
            device: "lamp",
            error: DeviceError::NotResponding,
        };
        halt(&mut status_led, err);
    };

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let light = AdcChannel::new_pin(p.PIN_26, Pull::None);

    let board = match NightLightHw::new(button, lamp, RpAdc::new(adc, light), &config) {
        Ok(board) => board,
        Err(err) => halt(&mut status_led, err.into()),
    };

    let machine = match night_light::machine(NightLightConfig::default()) {
        Ok(machine) => machine,
        Err(err) => halt(&mut status_led, err.into()),
    };

    let mut scheduler = match Scheduler::start(board, (machine,)) {
        Ok(scheduler) => scheduler.with_config(&config.scheduler),
        Err(err) => halt(&mut status_led, err),
    };

    scheduler.run(EmbassyClock::new())
}

/// Report a fatal startup error and park the core with the status LED lit
fn halt(status_led: &mut Output<'static>, err: StartupError) -> ! {
    error!("startup failed: {}", err);
    status_led.set_high();
    loop {
        cortex_m::asm::wfi();
    }
}
