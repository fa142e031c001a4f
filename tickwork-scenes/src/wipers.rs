//! Windshield wipers
//!
//! Two identical channels, each with a motor, a home and a far limit switch
//! and a washer pump. Three shared buttons select a program:
//!
//! - `Single`: one sweep, then a 1 s pause
//! - `Double`: one sweep, then a 2 s pause
//! - `Wash`: spray for 2 s, then two sweeps
//!
//! A sweep drives the motor clockwise until the far limit, then
//! counter-clockwise until home. Sweep and spray are sub-diagrams entered
//! with [`Step::call`] and left with [`Step::resume`], so one sweep
//! implementation serves every program.

use tickwork_core::error::ConfigError;
use tickwork_core::input::DebouncedInput;
use tickwork_core::machine::{StateMachine, Step};
use tickwork_core::states;
use tickwork_core::time::Millis;
use tickwork_core::traits::{DcMotor, Dimmable, Direction};
use tickwork_hal::InputPin;

pub const SHORT_PAUSE_MS: Millis = 1_000;
pub const LONG_PAUSE_MS: Millis = 2_000;
pub const SPRAY_MS: Millis = 2_000;

/// Motor power during a sweep
pub const SWEEP_POWER: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Program {
    Single,
    Double,
    Wash,
}

/// Devices the wipers need
pub trait WiperBoard {
    type Pin: InputPin;
    type Motor: DcMotor;
    type Pump: Dimmable;

    fn program_button(&mut self, program: Program) -> &mut DebouncedInput<Self::Pin>;
    fn home_switch(&mut self, channel: Channel) -> &mut DebouncedInput<Self::Pin>;
    fn far_switch(&mut self, channel: Channel) -> &mut DebouncedInput<Self::Pin>;
    fn motor(&mut self, channel: Channel) -> &mut Self::Motor;
    fn pump(&mut self, channel: Channel) -> &mut Self::Pump;
}

states! {
    pub enum Wiper {
        Idle,
        SweepOut,
        SweepOutWait,
        SweepBack,
        SweepBackWait,
        SweepDone,
        ShortPause,
        LongPause,
        SprayOn,
        SprayWait,
        SprayOff,
        WashFirstSweep,
        WashSecondSweep,
    }
}

pub type WiperMachine<B> = StateMachine<Wiper, B, Channel>;

type S<'a, B> = Step<'a, Wiper, B, Channel>;

pub fn machine<B: WiperBoard>(channel: Channel) -> Result<WiperMachine<B>, ConfigError> {
    let name = match channel {
        Channel::A => "wiper_a",
        Channel::B => "wiper_b",
    };
    StateMachine::builder(name, Wiper::Idle, channel)
        .state(Wiper::Idle, idle::<B>)
        .state(Wiper::SweepOut, sweep_out::<B>)
        .state(Wiper::SweepOutWait, sweep_out_wait::<B>)
        .state(Wiper::SweepBack, sweep_back::<B>)
        .state(Wiper::SweepBackWait, sweep_back_wait::<B>)
        .state(Wiper::SweepDone, sweep_done::<B>)
        .state(Wiper::ShortPause, short_pause::<B>)
        .state(Wiper::LongPause, long_pause::<B>)
        .state(Wiper::SprayOn, spray_on::<B>)
        .state(Wiper::SprayWait, spray_wait::<B>)
        .state(Wiper::SprayOff, spray_off::<B>)
        .state(Wiper::WashFirstSweep, wash_first_sweep::<B>)
        .state(Wiper::WashSecondSweep, wash_second_sweep::<B>)
        .build()
}

fn idle<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    if s.board.program_button(Program::Single).is_pressed() {
        s.call(Wiper::SweepOut, Wiper::ShortPause)
    } else if s.board.program_button(Program::Double).is_pressed() {
        s.call(Wiper::SweepOut, Wiper::LongPause)
    } else if s.board.program_button(Program::Wash).is_pressed() {
        s.call(Wiper::SprayOn, Wiper::WashFirstSweep)
    } else {
        s.stay()
    }
}

// Sweep sub-diagram

fn sweep_out<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    let channel = *s.data;
    s.board.motor(channel).run(Direction::Clockwise, SWEEP_POWER);
    Wiper::SweepOutWait
}

fn sweep_out_wait<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    let channel = *s.data;
    if s.board.far_switch(channel).is_pressed() {
        Wiper::SweepBack
    } else {
        s.stay()
    }
}

fn sweep_back<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    let channel = *s.data;
    s.board
        .motor(channel)
        .run(Direction::CounterClockwise, SWEEP_POWER);
    Wiper::SweepBackWait
}

fn sweep_back_wait<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    let channel = *s.data;
    if s.board.home_switch(channel).is_pressed() {
        Wiper::SweepDone
    } else {
        s.stay()
    }
}

fn sweep_done<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    let channel = *s.data;
    s.board.motor(channel).stop();
    s.mark();
    s.resume(Wiper::Idle)
}

// Spray sub-diagram

fn spray_on<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    let channel = *s.data;
    s.board.pump(channel).on(100);
    s.mark();
    Wiper::SprayWait
}

fn spray_wait<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    if s.timed_out(SPRAY_MS) {
        Wiper::SprayOff
    } else {
        s.stay()
    }
}

fn spray_off<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    let channel = *s.data;
    s.board.pump(channel).off();
    s.resume(Wiper::Idle)
}

// Programs

fn short_pause<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    if s.timed_out(SHORT_PAUSE_MS) {
        Wiper::Idle
    } else {
        s.stay()
    }
}

fn long_pause<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    if s.timed_out(LONG_PAUSE_MS) {
        Wiper::Idle
    } else {
        s.stay()
    }
}

fn wash_first_sweep<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    s.call(Wiper::SweepOut, Wiper::WashSecondSweep)
}

fn wash_second_sweep<B: WiperBoard>(s: &mut S<'_, B>) -> Wiper {
    s.call(Wiper::SweepOut, Wiper::Idle)
}
