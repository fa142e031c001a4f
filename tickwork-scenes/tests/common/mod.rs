//! Simulated hardware shared by the scene tests
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use tickwork_core::scheduler::{Board, MachineSet, Scheduler};
use tickwork_core::time::{Clock, MockClock};
use tickwork_core::traits::{DcMotor, Dimmable, Direction, SegmentDisplay, ServoBank};
use tickwork_hal::InputPin;

/// Input level shared between the test and the board
#[derive(Debug, Clone, Default)]
pub struct SimPin(Rc<Cell<bool>>);

impl SimPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, high: bool) {
        self.0.set(high);
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Shown {
    #[default]
    Blank,
    Number(i32),
    Text(String),
}

#[derive(Debug, Default)]
pub struct SimDisplay {
    pub shown: Shown,
}

impl SegmentDisplay for SimDisplay {
    fn show_number(&mut self, value: i32) {
        self.shown = Shown::Number(value);
    }

    fn show_text(&mut self, text: &str) {
        self.shown = Shown::Text(text.into());
    }

    fn off(&mut self) {
        self.shown = Shown::Blank;
    }
}

#[derive(Debug, Default)]
pub struct SimLamp {
    pub level: u8,
    /// Level after every command
    pub history: Vec<u8>,
}

impl Dimmable for SimLamp {
    fn on(&mut self, percent: u8) {
        self.level = percent.min(100);
        self.history.push(self.level);
    }

    fn off(&mut self) {
        self.level = 0;
        self.history.push(0);
    }

    fn level(&self) -> u8 {
        self.level
    }
}

#[derive(Debug, Default)]
pub struct SimMotor {
    pub command: Option<(Direction, u8)>,
    /// Every command that changed the output
    pub history: Vec<Option<(Direction, u8)>>,
}

impl SimMotor {
    fn record(&mut self, command: Option<(Direction, u8)>) {
        if self.command != command {
            self.history.push(command);
        }
        self.command = command;
    }

    /// Number of clockwise starts
    pub fn sweeps(&self) -> usize {
        self.history
            .iter()
            .filter(|c| matches!(c, Some((Direction::Clockwise, _))))
            .count()
    }
}

impl DcMotor for SimMotor {
    fn run(&mut self, direction: Direction, percent: u8) {
        self.record(Some((direction, percent)));
    }

    fn stop(&mut self) {
        self.record(None);
    }

    fn command(&self) -> Option<(Direction, u8)> {
        self.command
    }
}

#[derive(Debug)]
pub struct SimServos {
    pub angles: [Option<u8>; 10],
}

impl Default for SimServos {
    fn default() -> Self {
        Self { angles: [None; 10] }
    }
}

impl SimServos {
    pub fn up(&self) -> Vec<u8> {
        (0..10u8)
            .filter(|&c| self.angles[c as usize].is_some_and(|a| a > 0))
            .collect()
    }
}

impl ServoBank for SimServos {
    fn channels(&self) -> u8 {
        10
    }

    fn move_to(&mut self, channel: u8, degrees: u8) {
        if let Some(slot) = self.angles.get_mut(channel as usize) {
            *slot = Some(degrees);
        }
    }

    fn angle(&self, channel: u8) -> Option<u8> {
        self.angles.get(channel as usize).copied().flatten()
    }
}

/// Tick once per millisecond for `ms` milliseconds
pub fn run<B: Board, M: MachineSet<B>>(scheduler: &mut Scheduler<B, M>, clock: &MockClock, ms: u32) {
    for _ in 0..ms {
        scheduler.tick(clock.now_ms());
        clock.advance(1);
    }
}

/// Press for 50 ms, release for 50 ms
pub fn click<B: Board, M: MachineSet<B>>(
    scheduler: &mut Scheduler<B, M>,
    clock: &MockClock,
    pin: &SimPin,
) {
    pin.set(true);
    run(scheduler, clock, 50);
    pin.set(false);
    run(scheduler, clock, 50);
}
