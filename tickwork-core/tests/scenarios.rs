//! End-to-end runtime scenarios against mock pins and a mock clock

use std::cell::Cell;

use tickwork_core::input::{DebouncedInput, InputBank, InputId};
use tickwork_core::machine::{StateMachine, Step};
use tickwork_core::scheduler::{Board, Scheduler};
use tickwork_core::states;
use tickwork_core::time::{Clock, Millis, MockClock};
use tickwork_core::traits::{DcMotor, Dimmable, Direction};

/// One button, one lamp flag and a count of lamp commands
struct SwitchBoard<'a> {
    inputs: InputBank<&'a Cell<bool>, 1>,
    button: InputId,
    lamp: bool,
}

impl<'a> SwitchBoard<'a> {
    fn new(pin: &'a Cell<bool>) -> Self {
        let mut inputs = InputBank::new();
        let button = inputs.add(DebouncedInput::with_defaults(pin)).unwrap();
        Self {
            inputs,
            button,
            lamp: false,
        }
    }

    fn button(&mut self) -> &mut DebouncedInput<&'a Cell<bool>> {
        &mut self.inputs[self.button]
    }
}

impl Board for SwitchBoard<'_> {
    fn refresh_inputs(&mut self, now: Millis) {
        self.inputs.refresh_all(now);
    }
}

states! {
    enum Light {
        Off,
        On,
    }
}

fn light_off(s: &mut Step<'_, Light, SwitchBoard<'_>, ()>) -> Light {
    s.board.lamp = false;
    if s.board.button().is_pressed() {
        Light::On
    } else {
        s.stay()
    }
}

fn light_on(s: &mut Step<'_, Light, SwitchBoard<'_>, ()>) -> Light {
    s.board.lamp = true;
    if s.board.button().is_pressed() {
        s.stay()
    } else {
        Light::Off
    }
}

fn light() -> StateMachine<Light, SwitchBoard<'static>, ()> {
    StateMachine::builder("light", Light::Off, ())
        .state(Light::Off, light_off)
        .state(Light::On, light_on)
        .build()
        .unwrap()
}

#[test]
fn chatter_never_switches_the_light() {
    let pin: &'static Cell<bool> = Box::leak(Box::new(Cell::new(false)));
    let clock = MockClock::new();
    let mut scheduler = Scheduler::start(SwitchBoard::new(pin), (light(),)).unwrap();

    // Toggle the raw level every 5 ms for two seconds
    for i in 0..2_000u32 {
        pin.set((i / 5) % 2 == 1);
        scheduler.tick(clock.now_ms());
        assert!(scheduler.board_mut().button().is_released());
        assert!(!scheduler.board().lamp);
        clock.advance(1);
    }
    assert_eq!(scheduler.machines().0.transitions(), 0);

    // A clean press is still recognised afterwards
    pin.set(true);
    for _ in 0..40 {
        scheduler.tick(clock.now_ms());
        clock.advance(1);
    }
    assert!(scheduler.board().lamp);
}

states! {
    enum Popup {
        Idle,
        Show,
        Wait,
        Done,
    }
}

fn popup_idle(s: &mut Step<'_, Popup, SwitchBoard<'_>, ()>) -> Popup {
    if s.board.button().is_pressed() {
        Popup::Show
    } else {
        s.stay()
    }
}

fn popup_show(s: &mut Step<'_, Popup, SwitchBoard<'_>, ()>) -> Popup {
    s.board.lamp = true;
    s.mark();
    Popup::Wait
}

fn popup_wait(s: &mut Step<'_, Popup, SwitchBoard<'_>, ()>) -> Popup {
    if s.timed_out(1_000) {
        s.board.lamp = false;
        Popup::Done
    } else {
        s.stay()
    }
}

fn popup_done(s: &mut Step<'_, Popup, SwitchBoard<'_>, ()>) -> Popup {
    s.stay()
}

#[test]
fn timed_popup_leaves_once_while_button_held() {
    let pin: &'static Cell<bool> = Box::leak(Box::new(Cell::new(true)));
    let popup: StateMachine<Popup, SwitchBoard<'static>, ()> =
        StateMachine::builder("popup", Popup::Idle, ())
            .state(Popup::Idle, popup_idle)
            .state(Popup::Show, popup_show)
            .state(Popup::Wait, popup_wait)
            .state(Popup::Done, popup_done)
            .build()
            .unwrap();
    let mut scheduler = Scheduler::start(SwitchBoard::new(pin), (popup,)).unwrap();

    let mut shown_at = None;
    let mut left_at = Vec::new();
    let mut previous = Popup::Idle;

    // Hold the button for the whole two seconds
    for t in 0..2_000u32 {
        scheduler.tick(t);
        let current = scheduler.machines().0.current();
        if current == Popup::Wait && previous != Popup::Wait {
            shown_at = Some(t);
        }
        if previous == Popup::Wait && current != Popup::Wait {
            left_at.push(t);
        }
        previous = current;
    }

    let shown_at = shown_at.unwrap();
    assert_eq!(left_at.len(), 1);
    assert_eq!(left_at[0] - shown_at, 1_000);
    assert_eq!(scheduler.machines().0.current(), Popup::Done);
    assert!(!scheduler.board().lamp);
    assert!(scheduler.board_mut().button().is_pressed());
}

states! {
    enum Guarded {
        WaitForever,
        Never,
    }
}

fn wait_forever(s: &mut Step<'_, Guarded, SwitchBoard<'_>, ()>) -> Guarded {
    // The pin is never driven, so this never completes a click
    if s.board.button().consume_press_and_release() {
        Guarded::Never
    } else {
        s.stay()
    }
}

fn never(s: &mut Step<'_, Guarded, SwitchBoard<'_>, ()>) -> Guarded {
    s.stay()
}

#[test]
fn unmet_condition_waits_indefinitely() {
    let pin: &'static Cell<bool> = Box::leak(Box::new(Cell::new(false)));
    let machine: StateMachine<Guarded, SwitchBoard<'static>, ()> =
        StateMachine::builder("guarded", Guarded::WaitForever, ())
            .state(Guarded::WaitForever, wait_forever)
            .state(Guarded::Never, never)
            .build()
            .unwrap();
    let clock = MockClock::starting_at(u32::MAX - 5_000);
    let mut scheduler = Scheduler::start(SwitchBoard::new(pin), (machine,)).unwrap();

    for _ in 0..10_000 {
        scheduler.tick(clock.now_ms());
        clock.advance(1);
        assert_eq!(scheduler.machines().0.current(), Guarded::WaitForever);
    }

    assert_eq!(scheduler.stats().ticks, 10_000);
    assert_eq!(scheduler.machines().0.transitions(), 0);
}

/// Records every command a state function issues
#[derive(Default)]
struct Rig {
    level: u8,
    motor: Option<(Direction, u8)>,
    log: Vec<(u8, Option<(Direction, u8)>)>,
}

impl Dimmable for Rig {
    fn on(&mut self, percent: u8) {
        self.level = percent.min(100);
    }

    fn off(&mut self) {
        self.level = 0;
    }

    fn level(&self) -> u8 {
        self.level
    }
}

impl DcMotor for Rig {
    fn run(&mut self, direction: Direction, percent: u8) {
        self.motor = (percent > 0).then_some((direction, percent.min(100)));
    }

    fn stop(&mut self) {
        self.motor = None;
    }

    fn command(&self) -> Option<(Direction, u8)> {
        self.motor
    }
}

impl Board for Rig {
    fn refresh_inputs(&mut self, _now: Millis) {}
}

states! {
    enum Hold {
        Driving,
    }
}

fn driving(s: &mut Step<'_, Hold, Rig, ()>) -> Hold {
    s.board.on(60);
    s.board.run(Direction::Clockwise, 40);
    let entry = (s.board.level(), s.board.command());
    s.board.log.push(entry);
    s.stay()
}

#[test]
fn repeated_commands_leave_devices_unchanged() {
    let machine: StateMachine<Hold, Rig, ()> = StateMachine::builder("hold", Hold::Driving, ())
        .state(Hold::Driving, driving)
        .build()
        .unwrap();
    let clock = MockClock::new();
    let mut scheduler = Scheduler::start(Rig::default(), (machine,)).unwrap();

    for _ in 0..50 {
        scheduler.tick(clock.now_ms());
        clock.advance(1);
    }

    let rig = scheduler.board();
    assert_eq!(rig.log.len(), 50);
    assert!(rig.log.iter().all(|e| *e == (60, Some((Direction::Clockwise, 40)))));
    assert_eq!(rig.level(), 60);
    assert!(rig.is_running());
    assert_eq!(scheduler.machines().0.transitions(), 0);
}
