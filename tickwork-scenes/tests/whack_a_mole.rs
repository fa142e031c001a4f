//! Round and player machines over simulated servos and buttons

mod common;

use common::{run, Shown, SimDisplay, SimPin, SimServos};
use tickwork_core::traits::ServoBank;
use tickwork_core::input::{DebouncedInput, InputBank, InputId};
use tickwork_core::scheduler::{Board, Scheduler};
use tickwork_core::time::{Millis, MockClock};
use tickwork_scenes::whack_a_mole::{
    self, Game, Mole, MoleBoard, Player, PlayerMachine, Round, RoundMachine, MOLES_PER_PLAYER,
    MOLE_DOWN, MOLE_UP, ROUND_MS,
};

struct Arcade {
    inputs: InputBank<SimPin, 11>,
    start: InputId,
    moles: [InputId; 10],
    servos: SimServos,
    displays: [SimDisplay; 2],
    game: Game,
    picks: Vec<u8>,
    next_pick: usize,
}

impl MoleBoard for Arcade {
    type Pin = SimPin;
    type Servos = SimServos;
    type Display = SimDisplay;

    fn start_button(&mut self) -> &mut DebouncedInput<SimPin> {
        &mut self.inputs[self.start]
    }

    fn mole_button(&mut self, player: Player, mole: u8) -> &mut DebouncedInput<SimPin> {
        let id = self.moles[player.channel(mole) as usize];
        &mut self.inputs[id]
    }

    fn servos(&mut self) -> &mut SimServos {
        &mut self.servos
    }

    fn display(&mut self, player: Player) -> &mut SimDisplay {
        &mut self.displays[player.index()]
    }

    fn game(&mut self) -> &mut Game {
        &mut self.game
    }

    fn pick_mole(&mut self) -> u8 {
        let pick = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        pick
    }
}

impl Board for Arcade {
    fn refresh_inputs(&mut self, now: Millis) {
        self.inputs.refresh_all(now);
    }
}

struct Buttons {
    start: SimPin,
    moles: Vec<SimPin>,
}

impl Buttons {
    fn mole(&self, player: Player, mole: u8) -> &SimPin {
        &self.moles[player.channel(mole) as usize]
    }
}

type Machines = (
    RoundMachine<Arcade>,
    PlayerMachine<Arcade>,
    PlayerMachine<Arcade>,
);
type Rig = Scheduler<Arcade, Machines>;

fn rig() -> (Buttons, Rig) {
    let start = SimPin::new();
    let moles: Vec<SimPin> = (0..10).map(|_| SimPin::new()).collect();

    let mut inputs = InputBank::new();
    let start_id = inputs.add(DebouncedInput::with_defaults(start.clone())).unwrap();
    let mut mole_ids = [start_id; 10];
    for (slot, pin) in mole_ids.iter_mut().zip(&moles) {
        *slot = inputs.add(DebouncedInput::with_defaults(pin.clone())).unwrap();
    }

    let board = Arcade {
        inputs,
        start: start_id,
        moles: mole_ids,
        servos: SimServos::default(),
        displays: Default::default(),
        game: Game::default(),
        picks: vec![0, 1, 2, 3, 4],
        next_pick: 0,
    };
    let machines = (
        whack_a_mole::round().unwrap(),
        whack_a_mole::player(Player::One).unwrap(),
        whack_a_mole::player(Player::Two).unwrap(),
    );
    (Buttons { start, moles }, Scheduler::start(board, machines).unwrap())
}

fn start_round(scheduler: &mut Rig, clock: &MockClock, buttons: &Buttons) {
    buttons.start.set(true);
    run(scheduler, clock, 40);
    buttons.start.set(false);
}

#[test]
fn players_idle_until_the_round_starts() {
    let (_buttons, mut scheduler) = rig();
    let clock = MockClock::new();

    run(&mut scheduler, &clock, 500);

    let (round, one, two) = scheduler.machines();
    assert_eq!(round.current(), Round::WaitStart);
    assert_eq!(one.current(), Mole::Idle);
    assert_eq!(two.current(), Mole::Idle);
    assert!(!scheduler.board().game.running);
    assert!(scheduler.board().servos.up().is_empty());
    assert_eq!(scheduler.board().servos.angle(0), Some(MOLE_DOWN));
}

#[test]
fn start_pops_one_mole_per_player() {
    let (buttons, mut scheduler) = rig();
    let clock = MockClock::new();

    start_round(&mut scheduler, &clock, &buttons);

    let (round, one, two) = scheduler.machines();
    assert_eq!(round.current(), Round::Playing);
    assert_eq!(one.current(), Mole::WaitHit);
    assert_eq!(two.current(), Mole::WaitHit);
    assert!(scheduler.board().game.running);

    // Player one picked mole 0, player two mole 1
    assert_eq!(scheduler.board().servos.up(), vec![0, Player::Two.channel(1)]);
    assert_eq!(scheduler.board().servos.angle(0), Some(MOLE_UP));
    assert_eq!(scheduler.board().displays[0].shown, Shown::Number(0));
    assert_eq!(scheduler.board().displays[1].shown, Shown::Number(0));
}

#[test]
fn moles_rotate_every_pop() {
    let (buttons, mut scheduler) = rig();
    let clock = MockClock::new();

    start_round(&mut scheduler, &clock, &buttons);
    assert_eq!(scheduler.machines().1.data().mole, 0);

    run(&mut scheduler, &clock, 1_000);
    assert_eq!(scheduler.machines().1.data().mole, 2);
    assert_eq!(scheduler.board().servos.up().len(), 2);
}

#[test]
fn holding_a_mole_button_scores_once_per_pop() {
    let (buttons, mut scheduler) = rig();
    let clock = MockClock::new();

    start_round(&mut scheduler, &clock, &buttons);
    buttons.mole(Player::One, 0).set(true);
    run(&mut scheduler, &clock, 3_000);

    let game = scheduler.board().game;
    assert_eq!(game.score(Player::One), 1);
    assert_eq!(game.score(Player::Two), 0);
    assert_eq!(scheduler.board().displays[0].shown, Shown::Number(1));
}

#[test]
fn lowered_moles_do_not_score() {
    let (buttons, mut scheduler) = rig();
    let clock = MockClock::new();

    start_round(&mut scheduler, &clock, &buttons);
    // Player two's mole 1 is up, mole 4 is not
    buttons.mole(Player::Two, 4).set(true);
    run(&mut scheduler, &clock, 500);

    assert_eq!(scheduler.board().game.score(Player::Two), 0);
}

#[test]
fn round_end_shows_the_winner() {
    let (buttons, mut scheduler) = rig();
    let clock = MockClock::new();

    start_round(&mut scheduler, &clock, &buttons);
    buttons.mole(Player::One, 0).set(true);
    run(&mut scheduler, &clock, 500);
    buttons.mole(Player::One, 0).set(false);

    run(&mut scheduler, &clock, ROUND_MS + 500);

    let board = scheduler.board();
    assert!(!board.game.running);
    assert_eq!(board.displays[0].shown, Shown::Text("WIN".into()));
    assert_eq!(board.displays[1].shown, Shown::Blank);
    assert!(board.servos.up().is_empty());

    let (round, one, two) = scheduler.machines();
    assert_eq!(round.current(), Round::WaitStart);
    assert_eq!(one.current(), Mole::Idle);
    assert_eq!(two.current(), Mole::Idle);
}

#[test]
fn tied_round_is_a_draw_and_can_restart() {
    let (buttons, mut scheduler) = rig();
    let clock = MockClock::new();

    start_round(&mut scheduler, &clock, &buttons);
    run(&mut scheduler, &clock, ROUND_MS + 100);

    assert_eq!(scheduler.board().displays[0].shown, Shown::Text("DRAW".into()));
    assert_eq!(scheduler.board().displays[1].shown, Shown::Text("DRAW".into()));

    start_round(&mut scheduler, &clock, &buttons);
    assert!(scheduler.board().game.running);
    assert_eq!(scheduler.board().displays[0].shown, Shown::Number(0));
    assert_eq!(
        scheduler.board().servos.up().len(),
        2,
        "one mole per player out of {}",
        MOLES_PER_PLAYER * 2
    );
}
