//! Two-player whack-a-mole
//!
//! Three machines share the board:
//!
//! - `round`: waits for the start button, zeroes the scores, publishes the
//!   game-running flag for [`ROUND_MS`] and finally shows the result
//! - `player_one` / `player_two`: idle until the flag is set, then pop a
//!   board-chosen mole for [`POP_MS`] at a time and score a point when its
//!   button is pressed while it is up
//!
//! Each player owns five moles on consecutive servo channels (player one
//! 0-4, player two 5-9). Register `round` first so both players start
//! popping in the tick the round begins.

use tickwork_core::error::ConfigError;
use tickwork_core::input::DebouncedInput;
use tickwork_core::machine::{StateMachine, Step};
use tickwork_core::states;
use tickwork_core::time::Millis;
use tickwork_core::traits::{SegmentDisplay, ServoBank};
use tickwork_hal::InputPin;

/// Length of one round
pub const ROUND_MS: Millis = 60_000;

/// How long a mole stays up
pub const POP_MS: Millis = 1_000;

pub const MOLES_PER_PLAYER: u8 = 5;

/// Servo angles
pub const MOLE_UP: u8 = 90;
pub const MOLE_DOWN: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Servo channel of this player's `mole`
    pub fn channel(self, mole: u8) -> u8 {
        self.index() as u8 * MOLES_PER_PLAYER + mole
    }
}

/// State shared by the round and both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Game {
    pub running: bool,
    pub scores: [u16; 2],
}

impl Game {
    pub fn score(&self, player: Player) -> u16 {
        self.scores[player.index()]
    }

    pub fn winner(&self) -> Option<Player> {
        let [one, two] = self.scores;
        match one.cmp(&two) {
            core::cmp::Ordering::Greater => Some(Player::One),
            core::cmp::Ordering::Less => Some(Player::Two),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// Devices the game needs
pub trait MoleBoard {
    type Pin: InputPin;
    type Servos: ServoBank;
    type Display: SegmentDisplay;

    fn start_button(&mut self) -> &mut DebouncedInput<Self::Pin>;
    /// Button in front of `player`'s `mole` (0-4)
    fn mole_button(&mut self, player: Player, mole: u8) -> &mut DebouncedInput<Self::Pin>;
    fn servos(&mut self) -> &mut Self::Servos;
    fn display(&mut self, player: Player) -> &mut Self::Display;
    fn game(&mut self) -> &mut Game;
    /// Next mole to pop, any value (taken modulo the mole count)
    fn pick_mole(&mut self) -> u8;
}

/// Small xorshift generator for boards without a hardware RNG
#[derive(Debug, Clone)]
pub struct MoleRng {
    state: u32,
}

impl MoleRng {
    /// Seed with anything non-constant (boot time, ADC noise); zero is
    /// replaced by a fixed non-zero seed
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    pub fn next_mole(&mut self) -> u8 {
        (self.next_u32() % MOLES_PER_PLAYER as u32) as u8
    }
}

states! {
    pub enum Round {
        Ready,
        WaitStart,
        Begin,
        Playing,
        Finish,
    }
}

states! {
    pub enum Mole {
        Idle,
        Pop,
        WaitHit,
        Hit,
        WaitHide,
        Hide,
    }
}

/// Player machine data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Popper {
    pub player: Player,
    /// Mole currently up
    pub mole: u8,
}

pub type RoundMachine<B> = StateMachine<Round, B, ()>;
pub type PlayerMachine<B> = StateMachine<Mole, B, Popper>;

pub fn round<B: MoleBoard>() -> Result<RoundMachine<B>, ConfigError> {
    StateMachine::builder("round", Round::Ready, ())
        .state(Round::Ready, ready::<B>)
        .state(Round::WaitStart, wait_start::<B>)
        .state(Round::Begin, begin::<B>)
        .state(Round::Playing, playing::<B>)
        .state(Round::Finish, finish::<B>)
        .build()
}

pub fn player<B: MoleBoard>(player: Player) -> Result<PlayerMachine<B>, ConfigError> {
    let name = match player {
        Player::One => "player_one",
        Player::Two => "player_two",
    };
    StateMachine::builder(name, Mole::Idle, Popper { player, mole: 0 })
        .state(Mole::Idle, idle::<B>)
        .state(Mole::Pop, pop::<B>)
        .state(Mole::WaitHit, wait_hit::<B>)
        .state(Mole::Hit, hit::<B>)
        .state(Mole::WaitHide, wait_hide::<B>)
        .state(Mole::Hide, hide::<B>)
        .build()
}

type R<'a, B> = Step<'a, Round, B, ()>;
type P<'a, B> = Step<'a, Mole, B, Popper>;

fn hide_moles<B: MoleBoard>(board: &mut B, player: Player) {
    for mole in 0..MOLES_PER_PLAYER {
        board.servos().move_to(player.channel(mole), MOLE_DOWN);
    }
}

fn ready<B: MoleBoard>(s: &mut R<'_, B>) -> Round {
    s.board.game().running = false;
    hide_moles(s.board, Player::One);
    hide_moles(s.board, Player::Two);
    Round::WaitStart
}

fn wait_start<B: MoleBoard>(s: &mut R<'_, B>) -> Round {
    if s.board.start_button().is_pressed() {
        Round::Begin
    } else {
        s.stay()
    }
}

fn begin<B: MoleBoard>(s: &mut R<'_, B>) -> Round {
    let game = s.board.game();
    game.scores = [0; 2];
    game.running = true;
    s.board.display(Player::One).show_number(0);
    s.board.display(Player::Two).show_number(0);
    s.mark();
    #[cfg(feature = "defmt")]
    defmt::info!("round started");
    Round::Playing
}

fn playing<B: MoleBoard>(s: &mut R<'_, B>) -> Round {
    if s.timed_out(ROUND_MS) {
        s.board.game().running = false;
        Round::Finish
    } else {
        s.stay()
    }
}

fn finish<B: MoleBoard>(s: &mut R<'_, B>) -> Round {
    let game = *s.board.game();
    #[cfg(feature = "defmt")]
    defmt::info!("round over: {=u16} - {=u16}", game.scores[0], game.scores[1]);

    match game.winner() {
        Some(Player::One) => {
            s.board.display(Player::One).show_text("WIN");
            s.board.display(Player::Two).off();
        }
        Some(Player::Two) => {
            s.board.display(Player::One).off();
            s.board.display(Player::Two).show_text("WIN");
        }
        None => {
            s.board.display(Player::One).show_text("DRAW");
            s.board.display(Player::Two).show_text("DRAW");
        }
    }
    Round::Ready
}

fn running<B: MoleBoard>(s: &mut P<'_, B>) -> bool {
    s.board.game().running
}

fn idle<B: MoleBoard>(s: &mut P<'_, B>) -> Mole {
    if running(s) {
        Mole::Pop
    } else {
        s.stay()
    }
}

fn pop<B: MoleBoard>(s: &mut P<'_, B>) -> Mole {
    let mole = s.board.pick_mole() % MOLES_PER_PLAYER;
    s.data.mole = mole;
    let channel = s.data.player.channel(mole);
    s.board.servos().move_to(channel, MOLE_UP);
    s.mark();
    Mole::WaitHit
}

fn wait_hit<B: MoleBoard>(s: &mut P<'_, B>) -> Mole {
    let Popper { player, mole } = *s.data;
    if !running(s) || s.timed_out(POP_MS) {
        Mole::Hide
    } else if s.board.mole_button(player, mole).is_pressed() {
        Mole::Hit
    } else {
        s.stay()
    }
}

fn hit<B: MoleBoard>(s: &mut P<'_, B>) -> Mole {
    let player = s.data.player;
    let game = s.board.game();
    let slot = &mut game.scores[player.index()];
    *slot = slot.saturating_add(1);
    let score = *slot;
    s.board.display(player).show_number(score as i32);
    Mole::WaitHide
}

fn wait_hide<B: MoleBoard>(s: &mut P<'_, B>) -> Mole {
    if !running(s) || s.timed_out(POP_MS) {
        Mole::Hide
    } else {
        s.stay()
    }
}

fn hide<B: MoleBoard>(s: &mut P<'_, B>) -> Mole {
    hide_moles(s.board, s.data.player);
    if running(s) {
        Mole::Pop
    } else {
        Mole::Idle
    }
}
