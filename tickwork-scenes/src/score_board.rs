//! Two-team score board
//!
//! Each team has its own machine, its own button and its own display. A
//! click on the team button adds one point. The reset button is shared:
//! the red machine peeks at its click edge, the blue machine (registered
//! after red) peeks and then consumes it. A single click zeroes both
//! scores in the same tick and the next reset click starts a fresh edge.

use tickwork_core::error::ConfigError;
use tickwork_core::input::DebouncedInput;
use tickwork_core::machine::{StateMachine, Step};
use tickwork_core::states;
use tickwork_core::time::Millis;
use tickwork_core::traits::SegmentDisplay;
use tickwork_hal::InputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Team {
    Red,
    Blue,
}

/// Devices the score board needs
pub trait ScoreBoard {
    type Pin: InputPin;
    type Display: SegmentDisplay;

    fn team_button(&mut self, team: Team) -> &mut DebouncedInput<Self::Pin>;
    fn reset_button(&mut self) -> &mut DebouncedInput<Self::Pin>;
    fn display(&mut self, team: Team) -> &mut Self::Display;
}

/// Per-team machine data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub team: Team,
    pub score: u16,
    /// Last observer of the shared reset edge; clears it after acting
    pub consumes_reset: bool,
    /// Transition time of the last reset click already acted on
    handled_reset: Option<Millis>,
}

impl Counter {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            score: 0,
            consumes_reset: false,
            handled_reset: None,
        }
    }
}

states! {
    pub enum Score {
        Reset,
        Counting,
        Increment,
    }
}

pub type ScoreMachine<B> = StateMachine<Score, B, Counter>;

type S<'a, B> = Step<'a, Score, B, Counter>;

/// Build the counter machine for `team`
pub fn machine<B: ScoreBoard>(team: Team) -> Result<ScoreMachine<B>, ConfigError> {
    let name = match team {
        Team::Red => "score_red",
        Team::Blue => "score_blue",
    };
    let counter = Counter {
        consumes_reset: team == Team::Blue,
        ..Counter::new(team)
    };
    StateMachine::builder(name, Score::Reset, counter)
        .state(Score::Reset, reset::<B>)
        .state(Score::Counting, counting::<B>)
        .state(Score::Increment, increment::<B>)
        .build()
}

fn show<B: ScoreBoard>(s: &mut S<'_, B>) {
    let team = s.data.team;
    let score = s.data.score;
    s.board.display(team).show_number(score as i32);
}

fn reset<B: ScoreBoard>(s: &mut S<'_, B>) -> Score {
    s.data.score = 0;
    show(s);
    Score::Counting
}

/// Zero the score on a new reset edge
///
/// Every counter peeks; only the consuming counter clears the edge, after
/// the others have seen it earlier in the same tick.
fn check_reset<B: ScoreBoard>(s: &mut S<'_, B>) {
    let reset = s.board.reset_button();
    if !reset.is_just_released() {
        return;
    }
    let edge = reset.changed_at();
    if s.data.consumes_reset {
        reset.consume_press_and_release();
    }
    if s.data.handled_reset != Some(edge) {
        s.data.handled_reset = Some(edge);
        s.data.score = 0;
        show(s);
    }
}

fn counting<B: ScoreBoard>(s: &mut S<'_, B>) -> Score {
    check_reset(s);
    let team = s.data.team;
    if s.board.team_button(team).consume_press_and_release() {
        return Score::Increment;
    }
    s.stay()
}

fn increment<B: ScoreBoard>(s: &mut S<'_, B>) -> Score {
    s.data.score = s.data.score.saturating_add(1);
    show(s);
    check_reset(s);
    Score::Counting
}
