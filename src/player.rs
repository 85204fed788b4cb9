use alloc::collections::VecDeque;
use alloc::string::String;

use crate::common::Verdict;
use crate::game::{Game, TurnReport};
use crate::geometry::Move;
use crate::rack::Rack;

/// A seat at the table: name, hand and running score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    rack: Rack,
    score: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            rack: Rack::new(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn rack_mut(&mut self) -> &mut Rack {
        &mut self.rack
    }

    /// Cumulative score. Never decreases.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score += points;
    }
}

/// Interface implemented by whatever supplies moves for a seat.
pub trait MoveSource {
    /// Propose the next move for the current player of `game`. `None` means
    /// the source has nothing more to offer and the game is abandoned.
    fn propose(&mut self, game: &Game) -> Option<Move>;

    /// Inform the source that its last proposal was refused.
    fn on_rejected(&mut self, _mv: &Move, _verdict: &Verdict) {}

    /// Inform the source that its last proposal was played.
    fn on_accepted(&mut self, _report: &TurnReport) {}
}

/// Plays a fixed list of moves in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
    rejections: usize,
}

impl ScriptedPlayer {
    pub fn new<I: IntoIterator<Item = Move>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            rejections: 0,
        }
    }

    /// Moves not yet proposed.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Proposals refused so far.
    pub fn rejections(&self) -> usize {
        self.rejections
    }
}

impl MoveSource for ScriptedPlayer {
    fn propose(&mut self, _game: &Game) -> Option<Move> {
        self.moves.pop_front()
    }

    fn on_rejected(&mut self, mv: &Move, verdict: &Verdict) {
        self.rejections += 1;
        log::debug!("scripted move {} refused: {}", mv, verdict);
    }
}
