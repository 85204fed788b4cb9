//! Turn sequencing: commits accepted moves, scores them and keeps racks and
//! the pool in step.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, MoveError, ValidationIssue, Verdict};
use crate::cross::{self, CrossWords};
use crate::dictionary::Dictionary;
use crate::geometry::{self, Move};
use crate::player::{MoveSource, Player};
use crate::scoring::{self, Score};
use crate::tiles::{LetterTable, TilePool};
use crate::validator::{self, FIRST_TURN};

/// Write `mv` onto `board` and return the letters that were already there,
/// in word order.
///
/// The write is all or nothing: the whole span is checked before any cell
/// changes.
pub fn commit(board: &mut Board, mv: &Move) -> Result<String, BoardError> {
    if !geometry::within_bounds(mv, board.dimensions()) {
        return Err(BoardError::MoveOutOfBounds);
    }
    let mut overlap = String::new();
    for (r, c, ch) in mv.cells() {
        match board.get(r, c)? {
            Some(existing) if existing != ch => {
                return Err(BoardError::CellOccupied {
                    row: r,
                    col: c,
                    letter: existing,
                })
            }
            Some(existing) => overlap.push(existing),
            None => {}
        }
    }
    for (r, c, ch) in mv.cells() {
        board.set(r, c, ch)?;
    }
    Ok(overlap)
}

/// Everything that happened in one accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub turn: u32,
    pub player: usize,
    pub mv: Move,
    /// New words credited to the player, sorted.
    pub words: Vec<String>,
    /// Letters of the word that were already on the board.
    pub overlap: String,
    /// Tiles taken off the rack.
    pub released: Vec<char>,
    pub score: Score,
}

/// How a game came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEnd {
    /// The pool ran dry.
    PoolExhausted,
    /// A move source stopped proposing moves.
    Abandoned,
}

/// Final standings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub players: Vec<Player>,
    pub turns_played: u32,
    pub end: GameEnd,
    /// Highest scorer; `None` on a tie for first place.
    pub winner: Option<String>,
}

/// Session state: board, pool, rules data, players and the turn counter.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    pool: TilePool,
    letters: LetterTable,
    dictionary: Dictionary,
    players: Vec<Player>,
    turn: u32,
    current: usize,
}

impl Game {
    /// New game on the standard board with a full pool.
    pub fn new<I, S>(letters: LetterTable, dictionary: Dictionary, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_board(Board::standard(), letters, dictionary, names)
    }

    /// New game on a caller-supplied board.
    pub fn with_board<I, S>(board: Board, letters: LetterTable, dictionary: Dictionary, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pool = TilePool::new(&letters);
        let players: Vec<Player> = names.into_iter().map(|n| Player::new(n.as_ref())).collect();
        log::info!(
            "new game: {} players, {} tiles, {} words",
            players.len(),
            pool.len(),
            dictionary.len()
        );
        Self {
            board,
            pool,
            letters,
            dictionary,
            players,
            turn: FIRST_TURN,
            current: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    pub fn letters(&self) -> &LetterTable {
        &self.letters
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Turn number of the next move; the opening move is turn 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Index of the player to move.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Mutable access to the player to move, e.g. to seed a rack.
    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current)
    }

    /// Top up the current player's rack from the pool.
    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        match self.players.get_mut(self.current) {
            Some(player) => self.pool.fill_rack(rng, player.rack_mut()),
            None => 0,
        }
    }

    /// Check `mv` for the current player without touching any state.
    pub fn validate(&self, mv: &Move) -> Verdict {
        match self.current_player() {
            Some(player) => validator::validate(&self.board, player.rack(), mv, &self.dictionary, self.turn),
            None => Verdict::from_iter([ValidationIssue::RackInsufficient]),
        }
    }

    /// Play `mv` for the current player: validate, resolve new words on the
    /// board as it stands, commit, score, release tiles, then pass the turn.
    pub fn play(&mut self, mv: &Move) -> Result<TurnReport, MoveError> {
        let verdict = self.validate(mv);
        if !verdict.is_accepted() {
            return Err(MoveError::Rejected(verdict));
        }
        let words = match cross::resolve(&self.board, mv, &self.dictionary) {
            CrossWords::Rejected => {
                return Err(Verdict::from_iter([ValidationIssue::InvalidPerpendicularWord]).into())
            }
            resolved => resolved.new_words(mv).unwrap_or_default(),
        };

        let overlap = commit(&mut self.board, mv)?;
        let score = scoring::score(&words, &self.letters, mv.word(), &overlap);
        let player = self
            .players
            .get_mut(self.current)
            .ok_or(BoardError::UnknownPlayer(self.current))?;
        let released = player.rack_mut().release(mv.word(), &overlap);
        player.add_points(score.total());
        log::info!(
            "turn {}: {} played {} for {} (total {})",
            self.turn,
            player.name(),
            mv,
            score,
            player.score()
        );

        let report = TurnReport {
            turn: self.turn,
            player: self.current,
            mv: mv.clone(),
            words,
            overlap,
            released,
            score,
        };
        self.turn += 1;
        self.current = (self.current + 1) % self.players.len();
        Ok(report)
    }

    /// Run the game to completion. `sources[i]` proposes moves for player
    /// `i`. Each round every player refills and then keeps proposing until a
    /// move is accepted; the game ends after the round in which the pool
    /// empties.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R, sources: &mut [Box<dyn MoveSource>]) -> GameSummary {
        if self.players.is_empty() || sources.len() < self.players.len() {
            log::warn!(
                "{} move sources for {} players; nothing to play",
                sources.len(),
                self.players.len()
            );
            return self.summary(GameEnd::Abandoned);
        }
        while !self.pool.is_empty() {
            for _ in 0..self.players.len() {
                self.refill(rng);
                let source = &mut sources[self.current];
                loop {
                    let Some(mv) = source.propose(self) else {
                        log::info!("{} stopped proposing moves", self.players[self.current].name());
                        return self.summary(GameEnd::Abandoned);
                    };
                    match self.play(&mv) {
                        Ok(report) => {
                            source.on_accepted(&report);
                            break;
                        }
                        Err(MoveError::Rejected(verdict)) => source.on_rejected(&mv, &verdict),
                        Err(MoveError::Board(err)) => {
                            log::warn!("move {} could not be written: {}", mv, err);
                            source.on_rejected(&mv, &Verdict::from_iter([ValidationIssue::BoardConflict]));
                        }
                    }
                }
            }
        }
        log::info!("pool exhausted after {} turns", self.turn - FIRST_TURN);
        self.summary(GameEnd::PoolExhausted)
    }

    /// Standings as they are now.
    pub fn summary(&self, end: GameEnd) -> GameSummary {
        let best = self.players.iter().map(Player::score).max();
        let leaders: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| Some(p.score()) == best)
            .collect();
        let winner = match leaders.as_slice() {
            [only] => Some(String::from(only.name())),
            _ => None,
        };
        GameSummary {
            players: self.players.clone(),
            turns_played: self.turn - FIRST_TURN,
            end,
            winner,
        }
    }
}
