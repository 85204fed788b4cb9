//! Move legality: composes geometry, rack, dictionary and perpendicular
//! checks into a single [`Verdict`].

use crate::board::Board;
use crate::common::{ValidationIssue, Verdict};
use crate::cross::{self, CrossWords};
use crate::dictionary::Dictionary;
use crate::geometry::{self, Move};
use crate::rack::{self, Rack};

/// Turn number of the opening move.
pub const FIRST_TURN: u32 = 1;

/// `true` when every cell of `mv` is empty or already holds the letter the
/// word puts there. Bounds must already hold.
pub fn no_conflict(board: &Board, mv: &Move) -> bool {
    mv.cells()
        .all(|(r, c, ch)| board.letter_at(r, c).map_or(true, |existing| existing == ch))
}

/// `true` when the word runs over at least one letter already on the board.
pub fn touches_board(board: &Board, mv: &Move) -> bool {
    board.covered(mv).any(|cell| cell.is_some())
}

/// Check `mv` against every rule for `turn`. Nothing is mutated.
///
/// Bounds come first and short-circuit: a move off the board reports only
/// [`ValidationIssue::OutOfBounds`]. Otherwise every violated rule is
/// reported.
pub fn validate(board: &Board, rack: &Rack, mv: &Move, dict: &Dictionary, turn: u32) -> Verdict {
    let mut verdict = Verdict::accepted();
    if !geometry::within_bounds(mv, board.dimensions()) {
        verdict.flag(ValidationIssue::OutOfBounds);
        log::debug!("turn {}: {} rejected: {}", turn, mv, verdict);
        return verdict;
    }

    verdict.require(rack::can_spell(board, rack, mv), ValidationIssue::RackInsufficient);
    verdict.require(dict.contains(mv.word()), ValidationIssue::NotInDictionary);
    verdict.require(no_conflict(board, mv), ValidationIssue::BoardConflict);

    if turn <= FIRST_TURN {
        verdict.require(
            geometry::crosses_center(mv, board.dimensions()),
            ValidationIssue::MissingCenterCrossing,
        );
    } else {
        match cross::resolve(board, mv, dict) {
            CrossWords::NoPerpendicular => {
                verdict.require(touches_board(board, mv), ValidationIssue::NoAnchor);
            }
            CrossWords::Formed(_) => {}
            CrossWords::Rejected => {
                verdict.flag(ValidationIssue::InvalidPerpendicularWord);
            }
        }
    }

    if verdict.is_accepted() {
        log::debug!("turn {}: {} accepted", turn, mv);
    } else {
        log::debug!("turn {}: {} rejected: {}", turn, mv, verdict);
    }
    verdict
}
