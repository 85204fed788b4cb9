//! Discovery of the perpendicular words a placement forms.
//!
//! For every letter the move newly lays down, the maximal run of filled
//! cells through it along the other axis is read off a projection of the
//! move onto the board. Cells that already held a letter are skipped: the
//! lines through them were validated when they were played.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::board::{Board, Projection};
use crate::dictionary::Dictionary;
use crate::geometry::{Move, Orientation};

/// What a placement does to the perpendicular lines it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossWords {
    /// No perpendicular word is formed; the placed word is the only new one.
    NoPerpendicular,
    /// Perpendicular words were formed and all of them are valid. Holds the
    /// placed word and every perpendicular word, sorted.
    Formed(Vec<String>),
    /// At least one formed word is not in the dictionary.
    Rejected,
}

impl CrossWords {
    /// Every new word the move creates, or `None` when rejected.
    pub fn new_words(&self, mv: &Move) -> Option<Vec<String>> {
        match self {
            CrossWords::NoPerpendicular => Some(vec![String::from(mv.word())]),
            CrossWords::Formed(words) => Some(words.clone()),
            CrossWords::Rejected => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, CrossWords::Rejected)
    }
}

/// Raw perpendicular runs of two letters or more, in word order, without
/// any dictionary check.
pub fn perpendicular_runs(board: &Board, mv: &Move) -> Vec<String> {
    let projection = board.project(mv);
    let axis = mv.orientation().perpendicular();
    let (rows, cols) = board.dimensions();
    mv.cells()
        .filter(|&(r, c, _)| r < rows && c < cols)
        .filter(|&(r, c, _)| board.letter_at(r, c).is_none())
        .map(|(r, c, _)| run_through(&projection, r, c, axis))
        .filter(|run| run.chars().count() >= 2)
        .collect()
}

/// Resolve the perpendicular words formed by `mv` and check them, together
/// with the placed word, against `dict`.
pub fn resolve(board: &Board, mv: &Move, dict: &Dictionary) -> CrossWords {
    let mut words = perpendicular_runs(board, mv);
    if words.is_empty() {
        log::debug!("{}: no perpendicular words", mv);
        return CrossWords::NoPerpendicular;
    }
    words.push(String::from(mv.word()));
    if let Some(bad) = words.iter().find(|w| !dict.contains(w)) {
        log::debug!("{}: formed word {} is not playable", mv, bad);
        return CrossWords::Rejected;
    }
    words.sort();
    log::debug!("{}: forms {:?}", mv, words);
    CrossWords::Formed(words)
}

/// Contiguous letters through (row, col) along `axis` on the projected board.
fn run_through(projection: &Projection<'_>, row: usize, col: usize, axis: Orientation) -> String {
    let (rows, cols) = projection.board().dimensions();
    let (mut r, mut c) = (row, col);
    loop {
        let prev = match axis {
            Orientation::Horizontal if c > 0 => (r, c - 1),
            Orientation::Vertical if r > 0 => (r - 1, c),
            _ => break,
        };
        if !projection.is_occupied(prev.0, prev.1) {
            break;
        }
        (r, c) = prev;
    }
    let mut run = String::new();
    while r < rows && c < cols {
        let Some(ch) = projection.letter_at(r, c) else {
            break;
        };
        run.push(ch);
        (r, c) = axis.advance(r, c, 1);
    }
    run
}
