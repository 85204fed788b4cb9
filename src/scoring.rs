//! Points for an accepted move.

use core::fmt;

use crate::config::{BINGO_BONUS, RACK_SIZE};
use crate::tiles::LetterTable;

/// Points earned by one move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Sum of letter values over every new word.
    pub base: u32,
    /// The whole rack went down in one move.
    pub bingo: bool,
}

impl Score {
    pub fn total(&self) -> u32 {
        if self.bingo {
            self.base + BINGO_BONUS
        } else {
            self.base
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bingo {
            write!(f, "{} (+{} bingo)", self.total(), BINGO_BONUS)
        } else {
            write!(f, "{}", self.total())
        }
    }
}

/// Sum of letter values across `words`. Unknown letters score nothing.
pub fn word_points<S: AsRef<str>>(words: &[S], table: &LetterTable) -> u32 {
    words
        .iter()
        .flat_map(|w| w.as_ref().chars())
        .map(|ch| table.value(ch))
        .sum()
}

/// `true` when more than `RACK_SIZE - 1` of the word's letters came from the
/// rack, i.e. a full rack was played.
pub fn is_bingo(word_len: usize, overlap_len: usize) -> bool {
    word_len > overlap_len + (RACK_SIZE - 1)
}

/// Score `words` (the new words of one move). `placed` is the word the
/// player laid and `overlap` the letters it reused from the board.
pub fn score<S: AsRef<str>>(words: &[S], table: &LetterTable, placed: &str, overlap: &str) -> Score {
    Score {
        base: word_points(words, table),
        bingo: is_bingo(placed.chars().count(), overlap.chars().count()),
    }
}
