//! Player racks and letter multisets.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::RACK_SIZE;
use crate::geometry::Move;

/// Multiset of letters as a frequency map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: BTreeMap<char, usize>,
}

impl LetterCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }

    /// Remove one `letter`. Returns `false` when none was left.
    pub fn remove(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) if *n > 1 => {
                *n -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&letter);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of letters counted with multiplicity.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `true` when every letter of `other` is available here at least as
    /// many times.
    pub fn covers(&self, other: &LetterCounts) -> bool {
        other.counts.iter().all(|(&letter, &n)| self.get(letter) >= n)
    }
}

impl FromIterator<char> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counts = LetterCounts::new();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}

impl Extend<char> for LetterCounts {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for letter in iter {
            self.add(letter);
        }
    }
}

/// A player's hand of at most [`RACK_SIZE`] tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Rack {
    tiles: Vec<char>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rack holding the letters of `letters`, uppercased.
    pub fn from_letters(letters: &str) -> Result<Self, BoardError> {
        let mut rack = Rack::new();
        for ch in letters.chars().flat_map(char::to_uppercase) {
            rack.push(ch)?;
        }
        Ok(rack)
    }

    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() >= RACK_SIZE
    }

    pub fn push(&mut self, tile: char) -> Result<(), BoardError> {
        if self.is_full() {
            return Err(BoardError::RackFull);
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Capacity is checked by the caller.
    pub(crate) fn push_unchecked(&mut self, tile: char) {
        self.tiles.push(tile);
    }

    /// Remove the first tile matching `letter`.
    pub fn remove(&mut self, letter: char) -> bool {
        match self.tiles.iter().position(|&t| t == letter) {
            Some(idx) => {
                self.tiles.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn counts(&self) -> LetterCounts {
        self.tiles.iter().copied().collect()
    }

    /// Take the tiles a committed `word` consumed. Letters listed in
    /// `overlap` were already on the board and are not charged to the rack.
    /// Returns the tiles removed.
    pub fn release(&mut self, word: &str, overlap: &str) -> Vec<char> {
        let mut needed: Vec<char> = word.chars().collect();
        for ch in overlap.chars() {
            if let Some(idx) = needed.iter().position(|&c| c == ch) {
                needed.remove(idx);
            }
        }
        needed.into_iter().filter(|&ch| self.remove(ch)).collect()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.tiles.iter().collect();
        f.write_str(&s)
    }
}

/// `true` when the rack, together with the board letters lying under the
/// move, holds every letter of the word.
pub fn can_spell(board: &Board, rack: &Rack, mv: &Move) -> bool {
    let mut available = rack.counts();
    available.extend(board.covered(mv).flatten());
    let needed: LetterCounts = mv.word().chars().collect();
    available.covers(&needed)
}
