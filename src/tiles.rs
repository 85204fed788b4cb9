//! Letter distribution and the shared tile pool.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use rand::Rng;

use crate::config::{RACK_SIZE, STANDARD_LETTERS};
use crate::rack::Rack;

/// One letter of the distribution: how many tiles exist and what each scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterSpec {
    letter: char,
    count: usize,
    value: u32,
}

impl LetterSpec {
    pub const fn new(letter: char, count: usize, value: u32) -> Self {
        Self {
            letter,
            count,
            value,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Number of tiles carrying this letter.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Points scored per occurrence.
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Letter → (occurrences, points) table seeding the pool and the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterTable {
    specs: BTreeMap<char, LetterSpec>,
}

impl LetterTable {
    /// Build a table; a later entry for the same letter replaces the earlier.
    pub fn from_specs<I: IntoIterator<Item = LetterSpec>>(specs: I) -> Self {
        Self {
            specs: specs.into_iter().map(|s| (s.letter, s)).collect(),
        }
    }

    /// The built-in French distribution.
    pub fn standard() -> Self {
        Self::from_specs(STANDARD_LETTERS)
    }

    pub fn get(&self, letter: char) -> Option<&LetterSpec> {
        self.specs.get(&letter)
    }

    /// Occurrences of `letter`, 0 when absent.
    pub fn count(&self, letter: char) -> usize {
        self.specs.get(&letter).map_or(0, LetterSpec::count)
    }

    /// Points for `letter`, 0 when absent.
    pub fn value(&self, letter: char) -> u32 {
        self.specs.get(&letter).map_or(0, LetterSpec::value)
    }

    /// Entries in letter order.
    pub fn iter(&self) -> impl Iterator<Item = &LetterSpec> {
        self.specs.values()
    }

    /// Total number of tiles across all letters.
    pub fn total_tiles(&self) -> usize {
        self.specs.values().map(LetterSpec::count).sum()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Tiles left to draw. Only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePool {
    tiles: Vec<char>,
}

impl TilePool {
    /// Pool holding `count` copies of every letter, in sorted order.
    pub fn new(table: &LetterTable) -> Self {
        let mut tiles = Vec::with_capacity(table.total_tiles());
        for spec in table.iter() {
            tiles.extend(core::iter::repeat(spec.letter).take(spec.count));
        }
        tiles.sort_unstable();
        Self { tiles }
    }

    /// Remaining tiles, in their current order.
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    /// Remaining copies of `letter`.
    pub fn count(&self, letter: char) -> usize {
        self.tiles.iter().filter(|&&t| t == letter).count()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// An empty pool ends the game.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remove one tile chosen uniformly at random.
    pub fn draw_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<char> {
        if self.tiles.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.tiles.len());
        Some(self.tiles.remove(idx))
    }

    /// Top `rack` up to [`RACK_SIZE`] tiles, or until the pool runs dry.
    /// Returns the number of tiles drawn.
    pub fn fill_rack<R: Rng + ?Sized>(&mut self, rng: &mut R, rack: &mut Rack) -> usize {
        let mut drawn = 0;
        while rack.len() < RACK_SIZE {
            let Some(tile) = self.draw_one(rng) else {
                break;
            };
            rack.push_unchecked(tile);
            drawn += 1;
        }
        log::info!(
            "drew {} tiles, rack now {}, {} left in pool",
            drawn,
            rack,
            self.tiles.len()
        );
        drawn
    }
}
