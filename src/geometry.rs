//! Move definitions and the pure geometry of a placement: spans, bounds and
//! the first-move center rule.

use alloc::string::String;
use core::fmt;

/// Orientation of a word on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The orientation at a right angle to this one.
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Parse `h`/`v` in either case.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Cell reached from `(row, col)` after `offset` steps along this axis.
    pub fn advance(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("H"),
            Orientation::Vertical => f.write_str("V"),
        }
    }
}

/// A candidate placement: a word, the cell of its first letter and its
/// orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    word: String,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl Move {
    /// Build a move; the word is uppercased.
    pub fn new(word: &str, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            word: word.to_uppercase(),
            row,
            col,
            orientation,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cell of the first letter (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Each letter with the cell it lands on. Only meaningful once
    /// [`within_bounds`] holds.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.word.chars().enumerate().map(move |(i, ch)| {
            let (r, c) = self.orientation.advance(self.row, self.col, i);
            (r, c, ch)
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) {}",
            self.word, self.row, self.col, self.orientation
        )
    }
}

/// `true` when the whole word lies on a `rows × cols` board.
///
/// The word's end is measured against the axis it is written along: rows for
/// a vertical word, columns for a horizontal one. Empty words and arithmetic
/// overflow fail closed.
pub fn within_bounds(mv: &Move, (rows, cols): (usize, usize)) -> bool {
    let len = mv.len();
    if len == 0 {
        return false;
    }
    let (row, col) = mv.origin();
    match mv.orientation() {
        Orientation::Vertical => col < cols && row.checked_add(len).is_some_and(|end| end <= rows),
        Orientation::Horizontal => row < rows && col.checked_add(len).is_some_and(|end| end <= cols),
    }
}

/// Center cell of a `rows × cols` board.
pub fn center((rows, cols): (usize, usize)) -> (usize, usize) {
    (rows / 2, cols / 2)
}

/// `true` when the word covers the center cell. Applies to the opening move.
pub fn crosses_center(mv: &Move, dims: (usize, usize)) -> bool {
    let len = mv.len();
    if len == 0 {
        return false;
    }
    let (center_row, center_col) = center(dims);
    let (row, col) = mv.origin();
    match mv.orientation() {
        Orientation::Vertical => col == center_col && row <= center_row && center_row - row < len,
        Orientation::Horizontal => row == center_row && col <= center_col && center_col - col < len,
    }
}
