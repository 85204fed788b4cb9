//! Board state: a fixed `rows × cols` grid of letters.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::geometry::{self, Move, Orientation};

/// Marker used when rendering an empty cell.
pub const EMPTY_CELL: char = '_';

/// Letter grid. Dimensions are fixed at creation and a filled cell is never
/// emptied again.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    /// Create an empty board of the given (rows, cols).
    pub fn new((rows, cols): (usize, usize)) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// The canonical 15×15 board.
    pub fn standard() -> Self {
        Board {
            rows: BOARD_SIZE,
            cols: BOARD_SIZE,
            cells: vec![None; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// (rows, cols).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Center cell, the one the opening word must cover.
    pub fn center(&self) -> (usize, usize) {
        geometry::center(self.dimensions())
    }

    /// Returns `true` when no letter has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of filled cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Option<char>, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.cols + col])
    }

    /// Letter at (row, col), `None` for empty or off-board cells.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.get(row, col).ok().flatten()
    }

    /// Write `letter` into (row, col). Rewriting the same letter is a no-op;
    /// overwriting a different one is refused.
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        let cell = &mut self.cells[row * self.cols + col];
        match *cell {
            Some(existing) if existing != letter => Err(BoardError::CellOccupied {
                row,
                col,
                letter: existing,
            }),
            _ => {
                *cell = Some(letter);
                Ok(())
            }
        }
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> Result<&[Option<char>], BoardError> {
        self.check_bounds(row, 0)?;
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Letters already on the board under each cell of `mv`, in word order.
    /// Cells past the edge read as empty.
    pub fn covered<'a>(&'a self, mv: &'a Move) -> impl Iterator<Item = Option<char>> + 'a {
        mv.cells().map(move |(r, c, _)| self.letter_at(r, c))
    }

    /// Read-only view of the board as it would look with `mv` written on it.
    pub fn project<'a>(&'a self, mv: &'a Move) -> Projection<'a> {
        Projection {
            board: self,
            letters: mv.word().chars().collect(),
            origin: mv.origin(),
            orientation: mv.orientation(),
        }
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            Err(BoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}x{}>:", self.rows, self.cols)?;
        write!(f, "{}", self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = self.cells[r * self.cols + c].unwrap_or(EMPTY_CELL);
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A board with a candidate move laid over it. Nothing is written to the
/// underlying board.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    board: &'a Board,
    letters: Vec<char>,
    origin: (usize, usize),
    orientation: Orientation,
}

impl<'a> Projection<'a> {
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Letter at (row, col) once the move is placed.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        let (r0, c0) = self.origin;
        let offset = match self.orientation {
            Orientation::Horizontal if row == r0 && col >= c0 => Some(col - c0),
            Orientation::Vertical if col == c0 && row >= r0 => Some(row - r0),
            _ => None,
        };
        match offset.and_then(|i| self.letters.get(i)) {
            Some(&ch) if row < self.board.rows && col < self.board.cols => Some(ch),
            _ => self.board.letter_at(row, col),
        }
    }

    /// `true` when (row, col) holds a letter once the move is placed.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.letter_at(row, col).is_some()
    }
}
