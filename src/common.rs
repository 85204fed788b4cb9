//! Common types for Scrabble: board errors, rule violations and verdicts.

use alloc::collections::BTreeSet;
use core::fmt;

/// Errors returned by Board and rack operations.
///
/// These signal misuse of the engine, never a rule violation: an illegal
/// move is reported through [`Verdict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is outside the board.
    IndexOutOfBounds { row: usize, col: usize },
    /// Board dimensions must both be non-zero.
    InvalidDimensions { rows: usize, cols: usize },
    /// The move does not fit on the board.
    MoveOutOfBounds,
    /// Cell already holds a different letter.
    CellOccupied { row: usize, col: usize, letter: char },
    /// Rack would exceed its capacity.
    RackFull,
    /// No player sits at this index.
    UnknownPlayer(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfBounds { row, col } => {
                write!(f, "Index out of bounds: row={}, col={}", row, col)
            }
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid board dimensions {}x{}", rows, cols)
            }
            BoardError::MoveOutOfBounds => write!(f, "Move does not fit on the board"),
            BoardError::CellOccupied { row, col, letter } => {
                write!(f, "Cell ({}, {}) already holds '{}'", row, col, letter)
            }
            BoardError::RackFull => write!(f, "Rack is already full"),
            BoardError::UnknownPlayer(idx) => write!(f, "No player at index {}", idx),
        }
    }
}

/// One violated placement rule. A rejected move carries every rule it broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ValidationIssue {
    OutOfBounds,
    MissingCenterCrossing,
    RackInsufficient,
    NotInDictionary,
    BoardConflict,
    NoAnchor,
    InvalidPerpendicularWord,
}

impl ValidationIssue {
    /// Stable reason code.
    pub fn code(self) -> &'static str {
        match self {
            ValidationIssue::OutOfBounds => "OUT_OF_BOUNDS",
            ValidationIssue::MissingCenterCrossing => "MISSING_CENTER_CROSSING",
            ValidationIssue::RackInsufficient => "RACK_INSUFFICIENT",
            ValidationIssue::NotInDictionary => "NOT_IN_DICTIONARY",
            ValidationIssue::BoardConflict => "BOARD_CONFLICT",
            ValidationIssue::NoAnchor => "NO_ANCHOR",
            ValidationIssue::InvalidPerpendicularWord => "INVALID_PERPENDICULAR_WORD",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationIssue::OutOfBounds => "the word does not fit within the board",
            ValidationIssue::MissingCenterCrossing => "the first word must cross the center square",
            ValidationIssue::RackInsufficient => "you do not have the letters to write this word",
            ValidationIssue::NotInDictionary => "this word is not in the dictionary",
            ValidationIssue::BoardConflict => "the word conflicts with letters on the board",
            ValidationIssue::NoAnchor => "the word does not connect to existing words",
            ValidationIssue::InvalidPerpendicularWord => {
                "the word forms perpendicular words that are not in the dictionary"
            }
        };
        f.write_str(msg)
    }
}

/// Outcome of validating a candidate move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    issues: BTreeSet<ValidationIssue>,
}

impl Verdict {
    /// A verdict with no violations.
    pub fn accepted() -> Self {
        Self::default()
    }

    pub fn is_accepted(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> impl Iterator<Item = ValidationIssue> + '_ {
        self.issues.iter().copied()
    }

    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn flag(&mut self, issue: ValidationIssue) {
        self.issues.insert(issue);
    }

    /// Record `issue` unless `ok` holds.
    pub fn require(&mut self, ok: bool, issue: ValidationIssue) {
        if !ok {
            self.flag(issue);
        }
    }
}

impl FromIterator<ValidationIssue> for Verdict {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return f.write_str("accepted");
        }
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Why a move could not be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move broke one or more placement rules. Nothing was changed.
    Rejected(Verdict),
    /// Engine state did not allow the write.
    Board(BoardError),
}

impl MoveError {
    /// The rule violations, when this is a rejection.
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            MoveError::Rejected(v) => Some(v),
            MoveError::Board(_) => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

impl From<Verdict> for MoveError {
    fn from(verdict: Verdict) -> Self {
        MoveError::Rejected(verdict)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Rejected(v) => write!(f, "Move rejected: {}", v),
            MoveError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}
