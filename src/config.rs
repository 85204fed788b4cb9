use crate::tiles::LetterSpec;

pub const BOARD_SIZE: usize = 15;
pub const RACK_SIZE: usize = 7;
pub const BINGO_BONUS: u32 = 50;

/// Letter distribution of the French edition: (letter, occurrences, points).
pub const STANDARD_LETTERS: [LetterSpec; 26] = [
    LetterSpec::new('A', 9, 1),
    LetterSpec::new('B', 2, 3),
    LetterSpec::new('C', 2, 3),
    LetterSpec::new('D', 3, 2),
    LetterSpec::new('E', 15, 1),
    LetterSpec::new('F', 2, 4),
    LetterSpec::new('G', 2, 2),
    LetterSpec::new('H', 2, 4),
    LetterSpec::new('I', 8, 1),
    LetterSpec::new('J', 1, 8),
    LetterSpec::new('K', 1, 10),
    LetterSpec::new('L', 5, 1),
    LetterSpec::new('M', 3, 2),
    LetterSpec::new('N', 6, 1),
    LetterSpec::new('O', 6, 1),
    LetterSpec::new('P', 2, 3),
    LetterSpec::new('Q', 1, 8),
    LetterSpec::new('R', 6, 1),
    LetterSpec::new('S', 6, 1),
    LetterSpec::new('T', 6, 1),
    LetterSpec::new('U', 6, 1),
    LetterSpec::new('V', 2, 4),
    LetterSpec::new('W', 1, 10),
    LetterSpec::new('X', 1, 10),
    LetterSpec::new('Y', 1, 10),
    LetterSpec::new('Z', 1, 10),
];

/// Total number of tiles in the standard distribution.
pub const STANDARD_TILE_COUNT: usize = 100;
