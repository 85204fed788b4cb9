use scrabble::scoring::{is_bingo, score, word_points};
use scrabble::{LetterTable, Score, BINGO_BONUS};

#[test]
fn test_word_points_sum_every_word() {
    let table = LetterTable::standard();
    assert_eq!(word_points(&["CHAT"], &table), 9);
    assert_eq!(word_points(&["AN", "NU", "TU"], &table), 6);
    assert_eq!(word_points::<&str>(&[], &table), 0);
}

#[test]
fn test_unknown_letters_score_nothing() {
    let table = LetterTable::standard();
    assert_eq!(word_points(&["A?"], &table), 1);
}

#[test]
fn test_bingo_needs_seven_new_tiles() {
    assert!(is_bingo(7, 0));
    assert!(!is_bingo(6, 0));
    assert!(!is_bingo(7, 1));
    assert!(is_bingo(8, 1));
}

#[test]
fn test_score_is_repeatable() {
    let table = LetterTable::standard();
    let words = vec!["BONJOUR".to_string()];
    let first = score(&words, &table, "BONJOUR", "");
    let second = score(&words, &table, "BONJOUR", "");
    assert_eq!(first, second);
    assert_eq!(first, Score { base: 16, bingo: true });
    assert_eq!(first.total(), 16 + BINGO_BONUS);
    assert_eq!(first.to_string(), "66 (+50 bingo)");
}

#[test]
fn test_no_bonus_when_reusing_board_letters() {
    let table = LetterTable::standard();
    let words = vec!["BONJOUR".to_string()];
    let s = score(&words, &table, "BONJOUR", "O");
    assert!(!s.bingo);
    assert_eq!(s.total(), 16);
}
