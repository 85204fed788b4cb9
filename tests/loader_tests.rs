#![cfg(feature = "std")]

use std::path::PathBuf;

use scrabble::loader::parse_letter_table;
use scrabble::{load_dictionary, load_letter_table, LetterTable, STANDARD_TILE_COUNT};

fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources").join(name)
}

#[test]
fn test_bundled_letter_table_matches_builtin() {
    let table = load_letter_table(resource("letters.txt")).unwrap();
    assert_eq!(table, LetterTable::standard());
    assert_eq!(table.total_tiles(), STANDARD_TILE_COUNT);
}

#[test]
fn test_parse_letter_table() {
    let table = parse_letter_table("a 9 1\n\n  K 1 10  \n").unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.count('A'), 9);
    assert_eq!(table.value('K'), 10);
}

#[test]
fn test_parse_letter_table_errors_name_the_line() {
    let err = parse_letter_table("A 9 1\nB 2").unwrap_err();
    assert!(err.to_string().contains("line 2"));
    assert!(parse_letter_table("AB 1 1").is_err());
    assert!(parse_letter_table("A x 1").is_err());
    assert!(parse_letter_table("A 1 -3").is_err());
}

#[test]
fn test_bundled_dictionary() {
    let dict = load_dictionary(resource("words.txt")).unwrap();
    assert!(dict.contains("BONJOUR"));
    assert!(dict.contains("CHAT"));
    assert!(!dict.contains("XYZ"));
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_dictionary(resource("nope.txt")).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.txt"));
}

#[test]
fn test_letter_table_uppercases_accented_letters() {
    let table = parse_letter_table("é 2 3\n").unwrap();
    assert_eq!(table.count('É'), 2);
    assert_eq!(table.value('É'), 3);
}
