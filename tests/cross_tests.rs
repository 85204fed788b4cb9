use scrabble::cross::{perpendicular_runs, resolve};
use scrabble::{commit, Board, CrossWords, Dictionary, Move, Orientation};

fn dict() -> Dictionary {
    Dictionary::from_words(["CHAT", "CHATS", "NU", "AN", "TU", "AU", "RAPEE", "DENI"])
}

fn board_with(moves: &[Move]) -> Board {
    let mut board = Board::standard();
    for mv in moves {
        commit(&mut board, mv).unwrap();
    }
    board
}

#[test]
fn test_no_perpendicular_on_empty_board() {
    let board = Board::standard();
    let mv = Move::new("CHAT", 7, 7, Orientation::Horizontal);
    assert!(perpendicular_runs(&board, &mv).is_empty());
    let resolved = resolve(&board, &mv, &dict());
    assert_eq!(resolved, CrossWords::NoPerpendicular);
    assert_eq!(resolved.new_words(&mv), Some(vec!["CHAT".to_string()]));
}

#[test]
fn test_formed_words_include_placed_word_sorted() {
    let board = board_with(&[Move::new("CHAT", 7, 7, Orientation::Horizontal)]);
    let mv = Move::new("NU", 8, 9, Orientation::Horizontal);
    assert_eq!(perpendicular_runs(&board, &mv), vec!["AN", "TU"]);
    assert_eq!(
        resolve(&board, &mv, &dict()),
        CrossWords::Formed(vec!["AN".to_string(), "NU".to_string(), "TU".to_string()])
    );
}

#[test]
fn test_invalid_perpendicular_rejects_whole_move() {
    let board = board_with(&[Move::new("RAPEE", 7, 7, Orientation::Horizontal)]);
    let before = board.clone();
    let mv = Move::new("DENI", 8, 7, Orientation::Horizontal);
    assert_eq!(perpendicular_runs(&board, &mv), vec!["RD", "AE", "PN", "EI"]);
    let resolved = resolve(&board, &mv, &dict());
    assert!(resolved.is_rejected());
    assert_eq!(resolved.new_words(&mv), None);
    assert_eq!(board, before);
}

#[test]
fn test_invalid_placed_word_rejects_when_perpendiculars_exist() {
    let board = board_with(&[Move::new("CHAT", 7, 7, Orientation::Horizontal)]);
    // AN and TU are fine but NU is missing from this dictionary
    let dict = Dictionary::from_words(["CHAT", "AN", "TU"]);
    let mv = Move::new("NU", 8, 9, Orientation::Horizontal);
    assert_eq!(resolve(&board, &mv, &dict), CrossWords::Rejected);
}

#[test]
fn test_cells_already_on_board_are_not_rescanned() {
    let mut board = board_with(&[Move::new("CHAT", 7, 7, Orientation::Horizontal)]);
    // an old, unrelated letter under the C: the column C/X was already there
    board.set(8, 7, 'X').unwrap();
    let mv = Move::new("CHATS", 7, 7, Orientation::Horizontal);
    assert!(perpendicular_runs(&board, &mv).is_empty());
    assert_eq!(resolve(&board, &mv, &dict()), CrossWords::NoPerpendicular);
}

#[test]
fn test_runs_reach_the_last_row_and_column() {
    let mut board = Board::standard();
    board.set(13, 14, 'A').unwrap();
    let mv = Move::new("NU", 14, 13, Orientation::Horizontal);
    assert_eq!(perpendicular_runs(&board, &mv), vec!["AU"]);
    assert_eq!(
        resolve(&board, &mv, &dict()),
        CrossWords::Formed(vec!["AU".to_string(), "NU".to_string()])
    );
}

#[test]
fn test_vertical_move_scans_rows() {
    let board = board_with(&[Move::new("CHAT", 7, 7, Orientation::Vertical)]);
    // N beside the A at (9, 7), U beside the T at (10, 7)
    let mv = Move::new("NU", 9, 8, Orientation::Vertical);
    assert_eq!(perpendicular_runs(&board, &mv), vec!["AN", "TU"]);
}
