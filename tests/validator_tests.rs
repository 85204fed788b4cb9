use scrabble::validator::{no_conflict, touches_board};
use scrabble::{commit, validate, Board, Dictionary, Move, Orientation, Rack, ValidationIssue};

fn dict() -> Dictionary {
    Dictionary::from_words(["BONJOUR", "CHAT", "CHATS", "NU", "AN", "TU", "MON", "THE", "RAPEE", "DENI"])
}

fn chat_board() -> Board {
    let mut board = Board::standard();
    commit(&mut board, &Move::new("CHAT", 7, 7, Orientation::Horizontal)).unwrap();
    board
}

fn issues(board: &Board, rack: &str, mv: &Move, turn: u32) -> Vec<ValidationIssue> {
    let rack = Rack::from_letters(rack).unwrap();
    validate(board, &rack, mv, &dict(), turn).issues().collect()
}

#[test]
fn test_opening_move_accepted() {
    let board = Board::standard();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let mv = Move::new("BONJOUR", 7, 7, orientation);
        assert!(issues(&board, "BONJOUR", &mv, 1).is_empty());
    }
}

#[test]
fn test_opening_move_reports_every_failure() {
    let board = Board::standard();
    let mv = Move::new("XYZ", 0, 0, Orientation::Horizontal);
    assert_eq!(
        issues(&board, "AB", &mv, 1),
        vec![
            ValidationIssue::MissingCenterCrossing,
            ValidationIssue::RackInsufficient,
            ValidationIssue::NotInDictionary,
        ]
    );
}

#[test]
fn test_opening_move_off_center() {
    let board = Board::standard();
    let mv = Move::new("BONJOUR", 5, 5, Orientation::Horizontal);
    assert_eq!(
        issues(&board, "BONJOUR", &mv, 1),
        vec![ValidationIssue::MissingCenterCrossing]
    );
}

#[test]
fn test_out_of_bounds_short_circuits() {
    let board = Board::standard();
    let mv = Move::new("BONJOUR", 9, 7, Orientation::Vertical);
    assert_eq!(issues(&board, "", &mv, 1), vec![ValidationIssue::OutOfBounds]);
    assert_eq!(issues(&board, "", &mv, 4), vec![ValidationIssue::OutOfBounds]);
}

#[test]
fn test_later_move_must_connect() {
    let board = chat_board();
    let mv = Move::new("MON", 0, 0, Orientation::Horizontal);
    assert_eq!(issues(&board, "MONXYZW", &mv, 2), vec![ValidationIssue::NoAnchor]);
}

#[test]
fn test_later_move_through_existing_letter() {
    let board = chat_board();
    let mv = Move::new("THE", 7, 10, Orientation::Vertical);
    assert!(touches_board(&board, &mv));
    // T comes from the board
    assert!(issues(&board, "HE", &mv, 2).is_empty());
}

#[test]
fn test_later_move_anchored_by_perpendiculars() {
    let board = chat_board();
    let mv = Move::new("NU", 8, 9, Orientation::Horizontal);
    assert!(!touches_board(&board, &mv));
    assert!(issues(&board, "NU", &mv, 2).is_empty());
}

#[test]
fn test_conflict_with_board_letters() {
    let board = chat_board();
    let mv = Move::new("MON", 6, 8, Orientation::Vertical);
    assert!(!no_conflict(&board, &mv));
    let found = issues(&board, "MON", &mv, 2);
    assert!(found.contains(&ValidationIssue::BoardConflict));
}

#[test]
fn test_invalid_perpendicular_rejects_move() {
    let mut board = Board::standard();
    commit(&mut board, &Move::new("RAPEE", 7, 7, Orientation::Horizontal)).unwrap();
    let before = board.clone();
    let mv = Move::new("DENI", 8, 7, Orientation::Horizontal);
    assert_eq!(
        issues(&board, "DENIXYZ", &mv, 2),
        vec![ValidationIssue::InvalidPerpendicularWord]
    );
    assert_eq!(board, before);
}

#[test]
fn test_perpendicular_failure_reported_with_other_issues() {
    let mut board = Board::standard();
    commit(&mut board, &Move::new("RAPEE", 7, 7, Orientation::Horizontal)).unwrap();
    let mv = Move::new("DENI", 8, 7, Orientation::Horizontal);
    let found = issues(&board, "XYZ", &mv, 2);
    assert_eq!(
        found,
        vec![ValidationIssue::RackInsufficient, ValidationIssue::InvalidPerpendicularWord]
    );
}

#[test]
fn test_verdict_messages_and_codes() {
    let board = Board::standard();
    let rack = Rack::from_letters("AB").unwrap();
    let verdict = validate(&board, &rack, &Move::new("XYZ", 0, 0, Orientation::Horizontal), &dict(), 1);
    assert!(!verdict.is_accepted());
    assert_eq!(verdict.len(), 3);
    assert!(verdict.contains(ValidationIssue::NotInDictionary));
    assert_eq!(ValidationIssue::NoAnchor.code(), "NO_ANCHOR");
    assert!(verdict.to_string().contains("not in the dictionary"));
}
