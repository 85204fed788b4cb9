#![cfg(feature = "std")]

use std::fmt::Write;

use crate::board::{Board, EMPTY_CELL};
use crate::game::{GameEnd, GameSummary};
use crate::player::Player;

fn column_header(cols: usize) -> String {
    let mut line = String::from("   ");
    for c in 0..cols {
        let _ = write!(line, " {:>2}", c);
    }
    line
}

/// Board as text: a column header, each row framed by its row number,
/// `_` for empty cells, and the header repeated underneath.
pub fn render_board(board: &Board) -> String {
    let header = column_header(board.cols());
    let mut out = String::new();
    let _ = writeln!(out, "{}", header);
    for r in 0..board.rows() {
        let _ = write!(out, "{:>2} ", r);
        for c in 0..board.cols() {
            let ch = board.letter_at(r, c).unwrap_or(EMPTY_CELL);
            let _ = write!(out, "  {}", ch);
        }
        let _ = writeln!(out, " {:>2}", r);
    }
    let _ = writeln!(out, "{}", header);
    out
}

pub fn print_board(board: &Board) {
    print!("{}", render_board(board));
}

/// Whose turn it is and the tiles in hand.
pub fn render_player_view(player: &Player) -> String {
    format!(
        "It is {}'s turn ({} points).\nYour tiles: {}\n",
        player.name(),
        player.score(),
        player.rack()
    )
}

/// Final standings, best score first.
pub fn print_summary(summary: &GameSummary) {
    match summary.end {
        GameEnd::PoolExhausted => println!("\nThe tile pool is empty: game over."),
        GameEnd::Abandoned => println!("\nGame abandoned."),
    }
    println!("Turns played: {}", summary.turns_played);
    let mut standings: Vec<&Player> = summary.players.iter().collect();
    standings.sort_by(|a, b| b.score().cmp(&a.score()));
    for p in standings {
        println!("  {:<16} {:>4} points", p.name(), p.score());
    }
    match &summary.winner {
        Some(name) => println!("Winner: {}", name),
        None => println!("No single winner."),
    }
}
