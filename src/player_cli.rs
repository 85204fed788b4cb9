#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::common::Verdict;
use crate::game::{Game, TurnReport};
use crate::geometry::{Move, Orientation};
use crate::player::MoveSource;
use crate::ui;

/// Accept a word made only of letters; returned uppercased.
pub fn parse_word(input: &str) -> Result<String, String> {
    let word = input.trim();
    if word.is_empty() {
        return Err("Empty word".to_string());
    }
    if !word.chars().all(char::is_alphabetic) {
        return Err(format!("'{}' must contain letters only", word));
    }
    Ok(word.to_uppercase())
}

/// Accept `h` or `v` in either case.
pub fn parse_direction(input: &str) -> Result<Orientation, String> {
    let input = input.trim();
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Orientation::from_letter(ch)
            .ok_or_else(|| format!("Invalid direction '{}' - use h or v", input)),
        _ => Err(format!("Invalid direction '{}' - use h or v", input)),
    }
}

/// Accept an index in `0..size`.
pub fn parse_position(input: &str, size: usize) -> Result<usize, String> {
    let input = input.trim();
    let pos: usize = input
        .parse()
        .map_err(|_| format!("Invalid number '{}'", input))?;
    if pos >= size {
        return Err(format!("{} out of bounds - must be 0-{}", pos, size.saturating_sub(1)));
    }
    Ok(pos)
}

/// Interactive player reading from stdin, or from any line-based input.
///
/// Stdin is locked per line, so several seats can share the console.
/// Prompts, the board and feedback go to stdout unless another writer is set.
#[derive(Default)]
pub struct CliPlayer {
    input: Option<Box<dyn BufRead>>,
    output: Option<Box<dyn Write>>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
        }
    }

    /// Read answers from `input` instead of stdin.
    pub fn with_input<R: BufRead + 'static>(input: R) -> Self {
        Self {
            input: Some(Box::new(input)),
            output: None,
        }
    }

    /// Send prompts and feedback to `output` instead of stdout.
    pub fn with_output<W: Write + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    fn say(&mut self, text: &str) {
        let written = match self.output.as_mut() {
            Some(out) => out.write_all(text.as_bytes()).and_then(|()| out.flush()),
            None => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes()).and_then(|()| out.flush())
            }
        };
        if let Err(e) = written {
            log::warn!("failed to write output: {}", e);
        }
    }

    fn read_line(&mut self, line: &mut String) -> io::Result<usize> {
        match self.input.as_mut() {
            Some(input) => input.read_line(line),
            None => io::stdin().read_line(line),
        }
    }

    /// Ask `prompt` until `parse` accepts the answer. `None` on end of input.
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T, String>) -> Option<T> {
        loop {
            self.say(prompt);
            let mut line = String::new();
            match self.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read input: {}", e);
                    return None;
                }
            }
            match parse(&line) {
                Ok(value) => return Some(value),
                Err(msg) => self.say(&format!("{}\n", msg)),
            }
        }
    }

    /// Ask for row, column, direction and word, in that order.
    pub fn read_move(&mut self, rows: usize, cols: usize) -> Option<Move> {
        let row = self.ask("Row of the first letter of your word: ", |s| parse_position(s, rows))?;
        let col = self.ask("Column of the first letter of your word: ", |s| parse_position(s, cols))?;
        let orientation = self.ask("Direction (h = horizontal, v = vertical): ", parse_direction)?;
        let word = self.ask("Which word do you play? ", parse_word)?;
        Some(Move::new(&word, row, col, orientation))
    }

    /// Ask how many players there are and their names.
    pub fn read_player_names(&mut self) -> Option<Vec<String>> {
        let count = self.ask("How many players? ", |s| {
            s.trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| "Enter a number greater than zero".to_string())
        })?;
        (1..=count)
            .map(|i| {
                self.ask(&format!("Name of player {}? ", i), |s| {
                    let name = s.trim();
                    if name.is_empty() {
                        Err("Name cannot be empty".to_string())
                    } else {
                        Ok(name.to_string())
                    }
                })
            })
            .collect()
    }
}

impl MoveSource for CliPlayer {
    fn propose(&mut self, game: &Game) -> Option<Move> {
        let mut view = format!("\n{}", ui::render_board(game.board()));
        if let Some(player) = game.current_player() {
            view.push_str(&ui::render_player_view(player));
        }
        self.say(&view);
        let (rows, cols) = game.board().dimensions();
        self.read_move(rows, cols)
    }

    fn on_rejected(&mut self, _mv: &Move, verdict: &Verdict) {
        for issue in verdict.issues() {
            self.say(&format!("Sorry, {}. Please try again.\n", issue));
        }
    }

    fn on_accepted(&mut self, report: &TurnReport) {
        if report.score.bingo {
            self.say("Scrabble!\n");
        }
        self.say(&format!("You scored {} points.\n", report.score.total()));
    }
}
