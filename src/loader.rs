#![cfg(feature = "std")]

//! Reading the letter table and word list from text files.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::dictionary::Dictionary;
use crate::tiles::{LetterSpec, LetterTable};

/// Parse a letter table: one `LETTER COUNT POINTS` line per letter.
pub fn parse_letter_table(text: &str) -> Result<LetterTable> {
    let mut specs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [letter, count, points] = fields.as_slice() else {
            return Err(anyhow!(
                "line {}: expected `LETTER COUNT POINTS`, got {:?}",
                line_no,
                line
            ));
        };
        let upper = letter.to_uppercase();
        let mut chars = upper.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(anyhow!("line {}: {:?} is not a single letter", line_no, letter));
        };
        let count: usize = count
            .parse()
            .with_context(|| format!("line {}: invalid count {:?}", line_no, count))?;
        let points: u32 = points
            .parse()
            .with_context(|| format!("line {}: invalid points {:?}", line_no, points))?;
        specs.push(LetterSpec::new(ch, count, points));
    }
    Ok(LetterTable::from_specs(specs))
}

/// Load a letter table file.
pub fn load_letter_table<P: AsRef<Path>>(path: P) -> Result<LetterTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading letter table {}", path.display()))?;
    let table = parse_letter_table(&text).with_context(|| format!("in {}", path.display()))?;
    log::debug!(
        "loaded {} letters ({} tiles) from {}",
        table.len(),
        table.total_tiles(),
        path.display()
    );
    Ok(table)
}

/// Load a word list file, one word per line.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading dictionary {}", path.display()))?;
    Ok(Dictionary::from_words(text.lines()))
}
