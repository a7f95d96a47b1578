//! # Wordle Helper
//!
//! An interactive helper for the five-letter word-guessing game.
//!
//! Each round the helper proposes the candidate with the best letter-frequency
//! score, reads back the per-letter feedback, turns it into a
//! [`ConstraintSet`] and drops every candidate that no longer fits.

pub mod constraints;
pub mod error;
pub mod feedback;
pub mod session;
pub mod solver;
pub mod word;

pub use constraints::{filter, ConstraintSet};
pub use error::{Error, FeedbackError, Result};
pub use feedback::{Feedback, Mark};
pub use session::{Outcome, Session};
pub use solver::{pick, rank, ScoredCandidate, WordleSolver};
pub use word::{LetterSet, Word};

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of guesses in a game.
pub const MAX_ROUNDS: usize = 6;

/// Read a word list, one word per line.
///
/// Lines are trimmed and lowercased. Blank lines are ignored and lines that
/// are not five letters are skipped with a warning.
pub fn load_words<R: BufRead>(reader: R) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Word::parse(line) {
            Ok(word) => words.push(word),
            Err(_) => warn!("skipping line {}: {:?} is not a five-letter word", number + 1, line),
        }
    }
    Ok(words)
}

/// Read a word list from a file (one word per line).
pub fn load_words_from_path(path: &Path) -> Result<Vec<Word>> {
    let file = File::open(path)?;
    let words = load_words(BufReader::new(file))?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Vec<Word> {
    include_str!("../dictionary/dictionary.txt")
        .lines()
        .filter_map(|line| Word::parse(line).ok())
        .collect()
}
