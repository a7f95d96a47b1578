//! Error types shared by the library.

use thiserror::Error;

/// Errors raised by the solver core and the word loaders.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed feedback: {0}")]
    MalformedFeedback(#[from] FeedbackError),
    /// No candidate is left to guess. Either earlier feedback was contradictory
    /// or the hidden word is not in the word list.
    #[error("no possible words remain")]
    EmptyCandidateSet,
    #[error("not a five-letter word: {0:?}")]
    InvalidWord(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a feedback string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("expected {expected} characters, got {found}")]
    Length { expected: usize, found: usize },
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },
    #[error("letter {found:?} at position {position} does not match guessed letter {expected:?}")]
    LetterMismatch {
        position: usize,
        expected: char,
        found: char,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
