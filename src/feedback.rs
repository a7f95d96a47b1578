//! Per-letter feedback for a guess.
//!
//! Feedback is typed as one character per position: the guessed letter in
//! uppercase when it is in the right spot, in lowercase when it is in the word
//! but elsewhere, and `.` when it is not in the word.

use crate::error::FeedbackError;
use crate::word::Word;
use crate::WORD_LENGTH;
use std::fmt;

/// Placeholder character for an absent letter.
pub const ABSENT_CHAR: char = '.';

/// The feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Mark {
    /// Convert to a character for display
    pub fn to_emoji(self) -> char {
        match self {
            Mark::Correct => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬛',
        }
    }

    /// Render this mark for `letter` in the typed notation.
    pub fn encode(self, letter: u8) -> char {
        match self {
            Mark::Correct => letter.to_ascii_uppercase() as char,
            Mark::Present => letter as char,
            Mark::Absent => ABSENT_CHAR,
        }
    }

    /// Present or Correct.
    pub fn is_in_word(self) -> bool {
        !matches!(self, Mark::Absent)
    }
}

/// The feedback for a whole guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// The feedback for a solved puzzle.
    pub const ALL_CORRECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    pub fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    pub fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Grade `guess` against a known `target`.
    ///
    /// Greens are assigned first. Remaining target letters are then handed
    /// out as yellows from left to right, so a letter guessed more often than
    /// it occurs in the target is marked absent for the surplus occurrences.
    pub fn grade(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut target_remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess.letter(i) == target.letter(i) {
                marks[i] = Mark::Correct;
            } else {
                target_remaining[(target.letter(i) - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if marks[i] != Mark::Correct {
                let idx = (guess.letter(i) - b'a') as usize;
                if target_remaining[idx] > 0 {
                    marks[i] = Mark::Present;
                    target_remaining[idx] -= 1;
                }
            }
        }

        Self(marks)
    }

    /// Parse typed feedback for `guess`.
    ///
    /// Every letter must be the guessed letter at that position (in either
    /// case). Surrounding whitespace is ignored.
    pub fn parse(guess: &Word, s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(FeedbackError::Length {
                expected: WORD_LENGTH,
                found: chars.len(),
            });
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (position, &c) in chars.iter().enumerate() {
            marks[position] = if c == ABSENT_CHAR {
                Mark::Absent
            } else if c.is_ascii_alphabetic() {
                let expected = guess.letter(position) as char;
                if c.to_ascii_lowercase() != expected {
                    return Err(FeedbackError::LetterMismatch {
                        position,
                        expected,
                        found: c,
                    });
                }
                if c.is_ascii_uppercase() {
                    Mark::Correct
                } else {
                    Mark::Present
                }
            } else {
                return Err(FeedbackError::InvalidCharacter {
                    position,
                    character: c,
                });
            };
        }

        Ok(Self(marks))
    }

    /// Render in the typed notation for `guess`, the inverse of [`Feedback::parse`].
    pub fn encode(&self, guess: &Word) -> String {
        self.0
            .iter()
            .zip(guess.letters())
            .map(|(mark, &letter)| mark.encode(letter))
            .collect()
    }

    /// Check if this feedback represents a win (all correct)
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
