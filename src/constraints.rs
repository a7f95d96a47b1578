//! Turning feedback into constraints, and pruning candidates with them.

use crate::error::Result;
use crate::feedback::{Feedback, Mark};
use crate::word::{LetterSet, Word};
use crate::WORD_LENGTH;
use std::fmt;

/// What one round of feedback says about the hidden word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    /// Letters permitted at each position.
    allowed: [LetterSet; WORD_LENGTH],
    /// Letters that must appear at least once somewhere.
    required: LetterSet,
}

impl ConstraintSet {
    /// No information: every letter allowed everywhere, nothing required.
    pub fn unconstrained() -> Self {
        Self {
            allowed: [LetterSet::full(); WORD_LENGTH],
            required: LetterSet::empty(),
        }
    }

    /// Build the constraints implied by `feedback` on `guess`.
    ///
    /// An absent letter is only excluded from the whole word when no other
    /// occurrence of it in the same guess was marked present or correct.
    /// Otherwise the surplus occurrence just rules out its own position.
    pub fn build(guess: &Word, feedback: &Feedback) -> Self {
        let pairs = || guess.letters().iter().copied().zip(feedback.marks().iter().copied());

        let confirmed: LetterSet = pairs()
            .filter(|(_, mark)| mark.is_in_word())
            .map(|(letter, _)| letter)
            .collect();

        let excluded: LetterSet = pairs()
            .filter(|&(letter, mark)| mark == Mark::Absent && !confirmed.contains(letter))
            .map(|(letter, _)| letter)
            .collect();

        let mut allowed = [LetterSet::full().difference(excluded); WORD_LENGTH];
        for (slot, (letter, mark)) in allowed.iter_mut().zip(pairs()) {
            match mark {
                Mark::Correct => *slot = LetterSet::single(letter),
                Mark::Present | Mark::Absent => slot.remove(letter),
            }
        }

        Self {
            allowed,
            required: confirmed,
        }
    }

    /// Parse typed feedback for `guess` and build its constraints.
    pub fn from_text(guess: &Word, feedback: &str) -> Result<Self> {
        let feedback = Feedback::parse(guess, feedback)?;
        Ok(Self::build(guess, &feedback))
    }

    pub fn allowed(&self, position: usize) -> LetterSet {
        self.allowed[position]
    }

    pub fn required(&self) -> LetterSet {
        self.required
    }

    /// Whether `word` is consistent with these constraints.
    pub fn matches(&self, word: &Word) -> bool {
        let placed = word
            .letters()
            .iter()
            .zip(&self.allowed)
            .all(|(&letter, allowed)| allowed.contains(letter));

        placed && self.required.is_subset(&word.letter_set())
    }
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.allowed.iter().map(|set| format!("[{set}]")).collect();
        write!(f, "{} requires [{}]", positions.join(" "), self.required)
    }
}

/// Keep the candidates consistent with `constraints`, in their original order.
pub fn filter(candidates: &[Word], constraints: &ConstraintSet) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| constraints.matches(word))
        .copied()
        .collect()
}
