//! Guess scoring and the round-by-round solver state.
//!
//! Candidates are ranked by a letter-frequency heuristic: a letter is worth
//! the number of remaining candidates that contain it, a word is worth the sum
//! of its letters, and that sum is multiplied by the number of distinct letters
//! so that words covering more of the alphabet win.

use crate::constraints::{filter, ConstraintSet};
use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::word::Word;
use log::debug;
use std::collections::BTreeMap;

/// A candidate and its heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub word: Word,
    pub score: u64,
}

/// For each letter, the number of candidates containing it at least once.
pub fn letter_frequencies(candidates: &[Word]) -> [u64; 26] {
    let mut freq = [0u64; 26];
    for word in candidates {
        for letter in word.letter_set().iter() {
            freq[(letter - b'a') as usize] += 1;
        }
    }
    freq
}

/// Sum of letter frequencies (repeats counted) times the distinct letter count.
pub fn score_word(word: &Word, freq: &[u64; 26]) -> u64 {
    let sum: u64 = word
        .letters()
        .iter()
        .map(|&letter| freq[(letter - b'a') as usize])
        .sum();
    sum * word.letter_set().len() as u64
}

/// The highest-scoring candidate. Ties go to the one listed first.
pub fn pick(candidates: &[Word]) -> Result<Word> {
    let freq = letter_frequencies(candidates);
    let mut best: Option<ScoredCandidate> = None;

    for &word in candidates {
        let score = score_word(&word, &freq);
        if best.map_or(true, |b| score > b.score) {
            best = Some(ScoredCandidate { word, score });
        }
    }

    best.map(|b| b.word).ok_or(Error::EmptyCandidateSet)
}

/// The `n` best candidates, highest score first, ties in input order.
pub fn rank(candidates: &[Word], n: usize) -> Vec<ScoredCandidate> {
    let freq = letter_frequencies(candidates);
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|&word| ScoredCandidate {
            word,
            score: score_word(&word, &freq),
        })
        .collect();

    // Stable sort keeps input order among equal scores.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(n);
    scored
}

/// The main Wordle solver
#[derive(Debug, Clone)]
pub struct WordleSolver {
    all_words: Vec<Word>,
    possible_answers: Vec<Word>,
}

impl WordleSolver {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            possible_answers: words.clone(),
            all_words: words,
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.possible_answers.len()
    }

    pub fn possible_answers(&self) -> &[Word] {
        &self.possible_answers
    }

    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    pub fn reset(&mut self) {
        self.possible_answers = self.all_words.clone();
    }

    /// Narrow the candidates with `feedback` on `guess`.
    ///
    /// Returns how many candidates were eliminated.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) -> usize {
        let constraints = ConstraintSet::build(guess, feedback);
        debug!("{} {} -> {}", guess, feedback.encode(guess), constraints);

        let before = self.possible_answers.len();
        self.possible_answers = filter(&self.possible_answers, &constraints);
        debug!("{} -> {} candidates", before, self.possible_answers.len());

        before - self.possible_answers.len()
    }

    pub fn best_guess(&self) -> Result<Word> {
        pick(&self.possible_answers)
    }

    pub fn top_guesses(&self, n: usize) -> Vec<ScoredCandidate> {
        rank(&self.possible_answers, n)
    }

    /// Play up to `rounds` guesses, asking `get_feedback` for each one.
    ///
    /// Returns the guesses made with their feedback. Stops early on a win,
    /// and fails with [`Error::EmptyCandidateSet`] if the feedback leaves
    /// nothing to guess.
    pub fn solve_with_feedback<F>(&mut self, rounds: usize, mut get_feedback: F) -> Result<Vec<(Word, Feedback)>>
    where
        F: FnMut(&Word) -> Feedback,
    {
        let mut guesses = Vec::new();

        for _ in 0..rounds {
            let guess = self.best_guess()?;
            let feedback = get_feedback(&guess);
            guesses.push((guess, feedback));

            if feedback.is_win() {
                break;
            }

            self.apply_feedback(&guess, &feedback);
        }

        Ok(guesses)
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word, rounds: usize) -> Result<Vec<(Word, Feedback)>> {
        self.solve_with_feedback(rounds, |guess| Feedback::grade(guess, target))
    }

    /// Play every word in the list as the target.
    ///
    /// Returns `(guesses, count)` pairs for each number of guesses that
    /// occurred, in ascending order. Targets not solved within `rounds` are
    /// counted under `rounds + 1`.
    pub fn guess_distribution(&self, rounds: usize) -> Result<Vec<(usize, usize)>> {
        let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

        for target in &self.all_words {
            let mut solver = Self::new(self.all_words.clone());
            let guesses = solver.solve_for_target(target, rounds)?;
            let solved = guesses.last().is_some_and(|(_, feedback)| feedback.is_win());
            let count = if solved { guesses.len() } else { rounds.saturating_add(1) };
            *distribution.entry(count).or_insert(0) += 1;
        }

        Ok(distribution.into_iter().collect())
    }
}
