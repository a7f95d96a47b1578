//! The interactive guess/result loop.
//!
//! A [`Session`] prints a guess, reads the typed result, narrows the
//! candidates and repeats until the word is found, the rounds run out, or no
//! candidate is left. Input and output are any `BufRead`/`Write` pair so the
//! loop can be driven from a terminal or from a test.

use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::solver::WordleSolver;
use crate::word::Word;
use log::{debug, info};
use std::io::{BufRead, Write};

pub const USAGE_TEXT: &str = include_str!("text/usage.txt");

/// Maximum number of remaining words listed by the `remaining` command.
const REMAINING_LIST_LIMIT: usize = 20;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The word was found after this many results.
    Won { rounds: usize },
    /// Every round was used without finding the word.
    Lost,
    /// The results ruled out every word in the list.
    NoCandidates,
    /// The player quit or the input ended.
    Quit,
}

pub struct Session {
    solver: WordleSolver,
    rounds: usize,
}

enum Input {
    Result(Feedback),
    Quit,
}

impl Session {
    pub fn new(words: Vec<Word>, rounds: usize) -> Self {
        Self {
            solver: WordleSolver::new(words),
            rounds,
        }
    }

    pub fn solver(&self) -> &WordleSolver {
        &self.solver
    }

    /// Play one game.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<Outcome> {
        let mut guess = match self.next_guess(output)? {
            Some(guess) => guess,
            None => return Ok(Outcome::NoCandidates),
        };

        let mut round = 1;
        loop {
            let feedback = match self.read_result(&guess, input, output)? {
                Input::Result(feedback) => feedback,
                Input::Quit => return Ok(Outcome::Quit),
            };

            if feedback.is_win() {
                writeln!(output, "You won!")?;
                info!("solved in {} rounds", round);
                return Ok(Outcome::Won { rounds: round });
            }

            if round >= self.rounds {
                writeln!(output, "You lose")?;
                return Ok(Outcome::Lost);
            }

            self.solver.apply_feedback(&guess, &feedback);
            round += 1;

            writeln!(output)?;
            guess = match self.next_guess(output)? {
                Some(guess) => guess,
                None => return Ok(Outcome::NoCandidates),
            };
        }
    }

    fn next_guess<W: Write>(&self, output: &mut W) -> Result<Option<Word>> {
        match self.solver.best_guess() {
            Ok(guess) => {
                writeln!(
                    output,
                    "Guess:  {}, {} possible words",
                    guess,
                    self.solver.remaining_count()
                )?;
                Ok(Some(guess))
            }
            Err(Error::EmptyCandidateSet) => {
                writeln!(output, "No possible words remain.")?;
                writeln!(
                    output,
                    "Either a result was mistyped or the word is not in the word list."
                )?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Prompt until a well-formed result or a quit is read.
    fn read_result<R: BufRead, W: Write>(&self, guess: &Word, input: &mut R, output: &mut W) -> Result<Input> {
        let mut line = String::new();
        loop {
            write!(output, "Result: ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(Input::Quit);
            }

            match line.trim() {
                "" => continue,
                "help" | "?" => writeln!(output, "{}", USAGE_TEXT)?,
                "quit" | "q" => return Ok(Input::Quit),
                "remaining" => self.print_remaining(output)?,
                text => match Feedback::parse(guess, text) {
                    Ok(feedback) => return Ok(Input::Result(feedback)),
                    Err(e) => {
                        debug!("rejected result {:?}: {}", text, e);
                        writeln!(output, "Invalid result: {}", e)?;
                        writeln!(output, "Type 'help' for the result format.")?;
                    }
                },
            }
        }
    }

    fn print_remaining<W: Write>(&self, output: &mut W) -> Result<()> {
        let remaining = self.solver.possible_answers();
        writeln!(output, "Remaining possibilities: {}", remaining.len())?;
        for word in remaining.iter().take(REMAINING_LIST_LIMIT) {
            writeln!(output, "  {}", word)?;
        }
        if remaining.len() > REMAINING_LIST_LIMIT {
            writeln!(output, "  ...")?;
        }
        Ok(())
    }
}
