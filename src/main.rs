//! Wordle Helper CLI
//!
//! Interactive command-line front end for the letter-frequency Wordle helper.

use anyhow::{bail, Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use wordle_helper::{load_dictionary, load_words_from_path, Outcome, Session, Word, WordleSolver, MAX_ROUNDS};

/// Upper bound accepted for `--rounds`.
const ROUNDS_LIMIT: u64 = 100;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list to use, one word per line (defaults to the built-in dictionary)
    #[arg(short, long, value_name = "PATH")]
    words: Option<PathBuf>,

    /// Number of guesses allowed
    #[arg(
        short,
        long,
        default_value_t = MAX_ROUNDS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=ROUNDS_LIMIT)
    )]
    rounds: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively (the default)
    Play,
    /// Print the best opening guess
    Suggest,
    /// Print the best-scoring candidates
    Top {
        #[arg(default_value_t = 5)]
        n: usize,
    },
    /// Play against a known word and show every round
    Solve { target: String },
    /// Play every word in the list and show how many guesses each took
    #[command(alias = "bench")]
    Benchmark,
}

fn load(args: &Args) -> Result<Vec<Word>> {
    let words = match &args.words {
        Some(path) => load_words_from_path(path)
            .with_context(|| format!("could not read word list {}", path.display()))?,
        None => load_dictionary(),
    };
    if words.is_empty() {
        bail!("the word list is empty");
    }
    Ok(words)
}

fn run_interactive(words: Vec<Word>, rounds: usize) -> Result<()> {
    println!();
    print!("{}", wordle_helper::session::USAGE_TEXT);
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut session = Session::new(words, rounds);
    let outcome = session.run(&mut input, &mut output)?;
    output.flush()?;

    if outcome == Outcome::NoCandidates {
        std::process::exit(1);
    }
    Ok(())
}

fn solve(words: Vec<Word>, target: &str, rounds: usize) -> Result<()> {
    let target = Word::parse(target)?;
    let mut solver = WordleSolver::new(words);

    println!("Solving for: {}", target.to_string().to_uppercase());
    println!();

    let guesses = solver.solve_for_target(&target, rounds)?;
    for (i, (guess, feedback)) in guesses.iter().enumerate() {
        println!("Guess {}: {} → {} {}", i + 1, guess, feedback.encode(guess), feedback);
    }

    println!();
    match guesses.last() {
        Some((_, feedback)) if feedback.is_win() => println!("Solved in {} guesses.", guesses.len()),
        _ => println!("Failed to solve within {} guesses.", rounds),
    }
    Ok(())
}

fn top(words: Vec<Word>, n: usize) {
    let solver = WordleSolver::new(words);
    let top = solver.top_guesses(n);

    println!("Top {} of {} words:", top.len(), solver.remaining_count());
    println!("{:>4} {:>8} {:>8}", "#", "Word", "Score");
    println!("{}", "-".repeat(22));
    for (i, candidate) in top.iter().enumerate() {
        println!("{:>4} {:>8} {:>8}", i + 1, candidate.word, candidate.score);
    }
}

fn benchmark(words: Vec<Word>, rounds: usize) -> Result<()> {
    let solver = WordleSolver::new(words);
    println!("Running benchmark on all {} words...", solver.all_words().len());

    let start = Instant::now();
    let distribution = solver.guess_distribution(rounds)?;
    let elapsed = start.elapsed();

    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    let solved: Vec<_> = distribution.iter().filter(|(g, _)| *g <= rounds).collect();
    let solved_total: usize = solved.iter().map(|(_, c)| c).sum();
    let solved_guesses: usize = solved.iter().map(|(g, c)| g * c).sum();

    println!();
    println!("Guess distribution:");
    for (guesses, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        let label = if *guesses > rounds {
            "failed".to_string()
        } else {
            format!("{} guesses", guesses)
        };
        println!("  {:>9}: {:>5} ({:>5.1}%) {}", label, count, pct, bar);
    }
    println!();
    if solved_total > 0 {
        println!("Average guesses (solved): {:.3}", solved_guesses as f64 / solved_total as f64);
    }
    println!("Words not solved in {} guesses: {}", rounds, total - solved_total);
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let words = load(&args)?;

    match &args.command {
        None | Some(Command::Play) => run_interactive(words, args.rounds),
        Some(Command::Suggest) => {
            let solver = WordleSolver::new(words);
            let guess = solver.best_guess()?;
            println!("Best opening guess: {}", guess);
            Ok(())
        }
        Some(Command::Top { n }) => {
            top(words, *n);
            Ok(())
        }
        Some(Command::Solve { target }) => solve(words, target, args.rounds),
        Some(Command::Benchmark) => benchmark(words, args.rounds),
    }
}
