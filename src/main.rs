//! Wordle Entropy CLI
//!
//! Ranks opening guesses, auto-plays puzzles, benchmarks the strategy over a whole word
//! list, and assists with a puzzle played elsewhere.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use wordle_entropy::dictionary::load_word_list;
use wordle_entropy::render::ColoredRow;
use wordle_entropy::solver::{self, Round};
use wordle_entropy::{
    rank, CandidateSet, EliminationLoop, Exhaustion, FeedbackCode, GuessAnalysis, Outcome,
    SolverConfig, Word, DEFAULT_MAX_ATTEMPTS, DEFAULT_RANKING_SAMPLE, DEFAULT_TOP, WORD_LENGTH,
};

#[derive(Parser)]
#[command(version, about = "Solve word puzzles by maximizing expected information")]
struct Cli {
    /// Word list, one word per line. A small built-in list is used if the file is missing.
    #[arg(long, short, global = true, default_value = "words.txt")]
    words: PathBuf,

    #[arg(long, global = true, default_value_t = WORD_LENGTH)]
    word_length: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the best opening guesses
    Rank {
        /// Rank only this many words from the front of the list
        #[arg(long, default_value_t = DEFAULT_RANKING_SAMPLE)]
        sample: usize,
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },
    /// Auto-play against a known target
    Solve {
        target: String,
        /// Opening guess; defaults to the best word of the ranking sample
        #[arg(long)]
        opening: Option<String>,
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },
    /// Rank a sample, pick a random target and auto-play it
    Play {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },
    /// Solve every word of the list and print the attempt distribution
    Benchmark {
        #[arg(long)]
        opening: Option<String>,
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },
    /// Suggest guesses for a puzzle played elsewhere; type the feedback you get back
    Assist {
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stdout = io::stdout();
            for frame in frames.iter().cycle() {
                if !running_clone.load(Ordering::Relaxed) {
                    break;
                }
                let _ = write!(stdout, "\r{} {}", frame, message);
                let _ = stdout.flush();
                thread::sleep(Duration::from_millis(80));
            }
            let _ = write!(stdout, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stdout.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn ranking_sample(universe: &CandidateSet, sample: usize) -> Result<Vec<GuessAnalysis>> {
    let words = &universe.words()[..sample.min(universe.len())];
    // the sample is ranked against itself, so the opening is always a sampled word
    let sampled = CandidateSet::new(words.to_vec(), universe.word_length())
        .context("ranking sample is empty")?;
    Ok(rank(words, &sampled)?)
}

fn print_ranking(ranking: &[GuessAnalysis], top: usize) {
    println!("{:>4} {:>8} {:>10}", "#", "Word", "Entropy");
    println!("{}", "-".repeat(24));
    for (i, analysis) in ranking.iter().take(top).enumerate() {
        println!(
            "{:>4} {:>8} {:>10}",
            i + 1,
            analysis.word.as_str().to_uppercase(),
            format!("{:.4} bits", analysis.entropy)
        );
    }
}

fn print_round(round: &Round) {
    println!(
        "Guess {}: {}  ({} candidates)",
        round.number,
        round.guess.as_str().to_uppercase(),
        round.candidates
    );
    println!("{}", ColoredRow::new(&round.guess, round.code));
    println!();
}

fn print_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Solved { attempts } => println!("✓ Solved in {} guesses!", attempts),
        Outcome::Exhausted(Exhaustion::NoCandidatesRemain) => {
            println!("✗ No word in the list matches the feedback.")
        }
        Outcome::Exhausted(Exhaustion::AttemptLimitReached) => {
            println!("✗ Ran out of attempts.")
        }
    }
}

fn opening_or_best(
    opening: Option<String>,
    universe: &CandidateSet,
    sample: usize,
) -> Result<Word> {
    match opening {
        Some(word) => Ok(Word::with_length(&word, universe.word_length())?),
        None => {
            let ranking = ranking_sample(universe, sample)?;
            match ranking.into_iter().next() {
                Some(best) => Ok(best.word),
                None => bail!("no opening guess available"),
            }
        }
    }
}

fn run_solve(
    universe: &CandidateSet,
    target: &Word,
    opening: &Word,
    max_attempts: usize,
) -> Result<()> {
    println!("Solving for: {}", target.as_str().to_uppercase());
    println!("Opening guess: {}", opening.as_str().to_uppercase());
    println!();

    let outcome = solver::solve_with_observer(
        target,
        universe,
        opening,
        SolverConfig::with_max_attempts(max_attempts),
        print_round,
    )?;
    print_outcome(outcome);
    Ok(())
}

fn run_benchmark(universe: &CandidateSet, opening: &Word, max_attempts: usize) -> Result<()> {
    println!(
        "Running benchmark on all {} words, opening with {}...",
        universe.len(),
        opening.as_str().to_uppercase()
    );

    let spinner = Spinner::new("Computing...");
    let start = Instant::now();
    let report = solver::benchmark(
        universe,
        opening,
        SolverConfig::with_max_attempts(max_attempts),
    );
    let elapsed = start.elapsed();
    spinner.stop();
    let report = report?;

    let total = report.total().max(1);
    println!("Guess distribution:");
    for (guesses, count) in &report.distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    if let Some(average) = report.average_attempts() {
        println!("Average guesses: {:.3}", average);
    }
    println!("Out of attempts: {}", report.attempt_limit);
    println!("No candidates left: {}", report.no_candidates);
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn run_assist(universe: &CandidateSet, max_attempts: usize) -> Result<()> {
    let opening = opening_or_best(None, universe, DEFAULT_RANKING_SAMPLE)?;
    let mut game = EliminationLoop::new(
        universe,
        opening,
        SolverConfig::with_max_attempts(max_attempts),
    )?;
    let word_length = universe.word_length();

    println!("Type the feedback for each guess: g=green, y=yellow, b=gray (e.g. gybbb).");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    while let Some(guess) = game.current_guess() {
        println!(
            "Try {}  ({} candidates)",
            guess.as_str().to_uppercase(),
            game.remaining_count()
        );
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        let code = match FeedbackCode::parse(input) {
            Some(code) if input.chars().count() == word_length => code,
            _ => {
                println!("Invalid pattern: {}", input);
                continue;
            }
        };

        if let Some(outcome) = game.observe(code)? {
            print_outcome(outcome);
            return Ok(());
        }
        if game.remaining_count() <= 10 {
            let remaining: Vec<_> = game
                .candidates()
                .iter()
                .map(|w| w.as_str().to_uppercase())
                .collect();
            println!("Remaining words: {:?}", remaining);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let universe = load_word_list(&cli.words, cli.word_length)
        .with_context(|| format!("loading words from '{}'", cli.words.display()))?;
    log::info!("loaded {} words", universe.len());

    match cli.command {
        Command::Rank { sample, top } => {
            let ranking = ranking_sample(&universe, sample)?;
            print_ranking(&ranking, top);
        }
        Command::Solve {
            target,
            opening,
            max_attempts,
        } => {
            let target = Word::with_length(&target, universe.word_length())?;
            let opening = opening_or_best(opening, &universe, DEFAULT_RANKING_SAMPLE)?;
            run_solve(&universe, &target, &opening, max_attempts)?;
        }
        Command::Play { seed, max_attempts } => {
            let ranking = ranking_sample(&universe, DEFAULT_RANKING_SAMPLE)?;
            print_ranking(&ranking, DEFAULT_TOP);
            println!();

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let target = universe
                .words()
                .choose(&mut rng)
                .context("word list is empty")?
                .clone();
            let opening = match ranking.into_iter().next() {
                Some(best) => best.word,
                None => bail!("no opening guess available"),
            };
            run_solve(&universe, &target, &opening, max_attempts)?;
        }
        Command::Benchmark {
            opening,
            max_attempts,
        } => {
            let opening = opening_or_best(opening, &universe, DEFAULT_RANKING_SAMPLE)?;
            run_benchmark(&universe, &opening, max_attempts)?;
        }
        Command::Assist { max_attempts } => run_assist(&universe, max_attempts)?,
    }

    Ok(())
}
