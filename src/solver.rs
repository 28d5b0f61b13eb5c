//! Adaptive elimination loop.
//!
//! Each round the current guess is checked against the puzzle, the candidate set is cut
//! down to the words that agree with the observed feedback, and the remaining candidates
//! are ranked against themselves to pick the next guess. The loop ends when the puzzle is
//! solved, when no candidate is left, or when the attempt budget runs out.

use crate::error::{Result, WordleError};
use crate::feedback::FeedbackCode;
use crate::ranker::{self, GuessAnalysis};
use crate::word::{CandidateSet, Word};
use crate::DEFAULT_MAX_ATTEMPTS;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Knobs for a single solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of guesses before giving up. Must be at least 1.
    pub max_attempts: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SolverConfig {
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingGuess,
    Evaluating,
    Filtering,
    Solved,
    Exhausted,
}

/// Why a solve stopped without finding the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// Filtering removed every word: the target is not in the universe, or the feedback
    /// supplied was inconsistent.
    NoCandidatesRemain,
    /// Every allowed guess was used.
    AttemptLimitReached,
}

/// Final result of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { attempts: usize },
    Exhausted(Exhaustion),
}

impl Outcome {
    pub fn is_solved(self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    pub fn attempts(self) -> Option<usize> {
        match self {
            Outcome::Solved { attempts } => Some(attempts),
            Outcome::Exhausted(_) => None,
        }
    }
}

/// One guess and the feedback it got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based round number
    pub number: usize,
    pub guess: Word,
    pub code: FeedbackCode,
    /// Candidates that were still possible when the guess was made
    pub candidates: usize,
}

/// State machine for one puzzle attempt.
///
/// Drive it with [`EliminationLoop::observe`] when feedback comes from outside (a person
/// playing the real puzzle), or with [`EliminationLoop::run`] when a feedback function is
/// available.
#[derive(Debug, Clone)]
pub struct EliminationLoop {
    candidates: CandidateSet,
    current_guess: Word,
    max_attempts: usize,
    state: LoopState,
    rounds: Vec<Round>,
    outcome: Option<Outcome>,
}

impl EliminationLoop {
    pub fn new(universe: &CandidateSet, opening_guess: Word, config: SolverConfig) -> Result<Self> {
        if universe.is_empty() {
            return Err(WordleError::EmptyUniverse);
        }
        if config.max_attempts == 0 {
            return Err(WordleError::InvalidAttemptBudget);
        }
        opening_guess.expect_length(universe.word_length())?;

        Ok(Self {
            candidates: universe.clone(),
            current_guess: opening_guess,
            max_attempts: config.max_attempts,
            state: LoopState::AwaitingGuess,
            rounds: Vec::new(),
            outcome: None,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The guess to play next, or `None` once the loop has finished.
    pub fn current_guess(&self) -> Option<&Word> {
        match self.state {
            LoopState::Solved | LoopState::Exhausted => None,
            _ => Some(&self.current_guess),
        }
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Feed the feedback code the current guess received.
    ///
    /// Returns `Some(outcome)` when this round ended the loop. Calling it again after the
    /// loop has finished changes nothing and returns the same outcome.
    pub fn observe(&mut self, code: FeedbackCode) -> Result<Option<Outcome>> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }

        let word_length = self.candidates.word_length();
        if !code.fits(word_length) {
            return Err(WordleError::InvalidFeedback {
                code: code.value(),
                word_length,
            });
        }

        self.state = LoopState::Evaluating;
        let guess = self.current_guess.clone();
        let number = self.rounds.len() + 1;
        self.rounds.push(Round {
            number,
            guess: guess.clone(),
            code,
            candidates: self.candidates.len(),
        });

        if code.is_solved(word_length) {
            log::debug!("solved with '{}' in {} rounds", guess, number);
            return Ok(Some(self.finish(Outcome::Solved { attempts: number })));
        }

        self.state = LoopState::Filtering;
        let before = self.candidates.len();
        self.candidates.retain_matching(&guess, code)?;
        log::debug!(
            "round {}: '{}' scored {}, {} of {} candidates left",
            number,
            guess,
            code,
            self.candidates.len(),
            before
        );

        if self.candidates.is_empty() {
            return Ok(Some(
                self.finish(Outcome::Exhausted(Exhaustion::NoCandidatesRemain)),
            ));
        }
        if number >= self.max_attempts {
            return Ok(Some(
                self.finish(Outcome::Exhausted(Exhaustion::AttemptLimitReached)),
            ));
        }

        let next = ranker::rank_candidates(&self.candidates)?
            .into_iter()
            .next()
            .ok_or(WordleError::EmptyCandidateSet)?;
        self.current_guess = next.word;
        self.state = LoopState::AwaitingGuess;
        Ok(None)
    }

    /// Play rounds until the loop finishes, asking `feedback` for each guess's code and
    /// reporting every round to `on_round`.
    pub fn run<F, O>(&mut self, mut feedback: F, mut on_round: O) -> Result<Outcome>
    where
        F: FnMut(&Word) -> Result<FeedbackCode>,
        O: FnMut(&Round),
    {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            let code = feedback(&self.current_guess)?;
            let finished = self.observe(code)?;
            if let Some(round) = self.rounds.last() {
                on_round(round);
            }
            if let Some(outcome) = finished {
                return Ok(outcome);
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.state = match outcome {
            Outcome::Solved { .. } => LoopState::Solved,
            Outcome::Exhausted(reason) => {
                log::debug!("gave up after {} rounds: {:?}", self.rounds.len(), reason);
                LoopState::Exhausted
            }
        };
        self.outcome = Some(outcome);
        outcome
    }
}

/// Solve a puzzle knowing the target word (for testing/benchmarking).
pub fn solve(
    target: &Word,
    universe: &CandidateSet,
    opening_guess: &Word,
    max_attempts: usize,
) -> Result<Outcome> {
    solve_with_observer(
        target,
        universe,
        opening_guess,
        SolverConfig::with_max_attempts(max_attempts),
        |_| {},
    )
}

/// [`solve`], reporting each round to `on_round` as it is played.
pub fn solve_with_observer<O>(
    target: &Word,
    universe: &CandidateSet,
    opening_guess: &Word,
    config: SolverConfig,
    on_round: O,
) -> Result<Outcome>
where
    O: FnMut(&Round),
{
    target.expect_length(universe.word_length())?;
    let mut game = EliminationLoop::new(universe, opening_guess.clone(), config)?;
    game.run(|guess| FeedbackCode::encode(guess, target), on_round)
}

/// The highest-entropy opening guess over the whole universe.
pub fn best_opening(universe: &CandidateSet) -> Result<GuessAnalysis> {
    ranker::rank_candidates(universe)?
        .into_iter()
        .next()
        .ok_or(WordleError::EmptyUniverse)
}

/// Outcome counts from solving every word of a universe with one fixed opening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// `(attempts, count)` for solved targets, ascending by attempts
    pub distribution: Vec<(usize, usize)>,
    pub no_candidates: usize,
    pub attempt_limit: usize,
}

impl BenchmarkReport {
    pub fn solved(&self) -> usize {
        self.distribution.iter().map(|(_, count)| count).sum()
    }

    pub fn total(&self) -> usize {
        self.solved() + self.no_candidates + self.attempt_limit
    }

    /// Mean attempts over solved targets, `None` if nothing was solved.
    pub fn average_attempts(&self) -> Option<f64> {
        let solved = self.solved();
        if solved == 0 {
            return None;
        }
        let total_guesses: usize = self.distribution.iter().map(|(g, c)| g * c).sum();
        Some(total_guesses as f64 / solved as f64)
    }
}

/// Solve for every word in `universe` in parallel.
pub fn benchmark(
    universe: &CandidateSet,
    opening_guess: &Word,
    config: SolverConfig,
) -> Result<BenchmarkReport> {
    let outcomes = universe
        .words()
        .par_iter()
        .map(|target| {
            solve_with_observer(target, universe, opening_guess, config, |_| {})
        })
        .collect::<Result<Vec<_>>>()?;

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut report = BenchmarkReport::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Solved { attempts } => *counts.entry(attempts).or_default() += 1,
            Outcome::Exhausted(Exhaustion::NoCandidatesRemain) => report.no_candidates += 1,
            Outcome::Exhausted(Exhaustion::AttemptLimitReached) => report.attempt_limit += 1,
        }
    }

    report.distribution = counts.into_iter().collect();
    Ok(report)
}
