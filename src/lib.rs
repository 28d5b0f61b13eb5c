//! # Wordle Entropy
//!
//! Solves fixed-length word puzzles by choosing, every turn, the guess with the highest
//! expected information gain over the words that are still possible.
//!
//! The pieces build on each other: [`feedback`] computes the code a guess receives against
//! a solution, [`entropy`] turns the spread of those codes into a score in bits,
//! [`ranker`] orders guesses by that score, and [`solver`] runs the guess / observe /
//! eliminate loop.

pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod ranker;
pub mod render;
pub mod solver;
pub mod word;

pub use error::{Result, WordleError};
pub use feedback::{decode, encode, Feedback, FeedbackCode};
pub use ranker::{rank, GuessAnalysis};
pub use solver::{solve, EliminationLoop, Exhaustion, Outcome, Round, SolverConfig};
pub use word::{CandidateSet, Word};

/// Word length of the standard puzzle
pub const WORD_LENGTH: usize = 5;

/// Longest supported word; keeps every feedback code inside a `u32`.
pub const MAX_WORD_LENGTH: usize = 20;

/// Number of letters words may be built from
pub const ALPHABET_SIZE: usize = 26;

pub const DEFAULT_MAX_ATTEMPTS: usize = 9;

/// How many words from the front of the list are ranked to pick an opening guess
pub const DEFAULT_RANKING_SAMPLE: usize = 200;

pub const DEFAULT_TOP: usize = 15;
