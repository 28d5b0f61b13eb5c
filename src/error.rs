//! Error types shared by every part of the solver.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a caller breaks an input contract.
///
/// Running out of attempts or candidates is not an error; see [`crate::solver::Outcome`].
#[derive(Error, Debug)]
pub enum WordleError {
    #[error("'{word}' is not a valid word: {reason}")]
    InvalidWord { word: String, reason: &'static str },
    #[error("'{word}' has {found} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("feedback code {code} is out of range for {word_length}-letter words")]
    InvalidFeedback { code: u32, word_length: usize },
    #[error("the attempt budget must allow at least one guess")]
    InvalidAttemptBudget,
    #[error("no usable words were supplied")]
    EmptyUniverse,
    #[error("cannot score a guess against an empty candidate set")]
    EmptyCandidateSet,
    #[error("failed to read word list '{}'", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordleError {
    /// Whether the caller handed over a malformed word, code or attempt budget.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            WordleError::InvalidWord { .. }
                | WordleError::LengthMismatch { .. }
                | WordleError::InvalidFeedback { .. }
                | WordleError::InvalidAttemptBudget
        )
    }
}

pub type Result<T, E = WordleError> = std::result::Result<T, E>;
