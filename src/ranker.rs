//! Best-first ordering of guesses by expected information gain.

use crate::entropy;
use crate::error::{Result, WordleError};
use crate::word::{CandidateSet, Word};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// Score every word in `words` against `candidates` and sort best first.
///
/// Ties on entropy go to words that are still candidates, then to the
/// lexicographically smallest word. Scoring runs in parallel; the order of the result
/// does not depend on scheduling.
pub fn rank(words: &[Word], candidates: &CandidateSet) -> Result<Vec<GuessAnalysis>> {
    if candidates.is_empty() {
        return Err(WordleError::EmptyCandidateSet);
    }
    for word in words {
        word.expect_length(candidates.word_length())?;
    }

    log::trace!(
        "ranking {} guesses against {} candidates",
        words.len(),
        candidates.len()
    );

    let n = candidates.len() as f64;
    let mut analyses = words
        .par_iter()
        .map(|word| {
            let entropy = entropy::score(word, candidates)?;
            Ok(GuessAnalysis {
                word: word.clone(),
                entropy,
                expected_remaining: n / 2_f64.powf(entropy),
                is_candidate: candidates.contains(word),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    analyses.sort_by(compare_analyses);
    Ok(analyses)
}

/// Rank the candidate set against itself.
pub fn rank_candidates(candidates: &CandidateSet) -> Result<Vec<GuessAnalysis>> {
    rank(candidates.words(), candidates)
}

/// The single best guess among `words`, or `None` if `words` is empty.
pub fn best_guess(words: &[Word], candidates: &CandidateSet) -> Result<Option<GuessAnalysis>> {
    Ok(rank(words, candidates)?.into_iter().next())
}

fn compare_analyses(a: &GuessAnalysis, b: &GuessAnalysis) -> Ordering {
    b.entropy
        .total_cmp(&a.entropy)
        .then_with(|| b.is_candidate.cmp(&a.is_candidate))
        .then_with(|| a.word.cmp(&b.word))
}
