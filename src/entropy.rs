//! Expected information gain of a guess.
//!
//! A guess splits the candidate set into buckets, one per feedback code it would receive.
//! Its score is the Shannon entropy of that split in bits: the more evenly the guess
//! spreads the candidates across codes, the more it tells us on average.

use crate::error::{Result, WordleError};
use crate::feedback::FeedbackCode;
use crate::word::{CandidateSet, Word};
use std::collections::HashMap;

/// Above this many possible codes the counts go into a map instead of a dense table.
const DENSE_CODE_LIMIT: usize = 59_049;

/// Entropy, in bits, of the feedback distribution `guess` produces over `candidates`.
///
/// The result lies in `[0, log2(min(3^L, |candidates|))]`. Scores are summed over the bucket
/// sizes in sorted order, so two guesses that split the set the same way get bit-identical
/// scores.
pub fn score(guess: &Word, candidates: &CandidateSet) -> Result<f64> {
    if candidates.is_empty() {
        return Err(WordleError::EmptyCandidateSet);
    }
    guess.expect_length(candidates.word_length())?;
    Ok(entropy_of(&bucket_sizes(guess, candidates), candidates.len()))
}

/// How many candidates land on each observed feedback code, unordered.
pub fn bucket_sizes(guess: &Word, candidates: &CandidateSet) -> Vec<u32> {
    let num_codes = FeedbackCode::num_codes(candidates.word_length());

    if num_codes <= DENSE_CODE_LIMIT {
        let mut pattern_counts = vec![0u32; num_codes];
        for answer in candidates {
            let code = FeedbackCode::compute(guess, answer);
            pattern_counts[code.value() as usize] += 1;
        }
        pattern_counts.retain(|&count| count > 0);
        pattern_counts
    } else {
        let mut pattern_counts: HashMap<FeedbackCode, u32> = HashMap::new();
        for answer in candidates {
            *pattern_counts
                .entry(FeedbackCode::compute(guess, answer))
                .or_default() += 1;
        }
        pattern_counts.into_values().collect()
    }
}

fn entropy_of(counts: &[u32], total: usize) -> f64 {
    let mut counts = counts.to_vec();
    counts.sort_unstable();

    let n = total as f64;
    let mut entropy = 0.0;
    for &count in &counts {
        let p = count as f64 / n;
        entropy -= p * p.log2();
    }

    // a single bucket yields -0.0
    if entropy > 0.0 {
        entropy
    } else {
        0.0
    }
}
