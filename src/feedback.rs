//! Feedback calculation for guesses.
//!
//! This module computes the per-letter feedback (exact / present elsewhere / absent) for a
//! guess against a solution and packs it into a single base-3 integer, position 0 being the
//! most significant digit.

use crate::error::Result;
use crate::word::Word;
use crate::{ALPHABET_SIZE, MAX_WORD_LENGTH};
use std::fmt;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in the solution, or every copy already credited (gray)
    Absent,
    /// Letter in the solution at another position (yellow)
    Present,
    /// Correct letter in correct position (green)
    Correct,
}

impl Feedback {
    pub const ALL: [Feedback; 3] = [Feedback::Absent, Feedback::Present, Feedback::Correct];

    /// The base-3 digit of this state
    pub fn digit(self) -> u32 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }

    pub fn from_digit(digit: u32) -> Option<Self> {
        Self::ALL.get(digit as usize).copied()
    }

    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for one guess, packed as a base-3 number in
/// `0..3^L` where `L` is the word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackCode(pub u32);

impl FeedbackCode {
    /// Number of distinct codes for words of `word_length` letters (3^L).
    ///
    /// `word_length` must not exceed [`MAX_WORD_LENGTH`].
    pub fn num_codes(word_length: usize) -> usize {
        debug_assert!(
            word_length <= MAX_WORD_LENGTH,
            "word length {} is above the maximum of {}",
            word_length,
            MAX_WORD_LENGTH
        );
        3usize.pow(word_length as u32)
    }

    /// The all-correct code, 3^L - 1. This is the only code that ends a puzzle.
    ///
    /// `word_length` must not exceed [`MAX_WORD_LENGTH`].
    pub fn solved(word_length: usize) -> Self {
        debug_assert!(
            word_length <= MAX_WORD_LENGTH,
            "word length {} is above the maximum of {}",
            word_length,
            MAX_WORD_LENGTH
        );
        Self(3u32.pow(word_length as u32) - 1)
    }

    /// Whether this code can come from comparing two `word_length`-letter words.
    pub fn fits(self, word_length: usize) -> bool {
        word_length <= MAX_WORD_LENGTH && (self.0 as usize) < Self::num_codes(word_length)
    }

    pub fn is_solved(self, word_length: usize) -> bool {
        self == Self::solved(word_length)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Pack individual feedback values, first position most significant.
    pub fn from_feedbacks(feedbacks: &[Feedback]) -> Self {
        Self(
            feedbacks
                .iter()
                .fold(0, |code, feedback| code * 3 + feedback.digit()),
        )
    }

    /// Calculate the feedback code for `guess` against `solution`.
    ///
    /// Exact matches are credited first and consume their solution letter. Remaining guess
    /// letters are then scanned left to right, each claiming one still unconsumed copy of
    /// the same letter, so a guess never earns more credits for a letter than the solution
    /// has copies.
    pub fn encode(guess: &Word, solution: &Word) -> Result<Self> {
        solution.expect_length(guess.len())?;
        Ok(Self::compute(guess, solution))
    }

    /// [`FeedbackCode::encode`] for callers that already know the lengths agree.
    pub(crate) fn compute(guess: &Word, solution: &Word) -> Self {
        let guess_bytes = guess.as_bytes();
        let solution_bytes = solution.as_bytes();
        debug_assert_eq!(guess_bytes.len(), solution_bytes.len());

        let mut exact: u32 = 0;
        let mut solution_remaining = [0u8; ALPHABET_SIZE];

        for (i, (&g, &s)) in guess_bytes.iter().zip(solution_bytes).enumerate() {
            if g == s {
                exact |= 1 << i;
            } else {
                solution_remaining[letter_idx(s)] += 1;
            }
        }

        let mut code = 0;
        for (i, &g) in guess_bytes.iter().enumerate() {
            let feedback = if exact & (1 << i) != 0 {
                Feedback::Correct
            } else {
                let remaining = &mut solution_remaining[letter_idx(g)];
                if *remaining > 0 {
                    *remaining -= 1;
                    Feedback::Present
                } else {
                    Feedback::Absent
                }
            };
            code = code * 3 + feedback.digit();
        }

        Self(code)
    }

    /// Unpack into `word_length` feedback values; the exact inverse of
    /// [`FeedbackCode::from_feedbacks`] for codes below 3^L. The extra high digits of a
    /// larger code are dropped; use [`FeedbackCode::checked_feedbacks`] for untrusted codes.
    pub fn to_feedbacks(self, word_length: usize) -> Vec<Feedback> {
        let mut rest = self.0;
        let mut feedbacks = vec![Feedback::Absent; word_length];
        for feedback in feedbacks.iter_mut().rev() {
            *feedback = match rest % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            rest /= 3;
        }
        feedbacks
    }

    /// [`FeedbackCode::to_feedbacks`], or `None` if the code is out of range for
    /// `word_length`.
    pub fn checked_feedbacks(self, word_length: usize) -> Option<Vec<Feedback>> {
        self.fits(word_length).then(|| self.to_feedbacks(word_length))
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        let feedbacks: Option<Vec<_>> = s.trim().chars().map(Feedback::from_char).collect();
        let feedbacks = feedbacks?;
        if feedbacks.is_empty() || feedbacks.len() > MAX_WORD_LENGTH {
            return None;
        }
        Some(Self::from_feedbacks(&feedbacks))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self, word_length: usize) -> String {
        self.to_feedbacks(word_length)
            .iter()
            .map(|f| f.to_char())
            .collect()
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Feedback code for `guess` against `solution`; fails if their lengths differ.
pub fn encode(guess: &Word, solution: &Word) -> Result<FeedbackCode> {
    FeedbackCode::encode(guess, solution)
}

/// Split a code back into its `word_length` base-3 digits.
pub fn decode(code: FeedbackCode, word_length: usize) -> Vec<Feedback> {
    code.to_feedbacks(word_length)
}

fn letter_idx(letter: u8) -> usize {
    (letter - b'a') as usize
}
