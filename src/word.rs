//! Validated words and the candidate set they are collected into.

use crate::error::{Result, WordleError};
use crate::feedback::FeedbackCode;
use crate::MAX_WORD_LENGTH;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A lowercase word made only of the letters `a` to `z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Trim and lowercase `s`, then check that it is a usable word of any supported length.
    pub fn new(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(WordleError::InvalidWord {
                word: s.to_string(),
                reason: "word is empty",
            });
        }
        if !normalized.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordleError::InvalidWord {
                word: s.to_string(),
                reason: "only the letters a to z are allowed",
            });
        }
        if normalized.len() > MAX_WORD_LENGTH {
            return Err(WordleError::InvalidWord {
                word: s.to_string(),
                reason: "word is too long",
            });
        }
        Ok(Self(normalized))
    }

    /// Like [`Word::new`], but also require exactly `length` letters.
    pub fn with_length(s: &str, length: usize) -> Result<Self> {
        let word = Self::new(s)?;
        word.expect_length(length)?;
        Ok(word)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn expect_length(&self, length: usize) -> Result<()> {
        if self.len() == length {
            Ok(())
        } else {
            Err(WordleError::LengthMismatch {
                word: self.0.clone(),
                expected: length,
                found: self.len(),
            })
        }
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The words still consistent with every feedback seen so far.
///
/// Keeps insertion order, never holds duplicates, and every member has the same length.
/// The length is remembered even after filtering empties the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
    word_length: usize,
}

impl CandidateSet {
    /// Build a universe of `word_length`-letter words.
    ///
    /// Repeated words are dropped, keeping the first occurrence. A word of any other
    /// length is rejected, and so is an empty input.
    pub fn new(words: impl IntoIterator<Item = Word>, word_length: usize) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        let mut duplicates = 0usize;

        for word in words {
            word.expect_length(word_length)?;
            if seen.insert(word.clone()) {
                unique.push(word);
            } else {
                duplicates += 1;
            }
        }

        if unique.is_empty() {
            return Err(WordleError::EmptyUniverse);
        }

        log::debug!(
            "built universe of {} words of length {} ({} duplicates dropped)",
            unique.len(),
            word_length,
            duplicates
        );

        Ok(Self {
            words: unique,
            word_length,
        })
    }

    /// Parse and validate a list of strings into a universe.
    pub fn from_strs<S: AsRef<str>>(words: &[S], word_length: usize) -> Result<Self> {
        let parsed = words
            .iter()
            .map(|w| Word::with_length(w.as_ref(), word_length))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed, word_length)
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Keep only the words that would have produced `code` for `guess`.
    ///
    /// The set only ever shrinks. A target that honestly produced `code` always survives.
    pub fn retain_matching(&mut self, guess: &Word, code: FeedbackCode) -> Result<()> {
        guess.expect_length(self.word_length)?;
        self.words
            .retain(|candidate| FeedbackCode::compute(guess, candidate) == code);
        Ok(())
    }

    /// Non-mutating version of [`CandidateSet::retain_matching`].
    pub fn filtered(&self, guess: &Word, code: FeedbackCode) -> Result<Self> {
        let mut out = self.clone();
        out.retain_matching(guess, code)?;
        Ok(out)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
