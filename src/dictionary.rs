//! Loading the word universe from a plain-text word list.

use crate::error::{Result, WordleError};
use crate::word::{CandidateSet, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Used when the word list file does not exist.
pub const FALLBACK_WORDS: &[&str] = &[
    "tares", "lares", "rales", "rates", "teras", "nares", "soare", "tales", "reais", "tears",
    "carta", "tanto", "certo", "antes", "falar",
];

/// One word per line. Lines that are not exactly `word_length` letters a-z once trimmed and
/// lowercased are skipped, and repeats keep their first position. Lines with non-ASCII
/// letters such as "maçãs" are skipped too, with a warning, rather than being folded to a-z.
pub fn parse_word_list(text: &str, word_length: usize) -> Result<CandidateSet> {
    let mut skipped = 0usize;
    let mut non_ascii = 0usize;
    let words: Vec<Word> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match Word::with_length(line, word_length) {
            Ok(word) => Some(word),
            Err(_) if !line.is_ascii() => {
                non_ascii += 1;
                None
            }
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();

    if non_ascii > 0 {
        log::warn!(
            "skipped {} lines with letters outside a-z (accented letters are not supported)",
            non_ascii
        );
    }
    if skipped > 0 {
        log::debug!("skipped {} lines that are not {}-letter words", skipped, word_length);
    }
    CandidateSet::new(words, word_length)
}

/// Read the word list at `path`, falling back to [`FALLBACK_WORDS`] if it does not exist.
pub fn load_word_list(path: &Path, word_length: usize) -> Result<CandidateSet> {
    match fs::read_to_string(path) {
        Ok(text) => parse_word_list(&text, word_length),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::warn!(
                "word list '{}' not found, using the built-in list",
                path.display()
            );
            fallback_universe(word_length)
        }
        Err(source) => Err(WordleError::WordList {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// The built-in list, restricted to `word_length`-letter words.
pub fn fallback_universe(word_length: usize) -> Result<CandidateSet> {
    parse_word_list(&FALLBACK_WORDS.join("\n"), word_length)
}
