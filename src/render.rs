//! Terminal rendering of a guess and its feedback.

use crate::feedback::{Feedback, FeedbackCode};
use crate::word::Word;
use colored::Colorize;
use std::fmt;

/// A guess drawn as a row of colored tiles: green for exact, yellow for present elsewhere,
/// white for absent.
pub struct ColoredRow<'a> {
    pub guess: &'a Word,
    pub code: FeedbackCode,
}

impl<'a> ColoredRow<'a> {
    pub fn new(guess: &'a Word, code: FeedbackCode) -> Self {
        Self { guess, code }
    }
}

impl fmt::Display for ColoredRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let feedbacks = self.code.to_feedbacks(self.guess.len());
        for (i, (letter, feedback)) in self.guess.as_str().chars().zip(feedbacks).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let tile = format!(" {} ", letter.to_ascii_uppercase()).black();
            match feedback {
                Feedback::Correct => write!(f, "{}", tile.on_green())?,
                Feedback::Present => write!(f, "{}", tile.on_yellow())?,
                Feedback::Absent => write!(f, "{}", tile.on_white())?,
            }
        }
        Ok(())
    }
}
