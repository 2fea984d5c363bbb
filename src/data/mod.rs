//! Content sources: the built-in question set and JSON files.

mod builtin;
mod loader;

use tracing::warn;

use crate::models::{ContentError, PrizeLadder, Question};

pub use builtin::builtin_content;
pub use loader::{LoadError, load_content_from_json};

/// Questions plus the prize ladder they are played for. Read-only once built.
#[derive(Debug, Clone)]
pub struct Content {
    questions: Vec<Question>,
    prizes: PrizeLadder,
}

impl Content {
    /// Builds a content source, rejecting any question whose correct index
    /// does not point at one of its options.
    pub fn new(questions: Vec<Question>, prizes: PrizeLadder) -> Result<Self, ContentError> {
        for (position, question) in questions.iter().enumerate() {
            question.validate(position)?;
        }

        if questions.len() != prizes.len() {
            warn!(
                questions = questions.len(),
                prizes = prizes.len(),
                "question count and prize ladder differ, playing the shorter of the two"
            );
        }

        Ok(Self { questions, prizes })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn prizes(&self) -> &PrizeLadder {
        &self.prizes
    }

    /// Number of positions that can actually be played: a question is only
    /// asked when there is a prize slot for it.
    pub fn playable(&self) -> usize {
        self.questions.len().min(self.prizes.len())
    }
}
