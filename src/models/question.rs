use serde::Deserialize;
use thiserror::Error;

/// Number of answer options every question carries.
pub const NUM_OPTIONS: usize = 4;

/// Labels shown next to each option, in option order.
pub const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

/// Problems found while building a content source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("question {position} has correct index {index}, expected 0..={max}", max = NUM_OPTIONS - 1)]
    CorrectIndexOutOfRange { position: usize, index: usize },
    #[error("content source has no questions")]
    NoQuestions,
    #[error("content source has an empty prize ladder")]
    NoPrizes,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(alias = "q")]
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    #[serde(alias = "correct")]
    pub correct_index: usize,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: [&str; NUM_OPTIONS], correct_index: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.map(str::to_string),
            correct_index,
        }
    }

    /// Checks the correct index against the option count. `position` is only
    /// used to point at the offending record in the error.
    pub fn validate(&self, position: usize) -> Result<(), ContentError> {
        if self.correct_index >= NUM_OPTIONS {
            return Err(ContentError::CorrectIndexOutOfRange {
                position,
                index: self.correct_index,
            });
        }
        Ok(())
    }

    /// Option indices that are not the correct answer, in option order.
    pub fn incorrect_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_OPTIONS).filter(move |&i| i != self.correct_index)
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_every_option_slot() {
        for index in 0..NUM_OPTIONS {
            let q = Question::new("?", ["a", "b", "c", "d"], index);
            assert!(q.validate(0).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let q = Question::new("?", ["a", "b", "c", "d"], 4);
        assert_eq!(
            q.validate(7),
            Err(ContentError::CorrectIndexOutOfRange { position: 7, index: 4 })
        );
    }

    #[test]
    fn test_incorrect_indices_skip_correct() {
        let q = Question::new("?", ["a", "b", "c", "d"], 2);
        assert_eq!(q.incorrect_indices().collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(q.correct_option(), "c");
    }

    #[test]
    fn test_deserialize_accepts_short_field_names() {
        let json = r#"{"q": "Red planet?", "options": ["Earth", "Mars", "Venus", "Jupiter"], "correct": 1}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.prompt, "Red planet?");
        assert_eq!(q.correct_index, 1);
    }
}
