//! Parsing of one line of player input.

use crate::models::Lifeline;

/// What a line of input asks the round to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    UseLifeline(Lifeline),
    /// Option index, already mapped from the letter.
    Answer(usize),
    Invalid,
}

impl Command {
    pub fn parse(raw: &str) -> Self {
        let token = normalize(raw);

        match token.as_str() {
            "quit" | "q" => return Self::Quit,
            "a" => return Self::Answer(0),
            "b" => return Self::Answer(1),
            "c" => return Self::Answer(2),
            "d" => return Self::Answer(3),
            _ => {}
        }

        Lifeline::from_token(&token).map_or(Self::Invalid, Self::UseLifeline)
    }
}

/// Lowercases and collapses runs of whitespace into single spaces.
fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
