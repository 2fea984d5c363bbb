//! Text rendering for the console game.

pub mod quiz;
pub mod result;
pub mod welcome;

/// Stand-in text for an option hidden by 50-50.
pub const REMOVED_PLACEHOLDER: &str = "-----";
