//! Lifeline kinds and the per-game availability state.

use std::fmt;

use thiserror::Error;

/// One of the three one-time aids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifeline {
    /// Removes two incorrect options.
    FiftyFifty,
    /// Shows a synthetic audience vote.
    AudiencePoll,
    /// Asks a simulated friend for a suggestion.
    PhoneAFriend,
}

impl Lifeline {
    pub const ALL: [Lifeline; 3] = [Self::FiftyFifty, Self::AudiencePoll, Self::PhoneAFriend];

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FiftyFifty => "fifty-fifty",
            Self::AudiencePoll => "audience",
            Self::PhoneAFriend => "phone-a-friend",
        }
    }

    /// Name as shown to the player.
    pub fn label(self) -> &'static str {
        match self {
            Self::FiftyFifty => "50-50",
            Self::AudiencePoll => "Audience Poll",
            Self::PhoneAFriend => "Phone-a-Friend",
        }
    }

    /// Matches an already normalised input token against each lifeline's synonyms.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "50-50" | "50 50" | "50" | "fifty-fifty" => Some(Self::FiftyFifty),
            "audience" | "audience poll" | "poll" => Some(Self::AudiencePoll),
            "phone" | "phone-a-friend" | "phone a friend" | "friend" => Some(Self::PhoneAFriend),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::FiftyFifty => 0,
            Self::AudiencePoll => 1,
            Self::PhoneAFriend => 2,
        }
    }
}

impl fmt::Display for Lifeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifelineError {
    #[error("{0} already used")]
    AlreadyUsed(Lifeline),
}

/// Which lifelines are still available in the current game.
///
/// Every flag starts set and is cleared at most once; `consume` is the only
/// way to clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifelineState {
    available: [bool; 3],
}

impl LifelineState {
    pub fn new() -> Self {
        Self {
            available: [true; 3],
        }
    }

    pub fn is_available(&self, lifeline: Lifeline) -> bool {
        self.available[lifeline.slot()]
    }

    pub fn consume(&mut self, lifeline: Lifeline) -> Result<(), LifelineError> {
        let slot = &mut self.available[lifeline.slot()];
        if !*slot {
            return Err(LifelineError::AlreadyUsed(lifeline));
        }
        *slot = false;
        Ok(())
    }

    pub fn available(&self) -> impl Iterator<Item = Lifeline> + '_ {
        Lifeline::ALL
            .into_iter()
            .filter(move |lifeline| self.is_available(*lifeline))
    }
}

impl Default for LifelineState {
    fn default() -> Self {
        Self::new()
    }
}
