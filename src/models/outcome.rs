/// How a single question round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player locked in the option at this index.
    Answered(usize),
    /// The player walked away.
    Quit,
}

/// The four ways a game can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Every playable question answered correctly.
    Win,
    /// A wrong answer.
    Lose,
    /// The player quit, or input ended.
    Quit,
    /// Positions ran out without any other terminal state.
    Exhausted,
}

/// Final result of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub terminal: Terminal,
    /// Prize label the player leaves with.
    pub prize: String,
    pub correct_answers: usize,
}
