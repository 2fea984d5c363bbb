//! # kbc-quiz
//!
//! A console quiz game in the style of a television show: fifteen
//! multiple-choice questions, a rising prize ladder and three one-time
//! lifelines (50-50, audience poll, phone-a-friend).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kbc_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions and prizes from a JSON file
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Play one game on stdin/stdout
//!     let report = quiz.run()?;
//!     println!("Finished with {}", report.prize);
//!
//!     Ok(())
//! }
//! ```

mod data;
pub mod game;
pub mod logging;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

pub use data::{Content, LoadError, builtin_content, load_content_from_json};
pub use game::{GameConfig, GameSession, RandomSource, StdRandom};
pub use models::{
    ContentError, DEFAULT_ZERO_PRIZE, GameReport, Lifeline, LifelineError, LifelineState,
    NUM_OPTIONS, OPTION_LABELS, PrizeLadder, Question, RoundOutcome, Terminal,
};

use terminal::{ColorChoice, Console, StdConsole};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during the game.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz ready to be played in the terminal.
pub struct Quiz {
    content: Content,
    config: GameConfig,
    seed: Option<u64>,
    color: ColorChoice,
}

impl Quiz {
    /// Create a quiz over the given content.
    pub fn new(content: Content) -> Self {
        Self {
            content,
            config: GameConfig::default(),
            seed: None,
            color: ColorChoice::default(),
        }
    }

    /// The built-in fifteen question game.
    pub fn builtin() -> Self {
        Self::new(builtin_content())
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kbc_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let content = load_content_from_json(path)?;
        Ok(Self::new(content))
    }

    /// Fix the random seed so lifelines behave the same on every run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_phone_pause(mut self, pause: Duration) -> Self {
        self.config.phone_pause = pause;
        self
    }

    pub fn with_intro(mut self, show_intro: bool) -> Self {
        self.config.show_intro = show_intro;
        self
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Play one game on stdin/stdout.
    ///
    /// Blocks on player input until the game reaches a terminal state.
    pub fn run(self) -> Result<GameReport, QuizError> {
        let mut console = StdConsole::new(self.color);
        let mut rng = match self.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_os(),
        };
        self.play_with(&mut console, &mut rng)
    }

    /// Play one game against any console and random source.
    pub fn play_with<C, R>(&self, console: &mut C, rng: &mut R) -> Result<GameReport, QuizError>
    where
        C: Console,
        R: RandomSource,
    {
        let report = GameSession::new(&self.content, self.config).play(console, rng)?;
        Ok(report)
    }
}
