//! Game engine: input parsing, lifelines, question rounds and the game loop.

mod input;
mod lifelines;
mod random;
mod round;
mod session;

pub use input::Command;
pub use lifelines::{Poll, RemovedOptions, audience_poll, fifty_fifty, phone_a_friend};
pub use random::{RandomSource, StdRandom};
pub use round::QuestionRound;
pub use session::{DEFAULT_PHONE_PAUSE, GameConfig, GameSession};
