mod lifeline;
mod outcome;
mod prize;
mod question;

pub use lifeline::{Lifeline, LifelineError, LifelineState};
pub use outcome::{GameReport, RoundOutcome, Terminal};
pub use prize::{DEFAULT_ZERO_PRIZE, PrizeLadder};
pub use question::{ContentError, NUM_OPTIONS, OPTION_LABELS, Question};
