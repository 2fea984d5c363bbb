use std::io;
use std::time::Duration;

use tracing::{info, info_span};
use uuid::Uuid;

use crate::data::Content;
use crate::models::{GameReport, LifelineState, RoundOutcome, Terminal};
use crate::terminal::Console;
use crate::ui::{result, welcome};

use super::random::RandomSource;
use super::round::QuestionRound;

/// Default pause before the friend answers.
pub const DEFAULT_PHONE_PAUSE: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub phone_pause: Duration,
    pub show_intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            phone_pause: DEFAULT_PHONE_PAUSE,
            show_intro: true,
        }
    }
}

/// One full game: positions are played in order against a single
/// `LifelineState` that lives exactly as long as the session.
pub struct GameSession<'a> {
    id: Uuid,
    content: &'a Content,
    lifelines: LifelineState,
    config: GameConfig,
}

impl<'a> GameSession<'a> {
    pub fn new(content: &'a Content, config: GameConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            lifelines: LifelineState::new(),
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn lifelines(&self) -> &LifelineState {
        &self.lifelines
    }

    /// Plays until a terminal state is reached.
    ///
    /// The last playable position is whichever of the last question or the
    /// last prize slot comes first; answering it correctly wins the game.
    pub fn play<C, R>(&mut self, console: &mut C, rng: &mut R) -> io::Result<GameReport>
    where
        C: Console,
        R: RandomSource,
    {
        let span = info_span!("game", session = %self.id);
        let _guard = span.enter();

        let content = self.content;
        let prizes = content.prizes();
        let playable = content.playable();

        if self.config.show_intro {
            welcome::render(console, playable)?;
            if !welcome::wait_for_start(console)? {
                return Ok(self.finish(Terminal::Quit, prizes.zero_label(), 0));
            }
        }

        for (position, question) in content.questions().iter().take(playable).enumerate() {
            let Some(prize) = prizes.label(position) else {
                break;
            };

            let outcome = QuestionRound::new(question, position, prize, &mut self.lifelines)
                .with_phone_pause(self.config.phone_pause)
                .play(console, rng)?;

            match outcome {
                RoundOutcome::Quit => {
                    let banked = prizes.banked(position);
                    result::render_quit(console, banked)?;
                    return Ok(self.finish(Terminal::Quit, banked, position));
                }
                RoundOutcome::Answered(selected) if selected == question.correct_index => {
                    result::render_correct(console, prize)?;
                    if position + 1 == playable {
                        result::render_champion(console, prize)?;
                        return Ok(self.finish(Terminal::Win, prize, position + 1));
                    }
                }
                RoundOutcome::Answered(_) => {
                    let banked = prizes.banked(position);
                    result::render_wrong(console, question, banked)?;
                    return Ok(self.finish(Terminal::Lose, banked, position));
                }
            }
        }

        result::render_exhausted(console)?;
        Ok(self.finish(Terminal::Exhausted, prizes.zero_label(), 0))
    }

    fn finish(&self, terminal: Terminal, prize: &str, correct_answers: usize) -> GameReport {
        info!(?terminal, prize, correct_answers, "game finished");
        GameReport {
            terminal,
            prize: prize.to_string(),
            correct_answers,
        }
    }
}
