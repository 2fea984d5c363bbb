use std::io;
use std::time::Duration;

use tracing::debug;

use crate::models::{Lifeline, LifelineState, Question, RoundOutcome};
use crate::terminal::Console;
use crate::ui::quiz as view;

use super::input::Command;
use super::lifelines::{RemovedOptions, audience_poll, fifty_fifty, phone_a_friend};
use super::random::RandomSource;

/// One question's worth of prompting, lifeline use and answering.
///
/// The round keeps asking until it gets an answer letter for a visible
/// option or a quit command. Lifelines never end it.
pub struct QuestionRound<'a> {
    question: &'a Question,
    position: usize,
    prize: &'a str,
    lifelines: &'a mut LifelineState,
    removed: RemovedOptions,
    phone_pause: Duration,
}

impl<'a> QuestionRound<'a> {
    pub fn new(
        question: &'a Question,
        position: usize,
        prize: &'a str,
        lifelines: &'a mut LifelineState,
    ) -> Self {
        Self {
            question,
            position,
            prize,
            lifelines,
            removed: RemovedOptions::new(),
            phone_pause: Duration::ZERO,
        }
    }

    pub fn with_phone_pause(mut self, pause: Duration) -> Self {
        self.phone_pause = pause;
        self
    }

    /// Runs the round to completion. Closed input counts as quitting.
    pub fn play<C, R>(mut self, console: &mut C, rng: &mut R) -> io::Result<RoundOutcome>
    where
        C: Console,
        R: RandomSource,
    {
        view::render_header(console, self.position + 1, self.prize, self.question)?;

        loop {
            view::render_options(console, self.question, &self.removed)?;
            view::render_lifelines(console, self.lifelines)?;

            let Some(line) = console.read_line(view::ANSWER_PROMPT)? else {
                debug!(position = self.position, "input closed during round");
                return Ok(RoundOutcome::Quit);
            };

            match Command::parse(&line) {
                Command::Quit => return Ok(RoundOutcome::Quit),
                Command::UseLifeline(lifeline) => self.use_lifeline(lifeline, console, rng)?,
                Command::Answer(index) if self.removed.contains(index) => {
                    view::render_removed_choice(console)?;
                }
                Command::Answer(index) => return Ok(RoundOutcome::Answered(index)),
                Command::Invalid => view::render_invalid(console)?,
            }
        }
    }

    fn use_lifeline<C, R>(&mut self, lifeline: Lifeline, console: &mut C, rng: &mut R) -> io::Result<()>
    where
        C: Console,
        R: RandomSource,
    {
        if self.lifelines.consume(lifeline).is_err() {
            return view::render_already_used(console, lifeline);
        }
        debug!(position = self.position, lifeline = lifeline.name(), "lifeline used");

        match lifeline {
            Lifeline::FiftyFifty => {
                self.removed = fifty_fifty(self.question, rng);
                view::render_fifty_fifty(console)
            }
            Lifeline::AudiencePoll => {
                let poll = audience_poll(self.question, &self.removed, rng);
                view::render_poll(console, &poll)
            }
            Lifeline::PhoneAFriend => {
                let suggestion = phone_a_friend(self.question, &self.removed, rng);
                view::render_friend_thinking(console)?;
                console.pause(self.phone_pause);
                view::render_friend_suggestion(console, suggestion)
            }
        }
    }

    #[cfg(test)]
    fn removed(&self) -> &RemovedOptions {
        &self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::random::{ScriptedRandom, StdRandom};
    use crate::terminal::ScriptedConsole;

    fn question() -> Question {
        Question::new(
            "Which planet is known as the Red Planet?",
            ["Earth", "Mars", "Venus", "Jupiter"],
            1,
        )
    }

    fn play(lines: &[&str], lifelines: &mut LifelineState) -> (RoundOutcome, ScriptedConsole) {
        let q = question();
        let mut console = ScriptedConsole::new(lines);
        let mut rng = StdRandom::seeded(3);
        let outcome = QuestionRound::new(&q, 0, "₹100", lifelines)
            .play(&mut console, &mut rng)
            .unwrap();
        (outcome, console)
    }

    #[test]
    fn test_answer_letter_ends_round() {
        let mut lifelines = LifelineState::new();
        let (outcome, console) = play(&["B"], &mut lifelines);
        assert_eq!(outcome, RoundOutcome::Answered(1));
        assert!(console.said("Question 1 for ₹100"));
        assert!(console.said("  A. Earth"));
        assert!(console.said("Available lifelines: fifty-fifty, audience, phone-a-friend"));
    }

    #[test]
    fn test_quit_ends_round() {
        let mut lifelines = LifelineState::new();
        let (outcome, _) = play(&["quit", "a"], &mut lifelines);
        assert_eq!(outcome, RoundOutcome::Quit);
    }

    #[test]
    fn test_closed_input_counts_as_quit() {
        let mut lifelines = LifelineState::new();
        let (outcome, _) = play(&[], &mut lifelines);
        assert_eq!(outcome, RoundOutcome::Quit);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let mut lifelines = LifelineState::new();
        let (outcome, console) = play(&["what", "", "d"], &mut lifelines);
        assert_eq!(outcome, RoundOutcome::Answered(3));
        assert_eq!(console.prompts, 3);
        assert!(console.said("Invalid input. Try again."));
    }

    #[test]
    fn test_garbled_input_reprompts() {
        let mut lifelines = LifelineState::new();
        let (outcome, console) = play(&["\u{FFFD}\u{FFFD}", "b"], &mut lifelines);
        assert_eq!(outcome, RoundOutcome::Answered(1));
        assert_eq!(console.prompts, 2);
        assert!(console.said("Invalid input. Try again."));
    }

    #[test]
    fn test_lifeline_does_not_end_round() {
        let mut lifelines = LifelineState::new();
        let (outcome, console) = play(&["audience", "phone", "c"], &mut lifelines);
        assert_eq!(outcome, RoundOutcome::Answered(2));
        assert!(console.said("Audience Poll results (approx):"));
        assert!(console.said("Friend: I think it's"));
        assert!(!lifelines.is_available(Lifeline::AudiencePoll));
        assert!(!lifelines.is_available(Lifeline::PhoneAFriend));
        assert!(lifelines.is_available(Lifeline::FiftyFifty));
    }

    #[test]
    fn test_used_lifeline_is_refused() {
        let mut lifelines = LifelineState::new();
        lifelines.consume(Lifeline::PhoneAFriend).unwrap();
        let (outcome, console) = play(&["friend", "b"], &mut lifelines);
        assert_eq!(outcome, RoundOutcome::Answered(1));
        assert!(console.said("Phone-a-Friend already used."));
        assert!(console.pauses.is_empty());
        assert!(console.said("Available lifelines: fifty-fifty, audience"));
    }

    #[test]
    fn test_removed_option_cannot_be_chosen() {
        let q = question();
        let mut lifelines = LifelineState::new();
        // wrong options are [0, 2, 3]; keeping slot 0 removes C and D
        let mut rng = ScriptedRandom::new(&[0], &[]);
        let mut console = ScriptedConsole::new(&["50-50", "c", "d", "a"]);
        let outcome = QuestionRound::new(&q, 4, "₹1,000", &mut lifelines)
            .play(&mut console, &mut rng)
            .unwrap();

        assert_eq!(outcome, RoundOutcome::Answered(0));
        assert!(console.said("50-50 activated. Two wrong options removed."));
        assert!(console.said("  C. -----"));
        assert!(console.said("  D. -----"));
        assert_eq!(
            console
                .output
                .iter()
                .filter(|(_, line)| line == "Option removed. Choose another.")
                .count(),
            2
        );
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn test_fifty_fifty_leaves_correct_option() {
        let q = question();
        for seed in 0..50 {
            let mut lifelines = LifelineState::new();
            let mut round = QuestionRound::new(&q, 0, "₹100", &mut lifelines);
            let mut console = ScriptedConsole::new(&[]);
            round
                .use_lifeline(Lifeline::FiftyFifty, &mut console, &mut StdRandom::seeded(seed))
                .unwrap();
            assert_eq!(round.removed().len(), 2);
            assert!(!round.removed().contains(q.correct_index));
        }
    }

    #[test]
    fn test_phone_pauses_before_suggestion() {
        let q = question();
        let mut lifelines = LifelineState::new();
        let mut console = ScriptedConsole::new(&["phone a friend", "b"]);
        let mut rng = ScriptedRandom::new(&[], &[true]);
        QuestionRound::new(&q, 0, "₹100", &mut lifelines)
            .with_phone_pause(Duration::from_millis(1200))
            .play(&mut console, &mut rng)
            .unwrap();

        assert_eq!(console.pauses, vec![Duration::from_millis(1200)]);
        assert!(console.said("Friend: I think it's B."));
    }
}
