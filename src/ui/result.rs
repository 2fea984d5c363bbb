use std::io;

use crate::models::{OPTION_LABELS, Question};
use crate::terminal::{Console, Tone};

pub fn render_correct<C: Console>(console: &mut C, prize: &str) -> io::Result<()> {
    console.say(Tone::Success, "Correct answer!")?;
    console.say(Tone::Success, &format!("You have won: {prize}"))
}

pub fn render_wrong<C: Console>(console: &mut C, question: &Question, banked: &str) -> io::Result<()> {
    console.say(Tone::Failure, "Wrong answer.")?;
    console.say(
        Tone::Plain,
        &format!(
            "The correct answer was {}. {}",
            OPTION_LABELS[question.correct_index],
            question.correct_option()
        ),
    )?;
    console.say(Tone::Plain, &format!("You take home: {banked}"))
}

pub fn render_quit<C: Console>(console: &mut C, banked: &str) -> io::Result<()> {
    console.say(Tone::Plain, "")?;
    console.say(Tone::Notice, &format!("You quit. You take home: {banked}"))
}

pub fn render_champion<C: Console>(console: &mut C, prize: &str) -> io::Result<()> {
    console.say(Tone::Highlight, &format!("Congratulations! You are the champion with {prize}!"))
}

pub fn render_exhausted<C: Console>(console: &mut C) -> io::Result<()> {
    console.say(Tone::Plain, "Game over. Thanks for playing!")
}
