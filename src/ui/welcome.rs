use std::io;

use crate::models::Lifeline;
use crate::terminal::{Console, Tone};

pub fn render<C: Console>(console: &mut C, total_questions: usize) -> io::Result<()> {
    let lifelines = Lifeline::ALL
        .iter()
        .map(|lifeline| lifeline.label())
        .collect::<Vec<_>>()
        .join(", ");

    console.say(Tone::Heading, "=== Welcome to KBC (Console Version) ===")?;
    console.say(Tone::Plain, "")?;
    console.say(
        Tone::Plain,
        &format!("The rules are simple: {total_questions} questions, every correct answer moves you up the ladder."),
    )?;
    console.say(
        Tone::Plain,
        &format!("You have 3 lifelines: {lifelines} (each can be used once)."),
    )?;
    console.say(Tone::Plain, "Type 'quit' or 'q' at any time to walk away with your winnings.")?;
    console.say(Tone::Plain, "")?;
    Ok(())
}

/// Waits for Enter. Returns `false` if input has already ended.
pub fn wait_for_start<C: Console>(console: &mut C) -> io::Result<bool> {
    Ok(console.read_line("Press Enter to start...")?.is_some())
}
