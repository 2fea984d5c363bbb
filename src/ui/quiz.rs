use std::io;

use crate::game::{Poll, RemovedOptions};
use crate::models::{Lifeline, LifelineState, OPTION_LABELS, Question};
use crate::terminal::{Console, Tone};

use super::REMOVED_PLACEHOLDER;

pub const ANSWER_PROMPT: &str =
    "Answer (A/B/C/D) or type lifeline name (50-50 / audience / phone) or 'quit': ";

pub fn render_header<C: Console>(
    console: &mut C,
    number: usize,
    prize: &str,
    question: &Question,
) -> io::Result<()> {
    console.say(Tone::Plain, "")?;
    console.say(Tone::Heading, &format!("Question {number} for {prize}"))?;
    console.say(Tone::Plain, &question.prompt)
}

pub fn render_options<C: Console>(
    console: &mut C,
    question: &Question,
    removed: &RemovedOptions,
) -> io::Result<()> {
    for (index, option) in question.options.iter().enumerate() {
        let text = if removed.contains(index) {
            REMOVED_PLACEHOLDER
        } else {
            option.as_str()
        };
        let tone = if removed.contains(index) {
            Tone::Muted
        } else {
            Tone::Choice
        };
        console.say(tone, &format!("  {}. {}", OPTION_LABELS[index], text))?;
    }
    Ok(())
}

pub fn render_lifelines<C: Console>(console: &mut C, lifelines: &LifelineState) -> io::Result<()> {
    let available = lifelines
        .available()
        .map(Lifeline::name)
        .collect::<Vec<_>>();
    let list = if available.is_empty() {
        "None".to_string()
    } else {
        available.join(", ")
    };
    console.say(Tone::Plain, "")?;
    console.say(Tone::Muted, &format!("Available lifelines: {list}"))
}

pub fn render_fifty_fifty<C: Console>(console: &mut C) -> io::Result<()> {
    console.say(Tone::Plain, "")?;
    console.say(Tone::Highlight, "50-50 activated. Two wrong options removed.")
}

pub fn render_poll<C: Console>(console: &mut C, poll: &Poll) -> io::Result<()> {
    console.say(Tone::Plain, "")?;
    console.say(Tone::Highlight, "Audience Poll results (approx):")?;
    for (index, share) in poll.shares().iter().enumerate() {
        let text = match share {
            Some(pct) => format!("{pct}%"),
            None => REMOVED_PLACEHOLDER.to_string(),
        };
        console.say(Tone::Choice, &format!("  {}. {}", OPTION_LABELS[index], text))?;
    }
    Ok(())
}

pub fn render_friend_thinking<C: Console>(console: &mut C) -> io::Result<()> {
    console.say(Tone::Plain, "")?;
    console.say(Tone::Highlight, "Phone-a-Friend: (friend thinking...)")
}

pub fn render_friend_suggestion<C: Console>(console: &mut C, suggestion: usize) -> io::Result<()> {
    console.say(
        Tone::Highlight,
        &format!(
            "Friend: I think it's {}. I might be right.",
            OPTION_LABELS[suggestion]
        ),
    )
}

pub fn render_already_used<C: Console>(console: &mut C, lifeline: Lifeline) -> io::Result<()> {
    console.say(Tone::Notice, &format!("{} already used.", lifeline.label()))
}

pub fn render_removed_choice<C: Console>(console: &mut C) -> io::Result<()> {
    console.say(Tone::Notice, "Option removed. Choose another.")
}

pub fn render_invalid<C: Console>(console: &mut C) -> io::Result<()> {
    console.say(Tone::Notice, "Invalid input. Try again.")
}
