//! Line-oriented console used by the game.

use std::io::{self, BufRead, IsTerminal, Stdin, Write};
use std::thread;
use std::time::Duration;

use clap::ValueEnum;
use crossterm::{
    ExecutableCommand,
    style::{ResetColor, StyledContent, Stylize},
};

/// How a line should look. Only `StdConsole` turns this into colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Choice,
    Muted,
    Notice,
    Success,
    Failure,
    Highlight,
}

/// Everything the game needs from the outside world.
pub trait Console {
    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()>;

    /// Shows `prompt` and reads one line. `Ok(None)` means input has ended.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn pause(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether game output on stdout is coloured.
    pub fn enabled(self) -> bool {
        self.enabled_on(io::stdout().is_terminal())
    }

    /// Whether log output on stderr is coloured.
    pub fn enabled_for_logs(self) -> bool {
        self.enabled_on(io::stderr().is_terminal())
    }

    fn enabled_on(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Stdin/stdout console with optional crossterm colouring.
pub struct StdConsole {
    stdin: Stdin,
    color: bool,
}

impl StdConsole {
    pub fn new(color: ColorChoice) -> Self {
        Self {
            stdin: io::stdin(),
            color: color.enabled(),
        }
    }
}

impl Console for StdConsole {
    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.color {
            writeln!(out, "{}", styled(tone, text))?;
        } else {
            writeln!(out, "{text}")?;
        }
        out.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut raw = Vec::new();
        if self.stdin.lock().read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        Ok(Some(decode_line(&raw)))
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Bytes that are not UTF-8 become U+FFFD, so they parse as invalid input
/// instead of failing the read.
fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn styled(tone: Tone, text: &str) -> StyledContent<&str> {
    match tone {
        Tone::Plain => text.stylize(),
        Tone::Heading => text.cyan().bold(),
        Tone::Choice => text.white(),
        Tone::Muted => text.dark_grey(),
        Tone::Notice => text.yellow(),
        Tone::Success => text.green().bold(),
        Tone::Failure => text.red().bold(),
        Tone::Highlight => text.magenta().bold(),
    }
}

/// Puts the terminal colours back, e.g. after an interrupt mid-line.
/// Writes nothing when colour is off.
pub fn restore(color: ColorChoice) -> io::Result<()> {
    restore_to(&mut io::stdout(), color)
}

fn restore_to<W: Write>(out: &mut W, color: ColorChoice) -> io::Result<()> {
    if color.enabled() {
        out.execute(ResetColor)?;
    }
    Ok(())
}

/// Console fed from a fixed list of input lines that records everything said.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    pub(crate) output: Vec<(Tone, String)>,
    pub(crate) prompts: usize,
    pub(crate) pauses: Vec<Duration>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| format!("{line}\n")).collect(),
            output: Vec::new(),
            prompts: 0,
            pauses: Vec::new(),
        }
    }

    pub(crate) fn transcript(&self) -> String {
        self.output
            .iter()
            .map(|(_, line)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn said(&self, needle: &str) -> bool {
        self.output.iter().any(|(_, line)| line.contains(needle))
    }

    pub(crate) fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        self.output.push((tone, text.to_string()));
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        Ok(self.input.pop_front())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::game::Command;

    #[test]
    fn test_never_disables_color() {
        assert!(!ColorChoice::Never.enabled());
        assert!(ColorChoice::Always.enabled());
        assert!(!ColorChoice::Never.enabled_for_logs());
        assert!(ColorChoice::Always.enabled_for_logs());
    }

    #[test]
    fn test_auto_color_needs_a_terminal() {
        assert!(!ColorChoice::Auto.enabled_on(false));
        assert!(!ColorChoice::Never.enabled_on(true));
        assert!(ColorChoice::Always.enabled_on(false));
    }

    #[test]
    fn test_decode_line_replaces_invalid_utf8() {
        let line = decode_line(b"\xff\xfe\n");
        assert_eq!(line, "\u{FFFD}\u{FFFD}\n");
        assert_eq!(Command::parse(&line), Command::Invalid);

        assert_eq!(decode_line("B\n".as_bytes()), "B\n");
        assert_eq!(decode_line("₹\n".as_bytes()), "₹\n");
    }

    #[test]
    fn test_restore_writes_nothing_without_color() {
        let mut out = Vec::new();
        restore_to(&mut out, ColorChoice::Never).unwrap();
        assert!(out.is_empty());

        restore_to(&mut out, ColorChoice::Always).unwrap();
        assert_eq!(out, b"\x1b[0m");
    }

    #[test]
    fn test_scripted_console_ends_input() {
        let mut console = ScriptedConsole::new(&["a"]);
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("a\n"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.prompts, 2);
    }
}
