//! # Input Collector
//!
//! Prompted line reads over the console's streams. Integer prompts parse
//! leading integer content the way the classic tool did and re-prompt on
//! anything else; the re-prompt loop is unbounded by default but honors a
//! configured retry budget. Text prompts trim the line terminator and cap
//! the result at a byte bound.
//!
//! The collectors never fabricate a value: a closed or failing input
//! stream surfaces as [`PromptError::Io`] and ends the session, an
//! exhausted budget as [`PromptError::AttemptsExhausted`] and abandons
//! only the current operation.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::core::codec::scan_int;

use super::Console;

#[derive(Debug)]
pub enum PromptError {
    /// The interactive stream failed or reached end-of-input.
    Io(io::Error),
    /// A finite retry budget ran out without a valid value.
    AttemptsExhausted,
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "input stream error: {e}"),
            PromptError::AttemptsExhausted => write!(f, "too many invalid input attempts"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompts (green) until a line with leading integer content arrives.
    ///
    /// Parsing matches the classic scanf behavior: optional leading
    /// whitespace, optional sign, digits; trailing bytes are ignored
    /// (`"12abc"` is 12). Every rejected line gets a red report and,
    /// with a retry budget of 0, another prompt - forever.
    pub fn read_integer(&mut self, prompt: &str) -> Result<i64, PromptError> {
        let mut rejected = 0u32;
        loop {
            self.green(prompt)?;
            let line = self.read_line()?;
            if let Some((value, _)) = scan_int(&line) {
                return Ok(value);
            }
            self.red("Invalid input! Please enter a number.\n")?;
            rejected += 1;
            if self.max_retries != 0 && rejected > self.max_retries {
                debug!("Integer prompt gave up after {rejected} rejected lines");
                return Err(PromptError::AttemptsExhausted);
            }
        }
    }

    /// Prompts (green), reads one line, trims the terminator and caps the
    /// text at `max_len` bytes (rounded down to a character boundary).
    /// No other validation.
    pub fn read_text(&mut self, prompt: &str, max_len: usize) -> Result<String, PromptError> {
        self.green(prompt)?;
        let line = self.read_line()?;
        Ok(truncate_to_boundary(&line, max_len).to_string())
    }

    /// One line, terminator stripped. End-of-input is an error: there is
    /// no meaningful empty answer mid-session.
    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(PromptError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// The longest prefix of `text` that fits in `max` bytes without
/// splitting a character.
fn truncate_to_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
