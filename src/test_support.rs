//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io::Cursor;

use crate::console::Console;

/// A console reading from a scripted input, writing to a captured buffer,
/// colors off, unlimited retries.
pub fn scripted_console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    scripted_console_with_retries(script, 0)
}

/// Same as [`scripted_console`] with a finite integer retry budget.
pub fn scripted_console_with_retries(
    script: &str,
    max_retries: u32,
) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        false,
        max_retries,
    )
}

/// Everything the console wrote, as UTF-8.
pub fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("console output was not UTF-8")
}
