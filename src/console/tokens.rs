//! Whitespace token reader over a buffered input stream.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits an input stream into whitespace-delimited tokens.
///
/// Tokens from each line are buffered, so a command and its arguments may
/// arrive on a single line or spread across several.
pub struct TokenReader<R> {
    input: R,
    buffer: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Creates a reader over the given input stream.
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: VecDeque::new(),
        }
    }

    /// Returns the next token, reading further lines as needed.
    ///
    /// Returns `Ok(None)` once the stream is exhausted.
    pub fn next(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.buffer.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.buffer
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
