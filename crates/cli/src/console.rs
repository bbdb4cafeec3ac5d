// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented prompter over a reader and a writer (stdin/stdout in the
//! binary, in-memory buffers in tests)

use lwc_core::{PromptError, Prompter};
use std::io::{BufRead, Write};
use tracing::debug;

const NOT_TEXT: &str = "input is not readable text";

pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Err(PromptError::Closed);
            }
            match String::from_utf8(raw) {
                Ok(line) => return Ok(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(_) => {
                    debug!("rejected input that is not valid UTF-8");
                    writeln!(self.output, "Error: {}", NOT_TEXT)?;
                }
            }
        }
    }

    fn notify(&mut self, message: &str) {
        // Console output failures are not actionable mid-prompt
        let _ = writeln!(self.output, "{}", message);
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
