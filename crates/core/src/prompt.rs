// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive collection of validated fields.
//!
//! A [`Prompter`] supplies one line of operator input per call. The
//! `collect_*` functions wrap the pure checks in [`crate::input`] in a
//! re-prompt loop: a rejected line is reported through
//! [`Prompter::notify`] and the question is asked again, so a collector
//! only ever returns a valid value. The one way out without a value is the
//! input stream itself going away, surfaced as [`PromptError`].

use crate::clock::Clock;
use crate::input::{self, InputError};
use crate::record::RecordError;
use chrono::NaiveDate;
use std::collections::VecDeque;
use thiserror::Error;
use tracing::debug;

/// Why a collection ended without a value.
///
/// Rejected lines are re-asked, never reported here. `Record` only fires
/// when collected fields fail the record's own checks as a whole, such as
/// a start date that fell into the past while the operator was typing.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Source of operator input
pub trait Prompter {
    /// Show `prompt` and block until one line is supplied.
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Show a message to the operator (rejections, confirmations).
    fn notify(&mut self, message: &str);
}

/// Ask until `check` accepts the answer.
pub fn collect<P, T, F>(prompter: &mut P, prompt: &str, check: F) -> Result<T, PromptError>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let line = prompter.ask(prompt)?;
        match check(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(prompt, error = %e, "rejected input");
                prompter.notify(&format!("Error: {}", e));
            }
        }
    }
}

/// Collect a digit string of exactly `exact_len` digits.
pub fn collect_digit_string<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    exact_len: usize,
) -> Result<String, PromptError> {
    collect(prompter, prompt, |line| {
        input::check_digit_string(line, exact_len)
    })
}

/// Collect a number in the closed interval `[min, max]`.
pub fn collect_bounded_number<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    min: f64,
    max: f64,
) -> Result<f64, PromptError> {
    collect(prompter, prompt, |line| {
        input::check_bounded_number(line, min, max)
    })
}

/// Collect a month/day/year date no earlier than the clock's today.
///
/// Today is re-read on every attempt so a prompt left open over midnight
/// judges the answer against the day it was typed.
pub fn collect_calendar_date<P: Prompter + ?Sized, C: Clock>(
    prompter: &mut P,
    clock: &C,
    prompt: &str,
) -> Result<NaiveDate, PromptError> {
    collect(prompter, prompt, |line| {
        input::check_calendar_date(line, clock.today())
    })
}

/// Collect trimmed text of at least `min_len` characters.
pub fn collect_non_empty_text<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    min_len: usize,
) -> Result<String, PromptError> {
    collect(prompter, prompt, |line| {
        input::check_non_empty_text(line, min_len)
    })
}

/// Collect a strict yes/no answer.
pub fn collect_yes_no<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
) -> Result<bool, PromptError> {
    collect(prompter, prompt, input::check_yes_no)
}

/// Collect a street address led by a street number.
pub fn collect_street_address<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    min_len: usize,
) -> Result<String, PromptError> {
    collect(prompter, prompt, |line| {
        input::check_street_address(line, min_len)
    })
}

/// Prompter fed from canned lines, for tests and scripted input.
///
/// Records every prompt asked and every notice shown. Once the script runs
/// out, `ask` reports [`PromptError::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Prompts asked so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Notices shown so far, in order
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(PromptError::Closed)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
