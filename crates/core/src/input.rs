// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure input checks.
//!
//! Each check takes one candidate line as typed by the operator and either
//! returns the validated value or an [`InputError`] describing the first rule
//! it broke. Nothing here blocks or prompts; the retry loop lives in
//! [`crate::prompt`].

use chrono::NaiveDate;
use thiserror::Error;

/// Date layout the operator types: month/day/year
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Why a candidate value was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("input cannot be empty")]
    Empty,

    #[error("input must contain only digits")]
    NotDigits,

    #[error("input must be exactly {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("value must be at least {min:.2}")]
    BelowMinimum { min: f64 },

    #[error("value must be at most {max:.2}")]
    AboveMaximum { max: f64 },

    #[error("'{0}' is not a valid date (expected MM/DD/YYYY)")]
    MalformedDate(String),

    #[error("date {date} is in the past (today is {today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("input must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("please answer 'yes' or 'no'")]
    NotYesNo,

    #[error("address must start with a street number")]
    MissingStreetNumber,
}

/// Check a fixed-length digit string such as a phone number.
///
/// Leading zeros are preserved; the digits come back exactly as typed.
pub fn check_digit_string(input: &str, exact_len: usize) -> Result<String, InputError> {
    let digits = input.trim();
    if digits.is_empty() {
        return Err(InputError::Empty);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotDigits);
    }
    let actual = digits.chars().count();
    if actual != exact_len {
        return Err(InputError::WrongLength {
            expected: exact_len,
            actual,
        });
    }
    Ok(digits.to_string())
}

/// Check a decimal number within the closed interval `[min, max]`.
pub fn check_bounded_number(input: &str, min: f64, max: f64) -> Result<f64, InputError> {
    let text = input.trim();
    let value: f64 = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    // "nan" and "inf" parse but are never amounts
    if !value.is_finite() {
        return Err(InputError::NotANumber(text.to_string()));
    }
    check_in_range(value, min, max)
}

/// Check an already-parsed number against the closed interval `[min, max]`.
pub fn check_in_range(value: f64, min: f64, max: f64) -> Result<f64, InputError> {
    if value.is_nan() {
        return Err(InputError::NotANumber(value.to_string()));
    }
    if value < min {
        return Err(InputError::BelowMinimum { min });
    }
    if value > max {
        return Err(InputError::AboveMaximum { max });
    }
    Ok(value)
}

/// Check a month/day/year date that is not earlier than `today`.
pub fn check_calendar_date(input: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    let text = input.trim();
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| InputError::MalformedDate(text.to_string()))?;
    if date < today {
        return Err(InputError::DateInPast { date, today });
    }
    Ok(date)
}

/// Check free text, returning it trimmed.
///
/// Length is counted in characters, not bytes.
pub fn check_non_empty_text(input: &str, min_len: usize) -> Result<String, InputError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    let actual = text.chars().count();
    if actual < min_len {
        return Err(InputError::TooShort {
            min: min_len,
            actual,
        });
    }
    Ok(text.to_string())
}

/// Check a yes/no answer.
pub fn check_yes_no(input: &str) -> Result<bool, InputError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(InputError::NotYesNo),
    }
}

/// Street addresses open with the building number ("12 Main St").
pub fn starts_with_street_number(address: &str) -> bool {
    address.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Check a street address: long enough and led by a street number.
pub fn check_street_address(input: &str, min_len: usize) -> Result<String, InputError> {
    let address = check_non_empty_text(input, min_len)?;
    if !starts_with_street_number(&address) {
        return Err(InputError::MissingStreetNumber);
    }
    Ok(address)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
