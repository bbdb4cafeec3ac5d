// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Operator-facing failures carry:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use lwc_core::{ConfigError, LedgerKind};
use lwc_storage::{LedgerError, SummaryError};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct LwcError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl LwcError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for LwcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for LwcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

fn known_ledgers() -> String {
    LedgerKind::ALL
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Common error builders for typical failure scenarios.
impl LwcError {
    /// Error for a ledger name outside the fixed set.
    pub fn unknown_ledger(name: &str) -> Self {
        LwcError::new(format!("Ledger '{}' is not recognized", name))
            .with_context(format!("Known ledgers: {}", known_ledgers()))
            .with_suggestion("Type the ledger name without a file extension, e.g. workers")
    }

    /// Error for a ledger that has never been written.
    pub fn ledger_not_found(kind: LedgerKind) -> Self {
        let first_step = match kind {
            LedgerKind::Workers => "Register a worker from the main menu (option 1)",
            LedgerKind::Companies => "Register a company from the main menu (option 2)",
            LedgerKind::Jobs => "Post a job from the main menu (option 3)",
        };
        LwcError::new(format!("Ledger '{}' not found", kind))
            .with_context(format!("No {} have been recorded yet", kind))
            .with_suggestion(first_step)
    }

    /// Error for any ledger failure, picking the matching builder.
    pub fn from_ledger(err: LedgerError) -> Self {
        match err {
            LedgerError::UnknownLedger(unknown) => Self::unknown_ledger(&unknown.0),
            LedgerError::NotFound(kind) => Self::ledger_not_found(kind),
            LedgerError::Io { path, source } => {
                LwcError::new(format!("Could not access ledger file {}", path.display()))
                    .with_context("The data directory may be missing or not writable")
                    .with_suggestion("Check permissions on the data directory")
                    .with_source(source)
            }
        }
    }

    /// Error for a failed save of the cumulative totals.
    pub fn save_failed(path: &Path, err: SummaryError) -> Self {
        LwcError::new(format!("Failed to save totals to {}", path.display()))
            .with_context("Counters from this session were not persisted")
            .with_suggestion("Check that the data directory is writable")
            .with_source(err)
    }

    /// Error for an unusable configuration file.
    pub fn invalid_config(err: ConfigError) -> Self {
        LwcError::new("Could not load configuration")
            .with_context(err.to_string())
            .with_suggestion("Fix or remove the config file; every key is optional")
            .with_source(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
