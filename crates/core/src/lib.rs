// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lwc-core: core library for the LocalWork Connect console
//!
//! This crate provides:
//! - Pure input checks and the re-prompt loop built on them
//! - Immutable worker, company and job posting records
//! - Cumulative totals carried across sessions
//! - Clock and configuration

pub mod clock;
pub mod config;
pub mod input;
pub mod limits;
pub mod prompt;
pub mod record;
pub mod totals;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{AgencyConfig, ConfigError};
pub use input::InputError;
pub use prompt::{PromptError, Prompter, ScriptedPrompter};
pub use record::{Company, JobPosting, LedgerKind, Record, RecordError, UnknownLedger, Worker};
pub use totals::CumulativeTotals;
