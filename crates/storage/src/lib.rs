// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! File-backed storage: append-only ledgers and the cumulative summary

mod ledger;
mod summary;

pub use ledger::{count_blocks, render_block, Ledger, LedgerError, SEPARATOR};
pub use summary::{
    classify_line, parse_summary, render_summary, LoadStatus, LoadedTotals, SummaryError,
    SummaryField, SummaryParseError, SummaryStore, SUMMARY_FILE_NAME,
};
