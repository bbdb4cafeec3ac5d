// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Menu operations

pub mod company;
pub mod job;
pub mod summary;
pub mod view;
pub mod worker;

use lwc_core::PromptError;
use lwc_storage::LedgerError;
use thiserror::Error;

/// Why an operation stopped before finishing
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
