// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Viewing a ledger by name

use super::CommandError;
use crate::error::LwcError;
use crate::session::Agency;
use lwc_core::{Clock, LedgerKind, Prompter};
use lwc_storage::{count_blocks, LedgerError};

/// Ask for a ledger name and print its contents.
///
/// Unknown names and never-written ledgers are reported to the operator,
/// not returned as errors.
pub fn view_ledger<P, C>(agency: &Agency<C>, prompter: &mut P) -> Result<(), CommandError>
where
    P: Prompter + ?Sized,
    C: Clock,
{
    let names: Vec<_> = LedgerKind::ALL.iter().map(|k| k.name()).collect();
    let name = prompter.ask(&format!("Enter ledger name ({}): ", names.join(", ")))?;

    match agency.ledger.read(&name) {
        Ok(text) if text.is_empty() => {
            prompter.notify(&format!("Ledger '{}' is empty.", name.trim()));
            Ok(())
        }
        Ok(text) => {
            prompter.notify(text.trim_end());
            prompter.notify(&format!("({} records)", count_blocks(&text)));
            Ok(())
        }
        Err(e @ (LedgerError::UnknownLedger(_) | LedgerError::NotFound(_))) => {
            prompter.notify(&LwcError::from_ledger(e).to_string());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
