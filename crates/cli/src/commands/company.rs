// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Employer registration

use super::CommandError;
use crate::session::{Agency, SessionTotals};
use lwc_core::{Clock, Company, Prompter};
use tracing::info;

pub fn register_company<P, C>(
    agency: &Agency<C>,
    prompter: &mut P,
    totals: &mut SessionTotals,
) -> Result<Company, CommandError>
where
    P: Prompter + ?Sized,
    C: Clock,
{
    let company = Company::collect(prompter)?;

    prompter.notify("COMPANY REGISTRATION SUMMARY");
    prompter.notify(&company.to_string());

    agency.ledger.append(&company, agency.clock.now())?;
    totals.update(|t| t.record_company());
    info!("company registered");

    prompter.notify(&format!(
        "Company registered successfully! (Total companies so far: {})",
        totals.current().companies_registered
    ));
    Ok(company)
}

#[cfg(test)]
#[path = "company_tests.rs"]
mod tests;
