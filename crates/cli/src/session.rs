// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One operator session: storage handles, running totals and the menu loop.

use crate::commands::{self, CommandError};
use crate::error::LwcError;
use lwc_core::{AgencyConfig, Clock, CumulativeTotals, PromptError, Prompter};
use lwc_storage::{Ledger, LoadStatus, LoadedTotals, SummaryStore};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// Exit status after an interrupt
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Everything a registration needs besides the operator and the totals
#[derive(Clone)]
pub struct Agency<C: Clock> {
    pub config: AgencyConfig,
    pub ledger: Ledger,
    pub summary: SummaryStore,
    pub clock: C,
}

impl<C: Clock> Agency<C> {
    pub fn open(data_dir: &Path, config: AgencyConfig, clock: C) -> Self {
        let summary = SummaryStore::new(data_dir, config.agency_name.clone(), config.membership_fee);
        Self {
            ledger: Ledger::new(data_dir),
            summary,
            config,
            clock,
        }
    }

    /// Overwrite the summary with `totals` as of now
    pub fn save_totals(&self, totals: &CumulativeTotals) -> Result<(), LwcError> {
        self.summary
            .save(totals, self.clock.now())
            .map_err(|e| LwcError::save_failed(self.summary.path(), e))
    }
}

/// Running totals for this session.
///
/// Every change is mirrored into a shared copy so the interrupt handler can
/// save the latest counts without reaching into the call stack.
#[derive(Debug)]
pub struct SessionTotals {
    current: CumulativeTotals,
    published: Arc<Mutex<CumulativeTotals>>,
}

impl SessionTotals {
    pub fn new(initial: CumulativeTotals) -> Self {
        Self {
            current: initial,
            published: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn current(&self) -> &CumulativeTotals {
        &self.current
    }

    /// Apply a change and publish the result
    pub fn update(&mut self, change: impl FnOnce(&mut CumulativeTotals)) {
        change(&mut self.current);
        let mut published = self.published.lock().unwrap_or_else(|e| e.into_inner());
        *published = self.current;
    }

    /// Shared copy for the interrupt handler
    pub fn published(&self) -> Arc<Mutex<CumulativeTotals>> {
        Arc::clone(&self.published)
    }
}

/// Save the last published totals and exit when the operator interrupts.
///
/// One save attempt only; a failure is reported and the process exits anyway.
pub fn install_interrupt_handler<C: Clock + 'static>(
    agency: &Agency<C>,
    totals: &SessionTotals,
) -> Result<(), ctrlc::Error> {
    let published = totals.published();
    let store = agency.summary.clone();
    let clock = agency.clock.clone();

    ctrlc::set_handler(move || {
        let snapshot = *published.lock().unwrap_or_else(|e| e.into_inner());
        match store.save(&snapshot, clock.now()) {
            Ok(()) => {
                info!("interrupted, totals saved");
                eprintln!("\nInterrupted. Totals saved to {}.", store.path().display());
            }
            Err(e) => {
                error!(error = %e, "interrupted, failed to save totals");
                eprintln!("\nInterrupted. Could not save totals: {}", e);
            }
        }
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
}

/// Tell the operator how the startup load went
pub fn report_load<P: Prompter + ?Sized>(prompter: &mut P, loaded: &LoadedTotals) {
    match &loaded.status {
        LoadStatus::Restored => prompter.notify(&format!(
            "Loaded previous totals: {} workers, {} companies, {} jobs.",
            loaded.totals.workers_registered,
            loaded.totals.companies_registered,
            loaded.totals.jobs_posted
        )),
        LoadStatus::FirstRun => {
            prompter.notify("No previous summary found. Starting fresh totals.")
        }
        LoadStatus::Recovered { reason } => prompter.notify(&format!(
            "Could not load previous summary ({}). Starting from zero.",
            reason
        )),
    }
}

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterWorkers,
    RegisterCompany,
    PostJob,
    ViewLedger,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::RegisterWorkers,
        MenuChoice::RegisterCompany,
        MenuChoice::PostJob,
        MenuChoice::ViewLedger,
        MenuChoice::Exit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::RegisterWorkers => "1",
            MenuChoice::RegisterCompany => "2",
            MenuChoice::PostJob => "3",
            MenuChoice::ViewLedger => "4",
            MenuChoice::Exit => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::RegisterWorkers => "Register worker(s)",
            MenuChoice::RegisterCompany => "Register company",
            MenuChoice::PostJob => "Post a job",
            MenuChoice::ViewLedger => "View a ledger",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

fn show_menu<P: Prompter + ?Sized>(prompter: &mut P, agency_name: &str) {
    prompter.notify("");
    prompter.notify(&format!("{} - MAIN MENU", agency_name));
    for choice in MenuChoice::ALL {
        prompter.notify(&format!("  {}. {}", choice.key(), choice.label()));
    }
}

/// Run the menu until the operator exits.
///
/// Storage failures and rejected records inside an operation are reported
/// and the loop goes on.
/// Returns an error only when the input stream ends or fails; the caller
/// saves totals either way.
pub fn run_menu<P, C>(
    agency: &Agency<C>,
    prompter: &mut P,
    totals: &mut SessionTotals,
) -> Result<(), PromptError>
where
    P: Prompter + ?Sized,
    C: Clock,
{
    loop {
        show_menu(prompter, &agency.config.agency_name);
        let answer = prompter.ask("Choose an option (1-5): ")?;

        let Some(choice) = MenuChoice::parse(&answer) else {
            let keys: Vec<_> = MenuChoice::ALL.iter().map(|c| c.key()).collect();
            prompter.notify(&format!(
                "Invalid choice '{}'. Valid options: {}",
                answer.trim(),
                keys.join(", ")
            ));
            continue;
        };

        let result = match choice {
            MenuChoice::RegisterWorkers => {
                commands::worker::register_workers(agency, prompter, totals).map(|_| ())
            }
            MenuChoice::RegisterCompany => {
                commands::company::register_company(agency, prompter, totals).map(|_| ())
            }
            MenuChoice::PostJob => commands::job::post_job(agency, prompter, totals).map(|_| ()),
            MenuChoice::ViewLedger => commands::view::view_ledger(agency, prompter),
            MenuChoice::Exit => return Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(CommandError::Prompt(PromptError::Record(e))) => {
                warn!(error = %e, "record rejected");
                prompter.notify(&format!("Error: {}. Nothing was saved.", e));
            }
            Err(CommandError::Prompt(e)) => return Err(e),
            Err(CommandError::Ledger(e)) => {
                warn!(error = %e, "operation failed");
                prompter.notify(&LwcError::from_ledger(e).to_string());
            }
        }
    }
}

/// Print the closing summary of cumulative totals
pub fn farewell<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &AgencyConfig,
    totals: &CumulativeTotals,
) {
    prompter.notify("");
    prompter.notify("SESSION SUMMARY (cumulative)");
    prompter.notify(&format!("  Workers registered:   {}", totals.workers_registered));
    prompter.notify(&format!("  Companies registered: {}", totals.companies_registered));
    prompter.notify(&format!("  Jobs posted:          {}", totals.jobs_posted));
    prompter.notify(&format!(
        "  Paid memberships:     {}",
        totals.paid_workers(config.membership_fee)
    ));
    prompter.notify(&format!(
        "  Membership revenue:   ${:.2}",
        totals.membership_revenue
    ));
    prompter.notify(&format!("Thank you for using {}.", config.agency_name));
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
