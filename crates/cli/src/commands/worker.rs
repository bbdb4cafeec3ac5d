// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker registration, singly or in a batch

use super::CommandError;
use crate::session::{Agency, SessionTotals};
use lwc_core::limits::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use lwc_core::prompt::collect_bounded_number;
use lwc_core::{Clock, Prompter, Worker};
use tracing::info;

/// Register one worker: collect, confirm, append, count.
pub fn register_worker<P, C>(
    agency: &Agency<C>,
    prompter: &mut P,
    totals: &mut SessionTotals,
) -> Result<Worker, CommandError>
where
    P: Prompter + ?Sized,
    C: Clock,
{
    let worker = Worker::collect(prompter)?;

    prompter.notify("WORKER REGISTRATION SUMMARY");
    prompter.notify(&worker.to_string());

    agency.ledger.append(&worker, agency.clock.now())?;

    let fee = agency.config.membership_fee;
    totals.update(|t| t.record_worker(worker.membership_paid(), fee));
    info!(paid = worker.membership_paid(), "worker registered");

    if worker.membership_paid() {
        prompter.notify(&format!("Membership fee of ${:.2} recorded.", fee));
    }
    prompter.notify(&format!(
        "Worker registered successfully! (Total workers so far: {})",
        totals.current().workers_registered
    ));
    Ok(worker)
}

/// Ask how many workers to register, then register each in turn.
///
/// Each worker is persisted and counted on its own. If one fails to persist
/// the batch stops there; workers already written stay written and counted.
pub fn register_workers<P, C>(
    agency: &Agency<C>,
    prompter: &mut P,
    totals: &mut SessionTotals,
) -> Result<usize, CommandError>
where
    P: Prompter + ?Sized,
    C: Clock,
{
    let max = agency.config.max_batch_size.min(MAX_BATCH_SIZE);
    let count = collect_bounded_number(
        prompter,
        &format!("How many workers to register ({}-{})? ", MIN_BATCH_SIZE, max),
        f64::from(MIN_BATCH_SIZE),
        f64::from(max),
    )?
    .trunc() as usize;

    for n in 1..=count {
        if count > 1 {
            prompter.notify(&format!("--- Worker {} of {} ---", n, count));
        }
        register_worker(agency, prompter, totals)?;
    }
    Ok(count)
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
