// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job posting

use super::CommandError;
use crate::session::{Agency, SessionTotals};
use lwc_core::{Clock, JobPosting, Prompter};
use tracing::info;

pub fn post_job<P, C>(
    agency: &Agency<C>,
    prompter: &mut P,
    totals: &mut SessionTotals,
) -> Result<JobPosting, CommandError>
where
    P: Prompter + ?Sized,
    C: Clock,
{
    let job = JobPosting::collect(prompter, &agency.clock)?;

    prompter.notify("JOB POSTING SUMMARY");
    prompter.notify(&job.to_string());

    agency.ledger.append(&job, agency.clock.now())?;
    totals.update(|t| t.record_job());
    info!(weekly_pay = job.total_weekly_pay(), "job posted");

    prompter.notify(&format!(
        "Job posted successfully! (Total jobs so far: {})",
        totals.current().jobs_posted
    ));
    Ok(job)
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
