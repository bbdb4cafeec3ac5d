// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view of the persisted totals

use lwc_core::AgencyConfig;
use lwc_storage::{LoadStatus, LoadedTotals};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub agency: String,
    pub workers_registered: u64,
    pub companies_registered: u64,
    pub jobs_posted: u64,
    pub paid_workers: u64,
    pub membership_revenue: f64,
    pub status: &'static str,
}

impl SummaryView {
    pub fn new(config: &AgencyConfig, loaded: &LoadedTotals) -> Self {
        let totals = &loaded.totals;
        Self {
            agency: config.agency_name.clone(),
            workers_registered: totals.workers_registered,
            companies_registered: totals.companies_registered,
            jobs_posted: totals.jobs_posted,
            paid_workers: totals.paid_workers(config.membership_fee),
            membership_revenue: totals.membership_revenue,
            status: match loaded.status {
                LoadStatus::Restored => "restored",
                LoadStatus::FirstRun => "first_run",
                LoadStatus::Recovered { .. } => "recovered",
            },
        }
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} totals", self.agency)?;
        writeln!(f, "  Workers registered:   {}", self.workers_registered)?;
        writeln!(f, "  Companies registered: {}", self.companies_registered)?;
        writeln!(f, "  Jobs posted:          {}", self.jobs_posted)?;
        writeln!(f, "  Paid memberships:     {}", self.paid_workers)?;
        write!(f, "  Membership revenue:   ${:.2}", self.membership_revenue)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
