// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cumulative agency totals carried across sessions

use serde::Serialize;

/// Counters that survive restarts through the summary store.
///
/// Owned by the caller and passed by `&mut` to each registration. Counts
/// only grow; revenue only grows by whole membership fees and is kept in
/// whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CumulativeTotals {
    pub workers_registered: u64,
    pub companies_registered: u64,
    pub jobs_posted: u64,
    pub membership_revenue: f64,
}

impl CumulativeTotals {
    /// Count one registered worker, adding `fee` to revenue if they paid.
    pub fn record_worker(&mut self, membership_paid: bool, fee: f64) {
        self.workers_registered += 1;
        if membership_paid {
            self.membership_revenue = round_to_cents(self.membership_revenue + fee);
        }
    }

    pub fn record_company(&mut self) {
        self.companies_registered += 1;
    }

    pub fn record_job(&mut self) {
        self.jobs_posted += 1;
    }

    /// Workers who paid the membership fee, derived from revenue.
    ///
    /// Both amounts are taken in whole cents; revenue that is not a whole
    /// multiple of `fee` rounds down.
    pub fn paid_workers(&self, fee: f64) -> u64 {
        match (cents(self.membership_revenue), cents(fee)) {
            (Some(revenue), Some(fee)) if fee > 0 => revenue / fee,
            _ => 0,
        }
    }
}

/// Amount rounded to the nearest cent
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn cents(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some((amount * 100.0).round() as u64)
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;
