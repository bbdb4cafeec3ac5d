// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable date and timestamp handling

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use std::sync::{Arc, Mutex};

/// A clock that provides the current local date and time
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// The current calendar day (time-of-day dropped)
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Real wall clock in the operator's local time zone
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl FakeClock {
    /// Create a fake clock pinned to the given instant
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(instant)),
        }
    }

    /// Create a fake clock pinned to noon on the given day
    pub fn on(date: NaiveDate) -> Self {
        Self::at(date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Set the clock to a specific instant
    pub fn set(&self, instant: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = instant;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Timestamp format used in ledger blocks and the summary report
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp the way ledgers and reports show it
pub fn format_timestamp(instant: NaiveDateTime) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
