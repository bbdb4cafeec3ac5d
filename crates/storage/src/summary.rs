// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cumulative totals persisted between sessions
//!
//! The summary file doubles as a human-readable report. Loading scans it
//! line by line and only picks out the four labelled counters, so extra
//! report lines, reordering and decoration are all tolerated. Saving
//! replaces the whole file with a fresh snapshot.

use chrono::NaiveDateTime;
use lwc_core::clock::format_timestamp;
use lwc_core::totals::round_to_cents;
use lwc_core::CumulativeTotals;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Summary file name inside the data directory
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

const RULE: &str = "======================================================================";

/// Errors that can occur while saving the summary
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a recognized summary line could not be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad value for '{label}': '{value}'")]
pub struct SummaryParseError {
    pub label: &'static str,
    pub value: String,
}

/// A counter the summary file carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryField {
    Workers,
    Companies,
    Jobs,
    Revenue,
}

impl SummaryField {
    pub const ALL: [SummaryField; 4] = [
        SummaryField::Workers,
        SummaryField::Companies,
        SummaryField::Jobs,
        SummaryField::Revenue,
    ];

    /// Label prefix identifying this field's line
    pub fn label(&self) -> &'static str {
        match self {
            SummaryField::Workers => "Total Workers Registered:",
            SummaryField::Companies => "Total Companies Registered:",
            SummaryField::Jobs => "Total Jobs Posted:",
            SummaryField::Revenue => "Total Membership Revenue:",
        }
    }
}

/// Classify one summary line, returning the field and its raw value text.
///
/// Lines that carry none of the labels return `None`.
pub fn classify_line(line: &str) -> Option<(SummaryField, &str)> {
    let line = line.trim();
    SummaryField::ALL.into_iter().find_map(|field| {
        line.strip_prefix(field.label())
            .map(|value| (field, value.trim()))
    })
}

/// Parse totals out of summary text.
///
/// Order does not matter, unknown lines are skipped, and a label that
/// appears twice keeps its last value. A field whose label never appears
/// stays zero.
pub fn parse_summary(text: &str) -> Result<CumulativeTotals, SummaryParseError> {
    let mut totals = CumulativeTotals::default();
    for line in text.lines() {
        let Some((field, value)) = classify_line(line) else {
            continue;
        };
        let bad = || SummaryParseError {
            label: field.label(),
            value: value.to_string(),
        };
        match field {
            SummaryField::Workers => totals.workers_registered = value.parse().map_err(|_| bad())?,
            SummaryField::Companies => {
                totals.companies_registered = value.parse().map_err(|_| bad())?
            }
            SummaryField::Jobs => totals.jobs_posted = value.parse().map_err(|_| bad())?,
            SummaryField::Revenue => {
                let amount: f64 = value
                    .strip_prefix('$')
                    .unwrap_or(value)
                    .trim()
                    .parse()
                    .map_err(|_| bad())?;
                if !amount.is_finite() || amount < 0.0 {
                    return Err(bad());
                }
                totals.membership_revenue = round_to_cents(amount);
            }
        }
    }
    Ok(totals)
}

/// Render the summary report for `totals` as of `generated_at`.
pub fn render_summary(
    totals: &CumulativeTotals,
    agency_name: &str,
    membership_fee: f64,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{} - SUMMARY REPORT\n", agency_name.to_uppercase()));
    out.push_str(&format!("Generated: {}\n", format_timestamp(generated_at)));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "{} {}\n",
        SummaryField::Workers.label(),
        totals.workers_registered
    ));
    out.push_str(&format!(
        "{} {}\n",
        SummaryField::Companies.label(),
        totals.companies_registered
    ));
    out.push_str(&format!(
        "{} {}\n",
        SummaryField::Jobs.label(),
        totals.jobs_posted
    ));
    out.push_str(&format!(
        "Workers Paid Membership: {}\n",
        totals.paid_workers(membership_fee)
    ));
    out.push_str(&format!(
        "{} ${:.2}\n",
        SummaryField::Revenue.label(),
        totals.membership_revenue
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

/// How a load went
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Totals restored from the summary file
    Restored,
    /// No summary file yet
    FirstRun,
    /// Summary file present but unusable; totals reset to zero
    Recovered { reason: String },
}

/// Totals plus how they were obtained
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTotals {
    pub totals: CumulativeTotals,
    pub status: LoadStatus,
}

/// The summary file for one data directory
#[derive(Debug, Clone)]
pub struct SummaryStore {
    path: PathBuf,
    agency_name: String,
    membership_fee: f64,
}

impl SummaryStore {
    pub fn new(dir: &Path, agency_name: impl Into<String>, membership_fee: f64) -> Self {
        Self {
            path: dir.join(SUMMARY_FILE_NAME),
            agency_name: agency_name.into(),
            membership_fee,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load totals, never failing.
    ///
    /// A missing file is a first run. An unreadable file or any bad value
    /// on a recognized line resets everything to zero rather than keeping
    /// the fields that did parse.
    pub fn load(&self) -> LoadedTotals {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no summary yet, starting from zero");
                return LoadedTotals {
                    totals: CumulativeTotals::default(),
                    status: LoadStatus::FirstRun,
                };
            }
            Err(e) => return self.recovered(e.to_string()),
        };

        match parse_summary(&text) {
            Ok(totals) => {
                info!(
                    path = %self.path.display(),
                    workers = totals.workers_registered,
                    companies = totals.companies_registered,
                    jobs = totals.jobs_posted,
                    revenue = totals.membership_revenue,
                    "restored totals"
                );
                LoadedTotals {
                    totals,
                    status: LoadStatus::Restored,
                }
            }
            Err(e) => self.recovered(e.to_string()),
        }
    }

    fn recovered(&self, reason: String) -> LoadedTotals {
        warn!(path = %self.path.display(), %reason, "summary unusable, starting from zero");
        LoadedTotals {
            totals: CumulativeTotals::default(),
            status: LoadStatus::Recovered { reason },
        }
    }

    /// Overwrite the summary with a snapshot of `totals`.
    ///
    /// Written to a sibling temp file first and renamed over the old one, so
    /// a crash mid-write leaves the previous snapshot intact.
    pub fn save(&self, totals: &CumulativeTotals, now: NaiveDateTime) -> Result<(), SummaryError> {
        let io_err = |source| SummaryError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let report = render_summary(totals, &self.agency_name, self.membership_fee, now);
        let temp_path = self.path.with_extension("txt.tmp");
        {
            let mut file = File::create(&temp_path).map_err(io_err)?;
            file.write_all(report.as_bytes()).map_err(io_err)?;
            file.sync_all().map_err(io_err)?;
        }
        fs::rename(&temp_path, &self.path).map_err(io_err)?;

        info!(path = %self.path.display(), "saved totals");
        Ok(())
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
