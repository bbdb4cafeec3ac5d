// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::NaiveDate;
use lwc_core::{AgencyConfig, CumulativeTotals, FakeClock, LedgerKind, ScriptedPrompter};
use tempfile::TempDir;

#[test]
fn registers_company_and_counts_it() {
    let dir = TempDir::new().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let agency = Agency::open(dir.path(), AgencyConfig::default(), FakeClock::on(today));
    let mut prompter = ScriptedPrompter::new([
        "Sunrise Diner",
        "restaurant",
        "Main Street",
        "12 Main St",
        "5559876543",
    ]);
    let mut totals = SessionTotals::new(CumulativeTotals::default());

    let company = register_company(&agency, &mut prompter, &mut totals).unwrap();

    assert_eq!(company.address(), "12 Main St");
    assert_eq!(totals.current().companies_registered, 1);
    assert!(prompter
        .notices()
        .iter()
        .any(|n| n == "Error: address must start with a street number"));

    let text = agency.ledger.read_kind(LedgerKind::Companies).unwrap();
    assert!(text.contains("Registration Time: 2026-03-02 12:00:00\n"));
    assert!(text.contains("Company Name: Sunrise Diner\n"));
}
