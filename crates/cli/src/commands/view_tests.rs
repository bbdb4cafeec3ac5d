// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::NaiveDate;
use lwc_core::{AgencyConfig, FakeClock, ScriptedPrompter, Worker};
use tempfile::TempDir;

fn agency(dir: &TempDir) -> Agency<FakeClock> {
    let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    Agency::open(dir.path(), AgencyConfig::default(), FakeClock::on(today))
}

#[test]
fn unknown_ledger_is_reported_without_touching_files() {
    let dir = TempDir::new().unwrap();
    let agency = agency(&dir);
    let mut prompter = ScriptedPrompter::new(["invoices"]);

    view_ledger(&agency, &mut prompter).unwrap();

    assert!(prompter
        .notices()
        .iter()
        .any(|n| n.contains("Ledger 'invoices' is not recognized")));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_ledger_suggests_first_step() {
    let dir = TempDir::new().unwrap();
    let agency = agency(&dir);
    let mut prompter = ScriptedPrompter::new(["jobs"]);

    view_ledger(&agency, &mut prompter).unwrap();

    let notice = prompter.notices().last().unwrap();
    assert!(notice.contains("Ledger 'jobs' not found"));
    assert!(notice.contains("option 3"));
}

#[test]
fn prints_ledger_contents() {
    let dir = TempDir::new().unwrap();
    let agency = agency(&dir);
    let worker = Worker::try_new("Maria Lopez", "5551234567", 18.5, "cleaning", true).unwrap();
    agency.ledger.append(&worker, agency.clock.now()).unwrap();
    let mut prompter = ScriptedPrompter::new([" Workers "]);

    view_ledger(&agency, &mut prompter).unwrap();

    assert!(prompter.notices()[0].contains("Name: Maria Lopez"));
    assert_eq!(prompter.notices()[1], "(1 records)");
}

#[test]
fn empty_ledger_says_so() {
    let dir = TempDir::new().unwrap();
    let agency = agency(&dir);
    std::fs::write(dir.path().join("companies.txt"), "").unwrap();
    let mut prompter = ScriptedPrompter::new(["companies"]);

    view_ledger(&agency, &mut prompter).unwrap();

    assert_eq!(prompter.notices().len(), 1);
    assert_eq!(prompter.notices()[0], "Ledger 'companies' is empty.");
}
