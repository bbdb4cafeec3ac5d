// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::NaiveDate;
use proptest::prelude::*;
use yare::parameterized;

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(17, 45, 0)
        .unwrap()
}

fn store(dir: &Path) -> SummaryStore {
    SummaryStore::new(dir, "LocalWork Connect", 100.0)
}

fn totals(workers: u64, companies: u64, jobs: u64, revenue: f64) -> CumulativeTotals {
    CumulativeTotals {
        workers_registered: workers,
        companies_registered: companies,
        jobs_posted: jobs,
        membership_revenue: revenue,
    }
}

// ============================================================================
// Line classification
// ============================================================================

#[parameterized(
    workers = { "Total Workers Registered: 3", SummaryField::Workers, "3" },
    companies = { "  Total Companies Registered:7  ", SummaryField::Companies, "7" },
    jobs = { "Total Jobs Posted: 12", SummaryField::Jobs, "12" },
    revenue = { "Total Membership Revenue: $300.00", SummaryField::Revenue, "$300.00" },
)]
fn classify_recognized_lines(line: &str, field: SummaryField, value: &str) {
    assert_eq!(classify_line(line), Some((field, value)));
}

#[parameterized(
    rule = { "======" },
    generated = { "Generated: 2026-10-19 17:45:00" },
    derived = { "Workers Paid Membership: 3" },
    blank = { "" },
    embedded = { "Note: Total Jobs Posted: 4" },
)]
fn classify_ignores_other_lines(line: &str) {
    assert_eq!(classify_line(line), None);
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parse_ignores_unrecognized_lines() {
    let text = "\
Total Jobs Posted: 4
Daily note: slow morning, two walk-ins
Total Membership Revenue: $200.00
Total Workers Registered: 5
Total Companies Registered: 2
";
    assert_eq!(parse_summary(text).unwrap(), totals(5, 2, 4, 200.0));
}

#[test]
fn parse_accepts_revenue_without_dollar_sign() {
    let text = "Total Membership Revenue: 150.5\n";
    assert_eq!(parse_summary(text).unwrap().membership_revenue, 150.5);
}

#[test]
fn parse_missing_label_leaves_zero() {
    let text = "Total Workers Registered: 2\n";
    assert_eq!(parse_summary(text).unwrap(), totals(2, 0, 0, 0.0));
}

#[test]
fn parse_last_duplicate_wins() {
    let text = "Total Workers Registered: 2\nTotal Workers Registered: 9\n";
    assert_eq!(parse_summary(text).unwrap().workers_registered, 9);
}

#[parameterized(
    words = { "Total Workers Registered: three" },
    negative_count = { "Total Jobs Posted: -1" },
    fractional_count = { "Total Companies Registered: 1.5" },
    negative_revenue = { "Total Membership Revenue: $-100.00" },
    nan_revenue = { "Total Membership Revenue: NaN" },
    empty_value = { "Total Jobs Posted:" },
)]
fn parse_rejects_bad_values(text: &str) {
    assert!(parse_summary(text).is_err());
}

// ============================================================================
// Store
// ============================================================================

#[test]
fn load_without_file_is_first_run() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = store(dir.path()).load();
    assert_eq!(loaded.status, LoadStatus::FirstRun);
    assert_eq!(loaded.totals, CumulativeTotals::default());
}

#[test]
fn load_with_bad_value_resets_everything() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(dir.path());
    fs::write(
        store.path(),
        "Total Workers Registered: 5\nTotal Jobs Posted: lots\n",
    )
    .unwrap();

    let loaded = store.load();
    assert!(matches!(loaded.status, LoadStatus::Recovered { .. }));
    assert_eq!(loaded.totals, CumulativeTotals::default());
}

#[test]
fn load_unreadable_file_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(dir.path());
    // A directory where the file should be cannot be read as text
    fs::create_dir_all(store.path()).unwrap();

    let loaded = store.load();
    assert!(matches!(loaded.status, LoadStatus::Recovered { .. }));
    assert_eq!(loaded.totals, CumulativeTotals::default());
}

#[test]
fn load_with_extra_lines_restores() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(dir.path());
    fs::write(
        store.path(),
        "Weather: sunny\nTotal Workers Registered: 5\nTotal Companies Registered: 2\n\
         Total Jobs Posted: 4\nTotal Membership Revenue: $200.00\n",
    )
    .unwrap();

    let loaded = store.load();
    assert_eq!(loaded.status, LoadStatus::Restored);
    assert_eq!(loaded.totals, totals(5, 2, 4, 200.0));
}

#[test]
fn save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(dir.path());

    store.save(&totals(1, 0, 0, 100.0), at()).unwrap();
    store.save(&totals(2, 1, 1, 100.0), at()).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert_eq!(text.matches("Total Workers Registered:").count(), 1);
    assert!(text.contains("Total Workers Registered: 2"));
    assert!(!dir.path().join("summary.txt.tmp").exists());
}

#[test]
fn save_renders_report() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(dir.path());
    store.save(&totals(3, 2, 5, 200.0), at()).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("LOCALWORK CONNECT - SUMMARY REPORT"));
    assert!(text.contains("Generated: 2026-10-19 17:45:00"));
    assert!(text.contains("Workers Paid Membership: 2"));
    assert!(text.contains("Total Membership Revenue: $200.00"));
}

#[test]
fn derived_paid_count_floors_and_is_not_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(dir.path());
    store.save(&totals(4, 0, 0, 250.0), at()).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("Workers Paid Membership: 2"));
    assert_eq!(store.load().totals.membership_revenue, 250.0);
}

#[test]
fn save_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir.path().join("nested"));
    store.save(&totals(1, 1, 1, 0.0), at()).unwrap();
    assert_eq!(store.load().status, LoadStatus::Restored);
}

proptest! {
    #[test]
    fn save_then_load_round_trips(
        workers in 0u64..100_000,
        companies in 0u64..100_000,
        jobs in 0u64..100_000,
        paid in 0u32..10_000,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());
        let saved = totals(workers, companies, jobs, f64::from(paid) * 100.0);

        store.save(&saved, at()).unwrap();
        let loaded = store.load();

        prop_assert_eq!(loaded.status, LoadStatus::Restored);
        prop_assert_eq!(loaded.totals, saved);
    }

    #[test]
    fn round_trips_with_any_whole_cent_fee(
        fee_cents in 1u32..100_000,
        payments in proptest::collection::vec(any::<bool>(), 0..200),
    ) {
        let fee = f64::from(fee_cents) / 100.0;
        let dir = tempfile::tempdir().unwrap();
        let store = SummaryStore::new(dir.path(), "LocalWork Connect", fee);
        let mut saved = CumulativeTotals::default();
        for paid in &payments {
            saved.record_worker(*paid, fee);
        }

        store.save(&saved, at()).unwrap();
        let loaded = store.load().totals;

        prop_assert_eq!(loaded, saved);
        let paid_count = payments.iter().filter(|p| **p).count() as u64;
        prop_assert_eq!(loaded.paid_workers(fee), paid_count);
    }
}
