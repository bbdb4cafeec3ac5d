// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for `lwc summary`
//!
//! Verify `lwc summary` reports persisted totals without writing anything.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn summary_text_after_registration() {
    let temp = Project::empty();
    temp.lwc().stdin(REGISTER_MARIA).passes();

    temp.lwc()
        .args(&["summary"])
        .passes()
        .stdout_has("LocalWork Connect totals")
        .stdout_has("Workers registered:   1")
        .stdout_has("Paid memberships:     1")
        .stdout_has("Membership revenue:   $100.00");
}

#[test]
fn summary_json_on_first_run() {
    let temp = Project::empty();

    temp.lwc()
        .args(&["summary", "--format", "json"])
        .passes()
        .stdout_has(r#""status": "first_run""#)
        .stdout_has(r#""workers_registered": 0"#);

    assert!(!temp.exists("summary.txt"));
}
