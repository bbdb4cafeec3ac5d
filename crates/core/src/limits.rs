// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field limits for agency records.
//!
//! One canonical threshold per field. Lengths are characters after
//! trimming; numeric ranges are closed intervals.

/// Digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// Hourly amounts (wage expectations and posted pay rates)
pub const MIN_HOURLY_RATE: f64 = 10.0;
pub const MAX_HOURLY_RATE: f64 = 50.0;

/// Hours per week on a job posting
pub const MIN_HOURS_PER_WEEK: u32 = 1;
pub const MAX_HOURS_PER_WEEK: u32 = 80;

/// Workers registered in a single batch
pub const MIN_BATCH_SIZE: u32 = 1;
pub const MAX_BATCH_SIZE: u32 = 10;

pub const WORKER_NAME_MIN_LEN: usize = 3;
pub const WORKER_SKILLS_MIN_LEN: usize = 1;

pub const COMPANY_NAME_MIN_LEN: usize = 3;
pub const BUSINESS_TYPE_MIN_LEN: usize = 3;
pub const ADDRESS_MIN_LEN: usize = 5;

pub const POSTING_COMPANY_MIN_LEN: usize = 1;
pub const POSITION_TITLE_MIN_LEN: usize = 4;
pub const REQUIRED_SKILLS_MIN_LEN: usize = 3;
