// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agency records: workers, companies and job postings.
//!
//! Records are immutable and can only be built through `try_new`, which
//! checks every field against [`crate::input`]. `collect` asks the operator
//! field by field until each one is valid, then builds through `try_new`.

use crate::clock::Clock;
use crate::input::{self, InputError, DATE_FORMAT};
use crate::limits::*;
use crate::prompt::{self, PromptError, Prompter};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A record field that failed its rule
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {source}")]
pub struct RecordError {
    pub field: &'static str,
    #[source]
    pub source: InputError,
}

fn field<T>(name: &'static str, result: Result<T, InputError>) -> Result<T, RecordError> {
    result.map_err(|source| RecordError {
        field: name,
        source,
    })
}

/// The closed set of ledgers records are appended to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerKind {
    Workers,
    Companies,
    Jobs,
}

impl LedgerKind {
    pub const ALL: [LedgerKind; 3] = [LedgerKind::Workers, LedgerKind::Companies, LedgerKind::Jobs];

    /// Name the operator types to pick this ledger
    pub fn name(&self) -> &'static str {
        match self {
            LedgerKind::Workers => "workers",
            LedgerKind::Companies => "companies",
            LedgerKind::Jobs => "jobs",
        }
    }

    /// File backing this ledger inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            LedgerKind::Workers => "workers.txt",
            LedgerKind::Companies => "companies.txt",
            LedgerKind::Jobs => "jobs.txt",
        }
    }
}

impl fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ledger name outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ledger '{0}'")]
pub struct UnknownLedger(pub String);

impl FromStr for LedgerKind {
    type Err = UnknownLedger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LedgerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownLedger(s.trim().to_string()))
    }
}

/// A record that can be written to a ledger as one block
pub trait Record {
    const LEDGER: LedgerKind;

    /// Labelled lines of this record's block, in order
    fn block_lines(&self, recorded_at: NaiveDateTime) -> Vec<(&'static str, String)>;
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn hourly(amount: f64) -> String {
    format!("${:.2}/hour", amount)
}

// ============================================================================
// Worker
// ============================================================================

/// A worker looking for placement
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    name: String,
    phone: String,
    hourly_wage: f64,
    skills: String,
    membership_paid: bool,
}

impl Worker {
    pub fn try_new(
        name: &str,
        phone: &str,
        hourly_wage: f64,
        skills: &str,
        membership_paid: bool,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            name: field(
                "name",
                input::check_non_empty_text(name, WORKER_NAME_MIN_LEN),
            )?,
            phone: field("phone", input::check_digit_string(phone, PHONE_DIGITS))?,
            hourly_wage: field(
                "hourly wage",
                input::check_in_range(hourly_wage, MIN_HOURLY_RATE, MAX_HOURLY_RATE),
            )?,
            skills: field(
                "skills",
                input::check_non_empty_text(skills, WORKER_SKILLS_MIN_LEN),
            )?,
            membership_paid,
        })
    }

    /// Ask the operator for each field in turn.
    pub fn collect<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Self, PromptError> {
        let name =
            prompt::collect_non_empty_text(prompter, "Enter worker name: ", WORKER_NAME_MIN_LEN)?;
        let phone = prompt::collect_digit_string(
            prompter,
            "Enter phone number (10 digits): ",
            PHONE_DIGITS,
        )?;
        let hourly_wage = prompt::collect_bounded_number(
            prompter,
            "Enter expected hourly wage ($10 - $50): ",
            MIN_HOURLY_RATE,
            MAX_HOURLY_RATE,
        )?;
        let skills = prompt::collect_non_empty_text(
            prompter,
            "Enter worker skills (e.g. cleaning, construction, cashier): ",
            WORKER_SKILLS_MIN_LEN,
        )?;
        let membership_paid =
            prompt::collect_yes_no(prompter, "Pay the membership fee now? (yes/no): ")?;

        Ok(Self::try_new(
            &name,
            &phone,
            hourly_wage,
            &skills,
            membership_paid,
        )?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn hourly_wage(&self) -> f64 {
        self.hourly_wage
    }

    pub fn skills(&self) -> &str {
        &self.skills
    }

    pub fn membership_paid(&self) -> bool {
        self.membership_paid
    }
}

impl Record for Worker {
    const LEDGER: LedgerKind = LedgerKind::Workers;

    fn block_lines(&self, _recorded_at: NaiveDateTime) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Phone", self.phone.clone()),
            ("Expected Wage", hourly(self.hourly_wage)),
            ("Skills", self.skills.clone()),
            (
                "Membership",
                if self.membership_paid { "Paid" } else { "Unpaid" }.to_string(),
            ),
        ]
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Expected wage: {}", hourly(self.hourly_wage))?;
        writeln!(f, "Skills: {}", self.skills)?;
        write!(
            f,
            "Membership: {}",
            if self.membership_paid { "paid" } else { "not paid" }
        )
    }
}

// ============================================================================
// Company
// ============================================================================

/// An employer registered with the agency
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    name: String,
    business_type: String,
    address: String,
    phone: String,
}

impl Company {
    pub fn try_new(
        name: &str,
        business_type: &str,
        address: &str,
        phone: &str,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            name: field(
                "company name",
                input::check_non_empty_text(name, COMPANY_NAME_MIN_LEN),
            )?,
            business_type: field(
                "business type",
                input::check_non_empty_text(business_type, BUSINESS_TYPE_MIN_LEN),
            )?,
            address: field(
                "address",
                input::check_street_address(address, ADDRESS_MIN_LEN),
            )?,
            phone: field("phone", input::check_digit_string(phone, PHONE_DIGITS))?,
        })
    }

    /// Ask the operator for each field in turn.
    pub fn collect<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Self, PromptError> {
        let name = prompt::collect_non_empty_text(
            prompter,
            "Enter the name of the company: ",
            COMPANY_NAME_MIN_LEN,
        )?;
        let business_type = prompt::collect_non_empty_text(
            prompter,
            "Enter business type (e.g. restaurant, retail, construction, cleaning): ",
            BUSINESS_TYPE_MIN_LEN,
        )?;
        let address = prompt::collect_street_address(
            prompter,
            "Enter street address (e.g. 12 Main St): ",
            ADDRESS_MIN_LEN,
        )?;
        let phone = prompt::collect_digit_string(
            prompter,
            "Enter phone number (10 digits): ",
            PHONE_DIGITS,
        )?;

        Ok(Self::try_new(&name, &business_type, &address, &phone)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn business_type(&self) -> &str {
        &self.business_type
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl Record for Company {
    const LEDGER: LedgerKind = LedgerKind::Companies;

    fn block_lines(&self, recorded_at: NaiveDateTime) -> Vec<(&'static str, String)> {
        vec![
            (
                "Registration Time",
                crate::clock::format_timestamp(recorded_at),
            ),
            ("Company Name", self.name.clone()),
            ("Business Type", self.business_type.clone()),
            ("Address", self.address.clone()),
            ("Phone", self.phone.clone()),
        ]
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Company name: {}", self.name)?;
        writeln!(f, "Business type: {}", self.business_type)?;
        writeln!(f, "Address: {}", self.address)?;
        write!(f, "Phone: {}", self.phone)
    }
}

// ============================================================================
// Job posting
// ============================================================================

/// A position an employer wants filled.
///
/// The company name is free text; it is not checked against registered
/// companies.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    company_name: String,
    position_title: String,
    required_skills: String,
    hourly_pay_rate: f64,
    hours_per_week: u32,
    start_date: NaiveDate,
}

impl JobPosting {
    /// Build a posting, rejecting a start date before `today`.
    pub fn try_new(
        company_name: &str,
        position_title: &str,
        required_skills: &str,
        hourly_pay_rate: f64,
        hours_per_week: u32,
        start_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, RecordError> {
        field(
            "hours per week",
            input::check_in_range(
                f64::from(hours_per_week),
                f64::from(MIN_HOURS_PER_WEEK),
                f64::from(MAX_HOURS_PER_WEEK),
            ),
        )?;
        if start_date < today {
            return Err(RecordError {
                field: "start date",
                source: InputError::DateInPast {
                    date: start_date,
                    today,
                },
            });
        }
        Ok(Self {
            company_name: field(
                "company name",
                input::check_non_empty_text(company_name, POSTING_COMPANY_MIN_LEN),
            )?,
            position_title: field(
                "position title",
                input::check_non_empty_text(position_title, POSITION_TITLE_MIN_LEN),
            )?,
            required_skills: field(
                "required skills",
                input::check_non_empty_text(required_skills, REQUIRED_SKILLS_MIN_LEN),
            )?,
            hourly_pay_rate: field(
                "hourly pay rate",
                input::check_in_range(hourly_pay_rate, MIN_HOURLY_RATE, MAX_HOURLY_RATE),
            )?,
            hours_per_week,
            start_date,
        })
    }

    /// Ask the operator for each field in turn.
    ///
    /// Hours are checked as a number in range first, then truncated to
    /// whole hours.
    pub fn collect<P: Prompter + ?Sized, C: Clock>(
        prompter: &mut P,
        clock: &C,
    ) -> Result<Self, PromptError> {
        let company_name = prompt::collect_non_empty_text(
            prompter,
            "Enter the posting company name: ",
            POSTING_COMPANY_MIN_LEN,
        )?;
        let position_title = prompt::collect_non_empty_text(
            prompter,
            "Enter position title: ",
            POSITION_TITLE_MIN_LEN,
        )?;
        let required_skills = prompt::collect_non_empty_text(
            prompter,
            "Enter required skills: ",
            REQUIRED_SKILLS_MIN_LEN,
        )?;
        let hourly_pay_rate = prompt::collect_bounded_number(
            prompter,
            "Enter hourly pay rate ($10 - $50): ",
            MIN_HOURLY_RATE,
            MAX_HOURLY_RATE,
        )?;
        let hours = prompt::collect_bounded_number(
            prompter,
            "Enter hours per week (1 - 80): ",
            f64::from(MIN_HOURS_PER_WEEK),
            f64::from(MAX_HOURS_PER_WEEK),
        )?;
        let start_date =
            prompt::collect_calendar_date(prompter, clock, "Enter start date (MM/DD/YYYY): ")?;

        Ok(Self::try_new(
            &company_name,
            &position_title,
            &required_skills,
            hourly_pay_rate,
            hours.trunc() as u32,
            start_date,
            clock.today(),
        )?)
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn position_title(&self) -> &str {
        &self.position_title
    }

    pub fn required_skills(&self) -> &str {
        &self.required_skills
    }

    pub fn hourly_pay_rate(&self) -> f64 {
        self.hourly_pay_rate
    }

    pub fn hours_per_week(&self) -> u32 {
        self.hours_per_week
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Pay rate times hours, unrounded
    pub fn total_weekly_pay(&self) -> f64 {
        self.hourly_pay_rate * f64::from(self.hours_per_week)
    }
}

impl Record for JobPosting {
    const LEDGER: LedgerKind = LedgerKind::Jobs;

    fn block_lines(&self, recorded_at: NaiveDateTime) -> Vec<(&'static str, String)> {
        vec![
            ("Posted At", crate::clock::format_timestamp(recorded_at)),
            ("Company", self.company_name.clone()),
            ("Position", self.position_title.clone()),
            ("Required Skills", self.required_skills.clone()),
            ("Pay Rate", hourly(self.hourly_pay_rate)),
            ("Hours/Week", self.hours_per_week.to_string()),
            ("Weekly Total", money(self.total_weekly_pay())),
            ("Start Date", self.start_date.format(DATE_FORMAT).to_string()),
        ]
    }
}

impl fmt::Display for JobPosting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Company: {}", self.company_name)?;
        writeln!(f, "Position: {}", self.position_title)?;
        writeln!(f, "Required skills: {}", self.required_skills)?;
        writeln!(f, "Pay rate: {}", hourly(self.hourly_pay_rate))?;
        writeln!(f, "Hours/week: {}", self.hours_per_week)?;
        writeln!(f, "Weekly total: {}", money(self.total_weekly_pay()))?;
        write!(f, "Start date: {}", self.start_date.format(DATE_FORMAT))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
