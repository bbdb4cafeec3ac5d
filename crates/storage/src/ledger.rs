// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only ledgers of agency records
//!
//! Each record becomes one human-readable block of `Label: value` lines
//! between separator lines. Blocks are only ever appended; nothing here
//! rewrites or truncates an existing ledger.

use chrono::NaiveDateTime;
use lwc_core::{LedgerKind, Record, UnknownLedger};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Line opening and closing every block
pub const SEPARATOR: &str =
    "======================================================================";

/// Errors that can occur in ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    UnknownLedger(#[from] UnknownLedger),
    #[error("ledger '{0}' has no records yet")]
    NotFound(LedgerKind),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The set of ledgers kept in one data directory
#[derive(Debug, Clone)]
pub struct Ledger {
    dir: PathBuf,
}

impl Ledger {
    /// Ledgers under `dir`. Nothing is created until the first append.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing the given ledger
    pub fn path(&self, kind: LedgerKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Append one record as a new block.
    ///
    /// The file is opened, written, synced and closed within the call, so the
    /// block is visible to any read once this returns.
    pub fn append<R: Record>(&self, record: &R, recorded_at: NaiveDateTime) -> Result<(), LedgerError> {
        let path = self.path(R::LEDGER);
        let io_err = |source| LedgerError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;

        let block = render_block(&record.block_lines(recorded_at));
        file.write_all(block.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;

        info!(ledger = %R::LEDGER, path = %path.display(), "appended record");
        Ok(())
    }

    /// Read a ledger by the name the operator typed.
    ///
    /// Names outside the fixed set are rejected before any file access.
    pub fn read(&self, name: &str) -> Result<String, LedgerError> {
        let kind: LedgerKind = name.parse()?;
        self.read_kind(kind)
    }

    /// Full raw text of a ledger
    pub fn read_kind(&self, kind: LedgerKind) -> Result<String, LedgerError> {
        let path = self.path(kind);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LedgerError::NotFound(kind)),
            Err(source) => Err(LedgerError::Io { path, source }),
        }
    }
}

/// Render labelled lines as one block, separator lines on both sides.
pub fn render_block(lines: &[(&str, String)]) -> String {
    let mut block = String::new();
    block.push_str(SEPARATOR);
    block.push('\n');
    for (label, value) in lines {
        block.push_str(label);
        block.push_str(": ");
        block.push_str(value);
        block.push('\n');
    }
    block.push_str(SEPARATOR);
    block.push('\n');
    block
}

/// Number of blocks in a ledger's text
pub fn count_blocks(text: &str) -> usize {
    text.lines().filter(|line| *line == SEPARATOR).count() / 2
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
