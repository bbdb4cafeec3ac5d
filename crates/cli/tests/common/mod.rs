// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the lwc integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub use predicates::prelude::*;

pub const SEPARATOR: &str =
    "======================================================================";

/// Menu input registering Maria Lopez with a paid membership, then exiting
pub const REGISTER_MARIA: &str = "1\n1\nMaria Lopez\n5551234567\n18.50\ncleaning\nyes\n5\n";

/// A scratch data directory
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the data directory
    pub fn file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }

    /// Command for the lwc binary pointed at this data directory
    pub fn lwc(&self) -> Lwc {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lwc"));
        cmd.arg("--data-dir").arg(self.path()).env_remove("RUST_LOG");
        Lwc { cmd }
    }
}

pub struct Lwc {
    cmd: Command,
}

impl Lwc {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(mut self) -> Run {
        Run {
            assert: self.cmd.assert().success(),
        }
    }

    pub fn fails(mut self) -> Run {
        Run {
            assert: self.cmd.assert().failure(),
        }
    }
}

pub struct Run {
    assert: assert_cmd::assert::Assert,
}

impl Run {
    pub fn stdout_has(self, expected: &str) -> Self {
        Self {
            assert: self.assert.stdout(predicate::str::contains(expected)),
        }
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        Self {
            assert: self
                .assert
                .stdout(predicate::str::contains(unexpected).not()),
        }
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        Self {
            assert: self.assert.stderr(predicate::str::contains(expected)),
        }
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stdout).into_owned()
    }
}
