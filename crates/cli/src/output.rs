// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a value in the specified format
pub fn render<T: Serialize + std::fmt::Display>(
    value: &T,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(value),
    }
}

/// Print output in the specified format
pub fn print<T: Serialize + std::fmt::Display>(
    value: &T,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    println!("{}", render(value, format)?);
    Ok(())
}
