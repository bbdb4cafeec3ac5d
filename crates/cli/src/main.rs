// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lwc - LocalWork Connect staffing console

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod console;
mod error;
mod output;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::summary::SummaryView;
use console::ConsolePrompter;
use error::LwcError;
use lwc_core::{AgencyConfig, PromptError, SystemClock};
use output::OutputFormat;
use session::{Agency, SessionTotals};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

const LOG_FILE_NAME: &str = "lwc.log";

#[derive(Parser)]
#[command(
    name = "lwc",
    version,
    about = "LocalWork Connect - register workers and companies, post jobs"
)]
struct Cli {
    /// Directory holding the ledgers, summary and log
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Configuration file (defaults to <data-dir>/lwc.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    Menu,
    /// Print a ledger: workers, companies or jobs
    View {
        /// Ledger name
        ledger: String,
    },
    /// Print the persisted totals
    Summary {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<LwcError>() {
                Some(friendly) => eprintln!("{}", friendly),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.data_dir, cli.config.as_deref())?;
    let agency = Agency::open(&cli.data_dir, config, SystemClock);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let _log_guard = setup_logging(&cli.data_dir)?;
            menu(&agency)
        }
        Commands::View { ledger } => {
            let text = agency.ledger.read(&ledger).map_err(LwcError::from_ledger)?;
            print!("{}", text);
            Ok(())
        }
        Commands::Summary { format } => {
            let view = SummaryView::new(&agency.config, &agency.summary.load());
            output::print(&view, format)?;
            Ok(())
        }
    }
}

fn load_config(data_dir: &Path, explicit: Option<&Path>) -> Result<AgencyConfig> {
    let loaded = match explicit {
        Some(path) => AgencyConfig::load(path),
        None => AgencyConfig::load_or_default(data_dir),
    };
    Ok(loaded.map_err(LwcError::invalid_config)?)
}

fn menu(agency: &Agency<SystemClock>) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = ConsolePrompter::new(stdin.lock(), io::stdout());

    let loaded = agency.summary.load();
    session::report_load(&mut prompter, &loaded);
    let mut totals = SessionTotals::new(loaded.totals);

    if let Err(e) = session::install_interrupt_handler(agency, &totals) {
        warn!(error = %e, "could not install interrupt handler");
    }

    info!(data_dir = %agency.ledger.dir().display(), "session started");
    match session::run_menu(agency, &mut prompter, &mut totals) {
        Ok(()) => info!("operator exited"),
        Err(PromptError::Closed) => info!("input closed, shutting down"),
        Err(e) => warn!(error = %e, "input failed, shutting down"),
    }

    agency.save_totals(totals.current())?;
    session::farewell(&mut prompter, &agency.config, totals.current());
    Ok(())
}

fn setup_logging(data_dir: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("cannot create data directory {}", data_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}
