//! `footprint`: command-line front end for the digital footprint tracker.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `footprint-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing) on stderr
//! 3. Point the profile store at the data directory (created on first save)
//! 4. Open a session (saved profile or the default)
//! 5. Run the subcommand and print JSON on stdout
//!
//! A failed save still prints the edited state, then exits non-zero. The
//! previously saved record is untouched.

mod error;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use footprint_calculator::Insights;
use footprint_calculator::offsets::{OffsetQuote, quote_all};
use footprint_core::config::DEFAULT_CONFIG_FILE;
use footprint_core::{FootprintConfig, LoggingConfig, Session};
use footprint_store::{DurableMedium, FileMedium, ProfileStore, StoreError};
use footprint_types::{ActivityField, ActivityProfile, ImpactBreakdown};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Track the carbon footprint of everyday digital habits.
#[derive(Debug, Parser)]
#[command(name = "footprint", version)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the current profile, its annual impact, and insights.
    Show,
    /// Change one activity field and save.
    Set {
        /// Field to change: emails, sd, hd, ultra, or storage.
        field: ActivityField,
        /// New value (daily count, hours per day, or gigabytes).
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Restore the default profile and save.
    Reset,
    /// Sign up for early access.
    Join {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List early-access requests in submission order.
    Requests,
    /// List achievements.
    Achievements,
    /// List offset projects with the cost to neutralize the current total.
    Offsets,
}

/// Everything `show`, `set` and `reset` print.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard {
    profile: ActivityProfile,
    impact: ImpactBreakdown,
    insights: Insights,
    unsaved_changes: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OffsetReport {
    total_impact: f64,
    projects: Vec<OffsetQuote>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("footprint: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = FootprintConfig::load_or_default(&cli.config)?;
    init_tracing(&config.logging);
    info!(
        config = %cli.config.display(),
        data_dir = %config.storage.data_dir.display(),
        "footprint starting"
    );

    let medium = FileMedium::new(&config.storage.data_dir);
    let mut session = Session::open(ProfileStore::new(medium), config.emission_factors);

    let stdout = io::stdout();
    execute(&cli.command, &mut session, &mut stdout.lock())
}

/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn execute<M: DurableMedium, W: Write>(
    command: &Command,
    session: &mut Session<M>,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Command::Show => print_dashboard(session, out),
        Command::Set { field, value } => {
            let saved = session.set_field(*field, *value);
            finish_edit(session, out, saved)
        }
        Command::Reset => {
            let saved = session.reset();
            finish_edit(session, out, saved)
        }
        Command::Join { name, email } => {
            let request = session.join_early_access(name, email)?;
            write_json(out, &request)
        }
        Command::Requests => write_json(out, &session.early_access_requests()),
        Command::Achievements => write_json(out, &session.achievements()),
        Command::Offsets => {
            let total_impact = session.impact().total_impact;
            let report = OffsetReport {
                total_impact,
                projects: quote_all(total_impact),
            };
            write_json(out, &report)
        }
    }
}

/// Print the edited state whether or not it was saved, then report the save.
fn finish_edit<M: DurableMedium, W: Write>(
    session: &mut Session<M>,
    out: &mut W,
    saved: Result<(), StoreError>,
) -> Result<(), CliError> {
    print_dashboard(session, out)?;
    saved.map_err(CliError::from)
}

fn print_dashboard<M: DurableMedium, W: Write>(
    session: &mut Session<M>,
    out: &mut W,
) -> Result<(), CliError> {
    let impact = session.impact();
    let dashboard = Dashboard {
        profile: *session.profile(),
        impact,
        insights: Insights::from_impact(&impact),
        unsaved_changes: session.has_unsaved_changes(),
    };
    write_json(out, &dashboard)
}

fn write_json<T: Serialize + ?Sized, W: Write>(out: &mut W, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json}")?;
    Ok(())
}
