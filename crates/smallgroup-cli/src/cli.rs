//! Command line definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use smallgroup_core::DivisionError;

#[derive(Debug, Parser)]
#[command(
    name = "smallgroup",
    version,
    about = "Split today's attendees into diverse discussion groups"
)]
pub struct Cli {
    /// Write logs to a daily-rolling file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Divide the members present on a date into groups
    Divide(DivideArgs),
    /// List the members present on a date
    Present(RosterArgs),
    /// Show or update the saved defaults
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct RosterArgs {
    /// Roster JSON document
    #[arg(long, short, env = "SMALLGROUP_ROSTER", value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Meeting date (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct DivideArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Preferred number of people per group
    #[arg(
        long,
        short,
        env = "SMALLGROUP_SIZE",
        allow_negative_numbers = true,
        value_parser = parse_size
    )]
    pub size: Option<i64>,

    /// Seed for reproducible groupings
    #[arg(long, env = "SMALLGROUP_SEED")]
    pub seed: Option<u64>,

    /// Cap on optimizer improvement passes
    #[arg(long)]
    pub max_passes: Option<usize>,

    /// Print the full result as JSON instead of the text export
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Default roster document
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Default group size
    #[arg(long, allow_negative_numbers = true, value_parser = parse_size)]
    pub size: Option<i64>,

    /// Default optimizer pass cap
    #[arg(long)]
    pub max_passes: Option<usize>,

    /// Default RNG seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Integer check only; the sign is validated by the division service so a
/// negative size surfaces as the same error as zero.
fn parse_size(s: &str) -> Result<i64, DivisionError> {
    s.trim()
        .parse()
        .map_err(|_| DivisionError::InvalidTargetSize(s.to_string()))
}

impl ConfigArgs {
    pub fn has_updates(&self) -> bool {
        self.roster.is_some() || self.size.is_some() || self.max_passes.is_some() || self.seed.is_some()
    }
}
