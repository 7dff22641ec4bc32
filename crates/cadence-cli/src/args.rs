use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{SlotModeArg, SubmitArgs};

/// Workout scheduling wizard
///
/// Cadence collects a workout name, an optional preferred workout count, a
/// set of dates and the time slots that suit you on each date, then asks a
/// scheduling service to pick a schedule. Run without a subcommand for the
/// interactive wizard.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to a TOML configuration file. Defaults to
    /// $XDG_CONFIG_HOME/cadence/config.toml when present
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Scheduling service endpoint (overrides config and CADENCE_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Ask for a preferred number of workouts
    #[arg(long, global = true)]
    pub preferred_count: bool,

    /// How time slots are entered
    #[arg(long, global = true, value_enum)]
    pub slot_mode: Option<SlotModeArg>,

    /// Give up on the scheduling service after this many seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadence CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the wizard interactively (default)
    #[command(alias = "r")]
    Run,
    /// Fill in every step from arguments and submit in one go
    #[command(alias = "s")]
    Submit(SubmitArgs),
}
