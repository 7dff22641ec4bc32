//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry the clap derives and convert into core types, so
//! `cadence-core` stays free of CLI concerns. [`Cli`] owns the resolved
//! configuration, the HTTP client and the renderer, and runs either the
//! interactive session or a one-shot submission.

use std::io;

use anyhow::{bail, Context, Result};
use cadence_core::{
    display::{ConfirmedTimes, NotificationLine, ScheduleView},
    Config, ScheduleClient, SlotMode, Wizard, WizardBuilder, WizardStep,
};
use clap::{Args, ValueEnum};
use jiff::civil::Date;
use log::info;

use crate::{renderer::TerminalRenderer, session::Session};

/// Submit a schedule request without prompts
///
/// Every step of the wizard is filled from arguments and goes through the
/// same validation as the interactive flow. Pass one `--times` per unique
/// date, in ascending date order.
#[derive(Args)]
pub struct SubmitArgs {
    /// Name of the workout
    #[arg(long)]
    pub name: String,
    /// Dates to schedule (YYYY-MM-DD); repeat or separate with commas
    #[arg(long = "date", required = true, value_delimiter = ',')]
    pub dates: Vec<Date>,
    /// Comma-separated time slots for one date; repeat once per date
    #[arg(long = "times")]
    pub times: Vec<String>,
    /// Preferred number of workouts; enables the count step
    #[arg(long)]
    pub count: Option<u32>,
    /// Print the request that would be sent instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Command-line representation of the time slot input variants.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SlotModeArg {
    /// Type time slots in, edit and remove them by number
    FreeText,
    /// Toggle time slots from a fixed grid
    Grid,
}

impl From<SlotModeArg> for SlotMode {
    fn from(val: SlotModeArg) -> Self {
        match val {
            SlotModeArg::FreeText => SlotMode::FreeText,
            SlotModeArg::Grid => SlotMode::Grid,
        }
    }
}

/// Split one `--times` value into labels. An empty value is an empty day.
fn split_times(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct Cli {
    config: Config,
    client: ScheduleClient,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: Config, renderer: TerminalRenderer) -> Result<Self> {
        let client =
            ScheduleClient::from_config(&config).context("Failed to create scheduling client")?;
        Ok(Self {
            config,
            client,
            renderer,
        })
    }

    fn wizard(&self, force_count: bool) -> Wizard {
        WizardBuilder::from_config(&self.config)
            .with_preferred_count(self.config.collect_preferred_count || force_count)
            .build()
    }

    /// Run the wizard against stdin/stdout.
    pub async fn run_interactive(&self) -> Result<()> {
        info!("Starting interactive session against {}", self.client.endpoint());
        let stdin = io::stdin();
        let mut session = Session::new(self.wizard(false), &self.renderer, stdin.lock());
        session.run(&self.client).await
    }

    /// Fill every step from `args` and submit.
    pub async fn submit(&self, args: SubmitArgs) -> Result<()> {
        let SubmitArgs {
            name,
            dates,
            times,
            count,
            dry_run,
        } = args;
        let mut wizard = self.wizard(count.is_some());

        wizard.submit_name(&name).context("Invalid workout name")?;
        if wizard.step() == WizardStep::PreferredCountEntry {
            wizard
                .submit_preferred_count(count)
                .context("Invalid preferred count")?;
        }
        wizard.submit_dates(dates).context("Invalid dates")?;

        let day_count = wizard.state().selected_dates.len();
        if times.len() != day_count {
            bail!(
                "Expected {day_count} --times value(s), one per unique date, got {}",
                times.len()
            );
        }
        for (day, raw) in times.iter().enumerate() {
            wizard
                .confirm_times(split_times(raw))
                .with_context(|| format!("Invalid time slots for date #{}", day + 1))?;
        }

        self.renderer
            .render(&ConfirmedTimes::from_state(wizard.state()).to_string())?;

        if dry_run {
            println!("{}", wizard.request()?.to_json_pretty()?);
            return Ok(());
        }

        wizard.submit(&self.client).await?;
        self.renderer
            .render(&NotificationLine(wizard.notifications().latest()).to_string())?;
        self.renderer
            .render(&ScheduleView::from_wizard(&wizard).to_string())?;

        if let Some(error) = &wizard.state().last_error {
            bail!("{error}");
        }
        Ok(())
    }
}
