//! Wrapper types for displaying the confirmation and result views.
//!
//! Both views produce markdown. Days without time slots and results without
//! a schedule fall back to fixed sentences rather than empty output.

use std::fmt;

use jiff::civil::Date;

use super::datetime::DayLabel;
use crate::{
    models::ScheduleResponse,
    wizard::{Wizard, WizardState},
};

/// Text shown for a day confirmed with no time slots.
pub const NO_TIME_SLOTS: &str = "No time slots selected";

/// Text shown when the result holds no schedule.
pub const NO_SCHEDULE: &str = "No schedule found.";

/// Wrapper type for the list of confirmed times shown before submission.
///
/// # Examples
///
/// ```rust
/// use cadence_core::display::ConfirmedTimes;
/// use jiff::civil::date;
///
/// let dates = [date(2024, 6, 1), date(2024, 6, 3)];
/// let times = [vec!["09:00".to_string(), "18:00".to_string()], vec![]];
/// let output = ConfirmedTimes::new(&dates, &times).to_string();
/// assert!(output.contains("- 2024-06-01 (Saturday): 09:00, 18:00"));
/// assert!(output.contains("- 2024-06-03 (Monday): No time slots selected"));
/// ```
pub struct ConfirmedTimes<'a> {
    pub dates: &'a [Date],
    pub times: &'a [Vec<String>],
}

impl<'a> ConfirmedTimes<'a> {
    pub fn new(dates: &'a [Date], times: &'a [Vec<String>]) -> Self {
        Self { dates, times }
    }

    pub fn from_state(state: &'a WizardState) -> Self {
        Self::new(&state.selected_dates, &state.per_date_times)
    }
}

impl fmt::Display for ConfirmedTimes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Confirmed Times")?;
        writeln!(f)?;
        for (date, times) in self.dates.iter().zip(self.times) {
            if times.is_empty() {
                writeln!(f, "- {}: {NO_TIME_SLOTS}", DayLabel(*date))?;
            } else {
                writeln!(f, "- {}: {}", DayLabel(*date), times.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Wrapper type for the result view.
///
/// Only a returned schedule produces list entries, one per assignment. A
/// message-only reply, an unrecognized reply, or a failed request all show
/// the [`NO_SCHEDULE`] fallback.
pub struct ScheduleView<'a> {
    pub workout_name: &'a str,
    pub response: Option<&'a ScheduleResponse>,
    pub pending: bool,
}

impl<'a> ScheduleView<'a> {
    pub fn new(workout_name: &'a str, response: Option<&'a ScheduleResponse>) -> Self {
        Self {
            workout_name,
            response,
            pending: false,
        }
    }

    pub fn from_wizard(wizard: &'a Wizard) -> Self {
        Self {
            workout_name: &wizard.state().workout_name,
            response: wizard.state().last_response.as_ref(),
            pending: wizard.is_pending(),
        }
    }
}

impl fmt::Display for ScheduleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.workout_name.is_empty() {
            writeln!(f, "## Schedule")?;
        } else {
            writeln!(f, "## Schedule: {}", self.workout_name)?;
        }
        writeln!(f)?;

        if self.pending {
            return writeln!(f, "Finding your schedule...");
        }

        match self.response.and_then(ScheduleResponse::solution) {
            Some(entries) if !entries.is_empty() => {
                for entry in entries {
                    writeln!(f, "- {entry}")?;
                }
            }
            _ => {
                writeln!(f, "{NO_SCHEDULE}")?;
                if let Some(message) = self.response.and_then(ScheduleResponse::message) {
                    writeln!(f)?;
                    writeln!(f, "Backend response: {message}")?;
                }
            }
        }
        Ok(())
    }
}
