//! The scheduling wizard.
//!
//! [`Wizard`] walks a single user through a fixed, forward-only sequence of
//! steps and owns everything collected along the way:
//!
//! ```text
//! NameEntry ─▶ [PreferredCountEntry] ─▶ DateSelection ─▶ TimeSelection(0)
//!     ─▶ … ─▶ TimeSelection(k-1) ─▶ Confirmation ─▶ ResultDisplay
//! ```
//!
//! Each step accepts exactly one kind of forward transition. Input that fails
//! validation leaves the wizard where it is and shows a notification; calling
//! an operation that belongs to a different step is refused with
//! [`SchedulerError::InvalidTransition`](crate::SchedulerError::InvalidTransition)
//! and changes nothing.
//!
//! ## Submodules
//!
//! - [`builder`]: Creates [`Wizard`] instances from a [`Config`](crate::Config)
//! - [`transitions`]: Name, count, date and time slot steps
//! - [`submission`]: The confirmation step and the backend round trip
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::{WizardBuilder, WizardStep};
//! use jiff::civil::date;
//!
//! let mut wizard = WizardBuilder::new().build();
//!
//! // Blank names are refused with a notification
//! assert!(wizard.submit_name("   ").is_err());
//! assert_eq!(wizard.step(), WizardStep::NameEntry);
//!
//! wizard.submit_name("Leg day")?;
//! wizard.submit_dates(vec![date(2024, 6, 3), date(2024, 6, 1)])?;
//! assert_eq!(wizard.step(), WizardStep::TimeSelection { day: 0 });
//!
//! wizard.confirm_times(vec!["09:00".to_string()])?;
//! wizard.confirm_times(vec!["18:00".to_string()])?;
//! assert_eq!(wizard.step(), WizardStep::Confirmation);
//!
//! let request = wizard.request()?;
//! assert_eq!(request.days, vec![date(2024, 6, 1), date(2024, 6, 3)]);
//! # Ok::<(), cadence_core::SchedulerError>(())
//! ```

use std::fmt;

use jiff::{civil::Date, Timestamp};

use crate::{
    error::SchedulerError,
    models::ScheduleResponse,
    notification::{Notification, NotificationChannel},
    slots::{SlotMode, TimeSlotCollector},
};

pub mod builder;
pub mod submission;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use builder::WizardBuilder;

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Waiting for a workout name
    NameEntry,
    /// Waiting for the preferred number of workouts (optional step)
    PreferredCountEntry,
    /// Waiting for the set of dates
    DateSelection,
    /// Collecting time slots for the date at index `day`
    TimeSelection { day: usize },
    /// Everything collected; waiting for the user to ask for a schedule
    Confirmation,
    /// A schedule request has been sent; showing its outcome
    ResultDisplay,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::NameEntry => f.write_str("name entry"),
            WizardStep::PreferredCountEntry => f.write_str("preferred count entry"),
            WizardStep::DateSelection => f.write_str("date selection"),
            WizardStep::TimeSelection { day } => write!(f, "time selection (day {})", day + 1),
            WizardStep::Confirmation => f.write_str("confirmation"),
            WizardStep::ResultDisplay => f.write_str("result display"),
        }
    }
}

/// Everything the user has entered plus the outcome of the submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub workout_name: String,
    pub preferred_count: Option<u32>,
    /// Ascending, without duplicates
    pub selected_dates: Vec<Date>,
    /// One entry per selected date, filled in date order
    pub per_date_times: Vec<Vec<String>>,
    pub last_response: Option<ScheduleResponse>,
    pub last_error: Option<String>,
}

/// Behaviour switches fixed for the lifetime of a wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOptions {
    pub collect_preferred_count: bool,
    pub slot_mode: SlotMode,
    pub grid_labels: Vec<String>,
}

/// Single-session scheduling wizard.
#[derive(Debug, Clone)]
pub struct Wizard {
    pub(crate) options: WizardOptions,
    pub(crate) step: WizardStep,
    pub(crate) state: WizardState,
    pub(crate) collector: Option<TimeSlotCollector>,
    pub(crate) notifications: NotificationChannel,
}

impl Wizard {
    pub(crate) fn new(options: WizardOptions, notifications: NotificationChannel) -> Self {
        Self {
            options,
            step: WizardStep::NameEntry,
            state: WizardState::default(),
            collector: None,
            notifications,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    /// The date whose time slots are being collected, if any.
    pub fn current_date(&self) -> Option<Date> {
        match self.step {
            WizardStep::TimeSelection { day } => self.state.selected_dates.get(day).copied(),
            _ => None,
        }
    }

    /// The in-progress time slot collector for the current date.
    pub fn collector(&self) -> Option<&TimeSlotCollector> {
        self.collector.as_ref()
    }

    /// The notification visible right now, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current(Timestamp::now())
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }

    /// True once the result step is reached but no outcome has been recorded.
    pub fn is_pending(&self) -> bool {
        self.step == WizardStep::ResultDisplay
            && self.state.last_response.is_none()
            && self.state.last_error.is_none()
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>) {
        self.notifications.show(message, Timestamp::now());
    }

    /// Show the user-facing part of a validation error and hand the error back.
    pub(crate) fn reject(&mut self, err: SchedulerError) -> SchedulerError {
        let message = match &err {
            SchedulerError::InvalidInput { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        self.notify(message);
        err
    }

    pub(crate) fn wrong_step(&self, action: &'static str) -> SchedulerError {
        SchedulerError::InvalidTransition {
            step: self.step,
            action,
        }
    }
}
