//! Forward transitions for the data-collection steps.

use jiff::civil::Date;

use super::{Wizard, WizardStep};
use crate::{
    dates::{normalize_dates, parse_dates, selection_summary},
    error::{Result, SchedulerError},
    slots::{SlotMode, TimeSlotCollector, DUPLICATE_SLOT},
};

/// Shown when the name step is submitted blank.
pub const EMPTY_NAME: &str = "Please enter a workout name before submitting!";

/// Shown when the count step is submitted without a positive number.
pub const MISSING_COUNT: &str = "Please choose how many workouts you want.";

/// Shown when the date step is submitted with nothing picked.
pub const NO_DATES: &str = "Please select at least one date.";

impl Wizard {
    /// Submit the workout name.
    ///
    /// Moves to the preferred-count step when it is enabled, otherwise
    /// straight to date selection.
    ///
    /// # Errors
    ///
    /// * `SchedulerError::InvalidInput` - The name is empty or whitespace;
    ///   a notification is shown and the step does not change
    /// * `SchedulerError::InvalidTransition` - Not at the name step
    pub fn submit_name(&mut self, name: &str) -> Result<WizardStep> {
        if self.step != WizardStep::NameEntry {
            return Err(self.wrong_step("submit a workout name"));
        }

        let name = name.trim();
        if name.is_empty() {
            let err = SchedulerError::invalid_input("workout_name").with_reason(EMPTY_NAME);
            return Err(self.reject(err));
        }

        self.state.workout_name = name.to_string();
        self.notify(format!("Workout name set to: {name}"));
        Ok(self.advance(if self.options.collect_preferred_count {
            WizardStep::PreferredCountEntry
        } else {
            WizardStep::DateSelection
        }))
    }

    /// Submit the preferred number of workouts.
    ///
    /// # Errors
    ///
    /// * `SchedulerError::InvalidInput` - No count, or zero
    /// * `SchedulerError::InvalidTransition` - Not at the count step
    pub fn submit_preferred_count(&mut self, count: Option<u32>) -> Result<WizardStep> {
        if self.step != WizardStep::PreferredCountEntry {
            return Err(self.wrong_step("submit a preferred workout count"));
        }

        let Some(count) = count.filter(|c| *c > 0) else {
            let err = SchedulerError::invalid_input("preferred_count").with_reason(MISSING_COUNT);
            return Err(self.reject(err));
        };

        self.state.preferred_count = Some(count);
        self.notify(format!("Preferred workout count set to: {count}"));
        Ok(self.advance(WizardStep::DateSelection))
    }

    /// Submit the picked dates.
    ///
    /// The dates are stored ascending with duplicates removed, and one empty
    /// time slot entry is prepared per date.
    ///
    /// # Errors
    ///
    /// * `SchedulerError::InvalidInput` - No dates were picked
    /// * `SchedulerError::InvalidTransition` - Not at the date step
    pub fn submit_dates<I>(&mut self, dates: I) -> Result<WizardStep>
    where
        I: IntoIterator<Item = Date>,
    {
        if self.step != WizardStep::DateSelection {
            return Err(self.wrong_step("submit dates"));
        }

        let dates = normalize_dates(dates);
        if dates.is_empty() {
            let err = SchedulerError::invalid_input("dates").with_reason(NO_DATES);
            return Err(self.reject(err));
        }

        self.notify(format!(
            "You selected the following dates: {}",
            selection_summary(&dates)
        ));
        self.state.per_date_times = vec![Vec::new(); dates.len()];
        self.state.selected_dates = dates;
        Ok(self.advance(WizardStep::TimeSelection { day: 0 }))
    }

    /// Submit dates typed as text (`YYYY-MM-DD`, separated by commas or
    /// whitespace).
    ///
    /// # Errors
    ///
    /// * `SchedulerError::InvalidInput` - A token is not a valid date, or no
    ///   dates were given; a notification is shown and the step does not
    ///   change
    /// * `SchedulerError::InvalidTransition` - Not at the date step
    pub fn submit_date_text(&mut self, input: &str) -> Result<WizardStep> {
        if self.step != WizardStep::DateSelection {
            return Err(self.wrong_step("submit dates"));
        }
        match parse_dates(input) {
            Ok(dates) => self.submit_dates(dates),
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Append a blank free-text slot for the current date.
    pub fn add_time_slot(&mut self) -> Result<usize> {
        self.with_collector("add a time slot", TimeSlotCollector::add_slot)
    }

    /// Set the free-text slot at `index` for the current date.
    pub fn set_time_slot(&mut self, index: usize, value: &str) -> Result<()> {
        self.with_collector("edit a time slot", |c| c.set_slot(index, value))
    }

    /// Add and fill a free-text slot in one go.
    pub fn push_time_slot(&mut self, value: &str) -> Result<()> {
        self.with_collector("add a time slot", |c| c.push_slot(value))
    }

    /// Remove the free-text slot at `index` for the current date.
    pub fn remove_time_slot(&mut self, index: usize) -> Result<String> {
        self.with_collector("remove a time slot", |c| c.remove_slot(index))
    }

    /// Toggle a grid label for the current date.
    pub fn toggle_time_slot(&mut self, label: &str) -> Result<bool> {
        self.with_collector("toggle a time slot", |c| c.toggle(label))
    }

    /// Confirm whatever the current date's collector holds.
    ///
    /// # Errors
    ///
    /// * `SchedulerError::InvalidInput` - Grid mode with nothing selected
    /// * `SchedulerError::InvalidTransition` - Not collecting time slots
    pub fn confirm_time_slots(&mut self) -> Result<WizardStep> {
        let confirmed = self.with_collector("confirm time slots", |c| c.confirm())?;
        self.record_day(confirmed)
    }

    /// Confirm a complete set of labels for the current date, bypassing the
    /// interactive collector. The labels go through the same rules as
    /// interactive input: duplicates and unknown grid labels are refused, and
    /// grid mode needs at least one label.
    pub fn confirm_times(&mut self, times: Vec<String>) -> Result<WizardStep> {
        if !matches!(self.step, WizardStep::TimeSelection { .. }) {
            return Err(self.wrong_step("confirm time slots"));
        }

        let mut collector =
            TimeSlotCollector::for_mode(self.options.slot_mode, &self.options.grid_labels);
        let filled = times.iter().try_for_each(|time| match self.options.slot_mode {
            SlotMode::FreeText => collector.push_slot(time),
            SlotMode::Grid => match collector.toggle(time)? {
                true => Ok(()),
                false => Err(SchedulerError::invalid_input("time_slot").with_reason(DUPLICATE_SLOT)),
            },
        });
        let confirmed = match filled.and_then(|()| collector.confirm()) {
            Ok(confirmed) => confirmed,
            Err(err) => return Err(self.reject(err)),
        };
        self.record_day(confirmed)
    }

    fn with_collector<T, F>(&mut self, action: &'static str, f: F) -> Result<T>
    where
        F: FnOnce(&mut TimeSlotCollector) -> Result<T>,
    {
        let Some(collector) = self.collector.as_mut() else {
            return Err(self.wrong_step(action));
        };
        f(collector).map_err(|err| self.reject(err))
    }

    fn record_day(&mut self, times: Vec<String>) -> Result<WizardStep> {
        let WizardStep::TimeSelection { day } = self.step else {
            return Err(self.wrong_step("confirm time slots"));
        };

        self.state.per_date_times[day] = times;
        let next = day + 1;
        if next < self.state.selected_dates.len() {
            Ok(self.advance(WizardStep::TimeSelection { day: next }))
        } else {
            Ok(self.advance(WizardStep::Confirmation))
        }
    }

    pub(crate) fn advance(&mut self, next: WizardStep) -> WizardStep {
        log::debug!("wizard: {} -> {}", self.step, next);
        self.collector = match next {
            WizardStep::TimeSelection { .. } => Some(TimeSlotCollector::for_mode(
                self.options.slot_mode,
                &self.options.grid_labels,
            )),
            _ => None,
        };
        self.step = next;
        next
    }
}
