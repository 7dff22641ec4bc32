//! The confirmation step and the round trip to the scheduling service.

use super::{Wizard, WizardStep};
use crate::{
    client::ScheduleClient,
    error::Result,
    models::{ScheduleRequest, ScheduleResponse},
};

/// Shown as soon as the request goes out.
pub const FINDING_SCHEDULE: &str = "Finding your schedule...";

/// Shown when the service answered.
pub const SCHEDULE_SENT: &str = "Schedule sent successfully!";

/// Shown, and recorded as the last error, when the request failed.
pub const SEND_FAILED: &str = "Failed to send schedule.";

impl Wizard {
    /// Assemble the request from what has been collected.
    ///
    /// `n` is only included when the preferred-count step is enabled.
    ///
    /// # Errors
    ///
    /// `SchedulerError::InvalidTransition` before every date has its times.
    pub fn request(&self) -> Result<ScheduleRequest> {
        match self.step {
            WizardStep::Confirmation | WizardStep::ResultDisplay => {}
            _ => return Err(self.wrong_step("build a schedule request")),
        }

        let preferred = if self.options.collect_preferred_count {
            self.state.preferred_count
        } else {
            None
        };
        Ok(ScheduleRequest::new(
            self.state.selected_dates.clone(),
            self.state.per_date_times.clone(),
            preferred,
        ))
    }

    /// Leave the confirmation step and return the request to send.
    ///
    /// The "finding schedule" notification is shown immediately, before any
    /// network activity.
    ///
    /// # Errors
    ///
    /// `SchedulerError::InvalidTransition` unless at the confirmation step.
    pub fn begin_submission(&mut self) -> Result<ScheduleRequest> {
        if self.step != WizardStep::Confirmation {
            return Err(self.wrong_step("find a schedule"));
        }

        let request = self.request()?;
        self.advance(WizardStep::ResultDisplay);
        self.notify(FINDING_SCHEDULE);
        Ok(request)
    }

    /// Record the outcome of the request started by
    /// [`begin_submission`](Self::begin_submission).
    ///
    /// A failure of any kind is stored as the generic
    /// [`SEND_FAILED`] message; the underlying error is only logged.
    ///
    /// # Errors
    ///
    /// `SchedulerError::InvalidTransition` if no submission is pending.
    pub fn complete_submission(&mut self, outcome: Result<ScheduleResponse>) -> Result<()> {
        if !self.is_pending() {
            return Err(self.wrong_step("record a schedule result"));
        }

        match outcome {
            Ok(response) => {
                log::info!("schedule service responded: {response:?}");
                self.state.last_response = Some(response);
                self.notify(SCHEDULE_SENT);
            }
            Err(err) => {
                log::warn!("schedule request failed: {err}");
                self.state.last_error = Some(SEND_FAILED.to_string());
                self.notify(SEND_FAILED);
            }
        }
        Ok(())
    }

    /// Send the collected data with `client` and record the outcome.
    ///
    /// Network failures do not surface as `Err`; they end up in
    /// [`WizardState::last_error`](super::WizardState::last_error) with a
    /// notification, the same as in the interactive flow.
    ///
    /// # Errors
    ///
    /// `SchedulerError::InvalidTransition` unless at the confirmation step.
    pub async fn submit(&mut self, client: &ScheduleClient) -> Result<()> {
        let request = self.begin_submission()?;
        let outcome = client.submit(&request).await;
        self.complete_submission(outcome)
    }
}
