//! Outgoing request payload for the scheduling service.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Body of `POST /api/schedule`.
///
/// `times[i]` holds the labels chosen for `days[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRequest {
    /// Time labels per day, index-aligned with `days`
    pub times: Vec<Vec<String>>,

    /// Selected dates, ascending, serialized as `YYYY-MM-DD`
    pub days: Vec<Date>,

    /// Number of workouts wanted, capped at the number of days. Only sent
    /// when the preferred-count step is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
}

impl ScheduleRequest {
    /// Assemble a request, applying the `n = min(days, preferred)` rule.
    pub fn new(days: Vec<Date>, times: Vec<Vec<String>>, preferred_count: Option<u32>) -> Self {
        let day_count = u32::try_from(days.len()).unwrap_or(u32::MAX);
        Self {
            n: preferred_count.map(|preferred| preferred.min(day_count)),
            times,
            days,
        }
    }

    /// The request body as indented JSON, as shown by a dry run.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::Serialization` if the payload cannot be
    /// encoded.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Iterate over `(date, labels)` pairs in date order.
    pub fn entries(&self) -> impl Iterator<Item = (&Date, &[String])> {
        self.days
            .iter()
            .zip(self.times.iter().map(Vec::as_slice))
    }
}
