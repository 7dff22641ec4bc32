//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a calendar `Date` that shows the ISO date followed by the
/// weekday, e.g. `2024-06-01 (Saturday)`.
pub struct DayLabel(pub Date);

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d (%A)"))
    }
}
