//! Calendar date selection.
//!
//! Dates are handled as [`jiff::civil::Date`] values with no time zone
//! attached. Whatever order the user picks them in, the wizard stores them
//! ascending with duplicates removed.

use jiff::civil::Date;

use crate::error::{Result, SchedulerError};

/// Normalize an arbitrary collection of dates into the stored form: strictly
/// ascending, no duplicates.
///
/// # Examples
///
/// ```rust
/// use cadence_core::dates::normalize_dates;
/// use jiff::civil::date;
///
/// let picked = vec![date(2024, 6, 3), date(2024, 6, 1), date(2024, 6, 3)];
/// assert_eq!(normalize_dates(picked), vec![date(2024, 6, 1), date(2024, 6, 3)]);
/// ```
pub fn normalize_dates<I>(dates: I) -> Vec<Date>
where
    I: IntoIterator<Item = Date>,
{
    let mut dates: Vec<Date> = dates.into_iter().collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Parse a user-entered list of ISO dates (`YYYY-MM-DD`) separated by commas
/// and/or whitespace.
///
/// # Errors
///
/// Returns `SchedulerError::InvalidInput` naming the first token that is not
/// a valid calendar date.
pub fn parse_dates(input: &str) -> Result<Vec<Date>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<Date>().map_err(|e| {
                SchedulerError::invalid_input("dates")
                    .with_reason(format!("'{token}' is not a valid date: {e}"))
            })
        })
        .collect()
}

/// Long, human-readable form of a date with an ordinal day, e.g.
/// `June 1st, 2024`.
pub fn long_label(date: Date) -> String {
    format!(
        "{} {}{}, {}",
        date.strftime("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: i8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// One-line description of a date selection as shown after the dates step.
///
/// One date is shown in full, two are joined with "and", and anything larger
/// collapses to the earliest date plus a count.
pub fn selection_summary(dates: &[Date]) -> String {
    match dates {
        [] => String::new(),
        [only] => long_label(*only),
        [first, second] => format!("{} and {}", long_label(*first), long_label(*second)),
        _ => {
            let earliest = dates.iter().min().copied().unwrap_or(dates[0]);
            format!("{} + {} more", long_label(earliest), dates.len() - 1)
        }
    }
}
