//! Display formatting for wizard views.
//!
//! Every view is a small wrapper implementing [`std::fmt::Display`] and
//! producing markdown, which the CLI renders through termimad or prints as
//! plain text.
//!
//! ## Module Organization
//!
//! - [`results`]: Confirmation list and result view (ConfirmedTimes,
//!   ScheduleView)
//! - [`status`]: Notification line
//! - [`datetime`]: Date formatting utilities
//!
//! ## Usage Examples
//!
//! ```rust
//! use cadence_core::{display::ScheduleView, models::ScheduleResponse};
//!
//! let response = ScheduleResponse::from_body(r#"{"solution": [["2024-06-01", "09:00"]]}"#);
//! let output = ScheduleView::new("Leg day", Some(&response)).to_string();
//! assert!(output.contains("- 2024-06-01: 09:00"));
//! ```

pub mod datetime;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use datetime::DayLabel;
pub use results::{ConfirmedTimes, ScheduleView, NO_SCHEDULE, NO_TIME_SLOTS};
pub use status::NotificationLine;
