//! Wire models exchanged with the scheduling service.
//!
//! [`ScheduleRequest`] is what the wizard sends once every day has its time
//! slots; [`ScheduleResponse`] is the reply, decoded into one of three shapes
//! at the network boundary. Presentation lives in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{ScheduleRequest, ScheduleResponse};
//! use jiff::civil::date;
//!
//! let request = ScheduleRequest::new(
//!     vec![date(2024, 6, 1), date(2024, 6, 2)],
//!     vec![vec!["09:00".to_string()], vec!["18:00".to_string()]],
//!     Some(5),
//! );
//! assert_eq!(request.n, Some(2));
//!
//! let response = ScheduleResponse::from_body(r#"{"solution": [["2024-06-01", "09:00"]]}"#);
//! assert_eq!(response.solution().map(<[_]>::len), Some(1));
//! ```

pub mod request;
pub mod response;

#[cfg(test)]
mod tests;

pub use request::ScheduleRequest;
pub use response::{ScheduleResponse, SolutionEntry};
