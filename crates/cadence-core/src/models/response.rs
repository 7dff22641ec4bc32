//! Decoding of the scheduling service's reply.
//!
//! The service answers with free-form JSON. It is decoded once, here, into a
//! [`ScheduleResponse`] so nothing downstream has to probe for fields.

use std::fmt;

use serde_json::Value;

/// One `(date, time)` assignment from a returned schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry {
    pub date: String,
    pub time: String,
}

impl fmt::Display for SolutionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.time)
    }
}

/// The decoded reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleResponse {
    /// A schedule was found
    Solution(Vec<SolutionEntry>),
    /// The service only sent back a status message
    Message(String),
    /// Neither shape was recognized; the raw body is kept for logging
    Unrecognized(Value),
}

impl ScheduleResponse {
    /// Decode a response body. Never fails: bodies that are not JSON, or JSON
    /// without a usable `solution` or `message`, become
    /// [`ScheduleResponse::Unrecognized`].
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => ScheduleResponse::Unrecognized(Value::String(body.to_string())),
        }
    }

    /// Decode an already-parsed JSON value. `solution` wins over `message`
    /// when both are present.
    pub fn from_value(value: Value) -> Self {
        if let Some(entries) = value.get("solution").and_then(decode_solution) {
            return ScheduleResponse::Solution(entries);
        }
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return ScheduleResponse::Message(message.to_string());
        }
        ScheduleResponse::Unrecognized(value)
    }

    /// The schedule entries, if a schedule was returned.
    pub fn solution(&self) -> Option<&[SolutionEntry]> {
        match self {
            ScheduleResponse::Solution(entries) => Some(entries),
            _ => None,
        }
    }

    /// The status message, if that is what the service sent.
    pub fn message(&self) -> Option<&str> {
        match self {
            ScheduleResponse::Message(message) => Some(message),
            _ => None,
        }
    }
}

fn decode_solution(value: &Value) -> Option<Vec<SolutionEntry>> {
    value
        .as_array()?
        .iter()
        .map(|pair| match pair.as_array()?.as_slice() {
            [date, time] => Some(SolutionEntry {
                date: label(date)?,
                time: label(time)?,
            }),
            _ => None,
        })
        .collect()
}

fn label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
