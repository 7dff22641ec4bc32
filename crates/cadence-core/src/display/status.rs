//! The notification line shown under each step.

use std::fmt;

use crate::notification::Notification;

/// The notification line shown under the current step, or nothing once the
/// notification has expired.
pub struct NotificationLine<'a>(pub Option<&'a Notification>);

impl fmt::Display for NotificationLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(notification) => writeln!(f, "{notification}"),
            None => Ok(()),
        }
    }
}
