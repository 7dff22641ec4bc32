//! Transient user-facing notifications.
//!
//! A notification is an owned value carrying its own expiry. Nothing runs on
//! a timer: whoever renders the session asks [`NotificationChannel::current`]
//! with the current time and shows the message only if it has not expired.

use std::fmt;

use jiff::{SignedDuration, Timestamp};

/// How long a notification stays visible unless replaced.
pub const DEFAULT_TTL: SignedDuration = SignedDuration::from_secs(3);

/// A single message with the instant it stops being visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Timestamp,
    /// Position of this notification among everything shown in the session,
    /// starting at 1.
    pub sequence: u64,
}

impl Notification {
    /// Whether the notification is still visible at `now`.
    pub fn is_visible_at(&self, now: Timestamp) -> bool {
        now < self.expires_at
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "> {}", self.message)
    }
}

/// Single-slot notification surface. Showing a message replaces whatever was
/// there before; there is no queue.
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    ttl: SignedDuration,
    current: Option<Notification>,
    issued: u64,
}

impl NotificationChannel {
    /// Create a channel whose messages live for `ttl`.
    pub fn new(ttl: SignedDuration) -> Self {
        Self {
            ttl,
            current: None,
            issued: 0,
        }
    }

    /// Replace the current message and restart its lifetime from `now`.
    pub fn show(&mut self, message: impl Into<String>, now: Timestamp) -> &Notification {
        self.issued += 1;
        let expires_at = now.checked_add(self.ttl).unwrap_or(Timestamp::MAX);
        let notification = Notification {
            message: message.into(),
            expires_at,
            sequence: self.issued,
        };
        log::debug!("notification #{}: {}", notification.sequence, notification.message);
        self.current.insert(notification)
    }

    /// The visible notification at `now`, if any.
    pub fn current(&self, now: Timestamp) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.is_visible_at(now))
    }

    /// The most recently shown notification regardless of expiry.
    pub fn latest(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Hide the current notification immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Total number of notifications shown so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> Timestamp {
        Timestamp::from_second(1_717_200_000 + seconds).unwrap()
    }

    #[test]
    fn test_visible_until_expiry() {
        let mut channel = NotificationChannel::default();
        channel.show("Workout name set to: Legs", at(0));

        assert!(channel.current(at(0)).is_some());
        assert!(channel.current(at(2)).is_some());
        assert!(channel.current(at(3)).is_none());
        assert_eq!(channel.latest().unwrap().message, "Workout name set to: Legs");
    }

    #[test]
    fn test_show_replaces_and_resets_timer() {
        let mut channel = NotificationChannel::default();
        channel.show("first", at(0));
        channel.show("second", at(2));

        let visible = channel.current(at(4)).unwrap();
        assert_eq!(visible.message, "second");
        assert_eq!(visible.sequence, 2);
        assert_eq!(channel.issued(), 2);
        assert!(channel.current(at(5)).is_none());
    }

    #[test]
    fn test_dismiss_hides_immediately() {
        let mut channel = NotificationChannel::default();
        channel.show("hello", at(0));
        channel.dismiss();
        assert!(channel.current(at(0)).is_none());
        assert_eq!(channel.issued(), 1);
    }

    #[test]
    fn test_custom_ttl() {
        let mut channel = NotificationChannel::new(SignedDuration::from_secs(10));
        channel.show("long lived", at(0));
        assert!(channel.current(at(9)).is_some());
        assert!(channel.current(at(10)).is_none());
    }

    #[test]
    fn test_display_prefix() {
        let mut channel = NotificationChannel::default();
        let shown = channel.show("Finding your schedule...", at(0));
        assert_eq!(shown.to_string(), "> Finding your schedule...");
    }
}
