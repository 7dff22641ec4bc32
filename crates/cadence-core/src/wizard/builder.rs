//! Builder for creating and configuring Wizard instances.

use jiff::SignedDuration;

use super::{Wizard, WizardOptions};
use crate::{
    config::Config,
    notification::{NotificationChannel, DEFAULT_TTL},
    slots::{default_grid, SlotMode},
};

/// Builder for creating and configuring Wizard instances.
#[derive(Debug, Clone)]
pub struct WizardBuilder {
    collect_preferred_count: bool,
    slot_mode: SlotMode,
    grid_labels: Vec<String>,
    notification_ttl: SignedDuration,
}

impl WizardBuilder {
    /// Creates a new builder with default settings: no preferred-count step,
    /// free-text time slots, three second notifications.
    pub fn new() -> Self {
        Self {
            collect_preferred_count: false,
            slot_mode: SlotMode::FreeText,
            grid_labels: default_grid(),
            notification_ttl: DEFAULT_TTL,
        }
    }

    /// Creates a builder carrying the wizard-related settings of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            collect_preferred_count: config.collect_preferred_count,
            slot_mode: config.slot_mode,
            grid_labels: config.grid_labels.clone(),
            notification_ttl: config.notification_ttl,
        }
    }

    /// Enables or disables the preferred-count step.
    pub fn with_preferred_count(mut self, enabled: bool) -> Self {
        self.collect_preferred_count = enabled;
        self
    }

    /// Sets the time slot input variant.
    pub fn with_slot_mode(mut self, mode: SlotMode) -> Self {
        self.slot_mode = mode;
        self
    }

    /// Sets the labels offered in grid mode.
    pub fn with_grid_labels(mut self, labels: Vec<String>) -> Self {
        if !labels.is_empty() {
            self.grid_labels = labels;
        }
        self
    }

    /// Sets how long notifications stay visible.
    pub fn with_notification_ttl(mut self, ttl: SignedDuration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Builds a wizard positioned at the name step.
    pub fn build(self) -> Wizard {
        Wizard::new(
            WizardOptions {
                collect_preferred_count: self.collect_preferred_count,
                slot_mode: self.slot_mode,
                grid_labels: self.grid_labels,
            },
            NotificationChannel::new(self.notification_ttl),
        )
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
