//! Per-day time slot collection.
//!
//! A [`TimeSlotCollector`] gathers the time labels for a single date. It comes
//! in two flavours selected by [`SlotMode`]:
//!
//! - **Free text**: the user adds blank slots, fills them in, and removes them
//!   by position. Blank slots are dropped on confirmation, so a day can be
//!   confirmed with no times at all.
//! - **Fixed grid**: the user toggles labels from a fixed list. Confirming an
//!   empty selection is refused.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// Message used when a slot value is already present for the day.
pub const DUPLICATE_SLOT: &str = "This time slot is already added!";

/// Message used when a grid day is confirmed without any selection.
pub const EMPTY_SELECTION: &str = "Please select at least one time slot.";

/// Hourly labels from 06:00 to 21:00 used when no grid is configured.
pub fn default_grid() -> Vec<String> {
    (6..=21).map(|hour| format!("{hour:02}:00")).collect()
}

/// Which time slot input variant the wizard uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SlotMode {
    /// Free-form entries added, edited and removed by position
    #[default]
    FreeText,
    /// Toggle buttons over a fixed list of labels
    Grid,
}

impl SlotMode {
    /// Whether a day may be confirmed with no time labels.
    pub fn allows_empty_day(&self) -> bool {
        matches!(self, SlotMode::FreeText)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotMode::FreeText => "free-text",
            SlotMode::Grid => "grid",
        }
    }
}

impl FromStr for SlotMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free-text" | "free_text" | "freetext" | "text" => Ok(SlotMode::FreeText),
            "grid" => Ok(SlotMode::Grid),
            _ => Err(format!("Invalid slot mode: {s}")),
        }
    }
}

impl fmt::Display for SlotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collects the time labels for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSlotCollector {
    FreeText {
        slots: Vec<String>,
    },
    Grid {
        labels: Vec<String>,
        selected: Vec<bool>,
    },
}

impl TimeSlotCollector {
    /// Start an empty free-text collector.
    pub fn free_text() -> Self {
        TimeSlotCollector::FreeText { slots: Vec::new() }
    }

    /// Start a grid collector over `labels` with nothing selected. Repeated
    /// labels are collapsed to their first occurrence.
    pub fn grid(labels: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        let selected = vec![false; unique.len()];
        TimeSlotCollector::Grid {
            labels: unique,
            selected,
        }
    }

    /// Start a collector for `mode`, using `grid` as the label list in grid
    /// mode.
    pub fn for_mode(mode: SlotMode, grid: &[String]) -> Self {
        match mode {
            SlotMode::FreeText => Self::free_text(),
            SlotMode::Grid => Self::grid(grid.to_vec()),
        }
    }

    pub fn mode(&self) -> SlotMode {
        match self {
            TimeSlotCollector::FreeText { .. } => SlotMode::FreeText,
            TimeSlotCollector::Grid { .. } => SlotMode::Grid,
        }
    }

    /// Append a blank free-text slot.
    ///
    /// # Errors
    ///
    /// Fails if a blank slot is already waiting to be filled in, or if the
    /// collector is a grid.
    pub fn add_slot(&mut self) -> Result<usize> {
        let slots = self.free_text_slots("add a time slot")?;
        if slots.iter().any(String::is_empty) {
            return Err(duplicate());
        }
        slots.push(String::new());
        Ok(slots.len() - 1)
    }

    /// Set the value of the free-text slot at `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range, or if another slot already holds the
    /// same value.
    pub fn set_slot(&mut self, index: usize, value: &str) -> Result<()> {
        let value = value.trim();
        let slots = self.free_text_slots("edit a time slot")?;
        let Some(current) = slots.get(index) else {
            return Err(out_of_range(index, slots.len()));
        };
        if current != value && slots.iter().any(|s| s == value) {
            return Err(duplicate());
        }
        slots[index] = value.to_string();
        Ok(())
    }

    /// Add a slot and fill it in one go. Blank values are ignored.
    pub fn push_slot(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }
        let slots = self.free_text_slots("add a time slot")?;
        if slots.iter().any(|s| s == value) {
            return Err(duplicate());
        }
        slots.push(value.to_string());
        Ok(())
    }

    /// Remove the free-text slot at `index`, returning its value.
    pub fn remove_slot(&mut self, index: usize) -> Result<String> {
        let slots = self.free_text_slots("remove a time slot")?;
        if index >= slots.len() {
            return Err(out_of_range(index, slots.len()));
        }
        Ok(slots.remove(index))
    }

    /// Flip a grid label on or off, returning its new state.
    ///
    /// # Errors
    ///
    /// Fails if `label` is not part of the grid, or if the collector is in
    /// free-text mode.
    pub fn toggle(&mut self, label: &str) -> Result<bool> {
        let label = label.trim();
        match self {
            TimeSlotCollector::Grid { labels, selected } => {
                let position = labels.iter().position(|l| l == label).ok_or_else(|| {
                    SchedulerError::invalid_input("time_slot")
                        .with_reason(format!("'{label}' is not one of the available time slots."))
                })?;
                selected[position] = !selected[position];
                Ok(selected[position])
            }
            TimeSlotCollector::FreeText { .. } => Err(SchedulerError::invalid_input("time_slot")
                .with_reason("Time slots are typed in, not toggled, in free-text mode.")),
        }
    }

    /// The current entries: slots in insertion order for free text, selected
    /// labels in grid order for a grid.
    pub fn entries(&self) -> Vec<String> {
        match self {
            TimeSlotCollector::FreeText { slots } => slots.clone(),
            TimeSlotCollector::Grid { labels, selected } => labels
                .iter()
                .zip(selected)
                .filter(|(_, on)| **on)
                .map(|(label, _)| label.clone())
                .collect(),
        }
    }

    /// Produce the confirmed set for the day.
    ///
    /// # Errors
    ///
    /// A grid with nothing selected is rejected. Free text never fails: blank
    /// slots are dropped and the result may be empty.
    pub fn confirm(&self) -> Result<Vec<String>> {
        let confirmed: Vec<String> = self
            .entries()
            .into_iter()
            .filter(|slot| !slot.is_empty())
            .collect();
        if confirmed.is_empty() && !self.mode().allows_empty_day() {
            return Err(SchedulerError::invalid_input("time_slots").with_reason(EMPTY_SELECTION));
        }
        Ok(confirmed)
    }

    fn free_text_slots(&mut self, action: &str) -> Result<&mut Vec<String>> {
        match self {
            TimeSlotCollector::FreeText { slots } => Ok(slots),
            TimeSlotCollector::Grid { .. } => Err(SchedulerError::invalid_input("time_slot")
                .with_reason(format!("Cannot {action} in grid mode; toggle a label instead."))),
        }
    }
}

fn duplicate() -> SchedulerError {
    SchedulerError::invalid_input("time_slot").with_reason(DUPLICATE_SLOT)
}

fn out_of_range(index: usize, len: usize) -> SchedulerError {
    SchedulerError::invalid_input("time_slot")
        .with_reason(format!("There is no time slot #{} (have {len}).", index + 1))
}
