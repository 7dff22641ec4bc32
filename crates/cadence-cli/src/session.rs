//! Interactive, line-oriented wizard session.
//!
//! Each loop iteration shows the prompt for the current step, reads one line
//! and turns it into exactly one wizard operation. The visible notification
//! is printed after every operation. `quit` at any prompt ends the session.

use std::io::BufRead;

use anyhow::Result;
use cadence_core::{
    display::{ConfirmedTimes, DayLabel, NotificationLine, ScheduleView},
    ScheduleClient, SlotMode, TimeSlotCollector, Wizard, WizardStep,
};
use log::debug;

use crate::renderer::TerminalRenderer;

const FREE_TEXT_HELP: &str =
    "Commands: `add [time]`, `set <n> <time>`, `remove <n>`, `list`, `done`";
const GRID_HELP: &str = "Type a time to toggle it, `list` to review, `done` to confirm";

pub struct Session<'a, R> {
    wizard: Wizard,
    renderer: &'a TerminalRenderer,
    input: R,
}

impl<'a, R: BufRead> Session<'a, R> {
    pub fn new(wizard: Wizard, renderer: &'a TerminalRenderer, input: R) -> Self {
        Self {
            wizard,
            renderer,
            input,
        }
    }

    /// Drive the wizard until a result is shown, the user quits, or input
    /// runs out.
    pub async fn run(&mut self, client: &ScheduleClient) -> Result<()> {
        self.renderer
            .render("# Workout Scheduler\n\nPlan your workouts effectively\n\n")?;

        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                debug!("input closed at step {}", self.wizard.step());
                return Ok(());
            };
            if line.eq_ignore_ascii_case("quit") {
                return Ok(());
            }

            if self.wizard.step() == WizardStep::Confirmation {
                if line.eq_ignore_ascii_case("find") {
                    return self.finish(client).await;
                }
                self.renderer
                    .render("Type `find` to find a schedule or `quit` to leave.\n")?;
                continue;
            }

            self.handle(&line)?;
            self.show_notification()?;
        }
    }

    fn prompt(&self) -> Result<()> {
        let text = match self.wizard.step() {
            WizardStep::NameEntry => "## Scheduler\n\nEnter your workout name:\n".to_string(),
            WizardStep::PreferredCountEntry => {
                "How many workouts would you like to schedule?\n".to_string()
            }
            WizardStep::DateSelection => {
                "Select dates (YYYY-MM-DD, separated by commas or spaces):\n".to_string()
            }
            WizardStep::TimeSelection { .. } => self.time_prompt(),
            WizardStep::Confirmation => format!(
                "{}\nType `find` to find a schedule.\n",
                ConfirmedTimes::from_state(self.wizard.state())
            ),
            WizardStep::ResultDisplay => ScheduleView::from_wizard(&self.wizard).to_string(),
        };
        self.renderer.render(&text)
    }

    fn time_prompt(&self) -> String {
        let day = self
            .wizard
            .current_date()
            .map(|date| DayLabel(date).to_string())
            .unwrap_or_default();
        match self.wizard.collector() {
            Some(TimeSlotCollector::Grid { labels, .. }) => format!(
                "Select time slots for {day}\nAvailable: {}\n{GRID_HELP}\n",
                labels.join(" ")
            ),
            _ => format!("Select time slots for {day}\n{FREE_TEXT_HELP}\n"),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Apply one line of input to the current step. Validation failures are
    /// already reported through the wizard's notification, so they are not
    /// propagated.
    fn handle(&mut self, line: &str) -> Result<()> {
        let outcome = match self.wizard.step() {
            WizardStep::NameEntry => self.wizard.submit_name(line).map(|_| ()),
            WizardStep::PreferredCountEntry => self
                .wizard
                .submit_preferred_count(line.parse().ok())
                .map(|_| ()),
            WizardStep::DateSelection => self.wizard.submit_date_text(line).map(|_| ()),
            WizardStep::TimeSelection { .. } => return self.handle_time_command(line),
            WizardStep::Confirmation | WizardStep::ResultDisplay => Ok(()),
        };
        if let Err(err) = outcome {
            debug!("rejected input: {err}");
        }
        Ok(())
    }

    fn handle_time_command(&mut self, line: &str) -> Result<()> {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let outcome = match (self.wizard.options().slot_mode, command) {
            (_, "done") => self.wizard.confirm_time_slots().map(|_| ()),
            (_, "list") => return self.list_slots(),
            (SlotMode::FreeText, "add") if rest.is_empty() => {
                self.wizard.add_time_slot().map(|_| ())
            }
            (SlotMode::FreeText, "add") => self.wizard.push_time_slot(rest),
            (SlotMode::FreeText, "set") => match rest.split_once(' ') {
                Some((n, value)) => match parse_position(n) {
                    Some(index) => self.wizard.set_time_slot(index, value),
                    None => return self.usage(),
                },
                None => return self.usage(),
            },
            (SlotMode::FreeText, "remove") => match parse_position(rest) {
                Some(index) => self.wizard.remove_time_slot(index).map(|_| ()),
                None => return self.usage(),
            },
            (SlotMode::FreeText, _) => return self.usage(),
            (SlotMode::Grid, _) => self.wizard.toggle_time_slot(line).map(|_| ()),
        };
        if let Err(err) = outcome {
            debug!("rejected time slot command: {err}");
        }
        Ok(())
    }

    fn list_slots(&self) -> Result<()> {
        let entries = self
            .wizard
            .collector()
            .map(TimeSlotCollector::entries)
            .unwrap_or_default();
        if entries.is_empty() {
            return self.renderer.render("No time slots yet.\n");
        }
        let mut text = String::new();
        for (position, entry) in entries.iter().enumerate() {
            let shown = if entry.is_empty() { "(blank)" } else { entry.as_str() };
            text.push_str(&format!("{}. {shown}\n", position + 1));
        }
        self.renderer.render(&text)
    }

    fn usage(&self) -> Result<()> {
        self.renderer.render(&format!("{FREE_TEXT_HELP}\n"))
    }

    fn show_notification(&self) -> Result<()> {
        self.renderer
            .render(&NotificationLine(self.wizard.notification()).to_string())
    }

    async fn finish(&mut self, client: &ScheduleClient) -> Result<()> {
        let request = self.wizard.begin_submission()?;
        self.show_notification()?;
        let outcome = client.submit(&request).await;
        self.wizard.complete_submission(outcome)?;
        self.show_notification()?;
        self.prompt()
    }
}

/// Convert a 1-based position typed by the user into an index.
fn parse_position(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1"), Some(0));
        assert_eq!(parse_position(" 3 "), Some(2));
        assert_eq!(parse_position("0"), None);
        assert_eq!(parse_position("two"), None);
    }
}
