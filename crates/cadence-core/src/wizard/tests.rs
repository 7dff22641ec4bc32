//! Tests for the wizard module.

use jiff::civil::date;

use super::*;
use crate::{
    error::SchedulerError,
    slots::default_grid,
    wizard::{
        submission::{FINDING_SCHEDULE, SCHEDULE_SENT, SEND_FAILED},
        transitions::{EMPTY_NAME, MISSING_COUNT, NO_DATES},
    },
};

/// Helper function to create a wizard already past the name step
fn named_wizard(builder: WizardBuilder) -> Wizard {
    let mut wizard = builder.build();
    wizard.submit_name("Leg day").expect("Failed to submit name");
    wizard
}

/// Helper function to drive a default wizard up to the confirmation step
fn confirmed_wizard() -> Wizard {
    let mut wizard = named_wizard(WizardBuilder::new());
    wizard
        .submit_dates(vec![date(2024, 6, 3), date(2024, 6, 1)])
        .expect("Failed to submit dates");
    wizard
        .confirm_times(vec!["09:00".to_string()])
        .expect("Failed to confirm day 1");
    wizard
        .confirm_times(vec!["18:00".to_string(), "07:00".to_string()])
        .expect("Failed to confirm day 2");
    wizard
}

fn latest_message(wizard: &Wizard) -> &str {
    &wizard
        .notifications()
        .latest()
        .expect("Expected a notification")
        .message
}

#[test]
fn test_blank_names_never_advance() {
    for name in ["", "   ", "\t\n"] {
        let mut wizard = WizardBuilder::new().build();
        let err = wizard.submit_name(name).unwrap_err();

        assert!(matches!(err, SchedulerError::InvalidInput { .. }));
        assert_eq!(wizard.step(), WizardStep::NameEntry);
        assert_eq!(wizard.notifications().issued(), 1);
        assert_eq!(latest_message(&wizard), EMPTY_NAME);
    }
}

#[test]
fn test_name_is_trimmed_and_announced() {
    let mut wizard = WizardBuilder::new().build();
    let next = wizard.submit_name("  Leg day ").unwrap();

    assert_eq!(next, WizardStep::DateSelection);
    assert_eq!(wizard.state().workout_name, "Leg day");
    assert_eq!(latest_message(&wizard), "Workout name set to: Leg day");
}

#[test]
fn test_preferred_count_step_when_enabled() {
    let mut wizard = named_wizard(WizardBuilder::new().with_preferred_count(true));
    assert_eq!(wizard.step(), WizardStep::PreferredCountEntry);

    assert!(wizard.submit_preferred_count(None).is_err());
    assert!(wizard.submit_preferred_count(Some(0)).is_err());
    assert_eq!(wizard.step(), WizardStep::PreferredCountEntry);
    assert_eq!(latest_message(&wizard), MISSING_COUNT);

    let next = wizard.submit_preferred_count(Some(4)).unwrap();
    assert_eq!(next, WizardStep::DateSelection);
    assert_eq!(wizard.state().preferred_count, Some(4));
}

#[test]
fn test_dates_are_sorted_and_slots_initialized() {
    let mut wizard = named_wizard(WizardBuilder::new());
    wizard
        .submit_dates(vec![
            date(2024, 6, 9),
            date(2024, 6, 1),
            date(2024, 6, 9),
            date(2024, 6, 4),
        ])
        .unwrap();

    assert_eq!(
        wizard.state().selected_dates,
        vec![date(2024, 6, 1), date(2024, 6, 4), date(2024, 6, 9)]
    );
    assert_eq!(wizard.state().per_date_times, vec![Vec::<String>::new(); 3]);
    assert_eq!(wizard.step(), WizardStep::TimeSelection { day: 0 });
    assert_eq!(wizard.current_date(), Some(date(2024, 6, 1)));
    assert!(latest_message(&wizard).starts_with("You selected the following dates:"));
}

#[test]
fn test_empty_date_set_is_rejected() {
    let mut wizard = named_wizard(WizardBuilder::new());
    let before = wizard.notifications().issued();

    assert!(wizard.submit_dates(Vec::new()).is_err());
    assert_eq!(wizard.step(), WizardStep::DateSelection);
    assert_eq!(wizard.notifications().issued(), before + 1);
    assert_eq!(latest_message(&wizard), NO_DATES);
}

#[test]
fn test_typed_dates_report_parse_errors_as_notifications() {
    let mut wizard = named_wizard(WizardBuilder::new());
    let before = wizard.notifications().issued();

    let err = wizard.submit_date_text("2024-06-01, someday").unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidInput { .. }));
    assert_eq!(wizard.step(), WizardStep::DateSelection);
    assert_eq!(wizard.notifications().issued(), before + 1);
    assert!(latest_message(&wizard).contains("'someday' is not a valid date"));

    assert!(wizard.submit_date_text("  ").is_err());
    assert_eq!(latest_message(&wizard), NO_DATES);

    let next = wizard.submit_date_text("2024-06-03 2024-06-01").unwrap();
    assert_eq!(next, WizardStep::TimeSelection { day: 0 });
    assert_eq!(
        wizard.state().selected_dates,
        vec![date(2024, 6, 1), date(2024, 6, 3)]
    );
}

#[test]
fn test_typed_dates_outside_date_step_fail_closed() {
    let mut wizard = WizardBuilder::new().build();
    let err = wizard.submit_date_text("nonsense").unwrap_err();

    assert!(matches!(err, SchedulerError::InvalidTransition { .. }));
    assert_eq!(wizard.notifications().issued(), 0);
}

#[test]
fn test_times_are_assembled_in_date_order() {
    let wizard = confirmed_wizard();

    assert_eq!(wizard.step(), WizardStep::Confirmation);
    assert_eq!(
        wizard.state().per_date_times,
        vec![
            vec!["09:00".to_string()],
            vec!["18:00".to_string(), "07:00".to_string()],
        ]
    );

    let request = wizard.request().unwrap();
    assert_eq!(request.times.len(), request.days.len());
    assert_eq!(request.days, vec![date(2024, 6, 1), date(2024, 6, 3)]);
    assert_eq!(request.n, None);
}

#[test]
fn test_interactive_free_text_slots() {
    let mut wizard = named_wizard(WizardBuilder::new());
    wizard.submit_dates(vec![date(2024, 6, 1)]).unwrap();

    let index = wizard.add_time_slot().unwrap();
    wizard.set_time_slot(index, "06:30").unwrap();
    wizard.push_time_slot("12:00").unwrap();
    assert!(wizard.push_time_slot("06:30").is_err());
    assert_eq!(latest_message(&wizard), crate::slots::DUPLICATE_SLOT);
    assert_eq!(wizard.remove_time_slot(0).unwrap(), "06:30");

    assert_eq!(wizard.confirm_time_slots().unwrap(), WizardStep::Confirmation);
    assert_eq!(wizard.state().per_date_times, vec![vec!["12:00".to_string()]]);
    assert!(wizard.collector().is_none());
}

#[test]
fn test_free_text_accepts_empty_day() {
    let mut wizard = named_wizard(WizardBuilder::new());
    wizard.submit_dates(vec![date(2024, 6, 1), date(2024, 6, 2)]).unwrap();

    wizard.add_time_slot().unwrap();
    assert_eq!(
        wizard.confirm_time_slots().unwrap(),
        WizardStep::TimeSelection { day: 1 }
    );
    assert!(wizard.state().per_date_times[0].is_empty());
}

#[test]
fn test_grid_rejects_empty_day() {
    let mut wizard = named_wizard(WizardBuilder::new().with_slot_mode(SlotMode::Grid));
    wizard.submit_dates(vec![date(2024, 6, 1)]).unwrap();
    let before = wizard.notifications().issued();

    assert!(wizard.confirm_time_slots().is_err());
    assert!(wizard.confirm_times(Vec::new()).is_err());
    assert_eq!(wizard.step(), WizardStep::TimeSelection { day: 0 });
    assert_eq!(wizard.notifications().issued(), before + 2);

    assert!(wizard.toggle_time_slot("18:00").unwrap());
    assert_eq!(wizard.confirm_time_slots().unwrap(), WizardStep::Confirmation);
}

#[test]
fn test_grid_confirm_times_rules() {
    let mut wizard = named_wizard(
        WizardBuilder::new()
            .with_slot_mode(SlotMode::Grid)
            .with_grid_labels(default_grid()),
    );
    wizard.submit_dates(vec![date(2024, 6, 1)]).unwrap();

    assert!(wizard.confirm_times(vec!["02:00".to_string()]).is_err());
    assert!(wizard
        .confirm_times(vec!["09:00".to_string(), "09:00".to_string()])
        .is_err());
    wizard
        .confirm_times(vec!["20:00".to_string(), "08:00".to_string()])
        .unwrap();
    assert_eq!(
        wizard.state().per_date_times,
        vec![vec!["08:00".to_string(), "20:00".to_string()]]
    );
}

#[test]
fn test_out_of_order_operations_fail_closed() {
    let mut wizard = WizardBuilder::new().build();

    let err = wizard.confirm_times(vec!["09:00".to_string()]).unwrap_err();
    assert!(matches!(
        err,
        SchedulerError::InvalidTransition {
            step: WizardStep::NameEntry,
            ..
        }
    ));
    assert!(wizard.submit_dates(vec![date(2024, 6, 1)]).is_err());
    assert!(wizard.submit_preferred_count(Some(2)).is_err());
    assert!(wizard.add_time_slot().is_err());
    assert!(wizard.begin_submission().is_err());
    assert!(wizard.request().is_err());

    assert_eq!(wizard.step(), WizardStep::NameEntry);
    assert_eq!(wizard.notifications().issued(), 0);
    assert_eq!(wizard.state(), &WizardState::default());
}

#[test]
fn test_no_backward_transitions() {
    let mut wizard = confirmed_wizard();
    assert!(wizard.submit_name("Again").is_err());
    assert!(wizard.submit_dates(vec![date(2024, 7, 1)]).is_err());
    assert_eq!(wizard.step(), WizardStep::Confirmation);
}

#[test]
fn test_preferred_count_capped_in_request() {
    let mut wizard = named_wizard(WizardBuilder::new().with_preferred_count(true));
    wizard.submit_preferred_count(Some(5)).unwrap();
    wizard
        .submit_dates(vec![date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)])
        .unwrap();
    for _ in 0..3 {
        wizard.confirm_times(vec!["10:00".to_string()]).unwrap();
    }

    assert_eq!(wizard.request().unwrap().n, Some(3));
}

#[test]
fn test_begin_submission_notifies_immediately() {
    let mut wizard = confirmed_wizard();
    let request = wizard.begin_submission().unwrap();

    assert_eq!(request.days.len(), 2);
    assert_eq!(wizard.step(), WizardStep::ResultDisplay);
    assert!(wizard.is_pending());
    assert_eq!(latest_message(&wizard), FINDING_SCHEDULE);

    // Only one submission per session
    assert!(wizard.begin_submission().is_err());
}

#[test]
fn test_failed_submission_records_single_failure() {
    let mut wizard = confirmed_wizard();
    wizard.begin_submission().unwrap();
    let before = wizard.notifications().issued();

    wizard
        .complete_submission(Err(SchedulerError::UnexpectedStatus { status: 503 }))
        .unwrap();

    assert_eq!(wizard.notifications().issued(), before + 1);
    assert_eq!(latest_message(&wizard), SEND_FAILED);
    assert_eq!(wizard.state().last_error.as_deref(), Some(SEND_FAILED));
    assert!(wizard.state().last_response.is_none());
    assert!(!wizard.is_pending());

    // The outcome is recorded once
    assert!(wizard
        .complete_submission(Err(SchedulerError::UnexpectedStatus { status: 503 }))
        .is_err());
}

#[test]
fn test_successful_submission_records_response() {
    let mut wizard = confirmed_wizard();
    wizard.begin_submission().unwrap();
    wizard
        .complete_submission(Ok(ScheduleResponse::Message("ok".to_string())))
        .unwrap();

    assert_eq!(latest_message(&wizard), SCHEDULE_SENT);
    assert_eq!(
        wizard.state().last_response,
        Some(ScheduleResponse::Message("ok".to_string()))
    );
    assert!(wizard.state().last_error.is_none());
}

#[test]
fn test_step_display() {
    assert_eq!(WizardStep::NameEntry.to_string(), "name entry");
    assert_eq!(
        WizardStep::TimeSelection { day: 2 }.to_string(),
        "time selection (day 3)"
    );
}
