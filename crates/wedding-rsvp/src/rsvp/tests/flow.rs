use std::time::Duration;

use crate::rsvp::domain::{Attendance, RsvpResponse};
use crate::rsvp::flow::{
    FlowError, FlowPanel, RsvpFlow, AUTO_RESET_DELAY, TOAST_DISMISS_DELAY,
};

fn flow_on_form(attendance: Attendance) -> RsvpFlow {
    let mut flow = RsvpFlow::new();
    flow.choose_attending().expect("initial allows attending");
    flow.select_attendance(attendance)
        .expect("attendance type allows selection");
    flow
}

fn ok_response(on_list: bool) -> RsvpResponse {
    RsvpResponse {
        success: true,
        on_list,
        table: None,
        category: None,
    }
}

#[test]
fn starts_on_the_initial_panel() {
    let flow = RsvpFlow::new();
    assert_eq!(flow.panel(), FlowPanel::Initial);
    assert_eq!(flow.attendance(), None);
    assert!(!flow.is_submit_locked());
}

#[test]
fn attending_path_reaches_the_form_with_the_selection_stored() {
    let flow = flow_on_form(Attendance::InPerson);
    assert_eq!(flow.panel(), FlowPanel::Form);
    assert_eq!(flow.attendance(), Some(Attendance::InPerson));
}

#[test]
fn decline_is_a_terminal_panel() {
    let mut flow = RsvpFlow::new();
    flow.choose_decline().expect("initial allows decline");
    assert_eq!(flow.panel(), FlowPanel::Decline);
    assert!(flow.panel().is_terminal());
}

#[test]
fn back_navigation_preserves_the_attendance_selection() {
    let mut flow = flow_on_form(Attendance::Zoom);
    flow.back_to_attendance().expect("form allows back");
    assert_eq!(flow.panel(), FlowPanel::AttendanceType);
    assert_eq!(flow.attendance(), Some(Attendance::Zoom));

    flow.select_attendance(Attendance::InPerson)
        .expect("selection can change");
    assert_eq!(flow.attendance(), Some(Attendance::InPerson));
}

#[test]
fn incomplete_forms_issue_no_request() {
    let mut flow = flow_on_form(Attendance::InPerson);
    assert_eq!(
        flow.begin_submission(),
        Err(FlowError::IncompleteForm("name"))
    );

    flow.enter_name("Maria Santos");
    assert_eq!(
        flow.begin_submission(),
        Err(FlowError::IncompleteForm("email"))
    );
    assert!(!flow.is_submit_locked(), "rejected submissions do not lock");
}

#[test]
fn submission_locks_until_a_response_or_failure() {
    let mut flow = flow_on_form(Attendance::InPerson);
    flow.enter_name("  Maria Santos ");
    flow.enter_email(" maria@example.com ");

    let request = flow.begin_submission().expect("complete form submits");
    assert_eq!(request.name, "Maria Santos");
    assert_eq!(request.email, "maria@example.com");
    assert_eq!(request.attendance, Some(Attendance::InPerson));
    assert!(flow.is_submit_locked());

    assert_eq!(
        flow.begin_submission(),
        Err(FlowError::SubmissionInFlight)
    );

    flow.submission_failed();
    assert!(!flow.is_submit_locked());
    assert_eq!(flow.panel(), FlowPanel::Form, "failures keep the form open");
    flow.begin_submission().expect("retry is allowed");
}

#[test]
fn on_list_response_reaches_the_success_panel() {
    let mut flow = flow_on_form(Attendance::InPerson);
    flow.enter_name("Maria Santos");
    flow.enter_email("maria@example.com");
    flow.begin_submission().expect("complete form submits");

    flow.submission_succeeded(&ok_response(true))
        .expect("form accepts the response");
    assert_eq!(flow.panel(), FlowPanel::Success);
    assert!(flow.panel().is_terminal());
    assert!(!flow.is_submit_locked());
}

#[test]
fn off_list_response_reaches_the_not_listed_panel() {
    let mut flow = flow_on_form(Attendance::Zoom);
    flow.enter_name("Unknown Person");
    flow.enter_email("unknown@example.com");
    flow.begin_submission().expect("complete form submits");

    flow.submission_succeeded(&ok_response(false))
        .expect("form accepts the response");
    assert_eq!(flow.panel(), FlowPanel::NotListed);
}

#[test]
fn transitions_are_rejected_from_the_wrong_panel() {
    let mut flow = RsvpFlow::new();
    assert_eq!(
        flow.select_attendance(Attendance::Zoom),
        Err(FlowError::InvalidTransition("initial"))
    );
    assert_eq!(
        flow.back_to_attendance(),
        Err(FlowError::InvalidTransition("initial"))
    );

    flow.choose_attending().expect("initial allows attending");
    assert_eq!(
        flow.choose_decline(),
        Err(FlowError::InvalidTransition("attendance-type"))
    );
    assert_eq!(
        flow.submission_succeeded(&ok_response(true)),
        Err(FlowError::InvalidTransition("attendance-type"))
    );
}

#[test]
fn reset_clears_fields_selection_and_lock() {
    let mut flow = flow_on_form(Attendance::InPerson);
    flow.enter_name("Maria Santos");
    flow.enter_email("maria@example.com");
    flow.begin_submission().expect("complete form submits");
    flow.submission_succeeded(&ok_response(true))
        .expect("form accepts the response");

    flow.reset();
    assert_eq!(flow.panel(), FlowPanel::Initial);
    assert_eq!(flow.attendance(), None);
    assert!(!flow.is_submit_locked());

    // A fresh walk must fill the form again.
    flow.choose_attending().expect("initial allows attending");
    flow.select_attendance(Attendance::Zoom)
        .expect("attendance type allows selection");
    assert_eq!(
        flow.begin_submission(),
        Err(FlowError::IncompleteForm("name"))
    );
}

#[test]
fn ui_delay_constants_match_the_site_behavior() {
    assert_eq!(AUTO_RESET_DELAY, Duration::from_secs(8));
    assert_eq!(TOAST_DISMISS_DELAY, Duration::from_secs(5));
}
