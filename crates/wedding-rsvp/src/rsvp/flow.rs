//! Client-side RSVP flow, modeled as an explicit state value with guarded
//! transitions instead of the ambient globals a browser script would use.
//! Exactly one panel is visible at a time, and the attendance selection
//! survives back-navigation.

use std::time::Duration;

use super::domain::{Attendance, RsvpRequest, RsvpResponse};

/// Terminal panels reset to [`FlowPanel::Initial`] after this delay.
pub const AUTO_RESET_DELAY: Duration = Duration::from_secs(8);

/// Failure toasts dismiss themselves after this delay; they never change the
/// flow panel.
pub const TOAST_DISMISS_DELAY: Duration = Duration::from_secs(5);

/// The visible section of the RSVP interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowPanel {
    #[default]
    Initial,
    AttendanceType,
    Form,
    Success,
    NotListed,
    Decline,
}

impl FlowPanel {
    pub const fn label(self) -> &'static str {
        match self {
            FlowPanel::Initial => "initial",
            FlowPanel::AttendanceType => "attendance-type",
            FlowPanel::Form => "form",
            FlowPanel::Success => "success",
            FlowPanel::NotListed => "not-listed",
            FlowPanel::Decline => "decline",
        }
    }

    /// Success, NotListed, and Decline end the interaction until the
    /// auto-reset fires.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            FlowPanel::Success | FlowPanel::NotListed | FlowPanel::Decline
        )
    }
}

/// Rejected flow operation; the panel is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("transition not allowed from the '{0}' panel")]
    InvalidTransition(&'static str),
    #[error("form is incomplete: missing {0}")]
    IncompleteForm(&'static str),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

/// The whole client-side state: current panel, stored attendance selection,
/// form fields, and the submit lock.
#[derive(Debug, Clone, Default)]
pub struct RsvpFlow {
    panel: FlowPanel,
    attendance: Option<Attendance>,
    name: String,
    email: String,
    submitting: bool,
}

impl RsvpFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> FlowPanel {
        self.panel
    }

    pub fn attendance(&self) -> Option<Attendance> {
        self.attendance
    }

    pub fn is_submit_locked(&self) -> bool {
        self.submitting
    }

    pub fn enter_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn enter_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Initial → AttendanceType on the "attending" choice.
    pub fn choose_attending(&mut self) -> Result<(), FlowError> {
        self.expect_panel(FlowPanel::Initial)?;
        self.panel = FlowPanel::AttendanceType;
        Ok(())
    }

    /// Initial → Decline on the "not attending" choice.
    pub fn choose_decline(&mut self) -> Result<(), FlowError> {
        self.expect_panel(FlowPanel::Initial)?;
        self.panel = FlowPanel::Decline;
        Ok(())
    }

    /// AttendanceType → Form, storing the selection.
    pub fn select_attendance(&mut self, attendance: Attendance) -> Result<(), FlowError> {
        self.expect_panel(FlowPanel::AttendanceType)?;
        self.attendance = Some(attendance);
        self.panel = FlowPanel::Form;
        Ok(())
    }

    /// Form → AttendanceType. The stored selection persists so the guest can
    /// come straight back.
    pub fn back_to_attendance(&mut self) -> Result<(), FlowError> {
        self.expect_panel(FlowPanel::Form)?;
        self.panel = FlowPanel::AttendanceType;
        Ok(())
    }

    /// Guard the submission. An incomplete form (empty name, email, or
    /// attendance) issues no request at all, and only one submission may be
    /// in flight. On success the submit control locks and the wire payload
    /// is returned.
    pub fn begin_submission(&mut self) -> Result<RsvpRequest, FlowError> {
        self.expect_panel(FlowPanel::Form)?;
        if self.submitting {
            return Err(FlowError::SubmissionInFlight);
        }
        if self.name.trim().is_empty() {
            return Err(FlowError::IncompleteForm("name"));
        }
        if self.email.trim().is_empty() {
            return Err(FlowError::IncompleteForm("email"));
        }
        let attendance = self.attendance.ok_or(FlowError::IncompleteForm("attendance"))?;

        self.submitting = true;
        Ok(RsvpRequest::new(
            self.name.trim(),
            self.email.trim(),
            attendance,
        ))
    }

    /// Apply a successful server response: Form → Success when the guest is
    /// on the list, Form → NotListed otherwise.
    pub fn submission_succeeded(&mut self, response: &RsvpResponse) -> Result<(), FlowError> {
        self.expect_panel(FlowPanel::Form)?;
        self.submitting = false;
        self.panel = if response.on_list {
            FlowPanel::Success
        } else {
            FlowPanel::NotListed
        };
        Ok(())
    }

    /// A network or server failure: unlock the submit control and stay on
    /// the form so the guest can retry. The caller surfaces a transient
    /// toast ([`TOAST_DISMISS_DELAY`]).
    pub fn submission_failed(&mut self) {
        self.submitting = false;
    }

    /// Return to the Initial panel, clearing the form fields, the attendance
    /// selection, and the submit lock. Terminal panels schedule this after
    /// [`AUTO_RESET_DELAY`].
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn expect_panel(&self, expected: FlowPanel) -> Result<(), FlowError> {
        if self.panel == expected {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition(self.panel.label()))
        }
    }
}
