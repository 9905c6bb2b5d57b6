//! RSVP intake for a single wedding event.
//!
//! The roster matcher and the flow state machine are deliberately isolated:
//! the matcher's loose-containment semantics are surprising enough to deserve
//! their own unit tests away from HTTP and mail concerns, and the flow rules
//! mirror what the website's client enforces.

pub mod domain;
pub mod flow;
pub mod mailer;
pub mod roster;
pub mod router;
pub mod service;
pub mod templates;

#[cfg(test)]
mod tests;

pub use domain::{
    Attendance, EventDetails, GuestRecord, RsvpReceipt, RsvpRequest, RsvpResponse, RsvpSubmission,
    ValidationError,
};
pub use flow::{FlowError, FlowPanel, RsvpFlow, AUTO_RESET_DELAY, TOAST_DISMISS_DELAY};
pub use mailer::{MailError, MailTransport, OutboundEmail};
pub use roster::{normalize, GuestRoster, RosterError};
pub use router::rsvp_router;
pub use service::{RsvpService, RsvpServiceError};
