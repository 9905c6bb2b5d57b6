use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::domain::{EventDetails, RsvpReceipt, RsvpRequest, ValidationError};
use super::mailer::{MailError, MailTransport, OutboundEmail};
use super::roster::GuestRoster;
use super::templates::{self, GuestConfirmation, OperatorNotice};
use crate::config::MailConfig;

/// Service composing the roster matcher, the mail templates, and the
/// transport. One instance serves every request; the roster is read-only.
pub struct RsvpService<M> {
    roster: Arc<GuestRoster>,
    transport: Arc<M>,
    sender: String,
    operator: String,
    event: EventDetails,
}

impl<M> RsvpService<M>
where
    M: MailTransport + 'static,
{
    pub fn new(
        roster: Arc<GuestRoster>,
        transport: Arc<M>,
        mail: &MailConfig,
        event: EventDetails,
    ) -> Self {
        Self {
            roster,
            transport,
            sender: mail.sender_header(),
            operator: mail.operator_address.clone(),
            event,
        }
    }

    pub fn event(&self) -> &EventDetails {
        &self.event
    }

    /// Handle one submission: validate, match against the roster, and send
    /// the notification pair for the branch taken. Sends run sequentially and
    /// the first failure aborts the rest; nothing is persisted, so a failed
    /// request simply reports the error. Resubmitting sends duplicate mail.
    pub async fn handle(&self, request: RsvpRequest) -> Result<RsvpReceipt, RsvpServiceError> {
        let submission = request.into_submission()?;

        match self.roster.find(&submission.name) {
            Some(guest) => {
                let guest = guest.clone();
                info!(
                    guest = %submission.name,
                    attendance = submission.attendance.label(),
                    table = ?guest.table,
                    "rsvp received from listed guest"
                );

                let notice = OperatorNotice {
                    guest_name: &submission.name,
                    email: &submission.email,
                    attendance: submission.attendance,
                    on_list: true,
                };
                self.send(
                    &self.operator,
                    templates::operator_subject(&notice),
                    templates::operator_html(&notice, &self.event),
                )
                .await?;

                let confirmation = GuestConfirmation {
                    guest_name: &submission.name,
                    attendance: submission.attendance,
                    table: guest.table,
                    category: guest.category.as_deref(),
                };
                self.send(
                    &submission.email,
                    templates::confirmation_subject(&self.event),
                    templates::confirmation_html(&confirmation, &self.event),
                )
                .await?;

                Ok(RsvpReceipt {
                    on_list: true,
                    table: guest.table,
                    category: guest.category,
                })
            }
            None => {
                warn!(guest = %submission.name, "rsvp received from guest not on the roster");

                self.send(
                    &submission.email,
                    templates::regrets_subject(&self.event),
                    templates::regrets_html(&submission.name, &self.event),
                )
                .await?;

                let notice = OperatorNotice {
                    guest_name: &submission.name,
                    email: &submission.email,
                    attendance: submission.attendance,
                    on_list: false,
                };
                self.send(
                    &self.operator,
                    templates::operator_subject(&notice),
                    templates::operator_html(&notice, &self.event),
                )
                .await?;

                Ok(RsvpReceipt {
                    on_list: false,
                    table: None,
                    category: None,
                })
            }
        }
    }

    async fn send(&self, to: &str, subject: String, html: String) -> Result<(), MailError> {
        let message = OutboundEmail {
            from: self.sender.clone(),
            to: to.to_string(),
            subject,
            html,
        };
        if let Err(err) = self.transport.deliver(&message).await {
            error!(to = %message.to, subject = %message.subject, error = %err, "mail delivery failed");
            return Err(err);
        }
        debug!(to = %message.to, subject = %message.subject, "mail delivered");
        Ok(())
    }
}

/// Error raised while handling a submission.
#[derive(Debug, thiserror::Error)]
pub enum RsvpServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Mail(#[from] MailError),
}
