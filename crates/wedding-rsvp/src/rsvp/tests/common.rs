use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::config::MailConfig;
use crate::rsvp::domain::{EventDetails, GuestRecord};
use crate::rsvp::mailer::{MailError, MailTransport, OutboundEmail};
use crate::rsvp::roster::GuestRoster;
use crate::rsvp::service::RsvpService;

pub(super) const OPERATOR: &str = "hosts@jetandjev.example";

pub(super) fn record(name: &str, table: Option<u32>, category: Option<&str>) -> GuestRecord {
    GuestRecord {
        name: name.to_string(),
        table,
        category: category.map(str::to_string),
    }
}

pub(super) fn sample_roster() -> GuestRoster {
    GuestRoster::new(vec![
        record("Maria Santos", Some(5), Some("Family")),
        record("Juan dela Cruz", Some(3), Some("College Friends")),
        record("Ramon Diaz", None, None),
    ])
}

pub(super) fn mail_config() -> MailConfig {
    MailConfig {
        from_name: "Jet & Jev Wedding".to_string(),
        from_address: "rsvp@jetandjev.example".to_string(),
        operator_address: OPERATOR.to_string(),
        relay_url: None,
        relay_token: None,
    }
}

pub(super) fn build_service<M>(transport: Arc<M>) -> RsvpService<M>
where
    M: MailTransport + 'static,
{
    RsvpService::new(
        Arc::new(sample_roster()),
        transport,
        &mail_config(),
        EventDetails::default(),
    )
}

/// Captures every delivered message so tests can assert on order, recipient,
/// and rendered content.
#[derive(Default)]
pub(super) struct RecordingTransport {
    messages: Mutex<Vec<OutboundEmail>>,
}

impl RecordingTransport {
    pub(super) fn messages(&self) -> Vec<OutboundEmail> {
        self.messages.lock().expect("mail mutex poisoned").clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn deliver(&self, message: &OutboundEmail) -> Result<(), MailError> {
        self.messages
            .lock()
            .expect("mail mutex poisoned")
            .push(message.clone());
        Ok(())
    }
}

/// Fails every delivery while counting attempts, so tests can prove the
/// second send is never tried after the first failure.
#[derive(Default)]
pub(super) struct FailingTransport {
    attempts: Mutex<usize>,
}

impl FailingTransport {
    pub(super) fn attempts(&self) -> usize {
        *self.attempts.lock().expect("attempt mutex poisoned")
    }
}

#[async_trait]
impl MailTransport for FailingTransport {
    async fn deliver(&self, _message: &OutboundEmail) -> Result<(), MailError> {
        *self.attempts.lock().expect("attempt mutex poisoned") += 1;
        Err(MailError::Transport("mail relay offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
