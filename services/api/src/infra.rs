use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;
use wedding_rsvp::rsvp::{MailError, MailTransport, OutboundEmail};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Delivers through an HTTP mail relay: the message goes out as JSON, an
/// optional bearer token authenticates the call, and any non-2xx status is a
/// rejection.
pub(crate) struct RelayMailTransport {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl RelayMailTransport {
    pub(crate) fn new(endpoint: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl MailTransport for RelayMailTransport {
    async fn deliver(&self, message: &OutboundEmail) -> Result<(), MailError> {
        let mut request = self.client.post(&self.endpoint).json(message);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| MailError::Transport(err.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(MailError::Rejected(format!(
                "relay returned {}",
                response.status()
            )))
        }
    }
}

/// Fallback transport when no relay is configured: log the send and succeed
/// so local runs exercise the full flow without real delivery.
pub(crate) struct LoggingMailTransport;

#[async_trait]
impl MailTransport for LoggingMailTransport {
    async fn deliver(&self, message: &OutboundEmail) -> Result<(), MailError> {
        info!(
            to = %message.to,
            subject = %message.subject,
            "mail relay not configured; logging outbound email instead of sending"
        );
        Ok(())
    }
}

/// In-memory capture used by the CLI demo.
#[derive(Default, Clone)]
pub(crate) struct RecordingMailTransport {
    messages: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl RecordingMailTransport {
    pub(crate) fn messages(&self) -> Vec<OutboundEmail> {
        self.messages.lock().expect("mail mutex poisoned").clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailTransport {
    async fn deliver(&self, message: &OutboundEmail) -> Result<(), MailError> {
        self.messages
            .lock()
            .expect("mail mutex poisoned")
            .push(message.clone());
        Ok(())
    }
}
