use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A fully rendered message handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Delivery failure raised by a transport implementation.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
    #[error("mail relay rejected message: {0}")]
    Rejected(String),
}

/// Outbound mail contract. The RSVP service depends only on this trait;
/// concrete providers live in the API crate, tests inject in-memory fakes.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, message: &OutboundEmail) -> Result<(), MailError>;
}
