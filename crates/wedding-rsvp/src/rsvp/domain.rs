use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a guest plans to attend the ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attendance {
    InPerson,
    Zoom,
}

impl Attendance {
    /// Wire value, matching the JSON enum.
    pub const fn label(self) -> &'static str {
        match self {
            Attendance::InPerson => "in-person",
            Attendance::Zoom => "zoom",
        }
    }

    /// Human-facing badge text used in notification subjects and bodies.
    pub const fn display_label(self) -> &'static str {
        match self {
            Attendance::InPerson => "In-Person",
            Attendance::Zoom => "Via Zoom",
        }
    }
}

/// One entry of the static guest roster. `table` and `category` are seating
/// metadata echoed back to confirmed guests; either may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub name: String,
    #[serde(default)]
    pub table: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Raw `POST /api/rsvp` payload before validation. Fields default so a
/// missing key and an empty string are rejected the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub attendance: Option<Attendance>,
}

impl RsvpRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, attendance: Attendance) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            attendance: Some(attendance),
        }
    }

    /// Validate the request into a submission. Whitespace-only text fields
    /// count as missing.
    pub fn into_submission(self) -> Result<RsvpSubmission, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        let email = self.email.trim().to_string();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        let attendance = self
            .attendance
            .ok_or(ValidationError::MissingField("attendance"))?;

        Ok(RsvpSubmission {
            name,
            email,
            attendance,
        })
    }
}

/// A validated submission. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpSubmission {
    pub name: String,
    pub email: String,
    pub attendance: Attendance,
}

/// Rejected request input; the caller retries with complete fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Outcome of a handled submission, before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpReceipt {
    pub on_list: bool,
    pub table: Option<u32>,
    pub category: Option<String>,
}

/// Wire shape of a successful `/api/rsvp` response. Seating fields are
/// omitted entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpResponse {
    pub success: bool,
    pub on_list: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<RsvpReceipt> for RsvpResponse {
    fn from(receipt: RsvpReceipt) -> Self {
        Self {
            success: true,
            on_list: receipt.on_list,
            table: receipt.table,
            category: receipt.category,
        }
    }
}

/// The one event this service exists for. Feeds email copy and CLI output;
/// overridable through the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub couple: String,
    pub date: NaiveDate,
    pub venue: String,
    pub venue_address: String,
    pub ceremony_time: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            couple: "Jet & Jev".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 6, 29).expect("valid wedding date"),
            venue: "Maple Grove Manor, Manila".to_string(),
            venue_address: "Maple Grove Manor, 123 Garden Boulevard, Manila".to_string(),
            ceremony_time: "2:30 PM".to_string(),
        }
    }
}

impl EventDetails {
    /// Short date line, e.g. "June 29, 2026".
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// Date line with weekday, e.g. "Monday, June 29, 2026".
    pub fn long_date_label(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }

    /// Whole days from `today` to the event; negative once it has passed.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }
}
