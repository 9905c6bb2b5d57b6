use crate::rsvp::domain::EventDetails;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub mail: MailConfig,
    pub roster: RosterConfig,
    pub event: EventDetails,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mail = MailConfig::from_env();
        let roster = RosterConfig::from_env();
        let event = load_event_details()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            mail,
            roster,
            event,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Outbound mail settings: the envelope sender, the operator who receives
/// RSVP notifications, and the optional HTTP relay the messages go through.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub from_name: String,
    pub from_address: String,
    pub operator_address: String,
    pub relay_url: Option<String>,
    pub relay_token: Option<String>,
}

impl MailConfig {
    fn from_env() -> Self {
        Self {
            from_name: env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Jet & Jev Wedding".to_string()),
            from_address: env::var("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "rsvp@jetandjev.example".to_string()),
            operator_address: env::var("MAIL_OPERATOR_ADDRESS")
                .unwrap_or_else(|_| "hosts@jetandjev.example".to_string()),
            relay_url: env::var("MAIL_RELAY_URL").ok(),
            relay_token: env::var("MAIL_RELAY_TOKEN").ok(),
        }
    }

    /// RFC 5322 style `"Display Name" <address>` sender header.
    pub fn sender_header(&self) -> String {
        format!("\"{}\" <{}>", self.from_name, self.from_address)
    }
}

/// Location of the static guest roster consumed at startup.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub path: PathBuf,
}

impl RosterConfig {
    fn from_env() -> Self {
        let path = env::var("ROSTER_PATH").unwrap_or_else(|_| "data/guests.json".to_string());
        Self {
            path: PathBuf::from(path),
        }
    }
}

fn load_event_details() -> Result<EventDetails, ConfigError> {
    let mut event = EventDetails::default();

    if let Ok(couple) = env::var("EVENT_COUPLE") {
        event.couple = couple;
    }
    if let Ok(raw) = env::var("EVENT_DATE") {
        event.date = chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|source| ConfigError::InvalidEventDate { value: raw, source })?;
    }
    if let Ok(venue) = env::var("EVENT_VENUE") {
        event.venue = venue;
    }
    if let Ok(address) = env::var("EVENT_VENUE_ADDRESS") {
        event.venue_address = address;
    }
    if let Ok(time) = env::var("EVENT_CEREMONY_TIME") {
        event.ceremony_time = time;
    }

    Ok(event)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidEventDate { value: String, source: chrono::ParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidEventDate { value, .. } => {
                write!(f, "EVENT_DATE '{value}' must be a YYYY-MM-DD date")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidEventDate { source, .. } => Some(source),
        }
    }
}
