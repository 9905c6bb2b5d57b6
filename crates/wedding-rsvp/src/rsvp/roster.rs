//! Guest roster loading and the name matcher.

use std::fs;
use std::path::{Path, PathBuf};

use super::domain::GuestRecord;

/// Lowercase, collapse internal whitespace runs, trim. Every name comparison
/// runs both sides through this.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// The static guest list, loaded once at startup and read-only afterwards.
/// Name uniqueness is assumed, not enforced.
#[derive(Debug, Clone, Default)]
pub struct GuestRoster {
    guests: Vec<GuestRecord>,
}

impl GuestRoster {
    pub fn new(guests: Vec<GuestRecord>) -> Self {
        Self { guests }
    }

    /// Read the roster from a JSON array of guest records.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let raw = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let guests = serde_json::from_str(&raw).map_err(|source| RosterError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { guests })
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuestRecord> {
        self.guests.iter()
    }

    /// Look up a submitted name: an exact pass over normalized names, then a
    /// loose pass where either normalized string may contain the other. The
    /// first hit in roster order wins; there is no scoring and no typo
    /// tolerance. Known limitation: a short roster name ("Jo") is a substring
    /// of many submissions and will claim them in the loose pass.
    pub fn find(&self, submitted_name: &str) -> Option<&GuestRecord> {
        let needle = normalize(submitted_name);
        if needle.is_empty() {
            return None;
        }

        if let Some(guest) = self
            .guests
            .iter()
            .find(|guest| normalize(&guest.name) == needle)
        {
            return Some(guest);
        }

        self.guests.iter().find(|guest| {
            let known = normalize(&guest.name);
            needle.contains(&known) || known.contains(&needle)
        })
    }
}

/// Roster file failures surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("unable to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("roster file {path} is not a valid guest list: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
