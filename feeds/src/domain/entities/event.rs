//! Event domain entity
//!
//! An incident or a scheduled maintenance shown in the status page history.
//! Both come out of their stores in the same shape and differ only by kind.

use chrono::{DateTime, Utc};

/// Identifier of an incident or maintenance as assigned by the status page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(pub String);

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminator between the two event streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Incident,
    Maintenance,
    /// Anything else, kept as the raw tag so rendering can report it
    Unknown(String),
}

impl EventKind {
    /// Name used inside feed entry identifiers (`Incident`, `Maintenance`)
    pub fn tag(&self) -> &str {
        match self {
            EventKind::Incident => "Incident",
            EventKind::Maintenance => "Maintenance",
            EventKind::Unknown(tag) => tag,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Incident => write!(f, "incident"),
            EventKind::Maintenance => write!(f, "maintenance"),
            EventKind::Unknown(tag) if tag.is_empty() => write!(f, "<none>"),
            EventKind::Unknown(tag) => write!(f, "{}", tag),
        }
    }
}

/// An incident or maintenance, without its updates
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    /// Display name, used as the feed entry title
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Mirrors the stored record; not rendered
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}
