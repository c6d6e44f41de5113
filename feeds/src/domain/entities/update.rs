//! Update domain entities
//!
//! Status changes posted on an incident or maintenance. The two stores keep
//! their own status vocabularies; rendering works on the normalized [`Update`].

use chrono::{DateTime, Utc};

use super::event::EventId;

/// Incident status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentStatus {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentStatus::Investigating => write!(f, "investigating"),
            IncidentStatus::Identified => write!(f, "identified"),
            IncidentStatus::Monitoring => write!(f, "monitoring"),
            IncidentStatus::Resolved => write!(f, "resolved"),
        }
    }
}

impl std::str::FromStr for IncidentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "investigating" => Ok(IncidentStatus::Investigating),
            "identified" => Ok(IncidentStatus::Identified),
            "monitoring" => Ok(IncidentStatus::Monitoring),
            "resolved" => Ok(IncidentStatus::Resolved),
            _ => Err(format!("Unknown incident status: {}", s)),
        }
    }
}

/// Maintenance status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Verifying,
    Completed,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaintenanceStatus::Scheduled => write!(f, "scheduled"),
            MaintenanceStatus::InProgress => write!(f, "inprogress"),
            MaintenanceStatus::Verifying => write!(f, "verifying"),
            MaintenanceStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for MaintenanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(MaintenanceStatus::Scheduled),
            "inprogress" | "in_progress" => Ok(MaintenanceStatus::InProgress),
            "verifying" => Ok(MaintenanceStatus::Verifying),
            "completed" => Ok(MaintenanceStatus::Completed),
            _ => Err(format!("Unknown maintenance status: {}", s)),
        }
    }
}

/// An update posted on an incident
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentUpdate {
    pub id: String,
    /// Owning incident, as stored
    #[allow(dead_code)]
    pub incident_id: EventId,
    pub incident_status: IncidentStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// An update posted on a maintenance
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceUpdate {
    pub id: String,
    /// Owning maintenance, as stored
    #[allow(dead_code)]
    pub maintenance_id: EventId,
    pub maintenance_status: MaintenanceStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// An update with its status label normalized to a string
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Mirrors the stored record; not rendered
    #[allow(dead_code)]
    pub id: String,
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<IncidentUpdate> for Update {
    fn from(update: IncidentUpdate) -> Self {
        Self {
            id: update.id,
            status: update.incident_status.to_string(),
            message: update.message,
            created_at: update.created_at,
        }
    }
}

impl From<MaintenanceUpdate> for Update {
    fn from(update: MaintenanceUpdate) -> Self {
        Self {
            id: update.id,
            status: update.maintenance_status.to_string(),
            message: update.message,
            created_at: update.created_at,
        }
    }
}
