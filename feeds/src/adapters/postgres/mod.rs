//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM.

mod incident_repo;
mod maintenance_repo;
mod settings_repo;


use chrono::{DateTime, Utc};

use crate::error::DomainError;

pub use incident_repo::{PostgresIncidentRepository, PostgresIncidentUpdateRepository};
pub use maintenance_repo::{PostgresMaintenanceRepository, PostgresMaintenanceUpdateRepository};
pub use settings_repo::PostgresSettingsRepository;

/// Parse a stored ISO 8601 timestamp, naming the offending record on failure
fn parse_timestamp(record: &str, id: &str, value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            DomainError::Malformed(format!("{} {}: bad timestamp {:?}: {}", record, id, value, e))
        })
}
