//! Repository port traits
//!
//! These traits define the read-only interface to the status page stores.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Event, EventId, IncidentUpdate, MaintenanceUpdate};
use crate::error::DomainError;

/// Repository for incidents
#[async_trait]
pub trait IncidentRepository: Send + Sync {
    /// All incidents, as events of kind `Incident`
    async fn find_all(&self) -> Result<Vec<Event>, DomainError>;
}

/// Repository for scheduled maintenances
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    /// All maintenances, as events of kind `Maintenance`
    async fn find_all(&self) -> Result<Vec<Event>, DomainError>;
}

/// Repository for incident updates
#[async_trait]
pub trait IncidentUpdateRepository: Send + Sync {
    /// Updates posted on one incident, in no particular order
    async fn find_by_incident(&self, id: &EventId) -> Result<Vec<IncidentUpdate>, DomainError>;
}

/// Repository for maintenance updates
#[async_trait]
pub trait MaintenanceUpdateRepository: Send + Sync {
    /// Updates posted on one maintenance, in no particular order
    async fn find_by_maintenance(
        &self,
        id: &EventId,
    ) -> Result<Vec<MaintenanceUpdate>, DomainError>;
}
