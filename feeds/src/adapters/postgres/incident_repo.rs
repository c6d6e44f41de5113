//! PostgreSQL adapters for the incident stores

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::parse_timestamp;
use crate::domain::entities::{Event, EventId, EventKind, IncidentStatus, IncidentUpdate};
use crate::domain::ports::{IncidentRepository, IncidentUpdateRepository};
use crate::entity::{incident_updates, incidents};
use crate::error::DomainError;

/// PostgreSQL implementation of IncidentRepository
pub struct PostgresIncidentRepository {
    db: DatabaseConnection,
}

impl PostgresIncidentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncidentRepository for PostgresIncidentRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        let results = incidents::Entity::find()
            .order_by_desc(incidents::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Event::try_from).collect()
    }
}

/// PostgreSQL implementation of IncidentUpdateRepository
pub struct PostgresIncidentUpdateRepository {
    db: DatabaseConnection,
}

impl PostgresIncidentUpdateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncidentUpdateRepository for PostgresIncidentUpdateRepository {
    async fn find_by_incident(&self, id: &EventId) -> Result<Vec<IncidentUpdate>, DomainError> {
        let results = incident_updates::Entity::find()
            .filter(incident_updates::Column::IncidentId.eq(id.0.as_str()))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(IncidentUpdate::try_from).collect()
    }
}

impl TryFrom<incidents::Model> for Event {
    type Error = DomainError;

    fn try_from(m: incidents::Model) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp("incident", &m.incident_id, &m.created_at)?;
        let updated_at = parse_timestamp("incident", &m.incident_id, &m.updated_at)?;

        Ok(Event {
            id: EventId(m.incident_id),
            kind: EventKind::Incident,
            name: m.name,
            created_at,
            updated_at,
        })
    }
}

impl TryFrom<incident_updates::Model> for IncidentUpdate {
    type Error = DomainError;

    fn try_from(m: incident_updates::Model) -> Result<Self, Self::Error> {
        let created_at =
            parse_timestamp("incident update", &m.incident_update_id, &m.created_at)?;
        let incident_status = m.incident_status.parse::<IncidentStatus>().map_err(|e| {
            DomainError::Malformed(format!("incident update {}: {}", m.incident_update_id, e))
        })?;

        Ok(IncidentUpdate {
            id: m.incident_update_id,
            incident_id: EventId(m.incident_id),
            incident_status,
            message: m.message,
            created_at,
        })
    }
}
