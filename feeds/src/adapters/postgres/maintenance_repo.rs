//! PostgreSQL adapters for the maintenance stores

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::parse_timestamp;
use crate::domain::entities::{Event, EventId, EventKind, MaintenanceStatus, MaintenanceUpdate};
use crate::domain::ports::{MaintenanceRepository, MaintenanceUpdateRepository};
use crate::entity::{maintenance_updates, maintenances};
use crate::error::DomainError;

/// PostgreSQL implementation of MaintenanceRepository
pub struct PostgresMaintenanceRepository {
    db: DatabaseConnection,
}

impl PostgresMaintenanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MaintenanceRepository for PostgresMaintenanceRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        let results = maintenances::Entity::find()
            .order_by_desc(maintenances::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Event::try_from).collect()
    }
}

/// PostgreSQL implementation of MaintenanceUpdateRepository
pub struct PostgresMaintenanceUpdateRepository {
    db: DatabaseConnection,
}

impl PostgresMaintenanceUpdateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MaintenanceUpdateRepository for PostgresMaintenanceUpdateRepository {
    async fn find_by_maintenance(
        &self,
        id: &EventId,
    ) -> Result<Vec<MaintenanceUpdate>, DomainError> {
        let results = maintenance_updates::Entity::find()
            .filter(maintenance_updates::Column::MaintenanceId.eq(id.0.as_str()))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(MaintenanceUpdate::try_from).collect()
    }
}

impl TryFrom<maintenances::Model> for Event {
    type Error = DomainError;

    fn try_from(m: maintenances::Model) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp("maintenance", &m.maintenance_id, &m.created_at)?;
        let updated_at = parse_timestamp("maintenance", &m.maintenance_id, &m.updated_at)?;

        Ok(Event {
            id: EventId(m.maintenance_id),
            kind: EventKind::Maintenance,
            name: m.name,
            created_at,
            updated_at,
        })
    }
}

impl TryFrom<maintenance_updates::Model> for MaintenanceUpdate {
    type Error = DomainError;

    fn try_from(m: maintenance_updates::Model) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp(
            "maintenance update",
            &m.maintenance_update_id,
            &m.created_at,
        )?;
        let maintenance_status = m
            .maintenance_status
            .parse::<MaintenanceStatus>()
            .map_err(|e| {
                DomainError::Malformed(format!(
                    "maintenance update {}: {}",
                    m.maintenance_update_id, e
                ))
            })?;

        Ok(MaintenanceUpdate {
            id: m.maintenance_update_id,
            maintenance_id: EventId(m.maintenance_id),
            maintenance_status,
            message: m.message,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_model_becomes_maintenance_event() {
        let model = maintenances::Model {
            maintenance_id: "m-7".to_string(),
            name: "Database upgrade".to_string(),
            status: "scheduled".to_string(),
            created_at: "2017-03-05T01:00:00+09:00".to_string(),
            updated_at: "2017-03-05T01:00:00+09:00".to_string(),
        };

        let event = Event::try_from(model).unwrap();
        assert_eq!(event.kind, EventKind::Maintenance);
        assert_eq!(event.created_at.to_rfc3339(), "2017-03-04T16:00:00+00:00");
    }

    #[test]
    fn maintenance_update_maps_status() {
        let model = maintenance_updates::Model {
            maintenance_update_id: "mu-1".to_string(),
            maintenance_id: "m-7".to_string(),
            maintenance_status: "inprogress".to_string(),
            message: "Started".to_string(),
            created_at: "2017-03-05T01:00:00Z".to_string(),
            updated_at: "2017-03-05T01:00:00Z".to_string(),
        };

        let update = MaintenanceUpdate::try_from(model).unwrap();
        assert_eq!(update.maintenance_status, MaintenanceStatus::InProgress);
        assert_eq!(update.maintenance_id, EventId::from("m-7"));
    }
}
