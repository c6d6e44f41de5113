//! PostgreSQL adapter for SettingsProvider

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::ports::SettingsProvider;
use crate::entity::settings;
use crate::error::DomainError;

const STATUS_PAGE_URL_KEY: &str = "StatusPageURL";
const SERVICE_NAME_KEY: &str = "ServiceName";

/// Settings read from the key/value `settings` table
pub struct PostgresSettingsRepository {
    db: DatabaseConnection,
}

impl PostgresSettingsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn get(&self, key: &str) -> Result<String, DomainError> {
        let result = settings::Entity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .map(|m| m.value)
            .ok_or_else(|| DomainError::NotFound(format!("setting {}", key)))
    }
}

#[async_trait]
impl SettingsProvider for PostgresSettingsRepository {
    async fn status_page_url(&self) -> Result<String, DomainError> {
        self.get(STATUS_PAGE_URL_KEY).await
    }

    async fn service_name(&self) -> Result<String, DomainError> {
        self.get(SERVICE_NAME_KEY).await
    }
}
