//! Settings fixed at start-up

use async_trait::async_trait;

use crate::domain::ports::SettingsProvider;
use crate::error::DomainError;

/// Settings taken from configuration instead of the settings table
#[derive(Debug, Clone)]
pub struct StaticSettings {
    status_page_url: String,
    service_name: String,
}

impl StaticSettings {
    pub fn new(status_page_url: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            status_page_url: status_page_url.into(),
            service_name: service_name.into(),
        }
    }
}

#[async_trait]
impl SettingsProvider for StaticSettings {
    async fn status_page_url(&self) -> Result<String, DomainError> {
        Ok(self.status_page_url.clone())
    }

    async fn service_name(&self) -> Result<String, DomainError> {
        Ok(self.service_name.clone())
    }
}
