//! Settings port

use async_trait::async_trait;

use crate::error::DomainError;

/// Status page settings needed to build the feed envelope
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Public URL of the status page, exactly as configured
    async fn status_page_url(&self) -> Result<String, DomainError>;

    /// Name of the service the status page reports on
    async fn service_name(&self) -> Result<String, DomainError>;
}
