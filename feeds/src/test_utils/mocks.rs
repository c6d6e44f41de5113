//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::{Event, EventId, IncidentUpdate, MaintenanceUpdate};
use crate::domain::ports::{
    FeedPublisher, IncidentRepository, IncidentUpdateRepository, MaintenanceRepository,
    MaintenanceUpdateRepository, SettingsProvider,
};
use crate::error::{DomainError, PublishError};

// ============================================================================
// In-Memory Event Repositories
// ============================================================================

#[derive(Default)]
pub struct InMemoryIncidentRepository {
    events: Vec<Event>,
    fail: bool,
}

impl InMemoryIncidentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose queries fail as if the database were down
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            fail: true,
        }
    }

    /// Pre-populate with an event for testing
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}

#[async_trait]
impl IncidentRepository for InMemoryIncidentRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("incidents unavailable".to_string()));
        }
        Ok(self.events.clone())
    }
}

#[derive(Default)]
pub struct InMemoryMaintenanceRepository {
    events: Vec<Event>,
    fail: bool,
}

impl InMemoryMaintenanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose queries fail as if the database were down
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            fail: true,
        }
    }

    /// Pre-populate with an event for testing
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}

#[async_trait]
impl MaintenanceRepository for InMemoryMaintenanceRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("maintenances unavailable".to_string()));
        }
        Ok(self.events.clone())
    }
}

// ============================================================================
// In-Memory Update Repositories
// ============================================================================

#[derive(Default)]
pub struct InMemoryIncidentUpdateRepository {
    updates: HashMap<EventId, Vec<IncidentUpdate>>,
    queries: AtomicUsize,
}

impl InMemoryIncidentUpdateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update(mut self, update: IncidentUpdate) -> Self {
        self.updates
            .entry(update.incident_id.clone())
            .or_default()
            .push(update);
        self
    }

    /// Number of `find_by_incident` calls so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IncidentUpdateRepository for InMemoryIncidentUpdateRepository {
    async fn find_by_incident(&self, id: &EventId) -> Result<Vec<IncidentUpdate>, DomainError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.updates.get(id).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryMaintenanceUpdateRepository {
    updates: HashMap<EventId, Vec<MaintenanceUpdate>>,
}

impl InMemoryMaintenanceUpdateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update(mut self, update: MaintenanceUpdate) -> Self {
        self.updates
            .entry(update.maintenance_id.clone())
            .or_default()
            .push(update);
        self
    }
}

#[async_trait]
impl MaintenanceUpdateRepository for InMemoryMaintenanceUpdateRepository {
    async fn find_by_maintenance(
        &self,
        id: &EventId,
    ) -> Result<Vec<MaintenanceUpdate>, DomainError> {
        Ok(self.updates.get(id).cloned().unwrap_or_default())
    }
}

// ============================================================================
// In-Memory Publisher
// ============================================================================

/// Records every `put` in call order
#[derive(Default)]
pub struct InMemoryPublisher {
    objects: RwLock<Vec<(String, Vec<u8>)>>,
    /// Writes still to reject before accepting
    failures: AtomicUsize,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publisher that rejects every write
    pub fn failing() -> Self {
        Self::failing_times(usize::MAX)
    }

    /// Publisher that rejects the first `count` writes
    pub fn failing_times(count: usize) -> Self {
        Self {
            objects: RwLock::new(Vec::new()),
            failures: AtomicUsize::new(count),
        }
    }

    /// Names of all successful writes, in order
    pub fn names(&self) -> Vec<String> {
        let objects = self.objects.read().unwrap();
        objects.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Latest content written under `name`
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        let objects = self.objects.read().unwrap();
        objects
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content.clone())
    }
}

#[async_trait]
impl FeedPublisher for InMemoryPublisher {
    async fn put(&self, name: &str, content: &[u8]) -> Result<(), PublishError> {
        let rejected = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if rejected {
            return Err(PublishError::Api {
                status: 503,
                message: "bucket unavailable".to_string(),
            });
        }
        let mut objects = self.objects.write().unwrap();
        objects.push((name.to_string(), content.to_vec()));
        Ok(())
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Settings table without the status page keys
pub struct MissingSettings;

#[async_trait]
impl SettingsProvider for MissingSettings {
    async fn status_page_url(&self) -> Result<String, DomainError> {
        Err(DomainError::NotFound("setting StatusPageURL".to_string()))
    }

    async fn service_name(&self) -> Result<String, DomainError> {
        Err(DomainError::NotFound("setting ServiceName".to_string()))
    }
}
