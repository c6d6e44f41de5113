//! Event source
//!
//! Reads incidents, maintenances and their updates from the four stores and
//! hands them to the pipeline in the common shape.

use std::sync::Arc;

use crate::domain::entities::{Event, EventKind, Update};
use crate::domain::ports::{
    IncidentRepository, IncidentUpdateRepository, MaintenanceRepository,
    MaintenanceUpdateRepository,
};
use crate::error::FeedError;

pub struct EventSource<IR, MR, IUR, MUR>
where
    IR: IncidentRepository,
    MR: MaintenanceRepository,
    IUR: IncidentUpdateRepository,
    MUR: MaintenanceUpdateRepository,
{
    incidents: Arc<IR>,
    maintenances: Arc<MR>,
    incident_updates: Arc<IUR>,
    maintenance_updates: Arc<MUR>,
}

impl<IR, MR, IUR, MUR> EventSource<IR, MR, IUR, MUR>
where
    IR: IncidentRepository,
    MR: MaintenanceRepository,
    IUR: IncidentUpdateRepository,
    MUR: MaintenanceUpdateRepository,
{
    pub fn new(
        incidents: Arc<IR>,
        maintenances: Arc<MR>,
        incident_updates: Arc<IUR>,
        maintenance_updates: Arc<MUR>,
    ) -> Self {
        Self {
            incidents,
            maintenances,
            incident_updates,
            maintenance_updates,
        }
    }

    /// Fetch all incidents and all maintenances, without updates
    pub async fn fetch_events(&self) -> Result<(Vec<Event>, Vec<Event>), FeedError> {
        let (incidents, maintenances) =
            futures::try_join!(self.incidents.find_all(), self.maintenances.find_all())?;

        tracing::debug!(
            "Fetched {} incidents and {} maintenances",
            incidents.len(),
            maintenances.len()
        );
        Ok((incidents, maintenances))
    }

    /// Fetch the updates of one event from the store matching its kind
    pub async fn fetch_updates(&self, event: &Event) -> Result<Vec<Update>, FeedError> {
        let updates: Vec<Update> = match &event.kind {
            EventKind::Incident => self
                .incident_updates
                .find_by_incident(&event.id)
                .await?
                .into_iter()
                .map(Update::from)
                .collect(),
            EventKind::Maintenance => self
                .maintenance_updates
                .find_by_maintenance(&event.id)
                .await?
                .into_iter()
                .map(Update::from)
                .collect(),
            EventKind::Unknown(kind) => {
                return Err(FeedError::UnknownEventKind {
                    id: event.id.to_string(),
                    kind: kind.clone(),
                })
            }
        };

        Ok(updates)
    }
}
