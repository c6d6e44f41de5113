//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{
    Event, EventId, EventKind, IncidentStatus, IncidentUpdate, MaintenanceStatus,
    MaintenanceUpdate, Update,
};
use crate::feed::FeedEntry;

/// A UTC time on 2017-03-04
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 3, 4, hour, minute, 0).unwrap()
}

/// Create a test event of the given kind
pub fn test_event(kind: EventKind, id: &str, created_at: DateTime<Utc>) -> Event {
    Event {
        id: EventId::from(id),
        name: format!("{} {}", kind.tag(), id),
        kind,
        created_at,
        updated_at: created_at,
    }
}

/// Create a normalized update whose message is `Update <id>`
pub fn test_update(id: &str, status: &str, created_at: DateTime<Utc>) -> Update {
    Update {
        id: id.to_string(),
        status: status.to_string(),
        message: format!("Update {}", id),
        created_at,
    }
}

pub fn test_incident_update(
    id: &str,
    incident_id: &str,
    status: IncidentStatus,
    created_at: DateTime<Utc>,
) -> IncidentUpdate {
    IncidentUpdate {
        id: id.to_string(),
        incident_id: EventId::from(incident_id),
        incident_status: status,
        message: format!("Update {}", id),
        created_at,
    }
}

pub fn test_maintenance_update(
    id: &str,
    maintenance_id: &str,
    status: MaintenanceStatus,
    created_at: DateTime<Utc>,
) -> MaintenanceUpdate {
    MaintenanceUpdate {
        id: id.to_string(),
        maintenance_id: EventId::from(maintenance_id),
        maintenance_status: status,
        message: format!("Update {}", id),
        created_at,
    }
}

/// Create a rendered incident entry on `https://status.example`
pub fn test_entry(id: &str, updated: DateTime<Utc>) -> FeedEntry {
    FeedEntry {
        id: format!("tag:https://status.example,2017:Incident/{}", id),
        link: format!("https://status.example/incidents/{}", id),
        title: format!("Incident {}", id),
        content: format!(
            "<p><small>{}</small><br><strong>resolved</strong> - Fixed</p>",
            updated.format("%b %-d, %Y - %H:%M:%S UTC")
        ),
        published: updated,
        updated,
    }
}
