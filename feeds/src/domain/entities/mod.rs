//! Domain entities
//!
//! Pure domain models for the status page history.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod event;
pub mod update;

pub use event::{Event, EventId, EventKind};
pub use update::{IncidentStatus, IncidentUpdate, MaintenanceStatus, MaintenanceUpdate, Update};
