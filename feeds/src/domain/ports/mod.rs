//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod publisher;
pub mod repositories;
pub mod settings;

pub use publisher::{content_type_for, FeedPublisher, ATOM_OBJECT_NAME, RSS_OBJECT_NAME};
pub use repositories::{
    IncidentRepository, IncidentUpdateRepository, MaintenanceRepository,
    MaintenanceUpdateRepository,
};
pub use settings::SettingsProvider;
