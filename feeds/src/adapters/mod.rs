//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod publisher;
pub mod settings;

pub use postgres::{
    PostgresIncidentRepository, PostgresIncidentUpdateRepository, PostgresMaintenanceRepository,
    PostgresMaintenanceUpdateRepository, PostgresSettingsRepository,
};
pub use publisher::{FsPublisher, HttpPublisher};
pub use settings::StaticSettings;
