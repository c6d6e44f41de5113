//! SeaORM table models
//!
//! Timestamps are stored as ISO 8601 text, the format the status page API
//! writes them in. Adapters parse them into domain types.

pub mod incident_updates;
pub mod incidents;
pub mod maintenance_updates;
pub mod maintenances;
pub mod settings;
