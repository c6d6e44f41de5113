//! Domain layer
//!
//! Contains the status page history model with no external dependencies.
//! - `entities`: Incidents, maintenances and their updates
//! - `ports`: Trait definitions for stores, settings and publishing

pub mod entities;
pub mod ports;
