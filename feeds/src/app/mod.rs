//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the feed renderers.

pub mod event_source;
pub mod history_service;
pub mod timeline;

pub use event_source::EventSource;
pub use history_service::HistoryFeedService;
