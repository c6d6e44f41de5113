//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory stores are immutable once built; tests configure them
//! up front with the `with_*` builders and hand them to the service.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
