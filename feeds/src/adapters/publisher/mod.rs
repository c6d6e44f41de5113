//! Feed publishers
//!
//! Destinations for the serialized history documents.

mod fs;
mod http;

pub use fs::FsPublisher;
pub use http::HttpPublisher;
