//! Publisher port
//!
//! Durable destination for the serialized feed documents.

use async_trait::async_trait;

use crate::error::PublishError;

/// Object name of the Atom document
pub const ATOM_OBJECT_NAME: &str = "history.atom";

/// Object name of the RSS document
pub const RSS_OBJECT_NAME: &str = "history.rss";

#[async_trait]
pub trait FeedPublisher: Send + Sync {
    /// Store `content` under `name`, replacing any previous object
    async fn put(&self, name: &str, content: &[u8]) -> Result<(), PublishError>;
}

/// MIME type for a published object, derived from its extension
pub fn content_type_for(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("atom") => "application/atom+xml",
        Some("rss") => "application/rss+xml",
        Some("xml") => "application/xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type_for(ATOM_OBJECT_NAME), "application/atom+xml");
        assert_eq!(content_type_for(RSS_OBJECT_NAME), "application/rss+xml");
        assert_eq!(content_type_for("history"), "application/octet-stream");
    }
}
