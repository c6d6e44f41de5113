//! Feed module
//!
//! History feed envelope, entry rendering, and the Atom/RSS serializers.

pub mod atom;
pub mod renderer;
pub mod rss;

use chrono::{DateTime, Utc};

pub use renderer::{render_entry, FeedEntry};

/// Most entries a history feed carries
pub const MAX_ENTRIES: usize = 25;

/// Feed-level metadata
#[derive(Debug, Clone, PartialEq)]
pub struct FeedMeta {
    pub id: String,
    pub link: String,
    pub title: String,
    pub author: String,
}

impl FeedMeta {
    /// Envelope for a status page's incident history
    pub fn for_status_page(status_page_url: &str, service_name: &str) -> Self {
        Self {
            id: format!("tag:{},2017:/history", status_page_url),
            link: status_page_url.to_string(),
            title: format!("{} Status - Incident History", service_name),
            author: service_name.to_string(),
        }
    }
}

/// Envelope plus newest-first entries, ready to serialize
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryFeed {
    pub meta: FeedMeta,
    pub entries: Vec<FeedEntry>,
}

impl HistoryFeed {
    pub fn new(meta: FeedMeta) -> Self {
        Self {
            meta,
            entries: Vec::new(),
        }
    }

    /// Append an entry; returns false once the feed is full
    pub fn push(&mut self, entry: FeedEntry) -> bool {
        if self.entries.len() >= MAX_ENTRIES {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Newest entry timestamp, or the Unix epoch for an empty feed
    pub fn updated(&self) -> DateTime<Utc> {
        self.entries
            .iter()
            .map(|e| e.updated)
            .max()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}
