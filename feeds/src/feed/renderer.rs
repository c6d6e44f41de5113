//! Entry renderer
//!
//! Turns one event and its updates into a feed entry. The HTML body lists
//! every update newest-first.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::app::timeline::latest_to_oldest;
use crate::domain::entities::{Event, EventKind, Update};
use crate::error::{DomainError, FeedError};

/// Timestamp shown above each update
const UPDATE_TIME_FORMAT: &str = "%b %-d, %Y - %H:%M:%S UTC";

/// One rendered entry, shared by the Atom and RSS serializers
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: String,
    pub link: String,
    pub title: String,
    /// HTML body
    pub content: String,
    /// Time of the newest update
    pub published: DateTime<Utc>,
    /// Creation time of the event itself
    pub updated: DateTime<Utc>,
}

/// Render an event with its (unordered) updates
pub fn render_entry(
    event: &Event,
    mut updates: Vec<Update>,
    status_page_url: &str,
) -> Result<FeedEntry, FeedError> {
    let path = kind_path(event)?;

    updates.sort_by(|a, b| latest_to_oldest(&a.created_at, &b.created_at));
    let newest = updates.first().ok_or_else(|| {
        DomainError::Malformed(format!("{} {} has no updates", event.kind, event.id))
    })?;

    Ok(FeedEntry {
        id: entry_id(status_page_url, &event.kind, &event.id.0),
        link: format!("{}/{}/{}", normalize_base_url(status_page_url), path, event.id),
        title: event.name.clone(),
        published: newest.created_at,
        updated: event.created_at,
        content: updates.iter().map(render_update).collect(),
    })
}

/// `tag:` URI identifying an event across feed regenerations
pub fn entry_id(status_page_url: &str, kind: &EventKind, id: &str) -> String {
    format!("tag:{},2017:{}/{}", status_page_url, kind.tag(), id)
}

fn kind_path(event: &Event) -> Result<&'static str, FeedError> {
    match &event.kind {
        EventKind::Incident => Ok("incidents"),
        EventKind::Maintenance => Ok("maintenances"),
        EventKind::Unknown(kind) => Err(FeedError::UnknownEventKind {
            id: event.id.to_string(),
            kind: kind.clone(),
        }),
    }
}

/// Strip exactly one trailing slash
fn normalize_base_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

fn render_update(update: &Update) -> String {
    format!(
        "<p><small>{}</small><br><strong>{}</strong> - {}</p>",
        update.created_at.format(UPDATE_TIME_FORMAT),
        escape_html(&update.status),
        escape_html(&update.message)
    )
}

fn escape_html(s: &str) -> Cow<'_, str> {
    const SPECIAL: [char; 5] = ['<', '>', '&', '"', '\''];

    if !s.contains(&SPECIAL[..]) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
