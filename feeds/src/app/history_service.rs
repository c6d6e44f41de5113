//! History feed service
//!
//! Regenerates the public incident history feeds: fetch both event streams,
//! merge them newest-first, render the newest entries and publish the Atom
//! and RSS documents.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;

use super::event_source::EventSource;
use super::timeline::merge_timeline;
use crate::domain::entities::Event;
use crate::domain::ports::{
    FeedPublisher, IncidentRepository, IncidentUpdateRepository, MaintenanceRepository,
    MaintenanceUpdateRepository, SettingsProvider, ATOM_OBJECT_NAME, RSS_OBJECT_NAME,
};
use crate::error::FeedError;
use crate::feed::{atom, render_entry, rss, FeedEntry, FeedMeta, HistoryFeed, MAX_ENTRIES};

/// Service for regenerating the history feeds
pub struct HistoryFeedService<IR, MR, IUR, MUR, S, P>
where
    IR: IncidentRepository,
    MR: MaintenanceRepository,
    IUR: IncidentUpdateRepository,
    MUR: MaintenanceUpdateRepository,
    S: SettingsProvider + ?Sized,
    P: FeedPublisher + ?Sized,
{
    source: EventSource<IR, MR, IUR, MUR>,
    settings: Arc<S>,
    publisher: Arc<P>,
}

impl<IR, MR, IUR, MUR, S, P> HistoryFeedService<IR, MR, IUR, MUR, S, P>
where
    IR: IncidentRepository,
    MR: MaintenanceRepository,
    IUR: IncidentUpdateRepository,
    MUR: MaintenanceUpdateRepository,
    S: SettingsProvider + ?Sized,
    P: FeedPublisher + ?Sized,
{
    pub fn new(source: EventSource<IR, MR, IUR, MUR>, settings: Arc<S>, publisher: Arc<P>) -> Self {
        Self {
            source,
            settings,
            publisher,
        }
    }

    /// Build the feed without publishing it
    pub async fn build_feed(&self) -> Result<HistoryFeed, FeedError> {
        let (status_page_url, service_name) = futures::try_join!(
            self.settings.status_page_url(),
            self.settings.service_name()
        )?;

        let (incidents, maintenances) = self.source.fetch_events().await?;
        let timeline = merge_timeline(incidents, maintenances);
        if timeline.len() > MAX_ENTRIES {
            tracing::debug!(
                "Timeline has {} events, keeping the newest {}",
                timeline.len(),
                MAX_ENTRIES
            );
        }

        // Update fetches run concurrently; try_join_all yields results in
        // timeline order
        let entries = try_join_all(
            timeline
                .iter()
                .take(MAX_ENTRIES)
                .map(|event| self.render(event, &status_page_url)),
        )
        .await?;

        let mut feed = HistoryFeed::new(FeedMeta::for_status_page(&status_page_url, &service_name));
        for entry in entries {
            feed.push(entry);
        }
        Ok(feed)
    }

    /// Regenerate and publish both documents, returning the entry count.
    ///
    /// Both documents are serialized before anything is written, so a
    /// failure in fetching or rendering never publishes a partial result.
    pub async fn update_feeds(&self) -> Result<usize, FeedError> {
        let feed = self.build_feed().await?;
        let atom = atom::to_atom(&feed);
        let rss = rss::to_rss(&feed)?;

        self.publish(ATOM_OBJECT_NAME, atom.as_bytes()).await?;
        self.publish(RSS_OBJECT_NAME, rss.as_bytes()).await?;

        tracing::info!(
            "Published history feeds with {} entries ({} bytes atom, {} bytes rss)",
            feed.entries.len(),
            atom.len(),
            rss.len()
        );

        Ok(feed.entries.len())
    }

    /// Regenerate on every `period` tick until `shutdown` resolves.
    ///
    /// The first tick fires immediately. A failed run is logged and the
    /// schedule carries on.
    pub async fn run_on_schedule<F>(&self, period: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        // Polled first on every pass so a signal listener is armed before
        // any run starts
        tokio::pin!(shutdown);
        let mut interval = tokio::time::interval(period);

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("Shutting down");
                    return;
                }
                _ = interval.tick() => {
                    match self.update_feeds().await {
                        Ok(entries) => tracing::debug!("Scheduled run published {} entries", entries),
                        Err(e) => tracing::error!("Failed to update the feeds: {}", e),
                    }
                }
            }
        }
    }

    async fn render(&self, event: &Event, status_page_url: &str) -> Result<FeedEntry, FeedError> {
        let updates = self.source.fetch_updates(event).await?;
        render_entry(event, updates, status_page_url)
    }

    async fn publish(&self, name: &str, content: &[u8]) -> Result<(), FeedError> {
        self.publisher
            .put(name, content)
            .await
            .map_err(|source| FeedError::Publish {
                name: name.to_string(),
                source,
            })
    }
}
