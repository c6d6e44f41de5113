//! Status page history feeds
//!
//! Regenerates the public Atom and RSS incident history feeds from the status
//! page's incidents and scheduled maintenances.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;

use adapters::{
    FsPublisher, HttpPublisher, PostgresIncidentRepository, PostgresIncidentUpdateRepository,
    PostgresMaintenanceRepository, PostgresMaintenanceUpdateRepository,
    PostgresSettingsRepository, StaticSettings,
};
use app::{EventSource, HistoryFeedService};
use config::Config;
use domain::ports::{FeedPublisher, SettingsProvider};

type FeedService = HistoryFeedService<
    PostgresIncidentRepository,
    PostgresMaintenanceRepository,
    PostgresIncidentUpdateRepository,
    PostgresMaintenanceUpdateRepository,
    dyn SettingsProvider,
    dyn FeedPublisher,
>;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,statuspage_feeds=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: failed to update the feeds");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let service = build_service(&config).await?;

    let Some(period) = config.refresh_interval else {
        service.update_feeds().await?;
        return Ok(());
    };

    tracing::info!("Regenerating feeds every {}s", period.as_secs());
    service
        .run_on_schedule(period, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {}", e);
            }
        })
        .await;
    Ok(())
}

async fn build_service(config: &Config) -> anyhow::Result<FeedService> {
    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let source = EventSource::new(
        Arc::new(PostgresIncidentRepository::new(db.clone())),
        Arc::new(PostgresMaintenanceRepository::new(db.clone())),
        Arc::new(PostgresIncidentUpdateRepository::new(db.clone())),
        Arc::new(PostgresMaintenanceUpdateRepository::new(db.clone())),
    );

    let settings: Arc<dyn SettingsProvider> = match config.static_settings() {
        Some((url, name)) => Arc::new(StaticSettings::new(url, name)),
        None => Arc::new(PostgresSettingsRepository::new(db)),
    };

    let publisher: Arc<dyn FeedPublisher> = match &config.publish_url {
        Some(url) => {
            tracing::info!("Publishing feeds to {}", url);
            Arc::new(HttpPublisher::new(url.clone(), config.publish_token.clone()))
        }
        None => {
            tracing::info!("Writing feeds to {}", config.output_dir.display());
            Arc::new(FsPublisher::new(&config.output_dir))
        }
    };

    Ok(HistoryFeedService::new(source, settings, publisher))
}
