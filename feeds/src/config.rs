use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Status page URL; with `service_name`, replaces the settings table
    pub status_page_url: Option<String>,
    pub service_name: Option<String>,
    /// Directory the filesystem publisher writes into
    pub output_dir: PathBuf,
    /// Object storage base URL; when set, documents are uploaded instead
    pub publish_url: Option<String>,
    pub publish_token: Option<String>,
    /// Regenerate on this interval instead of running once
    pub refresh_interval: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            status_page_url: env::var("STATUS_PAGE_URL").ok(),
            service_name: env::var("SERVICE_NAME").ok(),
            output_dir: env::var("FEED_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./public")),
            publish_url: env::var("FEED_PUBLISH_URL").ok(),
            publish_token: env::var("FEED_PUBLISH_TOKEN").ok(),
            refresh_interval: env::var("FEED_REFRESH_INTERVAL_SECS")
                .ok()
                .map(|raw| parse_refresh_interval(&raw))
                .transpose()
                .expect("FEED_REFRESH_INTERVAL_SECS must be a positive number of seconds"),
        }
    }

    /// Settings given in the environment, if both are present
    pub fn static_settings(&self) -> Option<(&str, &str)> {
        match (
            self.status_page_url.as_deref(),
            self.service_name.as_deref(),
        ) {
            (Some(url), Some(name)) => Some((url, name)),
            _ => None,
        }
    }
}

fn parse_refresh_interval(raw: &str) -> Result<Duration, String> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err("interval must be greater than zero".to_string()),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(format!("{:?}: {}", raw, e)),
    }
}
