//! Filesystem publisher

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::ports::FeedPublisher;
use crate::error::PublishError;

/// Writes documents into a local output directory
pub struct FsPublisher {
    dir: PathBuf,
}

impl FsPublisher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl FeedPublisher for FsPublisher {
    async fn put(&self, name: &str, content: &[u8]) -> Result<(), PublishError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // Readers only ever see a complete document
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!(".{}.tmp", name));
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}
