//! HTTP object storage publisher
//!
//! Uploads each document with a `PUT <base_url>/<name>`, which is what
//! S3-compatible buckets and most static hosting upload endpoints accept.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::ports::{content_type_for, FeedPublisher};
use crate::error::PublishError;

pub struct HttpPublisher {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpPublisher {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn object_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, encode(name))
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), PublishError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(PublishError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl FeedPublisher for HttpPublisher {
    async fn put(&self, name: &str, content: &[u8]) -> Result<(), PublishError> {
        let mut request = self
            .http
            .put(self.object_url(name))
            .header(CONTENT_TYPE, content_type_for(name))
            .body(content.to_vec());

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        self.handle_empty_response(response).await
    }
}
