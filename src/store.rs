use crate::config::StoreConfig;
use crate::contract::{ObjectStore, StoreError};
use async_trait::async_trait;
use tracing::debug;

/// ObjectStore backed by an HTTP endpoint accepting authenticated PUTs,
/// e.g. an S3-compatible bucket behind a simple upload gateway.
///
/// Constructed explicitly from config rather than held as process-global
/// state, so tests can substitute a mock through the [`ObjectStore`] trait.
#[derive(Clone)]
pub struct HttpObjectStore {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl HttpObjectStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(&self, key: &str, content: Vec<u8>) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.endpoint, key);
        let size = content.len();
        self.client
            .put(&url)
            .bearer_auth(&self.api_token)
            .body(content)
            .send()
            .await?
            .error_for_status()?;
        debug!(key = %key, size = size, "Uploaded object");
        Ok(())
    }
}
