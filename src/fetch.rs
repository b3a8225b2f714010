use crate::contract::{FetchError, Fetcher};
use async_trait::async_trait;
use tracing::debug;

/// Fetcher backed by a shared reqwest client. Standard redirect handling and
/// client default timeouts apply; the client is cheap to clone and safe for
/// concurrent use across workers.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        debug!(url = %url, size = bytes.len(), "Fetched remote asset");
        Ok(bytes.to_vec())
    }
}
