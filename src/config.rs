use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Default number of documents processed in parallel.
pub const DEFAULT_CONCURRENCY: usize = 2;

/// The top-level relink configuration, fully merged (static file + env).
#[derive(Debug, Clone)]
pub struct RelinkConfig {
    pub scan: ScanConfig,
    pub store: StoreConfig,
}

/// Where to look for documents and how many to process at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory walked recursively for documents.
    pub root_dir: PathBuf,
    /// File extension of documents to process, compared case-insensitively.
    pub extension: String,
    /// Bound on concurrently processed documents.
    pub concurrency: usize,
}

/// Object store endpoint and link construction settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL the store accepts PUTs under, e.g. `https://storage.example.com/bucket`.
    pub endpoint: String,
    /// Public URL prefix of hosted images; also used to detect links that
    /// are already migrated and must be left alone.
    pub public_domain: String,
    /// Key prefix for uploaded objects, e.g. `blog`.
    pub key_prefix: String,
    /// Bearer token for the store endpoint. Injected from the environment,
    /// never from the static config file.
    pub api_token: String,
}

impl RelinkConfig {
    pub fn trace_loaded(&self) {
        info!(
            root_dir = %self.scan.root_dir.display(),
            extension = %self.scan.extension,
            concurrency = self.scan.concurrency,
            public_domain = %self.store.public_domain,
            "Loaded RelinkConfig"
        );
        debug!(scan = ?self.scan, "Config loaded (scan section, full debug)");
    }
}
