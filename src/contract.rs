//! # contract: collaborator interfaces for fetching and storing image bytes
//!
//! This module defines the two external capabilities the relink pipeline
//! depends on, as traits so that production code and tests can supply
//! different implementations:
//! - [`Fetcher`]: downloads the full byte content of a remote URL.
//! - [`ObjectStore`]: uploads bytes under a storage key.
//!
//! ## Mocking & Testing
//! - Both traits are annotated for `mockall` so consumers can generate
//!   deterministic mocks for unit/integration tests.
//!
//! ## Adding New Store Backends
//! - Implement [`ObjectStore`] for your backend.
//! - Convert all meaningful upstream errors to a boxed error; the pipeline
//!   treats any `Err` as a per-link failure and falls back to the original
//!   link.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Error type for the Fetcher trait (simple boxed error).
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for the ObjectStore trait (simple boxed error).
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for downloading the raw bytes behind a remote URL.
///
/// The implementor is responsible for transport details (redirects, TLS,
/// timeouts). The trait is `Send + Sync` and intended for async/await usage
/// by multiple concurrent workers.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Download the full body of `url` into memory.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Trait for uploading bytes to an object store under a given key.
///
/// Implementations must be safe for concurrent use by multiple workers;
/// credentials and endpoint belong to the implementor, not the pipeline.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `content` under `key`. The key is a path-like identifier,
    /// e.g. `blog/5f3a….png`.
    async fn put(&self, key: &str, content: Vec<u8>) -> Result<(), StoreError>;
}
