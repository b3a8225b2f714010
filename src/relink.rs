//! High-level pipeline: orchestrates walk → extract → fetch/publish → rewrite.
//!
//! This module provides the top-level orchestration logic for "relinking" all
//! documents under the configured root. It implements a coordinated pipeline
//! that:
//!   - Walks the root directory for documents matching the configured extension
//!   - Extracts remote image links from each document (deduplicated, with
//!     already-migrated links filtered out)
//!   - Fetches each image and re-uploads it via [`ObjectStore`], falling back
//!     to the original link on failure
//!   - Rewrites the document text and writes it to a sibling `re-<name>` file
//!   - Aggregates and returns a report of what succeeded and failed per document.
//!
//! # Responsibilities
//! - Bounded-concurrency processing: at most `scan.concurrency` documents are
//!   in flight at once; link fetches within one document are sequential
//! - Per-document isolation: a failed read or write is recorded in that
//!   document's report entry and does not abort the batch
//! - Invokes logging throughout for traceability
//!
//! # Callable From
//! - Used by both the CLI entrypoint and integration tests
//! - Expects concrete (async) [`Fetcher`] and [`ObjectStore`] implementations
//!
//! # Error Handling
//! Only a failure to list the root directory tree is fatal for the run; all
//! per-link failures degrade to the original URL and all per-document
//! failures are reported individually.

use futures::stream::{self, StreamExt};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::RelinkConfig;
use crate::contract::{Fetcher, ObjectStore};
use crate::publish::fetch_and_publish;
use crate::rewrite::rewrite_links;
use crate::{extract, walk};

/// Outcome of a full relink run, one entry per discovered document.
#[derive(Debug)]
pub struct RelinkReport {
    pub documents: Vec<DocumentReport>,
}

/// Outcome of processing a single document.
#[derive(Debug)]
pub struct DocumentReport {
    pub path: PathBuf,
    /// Path of the written sibling file; `None` when processing failed.
    pub output_path: Option<PathBuf>,
    /// Remote image links discovered (after dedup and domain filtering).
    pub links_found: usize,
    /// Links actually replaced by a hosted URL (found minus fallbacks).
    pub links_replaced: usize,
    pub error: Option<String>,
}

/// Entrypoint: relink every matching document under the configured root.
pub async fn relink<F, S>(
    config: &RelinkConfig,
    fetcher: &F,
    store: &S,
) -> Result<RelinkReport, String>
where
    F: Fetcher,
    S: ObjectStore,
{
    info!(root = %config.scan.root_dir.display(), "Starting relink pipeline");

    let extension = config.scan.extension.clone();
    let documents = walk::list_files(&config.scan.root_dir, &|path: &Path| {
        walk::has_extension(path, &extension)
    })
    .map_err(|e| {
        error!(error = ?e, root = %config.scan.root_dir.display(), "Failed to walk root directory");
        format!(
            "Failed to walk root directory {:?}: {e}",
            config.scan.root_dir
        )
    })?;

    info!(count = documents.len(), "Discovered documents");

    let reports: Vec<DocumentReport> = stream::iter(documents)
        .map(|path| process_document(path, config, fetcher, store))
        .buffer_unordered(config.scan.concurrency)
        .collect()
        .await;

    Ok(RelinkReport { documents: reports })
}

/// Processes one document: read, extract, fetch/publish sequentially per
/// link, rewrite, and write the sibling output file. Never panics or aborts
/// the batch; failures land in the returned report entry.
async fn process_document<F, S>(
    path: PathBuf,
    config: &RelinkConfig,
    fetcher: &F,
    store: &S,
) -> DocumentReport
where
    F: Fetcher,
    S: ObjectStore,
{
    info!(path = %path.display(), "Processing document");

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            error!(error = ?e, path = %path.display(), "Failed to read document");
            return DocumentReport {
                path,
                output_path: None,
                links_found: 0,
                links_replaced: 0,
                error: Some(format!("read failed: {e}")),
            };
        }
    };

    let links = extract::collect_document_links(&text, &config.store.public_domain);
    info!(path = %path.display(), links = links.len(), "Extracted remote image links");

    let mut mapping: Vec<(String, String)> = Vec::with_capacity(links.len());
    for link in links {
        let target = fetch_and_publish(fetcher, store, &config.store, &link).await;
        mapping.push((link, target));
    }
    let links_found = mapping.len();
    let links_replaced = mapping
        .iter()
        .filter(|(origin, target)| origin != target)
        .count();

    let rewritten = rewrite_links(&text, &mapping);
    let output_path = sibling_output_path(&path);

    match fs::write(&output_path, rewritten) {
        Ok(()) => {
            info!(path = %output_path.display(), "Wrote rewritten document");
            DocumentReport {
                path,
                output_path: Some(output_path),
                links_found,
                links_replaced,
                error: None,
            }
        }
        Err(e) => {
            error!(error = ?e, path = %output_path.display(), "Failed to write rewritten document");
            DocumentReport {
                path,
                output_path: None,
                links_found,
                links_replaced,
                error: Some(format!("write failed: {e}")),
            }
        }
    }
}

/// Output file for `dir/name.md` is `dir/re-name.md`.
fn sibling_output_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("re-{file_name}"))
}
