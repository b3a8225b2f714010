//! Fetch-and-publish: downloads one remote image and re-hosts it in the
//! object store under a fresh identifier.

use crate::config::StoreConfig;
use crate::contract::{Fetcher, ObjectStore};
use tracing::{info, warn};
use uuid::Uuid;

/// Downloads `link`, uploads the bytes under `<key_prefix>/<uuid>.<ext>` and
/// returns the new public URL.
///
/// On any failure (fetch or upload) the error is logged and the original
/// link is returned unchanged. Each link is attempted exactly once; the
/// caller rewrites with whatever comes back.
pub async fn fetch_and_publish<F, S>(
    fetcher: &F,
    store: &S,
    config: &StoreConfig,
    link: &str,
) -> String
where
    F: Fetcher + ?Sized,
    S: ObjectStore + ?Sized,
{
    let extension = link_extension(link);
    let key = format!("{}/{}.{}", config.key_prefix, Uuid::new_v4(), extension);

    let content = match fetcher.fetch(link).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(link = %link, error = ?e, "Fetch failed, keeping original link");
            return link.to_string();
        }
    };

    match store.put(&key, content).await {
        Ok(()) => {
            let target = format!("{}{}", config.public_domain, key);
            info!(link = %link, target = %target, "Upload succeeded");
            target
        }
        Err(e) => {
            warn!(link = %link, key = %key, error = ?e, "Upload failed, keeping original link");
            link.to_string()
        }
    }
}

/// Derives the stored file extension from the link's trailing suffix,
/// lowercased so `pic.JPG` is stored as `.jpg`.
fn link_extension(link: &str) -> String {
    link.rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
