//! Pure link extraction: scans document lines for markdown image references
//! pointing at remote files with a recognised image extension.
//!
//! Extraction is regex-based and does no I/O, so it is directly unit
//! testable. Non-matching or malformed markdown is simply not extracted.

use regex::Regex;
use std::sync::OnceLock;

fn alt_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[[^\]]*\]").expect("alt text pattern is valid"))
}

fn image_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"!\[[^\]]*\]\((https?://[^)\s]+\.(?i:png|jpe?g|webp|gif|svg))[^)]*\)")
            .expect("image link pattern is valid")
    })
}

/// Collapses every `![...]` alt segment on the line to `![]`, so literal
/// bracket content cannot confuse the image link match.
pub fn normalise_alt_text(line: &str) -> String {
    alt_text_re().replace_all(line, "![]").into_owned()
}

/// Finds all `![alt](URL)` image references on a single line whose URL is
/// remote (`http://` or `https://`) and ends with a recognised image
/// extension (case-insensitive). Returns the bare URLs in order of
/// appearance, without the markdown wrapper.
pub fn extract_image_links(line: &str) -> Vec<String> {
    let normalised = normalise_alt_text(line);
    image_link_re()
        .captures_iter(&normalised)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Collects the remote image links of a whole document: every line is
/// scanned, duplicates are dropped (first occurrence wins, insertion order
/// preserved), and links already hosted under `exclude_domain` are filtered
/// out as migrated.
pub fn collect_document_links(text: &str, exclude_domain: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for line in text.lines() {
        for link in extract_image_links(line) {
            if !exclude_domain.is_empty() && link.contains(exclude_domain) {
                continue;
            }
            if !links.contains(&link) {
                links.push(link);
            }
        }
    }
    links
}
