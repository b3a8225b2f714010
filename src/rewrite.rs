//! Pure text rewriting: substitutes original image URLs with their hosted
//! replacements across a document.

/// Replaces every literal occurrence of each original URL with its mapped
/// replacement, line by line, rejoined with `\n`.
///
/// The mapping is iterated in insertion order per line; keys are distinct
/// URLs so the order is not observable outside pathological substring
/// overlaps. An empty mapping returns the input unchanged, and a trailing
/// newline on the input is preserved either way.
pub fn rewrite_links(text: &str, mapping: &[(String, String)]) -> String {
    if mapping.is_empty() {
        return text.to_string();
    }
    let mut rewritten = text
        .lines()
        .map(|line| {
            let mut line = line.to_string();
            for (origin, target) in mapping {
                line = line.replace(origin.as_str(), target.as_str());
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') {
        rewritten.push('\n');
    }
    rewritten
}
