//! URL extraction and host partitioning.

use crate::model::Links;
use regex::Regex;
use std::sync::OnceLock;

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // URLs end at whitespace or a pipe; resumes often separate contact
    // fields with `|`.
    RE.get_or_init(|| Regex::new(r"https?://[^\s|]+|www\.[^\s|]+").unwrap())
}

/// Collect URLs from the full text and partition them into linkedin,
/// github and other. All three collections are deduplicated sets.
pub fn extract_links(text: &str) -> Links {
    let mut links = Links::default();
    for m in link_re().find_iter(text) {
        let url = m.as_str().to_string();
        let lowered = url.to_lowercase();
        if lowered.contains("linkedin.com") {
            links.linkedin.insert(url);
        } else if lowered.contains("github.com") {
            links.github.insert(url);
        } else {
            links.other.insert(url);
        }
    }
    links
}
