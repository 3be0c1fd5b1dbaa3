//! Candidate name extraction from the leading lines of a resume.

use super::ner::{EntityLabel, NerTagger};
use crate::error::Result;

/// How many leading lines to scan for a PERSON entity.
pub const DEFAULT_NAME_SCAN_LINES: usize = 20;

/// What to return when no PERSON entity is found in the scanned lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameFallback {
    /// Return the first scanned line verbatim.
    #[default]
    FirstLine,
    /// Return no name.
    None,
}

/// Run the tagger over the first `scan_lines` lines in order and return
/// the text of the first entity labeled PERSON; otherwise apply the
/// fallback policy.
///
/// Tagger errors propagate.
pub fn extract_name(
    text: &str,
    tagger: &dyn NerTagger,
    scan_lines: usize,
    fallback: NameFallback,
) -> Result<Option<String>> {
    let lines: Vec<&str> = text.lines().take(scan_lines).collect();
    for line in &lines {
        for entity in tagger.entities(line)? {
            if entity.label == EntityLabel::Person {
                return Ok(Some(entity.text));
            }
        }
    }
    Ok(match fallback {
        NameFallback::FirstLine => lines.first().map(|l| l.to_string()),
        NameFallback::None => None,
    })
}
