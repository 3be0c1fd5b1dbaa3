//! Output record types.
//!
//! Field order on [`ResumeRecord`] is the serialization order: `raw_text`
//! stays last so the debugging payload trails the structured fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The structured record produced for one resume document.
///
/// Assembled once per document and never mutated. Collection fields are
/// always present, even when empty — an extractor that finds nothing
/// contributes an empty collection, not a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Candidate name, if one was found.
    pub name: Option<String>,

    /// Email addresses and phone numbers, in order of first appearance.
    pub contacts: Contacts,

    /// URLs partitioned by host.
    pub links: Links,

    /// Canonical skill names matched against the vocabulary.
    pub skills: BTreeSet<String>,

    /// Work history entries, in order of appearance in the text.
    pub experience: Vec<ExperienceEntry>,

    /// Education entries, in order of appearance in the text.
    pub education: Vec<EducationEntry>,

    /// The normalized recovered text, kept for debugging.
    pub raw_text: String,
}

/// Contact details found in the full text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    /// Email addresses in order of first appearance.
    pub emails: Vec<String>,
    /// Phone numbers in order of first appearance.
    pub phones: Vec<String>,
}

/// URLs found in the full text, partitioned by host substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// URLs containing `linkedin.com`.
    pub linkedin: BTreeSet<String>,
    /// URLs containing `github.com`.
    pub github: BTreeSet<String>,
    /// Everything else, deduplicated.
    pub other: BTreeSet<String>,
}

/// One contiguous block from the experience section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Start of the period: a 4-digit year string or `"Present"`.
    pub start_date: Option<String>,
    /// End of the period: a 4-digit year string or `"Present"`.
    pub end_date: Option<String>,
    /// Role title, from the first line before the first comma.
    pub role: Option<String>,
    /// Company, from the first line after the first comma.
    pub company: Option<String>,
    /// Description bullets with leading bullet punctuation stripped.
    pub description: Vec<String>,
}

/// One degree line from the education section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// The matched degree span (e.g. "B.Sc in Computer Science").
    pub degree: String,
    /// The full line the degree was found on.
    pub institution: String,
}
