//! Section segmentation: partitioning resume text into labeled blocks.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a line to fuzzy-match a section
/// keyword.
pub const FUZZY_HEADING_THRESHOLD: f64 = 0.8;

fn uppercase_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][A-Z\s/&]+$").unwrap())
}

/// Mapping from an uppercase heading label to the block of lines between
/// that heading and the next one.
///
/// Keys are unique within one map; how a repeated heading resolves is
/// decided by the [`DuplicateHeadings`] policy of the segmenter that built
/// it. A heading with no following content keeps its key with an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap(HashMap<String, String>);

impl SectionMap {
    /// The body of a section, if the heading was seen.
    pub fn get(&self, heading: &str) -> Option<&str> {
        self.0.get(heading).map(String::as_str)
    }

    pub fn contains(&self, heading: &str) -> bool {
        self.0.contains_key(heading)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over heading labels (unordered).
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// How to resolve a heading that appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateHeadings {
    /// Keep the first occurrence's body.
    KeepFirst,
    /// Keep the last occurrence's body. The default, matching the
    /// last-write-wins behavior this segmenter inherited.
    #[default]
    KeepLast,
    /// Join the bodies with a newline.
    Concatenate,
}

/// A named section with the keywords that fuzzy-match its heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    /// Canonical section key, uppercase (e.g. `EXPERIENCE`).
    pub name: String,
    /// Lowercase keywords a heading line may approximate.
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// The stock groups for resume sections.
    pub fn default_groups() -> Vec<KeywordGroup> {
        vec![
            KeywordGroup::new("EXPERIENCE", &["experience", "employment", "work history"]),
            KeywordGroup::new("EDUCATION", &["education", "academics", "qualification"]),
        ]
    }
}

/// Heading detection strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingDetector {
    /// A line is a heading when it is entirely uppercase letters, spaces,
    /// `&` or `/`.
    UppercaseLine,
    /// A line is a heading for a group when it fuzzy-matches one of the
    /// group's keywords (Jaro-Winkler ≥ [`FUZZY_HEADING_THRESHOLD`]); the
    /// section is keyed by the group's canonical name. Strict uppercase
    /// lines still open sections keyed by themselves, so collection ends
    /// at unrelated headings too.
    FuzzyKeywords(Vec<KeywordGroup>),
}

impl Default for HeadingDetector {
    fn default() -> Self {
        HeadingDetector::UppercaseLine
    }
}

impl HeadingDetector {
    /// The section key this line opens, or `None` for a body line.
    fn heading_key(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        match self {
            HeadingDetector::UppercaseLine => uppercase_heading_re()
                .is_match(trimmed)
                .then(|| trimmed.to_string()),
            HeadingDetector::FuzzyKeywords(groups) => {
                let lowered = trimmed.to_lowercase();
                for group in groups {
                    let hit = group
                        .keywords
                        .iter()
                        .any(|k| jaro_winkler(&lowered, k) >= FUZZY_HEADING_THRESHOLD);
                    if hit {
                        return Some(group.name.clone());
                    }
                }
                uppercase_heading_re()
                    .is_match(trimmed)
                    .then(|| trimmed.to_string())
            }
        }
    }
}

/// Partitions normalized text into a [`SectionMap`].
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    detector: HeadingDetector,
    duplicates: DuplicateHeadings,
}

impl Segmenter {
    pub fn new(detector: HeadingDetector, duplicates: DuplicateHeadings) -> Self {
        Self {
            detector,
            duplicates,
        }
    }

    /// Walk the lines of `text`, closing the open section at each heading
    /// and at end of input. Lines before the first heading are discarded.
    pub fn segment(&self, text: &str) -> SectionMap {
        let mut sections: HashMap<String, String> = HashMap::new();
        let mut current: Option<String> = None;
        let mut buffer: Vec<&str> = Vec::new();

        for line in text.lines() {
            if let Some(key) = self.detector.heading_key(line) {
                if let Some(heading) = current.take() {
                    self.close_section(&mut sections, heading, &buffer);
                }
                buffer.clear();
                current = Some(key);
            } else if current.is_some() {
                buffer.push(line);
            }
        }
        if let Some(heading) = current {
            self.close_section(&mut sections, heading, &buffer);
        }

        SectionMap(sections)
    }

    fn close_section(&self, sections: &mut HashMap<String, String>, heading: String, buffer: &[&str]) {
        let body = buffer.join("\n").trim().to_string();
        match self.duplicates {
            DuplicateHeadings::KeepFirst => {
                sections.entry(heading).or_insert(body);
            }
            DuplicateHeadings::KeepLast => {
                sections.insert(heading, body);
            }
            DuplicateHeadings::Concatenate => {
                sections
                    .entry(heading)
                    .and_modify(|existing| {
                        if !existing.is_empty() && !body.is_empty() {
                            existing.push('\n');
                        }
                        existing.push_str(&body);
                    })
                    .or_insert(body);
            }
        }
    }
}
