//! Named-entity tagging seam.
//!
//! The pipeline only needs PERSON spans out of the leading lines of a
//! resume. A pretrained model sits behind [`NerTagger`]; the crate ships a
//! heuristic stand-in so the pipeline runs without one.

use crate::error::Result;

/// Entity label taxonomy, reduced to what resume parsing distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Other,
}

/// One tagged span of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Named-entity recognition over one line of text.
pub trait NerTagger: Send + Sync {
    /// Tagged entities of the line, in reading order.
    fn entities(&self, line: &str) -> Result<Vec<Entity>>;
}

/// Capitalized-words heuristic standing in for a pretrained NER model.
///
/// Tags a line as one PERSON entity when it consists of two to four
/// title-case alphabetic words. Crude next to a real model, but it
/// resolves the common "name on its own line at the top" layout without
/// mistaking ALL-CAPS section headings for people (an all-caps name still
/// surfaces through the first-line fallback).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicNameTagger;

impl HeuristicNameTagger {
    fn looks_like_name(line: &str) -> bool {
        let words: Vec<&str> = line.split_whitespace().collect();
        if !(2..=4).contains(&words.len()) {
            return false;
        }
        words.iter().all(|w| {
            let mut chars = w.chars();
            let leading_upper = chars.next().map(|c| c.is_uppercase()).unwrap_or(false);
            leading_upper
                && chars.clone().any(|c| c.is_lowercase() || c == '.')
                && w.chars()
                    .all(|c| c.is_alphabetic() || c == '-' || c == '.' || c == '\'')
        })
    }
}

impl NerTagger for HeuristicNameTagger {
    fn entities(&self, line: &str) -> Result<Vec<Entity>> {
        let trimmed = line.trim();
        if Self::looks_like_name(trimmed) {
            Ok(vec![Entity::new(trimmed, EntityLabel::Person)])
        } else {
            Ok(Vec::new())
        }
    }
}
