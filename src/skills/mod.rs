//! Semantic skill matching.
//!
//! Candidate phrases are contiguous token n-grams of the full text; each
//! candidate is embedded and compared against precomputed vocabulary
//! embeddings by cosine similarity. A vocabulary entry whose similarity to
//! any candidate exceeds the threshold contributes its canonical name.

mod embedding;
mod tokenize;
mod vocabulary;

#[cfg(feature = "embeddings")]
pub use embedding::FastEmbedProvider;
pub use embedding::{cosine_similarity, similarity_matrix, EmbeddingProvider};
pub use tokenize::{ngrams, tokenize};
pub use vocabulary::{SkillVocabulary, DEFAULT_VOCABULARY_PATH};

use crate::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Minimum cosine similarity for a (candidate, vocabulary entry) pair to
/// count as a match. Fixed design constant, compared strictly.
pub const SKILL_SIMILARITY_THRESHOLD: f32 = 0.7;

/// Upper bound on candidate n-gram length. Fixed design constant.
pub const NGRAM_MAX: usize = 3;

/// How matched vocabulary names are canonicalized on output.
///
/// Canonicalization happens after matching, on the output side only; the
/// vocabulary embeds verbatim. Canonical forms that collide (two
/// differently-cased vocabulary entries under [`CanonicalForm::TitleCase`])
/// merge silently through set insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanonicalForm {
    /// Insert the vocabulary string verbatim.
    #[default]
    Preserve,
    /// Trim and title-case each word before inserting.
    TitleCase,
}

fn title_case(s: &str) -> String {
    s.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Vocabulary entries with their precomputed embeddings and the provider
/// that produced them.
///
/// Built once at process start; immutable and safe to share read-only
/// across parallel document passes.
pub struct SkillIndex {
    names: Vec<String>,
    embeddings: Vec<Vec<f32>>,
    provider: Arc<dyn EmbeddingProvider>,
}

impl SkillIndex {
    /// Precompute one embedding per vocabulary entry.
    ///
    /// An empty vocabulary skips the encoder entirely.
    pub fn build(vocabulary: SkillVocabulary, provider: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let names = vocabulary.names().to_vec();
        let embeddings = if names.is_empty() {
            Vec::new()
        } else {
            provider.encode(&names)?
        };
        log::debug!(
            "skill index built: {} entries via {}",
            names.len(),
            provider.name()
        );
        Ok(Self {
            names,
            embeddings,
            provider,
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Match the text against the vocabulary.
    ///
    /// Returns the canonical names of every vocabulary entry whose cosine
    /// similarity to some candidate n-gram exceeds
    /// [`SKILL_SIMILARITY_THRESHOLD`]. An empty vocabulary or a text with
    /// no candidates returns the empty set without invoking the encoder.
    pub fn match_text(&self, text: &str, canonical: CanonicalForm) -> Result<BTreeSet<String>> {
        let mut matched = BTreeSet::new();
        if self.is_empty() {
            return Ok(matched);
        }

        let tokens = tokenize(text);
        let candidates = ngrams(&tokens, NGRAM_MAX);
        if candidates.is_empty() {
            return Ok(matched);
        }

        let candidate_embeddings = self.provider.encode(&candidates)?;
        let scores = similarity_matrix(&candidate_embeddings, &self.embeddings);

        for row in &scores {
            for (j, score) in row.iter().enumerate() {
                if *score > SKILL_SIMILARITY_THRESHOLD {
                    let name = match canonical {
                        CanonicalForm::Preserve => self.names[j].clone(),
                        CanonicalForm::TitleCase => title_case(&self.names[j]),
                    };
                    matched.insert(name);
                }
            }
        }
        log::debug!(
            "skill match: {} candidates, {} matches",
            candidates.len(),
            matched.len()
        );
        Ok(matched)
    }
}
