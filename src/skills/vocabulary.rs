//! Skill vocabulary loading.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Default location of the vocabulary file.
pub const DEFAULT_VOCABULARY_PATH: &str = "data/skills.json";

/// The ordered list of canonical skill names, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillVocabulary {
    names: Vec<String>,
}

impl SkillVocabulary {
    /// Build a vocabulary from in-memory names.
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load a vocabulary from a JSON array of strings.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be read, [`Error::Vocabulary`]
    /// when it is not a JSON array of strings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let names: Vec<String> = serde_json::from_str(&content).map_err(|e| {
            Error::Vocabulary(format!("{} is not a JSON array of strings: {}", path.display(), e))
        })?;
        Ok(Self { names })
    }

    /// Load a vocabulary, degrading to an empty one with a warning when
    /// the file is absent. Skill matching over an empty vocabulary is a
    /// no-op, not a fatal condition.
    ///
    /// A file that exists but is malformed still errors.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!(
                "vocabulary file {} not found, skill matching disabled",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
