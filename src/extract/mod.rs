//! Stateless field extractors.
//!
//! Each extractor turns full text or a section's text into structured
//! values. A missing section or zero pattern matches always yields an
//! empty result, never an error; only the NER collaborator can fail.

mod contact;
mod education;
mod experience;
mod links;
mod name;
mod ner;

pub use contact::extract_contacts;
pub use education::parse_education;
pub use experience::{parse_experience, parse_experience_block};
pub use links::extract_links;
pub use name::{extract_name, NameFallback, DEFAULT_NAME_SCAN_LINES};
pub use ner::{Entity, EntityLabel, HeuristicNameTagger, NerTagger};
