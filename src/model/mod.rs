//! Data model for input documents and output records.

mod document;
mod record;

pub use document::{DocumentKind, SourceDocument};
pub use record::{Contacts, EducationEntry, ExperienceEntry, Links, ResumeRecord};
