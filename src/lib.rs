//! # unresume
//!
//! Structured field extraction from resume documents (PDF or scanned
//! image) for Rust.
//!
//! The pipeline recovers text (native PDF text with per-page OCR
//! fallback), normalizes it, segments it into sections, and runs a set of
//! stateless extractors plus a semantic skill matcher over it, producing
//! one [`ResumeRecord`] per document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::{parse_file, parse_folder};
//!
//! fn main() -> unresume::Result<()> {
//!     // Parse a single resume
//!     let record = parse_file("resume.pdf")?;
//!     println!("{:?}", record.name);
//!
//!     // Parse a folder of resumes, isolating per-document failures
//!     let report = parse_folder("./resumes")?;
//!     println!("parsed {}, failed {}", report.success_count(), report.failure_count());
//!     println!("{}", report.to_json(true)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Skill matching
//!
//! Skill matching needs a vocabulary and an embedding encoder. With the
//! `embeddings` feature enabled, a local fastembed model serves as the
//! encoder:
//!
//! ```no_run
//! # #[cfg(feature = "embeddings")]
//! # fn run() -> unresume::Result<()> {
//! use std::sync::Arc;
//! use unresume::{ResumeParser, SkillIndex, SkillVocabulary};
//! use unresume::skills::FastEmbedProvider;
//!
//! let vocabulary = SkillVocabulary::load_or_empty("data/skills.json")?;
//! let index = SkillIndex::build(vocabulary, Arc::new(FastEmbedProvider::new()?))?;
//! let parser = ResumeParser::new().with_skill_index(index);
//! let record = parser.parse_file("resume.pdf")?;
//! println!("{:?}", record.skills);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Layered recovery**: native PDF text, with per-page render + OCR
//!   fallback for scanned pages
//! - **Configurable segmentation**: strict uppercase headings or fuzzy
//!   keyword matching, with an explicit duplicate-heading policy
//! - **Collaborator seams**: PDF text, page rendering, OCR, NER and
//!   embeddings all sit behind traits for testing and swapping engines
//! - **Failure isolation**: a folder pass reports per-document failures
//!   instead of aborting

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod recover;
pub mod skills;
pub mod text;

// Re-export commonly used types
pub use detect::SUPPORTED_EXTENSIONS;
pub use error::{Error, Result};
pub use extract::{NameFallback, NerTagger};
pub use model::{
    Contacts, DocumentKind, EducationEntry, ExperienceEntry, Links, ResumeRecord, SourceDocument,
};
pub use pipeline::{
    list_supported_files, DocumentFailure, DocumentOutcome, FolderReport, ParserOptions,
    ResumeParser,
};
pub use recover::TextRecovery;
pub use skills::{CanonicalForm, EmbeddingProvider, SkillIndex, SkillVocabulary};
pub use text::{normalize, DuplicateHeadings, HeadingDetector, KeywordGroup, SectionMap, Segmenter};

use std::path::Path;

/// Parse one resume file with default options.
///
/// # Example
///
/// ```no_run
/// let record = unresume::parse_file("resume.pdf").unwrap();
/// println!("{:?}", record.contacts.emails);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ResumeRecord> {
    ResumeParser::new().parse_file(path)
}

/// Parse one resume file with custom options.
///
/// # Example
///
/// ```no_run
/// use unresume::{parse_file_with_options, NameFallback, ParserOptions};
///
/// let options = ParserOptions::new().with_name_fallback(NameFallback::None);
/// let record = parse_file_with_options("resume.pdf", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParserOptions,
) -> Result<ResumeRecord> {
    ResumeParser::with_options(options).parse_file(path)
}

/// Parse already-recovered resume text with default options.
pub fn parse_text(text: &str) -> Result<ResumeRecord> {
    ResumeParser::new().parse_text(text)
}

/// Parse every supported file in a folder with default options.
///
/// Per-document failures land in the report; only folder-level I/O errors
/// are returned.
pub fn parse_folder<P: AsRef<Path>>(dir: P) -> Result<FolderReport> {
    ResumeParser::new().parse_folder(dir)
}

/// Parse a folder with custom options.
pub fn parse_folder_with_options<P: AsRef<Path>>(
    dir: P,
    options: ParserOptions,
) -> Result<FolderReport> {
    ResumeParser::with_options(options).parse_folder(dir)
}

/// Recover and normalize the text of one document without extracting
/// fields.
pub fn recover_text<P: AsRef<Path>>(path: P) -> Result<String> {
    ResumeParser::new().recover_text(path)
}
