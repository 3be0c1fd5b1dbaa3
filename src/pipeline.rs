//! The resume assembler: per-document and per-folder orchestration.

use crate::detect;
use crate::error::Result;
use crate::extract::{
    extract_contacts, extract_links, extract_name, parse_education, parse_experience,
    HeuristicNameTagger, NameFallback, NerTagger, DEFAULT_NAME_SCAN_LINES,
};
use crate::model::{ResumeRecord, SourceDocument};
use crate::recover::{TextRecovery, DEFAULT_RENDER_DPI};
use crate::skills::{CanonicalForm, SkillIndex};
use crate::text::{normalize, DuplicateHeadings, HeadingDetector, Segmenter};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Options controlling extraction behavior.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Heading detection strategy for the section segmenter.
    pub heading_detector: HeadingDetector,

    /// How repeated section headings resolve.
    pub duplicate_headings: DuplicateHeadings,

    /// How many leading lines to scan for a PERSON entity.
    pub name_scan_lines: usize,

    /// What to return when no PERSON entity is found.
    pub name_fallback: NameFallback,

    /// Strip interior whitespace from phone matches.
    pub strip_phone_whitespace: bool,

    /// Canonicalization of matched skill names.
    pub canonical_form: CanonicalForm,

    /// Render resolution for pages that fall back to OCR.
    pub dpi: u32,

    /// Process folder documents on the rayon pool.
    pub parallel: bool,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading detection strategy.
    pub fn with_heading_detector(mut self, detector: HeadingDetector) -> Self {
        self.heading_detector = detector;
        self
    }

    /// Set the duplicate-heading policy.
    pub fn with_duplicate_headings(mut self, policy: DuplicateHeadings) -> Self {
        self.duplicate_headings = policy;
        self
    }

    /// Set the name scan depth.
    pub fn with_name_scan_lines(mut self, lines: usize) -> Self {
        self.name_scan_lines = lines;
        self
    }

    /// Set the name fallback policy.
    pub fn with_name_fallback(mut self, fallback: NameFallback) -> Self {
        self.name_fallback = fallback;
        self
    }

    /// Keep phone matches exactly as found.
    pub fn keep_phone_whitespace(mut self) -> Self {
        self.strip_phone_whitespace = false;
        self
    }

    /// Set the skill canonicalization form.
    pub fn with_canonical_form(mut self, form: CanonicalForm) -> Self {
        self.canonical_form = form;
        self
    }

    /// Set the OCR fallback render resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Enable or disable the parallel folder pass.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            heading_detector: HeadingDetector::UppercaseLine,
            duplicate_headings: DuplicateHeadings::KeepLast,
            name_scan_lines: DEFAULT_NAME_SCAN_LINES,
            name_fallback: NameFallback::FirstLine,
            strip_phone_whitespace: true,
            canonical_form: CanonicalForm::Preserve,
            dpi: DEFAULT_RENDER_DPI,
            parallel: false,
        }
    }
}

/// The result of processing one document in a folder pass.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// The document's file name.
    pub file_name: String,
    /// The record, or the error that aborted this document.
    pub result: Result<ResumeRecord>,
}

impl DocumentOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// One failed document in a folder pass.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    pub file_name: String,
    pub error: String,
}

/// Aggregate result of a folder pass.
///
/// One document's failure never aborts the pass; it is recorded here
/// instead.
#[derive(Debug, Default)]
pub struct FolderReport {
    /// Successfully parsed records, keyed by file name.
    pub records: BTreeMap<String, ResumeRecord>,
    /// Documents that failed, in processing order.
    pub failures: Vec<DocumentFailure>,
}

impl FolderReport {
    pub fn success_count(&self) -> usize {
        self.records.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// True when every document parsed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Serialize the records map (file name → record) as one JSON
    /// document.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.records)?
        } else {
            serde_json::to_string(&self.records)?
        };
        Ok(json)
    }

    fn absorb(&mut self, outcome: DocumentOutcome) {
        match outcome.result {
            Ok(record) => {
                self.records.insert(outcome.file_name, record);
            }
            Err(err) => {
                log::warn!("failed to parse {}: {}", outcome.file_name, err);
                self.failures.push(DocumentFailure {
                    file_name: outcome.file_name,
                    error: err.to_string(),
                });
            }
        }
    }
}

/// List the files in a folder with supported extensions, sorted by file
/// name.
pub fn list_supported_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && detect::has_supported_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

/// The immutable parsing context.
///
/// Options, collaborators and the optional skill index are fixed at
/// construction; all parsing methods take `&self` and keep every piece of
/// per-document state local, so one parser can serve a parallel folder
/// pass.
pub struct ResumeParser {
    options: ParserOptions,
    segmenter: Segmenter,
    recovery: TextRecovery,
    tagger: Box<dyn NerTagger>,
    skills: Option<SkillIndex>,
}

impl ResumeParser {
    /// A parser with default options, default recovery adapters, the
    /// heuristic name tagger and no skill index.
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Self {
        let segmenter = Segmenter::new(
            options.heading_detector.clone(),
            options.duplicate_headings,
        );
        let recovery = TextRecovery::new().with_dpi(options.dpi);
        Self {
            options,
            segmenter,
            recovery,
            tagger: Box::new(HeuristicNameTagger),
            skills: None,
        }
    }

    /// Attach a prebuilt skill index. Without one, the skills field stays
    /// empty.
    pub fn with_skill_index(mut self, index: SkillIndex) -> Self {
        self.skills = Some(index);
        self
    }

    /// Replace the text recovery stage (collaborator adapters, DPI).
    pub fn with_recovery(mut self, recovery: TextRecovery) -> Self {
        self.recovery = recovery;
        self
    }

    /// Replace the named-entity tagger.
    pub fn with_tagger(mut self, tagger: Box<dyn NerTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse one document into a record.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ResumeRecord> {
        let doc = SourceDocument::open(path)?;
        let raw = self.recovery.recover(&doc)?;
        self.assemble(normalize(&raw))
    }

    /// Parse already-recovered text into a record.
    pub fn parse_text(&self, text: &str) -> Result<ResumeRecord> {
        self.assemble(normalize(text))
    }

    /// Recover and normalize a document's text without extracting fields.
    pub fn recover_text<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let doc = SourceDocument::open(path)?;
        let raw = self.recovery.recover(&doc)?;
        Ok(normalize(&raw))
    }

    /// Parse every supported file in a folder, isolating per-document
    /// failures into the report.
    ///
    /// # Errors
    ///
    /// Only folder-level I/O errors (unreadable directory) are returned;
    /// a failing document becomes a [`DocumentFailure`] entry.
    pub fn parse_folder<P: AsRef<Path>>(&self, dir: P) -> Result<FolderReport> {
        self.parse_folder_with(dir, |_| {})
    }

    /// Like [`parse_folder`](Self::parse_folder), invoking `on_outcome`
    /// after each document. With the parallel option enabled, documents
    /// are processed on the rayon pool but the callback still runs on the
    /// calling thread, one outcome at a time.
    pub fn parse_folder_with<P, F>(&self, dir: P, mut on_outcome: F) -> Result<FolderReport>
    where
        P: AsRef<Path>,
        F: FnMut(&DocumentOutcome),
    {
        let files = list_supported_files(dir)?;
        let mut report = FolderReport::default();

        if self.options.parallel {
            let (tx, rx) = crossbeam_channel::unbounded();
            rayon::in_place_scope(|scope| {
                for path in &files {
                    let tx = tx.clone();
                    scope.spawn(move |_| {
                        let outcome = self.document_outcome(path);
                        // The receiver outlives every sender inside this
                        // scope; a send can only fail after it drained.
                        let _ = tx.send(outcome);
                    });
                }
                drop(tx);
                for outcome in rx.iter() {
                    on_outcome(&outcome);
                    report.absorb(outcome);
                }
            });
        } else {
            for path in &files {
                let outcome = self.document_outcome(path);
                on_outcome(&outcome);
                report.absorb(outcome);
            }
        }

        Ok(report)
    }

    fn document_outcome(&self, path: &Path) -> DocumentOutcome {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        DocumentOutcome {
            file_name,
            result: self.parse_file(path),
        }
    }

    fn assemble(&self, text: String) -> Result<ResumeRecord> {
        let name = extract_name(
            &text,
            self.tagger.as_ref(),
            self.options.name_scan_lines,
            self.options.name_fallback,
        )?;
        let contacts = extract_contacts(&text, self.options.strip_phone_whitespace);
        let links = extract_links(&text);
        let skills = match &self.skills {
            Some(index) => index.match_text(&text, self.options.canonical_form)?,
            None => Default::default(),
        };

        let sections = self.segmenter.segment(&text);
        let experience = parse_experience(sections.get("EXPERIENCE").unwrap_or(""));
        let education = parse_education(sections.get("EDUCATION").unwrap_or(""));

        Ok(ResumeRecord {
            name,
            contacts,
            links,
            skills,
            experience,
            education,
            raw_text: text,
        })
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}
