//! Native PDF text layer via the `pdf-extract` crate.

use super::PdfTextSource;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// [`PdfTextSource`] backed by `pdf_extract`.
///
/// Pages without a text layer come back as empty strings, which is exactly
/// the blank-page signal [`super::TextRecovery`] keys its OCR fallback on.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractSource;

impl PdfTextSource for PdfExtractSource {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;
        Ok(pages)
    }
}
