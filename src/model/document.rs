//! Input document types.

use crate::detect;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Media kind of an input document.
///
/// Closed variant: all branching on document media is a `match` on this enum,
/// decided once at [`SourceDocument::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A PDF document with a (possibly partial) native text layer.
    Pdf,
    /// A raster image of a document; text must come from OCR.
    Image,
}

/// One input file, read once and discarded after text recovery.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: PathBuf,
    kind: DocumentKind,
}

impl SourceDocument {
    /// Open a document, detecting its kind from magic bytes with an
    /// extension fallback.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedFormat`] when the file is neither
    /// a PDF nor a supported image.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let kind = detect::detect_kind(&path)?;
        Ok(Self { path, kind })
    }

    /// Path to the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detected media kind.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The file name component, lossily converted.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_detects_kind() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("resume.pdf");
        std::fs::write(&pdf, b"%PDF-1.5\n").unwrap();

        let doc = SourceDocument::open(&pdf).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Pdf);
        assert_eq!(doc.file_name(), "resume.pdf");
    }

    #[test]
    fn test_open_rejects_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("resume.txt");
        std::fs::write(&txt, "hello").unwrap();
        assert!(SourceDocument::open(&txt).is_err());
    }
}
