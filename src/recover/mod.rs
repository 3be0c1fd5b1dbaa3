//! Text recovery: turning an input document into raw text.
//!
//! PDF documents use their native text layer page by page; any page whose
//! native text is blank (a scanned page) is rendered to an image and sent
//! through OCR instead. Image documents go straight to OCR.
//!
//! The external collaborators sit behind three traits so tests can stub
//! them and deployments can swap engines:
//!
//! - [`PdfTextSource`] — per-page native text of a PDF
//! - [`PageRenderer`] — rasterize one PDF page at a given DPI
//! - [`OcrEngine`] — transcribe an image file

mod ocr;
mod pdf;
mod render;

pub use ocr::TesseractOcr;
pub use pdf::PdfExtractSource;
pub use render::PdftoppmRenderer;

use crate::error::Result;
use crate::model::{DocumentKind, SourceDocument};
use std::path::{Path, PathBuf};

/// Default render resolution for pages that fall back to OCR.
pub const DEFAULT_RENDER_DPI: u32 = 300;

/// Per-page native text of a PDF document.
///
/// An empty (or whitespace-only) string for a page means the page has no
/// text layer and must be OCRed.
pub trait PdfTextSource: Send + Sync {
    /// Return the native text of every page, in page order.
    fn page_texts(&self, path: &Path) -> Result<Vec<String>>;
}

/// Rasterizes one PDF page to an image file.
pub trait PageRenderer: Send + Sync {
    /// Render `page_number` (1-based) of `pdf` at `dpi` into `out_dir`,
    /// returning the path of the written image.
    fn render_page(&self, pdf: &Path, page_number: usize, dpi: u32, out_dir: &Path)
        -> Result<PathBuf>;
}

/// Transcribes an image file to text.
pub trait OcrEngine: Send + Sync {
    /// Run OCR over the whole image.
    fn recognize(&self, image: &Path) -> Result<String>;
}

/// Recovers raw text from a [`SourceDocument`].
///
/// OCR calls are slow and blocking; they are never retried here and any
/// collaborator error propagates, aborting recovery for that document.
pub struct TextRecovery {
    pdf_text: Box<dyn PdfTextSource>,
    renderer: Box<dyn PageRenderer>,
    ocr: Box<dyn OcrEngine>,
    dpi: u32,
}

impl TextRecovery {
    /// Recovery with the default adapters: `pdf-extract` for native text,
    /// `pdftoppm` for page rendering, `tesseract` for OCR.
    pub fn new() -> Self {
        Self {
            pdf_text: Box::new(PdfExtractSource),
            renderer: Box::new(PdftoppmRenderer::new()),
            ocr: Box::new(TesseractOcr::new()),
            dpi: DEFAULT_RENDER_DPI,
        }
    }

    /// Replace the native PDF text source.
    pub fn with_pdf_text(mut self, source: Box<dyn PdfTextSource>) -> Self {
        self.pdf_text = source;
        self
    }

    /// Replace the page renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn PageRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the OCR engine.
    pub fn with_ocr(mut self, ocr: Box<dyn OcrEngine>) -> Self {
        self.ocr = ocr;
        self
    }

    /// Set the render resolution used for OCR fallback pages.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Recover the raw text of a document.
    ///
    /// When every PDF page has native text, the renderer and OCR engine are
    /// never invoked.
    pub fn recover(&self, doc: &SourceDocument) -> Result<String> {
        match doc.kind() {
            DocumentKind::Pdf => self.recover_pdf(doc.path()),
            DocumentKind::Image => self.ocr.recognize(doc.path()),
        }
    }

    fn recover_pdf(&self, path: &Path) -> Result<String> {
        let pages = self.pdf_text.page_texts(path)?;
        // Scratch dir for rendered pages, created only if a page needs OCR.
        let mut scratch: Option<tempfile::TempDir> = None;
        let mut out = Vec::with_capacity(pages.len());

        for (idx, page_text) in pages.iter().enumerate() {
            if !page_text.trim().is_empty() {
                out.push(page_text.clone());
                continue;
            }
            let page_number = idx + 1;
            log::debug!("page {} of {} has no text layer, falling back to OCR", page_number, path.display());
            let dir = match &scratch {
                Some(dir) => dir.path().to_path_buf(),
                None => {
                    let dir = tempfile::tempdir()?;
                    let p = dir.path().to_path_buf();
                    scratch = Some(dir);
                    p
                }
            };
            let image = self.renderer.render_page(path, page_number, self.dpi, &dir)?;
            out.push(self.ocr.recognize(&image)?);
        }

        Ok(out.join("\n").trim().to_string())
    }
}

impl Default for TextRecovery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceDocument;

    struct FixedPages(Vec<String>);

    impl PdfTextSource for FixedPages {
        fn page_texts(&self, _path: &Path) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct PanicRenderer;

    impl PageRenderer for PanicRenderer {
        fn render_page(&self, _: &Path, _: usize, _: u32, _: &Path) -> Result<PathBuf> {
            panic!("renderer must not be invoked when native text is present");
        }
    }

    struct PanicOcr;

    impl OcrEngine for PanicOcr {
        fn recognize(&self, _: &Path) -> Result<String> {
            panic!("OCR must not be invoked when native text is present");
        }
    }

    struct FixedOcr(String);

    impl OcrEngine for FixedOcr {
        fn recognize(&self, _: &Path) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct CopyRenderer;

    impl PageRenderer for CopyRenderer {
        fn render_page(&self, _: &Path, page: usize, _: u32, out_dir: &Path) -> Result<PathBuf> {
            let out = out_dir.join(format!("page-{}.png", page));
            std::fs::write(&out, b"fake image")?;
            Ok(out)
        }
    }

    fn pdf_fixture(dir: &tempfile::TempDir) -> SourceDocument {
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, b"%PDF-1.4\n").unwrap();
        SourceDocument::open(&path).unwrap()
    }

    #[test]
    fn test_native_text_never_invokes_ocr() {
        let dir = tempfile::tempdir().unwrap();
        let doc = pdf_fixture(&dir);
        let recovery = TextRecovery::new()
            .with_pdf_text(Box::new(FixedPages(vec![
                "Page one".to_string(),
                "Page two".to_string(),
            ])))
            .with_renderer(Box::new(PanicRenderer))
            .with_ocr(Box::new(PanicOcr));

        let text = recovery.recover(&doc).unwrap();
        assert_eq!(text, "Page one\nPage two");
    }

    #[test]
    fn test_blank_page_falls_back_to_ocr() {
        let dir = tempfile::tempdir().unwrap();
        let doc = pdf_fixture(&dir);
        let recovery = TextRecovery::new()
            .with_pdf_text(Box::new(FixedPages(vec![
                "Native page".to_string(),
                "   ".to_string(),
            ])))
            .with_renderer(Box::new(CopyRenderer))
            .with_ocr(Box::new(FixedOcr("Scanned page".to_string())));

        let text = recovery.recover(&doc).unwrap();
        assert_eq!(text, "Native page\nScanned page");
    }

    #[test]
    fn test_image_document_goes_straight_to_ocr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
        let doc = SourceDocument::open(&path).unwrap();

        let recovery = TextRecovery::new()
            .with_pdf_text(Box::new(FixedPages(vec![])))
            .with_renderer(Box::new(PanicRenderer))
            .with_ocr(Box::new(FixedOcr("JANE DOE\nEngineer".to_string())));

        assert_eq!(recovery.recover(&doc).unwrap(), "JANE DOE\nEngineer");
    }
}
