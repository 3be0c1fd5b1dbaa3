//! Input format detection and extension filtering.

use crate::error::{Error, Result};
use crate::model::DocumentKind;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// File extensions accepted by the folder pass (lowercase, without dot).
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// PNG file signature.
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
/// JPEG start-of-image marker.
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Detect the document kind from leading file bytes.
///
/// Returns `None` when the bytes match none of the known signatures.
pub fn detect_kind_from_bytes(data: &[u8]) -> Option<DocumentKind> {
    if data.starts_with(PDF_MAGIC) {
        Some(DocumentKind::Pdf)
    } else if data.starts_with(PNG_MAGIC) || data.starts_with(JPEG_MAGIC) {
        Some(DocumentKind::Image)
    } else {
        None
    }
}

/// Detect the document kind from the file extension alone.
pub fn detect_kind_from_extension(path: &Path) -> Option<DocumentKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "pdf" => Some(DocumentKind::Pdf),
        "png" | "jpg" | "jpeg" => Some(DocumentKind::Image),
        _ => None,
    }
}

/// Detect the document kind of a file.
///
/// Magic bytes win when the file is readable; the extension is the fallback
/// for files too short to sniff or with unrecognized leading bytes.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] when neither the content nor the
/// extension identifies a supported format.
pub fn detect_kind<P: AsRef<Path>>(path: P) -> Result<DocumentKind> {
    let path = path.as_ref();
    let mut header = [0u8; 8];
    let sniffed = File::open(path).and_then(|mut f| f.read(&mut header)).ok();

    if let Some(n) = sniffed {
        if let Some(kind) = detect_kind_from_bytes(&header[..n]) {
            return Ok(kind);
        }
    }

    detect_kind_from_extension(path)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
}

/// Check whether a path carries one of the supported extensions.
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}
