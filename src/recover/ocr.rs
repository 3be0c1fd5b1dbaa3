//! OCR via the tesseract command-line tool.

use super::OcrEngine;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// [`OcrEngine`] that shells out to `tesseract`.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: String,
    lang: String,
}

impl TesseractOcr {
    pub fn new() -> Self {
        Self {
            binary: "tesseract".to_string(),
            lang: "eng".to_string(),
        }
    }

    /// Use a specific `tesseract` binary instead of the one on `PATH`.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the recognition language (tesseract `-l` flag).
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &Path) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .output()
            .map_err(|e| {
                Error::Ocr(format!(
                    "failed to invoke {}; is tesseract installed? ({})",
                    self.binary, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr(format!(
                "{} failed with status {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
