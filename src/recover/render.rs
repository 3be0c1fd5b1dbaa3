//! PDF page rasterization via the poppler `pdftoppm` tool.

use super::PageRenderer;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// [`PageRenderer`] that shells out to `pdftoppm`.
#[derive(Debug, Clone)]
pub struct PdftoppmRenderer {
    binary: String,
}

impl PdftoppmRenderer {
    pub fn new() -> Self {
        Self {
            binary: "pdftoppm".to_string(),
        }
    }

    /// Use a specific `pdftoppm` binary instead of the one on `PATH`.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl Default for PdftoppmRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for PdftoppmRenderer {
    fn render_page(
        &self,
        pdf: &Path,
        page_number: usize,
        dpi: u32,
        out_dir: &Path,
    ) -> Result<PathBuf> {
        let prefix = out_dir.join(format!("page_{:03}", page_number));
        let prefix_str = prefix
            .to_str()
            .ok_or_else(|| Error::PageRender("non-UTF8 output path not supported".to_string()))?;

        // -singlefile makes the output name exactly <prefix>.png
        let status = Command::new(&self.binary)
            .arg("-png")
            .arg("-r")
            .arg(dpi.to_string())
            .arg("-f")
            .arg(page_number.to_string())
            .arg("-l")
            .arg(page_number.to_string())
            .arg("-singlefile")
            .arg(pdf)
            .arg(prefix_str)
            .status()
            .map_err(|e| {
                Error::PageRender(format!(
                    "failed to invoke {}; is poppler-utils installed? ({})",
                    self.binary, e
                ))
            })?;

        if !status.success() {
            return Err(Error::PageRender(format!(
                "{} failed with status {}",
                self.binary, status
            )));
        }

        let image_path = PathBuf::from(format!("{}.png", prefix_str));
        if !image_path.exists() {
            return Err(Error::PageRender(format!(
                "expected rendered image not found: {}",
                image_path.display()
            )));
        }

        Ok(image_path)
    }
}
