//! OCR-based text extraction.
//!
//! Renders every page of a PDF to a PNG with pdftoppm, then runs
//! Tesseract over the images in page order. The rendered images are
//! intermediate artifacts only; they live in a temporary directory that
//! is removed when extraction finishes.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::config::{Settings, DEFAULT_TESSERACT_CMD};

use super::{check_cmd_output, handle_cmd_output, ExtractionError};

/// Render resolution for page images, in DPI.
const RENDER_DPI: &str = "300";

/// Default Tesseract language.
const DEFAULT_LANGUAGE: &str = "eng";

/// OCR text extractor driving pdftoppm and Tesseract.
pub struct OcrExtractor {
    /// Command used to invoke Tesseract.
    tesseract_cmd: String,
    /// Tesseract language setting.
    language: String,
}

impl Default for OcrExtractor {
    fn default() -> Self {
        Self {
            tesseract_cmd: DEFAULT_TESSERACT_CMD.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl OcrExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor using the configured Tesseract command.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            tesseract_cmd: settings.tesseract_cmd.clone(),
            ..Self::default()
        }
    }

    /// Set the Tesseract language.
    pub fn with_language(mut self, lang: &str) -> Self {
        self.language = lang.to_string();
        self
    }

    /// OCR every page of a PDF.
    ///
    /// Each page's recognized text is appended followed by one newline,
    /// and the final concatenation is trimmed. Any failure at any stage
    /// aborts the run: no pages are skipped and no partial text is
    /// returned.
    pub fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let temp_dir = TempDir::new()?;
        let temp_path = temp_dir.path();

        self.render_pages(path, temp_path)?;

        let images = collect_page_images(temp_path)?;
        if images.is_empty() {
            return Err(ExtractionError::ExtractionFailed(
                "No images generated from PDF".to_string(),
            ));
        }
        tracing::debug!(
            "Rendered {} page images from {}",
            images.len(),
            path.display()
        );

        let mut all_text = String::new();
        for image_path in &images {
            all_text.push_str(&self.run_tesseract(image_path)?);
            all_text.push('\n');
        }

        Ok(all_text.trim().to_string())
    }

    /// Convert every page of the PDF to a PNG under `out_dir`.
    fn render_pages(&self, path: &Path, out_dir: &Path) -> Result<(), ExtractionError> {
        let output = Command::new("pdftoppm")
            .args(["-png", "-r", RENDER_DPI])
            .arg(path)
            .arg(out_dir.join("page"))
            .output();

        check_cmd_output(
            output,
            "pdftoppm (install poppler-utils)",
            "pdftoppm failed to convert PDF",
        )
    }

    /// Run Tesseract OCR on an image.
    fn run_tesseract(&self, image_path: &Path) -> Result<String, ExtractionError> {
        let output = Command::new(&self.tesseract_cmd)
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        handle_cmd_output(
            output,
            &format!("{} (install tesseract-ocr)", self.tesseract_cmd),
            "tesseract failed",
        )
    }
}

/// Collect the rendered page images in page order.
///
/// pdftoppm zero-pads page numbers to a uniform width within a run
/// (page-1.png, or page-01.png through page-12.png), so sorting by file
/// name yields the page order.
fn collect_page_images(dir: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
    let mut images: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "png")
                .unwrap_or(false)
        })
        .map(|e| e.path())
        .collect();

    images.sort();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_page_images_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["page-10.png", "page-02.png", "notes.txt", "page-01.png"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let images = collect_page_images(dir.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["page-01.png", "page-02.png", "page-10.png"]);
    }

    #[test]
    fn test_with_language() {
        let extractor = OcrExtractor::new().with_language("deu");
        assert_eq!(extractor.language, "deu");
        assert_eq!(extractor.tesseract_cmd, DEFAULT_TESSERACT_CMD);
    }

    #[test]
    fn test_extract_nonexistent_path() {
        // Fails whether or not the tools are installed: either pdftoppm is
        // missing or it exits non-zero on the missing file.
        let result = OcrExtractor::new().extract(Path::new("/nonexistent/no-such-file.pdf"));
        assert!(result.is_err());
    }
}
