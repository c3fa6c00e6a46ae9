//! Text extraction engines for PDF documents.
//!
//! Two independent engines live here: [`direct`] pulls the embedded text
//! layer out of a PDF with poppler's pdftotext, and [`ocr`] renders pages
//! to images and recognizes them with Tesseract. They do not call each
//! other and keep separate output conventions; they share only the error
//! type and the subprocess plumbing in this module.

pub mod direct;
pub mod ocr;
pub mod tools;

use std::process::Output;

use thiserror::Error;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle command output, extracting stdout on success or returning appropriate error.
pub(crate) fn handle_cmd_output(
    result: std::io::Result<Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<String, ExtractionError> {
    match result {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractionError::ExtractionFailed(format!(
                    "{}: {}",
                    error_prefix,
                    stderr.trim()
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractionError::ToolNotFound(tool_name.to_string()))
        }
        Err(e) => Err(ExtractionError::Io(e)),
    }
}

/// Check command output for success, discarding stdout.
pub(crate) fn check_cmd_output(
    result: std::io::Result<Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<(), ExtractionError> {
    handle_cmd_output(result, tool_name, error_prefix).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractionError::ToolNotFound("pdftotext (install poppler-utils)".to_string());
        assert_eq!(
            err.to_string(),
            "External tool not found: pdftotext (install poppler-utils)"
        );

        let err = ExtractionError::ExtractionFailed("pdfinfo failed: bad xref".to_string());
        assert_eq!(err.to_string(), "Extraction failed: pdfinfo failed: bad xref");
    }

    #[test]
    fn test_handle_cmd_output_not_found() {
        let result = std::process::Command::new("definitely-not-a-real-tool-xyz").output();
        let err = handle_cmd_output(result, "definitely-not-a-real-tool-xyz", "failed")
            .expect_err("spawn should fail");
        assert!(matches!(err, ExtractionError::ToolNotFound(_)));
    }

    #[test]
    fn test_handle_cmd_output_nonzero_exit() {
        // `false` exits 1 with no output, which must surface as ExtractionFailed.
        let result = std::process::Command::new("false").output();
        if result.is_ok() {
            let err = handle_cmd_output(result, "false", "false failed")
                .expect_err("non-zero exit should fail");
            assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
        }
    }
}
