//! Direct text extraction from the PDF text layer.
//!
//! Drives poppler's pdfinfo and pdftotext. Pages are extracted one at a
//! time in document order and concatenated exactly as the tool produced
//! them: no separator is inserted between pages and nothing is trimmed.

use std::path::Path;
use std::process::Command;

use super::{handle_cmd_output, ExtractionError};

/// Extract the text layer from every page of a PDF.
///
/// Any failure, including a single page failing, aborts the whole run;
/// there is no partial result. A zero-page document yields the empty
/// string.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let count = page_count(path)?;
    tracing::debug!("Extracting text from {} pages of {}", count, path.display());

    let mut text = String::new();
    for page in 1..=count {
        text.push_str(&extract_page(path, page)?);
    }
    Ok(text)
}

/// Get the page count of a PDF via pdfinfo.
pub fn page_count(path: &Path) -> Result<u32, ExtractionError> {
    let output = Command::new("pdfinfo").arg(path).output();
    let stdout = handle_cmd_output(output, "pdfinfo (install poppler-utils)", "pdfinfo failed")?;

    parse_page_count(&stdout).ok_or_else(|| {
        ExtractionError::ExtractionFailed(format!(
            "pdfinfo reported no page count for {}",
            path.display()
        ))
    })
}

/// Run pdftotext on a single page of a PDF file.
fn extract_page(path: &Path, page: u32) -> Result<String, ExtractionError> {
    let page_str = page.to_string();
    let output = Command::new("pdftotext")
        .args(["-layout", "-enc", "UTF-8", "-f", &page_str, "-l", &page_str])
        .arg(path)
        .arg("-") // Output to stdout
        .output();

    handle_cmd_output(
        output,
        "pdftotext (install poppler-utils)",
        &format!("pdftotext failed on page {}", page),
    )
}

/// Parse the `Pages:` line out of pdfinfo output.
fn parse_page_count(output: &str) -> Option<u32> {
    for line in output.lines() {
        if line.starts_with("Pages:") {
            return line.split_whitespace().nth(1).and_then(|s| s.parse().ok());
        }
    }
    None
}
