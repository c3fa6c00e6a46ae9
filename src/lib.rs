//! pdftext - PDF text extraction toolkit.
//!
//! Two independent command-line extractors share this library: `pdftext`
//! reads the embedded text layer through poppler's pdftotext, and
//! `pdfocr` renders pages and recognizes them with Tesseract. The library
//! also carries the configuration layer and a keyword classifier for the
//! extracted text.

pub mod classify;
pub mod config;
pub mod extract;
pub mod logging;

pub use extract::{ocr::OcrExtractor, ExtractionError};
