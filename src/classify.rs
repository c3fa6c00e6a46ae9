//! Keyword-based document classification.
//!
//! Labels extracted text with a document type. Matching is a plain
//! case-insensitive substring scan; the first type with a matching
//! keyword wins, so the table order decides ties.

/// Document types and the keywords that identify them, in priority order.
pub const DOCUMENT_TYPES: &[(&str, &[&str])] = &[
    ("Permission Letter", &["Permission Letter"]),
    ("Offer Letter", &["Offer Letter"]),
    ("Completion Certificate", &["Completion Certificate"]),
    ("Student Feedback", &["Student Feedback"]),
    ("Employee Feedback", &["Employee Feedback"]),
    ("Internship Report", &["Internship Report"]),
    ("Resume", &["Resume", "Curriculum Vitae", "CV"]),
];

/// Fallback type when no keyword matches.
pub const UNKNOWN_DOCUMENT: &str = "Unknown Document";

/// Classify extracted text into a document type.
pub fn classify_document_type(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    for &(doc_type, keywords) in DOCUMENT_TYPES {
        if keywords.iter().any(|k| lower.contains(&k.to_lowercase())) {
            return doc_type;
        }
    }
    UNKNOWN_DOCUMENT
}
