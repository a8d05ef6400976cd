//! Text extraction entry points
//!
//! Each function opens the document afresh; nothing is cached between calls.

use std::path::Path;

use super::loader::load_document;
use crate::error::Result;

/// Extract all text of a .docx file, tables included, as one cleaned string.
///
/// Body paragraphs come first and table cells after them, row by row.
/// Returns an empty string for a document with no text.
pub fn extract_all_text(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    let text = load_document(file_path)?.full_text();

    tracing::info!(
        "Extracted {} characters from {}",
        text.chars().count(),
        file_path.display()
    );
    Ok(text)
}

/// Extract the stripped text of every highlighted run of a .docx file,
/// body paragraphs first and table cells after them.
pub fn extract_highlighted_text(file_path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file_path = file_path.as_ref();
    let spans = load_document(file_path)?.highlighted_spans();

    tracing::info!(
        "Found {} highlighted runs in {}",
        spans.len(),
        file_path.display()
    );
    Ok(spans)
}
