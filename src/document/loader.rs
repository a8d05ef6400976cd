//! Document loading
//!
//! Turns a .docx file into a [`DocumentContent`]: top-level paragraphs in
//! body order, followed by the top-level tables.

use std::path::Path;

use super::io::open_docx;
use super::models::*;
use super::parsing::formatting::extract_paragraph;
use super::parsing::table::extract_table;
use crate::error::Result;

/// Load the paragraphs and tables of a .docx file
pub fn load_document(file_path: impl AsRef<Path>) -> Result<DocumentContent> {
    let file_path = file_path.as_ref();
    let docx = open_docx(file_path)?;
    let content = content_from_docx(&docx.document);

    tracing::debug!(
        "Loaded {}: {} paragraphs, {} tables",
        file_path.display(),
        content.paragraphs.len(),
        content.tables.len()
    );

    Ok(content)
}

pub(crate) fn content_from_docx(document: &docx_rs::Document) -> DocumentContent {
    let mut content = DocumentContent::default();

    for child in &document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                content.paragraphs.push(extract_paragraph(para));
            }
            docx_rs::DocumentChild::Table(table) => {
                content.tables.push(extract_table(table));
            }
            _ => {
                // Content controls, section breaks and the like carry no body text
            }
        }
    }

    content
}
