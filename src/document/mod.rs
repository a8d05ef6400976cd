//! Document loading and text extraction
//!
//! This module reads Microsoft Word (.docx) documents into a small
//! paragraph/table model and derives plain text and highlighted spans from it.

pub mod cleanup;
pub mod extract;
pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use extract::{extract_all_text, extract_highlighted_text};
pub use loader::load_document;
pub use models::*;
