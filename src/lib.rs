//! docsift: pull text out of Word documents
//!
//! This library finds .docx files under a folder, extracts their text
//! (tables included) or their highlighted runs, and can forward text to a
//! chat completion API.

pub mod collect;
pub mod config;
pub mod document;
pub mod error;
pub mod llm;

/// Output format options for the CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// One item per line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// Re-export commonly used types
pub use collect::collect_docx_paths;
pub use config::{ApiConfig, Config};
pub use document::{extract_all_text, extract_highlighted_text, DocumentContent};
pub use error::{Error, Result};
pub use llm::{call_chat_completion, ChatClient};
