//! Error types for the docsift library
//!
//! Every failure is propagated to the caller as-is: there are no retries and
//! no partial results. The binary wraps these in `anyhow` to attach context.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // ── Filesystem errors ────────────────────────────────────────────────
    /// Directory traversal failed (missing root, unreadable directory).
    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Document errors ──────────────────────────────────────────────────
    /// The file was read but is not a valid Word document container.
    #[error("Invalid .docx file '{path}': {detail}")]
    DocumentFormat { path: PathBuf, detail: String },

    // ── Network errors ───────────────────────────────────────────────────
    /// Transport failure or a non-success HTTP status from the API.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ── Configuration errors ─────────────────────────────────────────────
    #[error("Invalid configuration '{path}': {detail}")]
    Config { path: PathBuf, detail: String },
}

impl Error {
    /// HTTP status of a failed API call, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn document_format(path: impl Into<PathBuf>, detail: impl ToString) -> Self {
        Error::DocumentFormat {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}
