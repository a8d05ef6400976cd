//! Recursive discovery of `.docx` files
//!
//! Walks a folder tree and returns every Word document found, skipping the
//! `~$` lock files Word leaves next to documents that are open in an editor.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

/// Prefix Word gives to its owner/lock files
pub const LOCK_FILE_PREFIX: &str = "~$";

const DOCX_SUFFIX: &str = ".docx";

/// Collect the paths of all `.docx` files below `root`, in traversal order.
///
/// Matching on the suffix is case-insensitive (`REPORT.DOCX` is collected).
/// Lock files are dropped. Returned paths are `root` joined with the relative
/// path of each file, so they are absolute only when `root` is.
pub fn collect_docx_paths(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut paths = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }
        // Symlinks to directories are not descended into or returned;
        // links to files, and dangling links, count as files
        if entry.file_type().is_symlink() && entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !has_docx_suffix(&name) {
            continue;
        }
        if is_lock_file(&name) {
            tracing::debug!("Skipping lock file {}", entry.path().display());
            continue;
        }

        tracing::debug!("Found document {}", entry.path().display());
        paths.push(entry.into_path());
    }

    tracing::info!("Collected {} .docx files under {}", paths.len(), root.display());
    Ok(paths)
}

/// True when a file name ends in `.docx`, ignoring case
pub fn has_docx_suffix(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(DOCX_SUFFIX)
}

/// True for editor lock files such as `~$report.docx`
pub fn is_lock_file(file_name: &str) -> bool {
    file_name.starts_with(LOCK_FILE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_is_case_insensitive() {
        assert!(has_docx_suffix("report.docx"));
        assert!(has_docx_suffix("REPORT.DOCX"));
        assert!(has_docx_suffix("Mixed.DocX"));
        assert!(!has_docx_suffix("report.doc"));
        assert!(!has_docx_suffix("report.docx.bak"));
        assert!(!has_docx_suffix("docx"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir(root.join("real.docx")).unwrap();
        std::os::unix::fs::symlink(root.join("missing-target"), root.join("dangling.docx"))
            .unwrap();
        std::os::unix::fs::symlink(root.join("real.docx"), root.join("dir-link.docx")).unwrap();

        let collected = collect_docx_paths(root).unwrap();
        assert_eq!(collected, vec![root.join("dangling.docx")]);
    }

    #[test]
    fn test_lock_file_detection() {
        assert!(is_lock_file("~$report.docx"));
        assert!(!is_lock_file("report~$.docx"));
        assert!(!is_lock_file("~report.docx"));
    }
}
