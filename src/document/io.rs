//! File I/O operations and validation
//!
//! Reads a document from disk and checks that it is a Word container before
//! handing the bytes to docx-rs.

use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Read a .docx file and parse it with docx-rs
pub(crate) fn open_docx(file_path: &Path) -> Result<docx_rs::Docx> {
    let file_data = std::fs::read(file_path).map_err(|err| Error::io(file_path, err))?;

    validate_docx_bytes(file_path, &file_data)?;

    docx_rs::read_docx(&file_data).map_err(|err| Error::document_format(file_path, err))
}

/// Validates that the bytes form a Word document container.
///
/// The file extension is not checked; only the ZIP structure is.
pub(crate) fn validate_docx_bytes(file_path: &Path, file_data: &[u8]) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(file_data)).map_err(|err| {
        Error::document_format(file_path, format!("not a ZIP container ({err})"))
    })?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(Error::document_format(
                file_path,
                "this appears to be an Excel workbook, not a Word document",
            ));
        }

        return Err(Error::document_format(
            file_path,
            "missing word/document.xml; the file may be corrupted",
        ));
    }

    Ok(())
}
