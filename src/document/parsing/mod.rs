//! Conversion of docx-rs elements into the document model

pub(crate) mod formatting;
pub(crate) mod table;
