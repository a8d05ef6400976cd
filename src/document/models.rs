//! Core data structures for document representation
//!
//! A loaded document keeps only what text extraction needs: body paragraphs
//! and tables, each paragraph broken into runs with their highlight colour.

use serde::{Deserialize, Serialize};

use super::cleanup::normalize_whitespace;

/// Separator placed between paragraphs before whitespace cleanup
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Top-level body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
    /// Top-level tables in document order
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    /// Text contributed by hyperlinks and tracked insertions. It belongs to
    /// the paragraph text but not to its runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_text: Vec<(usize, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    /// Highlight colour name (`yellow`, `green`, ...) when the run is highlighted
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: None,
        }
    }

    pub fn highlighted(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: Some(color.into()),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_some()
    }
}

impl Paragraph {
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            extra_text: Vec::new(),
        }
    }

    /// Full paragraph text: runs plus hyperlink/insertion text, in order
    pub fn text(&self) -> String {
        let mut text = String::new();
        let mut extras = self.extra_text.iter().peekable();

        for (index, run) in self.runs.iter().enumerate() {
            while let Some((_, extra)) = extras.next_if(|(pos, _)| *pos <= index) {
                text.push_str(extra);
            }
            text.push_str(&run.text);
        }
        for (_, extra) in extras {
            text.push_str(extra);
        }

        text
    }
}

impl TableCell {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }
}

impl DocumentContent {
    /// Every paragraph in extraction order: body first, then each table by
    /// row, cell and paragraph.
    pub fn paragraphs_in_order(&self) -> impl Iterator<Item = &Paragraph> {
        let table_paragraphs = self
            .tables
            .iter()
            .flat_map(|table| table.rows.iter())
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.paragraphs.iter());

        self.paragraphs.iter().chain(table_paragraphs)
    }

    /// Cleaned full text of the document.
    ///
    /// Stripped non-empty paragraph texts are joined with a blank line, then
    /// the whitespace cleanup passes run over the joined string.
    pub fn full_text(&self) -> String {
        let blocks: Vec<String> = self
            .paragraphs_in_order()
            .map(|paragraph| paragraph.text().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        normalize_whitespace(&blocks.join(PARAGRAPH_SEPARATOR))
    }

    /// Stripped text of each highlighted run, in extraction order.
    /// A highlighted run of pure whitespace yields an empty string.
    pub fn highlighted_spans(&self) -> Vec<String> {
        self.paragraphs_in_order()
            .flat_map(|paragraph| paragraph.runs.iter())
            .filter(|run| run.is_highlighted())
            .map(|run| run.text.trim().to_string())
            .collect()
    }
}
