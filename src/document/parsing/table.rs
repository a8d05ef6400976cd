//! Table extraction
//!
//! Rows are expanded to one cell per grid column: a cell spanning several
//! columns appears once per column, and a vertical-merge continuation cell is
//! replaced by the cell that starts the merge. Only the paragraphs sitting
//! directly in a cell are kept; nested tables are not descended into.

use super::super::models::*;
use super::formatting::{debug_value, extract_paragraph};

/// Vertical merge state of a `w:tc`
#[derive(Debug, Clone, Copy, PartialEq)]
enum VerticalMerge {
    None,
    Restart,
    Continue,
}

/// Extract a table grid from a docx-rs Table
pub(crate) fn extract_table(table: &docx_rs::Table) -> Table {
    let mut rows = Vec::new();
    let mut previous_row: Vec<TableCell> = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells: Vec<TableCell> = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            let (span, merge) = cell_layout(cell);

            let resolved = match merge {
                // The cell above already resolves to the top of the merge
                VerticalMerge::Continue => previous_row
                    .get(cells.len())
                    .cloned()
                    .unwrap_or_else(|| extract_cell(cell)),
                VerticalMerge::None | VerticalMerge::Restart => extract_cell(cell),
            };

            for _ in 0..span {
                cells.push(resolved.clone());
            }
        }

        previous_row = cells.clone();
        rows.push(TableRow { cells });
    }

    Table { rows }
}

fn extract_cell(cell: &docx_rs::TableCell) -> TableCell {
    let mut paragraphs = Vec::new();

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            paragraphs.push(extract_paragraph(para));
        }
    }

    TableCell { paragraphs }
}

/// Grid span and vertical merge of a cell.
///
/// Cell properties are private in docx-rs, so both are read back out of the
/// Debug representation.
fn cell_layout(cell: &docx_rs::TableCell) -> (usize, VerticalMerge) {
    let property_debug = format!("{:?}", cell.property);

    let span = debug_value(&property_debug, "GridSpan { val: ")
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);

    let merge = match debug_value(&property_debug, "VMerge { val: ") {
        Some("Restart") => VerticalMerge::Restart,
        Some("Continue") => VerticalMerge::Continue,
        _ => VerticalMerge::None,
    };

    (span, merge)
}
