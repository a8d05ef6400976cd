//! Text and highlight extraction from docx-rs paragraphs and runs

use super::super::models::*;

/// Convert a docx-rs paragraph into our paragraph model
pub(crate) fn extract_paragraph(para: &docx_rs::Paragraph) -> Paragraph {
    let mut paragraph = Paragraph::default();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                paragraph.runs.push(TextRun {
                    text: extract_run_text(run),
                    highlight: extract_run_highlight(run),
                });
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                let text = nested_children_text(&link.children);
                if !text.is_empty() {
                    paragraph.extra_text.push((paragraph.runs.len(), text));
                }
            }
            _ => {
                // Tracked insertions/deletions and bookmarks are not paragraph text
            }
        }
    }

    paragraph
}

fn nested_children_text(children: &[docx_rs::ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            text.push_str(&extract_run_text(run));
        }
    }
    text
}

/// Extract text from a run: text nodes, tabs as `\t`, line breaks as `\n`.
/// Page and column breaks contribute nothing.
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(br) => {
                if is_line_break(br) {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }

    text
}

/// Highlight colour of a run, if it carries any highlight at all.
///
/// `Highlight` keeps its value private, so it is read back out of the Debug
/// representation. An unreadable value still counts as highlighted.
pub(crate) fn extract_run_highlight(run: &docx_rs::Run) -> Option<String> {
    let highlight = run.run_property.highlight.as_ref()?;

    let highlight_debug = format!("{highlight:?}");
    let color = debug_value(&highlight_debug, "val: ").map(str::to_string);

    Some(color.unwrap_or_default())
}

/// True for `textWrapping` (or untyped) breaks, false for page and column breaks
fn is_line_break(br: &docx_rs::Break) -> bool {
    // BreakType is private on Break; read it back from Debug output
    let break_debug = format!("{br:?}");
    !matches!(
        debug_value(&break_debug, "break_type: "),
        Some("Page") | Some("Column")
    )
}

/// Read the value following `marker` in a Debug string.
///
/// Quoted values are returned without their quotes; bare values (numbers,
/// enum variants) run until the first non-alphanumeric character.
pub(crate) fn debug_value<'a>(debug: &'a str, marker: &str) -> Option<&'a str> {
    let start = debug.find(marker)? + marker.len();
    let rest = &debug[start..];

    if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        return Some(&quoted[..end]);
    }

    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_text_with_tab_and_break() {
        let run = docx_rs::Run::new()
            .add_text("left")
            .add_tab()
            .add_text("right")
            .add_break(docx_rs::BreakType::TextWrapping)
            .add_text("below");
        assert_eq!(extract_run_text(&run), "left\tright\nbelow");
    }

    #[test]
    fn test_page_and_column_breaks_are_dropped() {
        let run = docx_rs::Run::new()
            .add_text("A")
            .add_break(docx_rs::BreakType::Page)
            .add_text("B")
            .add_break(docx_rs::BreakType::Column)
            .add_text("C");
        assert_eq!(extract_run_text(&run), "ABC");
    }

    #[test]
    fn test_debug_value() {
        assert_eq!(debug_value("Highlight { val: \"yellow\" }", "val: "), Some("yellow"));
        assert_eq!(debug_value("GridSpan { val: 3 }", "GridSpan { val: "), Some("3"));
        assert_eq!(debug_value("Break { break_type: Page }", "break_type: "), Some("Page"));
        assert_eq!(debug_value("Break { }", "break_type: "), None);
    }

    #[test]
    fn test_highlight_colour_is_read() {
        let run = docx_rs::Run::new().add_text("marked").highlight("yellow");
        assert_eq!(extract_run_highlight(&run), Some("yellow".to_string()));

        let plain = docx_rs::Run::new().add_text("plain");
        assert_eq!(extract_run_highlight(&plain), None);
    }

    #[test]
    fn test_paragraph_runs_and_highlights() {
        let para = docx_rs::Paragraph::new()
            .add_run(docx_rs::Run::new().add_text("Hello "))
            .add_run(docx_rs::Run::new().add_text("world").highlight("green"));

        let paragraph = extract_paragraph(&para);
        assert_eq!(paragraph.runs.len(), 2);
        assert_eq!(paragraph.text(), "Hello world");
        assert!(!paragraph.runs[0].is_highlighted());
        assert_eq!(paragraph.runs[1].highlight.as_deref(), Some("green"));
    }

    #[test]
    fn test_tracked_insertion_is_not_paragraph_text() {
        let para = docx_rs::Paragraph::new()
            .add_run(docx_rs::Run::new().add_text("Kept"))
            .add_insert(docx_rs::Insert::new(docx_rs::Run::new().add_text(" inserted")));

        let paragraph = extract_paragraph(&para);
        assert_eq!(paragraph.text(), "Kept");
        assert_eq!(paragraph.runs.len(), 1);
    }
}
