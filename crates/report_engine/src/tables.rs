//! Table and cell builders shared by every section
//!
//! Pure helpers that keep the styling conventions in one place: header and
//! category rows carry the theme highlight fill, data rows are unshaded,
//! and a table uses a single border policy throughout. The grid shaper and
//! the symbol/label splitter carry the invariants the sections rely on.

use report_doc::{Cell, Paragraph, ReportTheme, Row, Run};

/// A bold header cell with the theme highlight fill
pub fn header_cell(text: impl Into<String>, theme: &ReportTheme) -> Cell {
    Cell::from_paragraph(Paragraph::new().with_run(Run::bold(text)))
        .with_fill(theme.highlight_fill.clone())
}

/// A shaded header row from column labels
pub fn header_row(labels: &[&str], theme: &ReportTheme) -> Row {
    Row::header(labels.iter().map(|l| header_cell(*l, theme)).collect())
}

/// A full-width shaded category row spanning `columns` grid columns
pub fn category_row(text: impl Into<String>, columns: usize, theme: &ReportTheme) -> Row {
    Row::new(vec![header_cell(text, theme).with_span(columns)])
}

/// A two-cell row: bold label, plain value
pub fn label_value_row(label: impl Into<String>, value: impl Into<String>) -> Row {
    Row::new(vec![
        Cell::from_paragraph(Paragraph::new().with_run(Run::bold(label))),
        Cell::text(value),
    ])
}

/// An italic placeholder paragraph shown where an image could not be
/// resolved or a narrative value is unavailable
pub fn placeholder_paragraph(label: &str) -> Paragraph {
    Paragraph::new().with_run(Run::italic(format!("[{label} unavailable]")))
}

/// A cell holding one placeholder paragraph
pub fn placeholder_cell(label: &str) -> Cell {
    Cell::from_paragraph(placeholder_paragraph(label))
}

/// Split a legend entry at its first whitespace run into (symbol, label).
///
/// The symbol is everything before the first whitespace, the label is
/// everything after it with surrounding whitespace trimmed. A string with
/// no whitespace is all symbol.
pub fn split_symbol_label(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], input[at..].trim_start()),
        None => (input, ""),
    }
}

/// A paragraph rendering "symbol label": the symbol bold in the accent
/// color, the label in default style
pub fn symbol_paragraph(entry: &str, theme: &ReportTheme) -> Paragraph {
    let (symbol, label) = split_symbol_label(entry);
    let mut paragraph =
        Paragraph::new().with_run(Run::bold(symbol).with_color(theme.accent_color.clone()));
    if !label.is_empty() {
        paragraph.push_run(Run::new(format!(" {label}")));
    }
    paragraph
}

/// A cell holding one colored-symbol paragraph
pub fn symbol_cell(entry: &str, theme: &ReportTheme) -> Cell {
    Cell::from_paragraph(symbol_paragraph(entry, theme))
}

/// Chunk cells into rows of `width`, padding the final row with empty
/// cells so every row covers the same column count
pub fn grid_rows(cells: Vec<Cell>, width: usize) -> Vec<Row> {
    let width = width.max(1);
    let mut rows = Vec::with_capacity(cells.len().div_ceil(width));
    let mut iter = cells.into_iter().peekable();
    while iter.peek().is_some() {
        let mut row: Vec<Cell> = iter.by_ref().take(width).collect();
        while row.len() < width {
            row.push(Cell::empty());
        }
        rows.push(Row::new(row));
    }
    rows
}

/// Parse the leading numeric token of a cell's text, e.g. "45 min" -> 45.0.
/// `None` when the text does not start with a number.
pub fn leading_number(text: &str) -> Option<f64> {
    let re = regex_lite::Regex::new(r"^\s*(-?\d+(?:\.\d+)?)").ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Format a measurement: whole numbers without a decimal, otherwise one
/// decimal place
pub fn format_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

/// Equal column widths summing to 100 percent
pub fn even_widths(columns: usize) -> Vec<f32> {
    let columns = columns.max(1);
    vec![100.0 / columns as f32; columns]
}
