//! Table model - rectangular tables of rows and cells
//!
//! Every table carries a single border policy and a fixed column layout;
//! the section builders are responsible for keeping rows rectangular, and
//! `Table::is_rectangular` lets the assembler and tests verify it.

use crate::{ImageContent, Paragraph};
use serde::{Deserialize, Serialize};

/// Border treatment applied uniformly to one table, never mixed per cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderPolicy {
    /// No visible borders (identity grids, image strips)
    #[default]
    Borderless,
    /// Full single-line grid on every edge
    Grid,
    /// A single left-edge rule (the table of contents outline)
    LeftRule,
}

/// Block content a cell can hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellBlock {
    Paragraph(Paragraph),
    Image(ImageContent),
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Ordered block content (paragraphs and/or images)
    pub blocks: Vec<CellBlock>,
    /// Number of grid columns this cell spans (>= 1)
    pub span: usize,
    /// Shading fill as an RRGGBB hex string; unshaded when absent
    pub fill: Option<String>,
}

impl Cell {
    /// Create a cell holding one paragraph
    pub fn from_paragraph(paragraph: Paragraph) -> Self {
        Self {
            blocks: vec![CellBlock::Paragraph(paragraph)],
            span: 1,
            fill: None,
        }
    }

    /// Create a cell with one plain text paragraph
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_paragraph(Paragraph::text(text))
    }

    /// Create a cell holding one image
    pub fn image(image: ImageContent) -> Self {
        Self {
            blocks: vec![CellBlock::Image(image)],
            span: 1,
            fill: None,
        }
    }

    /// Create an empty cell (grid padding)
    pub fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            span: 1,
            fill: None,
        }
    }

    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Append another block to this cell
    pub fn push_block(&mut self, block: CellBlock) {
        self.blocks.push(block);
    }

    /// Check if this cell carries a shading fill
    pub fn is_shaded(&self) -> bool {
        self.fill.is_some()
    }

    /// Concatenated text of all paragraph blocks (images contribute nothing)
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if let CellBlock::Paragraph(p) = block {
                out.push_str(&p.plain_text());
            }
        }
        out
    }
}

/// A table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Header rows repeat across page breaks
    pub header: bool,
}

impl Row {
    /// Create a data row
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            header: false,
        }
    }

    /// Create a header row
    pub fn header(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            header: true,
        }
    }

    /// Total grid columns covered by this row's cells (spans included)
    pub fn span_count(&self) -> usize {
        self.cells.iter().map(|c| c.span).sum()
    }
}

/// A table with a fixed column layout and one border policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub policy: BorderPolicy,
    /// Column widths as percentages of the content width
    pub widths_pct: Vec<f32>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given border policy and columns
    pub fn new(policy: BorderPolicy, widths_pct: Vec<f32>) -> Self {
        Self {
            policy,
            widths_pct,
            rows: Vec::new(),
        }
    }

    /// Create a table with rows in place
    pub fn with_rows(policy: BorderPolicy, widths_pct: Vec<f32>, rows: Vec<Row>) -> Self {
        Self {
            policy,
            widths_pct,
            rows,
        }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of grid columns
    pub fn column_count(&self) -> usize {
        self.widths_pct.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check that every row covers exactly the table's column count
    pub fn is_rectangular(&self) -> bool {
        let columns = self.column_count();
        self.rows.iter().all(|row| row.span_count() == columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_with_spans() {
        let mut table = Table::new(BorderPolicy::Grid, vec![40.0, 30.0, 30.0]);
        table.push_row(Row::header(vec![
            Cell::text("a"),
            Cell::text("b"),
            Cell::text("c"),
        ]));
        table.push_row(Row::new(vec![Cell::text("category").with_span(3)]));
        assert!(table.is_rectangular());

        table.push_row(Row::new(vec![Cell::text("short")]));
        assert!(!table.is_rectangular());
    }

    #[test]
    fn test_cell_shading() {
        let cell = Cell::text("header").with_fill("D9E2F3");
        assert!(cell.is_shaded());
        assert!(!Cell::text("data").is_shaded());
    }

    #[test]
    fn test_cell_plain_text_skips_images() {
        let mut cell = Cell::text("caption");
        cell.push_block(CellBlock::Image(ImageContent::new(
            vec![0u8; 4],
            crate::ImageFormat::Png,
            10,
            10,
            "x",
        )));
        assert_eq!(cell.plain_text(), "caption");
    }

    #[test]
    fn test_span_is_at_least_one() {
        let cell = Cell::empty().with_span(0);
        assert_eq!(cell.span, 1);
    }

    proptest::proptest! {
        #[test]
        fn prop_rectangularity_counts_spans_not_cells(
            columns in 1usize..8,
            rows in 0usize..12,
        ) {
            let mut table = Table::new(BorderPolicy::Grid, vec![10.0; columns]);
            for i in 0..rows {
                if i % 2 == 0 {
                    table.push_row(Row::new(vec![Cell::text("span").with_span(columns)]));
                } else {
                    table.push_row(Row::new(vec![Cell::text("c"); columns]));
                }
            }
            proptest::prop_assert!(table.is_rectangular());
        }
    }
}
