//! Paragraph node - a block of styled text runs

use serde::{Deserialize, Serialize};

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Built-in paragraph roles, mapped to named styles at serialization time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// The report title on the cover
    Title,
    /// A top-level section heading
    Section,
    /// A sub-heading inside a section
    Sub,
}

/// A contiguous span of text with consistent formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content of this run
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Text color as an RRGGBB hex string; document default when absent
    pub color: Option<String>,
    /// Font size in points; document default when absent
    pub size: Option<f32>,
}

impl Run {
    /// Create a plain run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::new(text)
        }
    }

    /// Create an italic run
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::new(text)
        }
    }

    /// Set the text color (RRGGBB, no leading `#`)
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the font size in points
    pub fn with_size(mut self, points: f32) -> Self {
        self.size = Some(points);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this run has no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A paragraph containing text runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Ordered runs making up the paragraph text
    pub runs: Vec<Run>,
    pub align: Alignment,
    /// Named style this paragraph renders with
    pub heading: Option<HeadingLevel>,
    /// Left indent in points
    pub indent_left: Option<f32>,
    /// Space before the paragraph in points
    pub space_before: Option<f32>,
    /// Space after the paragraph in points
    pub space_after: Option<f32>,
}

impl Paragraph {
    /// Create a new empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with one plain run
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::new(text)],
            ..Self::default()
        }
    }

    /// Create a heading paragraph
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::new(text)],
            heading: Some(level),
            ..Self::default()
        }
    }

    /// Append a run, builder style
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn with_indent(mut self, points: f32) -> Self {
        self.indent_left = Some(points);
        self
    }

    pub fn with_space_before(mut self, points: f32) -> Self {
        self.space_before = Some(points);
        self
    }

    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Append a run
    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_constructors() {
        let plain = Run::new("hello");
        assert!(!plain.bold && !plain.italic && !plain.underline);

        let bold = Run::bold("strong");
        assert!(bold.bold);
        assert_eq!(bold.text, "strong");

        let styled = Run::new("x").with_color("1F4E79").with_size(14.0);
        assert_eq!(styled.color.as_deref(), Some("1F4E79"));
        assert_eq!(styled.size, Some(14.0));
    }

    #[test]
    fn test_paragraph_plain_text() {
        let para = Paragraph::new()
            .with_run(Run::bold("P1"))
            .with_run(Run::new(" Primary"));
        assert_eq!(para.plain_text(), "P1 Primary");
    }

    #[test]
    fn test_heading_paragraph() {
        let para = Paragraph::heading(HeadingLevel::Section, "Client Information");
        assert_eq!(para.heading, Some(HeadingLevel::Section));
        assert_eq!(para.plain_text(), "Client Information");
    }
}
