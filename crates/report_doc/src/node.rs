//! Top-level content stream: the flat list of nodes a report is made of

use crate::{ImageContent, PageGeometry, Paragraph, ReportTheme, Table};
use serde::{Deserialize, Serialize};

/// One block in the document flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentNode {
    Paragraph(Paragraph),
    Table(Table),
    Image(ImageContent),
    /// Explicit page break between sections
    PageBreak,
}

impl ContentNode {
    pub fn is_page_break(&self) -> bool {
        matches!(self, ContentNode::PageBreak)
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            ContentNode::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ContentNode::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Paragraph> for ContentNode {
    fn from(value: Paragraph) -> Self {
        ContentNode::Paragraph(value)
    }
}

impl From<Table> for ContentNode {
    fn from(value: Table) -> Self {
        ContentNode::Table(value)
    }
}

impl From<ImageContent> for ContentNode {
    fn from(value: ImageContent) -> Self {
        ContentNode::Image(value)
    }
}

/// The assembled report: an ordered node stream plus theme and page setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub nodes: Vec<ContentNode>,
    pub theme: ReportTheme,
    pub page: PageGeometry,
}

impl ReportDocument {
    pub fn new(theme: ReportTheme) -> Self {
        Self {
            nodes: Vec::new(),
            theme,
            page: PageGeometry::default(),
        }
    }

    pub fn push(&mut self, node: impl Into<ContentNode>) {
        self.nodes.push(node.into());
    }

    /// Number of explicit page breaks in the stream
    pub fn page_break_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_page_break()).count()
    }
}

impl Default for ReportDocument {
    fn default() -> Self {
        Self::new(ReportTheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_count_breaks() {
        let mut doc = ReportDocument::default();
        doc.push(Paragraph::text("hello"));
        doc.nodes.push(ContentNode::PageBreak);
        doc.push(Paragraph::text("world"));
        assert_eq!(doc.nodes.len(), 3);
        assert_eq!(doc.page_break_count(), 1);
    }

    #[test]
    fn test_node_accessors() {
        let node: ContentNode = Paragraph::text("x").into();
        assert!(node.as_paragraph().is_some());
        assert!(node.as_table().is_none());
        assert!(!node.is_page_break());
    }
}
