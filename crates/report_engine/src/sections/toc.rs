//! Table of contents: the fixed report outline
//!
//! The outline is an intentional constant, independent of which sections
//! actually have content, rendered inside a single-left-border table so a
//! vertical rule runs beside the indented entries.

use eval_record::EvaluationRecord;
use report_doc::{BorderPolicy, Cell, ContentNode, HeadingLevel, Paragraph, Row, Run, Table};

use crate::context::BuildContext;
use crate::sections::SectionResult;

/// Outline entries as (title, indent level)
const OUTLINE: &[(&str, u8)] = &[
    ("Client Information", 0),
    ("Demographics", 1),
    ("Mechanism of Injury", 1),
    ("Pain Diagram and Legend", 1),
    ("Referral Questions", 0),
    ("Conclusions and Recommendations", 0),
    ("Signature", 1),
    ("Test Results", 0),
    ("Appendix One: Reference Charts", 0),
    ("Appendix Two: Digital Library", 0),
];

pub fn table_of_contents(_record: &EvaluationRecord, ctx: &BuildContext) -> SectionResult {
    let mut nodes: SectionResult = Vec::new();
    nodes.push(Paragraph::heading(HeadingLevel::Section, "Table of Contents").into());

    let mut outline = Table::new(BorderPolicy::LeftRule, vec![100.0]);
    for (title, level) in OUTLINE {
        let mut entry = Paragraph::new();
        entry.push_run(if *level == 0 {
            Run::bold(*title).with_color(ctx.theme.accent_color.clone())
        } else {
            Run::new(*title)
        });
        outline.push_row(Row::new(vec![Cell::from_paragraph(
            entry.with_indent(6.0 + f32::from(*level) * 18.0),
        )]));
    }
    nodes.push(outline.into());

    nodes.push(ContentNode::PageBreak);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use assets::{AssetError, AssetSource, Result};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FailingSource;

    #[async_trait]
    impl AssetSource for FailingSource {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Err(AssetError::Status(404))
        }
    }

    #[test]
    fn test_outline_is_fixed_regardless_of_record() {
        let ctx = BuildContext::new(Arc::new(FailingSource));
        let empty = table_of_contents(&EvaluationRecord::default(), &ctx);

        let mut record = EvaluationRecord::default();
        record.tests = vec!["hand-strength-standard".to_string()];
        let populated = table_of_contents(&record, &ctx);

        let rows = |nodes: &SectionResult| {
            nodes
                .iter()
                .find_map(ContentNode::as_table)
                .map(Table::row_count)
        };
        assert_eq!(rows(&empty), Some(OUTLINE.len()));
        assert_eq!(rows(&empty), rows(&populated));
    }

    #[test]
    fn test_outline_uses_left_rule() {
        let ctx = BuildContext::new(Arc::new(FailingSource));
        let nodes = table_of_contents(&EvaluationRecord::default(), &ctx);
        let table = nodes.iter().find_map(ContentNode::as_table).expect("outline");
        assert_eq!(table.policy, BorderPolicy::LeftRule);
        assert!(table.is_rectangular());
        assert!(nodes.last().unwrap().is_page_break());
    }
}
