//! Appendix One: static reference charts
//!
//! Two fixed lookup tables, independent of the record: perceived exertion
//! mapped to heart-rate bands, and the DOL physical demand levels mapped
//! to weight bands. Shading follows the same convention as every other
//! table: header rows filled, data rows plain.

use eval_record::EvaluationRecord;
use report_doc::{BorderPolicy, Cell, ContentNode, HeadingLevel, Paragraph, Row, Table};

use crate::context::BuildContext;
use crate::sections::SectionResult;
use crate::tables::header_row;

/// Borg RPE bands and the heart rates they correspond to
const EXERTION_BANDS: &[(&str, &str, &str)] = &[
    ("6-8", "Very, very light", "60-80"),
    ("9-10", "Very light", "90-100"),
    ("11-12", "Fairly light", "110-120"),
    ("13-14", "Somewhat hard", "130-140"),
    ("15-16", "Hard", "150-160"),
    ("17-18", "Very hard", "170-180"),
    ("19-20", "Very, very hard", "190-200"),
];

/// US Department of Labor physical demand classification
const DEMAND_BANDS: &[(&str, &str, &str)] = &[
    ("Sedentary", "Up to 10 lb", "Negligible"),
    ("Light", "Up to 20 lb", "Up to 10 lb"),
    ("Medium", "21 to 50 lb", "11 to 25 lb"),
    ("Heavy", "51 to 100 lb", "26 to 50 lb"),
    ("Very Heavy", "Over 100 lb", "Over 50 lb"),
];

pub fn reference_charts(_record: &EvaluationRecord, ctx: &BuildContext) -> SectionResult {
    let mut nodes: SectionResult = Vec::new();
    nodes.push(Paragraph::heading(HeadingLevel::Section, "Appendix One: Reference Charts").into());

    nodes.push(Paragraph::heading(HeadingLevel::Sub, "Perceived Exertion and Heart Rate").into());
    nodes.push(
        band_table(
            &["RPE", "Perceived Exertion", "Heart Rate (bpm)"],
            vec![20.0, 45.0, 35.0],
            EXERTION_BANDS,
            ctx,
        )
        .into(),
    );

    nodes.push(Paragraph::heading(HeadingLevel::Sub, "Physical Demand Levels").into());
    nodes.push(
        band_table(
            &["Demand Level", "Occasional Lift", "Frequent Lift"],
            vec![30.0, 35.0, 35.0],
            DEMAND_BANDS,
            ctx,
        )
        .into(),
    );

    nodes.push(ContentNode::PageBreak);
    nodes
}

fn band_table(
    labels: &[&str],
    widths: Vec<f32>,
    bands: &[(&str, &str, &str)],
    ctx: &BuildContext,
) -> Table {
    let mut table = Table::new(BorderPolicy::Grid, widths);
    table.push_row(header_row(labels, &ctx.theme));
    for (a, b, c) in bands {
        table.push_row(Row::new(vec![Cell::text(*a), Cell::text(*b), Cell::text(*c)]));
    }
    table
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
    fn test_charts_are_independent_of_the_record() {
        let ctx = BuildContext::new(Arc::new(FailingSource));
        let empty = reference_charts(&EvaluationRecord::default(), &ctx);

        let mut record = EvaluationRecord::default();
        record.tests = vec!["cardio-step-test".to_string()];
        let populated = reference_charts(&record, &ctx);
        assert_eq!(empty.len(), populated.len());
    }

    #[test]
    fn test_both_tables_follow_the_shading_convention() {
        let ctx = BuildContext::new(Arc::new(FailingSource));
        let nodes = reference_charts(&EvaluationRecord::default(), &ctx);
        let tables: Vec<&Table> = nodes.iter().filter_map(ContentNode::as_table).collect();
        assert_eq!(tables.len(), 2);
        for table in tables {
            assert!(table.is_rectangular());
            assert!(table.rows[0].cells.iter().all(Cell::is_shaded));
            assert!(table.rows[1..]
                .iter()
                .all(|row| row.cells.iter().all(|c| !c.is_shaded())));
        }
        assert_eq!(
            nodes.iter().filter_map(ContentNode::as_table).nth(1).unwrap().row_count(),
            DEMAND_BANDS.len() + 1
        );
    }
}
