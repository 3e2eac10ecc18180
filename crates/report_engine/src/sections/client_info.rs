//! Client information: demographics, mechanism of injury, pain diagram

use eval_record::{EvaluationRecord, PainSymbol};
use report_doc::{
    BorderPolicy, Cell, CellBlock, ContentNode, HeadingLevel, Paragraph, Row, Run, Table,
};

use crate::context::BuildContext;
use crate::sections::{or_empty, SectionResult};
use crate::tables::{header_cell, label_value_row, placeholder_paragraph, symbol_paragraph};

const DIAGRAM_MAX_WIDTH_PT: f32 = 240.0;
const DIAGRAM_MAX_HEIGHT_PT: f32 = 300.0;

pub async fn client_information(record: &EvaluationRecord, ctx: &BuildContext) -> SectionResult {
    let mut nodes: SectionResult = Vec::new();
    nodes.push(Paragraph::heading(HeadingLevel::Section, "Client Information").into());

    nodes.push(demographics_grid(record).into());

    nodes.push(Paragraph::heading(HeadingLevel::Sub, "Mechanism of Injury").into());
    nodes.push(mechanism_table(record, ctx).into());

    nodes.push(Paragraph::heading(HeadingLevel::Sub, "Pain Diagram and Legend").into());
    nodes.push(diagram_block(record, ctx).await.into());

    nodes.push(ContentNode::PageBreak);
    nodes
}

fn demographics_grid(record: &EvaluationRecord) -> Table {
    let claimant = &record.claimant;
    let mut grid = Table::new(BorderPolicy::Borderless, vec![35.0, 65.0]);
    grid.push_row(label_value_row("Name", or_empty(&claimant.full_name)));
    grid.push_row(label_value_row("Date of Birth", or_empty(&claimant.date_of_birth)));
    grid.push_row(label_value_row("Occupation", or_empty(&claimant.occupation)));
    grid.push_row(label_value_row("Employer", or_empty(&claimant.employer)));
    grid.push_row(label_value_row(
        "Referring Physician",
        or_empty(&claimant.referring_physician),
    ));
    grid.push_row(label_value_row("Dominant Hand", or_empty(&claimant.dominant_hand)));
    grid
}

fn mechanism_table(record: &EvaluationRecord, ctx: &BuildContext) -> Table {
    let narrative = or_empty(&record.narratives.mechanism_of_injury);
    Table::with_rows(
        BorderPolicy::Grid,
        vec![100.0],
        vec![
            Row::header(vec![header_cell("Reported Mechanism of Injury", &ctx.theme)]),
            Row::new(vec![Cell::text(narrative)]),
        ],
    )
}

/// Two-column block: the body diagram beside the colored-symbol legend
async fn diagram_block(record: &EvaluationRecord, ctx: &BuildContext) -> Table {
    let diagram_cell = match ctx.assets.resolve(record.body_diagram.as_deref()).await {
        Some(asset) => Cell::image(
            asset
                .to_content("Body diagram")
                .scaled_to_fit(DIAGRAM_MAX_WIDTH_PT, DIAGRAM_MAX_HEIGHT_PT),
        ),
        None => Cell::from_paragraph(placeholder_paragraph("body diagram")),
    };

    // Legend covers the marked symbols; all of them when nothing is marked
    let mut symbols = record.marked_symbols();
    if symbols.is_empty() {
        symbols = PainSymbol::all().to_vec();
    }
    let mut legend = Cell::from_paragraph(Paragraph::new().with_run(Run::bold("Legend")));
    for symbol in symbols {
        legend.push_block(CellBlock::Paragraph(symbol_paragraph(
            &symbol.legend_entry(),
            &ctx.theme,
        )));
    }

    Table::with_rows(
        BorderPolicy::Borderless,
        vec![55.0, 45.0],
        vec![Row::new(vec![diagram_cell, legend])],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assets::{AssetError, AssetSource, Result};
    use async_trait::async_trait;
    use eval_record::{BodyView, PainMarker};
    use std::sync::Arc;

    struct FailingSource;

    #[async_trait]
    impl AssetSource for FailingSource {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Err(AssetError::Status(404))
        }
    }

    fn ctx() -> BuildContext {
        BuildContext::new(Arc::new(FailingSource))
    }

    #[tokio::test]
    async fn test_legend_falls_back_to_all_symbols() {
        let nodes = client_information(&EvaluationRecord::default(), &ctx()).await;
        let block = nodes
            .iter()
            .filter_map(ContentNode::as_table)
            .find(|t| t.column_count() == 2 && t.policy == BorderPolicy::Borderless && t.row_count() == 1)
            .expect("diagram block");
        // "Legend" heading plus one paragraph per symbol
        assert_eq!(block.rows[0].cells[1].blocks.len(), 1 + PainSymbol::all().len());
        assert!(block.rows[0].cells[0].plain_text().contains("body diagram unavailable"));
    }

    #[tokio::test]
    async fn test_legend_covers_only_marked_symbols() {
        let mut record = EvaluationRecord::default();
        record.pain_markers = vec![
            PainMarker { x: 0.4, y: 0.2, symbol: PainSymbol::Radiating, view: BodyView::Front },
            PainMarker { x: 0.5, y: 0.3, symbol: PainSymbol::Primary, view: BodyView::Front },
        ];
        let nodes = client_information(&record, &ctx()).await;
        let block = nodes
            .iter()
            .filter_map(ContentNode::as_table)
            .find(|t| t.column_count() == 2 && t.row_count() == 1)
            .expect("diagram block");
        let legend = block.rows[0].cells[1].plain_text();
        assert!(legend.contains("P1 Primary pain"));
        assert!(legend.contains("~ Radiating pain"));
        assert!(!legend.contains("Numbness"));
    }

    #[tokio::test]
    async fn test_mechanism_narrative_is_bound() {
        let mut record = EvaluationRecord::default();
        record.narratives.mechanism_of_injury = Some("Fell from a ladder.".to_string());
        let nodes = client_information(&record, &ctx()).await;
        let mechanism = nodes
            .iter()
            .filter_map(ContentNode::as_table)
            .find(|t| t.policy == BorderPolicy::Grid)
            .expect("mechanism table");
        assert_eq!(mechanism.rows[1].cells[0].plain_text(), "Fell from a ladder.");
    }
}
