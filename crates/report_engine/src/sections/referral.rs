//! Referral questions: prompts, measured-vs-normative tables, narrative
//! answers and a strip of illustrative images
//!
//! The illustration strip is fetched concurrently; each image degrades to
//! its own placeholder cell, so one missing image never removes or
//! misplaces the others.

use futures_util::future::join_all;

use eval_record::{EvaluationRecord, NormComparison};
use report_doc::{BorderPolicy, Cell, ContentNode, HeadingLevel, Paragraph, Row, Run, Table};

use crate::context::BuildContext;
use crate::sections::SectionResult;
use crate::tables::{even_widths, format_value, header_row, leading_number, placeholder_cell};

const STRIP_CELL_WIDTH_PT: f32 = 110.0;
const STRIP_CELL_HEIGHT_PT: f32 = 110.0;

pub async fn referral_questions(record: &EvaluationRecord, ctx: &BuildContext) -> SectionResult {
    let mut nodes: SectionResult = Vec::new();
    nodes.push(Paragraph::heading(HeadingLevel::Section, "Referral Questions").into());

    if record.referral_questions.is_empty() {
        nodes.push(
            Paragraph::text("No referral questions accompanied this evaluation.").into(),
        );
    }

    for (index, question) in record.referral_questions.iter().enumerate() {
        nodes.push(
            Paragraph::new()
                .with_run(Run::bold(format!("{}. {}", index + 1, question.prompt)))
                .with_space_before(8.0)
                .into(),
        );
        if !question.comparisons.is_empty() {
            nodes.push(comparison_table(&question.comparisons, ctx).into());
        }
        nodes.push(Paragraph::text(&question.answer).into());
    }

    if !record.referral_images.is_empty() {
        nodes.push(Paragraph::heading(HeadingLevel::Sub, "Illustrations").into());
        nodes.push(illustration_strip(&record.referral_images, ctx).await.into());
    }

    nodes.push(ContentNode::PageBreak);
    nodes
}

fn comparison_table(comparisons: &[NormComparison], ctx: &BuildContext) -> Table {
    let mut table = Table::new(BorderPolicy::Grid, vec![28.0, 17.0, 14.0, 17.0, 24.0]);
    table.push_row(header_row(
        &["Area", "Measured", "Rating", "Normative", "% of Normative"],
        &ctx.theme,
    ));
    for comparison in comparisons {
        table.push_row(Row::new(vec![
            Cell::text(&comparison.area),
            Cell::text(&comparison.measured),
            Cell::text(&comparison.rating),
            Cell::text(&comparison.normative),
            Cell::text(percent_of_normative(comparison)),
        ]));
    }
    table
}

/// The percent column: the collected value when present, otherwise derived
/// from the leading numeric tokens of the measured and normative values
fn percent_of_normative(comparison: &NormComparison) -> String {
    if let Some(percent) = &comparison.percent {
        return percent.clone();
    }
    match (
        leading_number(&comparison.measured),
        leading_number(&comparison.normative),
    ) {
        (Some(measured), Some(normative)) if normative != 0.0 => {
            format!("{}%", format_value(measured / normative * 100.0))
        }
        _ => String::new(),
    }
}

/// One borderless row of images, fetched independently and concurrently
async fn illustration_strip(references: &[String], ctx: &BuildContext) -> Table {
    let fetches = references
        .iter()
        .map(|reference| ctx.assets.resolve(Some(reference.as_str())));
    let resolved = join_all(fetches).await;

    let cells = resolved
        .into_iter()
        .enumerate()
        .map(|(index, asset)| match asset {
            Some(asset) => Cell::image(
                asset
                    .to_content(format!("Illustration {}", index + 1))
                    .scaled_to_fit(STRIP_CELL_WIDTH_PT, STRIP_CELL_HEIGHT_PT),
            ),
            None => placeholder_cell(&format!("illustration {}", index + 1)),
        })
        .collect();

    Table::with_rows(
        BorderPolicy::Borderless,
        even_widths(references.len()),
        vec![Row::new(cells)],
    )
}
