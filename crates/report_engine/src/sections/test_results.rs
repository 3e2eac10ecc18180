//! Test results: one long table grouped by catalog category
//!
//! Each category opens with a full-width shaded spanning row, followed by
//! one data row per selected test. The trailing total row sums the leading
//! numeric token of the duration and repetition cells across data rows
//! only; category and header rows never contribute.

use eval_record::{lookup, EvaluationRecord, TestCategory, TestRun};
use report_doc::{BorderPolicy, Cell, ContentNode, HeadingLevel, Paragraph, Row, Run, Table};

use crate::context::BuildContext;
use crate::sections::SectionResult;
use crate::tables::{category_row, format_value, header_row, leading_number};

const COLUMNS: usize = 5;

pub fn test_results(record: &EvaluationRecord, ctx: &BuildContext) -> SectionResult {
    let mut nodes: SectionResult = Vec::new();
    nodes.push(Paragraph::heading(HeadingLevel::Section, "Test Results").into());
    nodes.push(results_table(record, ctx).into());
    nodes.push(
        Paragraph::new()
            .with_run(Run::italic(
                "CV = coefficient of variation across trials; min = minutes; \
                 lb = pounds; deg = degrees; sec = seconds; bpm = beats per minute.",
            ))
            .with_space_before(6.0)
            .into(),
    );
    nodes.push(ContentNode::PageBreak);
    nodes
}

fn results_table(record: &EvaluationRecord, ctx: &BuildContext) -> Table {
    let mut table = Table::new(BorderPolicy::Grid, vec![32.0, 22.0, 12.0, 18.0, 16.0]);
    table.push_row(header_row(
        &["Test", "Result", "CV", "Duration", "Reps"],
        &ctx.theme,
    ));

    let mut duration_total = 0.0;
    let mut reps_total = 0.0;

    for category in TestCategory::all() {
        let selected: Vec<&String> = record
            .tests
            .iter()
            .filter(|id| {
                lookup(id).map_or(category == TestCategory::Other, |def| def.category == category)
            })
            .collect();
        if selected.is_empty() {
            continue;
        }

        table.push_row(category_row(category.display(), COLUMNS, &ctx.theme));
        for test_id in selected {
            let row = data_row(test_id, record.run_for(test_id));
            // Totals parse the emitted cell text, not the raw trial data
            duration_total += leading_number(&row.cells[3].plain_text()).unwrap_or(0.0);
            reps_total += leading_number(&row.cells[4].plain_text()).unwrap_or(0.0);
            table.push_row(row);
        }
    }

    table.push_row(total_row(duration_total, reps_total));
    table
}

fn data_row(test_id: &str, run: Option<&TestRun>) -> Row {
    // Unknown identifiers still get a row with the identifier echoed
    let (name, unit) = match lookup(test_id) {
        Some(def) => (def.name.to_string(), def.unit),
        None => (test_id.to_string(), ""),
    };

    let (result, cv, duration, reps) = match run {
        Some(run) if !run.trials.is_empty() => (
            run.mean_value()
                .map(|mean| format!("{} {unit}", format_value(mean)).trim_end().to_string())
                .unwrap_or_default(),
            run.coefficient_of_variation()
                .map(|cv| format!("{}%", format_value(cv)))
                .unwrap_or_default(),
            run.duration_minutes
                .map(|minutes| format!("{} min", format_value(minutes)))
                .unwrap_or_default(),
            format_value(f64::from(run.total_reps())),
        ),
        _ => (String::new(), String::new(), String::new(), String::new()),
    };

    Row::new(vec![
        Cell::text(name),
        Cell::text(result),
        Cell::text(cv),
        Cell::text(duration),
        Cell::text(reps),
    ])
}

fn total_row(duration_total: f64, reps_total: f64) -> Row {
    let bold_cell = |text: String| Cell::from_paragraph(Paragraph::new().with_run(Run::bold(text)));
    Row::new(vec![
        bold_cell("Total".to_string()).with_span(3),
        bold_cell(format!("{} min", format_value(duration_total))),
        bold_cell(format_value(reps_total)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use assets::{AssetError, AssetSource, Result};
    use async_trait::async_trait;
    use serde_json::json;
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

    fn record_from(payload: serde_json::Value) -> EvaluationRecord {
        EvaluationRecord::from_json(&payload).expect("valid record")
    }

    #[test]
    fn test_single_test_yields_one_category_and_one_data_row() {
        let record = record_from(json!({
            "tests": ["hand-strength-standard"],
            "testResults": {
                "hand-strength-standard": {
                    "durationMinutes": 4,
                    "trials": [{"force": 82.0}, {"force": 79.5}]
                }
            }
        }));
        let nodes = test_results(&record, &ctx());
        let table = nodes.iter().find_map(ContentNode::as_table).expect("results");
        assert!(table.is_rectangular());
        // header + category + data + total
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.rows[1].cells[0].plain_text(), "Hand Strength");
        assert!(table.rows[1].cells[0].is_shaded());
        assert_eq!(table.rows[2].cells[0].plain_text(), "Hand Strength (Standard Grip)");
        assert_eq!(table.rows[2].cells[1].plain_text(), "80.8 lb");
    }

    #[test]
    fn test_total_row_sums_leading_numeric_tokens() {
        let record = record_from(json!({
            "tests": ["hand-strength-standard", "lift-floor-to-waist", "tolerance-standing"],
            "testResults": {
                "hand-strength-standard": {
                    "durationMinutes": 4,
                    "trials": [{"force": 82.0}, {"force": 79.5}, {"force": 80.0}]
                },
                "lift-floor-to-waist": {
                    "durationMinutes": 12.5,
                    "trials": [{"weight": 30.0, "reps": 5}, {"weight": 35.0, "reps": 3}]
                }
                // tolerance-standing has no recorded run: empty cells, no contribution
            }
        }));
        let nodes = test_results(&record, &ctx());
        let table = nodes.iter().find_map(ContentNode::as_table).expect("results");
        assert!(table.is_rectangular());

        let total = table.rows.last().expect("total row");
        assert_eq!(total.cells[0].plain_text(), "Total");
        assert_eq!(total.cells[1].plain_text(), "16.5 min");
        // 3 trials of grip + 8 explicit lift reps
        assert_eq!(total.cells[2].plain_text(), "11");
        assert!(total.cells.iter().all(|c| {
            c.blocks.iter().all(|b| match b {
                report_doc::CellBlock::Paragraph(p) => p.runs.iter().all(|r| r.bold),
                _ => false,
            })
        }));
    }

    #[test]
    fn test_unknown_identifier_is_echoed_under_other() {
        let record = record_from(json!({"tests": ["mystery-protocol"]}));
        let nodes = test_results(&record, &ctx());
        let table = nodes.iter().find_map(ContentNode::as_table).expect("results");
        assert_eq!(table.rows[1].cells[0].plain_text(), "Other Tests");
        assert_eq!(table.rows[2].cells[0].plain_text(), "mystery-protocol");
        assert_eq!(table.rows[2].cells[1].plain_text(), "");
    }

    #[test]
    fn test_legend_paragraph_defines_abbreviations() {
        let nodes = test_results(&EvaluationRecord::default(), &ctx());
        let legend = nodes
            .iter()
            .filter_map(ContentNode::as_paragraph)
            .any(|p| p.plain_text().contains("CV = coefficient of variation"));
        assert!(legend);
    }
}
