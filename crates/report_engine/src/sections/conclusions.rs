//! Conclusions: narrative paragraphs and the signature block

use eval_record::EvaluationRecord;
use report_doc::{ContentNode, HeadingLevel, Paragraph, Run};

use crate::context::BuildContext;
use crate::sections::SectionResult;

pub fn conclusions(record: &EvaluationRecord, ctx: &BuildContext) -> SectionResult {
    let mut nodes: SectionResult = Vec::new();
    nodes.push(
        Paragraph::heading(HeadingLevel::Section, "Conclusions and Recommendations").into(),
    );

    if record.narratives.conclusions.is_empty() {
        nodes.push(Paragraph::text("").into());
    }
    for paragraph in &record.narratives.conclusions {
        nodes.push(Paragraph::text(paragraph).into());
    }

    if let Some(recommendations) = &record.narratives.recommendations {
        nodes.push(Paragraph::heading(HeadingLevel::Sub, "Recommendations").into());
        nodes.push(Paragraph::text(recommendations).into());
    }

    // Signature block: rule, evaluator identity, report date
    nodes.push(
        Paragraph::new()
            .with_run(Run::new("                                        ").with_underline())
            .with_space_before(48.0)
            .into(),
    );
    let evaluator = match (&record.clinic.evaluator_name, &record.clinic.credentials) {
        (Some(name), Some(credentials)) => format!("{name}, {credentials}"),
        (Some(name), None) => name.clone(),
        _ => String::new(),
    };
    nodes.push(Paragraph::text(evaluator).into());
    nodes.push(Paragraph::text(format!("Date: {}", ctx.date_display())).into());

    nodes.push(ContentNode::PageBreak);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use assets::{AssetError, AssetSource, Result};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct FailingSource;

    #[async_trait]
    impl AssetSource for FailingSource {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Err(AssetError::Status(404))
        }
    }

    fn ctx() -> BuildContext {
        BuildContext::with_date(
            Arc::new(FailingSource),
            NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
        )
    }

    #[test]
    fn test_signature_block_carries_evaluator_and_date() {
        let mut record = EvaluationRecord::default();
        record.clinic.evaluator_name = Some("Alex Moreno".to_string());
        record.clinic.credentials = Some("PT, DPT".to_string());
        let nodes = conclusions(&record, &ctx());

        let texts: Vec<String> = nodes
            .iter()
            .filter_map(ContentNode::as_paragraph)
            .map(Paragraph::plain_text)
            .collect();
        assert!(texts.contains(&"Alex Moreno, PT, DPT".to_string()));
        assert!(texts.contains(&"Date: June 14, 2024".to_string()));

        let rule = nodes
            .iter()
            .filter_map(ContentNode::as_paragraph)
            .any(|p| p.runs.first().is_some_and(|r| r.underline));
        assert!(rule);
    }

    #[test]
    fn test_narrative_paragraphs_in_order() {
        let mut record = EvaluationRecord::default();
        record.narratives.conclusions = vec![
            "Meets light-duty demands.".to_string(),
            "Re-evaluate in six weeks.".to_string(),
        ];
        let nodes = conclusions(&record, &ctx());
        let texts: Vec<String> = nodes
            .iter()
            .filter_map(ContentNode::as_paragraph)
            .map(Paragraph::plain_text)
            .collect();
        let first = texts.iter().position(|t| t == "Meets light-duty demands.").unwrap();
        let second = texts.iter().position(|t| t == "Re-evaluate in six weeks.").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_missing_narrative_renders_empty_not_error() {
        let nodes = conclusions(&EvaluationRecord::default(), &ctx());
        assert!(nodes.last().unwrap().is_page_break());
        assert!(nodes
            .iter()
            .filter_map(ContentNode::as_paragraph)
            .any(|p| p.plain_text().is_empty()));
    }
}
