//! Cover page: title, clinic logo, identity grid and footer boilerplate

use eval_record::EvaluationRecord;
use report_doc::{Alignment, BorderPolicy, ContentNode, HeadingLevel, Paragraph, Run, Table};

use crate::context::BuildContext;
use crate::sections::{or_empty, SectionResult};
use crate::tables::{label_value_row, placeholder_paragraph};

const LOGO_MAX_WIDTH_PT: f32 = 216.0;
const LOGO_MAX_HEIGHT_PT: f32 = 108.0;

pub async fn cover(record: &EvaluationRecord, ctx: &BuildContext) -> SectionResult {
    let mut nodes: SectionResult = Vec::new();

    nodes.push(
        Paragraph::heading(HeadingLevel::Title, "Functional Capacity Evaluation")
            .with_align(Alignment::Center)
            .with_space_before(60.0)
            .into(),
    );

    match ctx.assets.resolve(record.clinic.logo.as_deref()).await {
        Some(asset) => nodes.push(
            asset
                .to_content("Clinic logo")
                .scaled_to_fit(LOGO_MAX_WIDTH_PT, LOGO_MAX_HEIGHT_PT)
                .into(),
        ),
        None => nodes.push(
            placeholder_paragraph("clinic logo")
                .with_align(Alignment::Center)
                .into(),
        ),
    }

    if let Some(clinic_name) = &record.clinic.clinic_name {
        nodes.push(
            Paragraph::new()
                .with_run(Run::bold(clinic_name).with_size(ctx.theme.subheading_size))
                .with_align(Alignment::Center)
                .into(),
        );
    }

    let mut identity = Table::new(BorderPolicy::Borderless, vec![35.0, 65.0]);
    identity.push_row(label_value_row("Claimant", or_empty(&record.claimant.full_name)));
    identity.push_row(label_value_row(
        "Claim Number",
        or_empty(&record.claimant.claim_number),
    ));
    identity.push_row(label_value_row(
        "Evaluation Date",
        or_empty(&record.claimant.evaluation_date),
    ));
    nodes.push(identity.into());

    nodes.push(
        Paragraph::new()
            .with_run(Run::italic(
                "This report is confidential and intended solely for the \
                 referring party. Reproduction or disclosure without written \
                 consent is prohibited.",
            ))
            .with_align(Alignment::Center)
            .with_space_before(120.0)
            .into(),
    );

    nodes.push(ContentNode::PageBreak);
    nodes
}
