//! The document assembler: validate, build sections in order, serialize
//!
//! The one hard-failure path is structural validation of the request; it
//! runs before any network fetch. After that the build cannot fail short
//! of a broken serialization environment: every resource problem was
//! already absorbed by the builder that owns it.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info};

use assets::AssetSource;
use docx_store::write_docx_bytes;
use eval_record::EvaluationRecord;
use report_doc::{ContentNode, PageGeometry, ReportDocument};

use crate::context::BuildContext;
use crate::error::EngineResult;
use crate::sections;

/// Caller-tunable knobs for one build
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Pin the report date; today when absent. Pinning it makes the
    /// build fully deterministic for a deterministic asset source.
    pub generated_on: Option<NaiveDate>,
}

/// Run the eight section builders in pipeline order and concatenate
/// their node streams
pub async fn assemble(record: &EvaluationRecord, ctx: &BuildContext) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    let mut append = |name: &str, section: Vec<ContentNode>| {
        debug!(build_id = %ctx.build_id, section = name, nodes = section.len(), "section built");
        nodes.extend(section);
    };

    append("cover", sections::cover(record, ctx).await);
    append("table_of_contents", sections::table_of_contents(record, ctx));
    append("client_information", sections::client_information(record, ctx).await);
    append("referral_questions", sections::referral_questions(record, ctx).await);
    append("conclusions", sections::conclusions(record, ctx));
    append("test_results", sections::test_results(record, ctx));
    append("reference_charts", sections::reference_charts(record, ctx));
    append("digital_library", sections::digital_library(record, ctx).await);

    nodes
}

/// The single document-generation entry point: validate the request,
/// assemble the report and serialize it to a DOCX buffer.
///
/// The only error a structurally valid request can produce is a
/// serialization failure; unreachable assets surface as placeholders
/// inside the document, never here.
pub async fn generate_report(
    request: &Value,
    source: Arc<dyn AssetSource>,
    options: AssembleOptions,
) -> EngineResult<Vec<u8>> {
    // Validation happens before the context exists, so a rejected request
    // can never trigger a fetch
    let record = EvaluationRecord::from_json(request)?;

    let ctx = match options.generated_on {
        Some(date) => BuildContext::with_date(source, date),
        None => BuildContext::new(source),
    };
    info!(build_id = %ctx.build_id, tests = record.tests.len(), "report build started");

    let document = ReportDocument {
        nodes: assemble(&record, &ctx).await,
        theme: ctx.theme.clone(),
        page: PageGeometry::letter(),
    };
    let buffer = write_docx_bytes(&document)?;

    info!(build_id = %ctx.build_id, bytes = buffer.len(), "report build finished");
    Ok(buffer)
}
