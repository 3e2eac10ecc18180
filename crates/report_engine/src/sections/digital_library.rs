//! Appendix Two: the digital library image grid
//!
//! A fixed-column grid of captioned images. Items are fetched concurrently
//! and each degrades to its own placeholder; the final row is padded with
//! empty cells so the grid stays rectangular whatever the item count.
//! This is the last section, so it carries no trailing page break.

use futures_util::future::join_all;

use eval_record::{EvaluationRecord, LibraryImage};
use report_doc::{BorderPolicy, Cell, CellBlock, ContentNode, HeadingLevel, Paragraph, Table};

use crate::context::BuildContext;
use crate::sections::SectionResult;
use crate::tables::{even_widths, grid_rows, placeholder_cell};

/// Grid width in items per row
pub const GRID_WIDTH: usize = 3;

const ITEM_MAX_WIDTH_PT: f32 = 140.0;
const ITEM_MAX_HEIGHT_PT: f32 = 140.0;

pub async fn digital_library(record: &EvaluationRecord, ctx: &BuildContext) -> SectionResult {
    let mut nodes: SectionResult = Vec::new();
    nodes.push(Paragraph::heading(HeadingLevel::Section, "Appendix Two: Digital Library").into());

    if record.library_images.is_empty() {
        nodes.push(Paragraph::text("No library items were selected for this report.").into());
        return nodes;
    }

    let fetches = record
        .library_images
        .iter()
        .map(|item| ctx.assets.resolve(Some(item.reference.as_str())));
    let resolved = join_all(fetches).await;

    let cells: Vec<Cell> = record
        .library_images
        .iter()
        .zip(resolved)
        .enumerate()
        .map(|(index, (item, asset))| library_cell(index, item, asset))
        .collect();

    nodes.push(
        Table::with_rows(
            BorderPolicy::Borderless,
            even_widths(GRID_WIDTH),
            grid_rows(cells, GRID_WIDTH),
        )
        .into(),
    );
    nodes
}

fn library_cell(
    index: usize,
    item: &LibraryImage,
    asset: Option<std::sync::Arc<assets::ResolvedAsset>>,
) -> Cell {
    let caption = item
        .caption
        .clone()
        .unwrap_or_else(|| format!("Item {}", index + 1));

    let mut cell = match asset {
        Some(asset) => Cell::image(
            asset
                .to_content(caption.clone())
                .scaled_to_fit(ITEM_MAX_WIDTH_PT, ITEM_MAX_HEIGHT_PT),
        ),
        None => placeholder_cell(&format!("library item {}", index + 1)),
    };
    cell.push_block(CellBlock::Paragraph(
        Paragraph::text(caption).with_space_after(8.0),
    ));
    cell
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

    fn record_with_items(count: usize) -> EvaluationRecord {
        let refs: Vec<String> = (0..count)
            .map(|i| format!("https://example.test/lib{i}.png"))
            .collect();
        EvaluationRecord::from_json(&json!({"tests": [], "libraryImages": refs})).expect("valid")
    }

    #[tokio::test]
    async fn test_final_row_is_padded() {
        let ctx = BuildContext::new(Arc::new(FailingSource));
        let nodes = digital_library(&record_with_items(7), &ctx).await;
        let grid = nodes.iter().find_map(ContentNode::as_table).expect("grid");

        assert_eq!(grid.row_count(), 3);
        assert!(grid.is_rectangular());
        let last = grid.rows.last().unwrap();
        assert_eq!(last.cells.iter().filter(|c| c.blocks.is_empty()).count(), 2);
    }

    #[tokio::test]
    async fn test_exact_multiple_needs_no_padding() {
        let ctx = BuildContext::new(Arc::new(FailingSource));
        let nodes = digital_library(&record_with_items(6), &ctx).await;
        let grid = nodes.iter().find_map(ContentNode::as_table).expect("grid");
        assert_eq!(grid.row_count(), 2);
        assert!(grid
            .rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .all(|c| !c.blocks.is_empty()));
    }

    #[tokio::test]
    async fn test_unreachable_items_keep_their_captions() {
        let ctx = BuildContext::new(Arc::new(FailingSource));
        let record = EvaluationRecord::from_json(&json!({
            "tests": [],
            "libraryImages": [{"ref": "https://example.test/x.png", "caption": "Lumbar flexion"}]
        }))
        .expect("valid");
        let nodes = digital_library(&record, &ctx).await;
        let grid = nodes.iter().find_map(ContentNode::as_table).expect("grid");
        let text = grid.rows[0].cells[0].plain_text();
        assert!(text.contains("library item 1 unavailable"));
        assert!(text.contains("Lumbar flexion"));
    }

    #[tokio::test]
    async fn test_last_section_has_no_page_break() {
        let ctx = BuildContext::new(Arc::new(FailingSource));
        let nodes = digital_library(&record_with_items(0), &ctx).await;
        assert!(!nodes.iter().any(ContentNode::is_page_break));
    }
}
