//! The eight report sections, in pipeline order
//!
//! Each builder is a function of the record and the build context and
//! returns the ordered content nodes for its section. Every section except
//! the last ends in an explicit page break. Builders are async only where
//! they fetch images; none of them can fail - unresolved assets and absent
//! fields degrade to placeholders and empty strings.

mod client_info;
mod conclusions;
mod cover;
mod digital_library;
mod reference_charts;
mod referral;
mod test_results;
mod toc;

pub use client_info::client_information;
pub use conclusions::conclusions;
pub use cover::cover;
pub use digital_library::digital_library;
pub use reference_charts::reference_charts;
pub use referral::referral_questions;
pub use test_results::test_results;
pub use toc::table_of_contents;

use report_doc::ContentNode;

/// The ordered node list produced by one section builder
pub type SectionResult = Vec<ContentNode>;

/// Number of sections in the pipeline
pub const SECTION_COUNT: usize = 8;

pub(crate) fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
