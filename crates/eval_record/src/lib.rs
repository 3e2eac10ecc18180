//! Evaluation record: the structured input for one report request
//!
//! The data-collection collaborator hands this engine a JSON-shaped record.
//! Ingestion normalizes it into typed structures exactly once; everything
//! downstream works with owned, validated data and never touches raw JSON.

mod catalog;
mod error;
mod markers;
mod record;
mod trials;

pub use catalog::*;
pub use error::*;
pub use markers::*;
pub use record::*;
pub use trials::*;
