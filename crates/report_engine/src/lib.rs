//! Report assembly engine
//!
//! Turns an [`eval_record::EvaluationRecord`] into a finished DOCX buffer:
//! eight section builders run in fixed pipeline order, each producing a
//! list of content nodes, and the assembler concatenates them, attaches
//! page geometry and the style theme, and serializes through `docx_store`.
//!
//! The only hard failure is a structurally invalid request (`tests` not a
//! list). Everything else - unreachable images, missing optional fields -
//! degrades to a placeholder inside the produced document.

mod assemble;
mod context;
mod error;
pub mod sections;
pub mod tables;

pub use assemble::{assemble, generate_report, AssembleOptions};
pub use context::BuildContext;
pub use error::{EngineError, EngineResult};
