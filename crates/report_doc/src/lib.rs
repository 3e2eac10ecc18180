//! Report Content Model - the node types an assembled report is made of
//!
//! This crate provides the content vocabulary shared by the section builders
//! and the DOCX serializer: paragraphs of styled runs, rectangular tables,
//! resolved images, and explicit page breaks, plus the style theme and page
//! geometry every report is rendered with.

mod image;
mod node;
mod page;
mod paragraph;
mod table;
mod theme;

pub use image::*;
pub use node::*;
pub use page::*;
pub use paragraph::*;
pub use table::*;
pub use theme::*;
