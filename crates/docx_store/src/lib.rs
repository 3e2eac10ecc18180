//! DOCX export for report documents
//!
//! A DOCX file is a ZIP archive of XML parts defined by ECMA-376:
//! - `[Content_Types].xml` - content type definitions
//! - `_rels/.rels` - root relationships
//! - `word/document.xml` - main document content
//! - `word/styles.xml` - style definitions
//! - `word/_rels/document.xml.rels` - document relationships
//! - `word/media/` - embedded images
//!
//! Output is byte-deterministic: part ordering, relationship ids, media
//! filenames and ZIP entry timestamps are all fixed, so identical input
//! documents serialize to identical buffers.

mod content_types;
mod document_writer;
mod error;
mod relationships;
mod styles_writer;
mod writer;

pub use content_types::ContentTypes;
pub use document_writer::{DocumentWriter, MediaPart};
pub use error::{DocxError, DocxResult};
pub use relationships::{Relationship, Relationships, TargetMode};
pub use styles_writer::StylesWriter;
pub use writer::{write_docx_bytes, DocxWriter};

/// XML namespaces used in DOCX files
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    /// DrawingML namespace
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    /// WordprocessingML Drawing namespace
    pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
    /// Picture namespace
    pub const PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
}

/// Relationship types used in DOCX
pub mod relationship_types {
    pub const DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}

/// Content types for DOCX parts
pub mod content_type_values {
    pub const DOCUMENT: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        assert!(namespaces::W.contains("wordprocessingml"));
    }
}
