//! DOCX writer infrastructure
//!
//! Creates ZIP archives with the correct DOCX part structure. Entry
//! timestamps are pinned so identical documents produce identical bytes.

use std::io::{Cursor, Seek, Write};

use report_doc::ReportDocument;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::content_types::ContentTypes;
use crate::document_writer::DocumentWriter;
use crate::relationships::{create_document_rels, create_root_rels};
use crate::styles_writer::StylesWriter;
use crate::DocxResult;

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
}

impl<W: Write + Seek> DocxWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: ContentTypes::new(),
        }
    }

    /// Write a complete DOCX package from a report document
    pub fn write(mut self, doc: &ReportDocument) -> DocxResult<()> {
        let root_rels = create_root_rels();
        let mut doc_rels = create_document_rels();

        let (document_xml, media) = DocumentWriter::new(doc).write(&mut doc_rels)?;
        for part in &media {
            self.content_types.add_default(part.extension, part.mime);
        }

        self.write_file("word/document.xml", &document_xml)?;

        let styles_xml = StylesWriter::new().write(&doc.theme);
        self.write_file("word/styles.xml", &styles_xml)?;

        for part in &media {
            self.write_binary(&format!("word/media/{}", part.filename), &part.bytes)?;
        }

        let root_rels_xml = root_rels.to_xml();
        self.write_file("_rels/.rels", &root_rels_xml)?;

        let doc_rels_xml = doc_rels.to_xml();
        self.write_file("word/_rels/document.xml.rels", &doc_rels_xml)?;

        let content_types_xml = self.content_types.to_xml();
        self.write_file("[Content_Types].xml", &content_types_xml)?;

        self.zip.finish()?;
        Ok(())
    }

    /// Write an XML part to the archive
    fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write binary data to the archive, uncompressed
    fn write_binary(&mut self, path: &str, data: &[u8]) -> DocxResult<()> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .last_modified_time(zip::DateTime::default());
        self.zip.start_file(path, options)?;
        self.zip.write_all(data)?;
        Ok(())
    }
}

/// Serialize a report document to an in-memory DOCX buffer
pub fn write_docx_bytes(doc: &ReportDocument) -> DocxResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    DocxWriter::new(&mut cursor).write(doc)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_doc::{ContentNode, ImageContent, ImageFormat, Paragraph, ReportTheme};
    use std::io::Read;

    fn sample_doc() -> ReportDocument {
        let mut doc = ReportDocument::new(ReportTheme::default());
        doc.push(Paragraph::text("Functional Capacity Evaluation"));
        doc.nodes.push(ContentNode::PageBreak);
        doc.push(ImageContent::new(
            vec![0xDE, 0xAD, 0xBE, 0xEF],
            ImageFormat::Png,
            10,
            10,
            "diagram",
        ));
        doc
    }

    #[test]
    fn test_package_has_mandatory_parts() {
        let bytes = write_docx_bytes(&sample_doc()).expect("serializes");
        assert_eq!(&bytes[0..2], b"PK");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/_rels/document.xml.rels",
            "word/media/image1.png",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }
    }

    #[test]
    fn test_media_relationship_is_declared() {
        let bytes = write_docx_bytes(&sample_doc()).expect("serializes");
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");

        let mut rels_xml = String::new();
        archive
            .by_name("word/_rels/document.xml.rels")
            .expect("rels part")
            .read_to_string(&mut rels_xml)
            .expect("readable");
        assert!(rels_xml.contains("media/image1.png"));

        let mut ct_xml = String::new();
        archive
            .by_name("[Content_Types].xml")
            .expect("content types part")
            .read_to_string(&mut ct_xml)
            .expect("readable");
        assert!(ct_xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
    }

    #[test]
    fn test_xml_parts_are_well_formed() {
        let bytes = write_docx_bytes(&sample_doc()).expect("serializes");
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        for index in 0..archive.len() {
            let mut file = archive.by_index(index).expect("entry");
            let name = file.name().to_string();
            if !name.ends_with(".xml") && !name.ends_with(".rels") {
                continue;
            }
            let mut content = String::new();
            file.read_to_string(&mut content).expect("readable");

            let mut reader = quick_xml::Reader::from_str(&content);
            loop {
                match reader.read_event() {
                    Ok(quick_xml::events::Event::Eof) => break,
                    Ok(_) => {}
                    Err(err) => panic!("{name} is not well-formed: {err}"),
                }
            }
        }
    }

    #[test]
    fn test_output_is_byte_deterministic() {
        let first = write_docx_bytes(&sample_doc()).expect("serializes");
        let second = write_docx_bytes(&sample_doc()).expect("serializes");
        assert_eq!(first, second);
    }
}
