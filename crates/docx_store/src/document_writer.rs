//! document.xml writer
//!
//! Converts the report's content node stream to WordprocessingML. Images
//! are registered as media parts on the way through; the caller writes
//! them into the archive and the relationships part afterwards.

use quick_xml::escape::escape;

use report_doc::{
    Alignment, BorderPolicy, Cell, CellBlock, ContentNode, HeadingLevel, ImageContent, Paragraph,
    ReportDocument, Row, Run, Table,
};

use crate::relationships::{Relationships, TargetMode};
use crate::{namespaces, relationship_types, DocxResult};

/// An image payload destined for `word/media/`
#[derive(Debug, Clone)]
pub struct MediaPart {
    /// Part filename, e.g. "image1.png"
    pub filename: String,
    /// Relationship id referenced from the drawing, e.g. "rId2"
    pub rel_id: String,
    pub bytes: Vec<u8>,
    pub extension: &'static str,
    pub mime: &'static str,
}

/// Writer for document.xml
pub struct DocumentWriter<'a> {
    doc: &'a ReportDocument,
    media: Vec<MediaPart>,
    next_drawing_id: u32,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(doc: &'a ReportDocument) -> Self {
        Self {
            doc,
            media: Vec::new(),
            next_drawing_id: 1,
        }
    }

    /// Generate document.xml, allocating image relationships from `rels`
    pub fn write(mut self, rels: &mut Relationships) -> DocxResult<(String, Vec<MediaPart>)> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}" xmlns:wp="{}" xmlns:a="{}">"#,
            namespaces::W,
            namespaces::R,
            namespaces::WP,
            namespaces::A,
        ));
        xml.push_str("<w:body>");

        for node in &self.doc.nodes {
            self.write_node(&mut xml, node, rels)?;
        }

        self.write_section_properties(&mut xml);
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        Ok((xml, self.media))
    }

    fn write_node(
        &mut self,
        xml: &mut String,
        node: &ContentNode,
        rels: &mut Relationships,
    ) -> DocxResult<()> {
        match node {
            ContentNode::Paragraph(paragraph) => self.write_paragraph(xml, paragraph),
            ContentNode::Table(table) => self.write_table(xml, table, rels)?,
            ContentNode::Image(image) => {
                // Body-level images render centered on their own line
                xml.push_str(r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr>"#);
                self.write_image_run(xml, image, rels);
                xml.push_str("</w:p>");
            }
            ContentNode::PageBreak => {
                xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
            }
        }
        Ok(())
    }

    fn write_paragraph(&self, xml: &mut String, paragraph: &Paragraph) {
        xml.push_str("<w:p>");
        self.write_paragraph_properties(xml, paragraph);
        for run in &paragraph.runs {
            self.write_run(xml, run);
        }
        xml.push_str("</w:p>");
    }

    fn write_paragraph_properties(&self, xml: &mut String, paragraph: &Paragraph) {
        let has_style = paragraph.heading.is_some();
        let has_align = paragraph.align != Alignment::Left;
        let has_indent = paragraph.indent_left.is_some();
        let has_spacing = paragraph.space_before.is_some() || paragraph.space_after.is_some();

        if !has_style && !has_align && !has_indent && !has_spacing {
            return;
        }

        xml.push_str("<w:pPr>");

        if let Some(heading) = paragraph.heading {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, heading_style_id(heading)));
        }

        if has_spacing {
            xml.push_str("<w:spacing");
            if let Some(before) = paragraph.space_before {
                xml.push_str(&format!(r#" w:before="{}""#, (before * 20.0) as i32));
            }
            if let Some(after) = paragraph.space_after {
                xml.push_str(&format!(r#" w:after="{}""#, (after * 20.0) as i32));
            }
            xml.push_str("/>");
        }

        if let Some(left) = paragraph.indent_left {
            xml.push_str(&format!(r#"<w:ind w:left="{}"/>"#, (left * 20.0) as i32));
        }

        if has_align {
            let val = match paragraph.align {
                Alignment::Left => "left",
                Alignment::Center => "center",
                Alignment::Right => "right",
                Alignment::Justify => "both",
            };
            xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, val));
        }

        xml.push_str("</w:pPr>");
    }

    fn write_run(&self, xml: &mut String, run: &Run) {
        xml.push_str("<w:r>");
        self.write_run_properties(xml, run);

        // Newlines become soft breaks, tabs become w:tab
        let lines: Vec<&str> = run.text.split('\n').collect();
        for (li, line) in lines.iter().enumerate() {
            let segments: Vec<&str> = line.split('\t').collect();
            for (si, segment) in segments.iter().enumerate() {
                if !segment.is_empty() {
                    let needs_preserve = segment.starts_with(' ') || segment.ends_with(' ');
                    if needs_preserve {
                        xml.push_str(r#"<w:t xml:space="preserve">"#);
                    } else {
                        xml.push_str("<w:t>");
                    }
                    xml.push_str(&escape(*segment));
                    xml.push_str("</w:t>");
                }
                if si < segments.len() - 1 {
                    xml.push_str("<w:tab/>");
                }
            }
            if li < lines.len() - 1 {
                xml.push_str("<w:br/>");
            }
        }

        xml.push_str("</w:r>");
    }

    fn write_run_properties(&self, xml: &mut String, run: &Run) {
        let has_props = run.bold
            || run.italic
            || run.underline
            || run.color.is_some()
            || run.size.is_some();
        if !has_props {
            return;
        }

        xml.push_str("<w:rPr>");
        if run.bold {
            xml.push_str("<w:b/>");
        }
        if run.italic {
            xml.push_str("<w:i/>");
        }
        if let Some(ref color) = run.color {
            xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, color.trim_start_matches('#')));
        }
        if let Some(size) = run.size {
            let half_pts = (size * 2.0) as i32;
            xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
            xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
        }
        if run.underline {
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        xml.push_str("</w:rPr>");
    }

    fn write_table(
        &mut self,
        xml: &mut String,
        table: &Table,
        rels: &mut Relationships,
    ) -> DocxResult<()> {
        xml.push_str("<w:tbl>");
        self.write_table_properties(xml, table);
        self.write_table_grid(xml, table);
        for row in &table.rows {
            self.write_row(xml, table, row, rels)?;
        }
        xml.push_str("</w:tbl>");
        Ok(())
    }

    fn write_table_properties(&self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tblPr>");
        xml.push_str(r#"<w:tblW w:w="5000" w:type="pct"/>"#);

        match table.policy {
            BorderPolicy::Borderless => {}
            BorderPolicy::Grid => {
                xml.push_str("<w:tblBorders>");
                for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
                    xml.push_str(&format!(
                        r#"<w:{edge} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#
                    ));
                }
                xml.push_str("</w:tblBorders>");
            }
            BorderPolicy::LeftRule => {
                xml.push_str("<w:tblBorders>");
                xml.push_str(&format!(
                    r#"<w:left w:val="single" w:sz="12" w:space="0" w:color="{}"/>"#,
                    self.doc.theme.accent_color
                ));
                xml.push_str("</w:tblBorders>");
            }
        }

        xml.push_str("<w:tblCellMar>");
        xml.push_str(r#"<w:top w:w="20" w:type="dxa"/>"#);
        xml.push_str(r#"<w:left w:w="108" w:type="dxa"/>"#);
        xml.push_str(r#"<w:bottom w:w="20" w:type="dxa"/>"#);
        xml.push_str(r#"<w:right w:w="108" w:type="dxa"/>"#);
        xml.push_str("</w:tblCellMar>");
        xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="0" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);
        xml.push_str("</w:tblPr>");
    }

    fn write_table_grid(&self, xml: &mut String, table: &Table) {
        let content_width = self.doc.page.content_width() as f32;
        xml.push_str("<w:tblGrid>");
        for pct in &table.widths_pct {
            let twips = (content_width * pct / 100.0) as i32;
            xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, twips));
        }
        xml.push_str("</w:tblGrid>");
    }

    fn write_row(
        &mut self,
        xml: &mut String,
        table: &Table,
        row: &Row,
        rels: &mut Relationships,
    ) -> DocxResult<()> {
        xml.push_str("<w:tr>");
        if row.header {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }

        let mut column = 0usize;
        for cell in &row.cells {
            self.write_cell(xml, table, cell, column, rels)?;
            column += cell.span;
        }

        xml.push_str("</w:tr>");
        Ok(())
    }

    fn write_cell(
        &mut self,
        xml: &mut String,
        table: &Table,
        cell: &Cell,
        column: usize,
        rels: &mut Relationships,
    ) -> DocxResult<()> {
        xml.push_str("<w:tc>");
        xml.push_str("<w:tcPr>");

        // Width covers every grid column the cell spans
        let pct: f32 = table
            .widths_pct
            .iter()
            .skip(column)
            .take(cell.span)
            .sum();
        xml.push_str(&format!(
            r#"<w:tcW w:w="{}" w:type="pct"/>"#,
            (pct * 50.0) as i32
        ));

        if cell.span > 1 {
            xml.push_str(&format!(r#"<w:gridSpan w:val="{}"/>"#, cell.span));
        }
        if let Some(ref fill) = cell.fill {
            xml.push_str(&format!(
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                fill.trim_start_matches('#')
            ));
        }
        xml.push_str("</w:tcPr>");

        for block in &cell.blocks {
            match block {
                CellBlock::Paragraph(paragraph) => self.write_paragraph(xml, paragraph),
                CellBlock::Image(image) => {
                    xml.push_str("<w:p>");
                    self.write_image_run(xml, image, rels);
                    xml.push_str("</w:p>");
                }
            }
        }
        // A cell must contain at least one paragraph
        if cell.blocks.is_empty() {
            xml.push_str("<w:p/>");
        }

        xml.push_str("</w:tc>");
        Ok(())
    }

    fn write_image_run(&mut self, xml: &mut String, image: &ImageContent, rels: &mut Relationships) {
        let rel_id = self.register_image(image, rels);
        let drawing_id = self.next_drawing_id;
        self.next_drawing_id += 1;

        xml.push_str("<w:r>");
        xml.push_str(&generate_inline_drawing(
            &rel_id,
            points_to_emu(image.width_pt),
            points_to_emu(image.height_pt),
            drawing_id,
            &format!("Picture {}", drawing_id),
            &image.alt_text,
        ));
        xml.push_str("</w:r>");
    }

    /// Allocate the next media part and its relationship
    fn register_image(&mut self, image: &ImageContent, rels: &mut Relationships) -> String {
        let index = self.media.len() + 1;
        let extension = image.format.extension();
        let filename = format!("image{}.{}", index, extension);
        let rel_id = rels.add(
            relationship_types::IMAGE,
            &format!("media/{}", filename),
            TargetMode::Internal,
        );
        self.media.push(MediaPart {
            filename,
            rel_id: rel_id.clone(),
            bytes: image.bytes.clone(),
            extension,
            mime: image.format.mime_type(),
        });
        rel_id
    }

    fn write_section_properties(&self, xml: &mut String) {
        let page = &self.doc.page;
        xml.push_str("<w:sectPr>");
        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            page.width, page.height
        ));
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="720" w:footer="720" w:gutter="0"/>"#,
            m = page.margin
        ));
        xml.push_str("</w:sectPr>");
    }
}

fn heading_style_id(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::Title => "Title",
        HeadingLevel::Section => "Heading1",
        HeadingLevel::Sub => "Heading2",
    }
}

/// Generate a w:drawing element for an inline image
fn generate_inline_drawing(
    rel_id: &str,
    width_emu: i64,
    height_emu: i64,
    doc_pr_id: u32,
    name: &str,
    alt_text: &str,
) -> String {
    format!(
        r#"<w:drawing>
<wp:inline distT="0" distB="0" distL="0" distR="0">
<wp:extent cx="{cx}" cy="{cy}"/>
<wp:effectExtent l="0" t="0" r="0" b="0"/>
<wp:docPr id="{id}" name="{name}" descr="{alt}"/>
<wp:cNvGraphicFramePr>
<a:graphicFrameLocks xmlns:a="{a_ns}" noChangeAspect="1"/>
</wp:cNvGraphicFramePr>
<a:graphic xmlns:a="{a_ns}">
<a:graphicData uri="{pic_ns}">
<pic:pic xmlns:pic="{pic_ns}">
<pic:nvPicPr>
<pic:cNvPr id="{id}" name="{name}"/>
<pic:cNvPicPr/>
</pic:nvPicPr>
<pic:blipFill>
<a:blip r:embed="{rel_id}"/>
<a:stretch>
<a:fillRect/>
</a:stretch>
</pic:blipFill>
<pic:spPr>
<a:xfrm>
<a:off x="0" y="0"/>
<a:ext cx="{cx}" cy="{cy}"/>
</a:xfrm>
<a:prstGeom prst="rect">
<a:avLst/>
</a:prstGeom>
</pic:spPr>
</pic:pic>
</a:graphicData>
</a:graphic>
</wp:inline>
</w:drawing>"#,
        cx = width_emu,
        cy = height_emu,
        id = doc_pr_id,
        name = escape(name),
        alt = escape(alt_text),
        a_ns = namespaces::A,
        pic_ns = namespaces::PIC,
        rel_id = rel_id,
    )
}

/// Convert points to EMUs (English Metric Units).
/// 1 inch = 914400 EMUs, 1 point = 12700 EMUs.
pub(crate) fn points_to_emu(points: f32) -> i64 {
    (points as f64 * 12700.0).round() as i64
}
