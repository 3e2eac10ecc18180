//! styles.xml writer
//!
//! Generates docDefaults plus the fixed style set the document writer
//! references (Normal, Title, Heading1, Heading2), sized and colored from
//! the report theme.

use quick_xml::escape::escape;
use report_doc::ReportTheme;

use crate::namespaces;

/// Writer for styles.xml
pub struct StylesWriter;

impl StylesWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate styles.xml content from the theme
    pub fn write(&self, theme: &ReportTheme) -> String {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml, theme);
        self.write_normal(&mut xml, theme);
        self.write_heading(&mut xml, theme, "Title", "Title", theme.title_size, 0, 240);
        self.write_heading(&mut xml, theme, "Heading1", "heading 1", theme.heading_size, 240, 120);
        self.write_heading(&mut xml, theme, "Heading2", "heading 2", theme.subheading_size, 160, 80);

        xml.push_str("</w:styles>");
        xml
    }

    fn write_doc_defaults(&self, xml: &mut String, theme: &ReportTheme) {
        let font = escape(theme.font_family.as_str());
        let body_half_pts = (theme.body_size * 2.0) as i32;

        xml.push_str("<w:docDefaults>");
        xml.push_str("<w:rPrDefault>");
        xml.push_str("<w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/>"#
        ));
        xml.push_str(&format!(r#"<w:sz w:val="{body_half_pts}"/>"#));
        xml.push_str(&format!(r#"<w:szCs w:val="{body_half_pts}"/>"#));
        xml.push_str("</w:rPr>");
        xml.push_str("</w:rPrDefault>");
        xml.push_str("<w:pPrDefault>");
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:after="160" w:line="259" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr>");
        xml.push_str("</w:pPrDefault>");
        xml.push_str("</w:docDefaults>");
    }

    fn write_normal(&self, xml: &mut String, _theme: &ReportTheme) {
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1">"#);
        xml.push_str(r#"<w:name w:val="Normal"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="1"/>"#);
        xml.push_str("<w:qFormat/>");
        xml.push_str("</w:style>");
    }

    fn write_heading(
        &self,
        xml: &mut String,
        theme: &ReportTheme,
        style_id: &str,
        name: &str,
        size_pt: f32,
        space_before: i32,
        space_after: i32,
    ) {
        let half_pts = (size_pt * 2.0) as i32;

        xml.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="{style_id}">"#
        ));
        xml.push_str(&format!(r#"<w:name w:val="{name}"/>"#));
        xml.push_str(r#"<w:basedOn w:val="Normal"/>"#);
        xml.push_str(r#"<w:next w:val="Normal"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="9"/>"#);
        xml.push_str("<w:qFormat/>");
        xml.push_str("<w:pPr>");
        xml.push_str(&format!(
            r#"<w:spacing w:before="{space_before}" w:after="{space_after}"/>"#
        ));
        xml.push_str("<w:keepNext/>");
        xml.push_str("</w:pPr>");
        xml.push_str("<w:rPr>");
        xml.push_str("<w:b/>");
        xml.push_str(&format!(
            r#"<w:color w:val="{}"/>"#,
            theme.accent_color.trim_start_matches('#')
        ));
        xml.push_str(&format!(r#"<w:sz w:val="{half_pts}"/>"#));
        xml.push_str(&format!(r#"<w:szCs w:val="{half_pts}"/>"#));
        xml.push_str("</w:rPr>");
        xml.push_str("</w:style>");
    }
}
