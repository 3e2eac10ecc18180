//! [Content_Types].xml generation
//!
//! This part defines the content types for everything in the package.
//! Both tables are kept in sorted maps so the generated XML is stable
//! across runs.

use std::collections::BTreeMap;

use crate::content_type_values;

/// Content types declared for the package
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Default content types by extension (e.g. "xml" -> "application/xml")
    defaults: BTreeMap<String, String>,
    /// Override content types by part name (e.g. "/word/document.xml" -> "...")
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Create the content types for a new report package
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.add_default("rels", content_type_values::RELATIONSHIPS);
        ct.add_default("xml", "application/xml");
        ct.add_override("/word/document.xml", content_type_values::DOCUMENT);
        ct.add_override("/word/styles.xml", content_type_values::STYLES);
        ct
    }

    /// Register a default content type for an extension
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_string(), content_type.to_string());
    }

    /// Register an override for a specific part
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        let normalized = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        self.overrides.insert(normalized, content_type.to_string());
    }

    /// Generate the [Content_Types].xml content
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, crate::namespaces::CT));

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, ct
            ));
        }
        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                part, ct
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_mandatory_entries() {
        let xml = ContentTypes::new().to_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
        assert!(xml.contains(r#"<Override PartName="/word/styles.xml""#));
    }

    #[test]
    fn test_output_is_stable() {
        let mut a = ContentTypes::new();
        a.add_default("png", "image/png");
        a.add_default("jpeg", "image/jpeg");

        let mut b = ContentTypes::new();
        b.add_default("jpeg", "image/jpeg");
        b.add_default("png", "image/png");

        assert_eq!(a.to_xml(), b.to_xml());
    }

    #[test]
    fn test_override_normalizes_leading_slash() {
        let mut ct = ContentTypes::default();
        ct.add_override("word/extra.xml", "application/xml");
        assert!(ct.to_xml().contains(r#"PartName="/word/extra.xml""#));
    }
}
