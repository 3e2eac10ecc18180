//! Relationships (.rels) file generation
//!
//! DOCX uses relationships to connect parts of the package together.
//! Relationships are stored in insertion order so ids and output bytes
//! are stable.

/// A single relationship in a .rels file
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Unique ID within the rels file (e.g. "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part
    pub target: String,
    /// Target mode (Internal or External)
    pub target_mode: TargetMode,
}

/// Target mode for relationships
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetMode {
    /// Internal target within the package
    #[default]
    Internal,
    /// External target (URL)
    External,
}

/// Ordered collection of relationships for one .rels part
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    items: Vec<Relationship>,
    next_id: u32,
}

impl Relationships {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a relationship and return its ID
    pub fn add(&mut self, rel_type: &str, target: &str, target_mode: TargetMode) -> String {
        let id = format!("rId{}", self.next_id);
        self.next_id += 1;
        self.items.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
            target_mode,
        });
        id
    }

    /// Get a relationship by ID
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.items.iter().find(|r| r.id == id)
    }

    /// Get the first relationship of a given type
    pub fn get_by_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.items.iter().find(|r| r.rel_type == rel_type)
    }

    /// All relationships of a given type, in insertion order
    pub fn all_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.items.iter().filter(|r| r.rel_type == rel_type).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Generate the XML content for the .rels file
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            crate::namespaces::PKG_REL
        ));

        for rel in &self.items {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                rel.id, rel.rel_type, rel.target
            ));
            if rel.target_mode == TargetMode::External {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>");
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Create the root .rels for a new package
pub fn create_root_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(
        crate::relationship_types::DOCUMENT,
        "word/document.xml",
        TargetMode::Internal,
    );
    rels
}

/// Create the document.xml.rels for a new package
pub fn create_document_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(
        crate::relationship_types::STYLES,
        "styles.xml",
        TargetMode::Internal,
    );
    rels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationship_types;

    #[test]
    fn test_ids_are_sequential() {
        let mut rels = Relationships::new();
        let id1 = rels.add(relationship_types::STYLES, "styles.xml", TargetMode::Internal);
        let id2 = rels.add(
            relationship_types::IMAGE,
            "media/image1.png",
            TargetMode::Internal,
        );
        assert_eq!(id1, "rId1");
        assert_eq!(id2, "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_to_xml_marks_external_targets() {
        let mut rels = Relationships::new();
        rels.add(relationship_types::IMAGE, "https://example.test/x.png", TargetMode::External);
        let xml = rels.to_xml();
        assert!(xml.contains(r#"TargetMode="External""#));
    }

    #[test]
    fn test_to_xml_preserves_insertion_order() {
        let rels = create_document_rels();
        let xml = rels.to_xml();
        let styles_pos = xml.find("styles.xml").expect("styles entry");
        assert!(xml[..styles_pos].contains(r#"Id="rId1""#));
        assert!(rels.get_by_type(relationship_types::STYLES).is_some());
    }
}
