//! Report theme: fonts, colors and the type scale shared by every section

use serde::{Deserialize, Serialize};

/// Visual identity applied across a whole report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTheme {
    /// Body and heading font family
    pub font_family: String,
    /// Accent color for headings, RRGGBB hex
    pub accent_color: String,
    /// Fill for shaded header and category rows, RRGGBB hex
    pub highlight_fill: String,
    /// Cover title size in points
    pub title_size: f32,
    /// Section heading size in points
    pub heading_size: f32,
    /// Sub-heading size in points
    pub subheading_size: f32,
    /// Body text size in points
    pub body_size: f32,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            accent_color: "1F4E79".to_string(),
            highlight_fill: "D9E2F3".to_string(),
            title_size: 28.0,
            heading_size: 16.0,
            subheading_size: 13.0,
            body_size: 11.0,
        }
    }
}

impl ReportTheme {
    /// Size in points for a heading level
    pub fn heading_size_for(&self, level: crate::HeadingLevel) -> f32 {
        match level {
            crate::HeadingLevel::Title => self.title_size,
            crate::HeadingLevel::Section => self.heading_size,
            crate::HeadingLevel::Sub => self.subheading_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeadingLevel;

    #[test]
    fn test_default_scale_is_descending() {
        let theme = ReportTheme::default();
        assert!(theme.title_size > theme.heading_size);
        assert!(theme.heading_size > theme.subheading_size);
        assert!(theme.subheading_size > theme.body_size);
    }

    #[test]
    fn test_heading_size_lookup() {
        let theme = ReportTheme::default();
        assert_eq!(theme.heading_size_for(HeadingLevel::Title), theme.title_size);
        assert_eq!(theme.heading_size_for(HeadingLevel::Sub), theme.subheading_size);
    }
}
