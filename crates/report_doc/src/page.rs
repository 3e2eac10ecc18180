//! Page geometry in twentieths of a point (twips)

use serde::{Deserialize, Serialize};

/// Page size and uniform margin, all values in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl PageGeometry {
    /// US Letter portrait with one-inch margins
    pub fn letter() -> Self {
        Self {
            width: 12240,
            height: 15840,
            margin: 1440,
        }
    }

    /// Horizontal space available to content, in twips
    pub fn content_width(&self) -> u32 {
        self.width.saturating_sub(2 * self.margin)
    }

    /// Horizontal space available to content, in points
    pub fn content_width_pt(&self) -> f32 {
        self.content_width() as f32 / 20.0
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_content_width() {
        let page = PageGeometry::letter();
        assert_eq!(page.content_width(), 9360);
        assert_eq!(page.content_width_pt(), 468.0);
    }
}
