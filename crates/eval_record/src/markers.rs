//! Pain diagram markers: symbol codes, labels and body views

use serde::{Deserialize, Serialize};

/// Symbol placed on the body diagram during collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PainSymbol {
    Primary,
    Secondary,
    Radiating,
    Numbness,
    PinsAndNeedles,
}

impl PainSymbol {
    /// Display code drawn on the diagram and in the legend
    pub fn code(&self) -> &'static str {
        match self {
            PainSymbol::Primary => "P1",
            PainSymbol::Secondary => "P2",
            PainSymbol::Radiating => "~",
            PainSymbol::Numbness => "x",
            PainSymbol::PinsAndNeedles => "o",
        }
    }

    /// Human-readable label for the legend
    pub fn label(&self) -> &'static str {
        match self {
            PainSymbol::Primary => "Primary pain",
            PainSymbol::Secondary => "Secondary pain",
            PainSymbol::Radiating => "Radiating pain",
            PainSymbol::Numbness => "Numbness",
            PainSymbol::PinsAndNeedles => "Pins and needles",
        }
    }

    /// Legend line in the "symbol label" form the legend cell builder splits
    pub fn legend_entry(&self) -> String {
        format!("{} {}", self.code(), self.label())
    }

    /// Parse the collection tool's symbol code, tolerating case
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "P1" => Some(PainSymbol::Primary),
            "P2" => Some(PainSymbol::Secondary),
            "~" => Some(PainSymbol::Radiating),
            "X" => Some(PainSymbol::Numbness),
            "O" => Some(PainSymbol::PinsAndNeedles),
            _ => None,
        }
    }

    /// All symbols in legend order
    pub fn all() -> [PainSymbol; 5] {
        [
            PainSymbol::Primary,
            PainSymbol::Secondary,
            PainSymbol::Radiating,
            PainSymbol::Numbness,
            PainSymbol::PinsAndNeedles,
        ]
    }
}

/// Which diagram silhouette a marker was placed on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyView {
    #[default]
    Front,
    Back,
    Left,
    Right,
}

/// One marker placed on the body diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainMarker {
    /// Diagram-relative coordinates (0.0 to 1.0)
    pub x: f64,
    pub y: f64,
    pub symbol: PainSymbol,
    #[serde(default)]
    pub view: BodyView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for symbol in PainSymbol::all() {
            assert_eq!(PainSymbol::from_code(symbol.code()), Some(symbol));
        }
    }

    #[test]
    fn test_from_code_is_lenient() {
        assert_eq!(PainSymbol::from_code(" p1 "), Some(PainSymbol::Primary));
        assert_eq!(PainSymbol::from_code("X"), Some(PainSymbol::Numbness));
        assert_eq!(PainSymbol::from_code("zz"), None);
    }

    #[test]
    fn test_legend_entry_shape() {
        assert_eq!(PainSymbol::Primary.legend_entry(), "P1 Primary pain");
        assert_eq!(PainSymbol::Radiating.legend_entry(), "~ Radiating pain");
    }
}
