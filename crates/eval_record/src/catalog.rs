//! Static test catalog: identifier to display name, category and unit
//!
//! The catalog is the engine's own registry; the collection tool only sends
//! identifiers. Unknown identifiers are not an error, they fall into the
//! `Other` category with the identifier echoed as the display name.

use serde::{Deserialize, Serialize};

/// Report grouping for the Test Results table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestCategory {
    HandStrength,
    RangeOfMotion,
    Lifting,
    PositionalTolerance,
    Cardiovascular,
    Other,
}

impl TestCategory {
    pub fn display(&self) -> &'static str {
        match self {
            TestCategory::HandStrength => "Hand Strength",
            TestCategory::RangeOfMotion => "Range of Motion",
            TestCategory::Lifting => "Lifting and Carrying",
            TestCategory::PositionalTolerance => "Positional Tolerance",
            TestCategory::Cardiovascular => "Cardiovascular",
            TestCategory::Other => "Other Tests",
        }
    }

    /// Categories in report order
    pub fn all() -> [TestCategory; 6] {
        [
            TestCategory::HandStrength,
            TestCategory::RangeOfMotion,
            TestCategory::Lifting,
            TestCategory::PositionalTolerance,
            TestCategory::Cardiovascular,
            TestCategory::Other,
        ]
    }
}

/// Measurement family a test's trials are expected to match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestKind {
    Strength,
    RangeOfMotion,
    Lift,
    PositionalTolerance,
    Cardio,
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TestCategory,
    pub kind: TestKind,
    /// Unit suffix for the result column
    pub unit: &'static str,
}

/// Every test the engine knows how to present
pub const CATALOG: &[TestDefinition] = &[
    TestDefinition {
        id: "hand-strength-standard",
        name: "Hand Strength (Standard Grip)",
        category: TestCategory::HandStrength,
        kind: TestKind::Strength,
        unit: "lb",
    },
    TestDefinition {
        id: "hand-strength-rapid",
        name: "Rapid Exchange Grip",
        category: TestCategory::HandStrength,
        kind: TestKind::Strength,
        unit: "lb",
    },
    TestDefinition {
        id: "pinch-key",
        name: "Key Pinch",
        category: TestCategory::HandStrength,
        kind: TestKind::Strength,
        unit: "lb",
    },
    TestDefinition {
        id: "pinch-tip",
        name: "Tip Pinch",
        category: TestCategory::HandStrength,
        kind: TestKind::Strength,
        unit: "lb",
    },
    TestDefinition {
        id: "rom-shoulder-flexion",
        name: "Shoulder Flexion",
        category: TestCategory::RangeOfMotion,
        kind: TestKind::RangeOfMotion,
        unit: "deg",
    },
    TestDefinition {
        id: "rom-lumbar-flexion",
        name: "Lumbar Flexion",
        category: TestCategory::RangeOfMotion,
        kind: TestKind::RangeOfMotion,
        unit: "deg",
    },
    TestDefinition {
        id: "rom-cervical-rotation",
        name: "Cervical Rotation",
        category: TestCategory::RangeOfMotion,
        kind: TestKind::RangeOfMotion,
        unit: "deg",
    },
    TestDefinition {
        id: "lift-floor-to-waist",
        name: "Floor to Waist Lift",
        category: TestCategory::Lifting,
        kind: TestKind::Lift,
        unit: "lb",
    },
    TestDefinition {
        id: "lift-waist-to-shoulder",
        name: "Waist to Shoulder Lift",
        category: TestCategory::Lifting,
        kind: TestKind::Lift,
        unit: "lb",
    },
    TestDefinition {
        id: "carry-two-handed",
        name: "Two-Handed Carry",
        category: TestCategory::Lifting,
        kind: TestKind::Lift,
        unit: "lb",
    },
    TestDefinition {
        id: "tolerance-standing",
        name: "Standing Tolerance",
        category: TestCategory::PositionalTolerance,
        kind: TestKind::PositionalTolerance,
        unit: "sec",
    },
    TestDefinition {
        id: "tolerance-crouching",
        name: "Crouching Tolerance",
        category: TestCategory::PositionalTolerance,
        kind: TestKind::PositionalTolerance,
        unit: "sec",
    },
    TestDefinition {
        id: "cardio-step-test",
        name: "Three-Minute Step Test",
        category: TestCategory::Cardiovascular,
        kind: TestKind::Cardio,
        unit: "bpm",
    },
];

/// Find a catalog entry by identifier
pub fn lookup(id: &str) -> Option<&'static TestDefinition> {
    CATALOG.iter().find(|def| def.id == id)
}
