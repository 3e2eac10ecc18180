//! The evaluation record and its ingestion from the collection payload
//!
//! Ingestion is deliberately asymmetric: the test selection is validated
//! hard (it drives the whole Test Results section and a wrong type means a
//! malformed request), while every other field degrades quietly. A missing
//! or unparsable sub-object becomes its default and renders downstream as
//! empty strings, never as an error.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::{json_type_name, BodyView, PainMarker, PainSymbol, RecordError, Result, TestRun};

/// Claimant identity fields, all optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClaimantData {
    pub full_name: Option<String>,
    pub claim_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub evaluation_date: Option<String>,
    pub occupation: Option<String>,
    pub employer: Option<String>,
    pub referring_physician: Option<String>,
    pub dominant_hand: Option<String>,
}

/// Evaluator and clinic profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClinicProfile {
    pub clinic_name: Option<String>,
    pub evaluator_name: Option<String>,
    pub credentials: Option<String>,
    #[serde(alias = "address")]
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Logo reference: URL or data URL
    pub logo: Option<String>,
}

/// Narrative fields bound into the report body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Narratives {
    pub mechanism_of_injury: Option<String>,
    /// Conclusion paragraphs in order
    pub conclusions: Vec<String>,
    pub recommendations: Option<String>,
}

/// One referral question with its measured-vs-normative comparisons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferralQuestion {
    #[serde(alias = "question")]
    pub prompt: String,
    #[serde(alias = "narrative")]
    pub answer: String,
    pub comparisons: Vec<NormComparison>,
}

/// One measured-vs-normative comparison row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormComparison {
    pub area: String,
    #[serde(alias = "measuredValue")]
    pub measured: String,
    #[serde(alias = "passFail")]
    pub rating: String,
    #[serde(alias = "normativeValue")]
    pub normative: String,
    /// Percent of normative when the tool supplies it; computed otherwise
    #[serde(alias = "percentOfNormative")]
    pub percent: Option<String>,
}

/// One digital library item: an image reference plus optional caption
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LibraryImage {
    pub reference: String,
    pub caption: Option<String>,
}

/// The complete structured input for one report request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationRecord {
    pub claimant: ClaimantData,
    pub clinic: ClinicProfile,
    /// Selected test identifiers, in selection order
    pub tests: Vec<String>,
    /// Trial results keyed by test identifier
    pub test_runs: BTreeMap<String, TestRun>,
    pub pain_markers: Vec<PainMarker>,
    /// Body diagram export (URL or data URL)
    pub body_diagram: Option<String>,
    pub narratives: Narratives,
    pub referral_questions: Vec<ReferralQuestion>,
    /// Illustrative image references for the referral section strip
    pub referral_images: Vec<String>,
    pub library_images: Vec<LibraryImage>,
}

impl EvaluationRecord {
    /// Ingest the JSON-shaped payload handed over by the collection tool.
    ///
    /// The only rejection is `tests` not being an array; it is checked
    /// before any other field is touched. Everything else parses leniently.
    pub fn from_json(value: &Value) -> Result<Self> {
        let tests = match value.get("tests") {
            Some(Value::Array(items)) => collect_strings(items, "tests"),
            Some(other) => {
                return Err(RecordError::TestsNotAList {
                    found: json_type_name(other),
                })
            }
            None => return Err(RecordError::TestsNotAList { found: "missing" }),
        };

        let mut test_runs = BTreeMap::new();
        if let Some(results) = value.get("testResults").and_then(Value::as_object) {
            for (test_id, raw) in results {
                test_runs.insert(test_id.clone(), TestRun::from_raw(test_id, raw));
            }
        }

        Ok(Self {
            claimant: section(value, "claimantData"),
            clinic: section(value, "clientProfileData"),
            tests,
            test_runs,
            pain_markers: parse_markers(value),
            body_diagram: value
                .get("bodyDiagram")
                .and_then(Value::as_str)
                .map(str::to_string),
            narratives: parse_narratives(value),
            referral_questions: parse_questions(value),
            referral_images: value
                .get("referralImages")
                .and_then(Value::as_array)
                .map(|items| collect_strings(items, "referralImages"))
                .unwrap_or_default(),
            library_images: parse_library(value),
        })
    }

    /// Trial run for one selected test, empty when the tool recorded none
    pub fn run_for(&self, test_id: &str) -> Option<&TestRun> {
        self.test_runs.get(test_id)
    }

    /// Distinct pain symbols present on the diagram, in legend order
    pub fn marked_symbols(&self) -> Vec<PainSymbol> {
        PainSymbol::all()
            .into_iter()
            .filter(|symbol| self.pain_markers.iter().any(|m| m.symbol == *symbol))
            .collect()
    }
}

/// Deserialize one named sub-object, falling back to defaults
fn section<T: DeserializeOwned + Default>(value: &Value, key: &str) -> T {
    match value.get(key) {
        None | Some(Value::Null) => T::default(),
        Some(raw) => serde_json::from_value(raw.clone()).unwrap_or_else(|err| {
            warn!(key, %err, "section failed to parse, using defaults");
            T::default()
        }),
    }
}

fn collect_strings(items: &[Value], key: &str) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                warn!(key, index, "entry is not a string, skipping");
                None
            }
        })
        .collect()
}

fn parse_markers(value: &Value) -> Vec<PainMarker> {
    let Some(items) = value.get("painMarkers").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let obj = item.as_object()?;
            let symbol = obj
                .get("symbol")
                .and_then(Value::as_str)
                .and_then(PainSymbol::from_code);
            let x = obj.get("x").and_then(Value::as_f64);
            let y = obj.get("y").and_then(Value::as_f64);
            match (symbol, x, y) {
                (Some(symbol), Some(x), Some(y)) => Some(PainMarker {
                    x,
                    y,
                    symbol,
                    view: obj
                        .get("view")
                        .and_then(Value::as_str)
                        .and_then(parse_view)
                        .unwrap_or_default(),
                }),
                _ => {
                    warn!(index, "pain marker missing symbol or coordinates, skipping");
                    None
                }
            }
        })
        .collect()
}

fn parse_view(s: &str) -> Option<BodyView> {
    match s.trim().to_ascii_lowercase().as_str() {
        "front" => Some(BodyView::Front),
        "back" => Some(BodyView::Back),
        "left" => Some(BodyView::Left),
        "right" => Some(BodyView::Right),
        _ => None,
    }
}

fn parse_narratives(value: &Value) -> Narratives {
    let mut out = Narratives::default();
    let Some(obj) = value.get("narratives").and_then(Value::as_object) else {
        return out;
    };
    out.mechanism_of_injury = obj
        .get("mechanismOfInjury")
        .and_then(Value::as_str)
        .map(str::to_string);
    out.recommendations = obj
        .get("recommendations")
        .and_then(Value::as_str)
        .map(str::to_string);
    // Conclusions arrive as one string or a paragraph list
    out.conclusions = match obj.get("conclusions") {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => collect_strings(items, "narratives.conclusions"),
        _ => Vec::new(),
    };
    out
}

fn parse_questions(value: &Value) -> Vec<ReferralQuestion> {
    let Some(items) = value.get("referralQuestions").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            serde_json::from_value(item.clone())
                .map_err(|err| warn!(index, %err, "referral question failed to parse, skipping"))
                .ok()
        })
        .collect()
}

fn parse_library(value: &Value) -> Vec<LibraryImage> {
    let Some(items) = value.get("libraryImages").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::String(reference) => Some(LibraryImage {
                reference: reference.clone(),
                caption: None,
            }),
            Value::Object(obj) => {
                let reference = ["ref", "url", "src"]
                    .iter()
                    .find_map(|key| obj.get(*key).and_then(Value::as_str))?
                    .to_string();
                Some(LibraryImage {
                    reference,
                    caption: obj
                        .get("caption")
                        .or_else(|| obj.get("title"))
                        .and_then(Value::as_str)
                        .map(str::to_string),
                })
            }
            _ => {
                warn!(index, "library entry is neither string nor object, skipping");
                None
            }
        })
        .collect()
}
