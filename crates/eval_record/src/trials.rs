//! Per-test trial results, normalized into a tagged union at ingestion
//!
//! The collection tool records trials as loose JSON objects whose keys vary
//! by test type and tool version. Normalization happens exactly once, here:
//! each raw trial either matches one `TrialResult` variant through aliased
//! key lookup or is dropped with a warning. Builders never see raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Body side for strength measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Some(Side::Left),
            "right" | "r" => Some(Side::Right),
            _ => None,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// One normalized trial measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TrialResult {
    Strength {
        side: Option<Side>,
        force_lb: f64,
    },
    RangeOfMotion {
        motion: Option<String>,
        degrees: f64,
    },
    Lift {
        weight_lb: f64,
        reps: u32,
    },
    PositionalTolerance {
        seconds: f64,
    },
    Cardio {
        heart_rate_bpm: f64,
    },
}

impl TrialResult {
    /// Normalize one raw trial object; `None` when no variant matches
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let obj = raw.as_object()?;

        // Lift carries both a weight and a rep count, so it is matched
        // before plain strength trials.
        if let (Some(weight), Some(reps)) = (
            num_field(obj, &["weightLb", "weight", "loadLb", "load"]),
            num_field(obj, &["reps", "repetitions", "repCount"]),
        ) {
            return Some(TrialResult::Lift {
                weight_lb: weight,
                reps: reps.max(0.0) as u32,
            });
        }
        if let Some(force) = num_field(obj, &["forceLb", "force", "gripForce"]) {
            let side = str_field(obj, &["side", "hand"]).and_then(|s| Side::from_str_lenient(&s));
            return Some(TrialResult::Strength {
                side,
                force_lb: force,
            });
        }
        if let Some(degrees) = num_field(obj, &["degrees", "rangeDegrees", "rom"]) {
            let motion = str_field(obj, &["motion", "movement"]);
            return Some(TrialResult::RangeOfMotion { motion, degrees });
        }
        if let Some(seconds) = num_field(obj, &["seconds", "holdSeconds", "durationSeconds"]) {
            return Some(TrialResult::PositionalTolerance { seconds });
        }
        if let Some(bpm) = num_field(obj, &["heartRateBpm", "heartRate", "bpm"]) {
            return Some(TrialResult::Cardio {
                heart_rate_bpm: bpm,
            });
        }
        None
    }

    /// The main measurement, used for summaries and variation
    pub fn primary_value(&self) -> f64 {
        match self {
            TrialResult::Strength { force_lb, .. } => *force_lb,
            TrialResult::RangeOfMotion { degrees, .. } => *degrees,
            TrialResult::Lift { weight_lb, .. } => *weight_lb,
            TrialResult::PositionalTolerance { seconds } => *seconds,
            TrialResult::Cardio { heart_rate_bpm } => *heart_rate_bpm,
        }
    }

    /// Repetition count where the trial shape carries one
    pub fn reps(&self) -> Option<u32> {
        match self {
            TrialResult::Lift { reps, .. } => Some(*reps),
            _ => None,
        }
    }
}

/// All trials recorded for one selected test
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    pub trials: Vec<TrialResult>,
    /// Wall-clock minutes the test took, when the tool recorded it
    pub duration_minutes: Option<f64>,
}

impl TestRun {
    /// Ingest one test's run data, dropping unrecognizable trials
    pub fn from_raw(test_id: &str, raw: &Value) -> Self {
        let mut run = TestRun::default();
        let Some(obj) = raw.as_object() else {
            warn!(test_id, "test run is not an object, ignoring");
            return run;
        };
        run.duration_minutes = num_field(obj, &["durationMinutes", "duration", "minutes"]);
        if let Some(raw_trials) = obj.get("trials").and_then(Value::as_array) {
            for (index, raw_trial) in raw_trials.iter().enumerate() {
                match TrialResult::from_raw(raw_trial) {
                    Some(trial) => run.trials.push(trial),
                    None => warn!(test_id, index, "trial shape not recognized, dropping"),
                }
            }
        }
        run
    }

    /// Primary measurements of every trial, in recorded order
    pub fn primary_values(&self) -> Vec<f64> {
        self.trials.iter().map(TrialResult::primary_value).collect()
    }

    /// Mean of the primary measurements
    pub fn mean_value(&self) -> Option<f64> {
        if self.trials.is_empty() {
            return None;
        }
        let values = self.primary_values();
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Total repetitions: summed rep counts when trials carry them,
    /// otherwise the number of trials performed
    pub fn total_reps(&self) -> u32 {
        let explicit: u32 = self.trials.iter().filter_map(TrialResult::reps).sum();
        if explicit > 0 {
            explicit
        } else {
            self.trials.len() as u32
        }
    }

    /// Coefficient of variation across the primary measurements, percent
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        coefficient_of_variation(&self.primary_values())
    }
}

/// Population coefficient of variation in percent; `None` below two
/// samples or at a zero mean
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if mean == 0.0 {
        return None;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt() / mean.abs() * 100.0)
}

fn num_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| obj.get(*key).and_then(Value::as_f64))
}

fn str_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
