//! Error types for record ingestion

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    /// The one structural rejection: the test selection must be a JSON array.
    /// `found` names the JSON type that arrived instead ("missing" when the
    /// key is absent or the record is not an object at all).
    #[error("tests must be an array, got {found}")]
    TestsNotAList { found: &'static str },
}

pub type Result<T> = std::result::Result<T, RecordError>;

/// JSON type name used in error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
