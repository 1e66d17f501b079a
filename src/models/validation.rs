use serde::{Deserialize, Serialize};

/// Outcome of running the validation rules against a candidate note.
///
/// `error` is set iff `valid` is false, and carries the message of the first
/// failing rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

/// The loosely-typed request body accepted by the remote validation function.
///
/// Missing fields and a non-numeric `session_duration` must fail their
/// validation rule with a proper message, not body deserialization, so every
/// field is optional here and the duration stays a raw JSON value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNoteInput {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub session_date: Option<String>,
    #[serde(default)]
    pub quick_notes: Option<String>,
    #[serde(default)]
    pub session_duration: serde_json::Value,
}
