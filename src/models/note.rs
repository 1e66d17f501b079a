use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single record summarizing one therapy session.
///
/// `id` and `created_at` are assigned by the store on insert; `created_at`
/// governs the default listing order (newest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionNote {
    pub id: Uuid,
    /// Client name, trimmed by the caller.
    pub client_name: String,
    /// Calendar date of the session, serialized as `YYYY-MM-DD`.
    pub session_date: String,
    /// Free-text notes, 1-500 characters.
    pub quick_notes: String,
    /// Session length in minutes, 15-120.
    pub session_duration: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a session note — the only shape accepted for creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionNoteInput {
    pub client_name: String,
    pub session_date: String,
    pub quick_notes: String,
    pub session_duration: i64,
}
