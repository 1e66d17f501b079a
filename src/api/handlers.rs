use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::db::Database;
use crate::models::*;
use crate::validation;

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The remote validation function.
///
/// Runs the full rule table against the loosely-typed request body. A body
/// that cannot be parsed as JSON at all is a malformed request (400), which
/// callers can distinguish from a rule rejection (200 with `valid: false`).
pub async fn validate_note(
    payload: Result<Json<RawNoteInput>, JsonRejection>,
) -> (StatusCode, Json<ValidationResult>) {
    match payload {
        Ok(Json(input)) => (StatusCode::OK, Json(validation::validate(&input))),
        Err(rejection) => {
            tracing::warn!("Malformed validation request: {}", rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(ValidationResult::fail("Invalid request format")),
            )
        }
    }
}

pub async fn list_notes(
    State(db): State<Database>,
) -> Result<Json<Vec<SessionNote>>, (StatusCode, String)> {
    db.get_all_notes().map(Json).map_err(internal_error)
}

/// Create a note. Validation runs next to the insert so a note that reaches
/// the table always satisfies the full rule set.
pub async fn create_note(
    State(db): State<Database>,
    Json(input): Json<CreateSessionNoteInput>,
) -> Result<(StatusCode, Json<SessionNote>), (StatusCode, String)> {
    let verdict = validation::validate_input(&input);
    if !verdict.valid {
        let message = verdict
            .error
            .unwrap_or_else(|| "Validation failed".to_string());
        tracing::warn!("Rejected note: {}", message);
        return Err((StatusCode::BAD_REQUEST, message));
    }

    db.create_note(input)
        .map(|n| (StatusCode::CREATED, Json(n)))
        .map_err(internal_error)
}

pub async fn delete_note(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if db.delete_note(id).map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Note not found".to_string()))
    }
}
