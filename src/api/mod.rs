mod handlers;

use axum::{
    http::Method,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::Database;

pub fn create_router(db: Database) -> Router {
    let api = Router::new()
        // Notes
        .route("/notes", get(handlers::list_notes))
        .route("/notes", post(handlers::create_note))
        .route("/notes/{id}", delete(handlers::delete_note))
        // Validation function
        .route("/validate", post(handlers::validate_note))
        // Health
        .route("/health", get(handlers::health));

    // Browser callers get `Access-Control-Allow-Origin: *` on every response,
    // and preflight OPTIONS requests are answered by the layer.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}
