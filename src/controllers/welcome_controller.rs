/*
    * Handler logic for the "welcome" endpoints. Both respond with plain
    * text; the named variant echoes the (already percent-decoded) path
    * segment verbatim into the greeting.
*/

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::config::state::AppState;

#[tracing::instrument(skip(_state))]
pub async fn welcome_handler(
    State(_state): State<AppState>,
) -> (StatusCode, &'static str) {
    (StatusCode::OK, "Hello, World22s!")
}

#[tracing::instrument(skip(_state))]
pub async fn welcome_name_handler(
    State(_state): State<AppState>,
    Path(name): Path<String>,
) -> (StatusCode, String) {
    // No validation on purpose: any segment the router accepts is greeted
    (StatusCode::OK, format!("Hello, {name}!"))
}
