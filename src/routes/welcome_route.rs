/*
    * This file defines the route(s) for the "welcome" endpoints.
    * We register GET / for the static greeting and GET /{name} for the
    * personalized one.
*/

use axum::{routing::get, Router};

use crate::controllers::welcome_controller::{welcome_handler, welcome_name_handler};
use crate::config::state::AppState;

pub fn welcome_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/{name}", get(welcome_name_handler))
}
