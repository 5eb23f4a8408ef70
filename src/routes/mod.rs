pub mod submissions;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/submit-form", post(submissions::submit))
        .route("/api/submissions", get(submissions::list))
        .route("/api/client-config", get(submissions::client_config))
}
