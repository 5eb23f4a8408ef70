use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::submission::{parser, pipeline};

pub const SUCCESS_MESSAGE: &str = "Your clarity review request has been submitted successfully!";

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let raw_data = parser::parse_body(content_type, &body)?;
    let submission = pipeline::run(&state, raw_data).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": SUCCESS_MESSAGE,
            "id": submission.id,
        })),
    )
        .into_response())
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state.store.list().await?;
    Ok(Json(submissions))
}

/// Settings the page needs before it can submit.
pub async fn client_config(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(json!({ "recaptcha_site_key": state.config.recaptcha_site_key }))
}
