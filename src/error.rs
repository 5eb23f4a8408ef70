use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    /// Body that is not a JSON object payload at all: wrong content type,
    /// unparseable JSON, or a scalar. Reported like any other processing failure.
    Malformed(String),
    MissingFields,
    InvalidFieldType(&'static str),
    InvalidEmail,
    CaptchaMissing,
    CaptchaRejected,
    CaptchaUnavailable(String),
    Store(StoreError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Malformed(msg) => write!(f, "Error processing request: {msg}"),
            AppError::MissingFields => write!(f, "Missing required fields"),
            AppError::InvalidFieldType(field) => write!(f, "Field must be a string: {field}"),
            AppError::InvalidEmail => write!(f, "Invalid email address"),
            AppError::CaptchaMissing => write!(f, "reCAPTCHA token missing"),
            AppError::CaptchaRejected => write!(f, "reCAPTCHA verification failed"),
            AppError::CaptchaUnavailable(_) => write!(f, "reCAPTCHA verification error"),
            AppError::Store(err) => write!(f, "Error processing request: {err}"),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields
            | AppError::InvalidFieldType(_)
            | AppError::InvalidEmail
            | AppError::CaptchaMissing => StatusCode::BAD_REQUEST,
            AppError::CaptchaRejected => StatusCode::FORBIDDEN,
            AppError::CaptchaUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::Malformed(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Store(err) => tracing::error!("Store error: {err}"),
            AppError::Malformed(msg) => tracing::warn!("Malformed submission: {msg}"),
            AppError::CaptchaUnavailable(msg) => tracing::error!("reCAPTCHA verification error: {msg}"),
            other => tracing::debug!("Rejected submission: {other}"),
        }

        let body = json!({ "success": false, "message": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
