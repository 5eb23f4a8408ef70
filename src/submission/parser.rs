use serde_json::Value;

use crate::error::AppError;

/// Parse a JSON request body. Any content type other than `application/json`
/// (or a `+json` suffix type) is refused.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, AppError> {
    if !content_type.is_some_and(is_json) {
        return Err(AppError::Malformed(
            "Unsupported Media Type: request Content-Type was not 'application/json'".to_string(),
        ));
    }

    serde_json::from_slice(body).map_err(|e| AppError::Malformed(format!("Invalid JSON: {e}")))
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
