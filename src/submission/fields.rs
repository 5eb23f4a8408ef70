use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::NewSubmission;

pub const REQUIRED_FIELDS: [&str; 3] = ["organization", "email", "needs"];

/// Optional client token checked when reCAPTCHA verification is enabled.
pub const RECAPTCHA_TOKEN_FIELD: &str = "recaptchaToken";

/// Check presence, then type, then email format. All three values are trimmed.
pub fn validate(raw: &Value) -> Result<NewSubmission, AppError> {
    let obj = match raw {
        Value::Object(obj) => obj,
        // Collections simply lack the keys
        Value::Array(_) | Value::String(_) => return Err(AppError::MissingFields),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            return Err(AppError::Malformed(format!(
                "expected a JSON object, got {raw}"
            )));
        }
    };

    if !REQUIRED_FIELDS.iter().all(|field| obj.contains_key(*field)) {
        return Err(AppError::MissingFields);
    }

    let organization = string_field(obj, "organization")?;
    let email = string_field(obj, "email")?;
    let needs = string_field(obj, "needs")?;

    if !email.contains('@') {
        return Err(AppError::InvalidEmail);
    }

    Ok(NewSubmission {
        organization,
        email,
        needs,
    })
}

/// The reCAPTCHA token, if the client sent a non-empty string.
pub fn recaptcha_token(raw: &Value) -> Option<&str> {
    raw.get(RECAPTCHA_TOKEN_FIELD)
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
}

fn string_field(obj: &Map<String, Value>, name: &'static str) -> Result<String, AppError> {
    match obj.get(name) {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(_) => Err(AppError::InvalidFieldType(name)),
        None => Err(AppError::MissingFields),
    }
}
