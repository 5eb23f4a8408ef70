use serde_json::Value;

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

use super::fields;

/// Validate, verify the captcha if enabled, store, then send the confirmation
/// email if a mailer is configured. A failed email does not fail the submission.
pub async fn run(state: &SharedState, raw_data: Value) -> Result<Submission, AppError> {
    let new = fields::validate(&raw_data)?;

    if let Some(verifier) = &state.recaptcha {
        verifier.verify(fields::recaptcha_token(&raw_data)).await?;
    }

    let submission = state.store.append(new).await?;

    if let Some(mailer) = &state.mailer {
        if let Err(e) = mailer.send_confirmation(&submission).await {
            tracing::error!(id = submission.id, "Failed to send confirmation email: {e}");
        }
    }

    Ok(submission)
}
