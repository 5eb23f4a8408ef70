use serde::Deserialize;

use crate::config::RecaptchaConfig;
use crate::error::AppError;

/// Server-side check of a reCAPTCHA v2 or v3 token against the siteverify API.
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    secret: String,
    verify_url: String,
    min_score: f64,
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    #[serde(default)]
    success: bool,
    /// Only present for v3 tokens.
    score: Option<f64>,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

impl RecaptchaVerifier {
    pub fn new(config: &RecaptchaConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| format!("Failed to build reqwest client: {e}"))?;

        Ok(Self {
            client,
            secret: config.secret.clone(),
            verify_url: config.verify_url.clone(),
            min_score: config.min_score,
        })
    }

    pub async fn verify(&self, token: Option<&str>) -> Result<(), AppError> {
        let token = token.ok_or(AppError::CaptchaMissing)?;

        let resp = self
            .client
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await
            .map_err(|e| AppError::CaptchaUnavailable(format!("request failed: {e}")))?;

        let verdict: SiteVerifyResponse = resp
            .json()
            .await
            .map_err(|e| AppError::CaptchaUnavailable(format!("unreadable response: {e}")))?;

        // v3 answers carry a score; v2 answers only the success flag
        let passed = match verdict.score {
            Some(score) => score >= self.min_score,
            None => verdict.success,
        };

        if !passed {
            tracing::warn!(
                score = ?verdict.score,
                errors = ?verdict.error_codes,
                "reCAPTCHA failed"
            );
            return Err(AppError::CaptchaRejected);
        }

        Ok(())
    }
}
