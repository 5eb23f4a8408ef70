pub mod templates;

use serde_json::json;

use crate::config::SendGridConfig;
use crate::models::Submission;

/// Sends submitter confirmations through the SendGrid v3 mail API.
pub struct SendGridMailer {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    from: String,
    subject: String,
}

impl SendGridMailer {
    pub fn new(config: &SendGridConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to build reqwest client: {e}"))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            from: config.from.clone(),
            subject: config.subject.clone(),
        })
    }

    pub async fn send_confirmation(&self, submission: &Submission) -> Result<(), String> {
        let text = templates::render_confirmation(
            &submission.organization,
            submission.id,
            &submission.needs,
        );
        self.send(&submission.email, &text).await
    }

    async fn send(&self, to: &str, text: &str) -> Result<(), String> {
        let body = json!({
            "personalizations": [{ "to": [{ "email": to }], "subject": &self.subject }],
            "from": { "email": &self.from },
            "content": [{ "type": "text/plain", "value": text }],
        });

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("SendGrid request failed: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let detail = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            return Err(format!("SendGrid returned {status}: {detail}"));
        }

        Ok(())
    }
}
