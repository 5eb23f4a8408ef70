use std::sync::Arc;

use crate::config::Config;
use crate::email::SendGridMailer;
use crate::store::SubmissionStore;
use crate::submission::recaptcha::RecaptchaVerifier;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: SubmissionStore,
    pub config: Config,
    pub recaptcha: Option<RecaptchaVerifier>,
    pub mailer: Option<SendGridMailer>,
}
