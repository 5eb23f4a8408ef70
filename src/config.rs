use std::path::PathBuf;

pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
    /// Public key handed to the page; independent of server-side verification.
    pub recaptcha_site_key: Option<String>,
    pub recaptcha: Option<RecaptchaConfig>,
    pub sendgrid: Option<SendGridConfig>,
}

#[derive(Debug, Clone)]
pub struct RecaptchaConfig {
    pub secret: String,
    pub verify_url: String,
    pub min_score: f64,
}

#[derive(Debug, Clone)]
pub struct SendGridConfig {
    pub api_key: String,
    pub from: String,
    pub subject: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let port: u16 = env_or("PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let data_file = PathBuf::from(env_or("INTAKE_DATA_FILE", "submissions.json"));
        let static_dir = PathBuf::from(env_or("INTAKE_STATIC_DIR", "static"));

        let max_body_size: usize = env_or("INTAKE_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        let recaptcha_site_key = env_opt("RECAPTCHA_SITE_KEY");

        let recaptcha = match env_opt("RECAPTCHA_SECRET") {
            Some(secret) => Some(RecaptchaConfig {
                secret,
                verify_url: env_or("RECAPTCHA_VERIFY_URL", DEFAULT_RECAPTCHA_VERIFY_URL),
                min_score: env_or("RECAPTCHA_MIN_SCORE", "0.5")
                    .parse()
                    .map_err(|e| format!("Invalid RECAPTCHA_MIN_SCORE: {e}"))?,
            }),
            None => None,
        };

        let sendgrid = match (env_opt("SENDGRID_API_KEY"), env_opt("SENDGRID_FROM")) {
            (Some(api_key), Some(from)) => Some(SendGridConfig {
                api_key,
                from,
                subject: env_or("EMAIL_SUBJECT", "Your clarity review request"),
                api_url: env_or("SENDGRID_API_URL", DEFAULT_SENDGRID_API_URL),
            }),
            _ => None,
        };

        Ok(Config {
            port,
            data_file,
            static_dir,
            max_body_size,
            log_level,
            recaptcha_site_key,
            recaptcha,
            sendgrid,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Unset and empty are treated the same.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
