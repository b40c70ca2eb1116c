use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where forwarded contact messages land.
    pub contact_recipient: String,
    /// Resend API key. When unset the log-only mailer is used instead.
    pub resend_api_key: Option<String>,
    pub resend_endpoint: String,
    /// Optional portfolio content override file; the compiled-in document is
    /// served otherwise.
    pub content_path: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            contact_recipient: require_env("CONTACT_RECIPIENT")?,
            resend_api_key: std::env::var("RESEND_API_KEY").ok(),
            resend_endpoint: std::env::var("RESEND_ENDPOINT")
                .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
            content_path: std::env::var("CONTENT_PATH").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
