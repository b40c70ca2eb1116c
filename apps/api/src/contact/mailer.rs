//! Mail delivery — the single point of exit for contact messages.
//!
//! Default: `ResendMailer` (HTTP API, one POST per message, no retries — the
//! visitor sees the failure and can resubmit).
//! Fallback: `LogMailer` when no API key is configured, so local runs work
//! without credentials.
//!
//! `AppState` holds an `Arc<dyn Mailer>`, chosen at startup.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;

/// Sender address presented to the mail provider. Resend requires a verified
/// domain; the visitor's address goes in `reply_to`.
const FROM_ADDRESS: &str = "Portfolio Contact <contact@portfolio.local>";

/// An outbound contact message, already validated and addressed.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

/// The mail backend trait. Implement this to swap providers without touching
/// the handler.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// ResendMailer — default backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Forwards messages through the Resend HTTP API.
pub struct ResendMailer {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ResendMailer {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            endpoint,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), AppError> {
        let body = ResendRequest {
            from: FROM_ADDRESS,
            to: [mail.to.as_str()],
            reply_to: &mail.reply_to,
            subject: &mail.subject,
            text: &mail.text,
        };

        debug!("Forwarding contact message to {}", mail.to);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Mail(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Mail(format!("provider returned {status}: {detail}")));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LogMailer — credential-free fallback
// ────────────────────────────────────────────────────────────────────────────

/// Logs the message instead of delivering it. Selected when RESEND_API_KEY is
/// unset; keeps the contact endpoint exercisable in development and tests.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), AppError> {
        info!(
            to = %mail.to,
            reply_to = %mail.reply_to,
            subject = %mail.subject,
            "Contact message (log-only mailer, not delivered)"
        );
        Ok(())
    }
}
