use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::mailer::OutboundMail;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub status: String,
    pub received_at: DateTime<Utc>,
}

/// Checks the form fields. The rules are deliberately light: every field
/// non-blank, and the email shaped like an address.
fn validate(req: &ContactRequest) -> Result<(), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }
    let email = req.email.trim();
    if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AppError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// POST /api/v1/contact
/// Validates the form and forwards it through the configured mailer.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    validate(&req)?;

    let mail = OutboundMail {
        to: state.config.contact_recipient.clone(),
        reply_to: req.email.trim().to_string(),
        subject: format!("Portfolio contact from {}", req.name.trim()),
        text: req.message,
    };
    state.mailer.send(&mail).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactResponse {
            id: Uuid::new_v4(),
            status: "sent".to_string(),
            received_at: Utc::now(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(&make_request("Ada", "ada@example.com", "Hi")).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = validate(&make_request("  ", "ada@example.com", "Hi")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_message_rejected() {
        assert!(validate(&make_request("Ada", "ada@example.com", "")).is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        assert!(validate(&make_request("Ada", "not-an-email", "Hi")).is_err());
        assert!(validate(&make_request("Ada", "@example.com", "Hi")).is_err());
        assert!(validate(&make_request("Ada", "ada@", "Hi")).is_err());
    }

    #[test]
    fn test_email_is_trimmed_before_checking() {
        assert!(validate(&make_request("Ada", "  ada@example.com  ", "Hi")).is_ok());
    }
}
