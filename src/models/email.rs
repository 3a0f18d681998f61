use crate::utils::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_from_name() -> String {
    "Your App".to_string()
}

fn default_user_name() -> String {
    "User".to_string()
}

fn default_notification_type() -> String {
    "General".to_string()
}

fn default_priority() -> String {
    "Medium".to_string()
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct EmailRequest {
    pub to_email: String,
    pub subject: String,
    pub message: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct WelcomeEmailRequest {
    pub to_email: String,
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct NotificationEmailRequest {
    pub to_email: String,
    #[serde(default = "default_notification_type")]
    pub notification_type: String,
    pub message: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

impl EmailRequest {
    /// Devolve o destinatário normalizado
    pub fn validate(&self) -> Result<String, AppError> {
        validate_email(&self.to_email)
    }
}

impl WelcomeEmailRequest {
    /// Devolve o destinatário normalizado
    pub fn validate(&self) -> Result<String, AppError> {
        validate_email(&self.to_email)
    }
}

impl NotificationEmailRequest {
    /// Devolve o destinatário normalizado
    pub fn validate(&self) -> Result<String, AppError> {
        validate_email(&self.to_email)
    }
}

/// Domínio em minúsculas, parte local como foi escrita
pub fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Checagem sintática mínima de endereço (`local@dominio.tld`).
/// Em caso de sucesso devolve o endereço normalizado.
pub fn validate_email(email: &str) -> Result<String, AppError> {
    let invalid = |reason: &str| {
        Err(AppError::InvalidRequest(format!(
            "'{}' is not a valid email address: {}",
            email, reason
        )))
    };

    if email.chars().any(char::is_whitespace) {
        return invalid("contains whitespace");
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return invalid("missing @ symbol"),
    };

    if local.is_empty() {
        return invalid("empty local part");
    }
    if domain.contains('@') {
        return invalid("more than one @ symbol");
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return invalid("invalid domain");
    }

    Ok(normalize_email(email))
}

/// Email renderizado por um template, ainda sem destinatário
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub from_name: String,
}

impl RenderedEmail {
    pub fn to(self, to_email: &str) -> OutgoingEmail {
        OutgoingEmail {
            to_email: to_email.to_string(),
            from_name: self.from_name,
            subject: self.subject,
            html: self.html,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to_email: String,
    pub from_name: String,
    pub subject: String,
    pub html: String,
}

/// Resposta do provedor devolvida ao cliente em `result`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct SendResult {
    pub status_code: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.co").is_ok());
    }

    #[test]
    fn test_domain_is_lowercased() {
        assert_eq!(validate_email("Lia@EXAMPLE.com").unwrap(), "Lia@example.com");
        assert_eq!(validate_email("user@example.com").unwrap(), "user@example.com");
        assert_eq!(normalize_email("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "plainaddress", "@example.com", "user@", "user@localhost", "a@b@c.com", "user@example..com", "us er@example.com"] {
            assert!(validate_email(email).is_err(), "accepted {:?}", email);
        }
    }

    #[test]
    fn test_request_defaults() {
        let req: EmailRequest = serde_json::from_value(serde_json::json!({
            "to_email": "a@example.com",
            "subject": "Hi",
            "message": "Hello"
        }))
        .unwrap();
        assert_eq!(req.from_name, "Your App");

        let req: WelcomeEmailRequest = serde_json::from_value(serde_json::json!({ "to_email": "a@example.com" })).unwrap();
        assert_eq!(req.user_name, "User");

        let req: NotificationEmailRequest = serde_json::from_value(serde_json::json!({
            "to_email": "a@example.com",
            "message": "Disk almost full"
        }))
        .unwrap();
        assert_eq!(req.notification_type, "General");
        assert_eq!(req.priority, "Medium");
    }

    #[test]
    fn test_message_is_required() {
        let result: Result<NotificationEmailRequest, _> = serde_json::from_value(serde_json::json!({ "to_email": "a@example.com" }));
        assert!(result.is_err());
    }
}
