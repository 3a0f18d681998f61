use crate::models::{OutgoingEmail, SendResult};
use crate::services::templates;
use crate::utils::{AppError, SendGridConfig};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const SENDGRID_SEND_PATH: &str = "/v3/mail/send";

/// Operação única de envio contra o provedor externo
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<SendResult, AppError>;
}

/// Cliente da API v3 do SendGrid
pub struct SendGridClient {
    http: reqwest::Client,
    config: SendGridConfig,
}

impl SendGridClient {
    pub fn new(config: SendGridConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::InvalidConfig(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Credenciais são verificadas a cada envio, não no startup
    fn credentials(&self) -> Result<(&str, &str), AppError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingConfig("SENDGRID_API_KEY".to_string()))?;
        let from_email = self
            .config
            .from_email
            .as_deref()
            .ok_or_else(|| AppError::MissingConfig("FROM_EMAIL".to_string()))?;

        Ok((api_key, from_email))
    }

    fn payload(from_email: &str, email: &OutgoingEmail) -> serde_json::Value {
        json!({
            "personalizations": [
                { "to": [ { "email": email.to_email } ] }
            ],
            "from": {
                "email": from_email,
                "name": email.from_name
            },
            "subject": email.subject,
            "content": [
                { "type": "text/html", "value": email.html }
            ]
        })
    }
}

#[async_trait]
impl EmailSender for SendGridClient {
    async fn send(&self, email: OutgoingEmail) -> Result<SendResult, AppError> {
        let (api_key, from_email) = self.credentials()?;
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), SENDGRID_SEND_PATH);

        log::info!("📧 Sending '{}' to {} via SendGrid", email.subject, email.to_email);

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&Self::payload(from_email, &email))
            .send()
            .await
            .map_err(|e| AppError::Provider(e.to_string()))?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.to_string(), value.to_str().unwrap_or_default().to_string())
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Provider(e.to_string()))?;

        if !status.is_success() {
            log::error!("❌ SendGrid rejected email to {}: {}", email.to_email, status);
            return Err(AppError::Provider(format!("SendGrid API error {}: {}", status, body)));
        }

        log::info!("✅ SendGrid accepted email to {} ({})", email.to_email, status);

        Ok(SendResult {
            status_code: status.as_u16(),
            body,
            headers,
        })
    }
}

/// Renderiza os templates e delega o envio ao `EmailSender`
#[derive(Clone)]
pub struct EmailService {
    sender: Arc<dyn EmailSender>,
}

impl EmailService {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        Self { sender }
    }

    pub async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        message: &str,
        from_name: &str,
    ) -> Result<SendResult, AppError> {
        let rendered = templates::custom_email(subject, message, from_name, chrono::Utc::now());
        self.sender.send(rendered.to(to_email)).await
    }

    pub async fn send_welcome_email(&self, to_email: &str, user_name: &str) -> Result<SendResult, AppError> {
        let rendered = templates::welcome_email(user_name, chrono::Utc::now());
        self.sender.send(rendered.to(to_email)).await
    }

    pub async fn send_notification_email(
        &self,
        to_email: &str,
        notification_type: &str,
        message: &str,
        priority: &str,
    ) -> Result<SendResult, AppError> {
        let rendered =
            templates::notification_email(notification_type, message, priority, chrono::Utc::now());
        self.sender.send(rendered.to(to_email)).await
    }
}
