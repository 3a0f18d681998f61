use crate::utils::error::AppError;
use std::path::PathBuf;

pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";
pub const DEFAULT_USERS_FILE: &str = "data/users.json";

/// Credenciais do SendGrid. Ficam opcionais no startup e são
/// exigidas apenas no momento do envio.
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    pub api_key: Option<String>,
    pub from_email: Option<String>,
    pub base_url: String,
}

impl Default for SendGridConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from_email: None,
            base_url: DEFAULT_SENDGRID_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub users_file: PathBuf,
    pub sendgrid: SendGridConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de lookup.
    /// Valores vazios contam como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::InvalidConfig(format!("PORT '{}': {}", raw, e)))?,
            None => 8000,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            users_file: var("USERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_USERS_FILE)),
            sendgrid: SendGridConfig {
                api_key: var("SENDGRID_API_KEY"),
                from_email: var("FROM_EMAIL"),
                base_url: var("SENDGRID_API_URL")
                    .unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.to_string()),
            },
        })
    }
}
