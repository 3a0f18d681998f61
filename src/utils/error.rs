use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Variável de ambiente obrigatória ausente (nome da variável)
    MissingConfig(String),
    InvalidConfig(String),
    Provider(String),
    Storage(String),
    InvalidRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingConfig(var) => write!(f, "{} not found in environment variables", var),
            AppError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            AppError::Provider(msg) => write!(f, "Error sending email: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_names_variable() {
        let err = AppError::MissingConfig("FROM_EMAIL".to_string());
        assert_eq!(err.to_string(), "FROM_EMAIL not found in environment variables");
    }

    #[test]
    fn test_io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: denied");
    }
}
