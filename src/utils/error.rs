use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("{}", .errors.join(", "))]
    ValidationError { errors: Vec<String> },

    #[error("Rejected WhatsApp URL: {reason}")]
    UrlRejected { reason: String },

    #[error("Navigation failed: {message}")]
    NavigationError { message: String },

    #[error("Unsupported language: {code}")]
    UnsupportedLanguage { code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    UserInput,
    Security,
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ContactError {
    pub fn validation(message: impl Into<String>) -> Self {
        ContactError::ValidationError {
            errors: vec![message.into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactError::IoError(_)
            | ContactError::SerializationError(_)
            | ContactError::TomlError(_)
            | ContactError::ConfigError { .. }
            | ContactError::InvalidConfigValueError { .. }
            | ContactError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ContactError::ValidationError { .. } | ContactError::UnsupportedLanguage { .. } => {
                ErrorCategory::UserInput
            }
            ContactError::UrlRejected { .. } => ErrorCategory::Security,
            ContactError::NavigationError { .. } => ErrorCategory::Platform,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContactError::UnsupportedLanguage { .. } => ErrorSeverity::Low,
            ContactError::ValidationError { .. } | ContactError::NavigationError { .. } => {
                ErrorSeverity::Medium
            }
            ContactError::UrlRejected { .. }
            | ContactError::ConfigError { .. }
            | ContactError::InvalidConfigValueError { .. }
            | ContactError::MissingConfigError { .. } => ErrorSeverity::High,
            ContactError::IoError(_)
            | ContactError::SerializationError(_)
            | ContactError::TomlError(_) => ErrorSeverity::Critical,
        }
    }

    /// Short text suitable for a toast or a one-line CLI error.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactError::ValidationError { errors } => errors.join(", "),
            ContactError::UrlRejected { .. } => "URL de WhatsApp inválida".to_string(),
            ContactError::NavigationError { .. } => "Error abriendo WhatsApp".to_string(),
            ContactError::UnsupportedLanguage { code } => {
                format!("Idioma no soportado: {}", code)
            }
            ContactError::IoError(_)
            | ContactError::SerializationError(_)
            | ContactError::TomlError(_)
            | ContactError::ConfigError { .. }
            | ContactError::InvalidConfigValueError { .. }
            | ContactError::MissingConfigError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the site configuration file and its values",
            ErrorCategory::UserInput => "Review the highlighted fields and try again",
            ErrorCategory::Security => "Only wa.me and whatsapp.com HTTPS links can be opened",
            ErrorCategory::Platform => "Retry in a moment or open WhatsApp manually",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_joins_messages() {
        let err = ContactError::ValidationError {
            errors: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "a, b");
        assert_eq!(err.category(), ErrorCategory::UserInput);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_rejected_url_is_security_error() {
        let err = ContactError::UrlRejected {
            reason: "host".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Security);
        assert_eq!(err.user_friendly_message(), "URL de WhatsApp inválida");
    }
}
