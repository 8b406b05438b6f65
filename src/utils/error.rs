use crate::domain::validation::FieldErrors;
use thiserror::Error;

/// Generic text shown when the data store rejects a write without saying why.
pub const REMOTE_FALLBACK_MESSAGE: &str = "Please try again later.";

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Supabase is not configured. Please set SUPABASE_URL and SUPABASE_ANON_KEY.";

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Network error: {message}")]
    Network { status: Option<u16>, message: String },

    #[error("Validation error: {errors}")]
    Validation { errors: FieldErrors },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Remote store error: {message}")]
    Remote { message: String },

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Input,
    Configuration,
    Remote,
    System,
}

impl PortfolioError {
    pub fn network(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Network {
            status,
            message: message.into(),
        }
    }

    pub fn not_configured() -> Self {
        Self::Configuration {
            message: NOT_CONFIGURED_MESSAGE.to_string(),
        }
    }

    /// Builds a remote error, falling back to the generic text when the store
    /// gave no usable message.
    pub fn remote(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| REMOTE_FALLBACK_MESSAGE.to_string());
        Self::Remote { message }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network { .. } => ErrorCategory::Network,
            Self::Validation { .. } => ErrorCategory::Input,
            Self::Configuration { .. }
            | Self::InvalidConfigValue { .. }
            | Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::Remote { .. } => ErrorCategory::Remote,
            Self::Io(_) => ErrorCategory::System,
        }
    }

    /// Text suitable for a notice shown to the visitor.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Network { .. } => "Unable to load repositories from GitHub right now.".to_string(),
            Self::Validation { errors } => errors.to_string(),
            Self::Configuration { message } | Self::Remote { message } => message.clone(),
            Self::InvalidConfigValue { field, reason, .. } => format!("{}: {}", field, reason),
            Self::ConfigParse { message } => message.clone(),
            Self::Io(e) => e.to_string(),
        }
    }

    /// HTTP status behind a network failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_falls_back_on_missing_message() {
        let err = PortfolioError::remote(None);
        assert_eq!(err.user_friendly_message(), REMOTE_FALLBACK_MESSAGE);

        let err = PortfolioError::remote(Some("   ".to_string()));
        assert_eq!(err.user_friendly_message(), REMOTE_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_remote_keeps_store_message() {
        let err = PortfolioError::remote(Some("duplicate key value".to_string()));
        assert_eq!(err.user_friendly_message(), "duplicate key value");
        assert_eq!(err.category(), ErrorCategory::Remote);
    }

    #[test]
    fn test_network_status() {
        let err = PortfolioError::network(Some(500), "Failed to fetch repositories");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.to_string().contains("Failed to fetch repositories"));
    }
}
