use thiserror::Error;

/// Errors raised by the domain engines.
///
/// `InvalidArgument` is always fatal to the call that raised it: no partial
/// result is produced. Suspicious-but-processable data is not an error; the
/// engines report it as an anomaly next to their result.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl DomainError {
    /// Shorthand used by validators throughout the workspace.
    pub fn invalid(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DomainError::InvalidArgument(_))
    }
}

impl From<config::ConfigError> for DomainError {
    fn from(err: config::ConfigError) -> Self {
        DomainError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(err: validator::ValidationErrors) -> Self {
        DomainError::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
