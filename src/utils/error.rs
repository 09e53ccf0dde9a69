use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid argument `{field}` ({value}): {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DemoError {
    pub fn invalid_argument(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        DemoError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DemoError::InvalidArgument { .. })
    }

    /// Short message suitable for stderr, without the variant prefix.
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::InvalidArgument { field, reason, .. } => {
                format!("{} rejected: {}", field, reason)
            }
            DemoError::ConfigError { message } => format!("Could not load configuration: {}", message),
            DemoError::ConfigValidationError { field, message } => {
                format!("Configuration field `{}` is invalid: {}", field, message)
            }
            DemoError::IoError(e) => format!("File access failed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
