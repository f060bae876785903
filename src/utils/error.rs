use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },

    #[error("Map widget error: {message}")]
    WidgetError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// User input problem, recoverable by re-entry.
    Low,
    /// The map widget refused an operation.
    Medium,
    /// Bad configuration or unreadable input file.
    High,
}

impl PageError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PageError::InvalidEmail { .. } => ErrorSeverity::Low,
            PageError::WidgetError { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn widget(message: impl Into<String>) -> Self {
        PageError::WidgetError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
