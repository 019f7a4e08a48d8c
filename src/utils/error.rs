use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Unknown delivery stage: {name}")]
    UnknownStage { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DeliveryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeliveryError::UnknownStage { .. } => ErrorCategory::Lookup,
            DeliveryError::IoError(_) => ErrorCategory::Io,
            DeliveryError::SerializationError(_) => ErrorCategory::Serialization,
            DeliveryError::ConfigError { .. }
            | DeliveryError::ConfigValidationError { .. }
            | DeliveryError::InvalidConfigValueError { .. }
            | DeliveryError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DeliveryError::UnknownStage { name } => format!(
                "'{}' is not a delivery stage (expected one of: received_at_depot, dispatched, delivered)",
                name
            ),
            DeliveryError::IoError(e) => format!("Could not read or write a file: {}", e),
            DeliveryError::MissingConfigError { field } => {
                format!("The journey file is missing '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Lookup => "Use --stage with received_at_depot, dispatched or delivered",
            ErrorCategory::Configuration => "Check the journey file against journey.toml",
            ErrorCategory::Io => "Make sure the file exists and is readable",
            ErrorCategory::Serialization => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, DeliveryError>;
