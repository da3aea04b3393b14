use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Invalid argument for {kata}: {message}")]
    InvalidArgument { kata: String, message: String },

    #[error("Nothing found for {kata}: {message}")]
    NotFound { kata: String, message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    NotFound,
    Configuration,
    Io,
    Serialization,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 5] = [
        ErrorCategory::InvalidArgument,
        ErrorCategory::NotFound,
        ErrorCategory::Configuration,
        ErrorCategory::Io,
        ErrorCategory::Serialization,
    ];

    /// 對應 drill sheet 中 `expect_error` 的字串
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::InvalidArgument => "invalid_argument",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Io => "io",
            ErrorCategory::Serialization => "serialization",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定 CLI 結束碼；錯誤一律非零
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl KataError {
    pub fn invalid_argument(kata: &str, message: impl Into<String>) -> Self {
        KataError::InvalidArgument {
            kata: kata.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(kata: &str, message: impl Into<String>) -> Self {
        KataError::NotFound {
            kata: kata.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            KataError::InvalidArgument { .. } => ErrorCategory::InvalidArgument,
            KataError::NotFound { .. } => ErrorCategory::NotFound,
            KataError::ConfigValidationError { .. } | KataError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            KataError::IoError(_) => ErrorCategory::Io,
            KataError::SerializationError(_) => ErrorCategory::Serialization,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::InvalidArgument | ErrorCategory::NotFound => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KataError::InvalidArgument { kata, .. } => {
                format!("Check the input shape expected by '{}'", kata)
            }
            KataError::NotFound { .. } => {
                "The input has no unique answer; check that exactly one element stands out"
                    .to_string()
            }
            KataError::ConfigValidationError { field, .. }
            | KataError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the drill sheet", field)
            }
            KataError::IoError(_) => "Make sure the file exists and is readable".to_string(),
            KataError::SerializationError(_) => "Input must be valid JSON".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::InvalidArgument { kata, message } => {
                format!("'{}' rejected its input: {}", kata, message)
            }
            KataError::NotFound { kata, message } => format!("'{}' found no answer: {}", kata, message),
            KataError::ConfigValidationError { field, message } => {
                format!("Drill sheet problem ({}): {}", field, message)
            }
            KataError::InvalidConfigValueError { field, value, reason } => {
                format!("Drill sheet value '{}' for {} is invalid: {}", value, field, reason)
            }
            KataError::IoError(e) => format!("Could not read file: {}", e),
            KataError::SerializationError(e) => format!("Could not parse JSON: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
