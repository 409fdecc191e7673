use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Screenshot decode error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("WebDriver error ({error}): {message}")]
    WebDriverError { error: String, message: String },

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Browser,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CaptureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CaptureError::ApiError(_) => ErrorCategory::Network,
            CaptureError::WebDriverError { .. }
            | CaptureError::ElementNotFound { .. }
            | CaptureError::DecodeError(_) => ErrorCategory::Browser,
            CaptureError::IoError(_) | CaptureError::SerializationError(_) => ErrorCategory::Io,
            CaptureError::ConfigError { .. }
            | CaptureError::InvalidConfigValueError { .. }
            | CaptureError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CaptureError::ElementNotFound { .. } => ErrorSeverity::Low,
            CaptureError::ApiError(_) => ErrorSeverity::Medium,
            CaptureError::WebDriverError { .. }
            | CaptureError::DecodeError(_)
            | CaptureError::IoError(_)
            | CaptureError::SerializationError(_) => ErrorSeverity::High,
            CaptureError::ConfigError { .. }
            | CaptureError::InvalidConfigValueError { .. }
            | CaptureError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the WebDriver server and Jenkins are reachable, then try again"
            }
            ErrorCategory::Browser => {
                "Make sure chromedriver is running and the Jenkins UI finished loading"
            }
            ErrorCategory::Io => "Check output directory permissions and available disk space",
            ErrorCategory::Config => "Review the command line flags and environment variables",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CaptureError::ApiError(e) => format!("Could not reach the remote server: {}", e),
            CaptureError::WebDriverError { error, message } => {
                format!("The browser session reported '{}': {}", error, message)
            }
            CaptureError::ElementNotFound { selector } => {
                format!("The page element '{}' was not found", selector)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CaptureError>;
