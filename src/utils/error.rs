use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Index {index} is out of range for a collection of {len}")]
    OutOfRangeError { index: usize, len: usize },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Submission failed: {message}")]
    SubmissionError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Navigation,
    Input,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn config(message: impl Into<String>) -> Self {
        SiteError::ConfigError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        SiteError::ValidationError {
            message: message.into(),
        }
    }

    pub fn submission(message: impl Into<String>) -> Self {
        SiteError::SubmissionError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::TomlError(_) => ErrorCategory::Configuration,
            SiteError::OutOfRangeError { .. } => ErrorCategory::Navigation,
            SiteError::ValidationError { .. } => ErrorCategory::Input,
            SiteError::SubmissionError { .. } | SiteError::HttpError(_) => ErrorCategory::Network,
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Navigation => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::ConfigError { .. } => {
                "Check the collection named above in the content file: it needs at least one entry and ids must be unique".to_string()
            }
            SiteError::OutOfRangeError { len, .. } => {
                format!("Pick a stage between 1 and {}", len)
            }
            SiteError::ValidationError { .. } => {
                "Fill in name, email and message before sending".to_string()
            }
            SiteError::SubmissionError { .. } | SiteError::HttpError(_) => {
                "Check the [submission] endpoint or switch to mode = \"simulated\"".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the content file", field)
            }
            SiteError::MissingConfigError { field } => {
                format!("Add '{}' to the content file", field)
            }
            SiteError::TomlError(_) => "Make sure the content file is valid TOML".to_string(),
            SiteError::IoError(_) => {
                "Make sure the paths exist and are writable".to_string()
            }
            SiteError::ZipError(_) => {
                "Retry the build; if it keeps failing, report the error".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        if let SiteError::ValidationError { message } = self {
            return format!("Please check the form: {}", message);
        }
        match self.category() {
            ErrorCategory::Configuration => format!("The site configuration is invalid: {}", self),
            ErrorCategory::Navigation => format!("That stage does not exist: {}", self),
            ErrorCategory::Input => format!("Please check the form: {}", self),
            ErrorCategory::Network => "Something went wrong. Please try again.".to_string(),
            ErrorCategory::System => format!("The site could not be written: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
