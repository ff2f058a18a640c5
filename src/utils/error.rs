use thiserror::Error;

#[derive(Error, Debug)]
pub enum IncomeError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Failed to load model from '{path}': {reason}")]
    ModelLoadError { path: String, reason: String },

    #[error("Reference dataset error: {message}")]
    DatasetError { message: String },

    #[error("Invalid form value '{value}' for '{field}': {reason}")]
    FormValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Model,
    Data,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl IncomeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IncomeError::ConfigError { .. }
            | IncomeError::ConfigValidationError { .. }
            | IncomeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            IncomeError::ModelLoadError { .. } | IncomeError::SerializationError(_) => {
                ErrorCategory::Model
            }
            IncomeError::CsvError(_) | IncomeError::DatasetError { .. } => ErrorCategory::Data,
            IncomeError::FormValueError { .. } => ErrorCategory::Input,
            IncomeError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Startup cannot continue past anything above `Medium`.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Model | ErrorCategory::Data | ErrorCategory::System => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IncomeError::ModelLoadError { path, .. } => {
                format!("The prediction model at '{}' could not be loaded", path)
            }
            IncomeError::DatasetError { .. } | IncomeError::CsvError(_) => {
                "The reference dataset could not be read".to_string()
            }
            IncomeError::FormValueError { field, value, reason } => {
                format!("'{}' is not accepted for {}: {}", value, field, reason)
            }
            IncomeError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IncomeError::ModelLoadError { .. } | IncomeError::SerializationError(_) => {
                "Check that the model file exists and lists 19 finite coefficients in the expected feature order"
            }
            IncomeError::DatasetError { .. } | IncomeError::CsvError(_) => {
                "Check the dataset path and that it has the education, income type and age columns"
            }
            IncomeError::FormValueError { .. } => {
                "Run the `options` command to see the accepted choices and bounds"
            }
            IncomeError::IoError(_) => "Check that the path exists and is readable",
            _ => "Review the configuration file and command line flags",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, IncomeError>;
