use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unexpected response from {source_name}: {message}")]
    ResponseError {
        source_name: String,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Output,
}

impl ErrorCategory {
    /// 2 is left to clap for argument errors.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 3,
            ErrorCategory::Data => 4,
            ErrorCategory::Output => 5,
        }
    }
}

impl StatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::ApiError(_) => ErrorCategory::Network,
            StatsError::ConfigError { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StatsError::SerializationError(_) | StatsError::ResponseError { .. } => {
                ErrorCategory::Data
            }
            StatsError::CsvError(_) | StatsError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and that the job API is reachable",
            ErrorCategory::Configuration => {
                "Check command line flags, .env file and the TOML config (e.g. SUPERJOB_API_KEY)"
            }
            ErrorCategory::Data => "The job API returned an unexpected payload, try again later",
            ErrorCategory::Output => "Check that the output directory exists and is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::ApiError(e) if e.is_timeout() => {
                "The job API did not answer in time".to_string()
            }
            StatsError::ApiError(e) => match e.status() {
                Some(status) => format!("The job API responded with HTTP {}", status),
                None => "Could not reach the job API".to_string(),
            },
            StatsError::MissingConfigError { field } => {
                format!("Required setting '{}' is not set", field)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
