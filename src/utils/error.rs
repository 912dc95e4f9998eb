use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid FASTA in {source_name} at line {line}: {reason}")]
    InvalidFasta {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("Failed to launch command '{command}': {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Process,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PipeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PipeError::IoError(_) => ErrorCategory::Io,
            PipeError::TomlError(_)
            | PipeError::ConfigError { .. }
            | PipeError::InvalidConfigValueError { .. }
            | PipeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PipeError::InvalidFasta { .. } => ErrorCategory::Input,
            PipeError::CommandLaunch { .. } => ErrorCategory::Process,
            PipeError::SerializationError(_)
            | PipeError::CsvError(_)
            | PipeError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Process => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PipeError::IoError(_) => {
                "Check that the input files exist and the output directory is writable".to_string()
            }
            PipeError::TomlError(_) => "Check the configuration file for TOML syntax errors".to_string(),
            PipeError::ConfigError { .. } | PipeError::InvalidConfigValueError { .. } => {
                "Review the configuration values and command-line flags".to_string()
            }
            PipeError::MissingConfigError { field } => {
                format!("Provide '{}' in the config file or on the command line", field)
            }
            PipeError::InvalidFasta { .. } => {
                "Make sure every sequence is preceded by a '>' header line".to_string()
            }
            PipeError::CommandLaunch { .. } => {
                "Make sure a system shell is available on this machine".to_string()
            }
            PipeError::SerializationError(_) | PipeError::CsvError(_) => {
                "Try writing the plain text report only".to_string()
            }
            PipeError::ProcessingError { .. } => {
                "Check that both sites provide at least one sequence".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Input file problem: {}", self),
            ErrorCategory::Process => format!("Could not run command: {}", self),
            ErrorCategory::Processing => format!("Comparison failed: {}", self),
        }
    }

    /// 依嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipeError>;
