use thiserror::Error;

/// Failure to obtain one collection. Always caught by the loader.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Source '{name}' is unreachable: {reason}")]
    Unreachable { name: String, reason: String },

    #[error("Source '{name}' answered with HTTP status {status}")]
    Status { name: String, status: u16 },

    #[error("Source '{name}' is not a JSON array of records: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn source_name(&self) -> &str {
        match self {
            LoadError::Unreachable { name, .. }
            | LoadError::Status { name, .. }
            | LoadError::Parse { name, .. } => name,
        }
    }
}

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Document error: {message}")]
    RenderError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
}

impl ShowcaseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShowcaseError::ConfigError { .. }
            | ShowcaseError::InvalidConfigValueError { .. }
            | ShowcaseError::TomlError(_) => ErrorCategory::Configuration,
            ShowcaseError::IoError(_) | ShowcaseError::RenderError { .. } => {
                ErrorCategory::Output
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShowcaseError::ConfigError { .. } | ShowcaseError::TomlError(_) => {
                "Check the configuration file syntax and required tables"
            }
            ShowcaseError::InvalidConfigValueError { .. } => {
                "Fix the reported value on the command line or in the configuration file"
            }
            ShowcaseError::IoError(_) => {
                "Check that the host page exists and the output directory is writable"
            }
            ShowcaseError::RenderError { .. } => "Check that the host page is well-formed HTML",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not write the document: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
