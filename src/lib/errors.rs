use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Conditions caught at the dispatch boundary.
///
/// Every variant is converted into an error envelope carrying its `Display`
/// text; none of them propagate to the transport as a protocol-level fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Invalid arguments for tool [{tool}]: {reason}")]
    InvalidArguments { tool: String, reason: String },
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
    #[error("Failed to generate cow output: {message}")]
    RenderFailed { message: String },
    #[error("Access denied: {reason}")]
    AccessDenied { reason: String },
}

/// Failures raised by the rendering collaborator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown cow character `{name}`")]
    UnknownCharacter { name: String },
    #[error("character catalog is unavailable: {message}")]
    CatalogUnavailable { message: String },
}

impl From<RenderError> for ToolError {
    fn from(value: RenderError) -> Self {
        ToolError::RenderFailed {
            message: value.to_string(),
        }
    }
}
