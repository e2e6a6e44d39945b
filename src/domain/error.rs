use std::io;

use thiserror::Error;

/// Library-wide error type for maxgpt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No API key configured.
    #[error(
        "An API key is required. Create one in your OpenAI account and save it with 'maxgpt config set-key <KEY>'."
    )]
    MissingCredential,

    /// The task description was empty or whitespace only.
    #[error("Task description must not be empty")]
    EmptyTask,

    /// Chat completions request failed or returned an unexpected shape.
    #[error("{}", format_api_error(message, *status))]
    ApiError { message: String, status: Option<u16> },

    /// Script path does not point at a usable file.
    #[error("Invalid file path: {0}")]
    InvalidFilePath(String),

    /// Script file extension does not map to a supported dialect.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Dialect name could not be parsed.
    #[error("Invalid dialect '{0}': must be one of maxscript, python")]
    InvalidDialect(String),

    /// Host runtime could not accept a script.
    #[error("Host runtime error: {0}")]
    HostRuntime(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn format_api_error(message: &str, status: Option<u16>) -> String {
    match status {
        Some(code) => format!("Chat API error (status {}): {}", code, message),
        None => format!("Chat API error: {}", message),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn api_error<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::ApiError { message: message.into(), status }
    }

    /// Provide an `io::ErrorKind` view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::EmptyTask
            | AppError::InvalidDialect(_)
            | AppError::UnsupportedFileType(_)
            | AppError::TemplateRender { .. }
            | AppError::TomlParse(_)
            | AppError::TomlSerialize(_) => io::ErrorKind::InvalidInput,
            AppError::MissingCredential => io::ErrorKind::PermissionDenied,
            AppError::InvalidFilePath(_) => io::ErrorKind::NotFound,
            AppError::ApiError { .. } | AppError::HostRuntime(_) | AppError::Clipboard(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
