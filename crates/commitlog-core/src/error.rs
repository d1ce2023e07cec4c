use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommitlogError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: failed to parse commitlog.toml: {0}")]
    ConfigInvalid(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    #[error("CONFIG_TEMPLATE_NOT_FOUND: template file '{path}' could not be read: {reason}")]
    TemplateFileNotFound { path: PathBuf, reason: String },

    // Template errors
    #[error("TEMPLATE_SYNTAX: {0}")]
    TemplateSyntax(#[from] crate::template::error::TemplateError),

    // Change set errors
    #[error("CHANGESET_INVALID: failed to parse change set '{path}': {reason}")]
    ChangeSetInvalid { path: PathBuf, reason: String },

    #[error("REVISION_LOOKUP_FAILED: {path}: {reason}")]
    RevisionLookupFailed { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for CommitlogError {
    fn from(err: serde_json::Error) -> Self {
        CommitlogError::Generic(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, CommitlogError>;
