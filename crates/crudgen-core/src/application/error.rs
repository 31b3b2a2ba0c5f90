//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Generator settings are unusable (empty output root, bad package).
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Template evaluation failed.
    #[error("Template '{template}' failed to render: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Template not present in the active set.
    #[error("Template '{template}' not found")]
    TemplateNotFound { template: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The model source could not be read or parsed.
    #[error("Failed to read domain types from {source_name}: {reason}")]
    IntrospectionFailed { source_name: String, reason: String },

    /// No domain type with this name.
    #[error("Domain type '{name}' not found")]
    TypeNotFound { name: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("In-memory store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Configuration { message } => vec![
                format!("Configuration problem: {}", message),
                "Check --output and --package, or the [generator] section of your config".into(),
                "Run: crudgen config list to see the effective values".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the syntax of template {}", template),
                "Templates use Liquid syntax: {{ variable }} and {% for %} tags".into(),
            ],
            Self::TemplateNotFound { template } => vec![
                format!("Missing template: {}", template),
                "Check --template-set or add the file to your templates directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::IntrospectionFailed { source_name, .. } => vec![
                format!("Check the model file: {}", source_name),
                "Run: crudgen init to write an example model file".into(),
            ],
            Self::TypeNotFound { name } => vec![
                format!("No type named '{}' in the model file", name),
                "Type names are case-sensitive".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::TemplateNotFound { .. } | Self::TypeNotFound { .. } => ErrorCategory::NotFound,
            Self::IntrospectionFailed { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } | Self::FilesystemError { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
