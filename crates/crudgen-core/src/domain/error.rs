// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Resolution never produces one of these: a field whose type cannot be
/// classified degrades to `Unknown` instead. These errors cover invalid model
/// input and programmer mistakes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid domain type '{type_name}': {reason}")]
    InvalidDomainType { type_name: String, reason: String },

    #[error("Unknown semantic type '{0}'")]
    UnknownSemanticType(String),

    #[error("Unknown widget kind '{0}'")]
    UnknownWidgetKind(String),

    #[error("Invalid template id '{0}': expected '<set>/<name>.tmpl'")]
    InvalidTemplateId(String),

    #[error("Context value '{key}' could not be serialised: {reason}")]
    InvalidContextValue { key: String, reason: String },

    // ========================================================================
    // Programmer Errors
    // ========================================================================
    #[error("Resource key '{key}' misused: {reason}")]
    MisusedResourceKey { key: &'static str, reason: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDomainType { type_name, reason } => vec![
                format!("Check the declaration of '{}' in your model file", type_name),
                format!("Details: {}", reason),
            ],
            Self::UnknownSemanticType(_) => vec![
                "Semantic types are case-sensitive".into(),
                "Valid: Unknown, Object, String, Text, Date, Integer, BigDecimal, Long, Enum, Set, List, File, Boolean, Double".into(),
            ],
            Self::UnknownWidgetKind(_) => vec![
                "Widget kinds are case-sensitive".into(),
                "Valid: Unknown, Container, TextField, PasswordTextField, DateTextField, TextArea, DropDownChoice, CheckBoxMultipleChoice, ListMultipleChoice, FileUploadField, CheckBox".into(),
            ],
            Self::InvalidTemplateId(_) => {
                vec!["Template files must be named '<Artifact>.tmpl' inside a set directory".into()]
            }
            _ => vec!["This is a bug in crudgen, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDomainType { .. }
            | Self::UnknownSemanticType(_)
            | Self::UnknownWidgetKind(_)
            | Self::InvalidTemplateId(_) => ErrorCategory::Validation,
            Self::InvalidContextValue { .. } | Self::MisusedResourceKey { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
