//! Domain value objects: SemanticType, WidgetKind, ViewMode.
//!
//! # Design
//!
//! These are pure tags: `Copy`, equality-by-value, no identity and no mapping
//! logic. The widget defaults, markup snippets and primitive aliases live in
//! `catalog.rs`. This file only defines the types, their names and their
//! parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `ALL` entry here
//! 3. Add a catalog entry in `catalog.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── SemanticType ─────────────────────────────────────────────────────────────

/// The data kind of a field, independent of how it is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    #[default]
    Unknown,
    Object,
    String,
    /// Long string; only produced by overrides or the column-length upgrade.
    Text,
    Date,
    Integer,
    BigDecimal,
    Long,
    Enum,
    Set,
    List,
    File,
    Boolean,
    Double,
}

impl SemanticType {
    pub const ALL: [SemanticType; 14] = [
        Self::Unknown,
        Self::Object,
        Self::String,
        Self::Text,
        Self::Date,
        Self::Integer,
        Self::BigDecimal,
        Self::Long,
        Self::Enum,
        Self::Set,
        Self::List,
        Self::File,
        Self::Boolean,
        Self::Double,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Object => "Object",
            Self::String => "String",
            Self::Text => "Text",
            Self::Date => "Date",
            Self::Integer => "Integer",
            Self::BigDecimal => "BigDecimal",
            Self::Long => "Long",
            Self::Enum => "Enum",
            Self::Set => "Set",
            Self::List => "List",
            Self::File => "File",
            Self::Boolean => "Boolean",
            Self::Double => "Double",
        }
    }

    /// Exact, case-sensitive match of a declared type's simple name.
    ///
    /// `"String"` matches, `"string"` does not: lower-case primitives go
    /// through `catalog::primitive_alias` instead.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type_name(s).ok_or_else(|| DomainError::UnknownSemanticType(s.to_string()))
    }
}

// ── WidgetKind ───────────────────────────────────────────────────────────────

/// The UI control used to edit or display a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    #[default]
    Unknown,
    Container,
    TextField,
    PasswordTextField,
    DateTextField,
    TextArea,
    DropDownChoice,
    CheckBoxMultipleChoice,
    ListMultipleChoice,
    FileUploadField,
    CheckBox,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 11] = [
        Self::Unknown,
        Self::Container,
        Self::TextField,
        Self::PasswordTextField,
        Self::DateTextField,
        Self::TextArea,
        Self::DropDownChoice,
        Self::CheckBoxMultipleChoice,
        Self::ListMultipleChoice,
        Self::FileUploadField,
        Self::CheckBox,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Container => "Container",
            Self::TextField => "TextField",
            Self::PasswordTextField => "PasswordTextField",
            Self::DateTextField => "DateTextField",
            Self::TextArea => "TextArea",
            Self::DropDownChoice => "DropDownChoice",
            Self::CheckBoxMultipleChoice => "CheckBoxMultipleChoice",
            Self::ListMultipleChoice => "ListMultipleChoice",
            Self::FileUploadField => "FileUploadField",
            Self::CheckBox => "CheckBox",
        }
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| DomainError::UnknownWidgetKind(s.to_string()))
    }
}

// ── ViewMode ─────────────────────────────────────────────────────────────────

/// Which family of artifacts a field list is selected for.
///
/// Skip directives carry a separate flag for each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Edit form.
    Edit,
    /// List and detail views.
    View,
}

impl ViewMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::View => "view",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
