use std::fmt;

use crate::domain::error::DomainError;

const EXTENSION: &str = ".tmpl";

/// Identifier of one template inside a named template set.
///
/// ## Format
///
/// Human-readable: `{set}/{name}.tmpl` (e.g., `bootstrap-horizontal/EditPanel.java.tmpl`)
///
/// ## Constraints
///
/// - Set names cannot contain `/`
/// - Names are case-sensitive (`EditPanel.java` and `editpanel.java` differ)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId {
    /// Template set (e.g., "bootstrap-horizontal")
    set: String,
    /// Template name without the `.tmpl` extension (e.g., "ListPanel.html")
    name: String,
}

impl TemplateId {
    pub fn new(set: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let set = set.into();
        let name = name.into();
        if set.is_empty() || set.contains('/') || name.is_empty() || name.contains('/') {
            return Err(DomainError::InvalidTemplateId(format!("{set}/{name}{EXTENSION}")));
        }
        Ok(Self { set, name })
    }

    /// Parse from `{set}/{name}.tmpl`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTemplateId` when the separator or the extension is missing.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidTemplateId(s.to_string());
        let (set, file) = s.split_once('/').ok_or_else(invalid)?;
        let name = file.strip_suffix(EXTENSION).ok_or_else(invalid)?;
        Self::new(set, name).map_err(|_| invalid())
    }

    pub fn set(&self) -> &str {
        &self.set
    }
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name inside the set directory.
    pub fn file_name(&self) -> String {
        format!("{}{EXTENSION}", self.name)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{EXTENSION}", self.set, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        let id = TemplateId::new("bootstrap-horizontal", "EditPanel.java").unwrap();
        assert_eq!(id.to_string(), "bootstrap-horizontal/EditPanel.java.tmpl");
        assert_eq!(TemplateId::parse(&id.to_string()).unwrap(), id);
        assert_eq!(id.file_name(), "EditPanel.java.tmpl");
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert!(TemplateId::parse("EditPanel.java.tmpl").is_err());
        assert!(TemplateId::parse("set/EditPanel.java").is_err());
        assert!(TemplateId::parse("/EditPanel.java.tmpl").is_err());
        assert!(TemplateId::parse("a/b/c.tmpl").is_err());
    }

    #[test]
    fn new_rejects_slashes() {
        assert!(TemplateId::new("a/b", "x").is_err());
        assert!(TemplateId::new("a", "").is_err());
    }
}
