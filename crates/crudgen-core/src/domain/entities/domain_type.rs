//! Domain types as seen by the generator.
//!
//! A [`DomainType`] is what the introspection port hands over: a simple name,
//! an optional package, type-level directives and the directly declared
//! fields in declaration order. Directives are plain typed data; the adapter
//! that reads a model file is responsible for filling them in.

use std::collections::HashSet;

use crate::domain::{
    error::DomainError,
    value_objects::{SemanticType, WidgetKind},
};

/// Default column length when a column directive omits it.
pub const DEFAULT_COLUMN_LENGTH: u32 = 255;

// ── Aggregate root ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainType {
    name: String,
    package: Option<String>,
    directives: TypeDirectives,
    fields: Vec<FieldDeclaration>,
}

impl DomainType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            directives: TypeDirectives::default(),
            fields: Vec::new(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_directives(mut self, directives: TypeDirectives) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    /// Simple name, also used as the display name in resource values.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn directives(&self) -> &TypeDirectives {
        &self.directives
    }

    /// Directly declared fields in declaration order.
    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }

    /// `package.Name`, or just `Name` for types in the default package.
    pub fn qualified_name(&self) -> String {
        match self.package.as_deref() {
            Some(pkg) if !pkg.is_empty() => format!("{pkg}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Namespace used for field resource keys.
    pub fn resource_namespace(&self) -> String {
        self.directives
            .namespace
            .clone()
            .unwrap_or_else(|| self.qualified_name())
    }

    /// Validate names and field uniqueness.
    ///
    /// Called by the introspection adapter after building the type.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !is_identifier(&self.name) {
            return Err(self.invalid(format!("'{}' is not a valid type name", self.name)));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !is_identifier(field.name()) {
                return Err(self.invalid(format!("'{}' is not a valid field name", field.name())));
            }
            if field.declared_type().trim().is_empty() {
                return Err(self.invalid(format!("field '{}' has no declared type", field.name())));
            }
            if !seen.insert(field.name()) {
                return Err(self.invalid(format!("field '{}' is declared twice", field.name())));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> DomainError {
        DomainError::InvalidDomainType {
            type_name: self.name.clone(),
            reason,
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Directives attached to a whole domain type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDirectives {
    /// Overrides the resource-key namespace (defaults to the qualified name).
    pub namespace: Option<String>,

    /// Prefix for every field's property expression: `prefix.field`.
    pub property_prefix: Option<String>,
}

// ── Fields ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    name: String,
    declared_type: String,
    qualified_type: Option<String>,
    is_static: bool,
    is_transient: bool,
    is_enum_type: bool,
    directives: FieldDirectives,
}

impl FieldDeclaration {
    /// A field named `name` whose declared type's simple name is `declared_type`.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            qualified_type: None,
            is_static: false,
            is_transient: false,
            is_enum_type: false,
            directives: FieldDirectives::default(),
        }
    }

    pub fn qualified(mut self, qualified_type: impl Into<String>) -> Self {
        self.qualified_type = Some(qualified_type.into());
        self
    }

    pub fn set_static(mut self, value: bool) -> Self {
        self.is_static = value;
        self
    }

    pub fn set_transient(mut self, value: bool) -> Self {
        self.is_transient = value;
        self
    }

    /// Marks the declared type itself as an enumeration.
    pub fn enum_type(mut self, value: bool) -> Self {
        self.is_enum_type = value;
        self
    }

    pub fn with_directives(mut self, directives: FieldDirectives) -> Self {
        self.directives = directives;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.directives.order = Some(order);
        self
    }

    pub fn include(mut self) -> Self {
        self.directives.include = true;
        self
    }

    pub fn skip(mut self, include_in_view: bool, include_in_edit: bool) -> Self {
        self.directives.skip = Some(SkipDirective {
            include_in_view,
            include_in_edit,
        });
        self
    }

    pub fn column(mut self, column: ColumnConstraints) -> Self {
        self.directives.column = Some(column);
        self
    }

    pub fn type_override(mut self, type_override: TypeOverride) -> Self {
        self.directives.type_override = Some(type_override);
        self
    }

    pub fn generics(mut self, class_name: impl Into<String>) -> Self {
        self.directives.generics = Some(class_name.into());
        self
    }

    pub fn enumerated(mut self) -> Self {
        self.directives.enumerated = true;
        self
    }

    pub fn many_to_one(mut self) -> Self {
        self.directives.many_to_one = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Simple name of the declared type (`String`, `int`, `Gender`).
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    /// Fully qualified declared type, falling back to the simple name.
    pub fn qualified_type(&self) -> &str {
        self.qualified_type.as_deref().unwrap_or(&self.declared_type)
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_transient(&self) -> bool {
        self.is_transient
    }

    pub fn is_enum_type(&self) -> bool {
        self.is_enum_type
    }

    pub fn directives(&self) -> &FieldDirectives {
        &self.directives
    }
}

/// Typed per-field directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDirectives {
    pub type_override: Option<TypeOverride>,

    /// Class name used for the generics annotation. `void`/`Void` means none.
    pub generics: Option<String>,

    /// Allow-list marker. When any field of a type carries it, only marked
    /// fields are selected.
    pub include: bool,

    pub skip: Option<SkipDirective>,

    pub order: Option<i32>,

    pub column: Option<ColumnConstraints>,

    /// Persistence hint: stored as an enumeration.
    pub enumerated: bool,

    /// Persistence hint: many-to-one relationship.
    pub many_to_one: bool,
}

/// Explicit type override. `Unknown` values mean "not overridden".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOverride {
    pub semantic: SemanticType,
    pub widget: WidgetKind,
    /// Component class name; the `UnknownComponent` sentinel means none.
    pub component_class: Option<String>,
    pub property_expression: Option<String>,
}

impl Default for TypeOverride {
    fn default() -> Self {
        Self {
            semantic: SemanticType::Unknown,
            widget: WidgetKind::Unknown,
            component_class: None,
            property_expression: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipDirective {
    pub include_in_view: bool,
    pub include_in_edit: bool,
}

impl Default for SkipDirective {
    /// A bare skip drops the field from both modes.
    fn default() -> Self {
        Self {
            include_in_view: false,
            include_in_edit: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConstraints {
    pub length: u32,
    pub unique: bool,
    pub nullable: bool,
}

impl Default for ColumnConstraints {
    fn default() -> Self {
        Self {
            length: DEFAULT_COLUMN_LENGTH,
            unique: false,
            nullable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_and_namespace() {
        let person = DomainType::new("Person").with_package("com.example.model");
        assert_eq!(person.qualified_name(), "com.example.model.Person");
        assert_eq!(person.resource_namespace(), "com.example.model.Person");

        let person = person.with_directives(TypeDirectives {
            namespace: Some("person".into()),
            property_prefix: None,
        });
        assert_eq!(person.resource_namespace(), "person");
    }

    #[test]
    fn default_package_has_bare_qualified_name() {
        assert_eq!(DomainType::new("Person").qualified_name(), "Person");
    }

    #[test]
    fn validate_rejects_duplicate_fields() {
        let t = DomainType::new("Person")
            .with_field(FieldDeclaration::new("name", "String"))
            .with_field(FieldDeclaration::new("name", "String"));
        assert!(matches!(
            t.validate(),
            Err(DomainError::InvalidDomainType { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_identifiers() {
        assert!(DomainType::new("").validate().is_err());
        assert!(DomainType::new("1Person").validate().is_err());
        assert!(
            DomainType::new("Person")
                .with_field(FieldDeclaration::new("first name", "String"))
                .validate()
                .is_err()
        );
        assert!(
            DomainType::new("Person")
                .with_field(FieldDeclaration::new("name", " "))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn column_defaults() {
        let c = ColumnConstraints::default();
        assert_eq!(c.length, 255);
        assert!(c.nullable);
        assert!(!c.unique);
    }

    #[test]
    fn qualified_type_falls_back_to_simple_name() {
        let f = FieldDeclaration::new("gender", "Gender");
        assert_eq!(f.qualified_type(), "Gender");
        let f = f.qualified("com.example.model.Gender");
        assert_eq!(f.qualified_type(), "com.example.model.Gender");
    }
}
