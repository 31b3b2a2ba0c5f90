//! TOML model introspector.
//!
//! Reads domain types and their directives from a model file:
//!
//! ```toml
//! [[types]]
//! name = "Person"
//! package = "com.example.model"
//!
//! [[types.fields]]
//! name = "bio"
//! type = "String"
//! order = 2
//! column = { length = 500 }
//!
//! [[types.fields]]
//! name = "gender"
//! type = "Gender"
//! qualified_type = "com.example.model.Gender"
//! enumerated = true
//! override = { widget = "DropDownChoice" }
//! ```
//!
//! Semantic and widget names are matched case-sensitively. Unknown keys are
//! rejected so typos in directive names do not silently change the output.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crudgen_core::{
    application::{ApplicationError, ports::TypeIntrospector},
    domain::{
        ColumnConstraints, DomainType, FieldDeclaration, FieldDirectives, SemanticType,
        SkipDirective, TypeDirectives, TypeOverride, WidgetKind,
    },
    error::{CrudgenError, CrudgenResult},
};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Model written by `crudgen init`.
pub const EXAMPLE_MODEL: &str = r#"# crudgen model file
#
# Each [[types]] entry is one domain type; each [[types.fields]] entry one of
# its declared fields, in source order.

[[types]]
name = "Person"
package = "com.example.model"

[[types.fields]]
name = "name"
type = "String"
order = 1
column = { nullable = false }

[[types.fields]]
name = "bio"
type = "String"
order = 2
column = { length = 500 }

[[types.fields]]
name = "gender"
type = "Gender"
qualified_type = "com.example.model.Gender"
enumerated = true

[[types.fields]]
name = "active"
type = "boolean"

[[types.fields]]
name = "serialVersionUID"
type = "long"
static = true
"#;

// ── Manifest ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelManifest {
    #[serde(default)]
    types: Vec<TypeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeEntry {
    name: String,
    package: Option<String>,
    namespace: Option<String>,
    property_prefix: Option<String>,
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    declared_type: String,
    qualified_type: Option<String>,
    #[serde(rename = "static", default)]
    is_static: bool,
    #[serde(default)]
    transient: bool,
    #[serde(default)]
    enum_type: bool,
    order: Option<i32>,
    #[serde(default)]
    include: bool,
    skip: Option<SkipEntry>,
    column: Option<ColumnEntry>,
    #[serde(default)]
    enumerated: bool,
    #[serde(default)]
    many_to_one: bool,
    generics: Option<String>,
    #[serde(rename = "override")]
    type_override: Option<OverrideEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SkipEntry {
    #[serde(default)]
    include_in_view: bool,
    #[serde(default)]
    include_in_edit: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnEntry {
    length: Option<u32>,
    unique: Option<bool>,
    nullable: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideEntry {
    semantic: Option<String>,
    widget: Option<String>,
    component: Option<String>,
    property: Option<String>,
}

// ── Introspector ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum ModelSource {
    File(PathBuf),
    Inline { name: String, content: String },
}

/// [`TypeIntrospector`] over a TOML model description.
#[derive(Debug, Clone)]
pub struct TomlModelIntrospector {
    source: ModelSource,
}

impl TomlModelIntrospector {
    /// Read the model from `path` on every call.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ModelSource::File(path.into()),
        }
    }

    /// Use `content` as the model; `name` appears in error messages.
    pub fn from_source(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: ModelSource::Inline {
                name: name.into(),
                content: content.into(),
            },
        }
    }

    fn source_name(&self) -> String {
        match &self.source {
            ModelSource::File(path) => path.display().to_string(),
            ModelSource::Inline { name, .. } => name.clone(),
        }
    }

    fn failed(&self, reason: impl Into<String>) -> CrudgenError {
        ApplicationError::IntrospectionFailed {
            source_name: self.source_name(),
            reason: reason.into(),
        }
        .into()
    }

    fn read(&self) -> CrudgenResult<String> {
        match &self.source {
            ModelSource::File(path) => read_model(path).map_err(|e| self.failed(e)),
            ModelSource::Inline { content, .. } => Ok(content.clone()),
        }
    }
}

impl TypeIntrospector for TomlModelIntrospector {
    #[instrument(skip(self), fields(source = %self.source_name()))]
    fn domain_types(&self) -> CrudgenResult<Vec<DomainType>> {
        let raw = self.read()?;
        let manifest: ModelManifest =
            toml::from_str(&raw).map_err(|e| self.failed(format!("invalid model file: {e}")))?;

        let mut types = Vec::with_capacity(manifest.types.len());
        for entry in manifest.types {
            let domain = entry.into_domain().map_err(|reason| self.failed(reason))?;
            domain.validate()?;
            debug!(name = domain.name(), fields = domain.fields().len(), "loaded domain type");
            types.push(domain);
        }
        Ok(types)
    }
}

fn read_model(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read model file: {e}"))
}

// ── Conversion ────────────────────────────────────────────────────────────────

impl TypeEntry {
    fn into_domain(self) -> Result<DomainType, String> {
        let mut domain = DomainType::new(&self.name).with_directives(TypeDirectives {
            namespace: self.namespace,
            property_prefix: self.property_prefix,
        });
        if let Some(package) = self.package {
            domain = domain.with_package(package);
        }

        for field in self.fields {
            let name = field.name.clone();
            let declaration = field
                .into_declaration()
                .map_err(|e| format!("{}.{}: {}", self.name, name, e))?;
            domain = domain.with_field(declaration);
        }
        Ok(domain)
    }
}

impl FieldEntry {
    fn into_declaration(self) -> Result<FieldDeclaration, String> {
        let type_override = self
            .type_override
            .map(OverrideEntry::into_override)
            .transpose()?;

        let column = self.column.map(|c| {
            let defaults = ColumnConstraints::default();
            ColumnConstraints {
                length: c.length.unwrap_or(defaults.length),
                unique: c.unique.unwrap_or(defaults.unique),
                nullable: c.nullable.unwrap_or(defaults.nullable),
            }
        });

        let directives = FieldDirectives {
            type_override,
            generics: self.generics,
            include: self.include,
            skip: self.skip.map(|s| SkipDirective {
                include_in_view: s.include_in_view,
                include_in_edit: s.include_in_edit,
            }),
            order: self.order,
            column,
            enumerated: self.enumerated,
            many_to_one: self.many_to_one,
        };

        let mut declaration = FieldDeclaration::new(self.name, self.declared_type)
            .set_static(self.is_static)
            .set_transient(self.transient)
            .enum_type(self.enum_type)
            .with_directives(directives);
        if let Some(qualified) = self.qualified_type {
            declaration = declaration.qualified(qualified);
        }
        Ok(declaration)
    }
}

impl OverrideEntry {
    fn into_override(self) -> Result<TypeOverride, String> {
        let semantic = self
            .semantic
            .as_deref()
            .map(SemanticType::from_str)
            .transpose()
            .map_err(|e| e.to_string())?
            .unwrap_or_default();
        let widget = self
            .widget
            .as_deref()
            .map(WidgetKind::from_str)
            .transpose()
            .map_err(|e| e.to_string())?
            .unwrap_or_default();

        Ok(TypeOverride {
            semantic,
            widget,
            component_class: self.component,
            property_expression: self.property,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::domain::{ViewMode, select_fields};
    use tempfile::TempDir;

    #[test]
    fn example_model_loads() {
        let types = TomlModelIntrospector::from_source("example", EXAMPLE_MODEL)
            .domain_types()
            .unwrap();
        assert_eq!(types.len(), 1);

        let person = &types[0];
        assert_eq!(person.qualified_name(), "com.example.model.Person");
        assert_eq!(person.fields().len(), 5);

        let edit = select_fields(person, ViewMode::Edit, false);
        let names: Vec<&str> = edit.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "bio", "gender", "active"]);
        assert_eq!(edit[1].widget_kind(), WidgetKind::TextArea);
        assert_eq!(edit[2].semantic_type(), SemanticType::Enum);
        assert!(edit[0].is_required());
    }

    #[test]
    fn directives_are_mapped() {
        let model = r#"
            [[types]]
            name = "Company"
            namespace = "company"
            property_prefix = "company"

            [[types.fields]]
            name = "logo"
            type = "Blob"
            skip = { include_in_view = true }
            override = { semantic = "File", widget = "FileUploadField" }

            [[types.fields]]
            name = "tags"
            type = "Set"
            generics = "com.example.Tag"
            include = true
        "#;
        let types = TomlModelIntrospector::from_source("inline", model)
            .domain_types()
            .unwrap();
        let company = &types[0];
        assert_eq!(company.resource_namespace(), "company");

        let logo = &company.fields()[0];
        let skip = logo.directives().skip.unwrap();
        assert!(skip.include_in_view);
        assert!(!skip.include_in_edit);
        let type_override = logo.directives().type_override.as_ref().unwrap();
        assert_eq!(type_override.semantic, SemanticType::File);
        assert_eq!(type_override.widget, WidgetKind::FileUploadField);

        let tags = &company.fields()[1];
        assert!(tags.directives().include);
        assert_eq!(tags.directives().generics.as_deref(), Some("com.example.Tag"));
    }

    #[test]
    fn unknown_widget_names_are_rejected() {
        let model = r#"
            [[types]]
            name = "Person"

            [[types.fields]]
            name = "name"
            type = "String"
            override = { widget = "textfield" }
        "#;
        let err = TomlModelIntrospector::from_source("inline", model)
            .domain_types()
            .unwrap_err();
        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::IntrospectionFailed { .. })
        ));
        assert!(err.to_string().contains("Person.name"));
    }

    #[test]
    fn misspelt_directives_are_rejected() {
        let model = r#"
            [[types]]
            name = "Person"

            [[types.fields]]
            name = "name"
            type = "String"
            ordr = 1
        "#;
        assert!(
            TomlModelIntrospector::from_source("inline", model)
                .domain_types()
                .is_err()
        );
    }

    #[test]
    fn duplicate_fields_fail_validation() {
        let model = r#"
            [[types]]
            name = "Person"

            [[types.fields]]
            name = "name"
            type = "String"

            [[types.fields]]
            name = "name"
            type = "String"
        "#;
        let err = TomlModelIntrospector::from_source("inline", model)
            .domain_types()
            .unwrap_err();
        assert!(matches!(err, CrudgenError::Domain(_)));
    }

    #[test]
    fn find_by_name() {
        let introspector = TomlModelIntrospector::from_source("example", EXAMPLE_MODEL);
        assert_eq!(introspector.find("Person").unwrap().name(), "Person");
        assert!(matches!(
            introspector.find("Order").unwrap_err(),
            CrudgenError::Application(ApplicationError::TypeNotFound { .. })
        ));
    }

    #[test]
    fn reads_model_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.toml");
        fs::write(&path, EXAMPLE_MODEL).unwrap();

        let types = TomlModelIntrospector::from_path(&path).domain_types().unwrap();
        assert_eq!(types[0].name(), "Person");

        let missing = TomlModelIntrospector::from_path(dir.path().join("absent.toml"));
        assert!(missing.domain_types().is_err());
    }
}
