//! Resolved, presentation-ready view of one declared field.
//!
//! A `FieldDescriptor` is built once per selection call from a
//! [`FieldDeclaration`] and its owning [`DomainType`], and never mutated. It
//! serialises with camelCase keys so templates can read `field.htmlString`,
//! `field.wicketComponent`, `field.generics` and so on.

use serde::Serialize;

use crate::domain::{
    catalog,
    entities::domain_type::{DomainType, FieldDeclaration},
    resolution::{self, Resolution},
    value_objects::{SemanticType, WidgetKind},
};

/// Component-class override value meaning "not overridden".
pub const UNKNOWN_COMPONENT: &str = "UnknownComponent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    name: String,
    name_capitalized: String,
    declared_type: String,
    qualified_type: String,
    semantic_type: SemanticType,
    widget_kind: WidgetKind,
    generics: String,
    property_expression: String,
    wicket_component: String,
    html_string: String,
    resource_namespace: String,
    resource_key: String,
    resource_help_key: String,
    unique: bool,
    required: bool,
    enumeration: bool,
    unknown_type: bool,
    order: Option<i32>,
}

impl FieldDescriptor {
    /// Resolve `field` of `owner` and derive its presentation strings.
    pub fn resolve(owner: &DomainType, field: &FieldDeclaration) -> Self {
        let Resolution { semantic, widget } = resolution::resolve_field(owner.name(), field);
        Self::from_resolution(owner, field, semantic, widget)
    }

    pub(crate) fn from_resolution(
        owner: &DomainType,
        field: &FieldDeclaration,
        semantic: SemanticType,
        widget: WidgetKind,
    ) -> Self {
        let directives = field.directives();
        let property_expression = property_expression(owner, field);
        let resource_namespace = owner.resource_namespace();
        let column = directives.column.unwrap_or_default();

        Self {
            name: field.name().to_string(),
            name_capitalized: capitalize(field.name()),
            declared_type: field.declared_type().to_string(),
            qualified_type: field.qualified_type().to_string(),
            semantic_type: semantic,
            widget_kind: widget,
            generics: generics(field, semantic, widget),
            wicket_component: component_class(field, widget),
            html_string: catalog::render_markup(widget, &property_expression),
            resource_key: format!("{resource_namespace}.{}", field.name()),
            resource_help_key: format!("{resource_namespace}.{}.help", field.name()),
            resource_namespace,
            property_expression,
            unique: directives.column.is_some() && column.unique,
            required: directives.column.is_some() && !column.nullable,
            enumeration: semantic == SemanticType::Enum || field.is_enum_type(),
            unknown_type: semantic.is_unknown(),
            order: directives.order,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn name_capitalized(&self) -> &str {
        &self.name_capitalized
    }
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }
    pub fn qualified_type(&self) -> &str {
        &self.qualified_type
    }
    pub const fn semantic_type(&self) -> SemanticType {
        self.semantic_type
    }
    pub const fn widget_kind(&self) -> WidgetKind {
        self.widget_kind
    }

    /// `<Name>` or empty.
    pub fn generics(&self) -> &str {
        &self.generics
    }
    pub fn property_expression(&self) -> &str {
        &self.property_expression
    }

    /// Widget class name used in generated source.
    pub fn wicket_component(&self) -> &str {
        &self.wicket_component
    }

    /// Markup fragment with the property expression as widget id.
    pub fn html_string(&self) -> &str {
        &self.html_string
    }
    pub fn resource_namespace(&self) -> &str {
        &self.resource_namespace
    }
    pub fn resource_key(&self) -> &str {
        &self.resource_key
    }
    pub fn resource_help_key(&self) -> &str {
        &self.resource_help_key
    }
    pub const fn is_unique(&self) -> bool {
        self.unique
    }
    pub const fn is_required(&self) -> bool {
        self.required
    }
    pub const fn is_enumeration(&self) -> bool {
        self.enumeration
    }
    pub const fn is_unknown_type(&self) -> bool {
        self.unknown_type
    }
    pub const fn order(&self) -> Option<i32> {
        self.order
    }
}

fn generics(field: &FieldDeclaration, semantic: SemanticType, widget: WidgetKind) -> String {
    let name = match field.directives().generics.as_deref() {
        Some(class) => {
            let simple = simple_name(class);
            if simple == "void" || simple == "Void" {
                return String::new();
            }
            simple.to_string()
        }
        None => {
            if !catalog::takes_generics(widget) {
                return String::new();
            }
            match semantic {
                SemanticType::Text => SemanticType::String.as_str().to_string(),
                SemanticType::Enum => simple_name(field.declared_type()).to_string(),
                SemanticType::Unknown | SemanticType::Object => {
                    capitalize(simple_name(field.declared_type()))
                }
                other => other.as_str().to_string(),
            }
        }
    };

    if name.is_empty() {
        String::new()
    } else {
        format!("<{name}>")
    }
}

fn property_expression(owner: &DomainType, field: &FieldDeclaration) -> String {
    let explicit = field
        .directives()
        .type_override
        .as_ref()
        .and_then(|o| o.property_expression.as_deref())
        .filter(|expr| !expr.is_empty());

    if let Some(expr) = explicit {
        return expr.to_string();
    }
    match owner.directives().property_prefix.as_deref() {
        Some(prefix) => format!("{prefix}.{}", field.name()),
        None => field.name().to_string(),
    }
}

fn component_class(field: &FieldDeclaration, widget: WidgetKind) -> String {
    field
        .directives()
        .type_override
        .as_ref()
        .and_then(|o| o.component_class.as_deref())
        .map(simple_name)
        .filter(|class| !class.is_empty() && *class != UNKNOWN_COMPONENT)
        .map(str::to_string)
        .unwrap_or_else(|| catalog::component_name(widget).to_string())
}

fn simple_name(class: &str) -> &str {
    class.rsplit('.').next().unwrap_or(class)
}

/// Upper-cases the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
