//! Widget and semantic-type registry.
//!
//! Every table the resolution engine consults lives here, described once per
//! entry:
//!
//! - [`WIDGET_REGISTRY`]: widget kind → toolkit component name, markup snippet,
//!   whether the generated component takes a generics annotation
//! - [`SEMANTIC_REGISTRY`]: semantic type → default widget kind
//! - [`PRIMITIVE_ALIASES`]: lower-case primitive names → semantic type
//!
//! # Adding a New Widget
//!
//! 1. Add a variant to `WidgetKind` in `value_objects.rs`
//! 2. Add one [`WidgetDef`] entry to [`WIDGET_REGISTRY`]
//! 3. Point any semantic types that should default to it in [`SEMANTIC_REGISTRY`]

use crate::domain::value_objects::{SemanticType, WidgetKind};

/// Placeholder substituted with the widget id in [`WidgetDef::markup`].
pub const WIDGET_ID_PLACEHOLDER: &str = "{id}";

// ── Widget definitions ───────────────────────────────────────────────────────

/// Everything the generator needs to know about one widget kind.
#[derive(Debug, Clone, Copy)]
pub struct WidgetDef {
    pub kind: WidgetKind,

    /// Toolkit class name used in generated source.
    pub component: &'static str,

    /// Markup fragment with an `{id}` placeholder for the widget id.
    pub markup: &'static str,

    /// Whether the generated component is declared with a generics annotation.
    ///
    /// Date, password, checkbox and upload components are declared raw.
    pub generic: bool,
}

pub static WIDGET_REGISTRY: &[WidgetDef] = &[
    WidgetDef {
        kind: WidgetKind::Unknown,
        component: "Unknown",
        markup: r#"<div wicket:id="{id}"></div>"#,
        generic: true,
    },
    WidgetDef {
        kind: WidgetKind::Container,
        component: "WebMarkupContainer",
        markup: r#"<div wicket:id="{id}"></div>"#,
        generic: true,
    },
    WidgetDef {
        kind: WidgetKind::TextField,
        component: "TextField",
        markup: r#"<input type="text" maxlength="250" wicket:id="{id}"/>"#,
        generic: true,
    },
    WidgetDef {
        kind: WidgetKind::PasswordTextField,
        component: "PasswordTextField",
        markup: r#"<input type="password" wicket:id="{id}"/>"#,
        generic: false,
    },
    WidgetDef {
        kind: WidgetKind::DateTextField,
        component: "DateTextField",
        markup: r#"<input type="text" wicket:id="{id}"/>"#,
        generic: false,
    },
    WidgetDef {
        kind: WidgetKind::TextArea,
        component: "TextArea",
        markup: r#"<textarea wicket:id="{id}"></textarea>"#,
        generic: true,
    },
    WidgetDef {
        kind: WidgetKind::DropDownChoice,
        component: "DropDownChoice",
        markup: r#"<select wicket:id="{id}"></select>"#,
        generic: true,
    },
    WidgetDef {
        kind: WidgetKind::CheckBoxMultipleChoice,
        component: "CheckBoxMultipleChoice",
        markup: r#"<span wicket:id="{id}"></span>"#,
        generic: true,
    },
    WidgetDef {
        kind: WidgetKind::ListMultipleChoice,
        component: "ListMultipleChoice",
        markup: r#"<select wicket:id="{id}"></select>"#,
        generic: true,
    },
    WidgetDef {
        kind: WidgetKind::FileUploadField,
        component: "FileUploadField",
        markup: r#"<input type="file" wicket:id="{id}" />"#,
        generic: false,
    },
    WidgetDef {
        kind: WidgetKind::CheckBox,
        component: "CheckBox",
        markup: r#"<input type="checkbox" wicket:id="{id}" />"#,
        generic: false,
    },
];

// ── Semantic type definitions ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct SemanticDef {
    pub semantic: SemanticType,

    /// Widget used when no override fixes one.
    pub default_widget: WidgetKind,
}

pub static SEMANTIC_REGISTRY: &[SemanticDef] = &[
    SemanticDef {
        semantic: SemanticType::Unknown,
        default_widget: WidgetKind::Unknown,
    },
    SemanticDef {
        semantic: SemanticType::Object,
        default_widget: WidgetKind::DropDownChoice,
    },
    SemanticDef {
        semantic: SemanticType::String,
        default_widget: WidgetKind::TextField,
    },
    SemanticDef {
        semantic: SemanticType::Text,
        default_widget: WidgetKind::TextArea,
    },
    SemanticDef {
        semantic: SemanticType::Date,
        default_widget: WidgetKind::DateTextField,
    },
    SemanticDef {
        semantic: SemanticType::Integer,
        default_widget: WidgetKind::TextField,
    },
    SemanticDef {
        semantic: SemanticType::BigDecimal,
        default_widget: WidgetKind::TextField,
    },
    SemanticDef {
        semantic: SemanticType::Long,
        default_widget: WidgetKind::TextField,
    },
    SemanticDef {
        semantic: SemanticType::Enum,
        default_widget: WidgetKind::DropDownChoice,
    },
    SemanticDef {
        semantic: SemanticType::Set,
        default_widget: WidgetKind::DropDownChoice,
    },
    SemanticDef {
        semantic: SemanticType::List,
        default_widget: WidgetKind::ListMultipleChoice,
    },
    SemanticDef {
        semantic: SemanticType::File,
        default_widget: WidgetKind::FileUploadField,
    },
    SemanticDef {
        semantic: SemanticType::Boolean,
        default_widget: WidgetKind::CheckBox,
    },
    SemanticDef {
        semantic: SemanticType::Double,
        default_widget: WidgetKind::TextField,
    },
];

/// Lower-case primitive type names and the semantic type they stand for.
pub static PRIMITIVE_ALIASES: &[(&str, SemanticType)] = &[
    ("double", SemanticType::Double),
    ("boolean", SemanticType::Boolean),
    ("int", SemanticType::Integer),
    ("long", SemanticType::Long),
];

// ── Lookups ──────────────────────────────────────────────────────────────────

pub fn find_widget(kind: WidgetKind) -> Option<&'static WidgetDef> {
    WIDGET_REGISTRY.iter().find(|def| def.kind == kind)
}

/// Default widget for a semantic type.
///
/// The registry holds one entry per semantic type, so the `Unknown` widget
/// is only reached if that table loses a row.
pub fn widget_for(semantic: SemanticType) -> WidgetKind {
    SEMANTIC_REGISTRY
        .iter()
        .find(|def| def.semantic == semantic)
        .map(|def| def.default_widget)
        .unwrap_or(WidgetKind::Unknown)
}

pub fn primitive_alias(type_name: &str) -> Option<SemanticType> {
    PRIMITIVE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == type_name)
        .map(|(_, semantic)| *semantic)
}

/// Toolkit class name for a widget kind.
pub fn component_name(kind: WidgetKind) -> &'static str {
    find_widget(kind)
        .map(|def| def.component)
        .unwrap_or_else(|| kind.as_str())
}

/// Markup fragment for a widget kind with `id` substituted.
pub fn render_markup(kind: WidgetKind, id: &str) -> String {
    let def = find_widget(kind).or_else(|| find_widget(WidgetKind::Unknown));
    match def {
        Some(def) => def.markup.replace(WIDGET_ID_PLACEHOLDER, id),
        None => format!(r#"<div wicket:id="{id}"></div>"#),
    }
}

pub fn takes_generics(kind: WidgetKind) -> bool {
    find_widget(kind).map(|def| def.generic).unwrap_or(true)
}
