//! Type resolution: one declared field → (semantic type, widget kind).
//!
//! Resolution never fails. A field that cannot be classified degrades to
//! `Unknown` and a `warn!` event is emitted with the owning type and field.
//!
//! Order of precedence:
//!
//! 1. type override with a non-`Unknown` semantic type
//! 2. the declared type's simple name parsed as a semantic type name
//!    (`String` with a column length above 255 becomes `Text`)
//! 3. primitive aliases, then the enumeration hint, then the many-to-one hint
//! 4. the widget is taken from the override when set, else from the catalog

use tracing::warn;

use crate::domain::{
    catalog,
    entities::domain_type::{DEFAULT_COLUMN_LENGTH, FieldDeclaration},
    value_objects::{SemanticType, WidgetKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub semantic: SemanticType,
    pub widget: WidgetKind,
}

/// Resolve one field declared on `owner`.
pub fn resolve_field(owner: &str, field: &FieldDeclaration) -> Resolution {
    let directives = field.directives();
    let (override_semantic, override_widget) = directives
        .type_override
        .as_ref()
        .map(|o| (o.semantic, o.widget))
        .unwrap_or((SemanticType::Unknown, WidgetKind::Unknown));

    let semantic = if !override_semantic.is_unknown() {
        override_semantic
    } else {
        semantic_from_declaration(owner, field)
    };

    let widget = if !override_widget.is_unknown() {
        override_widget
    } else {
        catalog::widget_for(semantic)
    };

    Resolution { semantic, widget }
}

fn semantic_from_declaration(owner: &str, field: &FieldDeclaration) -> SemanticType {
    let declared = field.declared_type();

    if let Some(semantic) = SemanticType::from_type_name(declared) {
        let length = field
            .directives()
            .column
            .map(|c| c.length)
            .unwrap_or(DEFAULT_COLUMN_LENGTH);
        if semantic == SemanticType::String && length > DEFAULT_COLUMN_LENGTH {
            return SemanticType::Text;
        }
        return semantic;
    }

    if let Some(semantic) = catalog::primitive_alias(declared) {
        return semantic;
    }
    if field.directives().enumerated {
        return SemanticType::Enum;
    }
    if field.directives().many_to_one {
        return SemanticType::Object;
    }

    warn!(
        owner,
        field = field.name(),
        declared_type = declared,
        "unable to classify field type"
    );
    SemanticType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::domain_type::{ColumnConstraints, TypeOverride};
    use std::io;
    use std::sync::{Arc, Mutex};

    fn resolve(field: FieldDeclaration) -> Resolution {
        resolve_field("Person", &field)
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Resolve `field` and return whatever was logged at `WARN` or above.
    fn resolve_logged(field: FieldDeclaration) -> (Resolution, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        let resolution = tracing::subscriber::with_default(subscriber, || resolve(field));
        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (resolution, logged)
    }

    #[test]
    fn literal_type_names_resolve_to_themselves() {
        for semantic in SemanticType::ALL {
            if semantic.is_unknown() {
                continue;
            }
            let r = resolve(FieldDeclaration::new("f", semantic.as_str()));
            assert_eq!(r.semantic, semantic);
        }
    }

    #[test]
    fn long_strings_become_text() {
        let r = resolve(FieldDeclaration::new("bio", "String").column(ColumnConstraints {
            length: 500,
            ..ColumnConstraints::default()
        }));
        assert_eq!(r.semantic, SemanticType::Text);
        assert_eq!(r.widget, WidgetKind::TextArea);

        let r = resolve(FieldDeclaration::new("bio", "String").column(ColumnConstraints {
            length: 255,
            ..ColumnConstraints::default()
        }));
        assert_eq!(r.semantic, SemanticType::String);
    }

    #[test]
    fn column_length_only_upgrades_strings() {
        let r = resolve(FieldDeclaration::new("n", "Long").column(ColumnConstraints {
            length: 1000,
            ..ColumnConstraints::default()
        }));
        assert_eq!(r.semantic, SemanticType::Long);
    }

    #[test]
    fn primitive_aliases() {
        assert_eq!(resolve(FieldDeclaration::new("a", "int")).semantic, SemanticType::Integer);
        assert_eq!(resolve(FieldDeclaration::new("a", "long")).semantic, SemanticType::Long);
        assert_eq!(resolve(FieldDeclaration::new("a", "double")).semantic, SemanticType::Double);
        let r = resolve(FieldDeclaration::new("a", "boolean"));
        assert_eq!(r.semantic, SemanticType::Boolean);
        assert_eq!(r.widget, WidgetKind::CheckBox);
    }

    #[test]
    fn hints_classify_unrecognised_types() {
        let r = resolve(FieldDeclaration::new("gender", "Gender").enumerated());
        assert_eq!(r.semantic, SemanticType::Enum);
        assert_eq!(r.widget, WidgetKind::DropDownChoice);

        let r = resolve(FieldDeclaration::new("company", "Company").many_to_one());
        assert_eq!(r.semantic, SemanticType::Object);
        assert_eq!(r.widget, WidgetKind::DropDownChoice);
    }

    #[test]
    fn enumeration_hint_beats_relationship_hint() {
        let r = resolve(
            FieldDeclaration::new("x", "X")
                .enumerated()
                .many_to_one(),
        );
        assert_eq!(r.semantic, SemanticType::Enum);
    }

    #[test]
    fn unrecognised_types_degrade_to_unknown() {
        let r = resolve(FieldDeclaration::new("blob", "byte[]"));
        assert_eq!(r.semantic, SemanticType::Unknown);
        assert_eq!(r.widget, WidgetKind::Unknown);
    }

    #[test]
    fn unknown_types_are_reported_with_owner_and_field() {
        let (r, logged) = resolve_logged(FieldDeclaration::new("blob", "byte[]"));
        assert_eq!(r.semantic, SemanticType::Unknown);
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("unable to classify field type"), "{logged}");
        assert!(logged.contains("Person"), "{logged}");
        assert!(logged.contains("blob"), "{logged}");
        assert!(logged.contains("byte[]"), "{logged}");
    }

    #[test]
    fn resolved_types_log_nothing() {
        let (_, logged) = resolve_logged(FieldDeclaration::new("name", "String"));
        assert!(logged.is_empty(), "{logged}");

        let (_, logged) = resolve_logged(FieldDeclaration::new("gender", "Gender").enumerated());
        assert!(logged.is_empty(), "{logged}");
    }

    #[test]
    fn overrides_always_win() {
        let r = resolve(
            FieldDeclaration::new("secret", "String").type_override(TypeOverride {
                semantic: SemanticType::String,
                widget: WidgetKind::PasswordTextField,
                ..TypeOverride::default()
            }),
        );
        assert_eq!(r.semantic, SemanticType::String);
        assert_eq!(r.widget, WidgetKind::PasswordTextField);

        // semantic override beats the column-length upgrade
        let r = resolve(
            FieldDeclaration::new("bio", "String")
                .column(ColumnConstraints {
                    length: 4000,
                    ..ColumnConstraints::default()
                })
                .type_override(TypeOverride {
                    semantic: SemanticType::String,
                    ..TypeOverride::default()
                }),
        );
        assert_eq!(r.semantic, SemanticType::String);
        assert_eq!(r.widget, WidgetKind::TextField);
    }

    #[test]
    fn widget_override_applies_without_semantic_override() {
        let r = resolve(
            FieldDeclaration::new("roles", "Set").type_override(TypeOverride {
                widget: WidgetKind::CheckBoxMultipleChoice,
                ..TypeOverride::default()
            }),
        );
        assert_eq!(r.semantic, SemanticType::Set);
        assert_eq!(r.widget, WidgetKind::CheckBoxMultipleChoice);
    }

    #[test]
    fn semantic_override_picks_default_widget() {
        let r = resolve(
            FieldDeclaration::new("attachment", "byte[]").type_override(TypeOverride {
                semantic: SemanticType::File,
                ..TypeOverride::default()
            }),
        );
        assert_eq!(r.semantic, SemanticType::File);
        assert_eq!(r.widget, WidgetKind::FileUploadField);
    }
}
