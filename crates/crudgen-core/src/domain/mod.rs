// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudgen.
//!
//! This module contains the generator's pure logic: type resolution, field
//! selection, resource keys, properties content and artifact naming. All I/O
//! and template evaluation is handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Descriptors are built once and never mutated
//! - **Diagnostics only**: resolution reports degradations as `tracing` events
//!
// Public API - what the world sees
pub mod artifact;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod properties;
pub mod resolution;
pub mod resource_key;
pub mod selection;
pub mod value_objects;

// Re-exports for convenience
pub use artifact::{ArtifactKind, GENERATION_ORDER, artifact_path};
pub use entities::{
    context::GenerationContext,
    domain_type::{
        ColumnConstraints, DomainType, FieldDeclaration, FieldDirectives, SkipDirective,
        TypeDirectives, TypeOverride,
    },
    field_descriptor::FieldDescriptor,
    template_id::TemplateId,
};
pub use error::DomainError;
pub use properties::{MergedProperties, common_properties, type_properties};
pub use resolution::{Resolution, resolve_field};
pub use resource_key::ResourceKey;
pub use selection::select_fields;
pub use value_objects::{SemanticType, ViewMode, WidgetKind};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Scenario Tests
    // ========================================================================

    #[test]
    fn enumeration_hint_on_unrecognised_type() {
        let order = DomainType::new("Order")
            .with_package("com.shop")
            .with_field(
                FieldDeclaration::new("status", "OrderStatus")
                    .qualified("com.shop.OrderStatus")
                    .enumerated(),
            );

        let fields = select_fields(&order, ViewMode::Edit, false);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].semantic_type(), SemanticType::Enum);
        assert_eq!(fields[0].widget_kind(), WidgetKind::DropDownChoice);
        assert_eq!(fields[0].generics(), "<OrderStatus>");
        assert!(fields[0].is_enumeration());
    }

    #[test]
    fn edit_and_view_lists_are_subsets_of_declared_fields() {
        let t = DomainType::new("T")
            .with_field(FieldDeclaration::new("a", "String").skip(true, false))
            .with_field(FieldDeclaration::new("b", "int").set_transient(true))
            .with_field(FieldDeclaration::new("c", "Date").order(3));

        for mode in [ViewMode::Edit, ViewMode::View] {
            for ignore in [false, true] {
                for d in select_fields(&t, mode, ignore) {
                    assert!(t.fields().iter().any(|f| f.name() == d.name()));
                    assert_ne!(d.name(), "b");
                }
            }
        }
    }

    #[test]
    fn every_descriptor_has_a_resolved_pair() {
        let t = DomainType::new("T")
            .with_field(FieldDeclaration::new("x", "Mystery"))
            .with_field(FieldDeclaration::new("y", "BigDecimal"));

        let fields = select_fields(&t, ViewMode::View, false);
        assert_eq!(fields[0].semantic_type(), SemanticType::Unknown);
        assert_eq!(fields[0].widget_kind(), WidgetKind::Unknown);
        assert_eq!(fields[1].semantic_type(), SemanticType::BigDecimal);
        assert_eq!(fields[1].widget_kind(), WidgetKind::TextField);
    }
}
