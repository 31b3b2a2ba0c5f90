//! Field selection and ordering.
//!
//! Every call recomputes the list from the domain type; nothing is cached.

use std::cmp::Ordering;

use crate::domain::{
    entities::{
        domain_type::{DomainType, FieldDeclaration},
        field_descriptor::FieldDescriptor,
    },
    value_objects::ViewMode,
};

/// Select, resolve and order the fields of `domain` for `mode`.
///
/// Static and transient fields are always dropped. When any remaining field
/// carries an include directive only those fields are kept and skip
/// directives are not consulted. Otherwise skip directives drop fields for
/// the current mode unless `ignore_skip` is set.
pub fn select_fields(domain: &DomainType, mode: ViewMode, ignore_skip: bool) -> Vec<FieldDescriptor> {
    let candidates: Vec<&FieldDeclaration> = domain
        .fields()
        .iter()
        .filter(|f| !f.is_static() && !f.is_transient())
        .collect();

    let allow_list = candidates.iter().any(|f| f.directives().include);

    let mut selected: Vec<FieldDescriptor> = candidates
        .into_iter()
        .filter(|f| {
            if allow_list {
                f.directives().include
            } else {
                ignore_skip || !skipped(f, mode)
            }
        })
        .map(|f| FieldDescriptor::resolve(domain, f))
        .collect();

    // sort_by is stable: unordered fields keep declaration order
    selected.sort_by(|a, b| compare_order(a.order(), b.order()));
    selected
}

fn skipped(field: &FieldDeclaration, mode: ViewMode) -> bool {
    match field.directives().skip {
        Some(skip) => match mode {
            ViewMode::View => !skip.include_in_view,
            ViewMode::Edit => !skip.include_in_edit,
        },
        None => false,
    }
}

/// Ordered fields ascending, unordered after all ordered, unordered equal.
pub fn compare_order(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
